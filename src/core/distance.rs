//! Positional distance between words

/// Count the positions at which two words differ
///
/// Words are compared letter by letter (`char`s, not bytes). If the lengths
/// differ, the extra letters of the longer word each count as a difference,
/// though the search only ever compares equal-length words.
///
/// # Examples
/// ```
/// use changelings::core::hamming_distance;
///
/// assert_eq!(hamming_distance("cat", "cot"), 1);
/// assert_eq!(hamming_distance("cat", "dog"), 3);
/// assert_eq!(hamming_distance("cat", "cat"), 0);
/// ```
#[must_use]
pub fn hamming_distance(a: &str, b: &str) -> usize {
    let mut a = a.chars();
    let mut b = b.chars();
    let mut distance = 0;

    loop {
        match (a.next(), b.next()) {
            (Some(x), Some(y)) => distance += usize::from(x != y),
            (Some(_), None) | (None, Some(_)) => distance += 1,
            (None, None) => return distance,
        }
    }
}

/// True if the words have equal length and differ in exactly one position
#[must_use]
pub fn differs_by_one(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count() && hamming_distance(a, b) == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_words_have_zero_distance() {
        assert_eq!(hamming_distance("ladder", "ladder"), 0);
        assert_eq!(hamming_distance("", ""), 0);
    }

    #[test]
    fn counts_every_differing_position() {
        assert_eq!(hamming_distance("cold", "cord"), 1);
        assert_eq!(hamming_distance("cold", "warm"), 4);
        assert_eq!(hamming_distance("abcd", "abdc"), 2);
    }

    #[test]
    fn length_difference_counts() {
        assert_eq!(hamming_distance("cat", "cats"), 1);
        assert_eq!(hamming_distance("", "ab"), 2);
    }

    #[test]
    fn compares_chars_not_bytes() {
        assert_eq!(hamming_distance("éa", "éb"), 1);
    }

    #[test]
    fn differs_by_one_requires_equal_length() {
        assert!(differs_by_one("cat", "cot"));
        assert!(!differs_by_one("cat", "cat"));
        assert!(!differs_by_one("cat", "cats"));
        assert!(!differs_by_one("cat", "dog"));
    }
}
