//! Formatting utilities for terminal output

/// Position of the single letter that differs between two rungs
///
/// Returns `None` unless the words have equal length and differ in exactly
/// one position.
#[must_use]
pub fn changed_position(previous: &str, next: &str) -> Option<usize> {
    if previous.chars().count() != next.chars().count() {
        return None;
    }

    let mut differing = previous
        .chars()
        .zip(next.chars())
        .enumerate()
        .filter(|(_, (a, b))| a != b)
        .map(|(i, _)| i);

    match (differing.next(), differing.next()) {
        (Some(position), None) => Some(position),
        _ => None,
    }
}

/// Split a rung around its changed letter
///
/// Returns `(before, letter, after)`; the whole word lands in `before` when no
/// single position changed.
#[must_use]
pub fn split_at_change<'a>(previous: &str, next: &'a str) -> (&'a str, &'a str, &'a str) {
    let Some(position) = changed_position(previous, next) else {
        return (next, "", "");
    };

    let mut boundaries = next.char_indices().map(|(i, _)| i).skip(position);
    let begin = boundaries.next().unwrap_or(next.len());
    let end = boundaries.next().unwrap_or(next.len());
    (&next[..begin], &next[begin..end], &next[end..])
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
