//! Simple interactive CLI mode
//!
//! Line-oriented prompt: two words solve a ladder, one word lists its neighbors.

use super::neighbors::list_neighbors;
use crate::error::Result;
use crate::index::Language;
use crate::solver::{ChangelingProblem, TieBreak};
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Commands:
  START TARGET   find the shortest ladder between two words
  WORD           list the neighbors of a word
  help           show this message
  quit           exit";

/// Run the interactive mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<T: TieBreak + Copy>(language: &Language, tie_break: T) -> Result<()> {
    let mut stdout = io::stdout();
    writeln!(stdout, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(stdout, "║             Changelings Solver - Interactive Mode            ║")?;
    writeln!(stdout, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(stdout, "{} words indexed.\n{HELP}\n", language.len())?;

    let stdin = io::stdin();
    run_session(language, tie_break, stdin.lock(), &mut stdout)?;
    Ok(())
}

/// Process commands from `input` until `quit` or end of input
///
/// Returns the number of queries answered.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails. A start/target
/// length mismatch is reported to `output` and the session continues.
pub fn run_session<T, R, W>(
    language: &Language,
    tie_break: T,
    input: R,
    output: &mut W,
) -> Result<usize>
where
    T: TieBreak + Copy,
    R: BufRead,
    W: Write,
{
    let mut answered = 0;
    write!(output, "> ")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        let words: Vec<&str> = line.split_whitespace().collect();

        match words.as_slice() {
            [] => {}
            ["quit" | "exit" | "q"] => break,
            ["help" | "?"] => writeln!(output, "{HELP}")?,
            [word] => {
                let report = list_neighbors(word, language);
                if report.neighbors.is_empty() {
                    writeln!(output, "{word}: no neighbors")?;
                } else {
                    writeln!(output, "{word}: {}", report.neighbors.join(" "))?;
                }
                answered += 1;
            }
            [start, target] => {
                match ChangelingProblem::new(language, start, target) {
                    Ok(problem) => match problem.with_tie_break(tie_break).solve() {
                        Some(ladder) => {
                            writeln!(output, "{ladder} ({} steps)", ladder.steps())?;
                        }
                        None => writeln!(output, "no ladder from {start} to {target}")?,
                    },
                    Err(e) => writeln!(output, "error: {e}")?,
                }
                answered += 1;
            }
            _ => writeln!(output, "expected one or two words; type 'help'")?,
        }

        write!(output, "> ")?;
        output.flush()?;
    }

    writeln!(output)?;
    Ok(answered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::HammingTieBreak;

    fn session(input: &str) -> (usize, String) {
        let language = Language::new(["cat", "cot", "cog", "dog"]);
        let mut output = Vec::new();
        let answered =
            run_session(&language, HammingTieBreak, input.as_bytes(), &mut output).unwrap();
        (answered, String::from_utf8(output).unwrap())
    }

    #[test]
    fn solves_pairs() {
        let (answered, output) = session("cat dog\n");
        assert_eq!(answered, 1);
        assert!(output.contains("cat -> cot -> cog -> dog (3 steps)"));
    }

    #[test]
    fn lists_neighbors_for_single_word() {
        let (_, output) = session("cot\n");
        assert!(output.contains("cot: cat cog"));
    }

    #[test]
    fn reports_missing_ladder() {
        let (_, output) = session("cat cut\n");
        assert!(output.contains("no ladder from cat to cut"));
    }

    #[test]
    fn reports_length_mismatch_and_continues() {
        let (answered, output) = session("cat dogs\ncat cot\n");
        assert_eq!(answered, 2);
        assert!(output.contains("error: start word 'cat' has 3 letters"));
        assert!(output.contains("cat -> cot (1 steps)"));
    }

    #[test]
    fn stops_at_quit() {
        let (answered, output) = session("quit\ncat dog\n");
        assert_eq!(answered, 0);
        assert!(!output.contains("->"));
    }

    #[test]
    fn ignores_blank_lines_and_rejects_extra_words() {
        let (answered, output) = session("\n   \na b c\n");
        assert_eq!(answered, 0);
        assert!(output.contains("expected one or two words"));
    }
}
