// src/prompt.rs
// =============================================================================
// Asks the user whether a broken link should be removed.
//
// The question is behind a small trait so the removal session can be driven
// by stdin in the real program and by a canned answer script in tests.
//
// Accepted answers:
//   ""  (just ENTER) or "y"/"Y"  -> remove
//   anything else                -> keep
//   end of input                 -> keep
// =============================================================================

use crate::report::BrokenLinkRecord;
use anyhow::{Context, Result};
use std::io::{self, BufRead, StdinLock, Write};

/// Something that can say yes or no to removing a link
pub trait Confirm {
    fn confirm(&mut self, record: &BrokenLinkRecord) -> Result<bool>;
}

/// True if `answer` means "yes, remove it"
pub fn accepts(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "" | "y")
}

/// Line-based prompt: writes the question to `output`, reads one line from `input`
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<W: Write> LinePrompt<StdinLock<'static>, W> {
    /// Reads answers from stdin and asks the question on `output`
    /// (stdout normally, stderr when stdout is reserved for JSON)
    pub fn terminal(output: W) -> Self {
        Self::new(io::stdin().lock(), output)
    }
}

impl<R: BufRead, W: Write> Confirm for LinePrompt<R, W> {
    fn confirm(&mut self, record: &BrokenLinkRecord) -> Result<bool> {
        write!(
            self.output,
            "\n🗑 Remove {} (Status: {}) from the file? [Y/n]: ",
            record.url, record.outcome
        )?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read answer from input")?;

        if read == 0 {
            return Ok(false);
        }

        Ok(accepts(&line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::Outcome;
    use crate::tree::PathAddress;
    use std::io::Cursor;

    fn record() -> BrokenLinkRecord {
        BrokenLinkRecord {
            url: "https://gone.test".to_string(),
            path: PathAddress::root().child_index(0),
            outcome: Outcome::Status(404),
        }
    }

    #[test]
    fn test_accepts() {
        assert!(accepts(""));
        assert!(accepts("\n"));
        assert!(accepts("y"));
        assert!(accepts("  Y \n"));

        assert!(!accepts("n"));
        assert!(!accepts("yes"));
        assert!(!accepts("no"));
        assert!(!accepts("x"));
    }

    #[test]
    fn test_line_prompt_reads_one_answer_per_question() {
        let mut output = Vec::new();
        let mut prompt = LinePrompt::new(Cursor::new("y\nn\n\n"), &mut output);

        assert!(prompt.confirm(&record()).unwrap());
        assert!(!prompt.confirm(&record()).unwrap());
        assert!(prompt.confirm(&record()).unwrap());
        // Input exhausted
        assert!(!prompt.confirm(&record()).unwrap());

        let shown = String::from_utf8(output).unwrap();
        assert!(shown.contains("Remove https://gone.test (Status: 404) from the file? [Y/n]"));
    }
}
