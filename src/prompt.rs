//! Interactive collection of dice rolls.
//!
//! Malformed input is reported and asked for again; only validated
//! [`RollCode`]s leave this module.

use crate::wordlist::{RollCode, DICE_PER_ROLL};
use std::io::{BufRead, ErrorKind, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input closed before {missing} more roll(s) were entered")]
    Closed { missing: usize },
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Reads rolls from `input`, writing prompts to `output`.
pub struct RollPrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> RollPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prompts until `count` valid rolls have been entered.
    pub fn collect(&mut self, count: usize) -> Result<Vec<RollCode>, PromptError> {
        writeln!(
            self.output,
            "Roll {} dice {} times and enter the result after each prompt (press Ctrl+C to stop at any moment):\n",
            DICE_PER_ROLL, count
        )?;

        let mut rolls = Vec::with_capacity(count);
        let mut line = String::new();
        let mut rejected = 0usize;

        while rolls.len() < count {
            write!(self.output, "Roll #{}: ", rolls.len() + 1)?;
            self.output.flush()?;

            line.clear();
            match self.input.read_line(&mut line) {
                Ok(0) => {
                    return Err(PromptError::Closed {
                        missing: count - rolls.len(),
                    });
                }
                Ok(_) => {}
                // The undecodable line has been consumed; ask again.
                Err(e) if e.kind() == ErrorKind::InvalidData => {
                    rejected += 1;
                    writeln!(self.output, "Each digit must be between 1 and 6. Please try again")?;
                    continue;
                }
                Err(e) => return Err(e.into()),
            }

            match line.trim().parse::<RollCode>() {
                Ok(code) => rolls.push(code),
                Err(e) => {
                    rejected += 1;
                    writeln!(self.output, "{}. Please try again", capitalize(&e.to_string()))?;
                }
            }
        }

        tracing::debug!(rolls = rolls.len(), rejected, "Collected dice rolls");
        Ok(rolls)
    }

    /// Releases the underlying reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_valid_rolls() {
        let input = "64122\n56666\n";
        let mut prompt = RollPrompt::new(input.as_bytes(), Vec::new());

        let rolls = prompt.collect(2).unwrap();
        assert_eq!(rolls[0].as_str(), "64122");
        assert_eq!(rolls[1].as_str(), "56666");

        let (_, output) = prompt.into_inner();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Roll #1: "));
        assert!(output.contains("Roll #2: "));
    }

    #[test]
    fn test_reprompts_on_bad_input() {
        let input = "1234\n12375\n  25231 \n";
        let mut prompt = RollPrompt::new(input.as_bytes(), Vec::new());

        let rolls = prompt.collect(1).unwrap();
        assert_eq!(rolls[0].as_str(), "25231");

        let (_, output) = prompt.into_inner();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("You must input exactly 5 digits, got 4. Please try again"));
        assert!(output.contains("Each digit must be between 1 and 6"));
        assert_eq!(output.matches("Roll #1: ").count(), 3);
    }

    #[test]
    fn test_reprompts_on_undecodable_line() {
        let mut prompt = RollPrompt::new(&b"\xff\xfe\n64122\n"[..], Vec::new());

        let rolls = prompt.collect(1).unwrap();
        assert_eq!(rolls, ["64122".parse::<RollCode>().unwrap()]);

        let (_, output) = prompt.into_inner();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Each digit must be between 1 and 6. Please try again"));
        assert_eq!(output.matches("Roll #1: ").count(), 2);
    }

    #[test]
    fn test_eof_is_an_error() {
        let mut prompt = RollPrompt::new("11111\n".as_bytes(), Vec::new());
        assert!(matches!(
            prompt.collect(3),
            Err(PromptError::Closed { missing: 2 })
        ));
    }
}
