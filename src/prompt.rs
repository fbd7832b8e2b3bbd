//! # Terminal Prompts
//!
//! Interactive questions are asked through the [`Prompt`] trait so that the
//! config loader and the snarf operation can be driven by scripted answers.

use std::io::{self, BufRead, Write};

/// A source of answers to interactive questions.
pub trait Prompt {
    /// Shows `message` and reads one line, without its line terminator.
    fn line(&mut self, message: &str) -> io::Result<String>;

    /// Shows `message` and reads one line without echoing it.
    fn secret(&mut self, message: &str) -> io::Result<String>;

    /// Asks a yes/no question that defaults to no.
    ///
    /// # Returns
    ///
    /// `true` only if the answer is a case-insensitive "y".
    fn confirm(&mut self, message: &str) -> io::Result<bool> {
        Ok(self.line(message)?.eq_ignore_ascii_case("y"))
    }
}

/// Prompts on the process's standard input and output.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn line(&mut self, message: &str) -> io::Result<String> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(message.as_bytes())?;
        stdout.flush()?;

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "standard input closed",
            ));
        }
        Ok(strip_line_ending(answer))
    }

    fn secret(&mut self, message: &str) -> io::Result<String> {
        rpassword::prompt_password(message)
    }
}

fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedPrompt;

    #[test]
    fn test_strip_line_ending() {
        assert_eq!(strip_line_ending("y\n".to_string()), "y");
        assert_eq!(strip_line_ending("y\r\n".to_string()), "y");
        assert_eq!(strip_line_ending(" y ".to_string()), " y ");
    }

    #[test]
    fn test_confirm_accepts_only_y() {
        let mut prompt = ScriptedPrompt::new(["y", "Y", "", "yes", "n", " y"]);
        let answers: Vec<bool> = (0..6)
            .map(|_| prompt.confirm("Overwrite? [y/N] ").unwrap())
            .collect();
        assert_eq!(answers, [true, true, false, false, false, false]);
    }
}
