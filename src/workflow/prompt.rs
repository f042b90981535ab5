// file: src/workflow/prompt.rs
// description: line-oriented console prompts over any reader and writer

use crate::error::Result;
use std::fmt::Display;
use std::io::{BufRead, Write};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Writes without a trailing newline, for "Processing x... Done" style lines.
    pub fn say_inline(&mut self, text: impl Display) -> Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// Trimmed answer, or `None` once the input is exhausted.
    pub fn ask(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    pub fn pause(&mut self) -> Result<()> {
        self.ask("Press Enter to exit...")?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ask_trims_answer() {
        let mut prompter = Prompter::new(Cursor::new("  2 \n"), Vec::new());

        let answer = prompter.ask("Choose: ").unwrap();

        assert_eq!(answer.as_deref(), Some("2"));
        assert_eq!(String::from_utf8(prompter.into_output()).unwrap(), "Choose: ");
    }

    #[test]
    fn test_ask_at_end_of_input() {
        let mut prompter = Prompter::new(Cursor::new(""), Vec::new());
        assert_eq!(prompter.ask("Choose: ").unwrap(), None);
    }

    #[test]
    fn test_blank_line_is_empty_answer() {
        let mut prompter = Prompter::new(Cursor::new("\n"), Vec::new());
        assert_eq!(prompter.ask("? ").unwrap().as_deref(), Some(""));
    }
}
