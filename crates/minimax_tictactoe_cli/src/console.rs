//! Line-oriented console shared by the game loop and human players.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Text input and output for a session.
///
/// Production wraps locked stdin and stdout; tests drive it with in-memory
/// buffers.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given reader and writer.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes one line.
    pub fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    /// Writes `question` without a newline and reads the trimmed answer.
    ///
    /// Returns `None` once input is exhausted.
    pub fn prompt(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Ok(None);
        }
        Ok(Some(answer.trim().to_string()))
    }

    /// Returns the writer, for inspecting captured output.
    pub fn output(&self) -> &W {
        &self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_reads_trimmed_lines_until_eof() {
        let mut console = Console::new(" 4 \nq\n".as_bytes(), Vec::new());
        assert_eq!(console.prompt("? ").unwrap().as_deref(), Some("4"));
        assert_eq!(console.prompt("? ").unwrap().as_deref(), Some("q"));
        assert_eq!(console.prompt("? ").unwrap(), None);
        assert_eq!(String::from_utf8_lossy(console.output()), "? ? ? ");
    }

    #[test]
    fn test_say_appends_newline() {
        let mut console = Console::new(io::empty(), Vec::new());
        console.say("Tie Game!!").unwrap();
        assert_eq!(console.output().as_slice(), b"Tie Game!!\n");
    }
}
