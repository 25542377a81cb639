mod scripted;
mod stdio;

pub use scripted::ScriptedConsole;
pub use stdio::StdioConsole;

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Token-oriented terminal seam used by the menus, handlers and resolver.
pub trait Console {
    /// Writes `text` as-is; prompts rely on this not adding a newline.
    fn emit(&mut self, text: &str);

    fn emit_line(&mut self, text: &str) {
        self.emit(text);
        self.emit("\n");
    }

    fn emit_error(&mut self, text: &str) {
        self.emit_line(text);
    }

    /// Next whitespace-delimited token, or `None` once input is exhausted.
    fn next_token(&mut self) -> io::Result<Option<String>>;

    /// Drops whatever is left on the line the last token came from.
    fn discard_line(&mut self);

    /// First write failure seen on the output side, if any.
    fn output_error(&self) -> Option<&io::Error> {
        None
    }

    /// Reads one token and discards the rest of its line.
    fn read_line_token(&mut self) -> io::Result<Option<String>> {
        let token = self.next_token()?;
        self.discard_line();
        Ok(token)
    }
}

/// Splits a line-oriented reader into tokens, skipping blank lines.
///
/// Lines are decoded lossily, so a line of invalid UTF-8 becomes an ordinary
/// unparseable token instead of a read error.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = Vec::new();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                String::from_utf8_lossy(&line)
                    .split_whitespace()
                    .map(str::to_string),
            );
        }
    }

    pub fn discard_line(&mut self) {
        self.pending.clear();
    }
}
