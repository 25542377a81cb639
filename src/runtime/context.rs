use std::io;

use crate::console::Console;
use crate::error::NoValue;
use crate::state::Memory;

/// Borrowed per-operation context threaded through handlers and the resolver.
///
/// `memory` is a shared borrow: nothing below the top-level loop can write it.
/// `depth` counts how many nested operations enclose the current one.
pub struct CalcContext<'a, C: Console> {
    pub console: &'a mut C,
    pub memory: &'a Memory,
    max_depth: usize,
    depth: usize,
}

impl<'a, C: Console> CalcContext<'a, C> {
    pub fn new(console: &'a mut C, memory: &'a Memory, max_depth: usize) -> Self {
        Self {
            console,
            memory,
            max_depth,
            depth: 0,
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn can_nest(&self) -> bool {
        self.depth < self.max_depth
    }

    /// Runs `f` one nesting level deeper.
    pub fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        self.depth += 1;
        let out = f(self);
        self.depth -= 1;
        out
    }

    /// Next token without touching the rest of its line.
    pub fn next_token(&mut self) -> Result<String, NoValue> {
        self.ensure_output()?;
        let read = self.console.next_token();
        self.unwrap_read(read)
    }

    /// Next token, discarding the rest of its line.
    pub fn read_line_token(&mut self) -> Result<String, NoValue> {
        self.ensure_output()?;
        let read = self.console.read_line_token();
        self.unwrap_read(read)
    }

    pub fn report_error(&mut self, text: &str) {
        self.console.emit_error(text);
    }

    /// Nobody can see a prompt once the output side has failed.
    fn ensure_output(&self) -> Result<(), NoValue> {
        match self.console.output_error() {
            Some(_) => Err(NoValue::OutputClosed),
            None => Ok(()),
        }
    }

    fn unwrap_read(&mut self, read: io::Result<Option<String>>) -> Result<String, NoValue> {
        match read {
            Ok(Some(token)) => Ok(token),
            Ok(None) => Err(NoValue::EndOfInput),
            // The offending line is already consumed, so reading can go on.
            Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                self.report_error(&format!("Invalid input format: {err}"));
                Err(NoValue::InvalidInput(String::new()))
            }
            // Any other stdin failure does not recover; end the session like EOF.
            Err(err) => {
                self.report_error(&format!("Invalid input format: {err}"));
                Err(NoValue::EndOfInput)
            }
        }
    }
}
