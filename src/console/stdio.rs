use super::{Console, TokenReader};
use crate::terminal;
use std::io::{self, StdinLock, Stdout, Write};

pub struct StdioConsole {
    input: TokenReader<StdinLock<'static>>,
    output: Stdout,
    write_error: Option<io::Error>,
    color: bool,
}

impl StdioConsole {
    pub fn new(color: bool) -> Self {
        Self {
            input: TokenReader::new(io::stdin().lock()),
            output: io::stdout(),
            write_error: None,
            color,
        }
    }
}

impl Console for StdioConsole {
    fn emit(&mut self, text: &str) {
        if self.write_error.is_some() {
            return;
        }
        let written = self
            .output
            .write_all(text.as_bytes())
            .and_then(|()| self.output.flush());
        if let Err(err) = written {
            self.write_error = Some(err);
        }
    }

    fn emit_error(&mut self, text: &str) {
        let line = terminal::paint_error(text, self.color);
        self.emit_line(&line);
    }

    fn next_token(&mut self) -> io::Result<Option<String>> {
        self.input.next_token()
    }

    fn discard_line(&mut self) {
        self.input.discard_line();
    }

    fn output_error(&self) -> Option<&io::Error> {
        self.write_error.as_ref()
    }
}
