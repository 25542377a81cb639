use super::{Console, TokenReader};
use std::io::{self, Cursor};

/// In-memory console that replays a fixed input script and records output.
pub struct ScriptedConsole {
    input: TokenReader<Cursor<Vec<u8>>>,
    transcript: String,
}

impl ScriptedConsole {
    pub fn new(script: &str) -> Self {
        Self::from_bytes(script.as_bytes().to_vec())
    }

    /// Raw input, for scripts that are not valid UTF-8.
    pub fn from_bytes(script: Vec<u8>) -> Self {
        Self {
            input: TokenReader::new(Cursor::new(script)),
            transcript: String::new(),
        }
    }

    /// Builds a script with one entry per input line.
    pub fn from_lines(lines: &[&str]) -> Self {
        let mut script = lines.join("\n");
        script.push('\n');
        Self::new(&script)
    }

    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    pub fn occurrences(&self, needle: &str) -> usize {
        self.transcript.matches(needle).count()
    }
}

impl Console for ScriptedConsole {
    fn emit(&mut self, text: &str) {
        self.transcript.push_str(text);
    }

    fn next_token(&mut self) -> io::Result<Option<String>> {
        self.input.next_token()
    }

    fn discard_line(&mut self) {
        self.input.discard_line();
    }
}
