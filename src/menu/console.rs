//! Line-oriented terminal I/O.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Prompt/answer pair over any reader and writer.
///
/// End of input is reported as `None` so callers can treat a closed
/// stdin like the quit sentinel. Bytes that are not UTF-8 are replaced,
/// so a bad line becomes unrecognized input instead of an error.
pub struct Console<'a> {
    input: &'a mut dyn BufRead,
    output: &'a mut dyn Write,
}

impl<'a> Console<'a> {
    pub fn new(input: &'a mut dyn BufRead, output: &'a mut dyn Write) -> Self {
        Self { input, output }
    }

    /// Writes one line.
    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Writes `text` without a newline and reads one line of input.
    pub fn prompt(&mut self, text: impl Display) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            // keep the transcript readable when input ends mid-prompt
            writeln!(self.output)?;
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
