use std::io::{self, BufRead, Write};

/// Line-oriented operator I/O. Generic so the flows can run against
/// in-memory buffers.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.output, "{}", text.as_ref())
    }

    /// Print `query` without a newline and read one trimmed line.
    /// `None` means input is closed.
    pub fn prompt(&mut self, query: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", query)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
