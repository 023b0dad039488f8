use crate::domain::ports::StatusDisplay;
use std::io::{self, Write};

/// A status region printed as `[<region>] <text>` lines.
pub struct ConsoleStatus<W: Write + Send = io::Stdout> {
    region: String,
    out: W,
}

impl ConsoleStatus {
    /// Creates a status region printing to standard output.
    pub fn stdout(region: &str) -> Self {
        Self::new(region, io::stdout())
    }
}

impl<W: Write + Send> ConsoleStatus<W> {
    /// Creates a status region labelled `region` that writes to `out`.
    pub fn new(region: &str, out: W) -> Self {
        Self {
            region: region.to_string(),
            out,
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> StatusDisplay for ConsoleStatus<W> {
    fn show(&mut self, text: &str) {
        // Best effort: a closed stdout leaves the workflow unaffected.
        let _ = writeln!(self.out, "[{}] {}", self.region, text);
        let _ = self.out.flush();
    }
}
