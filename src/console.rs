//! Console prompt and output abstraction.
//!
//! All operator-facing interaction goes through a [`Console`] generic
//! over its reader and writer, so the interactive session can run
//! against the real terminal or against scripted byte input in tests.
//! Diagnostics go through the logger instead and never pass through
//! here.

use std::io::{self, BufRead, Write};

/// A prompt/read/print pair over arbitrary I/O endpoints.
#[derive(Debug)]
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl Console<io::StdinLock<'static>, io::StdoutLock<'static>> {
    /// Bind the console to the process stdin and stdout.
    pub fn stdio() -> Self {
        Console {
            reader: io::stdin().lock(),
            writer: io::stdout().lock(),
        }
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Build a console over explicit endpoints. Tests pass a byte slice
    /// of scripted answers and a `Vec<u8>` transcript buffer.
    pub fn new(reader: R, writer: W) -> Self {
        Console { reader, writer }
    }

    /// Write the prompt without a newline, flush, and read one answer line.
    ///
    /// The trailing line terminator is stripped; any other whitespace in
    /// the answer is preserved as typed. A zero-length read means the
    /// input side is closed, which surfaces as `UnexpectedEof` rather
    /// than an endless stream of empty answers.
    pub fn prompt(&mut self, text: &str) -> io::Result<String> {
        write!(self.writer, "{}", text)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while a prompt was awaiting an answer",
            ));
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Print one line of protocol output.
    pub fn print_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", text)
    }

    /// Consume the console and hand back the writer, so tests can
    /// inspect the transcript.
    pub fn into_writer(self) -> W {
        self.writer
    }
}
