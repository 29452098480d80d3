//! The console prompt/response boundary.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

/// Line-based console used by the table for every prompt and status line.
///
/// The game blocks on [`Console::ask`]; there is no timeout or cancellation.
/// Tests drive the table by implementing this trait with scripted responses.
pub trait Console {
    /// Prints one status line.
    ///
    /// # Errors
    ///
    /// Returns an error if the output stream fails.
    fn say(&mut self, line: &str) -> io::Result<()>;

    /// Prints a prompt and reads one response line, trimmed and lowercased.
    ///
    /// # Errors
    ///
    /// Returns an error if the input stream fails or is closed.
    fn ask(&mut self, prompt: &str) -> io::Result<String>;

    /// Pauses between beats of play.
    fn pause(&mut self, duration: Duration);
}

/// Console over process stdin/stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn say(&mut self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{line}")
    }

    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        let mut out = io::stdout().lock();
        write!(out, "{prompt}")?;
        out.flush()?;
        drop(out);

        let mut input = String::new();
        let read = io::stdin().lock().read_line(&mut input)?;
        if read == 0 {
            // EOF: re-prompting would spin forever.
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
        }
        Ok(input.trim().to_lowercase())
    }

    fn pause(&mut self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }
}
