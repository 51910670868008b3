//! Output of the `print` statement.
//!
//! `print` has no contract beyond emitting one line per statement, so the
//! destination is up to the host:
//! - stdout (default)
//! - a buffer, for hosts and tests that inspect what was printed
//! - nowhere
//!
//! Enum dispatch, no trait objects.

use std::sync::Arc;

use parking_lot::Mutex;

/// Line buffer used by [`PrintHandler::Buffer`].
#[derive(Default)]
pub struct PrintBuffer {
    buffer: Mutex<String>,
}

impl PrintBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    fn println(&self, line: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(line);
        buf.push('\n');
    }

    fn output(&self) -> String {
        self.buffer.lock().clone()
    }

    fn clear(&self) {
        self.buffer.lock().clear();
    }
}

/// Destination of printed lines.
pub enum PrintHandler {
    /// Writes to stdout.
    Stdout,
    /// Captures into a buffer.
    Buffer(PrintBuffer),
    /// Discards everything.
    Silent,
}

impl PrintHandler {
    /// Emit one line (a newline is appended).
    pub fn println(&self, line: &str) {
        match self {
            Self::Stdout => println!("{line}"),
            Self::Buffer(b) => b.println(line),
            Self::Silent => {}
        }
    }

    /// Everything captured so far; empty for handlers that don't capture.
    pub fn output(&self) -> String {
        match self {
            Self::Buffer(b) => b.output(),
            Self::Stdout | Self::Silent => String::new(),
        }
    }

    /// Captured output split into lines.
    pub fn lines(&self) -> Vec<String> {
        self.output().lines().map(str::to_owned).collect()
    }

    pub fn clear(&self) {
        if let Self::Buffer(b) = self {
            b.clear();
        }
    }
}

/// Print handler shared between an evaluator and its host.
pub type SharedPrintHandler = Arc<PrintHandler>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Stdout)
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Buffer(PrintBuffer::new()))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Silent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn buffer_captures_lines() {
        let handler = buffer_handler();
        handler.println("1");
        handler.println("Hi go All");
        assert_eq!(handler.output(), "1\nHi go All\n");
        assert_eq!(handler.lines(), vec!["1", "Hi go All"]);
    }

    #[test]
    fn buffer_clear() {
        let handler = buffer_handler();
        handler.println("x");
        handler.clear();
        assert!(handler.output().is_empty());
    }

    #[test]
    fn silent_discards() {
        let handler = silent_handler();
        handler.println("x");
        assert_eq!(handler.output(), "");
        assert!(handler.lines().is_empty());
    }

    #[test]
    fn stdout_captures_nothing() {
        let handler = stdout_handler();
        handler.clear();
        assert_eq!(handler.output(), "");
    }

    #[test]
    fn shared_handle_sees_same_buffer() {
        let handler = buffer_handler();
        let host_view = Arc::clone(&handler);
        handler.println("3");
        assert_eq!(host_view.lines(), vec!["3"]);
    }
}
