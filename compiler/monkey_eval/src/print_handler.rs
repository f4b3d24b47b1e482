//! Destination for `puts` output.
//!
//! The CLI prints to stdout; tests capture into a buffer and assert on it.
//! Enum dispatch keeps the call static on the `puts` path.

use std::sync::Arc;

use parking_lot::Mutex;

/// Where printed lines go.
pub enum PrintHandlerImpl {
    /// Writes to stdout.
    Stdout,
    /// Captures into a buffer.
    Buffer(Mutex<String>),
    /// Discards everything.
    Silent,
}

impl PrintHandlerImpl {
    /// Print a line (with newline).
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout => println!("{msg}"),
            Self::Buffer(buffer) => {
                let mut buf = buffer.lock();
                buf.push_str(msg);
                buf.push('\n');
            }
            Self::Silent => {}
        }
    }

    /// Everything captured so far. Empty for handlers that don't capture.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(buffer) => buffer.lock().clone(),
            Self::Stdout | Self::Silent => String::new(),
        }
    }
}

/// Print handler shared between an interpreter and whoever reads its output.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout)
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(Mutex::new(String::new())))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_captures_lines() {
        let handler = buffer_handler();
        handler.println("hello");
        handler.println("world");
        assert_eq!(handler.get_output(), "hello\nworld\n");
    }

    #[test]
    fn silent_captures_nothing() {
        let handler = silent_handler();
        handler.println("dropped");
        assert_eq!(handler.get_output(), "");
    }
}
