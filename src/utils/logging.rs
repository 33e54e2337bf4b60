//! Logging interfaces handed to every persistence operation.
//!
//! The library never touches a global logger directly: callers pass a
//! `&dyn Logger`. [`LogFacade`] forwards to the `log` crate (and so to
//! whatever backend the binary installed), [`MemoryLogger`] keeps lines in
//! memory for inspection.

use std::sync::Mutex;

pub const LOG_TARGET: &str = "persist_kit";

/// Sink for the one-line success events emitted by each operation.
pub trait Logger {
    fn info(&self, msg: &str);
}

/// Forwards events to `log::info!`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogFacade;

impl Logger for LogFacade {
    fn info(&self, msg: &str) {
        log::info!(target: LOG_TARGET, "{}", msg);
    }
}

/// Records events in order.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    lines: Mutex<Vec<String>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Logger for MemoryLogger {
    fn info(&self, msg: &str) {
        let mut lines = match self.lines.lock() {
            Ok(lines) => lines,
            Err(poisoned) => poisoned.into_inner(),
        };
        lines.push(msg.to_string());
    }
}

pub fn print_verbose(verbose: bool, msg: &str) {
    if verbose {
        println!("Verbose: {}", msg);
    }
}

pub fn log_error(msg: &str) {
    eprintln!("Error: {}", msg);
}

pub fn log_hint(msg: &str) {
    eprintln!("Hint: {}", msg);
}

/// Console chatter for the CLI, gated on `--verbose`.
pub struct VerboseLogger {
    enabled: bool,
}

impl VerboseLogger {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn log(&self, msg: &str) {
        print_verbose(self.enabled, msg);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_logger_keeps_order() {
        let logger = MemoryLogger::new();
        assert!(logger.is_empty());
        logger.info("first");
        logger.info("second");
        assert_eq!(logger.lines(), vec!["first", "second"]);
        assert_eq!(logger.len(), 2);
    }

    #[test]
    fn test_logger_through_reference() {
        let logger = MemoryLogger::new();
        let by_ref: &dyn Logger = &logger;
        by_ref.info("via trait object");
        assert_eq!(logger.lines(), vec!["via trait object"]);
    }

    #[test]
    fn test_verbose_logger_flag() {
        assert!(VerboseLogger::new(true).is_enabled());
        assert!(!VerboseLogger::new(false).is_enabled());
    }
}
