//! Logging capability injected into pipeline components.
//!
//! Components receive a `&dyn Logger` instead of reaching for a global
//! singleton; verbosity is state of the console implementation, not of the
//! process. `NullLogger` serves tests.

use owo_colors::OwoColorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

pub trait Logger {
    fn log(&self, level: LogLevel, message: &str);

    fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }
    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }
    fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }
    fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}

/// Console logger writing to stderr with colored level prefixes.
///
/// `info` lines require `verbose`; `debug` lines require `debug`.
/// Colors are suppressed when `NO_COLOR` is set.
pub struct ConsoleLogger {
    pub verbose: bool,
    pub debug: bool,
}

impl ConsoleLogger {
    fn colors() -> bool {
        std::env::var_os("NO_COLOR").is_none()
    }

    fn prefix(level: LogLevel) -> String {
        let (label, color) = match level {
            LogLevel::Debug => ("⟦debug⟧", false),
            LogLevel::Info => ("⟦info⟧", true),
            LogLevel::Warn => ("⟦warn⟧", true),
            LogLevel::Error => ("⟦error⟧", true),
        };
        if !Self::colors() || !color {
            return label.to_string();
        }
        match level {
            LogLevel::Info => label.blue().bold().to_string(),
            LogLevel::Warn => label.yellow().bold().to_string(),
            LogLevel::Error => label.red().bold().to_string(),
            LogLevel::Debug => label.to_string(),
        }
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Debug if !self.debug => return,
            LogLevel::Info if !self.verbose => return,
            _ => {}
        }
        eprintln!("{} {}", Self::prefix(level), message);
    }
}

/// Discards everything; used by tests.
pub struct NullLogger;

impl Logger for NullLogger {
    fn log(&self, _level: LogLevel, _message: &str) {}
}
