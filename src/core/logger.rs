//! Main logger implementation

use super::log_level::LogLevel;
use colored::Colorize;
use std::fmt;
use std::io::{self, Write};

/// A leveled console logger.
///
/// A `Logger` carries an optional component name, fixed at construction, and
/// renders one line per call to standard output:
///
/// ```text
/// <COLOR><LEVEL><RESET>: [<name>] <message> <value1> <value2> ...
/// ```
///
/// The `[<name>] ` segment is omitted for an anonymous logger, and each
/// trailing value is separated from the previous token by exactly one space.
/// Only the severity label is colorized.
///
/// # Example
/// ```
/// use console_logger::prelude::*;
///
/// let logger = Logger::with_name("db");
/// logger.error("connection failed", &[&"retry=3"]);
/// logger.info("ready", &[]);
/// ```
pub struct Logger {
    name: Option<String>,
    use_colors: bool,
}

impl Logger {
    /// Create an anonymous logger.
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: None,
            use_colors: true,
        }
    }

    /// Create a logger speaking for the named component.
    #[must_use]
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            use_colors: true,
        }
    }

    /// Enable or disable ANSI colors on the severity label.
    ///
    /// With colors off the label is written bare; the rest of the line is
    /// unchanged.
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// The component name, if one was supplied at construction.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Render one line without emitting it.
    pub fn format_line(
        &self,
        level: LogLevel,
        message: impl fmt::Display,
        values: &[&dyn fmt::Display],
    ) -> String {
        let label = if self.use_colors {
            level.to_str().color(level.color_code()).to_string()
        } else {
            level.to_str().to_string()
        };

        let name_part = self
            .name
            .as_ref()
            .map(|n| format!("[{}] ", n))
            .unwrap_or_default();

        let line = format!("{label}: {name_part}{message}");

        if values.is_empty() {
            line
        } else {
            let joined = values
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            format!("{line} {joined}")
        }
    }

    /// Format and write one line to standard output.
    ///
    /// The write and flush happen under a single stdout lock so a line is
    /// not interleaved with output from other threads. Write errors are
    /// discarded; the console is assumed best-effort.
    pub fn log(&self, level: LogLevel, message: impl fmt::Display, values: &[&dyn fmt::Display]) {
        let line = self.format_line(level, message, values);

        let mut out = io::stdout().lock();
        let _ = writeln!(out, "{line}");
        let _ = out.flush();
    }

    #[inline]
    pub fn debug(&self, message: impl fmt::Display, values: &[&dyn fmt::Display]) {
        self.log(LogLevel::Debug, message, values);
    }

    #[inline]
    pub fn info(&self, message: impl fmt::Display, values: &[&dyn fmt::Display]) {
        self.log(LogLevel::Info, message, values);
    }

    #[inline]
    pub fn warning(&self, message: impl fmt::Display, values: &[&dyn fmt::Display]) {
        self.log(LogLevel::Warning, message, values);
    }

    #[inline]
    pub fn error(&self, message: impl fmt::Display, values: &[&dyn fmt::Display]) {
        self.log(LogLevel::Error, message, values);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
