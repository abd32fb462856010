//! # Console Logger
//!
//! A minimal leveled console logger: each call renders a colorized severity
//! tag, an optional component name, a message, and trailing values as one
//! line on standard output.
//!
//! ## Features
//!
//! - **Four severities**: DEBUG, INFO, WARNING, ERROR, each with its own
//!   ANSI color on the tag
//! - **Component names**: a logger optionally speaks for a named subsystem,
//!   shown in brackets
//! - **Trailing values**: any number of `Display` values appended to the line
//! - **Synchronous**: one flushed line per call, nothing buffered
//!
//! ```
//! use console_logger::prelude::*;
//!
//! let logger = Logger::with_name("db");
//! logger.info("connected", &[]);
//! logger.error("connection failed", &[&"retry=3"]);
//! ```

pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::core::{LogLevel, Logger, ParseLevelError};
}

pub use crate::core::{LogLevel, Logger, ParseLevelError};
