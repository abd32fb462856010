//! Logging macros for variadic trailing values.
//!
//! The logger methods take trailing values as a `&[&dyn Display]` slice;
//! these macros build that slice, so values of different types can be mixed
//! freely in one call.
//!
//! # Examples
//!
//! ```
//! use console_logger::prelude::*;
//! use console_logger::info;
//!
//! let logger = Logger::with_name("server");
//!
//! // Message only
//! info!(logger, "started");
//!
//! // Message with trailing values of mixed types
//! let port = 8080;
//! info!(logger, "listening", port, "tls=off");
//! ```

/// Log a message at an explicit level, with optional trailing values.
///
/// # Examples
///
/// ```
/// # use console_logger::prelude::*;
/// # let logger = Logger::new();
/// use console_logger::log;
/// log!(logger, LogLevel::Info, "simple message");
/// log!(logger, LogLevel::Error, "request failed", 500, "retrying");
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $msg:expr $(, $value:expr)* $(,)?) => {
        $logger.log($level, $msg, &[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use console_logger::prelude::*;
/// # let logger = Logger::new();
/// use console_logger::debug;
/// debug!(logger, "entering capture loop");
/// debug!(logger, "frame", 42);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $msg:expr $(, $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $msg $(, $value)*)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use console_logger::prelude::*;
/// # let logger = Logger::new();
/// use console_logger::info;
/// info!(logger, "application started");
/// info!(logger, "processed", 100, "items");
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $msg:expr $(, $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Info, $msg $(, $value)*)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use console_logger::prelude::*;
/// # let logger = Logger::new();
/// use console_logger::warning;
/// warning!(logger, "low disk space");
/// warning!(logger, "retry", 3, "of", 5);
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $msg:expr $(, $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $msg $(, $value)*)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use console_logger::prelude::*;
/// # let logger = Logger::new();
/// use console_logger::error;
/// error!(logger, "failed to connect to database");
/// error!(logger, "bad status", 500);
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $msg:expr $(, $value:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Error, $msg $(, $value)*)
    };
}
