//! Error types for the logger

/// Error returned when a string does not name one of the four log levels.
///
/// Parsing is the only fallible operation in this crate; the logging
/// operations themselves report nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid log level: '{0}'")]
pub struct ParseLevelError(String);

impl ParseLevelError {
    pub(crate) fn new(input: impl Into<String>) -> Self {
        ParseLevelError(input.into())
    }
}
