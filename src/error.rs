// Error types module

use std::fmt;

/// Centralized error type for URL generation
///
/// Categorizes errors into the few conditions this crate can actually
/// produce: configuration problems surfaced at load time, and lookup or
/// validation failures at generation time.
#[derive(Debug, Clone)]
pub enum UrlError {
    /// Configuration errors (invalid YAML, missing env vars, etc.)
    Config(String),

    /// A call site referenced an alias that is not configured
    UnknownAlias(String),

    /// A transformation argument failed to parse
    InvalidArgument { argument: String, message: String },

    /// URL signature did not match
    InvalidSignature,
}

impl fmt::Display for UrlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlError::Config(msg) => write!(f, "Configuration error: {}", msg),
            UrlError::UnknownAlias(name) => write!(f, "Unknown alias: {}", name),
            UrlError::InvalidArgument { argument, message } => {
                write!(f, "Invalid argument '{}': {}", argument, message)
            }
            UrlError::InvalidSignature => write!(f, "Invalid or missing URL signature"),
        }
    }
}

impl std::error::Error for UrlError {}

impl UrlError {
    pub fn invalid_argument(argument: impl Into<String>, message: impl Into<String>) -> Self {
        UrlError::InvalidArgument {
            argument: argument.into(),
            message: message.into(),
        }
    }
}
