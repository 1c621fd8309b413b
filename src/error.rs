use thiserror::Error;

/// Unified error type for git-reltag operations
#[derive(Error, Debug)]
pub enum ReltagError {
    #[error("Invalid semantic version: {0}")]
    InvalidVersionFormat(String),

    #[error("Invalid operation{}: {}", plural_suffix(.names), join_names(.names))]
    InvalidOperations { names: Vec<String> },

    // Causes are rendered inline and not exposed through `source()`.
    #[error("Parsing previous version \"{tag}\" failed with: {cause}")]
    PreviousVersionUnparsable { tag: String, cause: Box<ReltagError> },

    #[error("Operation \"{operation}\" failed with: {cause}")]
    OperationFailed {
        operation: String,
        cause: Box<ReltagError>,
    },

    #[error("Creating tag {tag} failed: {reason}")]
    TagCreationFailed { tag: String, reason: String },

    #[error("Command `{command}` failed: {reason}")]
    ExternalCommandFailed { command: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for Results in git-reltag
pub type Result<T> = std::result::Result<T, ReltagError>;

fn plural_suffix(names: &[String]) -> &'static str {
    if names.len() == 1 {
        ""
    } else {
        "s"
    }
}

fn join_names(names: &[String]) -> String {
    names.join(", ")
}

impl ReltagError {
    /// Create a version format error with context
    pub fn version(msg: impl Into<String>) -> Self {
        ReltagError::InvalidVersionFormat(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReltagError::Config(msg.into())
    }

    /// Create an external command error for the given command line
    pub fn command(command: impl Into<String>, reason: impl Into<String>) -> Self {
        ReltagError::ExternalCommandFailed {
            command: command.into(),
            reason: reason.into(),
        }
    }

    /// Wrap the error raised by an operation together with its literal token
    pub fn operation(token: impl Into<String>, cause: ReltagError) -> Self {
        ReltagError::OperationFailed {
            operation: token.into(),
            cause: Box::new(cause),
        }
    }
}
