use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodoError {
    #[error("Todo with id \"{0}\" not found")]
    NotFound(String),

    /// A command was invoked without a required argument.
    #[error("{message}")]
    Usage { message: String, usage: String },

    #[error("Unknown command \"{0}\"")]
    UnknownCommand(String),

    /// The backing data exists but could not be read as a todo collection.
    #[error("Could not load todos from {location}: {reason}")]
    Corrupt { location: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TodoError {
    pub fn usage(message: impl Into<String>, usage: impl Into<String>) -> Self {
        TodoError::Usage {
            message: message.into(),
            usage: usage.into(),
        }
    }

    /// The usage line to print after the error, if the error calls for one.
    pub fn usage_hint(&self) -> Option<&str> {
        match self {
            TodoError::Usage { usage, .. } => Some(usage),
            TodoError::UnknownCommand(_) => Some(crate::SHORT_USAGE),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TodoError>;
