use std::fmt::{self, Display};

/// Errors produced when parsing sort keys and directions from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    InvalidField(String),
    InvalidDirection(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidField(raw) => write!(f, "invalid sort field: {raw:?}"),
            ModelError::InvalidDirection(raw) => write!(
                f,
                "invalid sort direction: {raw:?} (expected ascending or descending)"
            ),
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
