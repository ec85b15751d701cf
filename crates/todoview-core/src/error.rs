//! Refresh failure types and the messages shown to the user.

use crate::normalizer::JsonKind;
use thiserror::Error;

/// The parsed payload matched neither accepted top-level shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// Neither an array nor an object with a `todos` key.
    #[error("Expected a list of todos, found {0}")]
    TopLevel(JsonKind),
    /// An object with a `todos` key whose value is not an array.
    #[error("Expected a list of todos under \"todos\", found {0}")]
    TodosField(JsonKind),
}

/// Everything that can abort a single refresh. None of these are retried;
/// the message is shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RefreshError {
    #[error("Connection error: {0}")]
    Transport(String),
    #[error("HTTP error: {status} {reason}")]
    HttpStatus { status: u16, reason: String },
    #[error("Invalid JSON response: {0}")]
    Decode(String),
    #[error(transparent)]
    Shape(#[from] ShapeError),
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl RefreshError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected(message.into())
    }

    /// Short machine-friendly label, used as a tracing field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::HttpStatus { .. } => "http_status",
            Self::Decode(_) => "decode",
            Self::Shape(_) => "shape",
            Self::Unexpected(_) => "unexpected",
        }
    }
}

pub type RefreshResult<T> = Result<T, RefreshError>;

impl From<serde_json::Error> for RefreshError {
    fn from(value: serde_json::Error) -> Self {
        RefreshError::decode(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(
            RefreshError::HttpStatus { status: 404, reason: "Not Found".into() }.to_string(),
            "HTTP error: 404 Not Found"
        );
        assert_eq!(
            RefreshError::transport("connection refused").to_string(),
            "Connection error: connection refused"
        );
        assert_eq!(
            RefreshError::from(ShapeError::TopLevel(JsonKind::Number)).to_string(),
            "Expected a list of todos, found number"
        );
    }

    #[test]
    fn json_errors_become_decode() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let refresh = RefreshError::from(err);
        assert_eq!(refresh.kind(), "decode");
        assert!(refresh.to_string().starts_with("Invalid JSON response: "));
    }
}
