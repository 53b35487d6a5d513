//! Error handling for the assistant service envelope
//!
//! The renderer itself never fails. These errors describe what can go wrong
//! around it when content comes back from the AI backend, so every failure can
//! be shown to the user as a readable message.

use std::fmt;

/// Service error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The request never completed (connection refused, timeout, ...)
    Transport { message: String },
    /// The backend answered with a non-success HTTP status
    Status { code: u16, message: Option<String> },
    /// The request succeeded but carried no usable content
    EmptyResponse { operation: String },
    /// The content did not have the expected shape
    MalformedResponse {
        message: String,
        detail: Option<String>,
    },
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Transport { message } => {
                write!(f, "Could not reach the assistant: {}", message)
            }
            ServiceError::Status { code, message } => {
                if let Some(msg) = message {
                    write!(f, "The assistant returned status {}: {}", code, msg)
                } else {
                    write!(f, "The assistant returned status {}", code)
                }
            }
            ServiceError::EmptyResponse { operation } => {
                write!(f, "The assistant returned no content for {}", operation)
            }
            ServiceError::MalformedResponse { message, detail } => {
                if let Some(detail) = detail {
                    write!(f, "Unexpected response: {} ({})", message, detail)
                } else {
                    write!(f, "Unexpected response: {}", message)
                }
            }
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        ServiceError::MalformedResponse {
            message: "response is not valid JSON".to_string(),
            detail: Some(err.to_string()),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

// Convenience constructors for errors
impl ServiceError {
    pub fn transport(message: impl Into<String>) -> Self {
        ServiceError::Transport {
            message: message.into(),
        }
    }

    pub fn status(code: u16) -> Self {
        ServiceError::Status {
            code,
            message: None,
        }
    }

    pub fn status_with_message(code: u16, message: impl Into<String>) -> Self {
        ServiceError::Status {
            code,
            message: Some(message.into()),
        }
    }

    pub fn empty(operation: impl Into<String>) -> Self {
        ServiceError::EmptyResponse {
            operation: operation.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        ServiceError::MalformedResponse {
            message: message.into(),
            detail: None,
        }
    }
}
