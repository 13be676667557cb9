//! Custom error types for cncsend

use std::fmt;

/// Local precondition failures. These never reach the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Payload is empty or only whitespace
    EmptyPayload,
    /// No port is selected
    NoPortSelected,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyPayload => write!(f, "Please enter some text before sending."),
            ValidationError::NoPortSelected => write!(f, "Please select a port before sending."),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Main error type for cncsend operations
#[derive(Debug)]
pub enum ClientError {
    /// Local precondition failure
    Validation(ValidationError),
    /// The request could not complete (connection refused, DNS, I/O)
    Network(String),
    /// The request completed with a non-success status
    Server {
        status: u16,
        /// Server supplied `message` field, if the body carried one
        message: Option<String>,
        /// Server supplied `error` field, if the body carried one
        error: Option<String>,
    },
    /// Configuration errors
    Config(String),
    /// General I/O errors
    Io(std::io::Error),
    /// Response decoding errors
    Serialization(String),
}

impl ClientError {
    pub fn is_validation(&self) -> bool {
        matches!(self, ClientError::Validation(_))
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ClientError::Network(_))
    }

    pub fn is_server(&self) -> bool {
        matches!(self, ClientError::Server { .. })
    }

    /// HTTP status of a server error
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server supplied detail, preferring the `error` field over `message`
    pub fn server_detail(&self) -> Option<&str> {
        match self {
            ClientError::Server { error, message, .. } => {
                error.as_deref().or(message.as_deref())
            }
            _ => None,
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Validation(err) => write!(f, "Validation error: {}", err),
            ClientError::Network(msg) => write!(f, "Network error: {}", msg),
            ClientError::Server { status, .. } => match self.server_detail() {
                Some(detail) => write!(f, "Server error (HTTP {}): {}", status, detail),
                None => write!(f, "Server error (HTTP {})", status),
            },
            ClientError::Config(msg) => write!(f, "Configuration error: {}", msg),
            ClientError::Io(err) => write!(f, "I/O error: {}", err),
            ClientError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Validation(err) => Some(err),
            ClientError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for ClientError {
    fn from(err: ValidationError) -> Self {
        ClientError::Validation(err)
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Serialization(err.to_string())
        } else if let Some(status) = err.status() {
            ClientError::Server {
                status: status.as_u16(),
                message: None,
                error: None,
            }
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::Io(err)
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for ClientError {
    fn from(err: toml::de::Error) -> Self {
        ClientError::Config(err.to_string())
    }
}

/// Result type alias for cncsend operations
pub type Result<T> = std::result::Result<T, ClientError>;
