/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.already_exists")]
    AlreadyExists,
}

impl RepositoryError {
    pub fn not_found() -> Self {
        RepositoryError::NotFound
    }
    pub fn already_exists() -> Self {
        RepositoryError::AlreadyExists
    }
}

/// Failures reported by downstream gateways (product catalog, stock and order services).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GatewayError {
    #[error("gateway.not_found")]
    NotFound,
    #[error("gateway.timeout")]
    Timeout,
    /// Non-success status; `message` is whatever the downstream put in its error body.
    #[error("gateway.unexpected_status: {status} {message}")]
    UnexpectedStatus { status: u16, message: String },
    #[error("gateway.transport: {0}")]
    Transport(String),
    #[error("gateway.decode: {0}")]
    Decode(String),
}

impl GatewayError {
    pub fn unexpected_status(status: u16, message: impl Into<String>) -> Self {
        GatewayError::UnexpectedStatus {
            status,
            message: message.into(),
        }
    }
}
