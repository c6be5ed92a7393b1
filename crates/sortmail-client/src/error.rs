//! Error taxonomy for the client SDK.
//!
//! `AuthExpired` is special: the transport routes every unauthorized
//! response through the session manager's single invalidation transition,
//! so call sites never implement their own redirect-to-login logic.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Missing or invalid client configuration. Raised before any request
    /// is attempted.
    #[error("configuration error: {0}")]
    Config(String),

    /// The backend could not be reached or answered with a server error.
    /// Retryable, but retries are always user-initiated.
    #[error("service unavailable: {0}")]
    Unavailable(String),

    /// The backend answered 2xx with a body that does not match the
    /// contract.
    #[error("malformed response: {0}")]
    Contract(String),

    /// The session credential was rejected. Already routed through the
    /// session manager by the time the caller sees this.
    #[error("session expired")]
    AuthExpired,

    /// Any other non-2xx response, with the backend's error message.
    #[error("api error ({status}): {message}")]
    Api { status: u16, message: String },
}

/// Failures of the intelligence facade.
#[derive(Debug, Error)]
pub enum IntelError {
    /// The model service is unreachable or failing. Shown as a retry
    /// affordance, never crashes the caller.
    #[error("intelligence service unavailable: {0}")]
    Unavailable(String),

    /// The service answered with a shape we cannot use. Logged and
    /// degraded, never thrown into a render path.
    #[error("intelligence contract violation: {0}")]
    Contract(String),
}

impl From<ClientError> for IntelError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Contract(msg) => IntelError::Contract(msg),
            other => IntelError::Unavailable(other.to_string()),
        }
    }
}
