use thiserror::Error;

/// Error type for session token operations.
///
/// Verification is binary: a mismatched signature, an unparseable
/// structure, and an elapsed validity window all make the token
/// worthless. Callers above the auth service boundary never see the
/// distinction; it exists for logging.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Failed to encode session token: {0}")]
    EncodingFailed(String),

    #[error("Session token is expired")]
    Expired,

    #[error("Session token is invalid: {0}")]
    Invalid(String),
}
