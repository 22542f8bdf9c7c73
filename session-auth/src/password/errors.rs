use thiserror::Error;

/// Error type for password digest operations.
///
/// Hashing failures indicate misconfiguration and are internal faults;
/// they must never be downgraded to an "unauthenticated" outcome.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Password verification failed: {0}")]
    VerificationFailed(String),
}
