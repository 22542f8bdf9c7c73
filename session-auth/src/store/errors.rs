use thiserror::Error;

/// Error type for credential store operations.
///
/// The in-memory store never fails; the variant exists so that
/// implementations backed by external storage can surface I/O faults
/// without changing the `UserStore` contract. Absence of a record is
/// a normal `Ok(None)` outcome, never an error.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("User lookup failed: {0}")]
    LookupFailed(String),
}
