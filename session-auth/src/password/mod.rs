pub mod argon2;
pub mod digest;
pub mod errors;

pub use argon2::Argon2Hasher;
pub use digest::Sha256Hasher;
pub use errors::PasswordError;

/// Contract for one-way password digests.
///
/// Callers only ever pass plaintext in and compare through `verify`;
/// they never inspect digest bytes. This keeps the scheme replaceable:
/// the demo uses a fast deterministic digest, production would use a
/// slow salted one, and no call site changes.
pub trait PasswordHasher: Send + Sync + 'static {
    /// Digest a plaintext password for storage.
    fn hash(&self, password: &str) -> Result<String, PasswordError>;

    /// Check a plaintext password against a stored digest.
    fn verify(&self, password: &str, stored_hash: &str) -> Result<bool, PasswordError>;
}
