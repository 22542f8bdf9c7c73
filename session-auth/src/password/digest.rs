use sha2::Digest;
use sha2::Sha256;

use super::errors::PasswordError;
use super::PasswordHasher;

/// Deterministic SHA-256 digest scheme used by the demo user seed.
///
/// Produces a lowercase hex digest of the plaintext. Deterministic by
/// design so seed passwords can be hashed at startup and compared as
/// strings. Cryptographically weak for password storage (fast, unsalted);
/// swap in [`Argon2Hasher`](super::Argon2Hasher) for anything beyond
/// demo use.
///
/// Verification is plain string equality of two digests, not a
/// constant-time comparison. That is a known timing side channel
/// inherited from the demo it reproduces.
pub struct Sha256Hasher;

impl Sha256Hasher {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for Sha256Hasher {
    fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let mut hasher = Sha256::new();
        hasher.update(password.as_bytes());
        Ok(hex::encode(hasher.finalize()))
    }

    fn verify(&self, password: &str, stored_hash: &str) -> Result<bool, PasswordError> {
        Ok(self.hash(password)? == stored_hash)
    }
}

impl Default for Sha256Hasher {
    fn default() -> Self {
        Self::new()
    }
}
