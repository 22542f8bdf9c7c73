use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::SessionClaims;
use super::errors::TokenError;
use crate::store::User;

/// Signed session token codec.
///
/// Issues and verifies compact HS256 tokens carrying [`SessionClaims`].
/// Both operations are pure transforms over the process-wide shared
/// secret; nothing is stored server-side, so rotating the secret
/// invalidates every outstanding token at once.
///
/// Expiration is checked with zero leeway: a token is still accepted at
/// the exact expiration instant and rejected strictly after it. The
/// comparison uses the verifier's clock, so skew between instances in a
/// multi-instance deployment shortens or stretches the effective window
/// rather than being absorbed by leeway.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    validity: Duration,
}

impl TokenCodec {
    /// Create a codec over a shared secret.
    ///
    /// # Arguments
    /// * `secret` - Symmetric signing key, loaded once at startup
    /// * `validity_hours` - Validity window applied to every issued token
    pub fn new(secret: &[u8], validity_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            validity: Duration::hours(validity_hours),
        }
    }

    /// Validity window applied to issued tokens.
    pub fn validity(&self) -> Duration {
        self.validity
    }

    /// Issue a signed session token for a user record.
    ///
    /// Claims are built from the record: subject = id, email, legacy
    /// role/groups, `iat` = now, `exp` = now + validity window.
    ///
    /// # Errors
    /// * `EncodingFailed` - Claims serialization or signing failed
    pub fn issue(&self, user: &User) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = SessionClaims {
            sub: user.id.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
            groups: user.groups.clone(),
            iat: now.timestamp(),
            exp: (now + self.validity).timestamp(),
        };

        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify a session token and decode its claims.
    ///
    /// # Errors
    /// * `Expired` - The validity window has elapsed
    /// * `Invalid` - Signature mismatch or malformed structure
    pub fn verify(&self, token: &str) -> Result<SessionClaims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        let token_data =
            decode::<SessionClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::Invalid(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}
