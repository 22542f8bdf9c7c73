use std::sync::Arc;

use ::cookie::Cookie;
use thiserror::Error;

use crate::cookie::SessionCookie;
use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::store::StoreError;
use crate::store::User;
use crate::store::UserStore;
use crate::store::UserView;
use crate::token::TokenCodec;
use crate::token::TokenError;

/// Session authentication orchestrator.
///
/// Composes the credential store, password hasher, token codec, and
/// cookie manager into the three operations the HTTP layer consumes:
/// login, logout, and current-user resolution. This is the only public
/// contract of the core; everything else is its building blocks.
pub struct SessionService<S, H>
where
    S: UserStore,
    H: PasswordHasher,
{
    store: Arc<S>,
    hasher: H,
    codec: TokenCodec,
    cookie: SessionCookie,
}

/// Successful login outcome.
pub struct Login {
    /// The authenticated user record (hash included; strip at the
    /// serialization boundary).
    pub user: User,
    /// The issued session token.
    pub token: String,
    /// Ready-made set-cookie carrying the token.
    pub cookie: Cookie<'static>,
}

/// Authentication operation errors.
///
/// `InvalidCredentials` is the only variant a failed login produces,
/// regardless of whether the email was unknown or the password wrong.
/// The remaining variants are internal faults; they map to a generic
/// server error, never to "unauthenticated".
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl<S, H> SessionService<S, H>
where
    S: UserStore,
    H: PasswordHasher,
{
    /// Create a session service with injected dependencies.
    pub fn new(store: Arc<S>, hasher: H, codec: TokenCodec, cookie: SessionCookie) -> Self {
        Self {
            store,
            hasher,
            codec,
            cookie,
        }
    }

    /// Authenticate by email and password and open a session.
    ///
    /// Unknown email and wrong password fail identically with
    /// `InvalidCredentials`; callers cannot distinguish the cause.
    /// The digest comparison inside `verify` is not constant time
    /// for the demo scheme.
    ///
    /// # Errors
    /// * `InvalidCredentials` - No stored record matches the pair
    /// * `Password` - Hashing/verification fault (internal)
    /// * `Store` - Lookup fault (internal)
    /// * `Token` - Token issuance fault (internal)
    pub async fn login(&self, email: &str, password: &str) -> Result<Login, AuthError> {
        let user = self
            .store
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self.hasher.verify(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.codec.issue(&user)?;
        let cookie = self.cookie.bearer(&token);

        Ok(Login {
            user,
            token,
            cookie,
        })
    }

    /// Close the session by clearing the session cookie.
    ///
    /// Stateless tokens cannot be revoked server-side; the returned
    /// removal cookie is the whole operation, and it always succeeds.
    pub fn logout(&self) -> Cookie<'static> {
        self.cookie.removal()
    }

    /// Resolve the caller from an inbound request's `Cookie` header.
    ///
    /// Extracts the session cookie, verifies the token, and re-resolves
    /// the full record by subject and email from the store. A missing
    /// cookie, a token that fails verification, and a token referencing
    /// a user no longer in the store all resolve to `Ok(None)`; only a
    /// store fault is an error.
    pub async fn current_user(
        &self,
        cookie_header: Option<&str>,
    ) -> Result<Option<User>, AuthError> {
        let token = match cookie_header.and_then(|header| self.cookie.extract(header)) {
            Some(token) => token,
            None => return Ok(None),
        };

        let claims = match self.codec.verify(&token) {
            Ok(claims) => claims,
            Err(_) => return Ok(None),
        };

        let user = self.store.find_by_id(&claims.sub).await?;

        Ok(user.filter(|u| u.email == claims.email))
    }

    /// List every stored user as a hash-free view.
    pub async fn list_users(&self) -> Result<Vec<UserView>, AuthError> {
        Ok(self.store.list_all().await?)
    }
}
