use ::cookie::time::Duration;
use ::cookie::Cookie;

/// Session cookie lifecycle manager.
///
/// Maps a session token to and from the HTTP cookie that carries it.
/// Extraction is a pure function from the raw `Cookie` request header
/// to an optional opaque token string; no signature or validity
/// checking happens here, that is the codec's job.
pub struct SessionCookie {
    name: String,
    max_age_seconds: i64,
    secure: bool,
}

impl SessionCookie {
    /// Create a manager for the named session cookie.
    ///
    /// # Arguments
    /// * `name` - Cookie name, e.g. "session"
    /// * `max_age_seconds` - Cookie lifetime, matching the token validity window
    /// * `secure` - Set the Secure attribute; must be true on HTTPS-only deployments
    pub fn new(name: impl Into<String>, max_age_seconds: i64, secure: bool) -> Self {
        Self {
            name: name.into(),
            max_age_seconds,
            secure,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Build the set-cookie carrying a session token.
    ///
    /// HttpOnly, Path=/, Max-Age = the configured lifetime.
    pub fn bearer(&self, token: &str) -> Cookie<'static> {
        Cookie::build((self.name.clone(), token.to_string()))
            .http_only(true)
            .path("/")
            .max_age(Duration::seconds(self.max_age_seconds))
            .secure(self.secure)
            .build()
    }

    /// Build the clearing cookie: same name, empty value, Max-Age 0.
    ///
    /// Forces immediate client-side expiry.
    pub fn removal(&self) -> Cookie<'static> {
        Cookie::build((self.name.clone(), String::new()))
            .http_only(true)
            .path("/")
            .max_age(Duration::ZERO)
            .secure(self.secure)
            .build()
    }

    /// Extract the session token from a raw `Cookie` header value.
    ///
    /// Returns the value of the first cookie matching the session name,
    /// or `None` when the header carries no such cookie. Unparseable
    /// fragments in the header are skipped, not treated as errors.
    pub fn extract(&self, cookie_header: &str) -> Option<String> {
        Cookie::split_parse(cookie_header.to_string())
            .filter_map(Result::ok)
            .find(|c| c.name() == self.name)
            .map(|c| c.value().to_string())
    }
}
