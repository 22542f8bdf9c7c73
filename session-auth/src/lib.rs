//! Session authentication library
//!
//! Reusable core for cookie-based, stateless session authentication:
//! - Credential store port with an in-memory, read-only implementation
//! - Replaceable password digest schemes (demo SHA-256, hardened Argon2id)
//! - Signed, time-bounded session tokens (HS256)
//! - Session cookie lifecycle (set, clear, extract)
//! - An orchestrating service exposing login, logout, and current-user
//!
//! The library is framework-free: inbound HTTP is represented as the raw
//! `Cookie` header string, outbound as `cookie::Cookie` values the web
//! layer attaches to its responses.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use session_auth::InMemoryUserStore;
//! use session_auth::PasswordHasher;
//! use session_auth::SessionCookie;
//! use session_auth::SessionService;
//! use session_auth::Sha256Hasher;
//! use session_auth::TokenCodec;
//! use session_auth::User;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let hasher = Sha256Hasher::new();
//! let store = Arc::new(InMemoryUserStore::new(vec![User {
//!     id: "user-1".to_string(),
//!     email: "admin@example.com".to_string(),
//!     password_hash: hasher.hash("password123").unwrap(),
//!     auto_join_admin: true,
//!     role: Some("admin".to_string()),
//!     groups: None,
//! }]));
//!
//! let service = SessionService::new(
//!     store,
//!     Sha256Hasher::new(),
//!     TokenCodec::new(b"demo-secret-key-for-session-management", 24),
//!     SessionCookie::new("session", 24 * 60 * 60, false),
//! );
//!
//! let login = service.login("admin@example.com", "password123").await.unwrap();
//! let header = format!("session={}", login.token);
//! let user = service.current_user(Some(&header)).await.unwrap();
//! assert!(user.is_some());
//! # });
//! ```

pub mod cookie;
pub mod password;
pub mod service;
pub mod store;
pub mod token;

// Re-export commonly used items
pub use cookie::SessionCookie;
pub use password::Argon2Hasher;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use password::Sha256Hasher;
pub use service::AuthError;
pub use service::Login;
pub use service::SessionService;
pub use store::InMemoryUserStore;
pub use store::StoreError;
pub use store::User;
pub use store::UserGroup;
pub use store::UserStore;
pub use store::UserView;
pub use token::SessionClaims;
pub use token::TokenCodec;
pub use token::TokenError;
