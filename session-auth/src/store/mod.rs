pub mod errors;
pub mod memory;
pub mod models;

use async_trait::async_trait;

pub use errors::StoreError;
pub use memory::InMemoryUserStore;
pub use models::User;
pub use models::UserGroup;
pub use models::UserView;

/// Port for credential store lookups.
///
/// The store is read-only at runtime. Lookups are exact string matches
/// and absence is a normal outcome (`Ok(None)`), not a fault. The
/// `Result` wrapper exists for implementations backed by external
/// storage, where a lookup is fallible I/O.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Retrieve a user by email address (exact, case-sensitive match).
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Retrieve a user by its opaque identifier.
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, StoreError>;

    /// Retrieve all users as hash-free views.
    async fn list_all(&self) -> Result<Vec<UserView>, StoreError>;
}
