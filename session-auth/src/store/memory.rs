use async_trait::async_trait;

use super::errors::StoreError;
use super::models::User;
use super::models::UserView;
use super::UserStore;

/// Read-only credential store over a fixed set of user records.
///
/// Built once at process start from seed configuration; no mutation
/// operations exist, so concurrent reads need no locking.
pub struct InMemoryUserStore {
    users: Vec<User>,
}

impl InMemoryUserStore {
    /// Create a store over the given records.
    ///
    /// # Arguments
    /// * `users` - Seed records; ids and emails are expected to be unique
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.iter().find(|u| u.id == id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<UserView>, StoreError> {
        Ok(self.users.iter().map(UserView::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_user(id: &str, email: &str) -> User {
        User {
            id: id.to_string(),
            email: email.to_string(),
            password_hash: "digest".to_string(),
            auto_join_admin: false,
            role: None,
            groups: None,
        }
    }

    #[tokio::test]
    async fn test_find_by_email_exact_match() {
        let store = InMemoryUserStore::new(vec![demo_user("user-1", "admin@example.com")]);

        let found = store
            .find_by_email("admin@example.com")
            .await
            .expect("Lookup failed");
        assert_eq!(found.map(|u| u.id), Some("user-1".to_string()));

        // Matching is case-sensitive
        let missing = store
            .find_by_email("Admin@Example.com")
            .await
            .expect("Lookup failed");
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_find_by_id_absent_is_ok_none() {
        let store = InMemoryUserStore::new(vec![demo_user("user-1", "admin@example.com")]);

        let missing = store.find_by_id("user-99").await.expect("Lookup failed");
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_list_all_returns_views() {
        let store = InMemoryUserStore::new(vec![
            demo_user("user-1", "admin@example.com"),
            demo_user("user-2", "user@example.com"),
        ]);

        let views = store.list_all().await.expect("Listing failed");
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].id, "user-1");
        assert_eq!(views[1].email, "user@example.com");
    }
}
