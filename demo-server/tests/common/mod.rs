use std::sync::Arc;

use demo_server::config::Config;
use demo_server::inbound::http::router::create_router;
use demo_server::vortex::DemoVortexHooks;
use session_auth::InMemoryUserStore;
use session_auth::SessionCookie;
use session_auth::SessionService;
use session_auth::Sha256Hasher;
use session_auth::TokenCodec;
use session_auth::User;

/// Test application that spawns a real server on a random port with
/// the default demo configuration (two seed users, 24h sessions).
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let config = Config::default();

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let hasher = Sha256Hasher::new();
        let users = config
            .users
            .into_iter()
            .map(|seed| seed.into_user(&hasher))
            .collect::<Result<Vec<User>, _>>()
            .expect("Failed to hash seed passwords");

        let auth_service = Arc::new(SessionService::new(
            Arc::new(InMemoryUserStore::new(users)),
            Sha256Hasher::new(),
            TokenCodec::new(config.jwt.secret.as_bytes(), config.jwt.expiration_hours),
            SessionCookie::new(
                config.cookie.name.clone(),
                config.jwt.expiration_hours * 60 * 60,
                config.cookie.secure,
            ),
        ));

        let vortex_hooks = Arc::new(DemoVortexHooks::new(Arc::clone(&auth_service)));
        let router = create_router(auth_service, vortex_hooks);

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::builder()
                .cookie_store(true)
                .build()
                .expect("Failed to create reqwest client"),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Login as the seeded admin user, keeping the session cookie in
    /// the client's cookie store.
    pub async fn login_as_admin(&self) {
        let response = self
            .post("/api/auth/login")
            .json(&serde_json::json!({
                "email": "admin@example.com",
                "password": "password123"
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert!(response.status().is_success());
    }
}
