use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;
use session_auth::PasswordError;
use session_auth::PasswordHasher;
use session_auth::User;
use session_auth::UserGroup;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub jwt: JwtConfig,
    #[serde(default)]
    pub cookie: CookieConfig,
    /// Seed user records; hashed into the credential store at startup.
    #[serde(default = "default_users")]
    pub users: Vec<SeedUser>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_http_port")]
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    /// Process-wide signing secret. Rotating it invalidates every
    /// outstanding session token.
    #[serde(default = "default_jwt_secret")]
    pub secret: String,
    #[serde(default = "default_expiration_hours")]
    pub expiration_hours: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CookieConfig {
    #[serde(default = "default_cookie_name")]
    pub name: String,
    /// Must be true on HTTPS-only deployments.
    #[serde(default)]
    pub secure: bool,
}

/// A user record as configured, with a plaintext password that gets
/// hashed at startup. Demo artifact; real deployments would configure
/// pre-hashed credentials or an external store.
#[derive(Debug, Deserialize, Clone)]
pub struct SeedUser {
    pub id: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub auto_join_admin: bool,
    pub role: Option<String>,
    pub groups: Option<Vec<UserGroup>>,
}

impl SeedUser {
    /// Hash the seed password and produce the store record.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing fault; callers must abort startup
    pub fn into_user<H: PasswordHasher>(self, hasher: &H) -> Result<User, PasswordError> {
        Ok(User {
            id: self.id,
            email: self.email,
            password_hash: hasher.hash(&self.password)?,
            auto_join_admin: self.auto_join_admin,
            role: self.role,
            groups: self.groups,
        })
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (JWT__SECRET, SERVER__HTTP_PORT, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    /// 4. In-code defaults (demo seed users, demo secret)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            jwt: JwtConfig::default(),
            cookie: CookieConfig::default(),
            users: default_users(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: default_http_port(),
        }
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: default_jwt_secret(),
            expiration_hours: default_expiration_hours(),
        }
    }
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: default_cookie_name(),
            secure: false,
        }
    }
}

fn default_http_port() -> u16 {
    8080
}

fn default_jwt_secret() -> String {
    // Demo artifact; override via JWT__SECRET in any real deployment
    "demo-secret-key-for-session-management".to_string()
}

fn default_expiration_hours() -> i64 {
    24
}

fn default_cookie_name() -> String {
    "session".to_string()
}

/// The two demo users, in both authorization-attribute formats:
/// the preferred auto-join-admin flag plus the legacy role/groups.
fn default_users() -> Vec<SeedUser> {
    vec![
        SeedUser {
            id: "user-1".to_string(),
            email: "admin@example.com".to_string(),
            password: "password123".to_string(),
            auto_join_admin: true,
            role: Some("admin".to_string()),
            groups: Some(vec![
                UserGroup::new("team", "team-1", "Engineering"),
                UserGroup::new("organization", "org-1", "Acme Corp"),
            ]),
        },
        SeedUser {
            id: "user-2".to_string(),
            email: "user@example.com".to_string(),
            password: "userpass".to_string(),
            auto_join_admin: false,
            role: Some("user".to_string()),
            groups: Some(vec![UserGroup::new("team", "team-1", "Engineering")]),
        },
    ]
}
