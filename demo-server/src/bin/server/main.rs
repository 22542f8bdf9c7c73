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
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "demo_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "demo-server",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        cookie_name = %config.cookie.name,
        cookie_secure = config.cookie.secure,
        session_validity_hours = config.jwt.expiration_hours,
        seed_users = config.users.len(),
        "Configuration loaded"
    );

    // Seed the credential store; a hashing fault here is fatal by design
    let hasher = Sha256Hasher::new();
    let users = config
        .users
        .clone()
        .into_iter()
        .map(|seed| seed.into_user(&hasher))
        .collect::<Result<Vec<User>, _>>()?;

    let demo_emails: Vec<String> = users
        .iter()
        .map(|u| {
            format!(
                "{} ({} role)",
                u.email,
                u.role.as_deref().unwrap_or("no")
            )
        })
        .collect();

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

    let address = format!("0.0.0.0:{}", config.server.http_port);
    let listener = tokio::net::TcpListener::bind(&address).await?;

    tracing::info!(
        address = %address,
        "Demo server running"
    );
    tracing::info!(
        health = %format!("http://localhost:{}/health", config.server.http_port),
        vortex_routes = %format!("http://localhost:{}/api/vortex", config.server.http_port),
        "Endpoints available"
    );
    tracing::info!(users = ?demo_emails, "Demo users");

    let application = create_router(auth_service, vortex_hooks);
    axum::serve(listener, application).await?;

    Ok(())
}
