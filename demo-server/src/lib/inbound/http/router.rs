use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use session_auth::InMemoryUserStore;
use session_auth::SessionService;
use session_auth::Sha256Hasher;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::current_user::current_user;
use super::handlers::health::health;
use super::handlers::list_users::list_users;
use super::handlers::login::login;
use super::handlers::logout::logout;
use super::handlers::protected::protected;
use crate::vortex::DemoVortexHooks;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<SessionService<InMemoryUserStore, Sha256Hasher>>,
    pub vortex_hooks: Arc<DemoVortexHooks>,
}

pub fn create_router(
    auth_service: Arc<SessionService<InMemoryUserStore, Sha256Hasher>>,
    vortex_hooks: Arc<DemoVortexHooks>,
) -> Router {
    let state = AppState {
        auth_service,
        vortex_hooks,
    };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        .route("/api/auth/me", get(current_user))
        .route("/api/demo/users", get(list_users))
        .route("/api/demo/protected", get(protected))
        .route("/health", get(health))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
