use axum::extract::State;
use axum::http::header;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use session_auth::UserView;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Resolve the current user from the session cookie.
///
/// Missing cookie, failed token verification, and a token referencing a
/// user no longer in the store all produce the same 401; only a store
/// fault is a server error.
pub async fn current_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<ApiSuccess<UserView>, ApiError> {
    let user = state
        .auth_service
        .current_user(cookie_header(&headers))
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::Unauthorized("Not authenticated".to_string()))?;

    Ok(ApiSuccess::new(StatusCode::OK, UserView::from(&user)))
}

/// The raw `Cookie` header value, if the request carries one.
pub fn cookie_header(headers: &HeaderMap) -> Option<&str> {
    headers.get(header::COOKIE).and_then(|v| v.to_str().ok())
}
