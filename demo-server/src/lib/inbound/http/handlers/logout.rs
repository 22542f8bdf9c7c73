use axum::extract::State;
use axum::http::header;
use axum::http::StatusCode;
use axum::response::AppendHeaders;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Logout: clear the session cookie. Always succeeds; there is no
/// server-side session to tear down.
pub async fn logout(
    State(state): State<AppState>,
) -> Result<
    (
        AppendHeaders<[(header::HeaderName, String); 1]>,
        ApiSuccess<LogoutResponseData>,
    ),
    ApiError,
> {
    let removal = state.auth_service.logout();
    let clear_cookie = AppendHeaders([(header::SET_COOKIE, removal.to_string())]);

    Ok((
        clear_cookie,
        ApiSuccess::new(StatusCode::OK, LogoutResponseData { success: true }),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogoutResponseData {
    pub success: bool,
}
