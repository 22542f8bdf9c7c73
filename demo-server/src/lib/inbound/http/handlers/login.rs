use axum::extract::State;
use axum::http::header;
use axum::http::StatusCode;
use axum::response::AppendHeaders;
use axum::Json;
use serde::Deserialize;
use session_auth::UserView;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Login with email and password.
///
/// A request missing either field is a client error (400), distinct
/// from the uniform 401 that covers both unknown email and wrong
/// password. Success attaches the session cookie to the response.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<
    (
        AppendHeaders<[(header::HeaderName, String); 1]>,
        ApiSuccess<UserView>,
    ),
    ApiError,
> {
    let (email, password) = match (body.email, body.password) {
        (Some(email), Some(password)) => (email, password),
        _ => return Err(ApiError::BadRequest("Email and password required".to_string())),
    };

    let login = state
        .auth_service
        .login(&email, &password)
        .await
        .map_err(ApiError::from)?;

    let set_cookie = AppendHeaders([(header::SET_COOKIE, login.cookie.to_string())]);
    let user = UserView::from(&login.user);

    Ok((set_cookie, ApiSuccess::new(StatusCode::OK, user)))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    email: Option<String>,
    password: Option<String>,
}
