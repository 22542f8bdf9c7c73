use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;
use session_auth::UserView;

use super::current_user::cookie_header;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::vortex::VortexHooks;

/// Demo protected route, gated the same way the SDK gates its own
/// routes: resolve the caller through the authentication hook, then ask
/// the authorization hook whether the operation is allowed.
pub async fn protected(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<ApiSuccess<ProtectedResponseData>, ApiError> {
    let user = state
        .vortex_hooks
        .authenticate_user(cookie_header(&headers))
        .await;

    if !state
        .vortex_hooks
        .authorize_operation("demo.protected.read", user.as_ref())
    {
        return Err(ApiError::Unauthorized("Not authenticated".to_string()));
    }

    let user = user.ok_or_else(|| ApiError::Unauthorized("Not authenticated".to_string()))?;

    // Re-resolve the full record for the response body; the hook only
    // carries the simplified format
    let full = state
        .auth_service
        .current_user(cookie_header(&headers))
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::Unauthorized("Not authenticated".to_string()))?;

    debug_assert_eq!(full.id, user.id);

    Ok(ApiSuccess::new(
        StatusCode::OK,
        ProtectedResponseData {
            message: "This is a protected route!".to_string(),
            user: UserView::from(&full),
            timestamp: Utc::now(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProtectedResponseData {
    pub message: String,
    pub user: UserView,
    pub timestamp: DateTime<Utc>,
}
