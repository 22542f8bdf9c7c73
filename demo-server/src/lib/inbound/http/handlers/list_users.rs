use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;
use session_auth::UserView;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

/// List the demo users, password hashes excluded.
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<ApiSuccess<ListUsersResponseData>, ApiError> {
    let users = state
        .auth_service
        .list_users()
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        ListUsersResponseData { users },
    ))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListUsersResponseData {
    pub users: Vec<UserView>,
}
