use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::vortex::VORTEX_ROUTES;

/// Health check, reporting the SDK route surface as mounted.
pub async fn health() -> Result<ApiSuccess<HealthResponseData>, ApiError> {
    Ok(ApiSuccess::new(
        StatusCode::OK,
        HealthResponseData {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
            vortex: VortexStatus {
                configured: true,
                routes: VORTEX_ROUTES.iter().map(|r| r.to_string()).collect(),
            },
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthResponseData {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub vortex: VortexStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VortexStatus {
    pub configured: bool,
    pub routes: Vec<String>,
}
