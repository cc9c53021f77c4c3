use axum::{extract::State, Json};
use contracts::shared::api::ApiMessage;
use contracts::system::recovery::{RecoveryRequest, RecoveryResetRequest, RecoveryVerifyRequest};

use crate::shared::error::ApiResult;
use crate::shared::state::AppState;
use crate::system::recovery::service;

/// POST /api/recover-password/request
pub async fn request(
    State(state): State<AppState>,
    Json(req): Json<RecoveryRequest>,
) -> ApiResult<Json<ApiMessage>> {
    Ok(Json(service::request_code(&state.db, req).await?))
}

/// POST /api/recover-password/verify
pub async fn verify(
    State(state): State<AppState>,
    Json(req): Json<RecoveryVerifyRequest>,
) -> ApiResult<Json<ApiMessage>> {
    Ok(Json(service::verify_code(&state.db, req).await?))
}

/// POST /api/recover-password/reset
pub async fn reset(
    State(state): State<AppState>,
    Json(req): Json<RecoveryResetRequest>,
) -> ApiResult<Json<ApiMessage>> {
    Ok(Json(service::reset_password(&state.db, req).await?))
}
