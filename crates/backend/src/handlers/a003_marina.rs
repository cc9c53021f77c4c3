use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use contracts::domain::a003_marina::aggregate::{Marina, MarinaDto};

use crate::domain::a003_marina::service;
use crate::shared::error::ApiResult;
use crate::shared::state::AppState;
use crate::system::auth::extractor::{AdminUser, CurrentUser};

/// GET /api/marinas
pub async fn list_all(State(state): State<AppState>, _user: CurrentUser) -> ApiResult<Json<Vec<Marina>>> {
    Ok(Json(service::list_all(&state.db).await?))
}

/// GET /api/marinas/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<i32>,
) -> ApiResult<Json<Marina>> {
    Ok(Json(service::get_by_id(&state.db, id).await?))
}

/// POST /api/marinas
pub async fn create(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(dto): Json<MarinaDto>,
) -> ApiResult<(StatusCode, Json<Marina>)> {
    let item = service::create(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /api/marinas/:id
pub async fn update(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i32>,
    Json(dto): Json<MarinaDto>,
) -> ApiResult<Json<Marina>> {
    Ok(Json(service::update(&state.db, id, dto).await?))
}

/// DELETE /api/marinas/:id
pub async fn delete(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    service::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
