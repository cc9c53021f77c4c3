use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use contracts::domain::a001_boat_type::aggregate::{BoatType, BoatTypeDto};

use crate::domain::a001_boat_type::service;
use crate::shared::error::ApiResult;
use crate::shared::state::AppState;
use crate::system::auth::extractor::{AdminUser, CurrentUser};

/// GET /api/boat-types
pub async fn list_all(State(state): State<AppState>, _user: CurrentUser) -> ApiResult<Json<Vec<BoatType>>> {
    Ok(Json(service::list_all(&state.db).await?))
}

/// GET /api/boat-types/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<i32>,
) -> ApiResult<Json<BoatType>> {
    Ok(Json(service::get_by_id(&state.db, id).await?))
}

/// POST /api/boat-types
pub async fn create(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(dto): Json<BoatTypeDto>,
) -> ApiResult<(StatusCode, Json<BoatType>)> {
    let item = service::create(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /api/boat-types/:id
pub async fn update(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i32>,
    Json(dto): Json<BoatTypeDto>,
) -> ApiResult<Json<BoatType>> {
    Ok(Json(service::update(&state.db, id, dto).await?))
}

/// DELETE /api/boat-types/:id
pub async fn delete(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    service::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
