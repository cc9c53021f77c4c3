use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use contracts::domain::a006_state::aggregate::{State as StateRecord, StateDto};
use serde::Deserialize;

use crate::domain::a006_state::service;
use crate::shared::error::ApiResult;
use crate::shared::state::AppState;
use crate::system::auth::extractor::{AdminUser, CurrentUser};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateListQuery {
    pub country_id: Option<i32>,
}

/// GET /api/states?countryId=
pub async fn list_all(
    State(state): State<AppState>,
    _user: CurrentUser,
    Query(query): Query<StateListQuery>,
) -> ApiResult<Json<Vec<StateRecord>>> {
    Ok(Json(service::list(&state.db, query.country_id).await?))
}

/// GET /api/states/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<i32>,
) -> ApiResult<Json<StateRecord>> {
    Ok(Json(service::get_by_id(&state.db, id).await?))
}

/// POST /api/states
pub async fn create(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(dto): Json<StateDto>,
) -> ApiResult<(StatusCode, Json<StateRecord>)> {
    let item = service::create(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// PATCH /api/states/:id
pub async fn update(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i32>,
    Json(dto): Json<StateDto>,
) -> ApiResult<Json<StateRecord>> {
    Ok(Json(service::update(&state.db, id, dto).await?))
}

/// DELETE /api/states/:id
pub async fn delete(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    service::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
