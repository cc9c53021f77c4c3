use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use contracts::domain::a007_city::aggregate::{City, CityDto};
use serde::Deserialize;

use crate::domain::a007_city::service;
use crate::shared::error::ApiResult;
use crate::shared::state::AppState;
use crate::system::auth::extractor::{AdminUser, CurrentUser};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityListQuery {
    pub state_id: Option<i32>,
}

/// GET /api/cities?stateId=
pub async fn list_all(
    State(state): State<AppState>,
    _user: CurrentUser,
    Query(query): Query<CityListQuery>,
) -> ApiResult<Json<Vec<City>>> {
    Ok(Json(service::list(&state.db, query.state_id).await?))
}

/// GET /api/cities/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<i32>,
) -> ApiResult<Json<City>> {
    Ok(Json(service::get_by_id(&state.db, id).await?))
}

/// POST /api/cities
pub async fn create(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(dto): Json<CityDto>,
) -> ApiResult<(StatusCode, Json<City>)> {
    let item = service::create(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// PATCH /api/cities/:id
pub async fn update(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i32>,
    Json(dto): Json<CityDto>,
) -> ApiResult<Json<City>> {
    Ok(Json(service::update(&state.db, id, dto).await?))
}

/// DELETE /api/cities/:id
pub async fn delete(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    service::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
