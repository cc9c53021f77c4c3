use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use contracts::domain::a005_country::aggregate::{Country, CountryDto};

use crate::domain::a005_country::service;
use crate::shared::error::ApiResult;
use crate::shared::state::AppState;
use crate::system::auth::extractor::{AdminUser, CurrentUser};

/// GET /api/countries
pub async fn list_all(State(state): State<AppState>, _user: CurrentUser) -> ApiResult<Json<Vec<Country>>> {
    Ok(Json(service::list_all(&state.db).await?))
}

/// GET /api/countries/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<i32>,
) -> ApiResult<Json<Country>> {
    Ok(Json(service::get_by_id(&state.db, id).await?))
}

/// POST /api/countries
pub async fn create(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(dto): Json<CountryDto>,
) -> ApiResult<(StatusCode, Json<Country>)> {
    let item = service::create(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// PATCH /api/countries/:id
pub async fn update(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i32>,
    Json(dto): Json<CountryDto>,
) -> ApiResult<Json<Country>> {
    Ok(Json(service::update(&state.db, id, dto).await?))
}

/// DELETE /api/countries/:id
pub async fn delete(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    service::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
