use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use contracts::domain::a009_page::aggregate::{Page, PageDto, PageStatusPatch};

use crate::domain::a009_page::service;
use crate::shared::error::ApiResult;
use crate::shared::state::AppState;
use crate::system::auth::extractor::{AdminUser, CurrentUser};

/// GET /api/pages
pub async fn list_all(State(state): State<AppState>, _user: CurrentUser) -> ApiResult<Json<Vec<Page>>> {
    Ok(Json(service::list_all(&state.db).await?))
}

/// GET /api/pages/public/:slug
pub async fn get_public(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<Page>> {
    Ok(Json(service::get_public_by_slug(&state.db, &slug).await?))
}

/// GET /api/pages/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<i32>,
) -> ApiResult<Json<Page>> {
    Ok(Json(service::get_by_id(&state.db, id).await?))
}

/// POST /api/pages
pub async fn create(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Json(dto): Json<PageDto>,
) -> ApiResult<(StatusCode, Json<Page>)> {
    let item = service::create(&state.db, &admin, dto).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// PATCH /api/pages/:id
pub async fn update(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(id): Path<i32>,
    Json(dto): Json<PageDto>,
) -> ApiResult<Json<Page>> {
    Ok(Json(service::update(&state.db, &admin, id, dto).await?))
}

/// PATCH /api/pages/:id/status
pub async fn set_status(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(id): Path<i32>,
    Json(patch): Json<PageStatusPatch>,
) -> ApiResult<Json<Page>> {
    Ok(Json(service::set_status(&state.db, &admin, id, patch.status).await?))
}

/// DELETE /api/pages/:id
pub async fn delete(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    service::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
