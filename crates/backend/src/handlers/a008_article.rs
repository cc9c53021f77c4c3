use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use contracts::domain::a008_article::aggregate::{Article, ArticleDto, ArticleStatusPatch};
use serde::Deserialize;

use crate::domain::a008_article::service;
use crate::shared::error::ApiResult;
use crate::shared::state::AppState;
use crate::system::auth::extractor::{AdminUser, CurrentUser};

#[derive(Debug, Default, Deserialize)]
pub struct DeleteQuery {
    #[serde(default)]
    pub permanent: bool,
}

/// GET /api/articles (admin list, trash included)
pub async fn list_all(State(state): State<AppState>, _user: CurrentUser) -> ApiResult<Json<Vec<Article>>> {
    Ok(Json(service::list_all(&state.db).await?))
}

/// GET /api/articles/public
pub async fn list_public(State(state): State<AppState>) -> ApiResult<Json<Vec<Article>>> {
    Ok(Json(service::list_public(&state.db).await?))
}

/// GET /api/articles/public/:path
pub async fn get_public(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> ApiResult<Json<Article>> {
    Ok(Json(service::get_public_by_path(&state.db, &path).await?))
}

/// GET /api/articles/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<i32>,
) -> ApiResult<Json<Article>> {
    Ok(Json(service::get_by_id(&state.db, id).await?))
}

/// POST /api/articles
pub async fn create(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(dto): Json<ArticleDto>,
) -> ApiResult<(StatusCode, Json<Article>)> {
    let item = service::create(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// PATCH /api/articles/:id
pub async fn update(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i32>,
    Json(dto): Json<ArticleDto>,
) -> ApiResult<Json<Article>> {
    Ok(Json(service::update(&state.db, id, dto).await?))
}

/// PATCH /api/articles/:id/status
pub async fn set_status(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i32>,
    Json(patch): Json<ArticleStatusPatch>,
) -> ApiResult<Json<Article>> {
    Ok(Json(service::set_status(&state.db, id, patch).await?))
}

/// DELETE /api/articles/:id[?permanent=true]
pub async fn delete(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i32>,
    Query(query): Query<DeleteQuery>,
) -> ApiResult<StatusCode> {
    service::delete(&state.db, id, query.permanent).await?;
    Ok(StatusCode::NO_CONTENT)
}
