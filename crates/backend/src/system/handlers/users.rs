use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use contracts::shared::api::ApiMessage;
use contracts::system::users::{ChangePasswordDto, User, UserDto};

use crate::shared::error::ApiResult;
use crate::shared::state::AppState;
use crate::system::auth::extractor::{AdminUser, CurrentUser};
use crate::system::users::service;

/// GET /api/users
pub async fn list(State(state): State<AppState>, _user: CurrentUser) -> ApiResult<Json<Vec<User>>> {
    Ok(Json(service::list_all(&state.db).await?))
}

/// GET /api/partners
pub async fn list_partners(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> ApiResult<Json<Vec<User>>> {
    Ok(Json(service::list_partners(&state.db).await?))
}

/// GET /api/users/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<i32>,
) -> ApiResult<Json<User>> {
    Ok(Json(service::get_by_id(&state.db, id).await?))
}

/// POST /api/users (admin only)
pub async fn create(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(dto): Json<UserDto>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let user = service::create(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// PATCH|PUT /api/users/:id (admin only)
pub async fn update(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i32>,
    Json(dto): Json<UserDto>,
) -> ApiResult<Json<User>> {
    Ok(Json(service::update(&state.db, id, dto).await?))
}

/// DELETE /api/users/:id (admin only)
pub async fn delete(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    service::delete(&state.db, &admin, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/users/:id/change-password
pub async fn change_password(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i32>,
    Json(dto): Json<ChangePasswordDto>,
) -> ApiResult<Json<ApiMessage>> {
    service::change_password(&state.db, &user, id, dto).await?;
    Ok(Json(ApiMessage::ok("Senha alterada com sucesso")))
}
