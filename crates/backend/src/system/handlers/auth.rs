use axum::{extract::State, http::StatusCode, Json};
use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo,
};

use crate::shared::error::{ApiError, ApiResult};
use crate::shared::state::AppState;
use crate::system::auth::extractor::CurrentUser;
use crate::system::auth::{jwt, refresh_tokens};
use crate::system::users::service as user_service;

/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let user = user_service::verify_credentials(&state.db, &request.username, &request.password)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Usuário ou senha inválidos"))?;

    let access_token =
        jwt::generate_access_token(&state.db, user.id, &user.username, user.role).await?;
    let refresh_token = jwt::generate_refresh_token();
    refresh_tokens::store(&state.db, user.id, &refresh_token).await?;

    tracing::info!("User {} logged in", user.username);
    Ok(Json(LoginResponse {
        access_token,
        refresh_token,
        user: UserInfo::from(&user),
    }))
}

/// POST /api/refresh
pub async fn refresh(
    State(state): State<AppState>,
    Json(request): Json<RefreshRequest>,
) -> ApiResult<Json<RefreshResponse>> {
    let expired = || ApiError::unauthorized("Sessão expirada");
    let user_id = refresh_tokens::find_user_id(&state.db, &request.refresh_token)
        .await?
        .ok_or_else(expired)?;
    let user = crate::system::users::repository::get_by_id(&state.db, user_id)
        .await?
        .ok_or_else(expired)?;

    let access_token =
        jwt::generate_access_token(&state.db, user.id, &user.username, user.role).await?;
    Ok(Json(RefreshResponse { access_token }))
}

/// POST /api/logout
pub async fn logout(
    State(state): State<AppState>,
    Json(request): Json<RefreshRequest>,
) -> ApiResult<StatusCode> {
    refresh_tokens::revoke(&state.db, &request.refresh_token).await?;
    Ok(StatusCode::OK)
}

/// GET /api/user
pub async fn current_user(
    State(state): State<AppState>,
    user: CurrentUser,
) -> ApiResult<Json<UserInfo>> {
    let user = crate::system::users::repository::get_by_id(&state.db, user.id)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Não autenticado"))?;
    Ok(Json(UserInfo::from(&user)))
}
