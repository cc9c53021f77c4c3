use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use contracts::domain::a010_partner_price::aggregate::{PartnerPrice, PartnerPriceDto};

use crate::domain::a010_partner_price::service;
use crate::shared::error::ApiResult;
use crate::shared::state::AppState;
use crate::system::auth::extractor::{AdminUser, CurrentUser};

/// GET /api/partner-prices
pub async fn list_all(State(state): State<AppState>, _user: CurrentUser) -> ApiResult<Json<Vec<PartnerPrice>>> {
    Ok(Json(service::list_all(&state.db).await?))
}

/// GET /api/partners/:id/prices
pub async fn list_by_partner(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(partner_id): Path<i32>,
) -> ApiResult<Json<Vec<PartnerPrice>>> {
    Ok(Json(service::list_by_partner(&state.db, &user, partner_id).await?))
}

/// GET /api/partner-prices/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<i32>,
) -> ApiResult<Json<PartnerPrice>> {
    Ok(Json(service::get_by_id(&state.db, id).await?))
}

/// POST /api/partner-prices
pub async fn create(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(dto): Json<PartnerPriceDto>,
) -> ApiResult<(StatusCode, Json<PartnerPrice>)> {
    let item = service::create(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /api/partner-prices/:id
pub async fn update(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i32>,
    Json(dto): Json<PartnerPriceDto>,
) -> ApiResult<Json<PartnerPrice>> {
    Ok(Json(service::update(&state.db, id, dto).await?))
}

/// DELETE /api/partner-prices/:id
pub async fn delete(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    service::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
