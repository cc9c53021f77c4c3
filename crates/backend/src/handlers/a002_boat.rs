use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use contracts::domain::a002_boat::aggregate::{Boat, BoatDto};
use contracts::domain::a010_partner_price::aggregate::PartnerPrice;

use crate::domain::{a002_boat::service, a010_partner_price::service as price_service};
use crate::shared::error::ApiResult;
use crate::shared::state::AppState;
use crate::system::auth::extractor::{AdminUser, CurrentUser};

/// GET /api/boats
pub async fn list_all(State(state): State<AppState>, _user: CurrentUser) -> ApiResult<Json<Vec<Boat>>> {
    Ok(Json(service::list_all(&state.db).await?))
}

/// GET /api/boats/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<i32>,
) -> ApiResult<Json<Boat>> {
    Ok(Json(service::get_by_id(&state.db, id).await?))
}

/// GET /api/boats/:id/partner-prices
pub async fn partner_prices(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<i32>,
) -> ApiResult<Json<Vec<PartnerPrice>>> {
    service::get_by_id(&state.db, id).await?;
    Ok(Json(price_service::list_by_boat(&state.db, id).await?))
}

/// POST /api/boats
pub async fn create(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(dto): Json<BoatDto>,
) -> ApiResult<(StatusCode, Json<Boat>)> {
    let item = service::create(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /api/boats/:id
pub async fn update(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i32>,
    Json(dto): Json<BoatDto>,
) -> ApiResult<Json<Boat>> {
    Ok(Json(service::update(&state.db, id, dto).await?))
}

/// DELETE /api/boats/:id
pub async fn delete(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    service::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
