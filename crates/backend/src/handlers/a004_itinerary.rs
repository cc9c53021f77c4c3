use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use contracts::domain::a004_itinerary::aggregate::{Itinerary, ItineraryDto};

use crate::domain::a004_itinerary::service;
use crate::shared::error::ApiResult;
use crate::shared::state::AppState;
use crate::system::auth::extractor::CurrentUser;

/// GET /api/itineraries (partners get only their own)
pub async fn list_all(State(state): State<AppState>, user: CurrentUser) -> ApiResult<Json<Vec<Itinerary>>> {
    Ok(Json(service::list_for(&state.db, &user).await?))
}

/// GET /api/partners/:id/itineraries
pub async fn list_by_partner(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(partner_id): Path<i32>,
) -> ApiResult<Json<Vec<Itinerary>>> {
    Ok(Json(service::list_by_partner(&state.db, &user, partner_id).await?))
}

/// GET /api/itineraries/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i32>,
) -> ApiResult<Json<Itinerary>> {
    Ok(Json(service::get_by_id(&state.db, &user, id).await?))
}

/// POST /api/itineraries (admin or partner)
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(dto): Json<ItineraryDto>,
) -> ApiResult<(StatusCode, Json<Itinerary>)> {
    let item = service::create(&state.db, &user, dto).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /api/itineraries/:id
pub async fn update(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i32>,
    Json(dto): Json<ItineraryDto>,
) -> ApiResult<Json<Itinerary>> {
    Ok(Json(service::update(&state.db, &user, id, dto).await?))
}

/// DELETE /api/itineraries/:id
pub async fn delete(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    service::delete(&state.db, &user, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
