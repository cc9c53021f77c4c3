use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use contracts::domain::a011_booking::aggregate::{Booking, BookingDto, BookingStatusPatch};

use crate::domain::a011_booking::service;
use crate::shared::error::ApiResult;
use crate::shared::state::AppState;
use crate::system::auth::extractor::CurrentUser;

/// GET /api/bookings (clients get only their own)
pub async fn list_all(State(state): State<AppState>, user: CurrentUser) -> ApiResult<Json<Vec<Booking>>> {
    Ok(Json(service::list_for(&state.db, &user).await?))
}

/// GET /api/users/:id/bookings
pub async fn list_by_user(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(user_id): Path<i32>,
) -> ApiResult<Json<Vec<Booking>>> {
    Ok(Json(service::list_by_user(&state.db, &user, user_id).await?))
}

/// GET /api/bookings/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i32>,
) -> ApiResult<Json<Booking>> {
    Ok(Json(service::get_by_id(&state.db, &user, id).await?))
}

/// POST /api/bookings
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(dto): Json<BookingDto>,
) -> ApiResult<(StatusCode, Json<Booking>)> {
    let item = service::create(&state.db, &user, dto).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /api/bookings/:id
pub async fn update(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i32>,
    Json(dto): Json<BookingDto>,
) -> ApiResult<Json<Booking>> {
    Ok(Json(service::update(&state.db, &user, id, dto).await?))
}

/// PATCH /api/bookings/:id/status
pub async fn set_status(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i32>,
    Json(patch): Json<BookingStatusPatch>,
) -> ApiResult<Json<Booking>> {
    Ok(Json(service::set_status(&state.db, &user, id, patch.status).await?))
}

/// DELETE /api/bookings/:id
pub async fn delete(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    service::delete(&state.db, &user, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
