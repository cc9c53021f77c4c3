//! Booking access rules.
//!
//! Admins and partners manage every booking. A client (`cliente`) works only
//! with its own bookings: creates them for itself, edits or deletes them
//! while they are still pending, and may only move the status to cancelled.

use contracts::domain::a011_booking::aggregate::{Booking, BookingDto, BookingStatus, PaymentStatus};
use contracts::domain::common::{Validate, ValidationErrors};
use contracts::system::users::UserRole;
use sea_orm::DatabaseConnection;

use super::repository;
use crate::domain::a002_boat::repository as boat_repository;
use crate::domain::a003_marina::repository as marina_repository;
use crate::domain::a004_itinerary::repository as itinerary_repository;
use crate::shared::error::{ApiError, ApiResult};
use crate::system::auth::extractor::CurrentUser;
use crate::system::users::repository as users_repository;

const NOT_FOUND: &str = "Reserva não encontrada";
const LOCKED: &str = "A reserva não pode mais ser alterada";

fn is_client(requester: &CurrentUser) -> bool {
    requester.role() == UserRole::Cliente
}

async fn validate(db: &DatabaseConnection, dto: &BookingDto) -> ApiResult<()> {
    dto.validate()?;
    let mut errors = ValidationErrors::new();
    if users_repository::get_by_id(db, dto.user_id).await?.is_none() {
        errors.push("userId", "Usuário não encontrado");
    }
    if boat_repository::get_by_id(db, dto.boat_id).await?.is_none() {
        errors.push("boatId", "Embarcação não encontrada");
    }
    if itinerary_repository::get_by_id(db, dto.itinerary_id).await?.is_none() {
        errors.push("itineraryId", "Roteiro não encontrado");
    }
    if marina_repository::get_by_id(db, dto.marina_id).await?.is_none() {
        errors.push("marinaId", "Marina não encontrada");
    }
    Ok(errors.into_result()?)
}

async fn load_visible(db: &DatabaseConnection, requester: &CurrentUser, id: i32) -> ApiResult<Booking> {
    let booking = repository::get_by_id(db, id)
        .await?
        .ok_or_else(|| ApiError::not_found(NOT_FOUND))?;
    if is_client(requester) && booking.user_id != requester.id {
        return Err(ApiError::forbidden());
    }
    Ok(booking)
}

pub async fn list_for(db: &DatabaseConnection, requester: &CurrentUser) -> ApiResult<Vec<Booking>> {
    if is_client(requester) {
        return Ok(repository::list_by_user(db, requester.id).await?);
    }
    Ok(repository::list_all(db).await?)
}

pub async fn list_by_user(
    db: &DatabaseConnection,
    requester: &CurrentUser,
    user_id: i32,
) -> ApiResult<Vec<Booking>> {
    if is_client(requester) && requester.id != user_id {
        return Err(ApiError::forbidden());
    }
    Ok(repository::list_by_user(db, user_id).await?)
}

pub async fn get_by_id(db: &DatabaseConnection, requester: &CurrentUser, id: i32) -> ApiResult<Booking> {
    load_visible(db, requester, id).await
}

pub async fn create(db: &DatabaseConnection, requester: &CurrentUser, mut dto: BookingDto) -> ApiResult<Booking> {
    if dto.user_id == 0 || is_client(requester) {
        dto.user_id = requester.id;
    }
    if is_client(requester) {
        dto.status = BookingStatus::Pending;
        dto.payment_status = PaymentStatus::Pending;
    }
    validate(db, &dto).await?;

    let mut aggregate = Booking::new_for_insert(&dto);
    aggregate.before_write();
    aggregate.id = repository::insert(db, &aggregate).await?;
    tracing::info!(
        "Booking {} created for user {} on {}",
        aggregate.id,
        aggregate.user_id,
        aggregate.date
    );
    Ok(aggregate)
}

pub async fn update(
    db: &DatabaseConnection,
    requester: &CurrentUser,
    id: i32,
    mut dto: BookingDto,
) -> ApiResult<Booking> {
    let mut aggregate = load_visible(db, requester, id).await?;
    if is_client(requester) {
        if !aggregate.is_editable_by_client() {
            return Err(ApiError::bad_request(LOCKED));
        }
        dto.user_id = requester.id;
        dto.status = aggregate.status;
        dto.payment_status = aggregate.payment_status;
    } else if dto.user_id == 0 {
        dto.user_id = aggregate.user_id;
    }
    validate(db, &dto).await?;

    aggregate.update(&dto);
    aggregate.before_write();
    repository::update(db, &aggregate).await?;
    Ok(aggregate)
}

pub async fn set_status(
    db: &DatabaseConnection,
    requester: &CurrentUser,
    id: i32,
    status: BookingStatus,
) -> ApiResult<Booking> {
    let mut aggregate = load_visible(db, requester, id).await?;
    if is_client(requester) {
        if status != BookingStatus::Cancelled {
            return Err(ApiError::forbidden());
        }
        if aggregate.status == BookingStatus::Completed {
            return Err(ApiError::bad_request(LOCKED));
        }
    }
    aggregate.status = status;
    aggregate.before_write();
    repository::update(db, &aggregate).await?;
    Ok(aggregate)
}

pub async fn delete(db: &DatabaseConnection, requester: &CurrentUser, id: i32) -> ApiResult<()> {
    let aggregate = load_visible(db, requester, id).await?;
    if is_client(requester) && !aggregate.is_editable_by_client() {
        return Err(ApiError::bad_request(LOCKED));
    }
    repository::delete(db, id).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_boat::service::{self as boat_service, tests::boat_dto};
    use crate::domain::a003_marina::service as marina_service;
    use crate::domain::a004_itinerary::service as itinerary_service;
    use crate::shared::data::db::connect_in_memory;
    use crate::system::users::service::{self as users_service, tests::user_dto};
    use contracts::domain::a003_marina::aggregate::MarinaDto;
    use contracts::domain::a004_itinerary::aggregate::ItineraryDto;
    use contracts::domain::a011_booking::aggregate::BookingPeriod;

    struct Fixture {
        db: DatabaseConnection,
        admin: CurrentUser,
        client: CurrentUser,
        other_client: CurrentUser,
        dto: BookingDto,
    }

    async fn fixture() -> Fixture {
        let db = connect_in_memory().await.unwrap();
        let admin = users_service::create(&db, user_dto("chefe", "11111111111", UserRole::Admin))
            .await
            .unwrap();
        let client = users_service::create(&db, user_dto("joana", "22222222222", UserRole::Cliente))
            .await
            .unwrap();
        let other = users_service::create(&db, user_dto("pedro", "33333333333", UserRole::Cliente))
            .await
            .unwrap();
        let admin = CurrentUser::for_tests(admin.id, UserRole::Admin);

        let boat = boat_service::create(&db, boat_dto("Mar Azul")).await.unwrap();
        let marina = marina_service::create(
            &db,
            MarinaDto {
                name: "Marina Verolme".into(),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        let itinerary = itinerary_service::create(
            &db,
            &admin,
            ItineraryDto {
                name: "Ilha Grande".into(),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let dto = BookingDto {
            boat_id: boat.id,
            itinerary_id: itinerary.id,
            marina_id: marina.id,
            date: "2025-01-15".into(),
            period: BookingPeriod::Morning,
            passenger_count: 8,
            total_price: 320_000,
            customer_name: "Joana".into(),
            customer_email: "joana@charter.com.br".into(),
            ..Default::default()
        };
        Fixture {
            db,
            admin,
            client: CurrentUser::for_tests(client.id, UserRole::Cliente),
            other_client: CurrentUser::for_tests(other.id, UserRole::Cliente),
            dto,
        }
    }

    #[tokio::test]
    async fn test_client_books_for_itself() {
        let f = fixture().await;
        let dto = BookingDto {
            user_id: f.other_client.id,
            status: BookingStatus::Confirmed,
            ..f.dto.clone()
        };
        let booking = create(&f.db, &f.client, dto).await.unwrap();
        assert_eq!(booking.user_id, f.client.id);
        assert_eq!(booking.status, BookingStatus::Pending);

        create(&f.db, &f.other_client, f.dto.clone()).await.unwrap();
        assert_eq!(list_for(&f.db, &f.client).await.unwrap().len(), 1);
        assert_eq!(list_for(&f.db, &f.admin).await.unwrap().len(), 2);
        assert!(matches!(
            get_by_id(&f.db, &f.other_client, booking.id).await,
            Err(ApiError::Forbidden(_))
        ));
        assert!(matches!(
            list_by_user(&f.db, &f.client, f.other_client.id).await,
            Err(ApiError::Forbidden(_))
        ));
    }

    #[tokio::test]
    async fn test_client_edits_only_pending() {
        let f = fixture().await;
        let booking = create(&f.db, &f.client, f.dto.clone()).await.unwrap();

        let edited = BookingDto {
            passenger_count: 10,
            ..f.dto.clone()
        };
        let updated = update(&f.db, &f.client, booking.id, edited.clone()).await.unwrap();
        assert_eq!(updated.passenger_count, 10);

        set_status(&f.db, &f.admin, booking.id, BookingStatus::Confirmed)
            .await
            .unwrap();
        let err = update(&f.db, &f.client, booking.id, edited).await.unwrap_err();
        assert_eq!(err.to_string(), LOCKED);
        assert!(matches!(
            delete(&f.db, &f.client, booking.id).await,
            Err(ApiError::BadRequest(_))
        ));

        // Cancelling is the one status move a client may make
        assert!(matches!(
            set_status(&f.db, &f.client, booking.id, BookingStatus::Completed).await,
            Err(ApiError::Forbidden(_))
        ));
        let cancelled = set_status(&f.db, &f.client, booking.id, BookingStatus::Cancelled)
            .await
            .unwrap();
        assert_eq!(cancelled.status, BookingStatus::Cancelled);

        delete(&f.db, &f.admin, booking.id).await.unwrap();
        assert!(list_for(&f.db, &f.admin).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_references_must_exist() {
        let f = fixture().await;
        let dto = BookingDto {
            boat_id: 404,
            ..f.dto.clone()
        };
        match create(&f.db, &f.admin, dto).await {
            Err(ApiError::Validation(errors)) => {
                assert_eq!(errors.get("boatId"), Some("Embarcação não encontrada"));
                assert_eq!(errors.len(), 1);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}
