use contracts::domain::a010_partner_price::aggregate::{PartnerPrice, PartnerPriceDto};
use contracts::domain::common::{Validate, ValidationErrors};
use contracts::system::users::UserRole;
use sea_orm::DatabaseConnection;

use super::repository;
use crate::domain::a002_boat::repository as boat_repository;
use crate::shared::error::{ApiError, ApiResult};
use crate::system::auth::extractor::CurrentUser;
use crate::system::users::repository as users_repository;

const NOT_FOUND: &str = "Preço não encontrado";

/// Field rules, then the partner must be a `parceiro` and the boat must exist
async fn validate(db: &DatabaseConnection, dto: &PartnerPriceDto) -> ApiResult<()> {
    dto.validate()?;
    let mut errors = ValidationErrors::new();
    let partner = users_repository::get_by_id(db, dto.partner_id).await?;
    if partner.map(|u| u.role != UserRole::Parceiro).unwrap_or(true) {
        errors.push("partnerId", "Parceiro inválido");
    }
    if boat_repository::get_by_id(db, dto.boat_id).await?.is_none() {
        errors.push("boatId", "Embarcação não encontrada");
    }
    Ok(errors.into_result()?)
}

pub async fn list_all(db: &DatabaseConnection) -> ApiResult<Vec<PartnerPrice>> {
    Ok(repository::list_all(db).await?)
}

/// A partner may read its own price table, admins read any
pub async fn list_by_partner(
    db: &DatabaseConnection,
    requester: &CurrentUser,
    partner_id: i32,
) -> ApiResult<Vec<PartnerPrice>> {
    if !requester.is_admin() && requester.id != partner_id {
        return Err(ApiError::forbidden());
    }
    Ok(repository::list_by_partner(db, partner_id).await?)
}

pub async fn list_by_boat(db: &DatabaseConnection, boat_id: i32) -> ApiResult<Vec<PartnerPrice>> {
    Ok(repository::list_by_boat(db, boat_id).await?)
}

pub async fn get_by_id(db: &DatabaseConnection, id: i32) -> ApiResult<PartnerPrice> {
    repository::get_by_id(db, id)
        .await?
        .ok_or_else(|| ApiError::not_found(NOT_FOUND))
}

pub async fn create(db: &DatabaseConnection, dto: PartnerPriceDto) -> ApiResult<PartnerPrice> {
    validate(db, &dto).await?;
    let mut aggregate = PartnerPrice::new_for_insert(&dto);
    aggregate.before_write();
    aggregate.id = repository::insert(db, &aggregate).await?;
    Ok(aggregate)
}

pub async fn update(db: &DatabaseConnection, id: i32, dto: PartnerPriceDto) -> ApiResult<PartnerPrice> {
    let mut aggregate = get_by_id(db, id).await?;
    validate(db, &dto).await?;
    aggregate.update(&dto);
    aggregate.before_write();
    repository::update(db, &aggregate).await?;
    Ok(aggregate)
}

pub async fn delete(db: &DatabaseConnection, id: i32) -> ApiResult<()> {
    if !repository::delete(db, id).await? {
        return Err(ApiError::not_found(NOT_FOUND));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_boat::service::{self as boat_service, tests::boat_dto};
    use crate::shared::data::db::connect_in_memory;
    use crate::system::users::service::{self as users_service, tests::user_dto};
    use contracts::domain::a010_partner_price::aggregate::PricingType;

    fn dto(partner_id: i32, boat_id: i32) -> PartnerPriceDto {
        PartnerPriceDto {
            partner_id,
            boat_id,
            pricing_type: PricingType::Daily,
            weekday_price: 150_000,
            weekend_price: 180_000,
            holiday_price: 220_000,
        }
    }

    #[tokio::test]
    async fn test_prices_by_partner_and_boat() {
        let db = connect_in_memory().await.unwrap();
        let partner = users_service::create(&db, user_dto("parceiro", "11111111111", UserRole::Parceiro))
            .await
            .unwrap();
        let client = users_service::create(&db, user_dto("cliente", "22222222222", UserRole::Cliente))
            .await
            .unwrap();
        let boat = boat_service::create(&db, boat_dto("Mar Azul")).await.unwrap();

        let price = create(&db, dto(partner.id, boat.id)).await.unwrap();
        assert_eq!(price.pricing_type, PricingType::Daily);
        assert_eq!(list_by_boat(&db, boat.id).await.unwrap().len(), 1);

        let as_partner = CurrentUser::for_tests(partner.id, UserRole::Parceiro);
        assert_eq!(list_by_partner(&db, &as_partner, partner.id).await.unwrap().len(), 1);
        let as_client = CurrentUser::for_tests(client.id, UserRole::Cliente);
        assert!(matches!(
            list_by_partner(&db, &as_client, partner.id).await,
            Err(ApiError::Forbidden(_))
        ));

        // A client account is not a partner
        match create(&db, dto(client.id, boat.id)).await {
            Err(ApiError::Validation(errors)) => {
                assert_eq!(errors.get("partnerId"), Some("Parceiro inválido"))
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_negative_price_rejected() {
        let db = connect_in_memory().await.unwrap();
        let dto = PartnerPriceDto {
            holiday_price: -1,
            ..dto(1, 1)
        };
        match create(&db, dto).await {
            Err(ApiError::Validation(errors)) => assert!(errors.get("holidayPrice").is_some()),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
