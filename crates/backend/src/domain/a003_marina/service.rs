use contracts::domain::a003_marina::aggregate::{Marina, MarinaDto};
use contracts::domain::common::Validate;
use sea_orm::DatabaseConnection;

use super::repository;
use crate::shared::error::{ApiError, ApiResult};

const NOT_FOUND: &str = "Marina não encontrada";

pub async fn list_all(db: &DatabaseConnection) -> ApiResult<Vec<Marina>> {
    Ok(repository::list_all(db).await?)
}

pub async fn get_by_id(db: &DatabaseConnection, id: i32) -> ApiResult<Marina> {
    repository::get_by_id(db, id)
        .await?
        .ok_or_else(|| ApiError::not_found(NOT_FOUND))
}

pub async fn create(db: &DatabaseConnection, dto: MarinaDto) -> ApiResult<Marina> {
    dto.validate()?;
    let mut aggregate = Marina::new_for_insert(&dto);
    aggregate.before_write();
    aggregate.id = repository::insert(db, &aggregate).await?;
    Ok(aggregate)
}

pub async fn update(db: &DatabaseConnection, id: i32, dto: MarinaDto) -> ApiResult<Marina> {
    dto.validate()?;
    let mut aggregate = get_by_id(db, id).await?;
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
    use crate::shared::data::db::connect_in_memory;

    #[tokio::test]
    async fn test_coordinates_round_trip_through_sqlite() {
        let db = connect_in_memory().await.unwrap();
        let dto = MarinaDto {
            name: "Marina da Glória".into(),
            city: Some("Rio de Janeiro".into()),
            state: Some("RJ".into()),
            latitude: Some(-22.9194),
            longitude: Some(-43.1714),
            ..Default::default()
        };
        let created = create(&db, dto).await.unwrap();
        let stored = get_by_id(&db, created.id).await.unwrap();
        assert_eq!(stored.latitude, Some(-22.9194));
        assert_eq!(stored.location(), "Rio de Janeiro, RJ");
    }

    #[tokio::test]
    async fn test_bad_email_rejected() {
        let db = connect_in_memory().await.unwrap();
        let dto = MarinaDto {
            name: "Marina Itajaí".into(),
            contact_email: Some("contato".into()),
            ..Default::default()
        };
        match create(&db, dto).await {
            Err(ApiError::Validation(errors)) => assert!(errors.get("contactEmail").is_some()),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_marina() {
        let db = connect_in_memory().await.unwrap();
        assert!(matches!(get_by_id(&db, 7).await, Err(ApiError::NotFound(_))));
        assert!(matches!(delete(&db, 7).await, Err(ApiError::NotFound(_))));
    }
}
