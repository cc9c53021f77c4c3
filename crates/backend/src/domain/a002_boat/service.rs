use contracts::domain::a002_boat::aggregate::{Boat, BoatDto};
use contracts::domain::common::{Validate, ValidationErrors};
use sea_orm::DatabaseConnection;

use super::repository;
use crate::domain::a003_marina::repository as marina_repository;
use crate::shared::error::{ApiError, ApiResult};

const NOT_FOUND: &str = "Embarcação não encontrada";

/// Field rules plus "the referenced marina exists"
async fn validate(db: &DatabaseConnection, dto: &BoatDto) -> ApiResult<()> {
    let mut errors = match dto.validate() {
        Ok(()) => ValidationErrors::new(),
        Err(errors) => errors,
    };
    if let Some(marina_id) = dto.marina_id {
        if marina_repository::get_by_id(db, marina_id).await?.is_none() {
            errors.push("marinaId", "Marina não encontrada");
        }
    }
    Ok(errors.into_result()?)
}

pub async fn list_all(db: &DatabaseConnection) -> ApiResult<Vec<Boat>> {
    Ok(repository::list_all(db).await?)
}

pub async fn get_by_id(db: &DatabaseConnection, id: i32) -> ApiResult<Boat> {
    repository::get_by_id(db, id)
        .await?
        .ok_or_else(|| ApiError::not_found(NOT_FOUND))
}

pub async fn create(db: &DatabaseConnection, dto: BoatDto) -> ApiResult<Boat> {
    validate(db, &dto).await?;
    let mut aggregate = Boat::new_for_insert(&dto);
    aggregate.before_write();
    aggregate.id = repository::insert(db, &aggregate).await?;
    tracing::info!("Boat {} created (id {})", aggregate.name, aggregate.id);
    Ok(aggregate)
}

pub async fn update(db: &DatabaseConnection, id: i32, dto: BoatDto) -> ApiResult<Boat> {
    validate(db, &dto).await?;
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
pub(crate) mod tests {
    use super::*;
    use crate::shared::data::db::connect_in_memory;
    use contracts::domain::a002_boat::aggregate::BoatStatus;

    pub(crate) fn boat_dto(name: &str) -> BoatDto {
        BoatDto {
            name: name.into(),
            boat_type: "Lancha".into(),
            passenger_count: 10,
            tie_document: "TIE-001".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_update_delete() {
        let db = connect_in_memory().await.unwrap();
        let boat = create(&db, boat_dto("Mar Azul")).await.unwrap();
        assert_eq!(boat.status, BoatStatus::Active);

        let updated = update(
            &db,
            boat.id,
            BoatDto {
                status: BoatStatus::Inactive,
                ..boat_dto("Mar Azul II")
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.name, "Mar Azul II");
        assert_eq!(get_by_id(&db, boat.id).await.unwrap().status, BoatStatus::Inactive);

        delete(&db, boat.id).await.unwrap();
        assert!(matches!(delete(&db, boat.id).await, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_unknown_marina_is_a_field_error() {
        let db = connect_in_memory().await.unwrap();
        let dto = BoatDto {
            marina_id: Some(99),
            ..boat_dto("Mar Azul")
        };
        match create(&db, dto).await {
            Err(ApiError::Validation(errors)) => {
                assert_eq!(errors.get("marinaId"), Some("Marina não encontrada"))
            }
            other => panic!("unexpected: {other:?}"),
        }
        assert!(list_all(&db).await.unwrap().is_empty());
    }
}
