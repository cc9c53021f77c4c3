use contracts::domain::a001_boat_type::aggregate::{BoatType, BoatTypeDto};
use contracts::domain::a002_boat::aggregate::DEFAULT_BOAT_TYPES;
use contracts::domain::common::Validate;
use sea_orm::DatabaseConnection;

use super::repository;
use crate::shared::error::{ApiError, ApiResult};

const NOT_FOUND: &str = "Tipo de embarcação não encontrado";

async fn ensure_unique_name(db: &DatabaseConnection, name: &str, except: Option<i32>) -> ApiResult<()> {
    if let Some(existing) = repository::get_by_name(db, name).await? {
        if Some(existing.id) != except {
            return Err(ApiError::conflict("Já existe um tipo de embarcação com este nome"));
        }
    }
    Ok(())
}

pub async fn list_all(db: &DatabaseConnection) -> ApiResult<Vec<BoatType>> {
    Ok(repository::list_all(db).await?)
}

pub async fn get_by_id(db: &DatabaseConnection, id: i32) -> ApiResult<BoatType> {
    repository::get_by_id(db, id)
        .await?
        .ok_or_else(|| ApiError::not_found(NOT_FOUND))
}

pub async fn create(db: &DatabaseConnection, dto: BoatTypeDto) -> ApiResult<BoatType> {
    dto.validate()?;
    let mut aggregate = BoatType::new_for_insert(&dto);
    ensure_unique_name(db, &aggregate.name, None).await?;

    aggregate.before_write();
    aggregate.id = repository::insert(db, &aggregate).await?;
    Ok(aggregate)
}

pub async fn update(db: &DatabaseConnection, id: i32, dto: BoatTypeDto) -> ApiResult<BoatType> {
    dto.validate()?;
    let mut aggregate = get_by_id(db, id).await?;
    aggregate.update(&dto);
    ensure_unique_name(db, &aggregate.name, Some(id)).await?;

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

/// Seeds the default categories into an empty table
pub async fn ensure_defaults(db: &DatabaseConnection) -> anyhow::Result<()> {
    if !repository::list_all(db).await?.is_empty() {
        return Ok(());
    }
    for name in DEFAULT_BOAT_TYPES {
        let mut aggregate = BoatType::new_for_insert(&BoatTypeDto {
            name: name.to_string(),
            description: None,
        });
        aggregate.before_write();
        repository::insert(db, &aggregate).await?;
    }
    tracing::info!("Seeded {} default boat types", DEFAULT_BOAT_TYPES.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::connect_in_memory;

    fn dto(name: &str) -> BoatTypeDto {
        BoatTypeDto {
            name: name.into(),
            description: None,
        }
    }

    #[tokio::test]
    async fn test_crud_and_unique_name() {
        let db = connect_in_memory().await.unwrap();
        let lancha = create(&db, dto("Lancha")).await.unwrap();
        let veleiro = create(&db, dto(" Veleiro ")).await.unwrap();
        assert_eq!(veleiro.name, "Veleiro");

        assert!(matches!(create(&db, dto("Lancha")).await, Err(ApiError::Conflict(_))));
        assert!(matches!(
            update(&db, veleiro.id, dto("Lancha")).await,
            Err(ApiError::Conflict(_))
        ));
        // Renaming to its own name is fine
        update(&db, lancha.id, dto("Lancha")).await.unwrap();

        delete(&db, lancha.id).await.unwrap();
        assert!(matches!(get_by_id(&db, lancha.id).await, Err(ApiError::NotFound(_))));
        assert_eq!(list_all(&db).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_dto_writes_nothing() {
        let db = connect_in_memory().await.unwrap();
        assert!(matches!(create(&db, dto("  ")).await, Err(ApiError::Validation(_))));
        assert!(list_all(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_defaults_seeded_once() {
        let db = connect_in_memory().await.unwrap();
        ensure_defaults(&db).await.unwrap();
        ensure_defaults(&db).await.unwrap();
        assert_eq!(list_all(&db).await.unwrap().len(), DEFAULT_BOAT_TYPES.len());
    }
}
