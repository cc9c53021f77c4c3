use contracts::domain::a007_city::aggregate::{City, CityDto};
use contracts::domain::common::Validate;
use sea_orm::DatabaseConnection;

use super::repository;
use crate::domain::a006_state::repository as state_repository;
use crate::shared::error::{ApiError, ApiResult};

const NOT_FOUND: &str = "Cidade não encontrada";

async fn ensure_valid(db: &DatabaseConnection, city: &City, except: Option<i32>) -> ApiResult<()> {
    if state_repository::get_by_id(db, city.state_id).await?.is_none() {
        return Err(ApiError::not_found("Estado não encontrado"));
    }
    if let Some(existing) = repository::find_in_state(db, city.state_id, &city.name).await? {
        if Some(existing.id) != except {
            return Err(ApiError::conflict("Cidade com este nome já existe neste estado"));
        }
    }
    Ok(())
}

pub async fn list(db: &DatabaseConnection, state_id: Option<i32>) -> ApiResult<Vec<City>> {
    Ok(repository::list(db, state_id).await?)
}

pub async fn get_by_id(db: &DatabaseConnection, id: i32) -> ApiResult<City> {
    repository::get_by_id(db, id)
        .await?
        .ok_or_else(|| ApiError::not_found(NOT_FOUND))
}

pub async fn create(db: &DatabaseConnection, dto: CityDto) -> ApiResult<City> {
    dto.validate()?;
    let mut aggregate = City::new_for_insert(&dto);
    ensure_valid(db, &aggregate, None).await?;

    aggregate.before_write();
    aggregate.id = repository::insert(db, &aggregate).await?;
    Ok(aggregate)
}

pub async fn update(db: &DatabaseConnection, id: i32, dto: CityDto) -> ApiResult<City> {
    dto.validate()?;
    let mut aggregate = get_by_id(db, id).await?;
    aggregate.update(&dto);
    ensure_valid(db, &aggregate, Some(id)).await?;

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
    use crate::domain::a005_country::service::{self as country_service, tests::country_dto};
    use crate::domain::a006_state::service::{self as state_service, tests::state_dto};
    use crate::shared::data::db::connect_in_memory;

    fn city_dto(name: &str, state_id: i32) -> CityDto {
        CityDto {
            name: name.into(),
            state_id,
        }
    }

    #[tokio::test]
    async fn test_cities_per_state() {
        let db = connect_in_memory().await.unwrap();
        let br = country_service::create(&db, country_dto("Brasil", "BR")).await.unwrap();
        let sc = state_service::create(&db, state_dto("Santa Catarina", "SC", br.id)).await.unwrap();
        let rj = state_service::create(&db, state_dto("Rio de Janeiro", "RJ", br.id)).await.unwrap();

        let floripa = create(&db, city_dto("Florianópolis", sc.id)).await.unwrap();
        create(&db, city_dto("Angra dos Reis", rj.id)).await.unwrap();
        assert!(matches!(
            create(&db, city_dto("Florianópolis", sc.id)).await,
            Err(ApiError::Conflict(_))
        ));

        let in_sc = list(&db, Some(sc.id)).await.unwrap();
        assert_eq!(in_sc.len(), 1);
        assert_eq!(in_sc[0].name, "Florianópolis");

        // State delete blocked until its cities are gone
        assert!(matches!(
            state_service::delete(&db, sc.id).await,
            Err(ApiError::Conflict(_))
        ));
        delete(&db, floripa.id).await.unwrap();
        state_service::delete(&db, sc.id).await.unwrap();
    }

    #[tokio::test]
    async fn test_state_required() {
        let db = connect_in_memory().await.unwrap();
        assert!(matches!(
            create(&db, city_dto("Itajaí", 0)).await,
            Err(ApiError::Validation(_))
        ));
        assert!(matches!(
            create(&db, city_dto("Itajaí", 9)).await,
            Err(ApiError::NotFound(_))
        ));
    }
}
