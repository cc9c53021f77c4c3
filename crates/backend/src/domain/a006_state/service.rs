use contracts::domain::a006_state::aggregate::{State, StateDto};
use contracts::domain::common::Validate;
use sea_orm::DatabaseConnection;

use super::repository::{self, Column};
use crate::domain::a005_country::repository as country_repository;
use crate::domain::a007_city::repository as city_repository;
use crate::shared::error::{ApiError, ApiResult};

const NOT_FOUND: &str = "Estado não encontrado";

async fn ensure_valid(db: &DatabaseConnection, state: &State, except: Option<i32>) -> ApiResult<()> {
    if country_repository::get_by_id(db, state.country_id).await?.is_none() {
        return Err(ApiError::not_found("País não encontrado"));
    }
    let taken = |found: Option<State>| found.map(|s| Some(s.id) != except).unwrap_or(false);
    if taken(repository::find_in_country(db, state.country_id, Column::Name, &state.name).await?) {
        return Err(ApiError::conflict("Estado com este nome já existe neste país"));
    }
    if taken(repository::find_in_country(db, state.country_id, Column::Code, &state.code).await?) {
        return Err(ApiError::conflict("Estado com este código já existe neste país"));
    }
    Ok(())
}

pub async fn list(db: &DatabaseConnection, country_id: Option<i32>) -> ApiResult<Vec<State>> {
    Ok(repository::list(db, country_id).await?)
}

pub async fn get_by_id(db: &DatabaseConnection, id: i32) -> ApiResult<State> {
    repository::get_by_id(db, id)
        .await?
        .ok_or_else(|| ApiError::not_found(NOT_FOUND))
}

pub async fn create(db: &DatabaseConnection, dto: StateDto) -> ApiResult<State> {
    dto.validate()?;
    let mut aggregate = State::new_for_insert(&dto);
    ensure_valid(db, &aggregate, None).await?;

    aggregate.before_write();
    aggregate.id = repository::insert(db, &aggregate).await?;
    Ok(aggregate)
}

pub async fn update(db: &DatabaseConnection, id: i32, dto: StateDto) -> ApiResult<State> {
    dto.validate()?;
    let mut aggregate = get_by_id(db, id).await?;
    aggregate.update(&dto);
    ensure_valid(db, &aggregate, Some(id)).await?;

    aggregate.before_write();
    repository::update(db, &aggregate).await?;
    Ok(aggregate)
}

/// Refused while any city still points at the state
pub async fn delete(db: &DatabaseConnection, id: i32) -> ApiResult<()> {
    get_by_id(db, id).await?;
    if city_repository::count_by_state(db, id).await? > 0 {
        return Err(ApiError::conflict(
            "Não é possível excluir o estado pois há cidades associadas a ele",
        ));
    }
    repository::delete(db, id).await?;
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::a005_country::service::{self as country_service, tests::country_dto};
    use crate::shared::data::db::connect_in_memory;

    pub(crate) fn state_dto(name: &str, code: &str, country_id: i32) -> StateDto {
        StateDto {
            name: name.into(),
            code: code.into(),
            country_id,
        }
    }

    #[tokio::test]
    async fn test_filter_by_country_and_unique_per_country() {
        let db = connect_in_memory().await.unwrap();
        let br = country_service::create(&db, country_dto("Brasil", "BR")).await.unwrap();
        let pt = country_service::create(&db, country_dto("Portugal", "PT")).await.unwrap();

        create(&db, state_dto("Santa Catarina", "sc", br.id)).await.unwrap();
        create(&db, state_dto("Rio de Janeiro", "RJ", br.id)).await.unwrap();
        // Same code is fine in another country
        create(&db, state_dto("Setúbal", "SC", pt.id)).await.unwrap();

        let err = create(&db, state_dto("Outro", "SC", br.id)).await.unwrap_err();
        assert_eq!(err.to_string(), "Estado com este código já existe neste país");

        assert_eq!(list(&db, Some(br.id)).await.unwrap().len(), 2);
        assert_eq!(list(&db, Some(pt.id)).await.unwrap().len(), 1);
        assert_eq!(list(&db, None).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_country_with_states_cannot_be_deleted() {
        let db = connect_in_memory().await.unwrap();
        let br = country_service::create(&db, country_dto("Brasil", "BR")).await.unwrap();
        let sc = create(&db, state_dto("Santa Catarina", "SC", br.id)).await.unwrap();

        assert!(matches!(
            country_service::delete(&db, br.id).await,
            Err(ApiError::Conflict(_))
        ));
        delete(&db, sc.id).await.unwrap();
        country_service::delete(&db, br.id).await.unwrap();
    }

    #[tokio::test]
    async fn test_unknown_country() {
        let db = connect_in_memory().await.unwrap();
        let err = create(&db, state_dto("Bahia", "BA", 42)).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }
}
