use contracts::domain::a005_country::aggregate::{Country, CountryDto};
use contracts::domain::common::Validate;
use sea_orm::DatabaseConnection;

use super::repository;
use crate::domain::a006_state::repository as state_repository;
use crate::shared::error::{ApiError, ApiResult};

const NOT_FOUND: &str = "País não encontrado";

async fn ensure_unique(db: &DatabaseConnection, country: &Country, except: Option<i32>) -> ApiResult<()> {
    let taken = |found: Option<Country>| found.map(|c| Some(c.id) != except).unwrap_or(false);
    if taken(repository::get_by_name(db, &country.name).await?) {
        return Err(ApiError::conflict("País com este nome já existe"));
    }
    if taken(repository::get_by_code(db, &country.code).await?) {
        return Err(ApiError::conflict("País com este código já existe"));
    }
    Ok(())
}

pub async fn list_all(db: &DatabaseConnection) -> ApiResult<Vec<Country>> {
    Ok(repository::list_all(db).await?)
}

pub async fn get_by_id(db: &DatabaseConnection, id: i32) -> ApiResult<Country> {
    repository::get_by_id(db, id)
        .await?
        .ok_or_else(|| ApiError::not_found(NOT_FOUND))
}

pub async fn create(db: &DatabaseConnection, dto: CountryDto) -> ApiResult<Country> {
    dto.validate()?;
    let mut aggregate = Country::new_for_insert(&dto);
    ensure_unique(db, &aggregate, None).await?;

    aggregate.before_write();
    aggregate.id = repository::insert(db, &aggregate).await?;
    Ok(aggregate)
}

pub async fn update(db: &DatabaseConnection, id: i32, dto: CountryDto) -> ApiResult<Country> {
    dto.validate()?;
    let mut aggregate = get_by_id(db, id).await?;
    aggregate.update(&dto);
    ensure_unique(db, &aggregate, Some(id)).await?;

    aggregate.before_write();
    repository::update(db, &aggregate).await?;
    Ok(aggregate)
}

/// Refused while any state still points at the country
pub async fn delete(db: &DatabaseConnection, id: i32) -> ApiResult<()> {
    get_by_id(db, id).await?;
    if state_repository::count_by_country(db, id).await? > 0 {
        return Err(ApiError::conflict(
            "Não é possível excluir o país pois há estados associados a ele",
        ));
    }
    repository::delete(db, id).await?;
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::shared::data::db::connect_in_memory;

    pub(crate) fn country_dto(name: &str, code: &str) -> CountryDto {
        CountryDto {
            name: name.into(),
            code: code.into(),
        }
    }

    #[tokio::test]
    async fn test_code_and_name_are_unique() {
        let db = connect_in_memory().await.unwrap();
        let brasil = create(&db, country_dto("Brasil", "br")).await.unwrap();
        assert_eq!(brasil.code, "BR");

        let err = create(&db, country_dto("Brazil", "BR")).await.unwrap_err();
        assert_eq!(err.to_string(), "País com este código já existe");
        let err = create(&db, country_dto("Brasil", "BRA")).await.unwrap_err();
        assert_eq!(err.to_string(), "País com este nome já existe");

        let portugal = create(&db, country_dto("Portugal", "PT")).await.unwrap();
        assert!(matches!(
            update(&db, portugal.id, country_dto("Portugal", "br")).await,
            Err(ApiError::Conflict(_))
        ));
        update(&db, portugal.id, country_dto("Portugal", "PRT")).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_missing_country() {
        let db = connect_in_memory().await.unwrap();
        assert!(matches!(delete(&db, 1).await, Err(ApiError::NotFound(_))));
    }
}
