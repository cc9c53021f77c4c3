use contracts::domain::a009_page::aggregate::{Page, PageDto, PageStatus};
use contracts::domain::common::Validate;
use sea_orm::DatabaseConnection;

use super::repository;
use crate::shared::error::{ApiError, ApiResult};
use crate::system::auth::extractor::CurrentUser;

const NOT_FOUND: &str = "Página não encontrada";

async fn ensure_unique_slug(db: &DatabaseConnection, slug: &str, except: Option<i32>) -> ApiResult<()> {
    if let Some(existing) = repository::get_by_slug(db, slug).await? {
        if Some(existing.id) != except {
            return Err(ApiError::conflict("Já existe uma página com este slug"));
        }
    }
    Ok(())
}

pub async fn list_all(db: &DatabaseConnection) -> ApiResult<Vec<Page>> {
    Ok(repository::list_all(db).await?)
}

pub async fn get_by_id(db: &DatabaseConnection, id: i32) -> ApiResult<Page> {
    repository::get_by_id(db, id)
        .await?
        .ok_or_else(|| ApiError::not_found(NOT_FOUND))
}

/// Only published pages are visible without a session
pub async fn get_public_by_slug(db: &DatabaseConnection, slug: &str) -> ApiResult<Page> {
    repository::get_by_slug(db, slug)
        .await?
        .filter(|page| page.status == PageStatus::Published)
        .ok_or_else(|| ApiError::not_found(NOT_FOUND))
}

pub async fn create(db: &DatabaseConnection, author: &CurrentUser, dto: PageDto) -> ApiResult<Page> {
    dto.validate()?;
    let mut aggregate = Page::new_for_insert(&dto, Some(author.id));
    ensure_unique_slug(db, &aggregate.slug, None).await?;

    aggregate.before_write();
    aggregate.id = repository::insert(db, &aggregate).await?;
    Ok(aggregate)
}

pub async fn update(db: &DatabaseConnection, editor: &CurrentUser, id: i32, dto: PageDto) -> ApiResult<Page> {
    dto.validate()?;
    let mut aggregate = get_by_id(db, id).await?;
    aggregate.update(&dto, Some(editor.id));
    ensure_unique_slug(db, &aggregate.slug, Some(id)).await?;

    aggregate.before_write();
    repository::update(db, &aggregate).await?;
    Ok(aggregate)
}

pub async fn set_status(
    db: &DatabaseConnection,
    editor: &CurrentUser,
    id: i32,
    status: PageStatus,
) -> ApiResult<Page> {
    let mut aggregate = get_by_id(db, id).await?;
    aggregate.set_status(status);
    aggregate.updated_by = Some(editor.id);
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
    use contracts::system::users::UserRole;

    fn dto(slug: &str) -> PageDto {
        PageDto {
            title: "Sobre nós".into(),
            slug: slug.into(),
            content: Some("<p>Charter desde 2010</p>".into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_publish_flow() {
        let db = connect_in_memory().await.unwrap();
        let admin = CurrentUser::for_tests(1, UserRole::Admin);
        let page = create(&db, &admin, dto("sobre-nos")).await.unwrap();
        assert_eq!(page.status, PageStatus::Draft);
        assert_eq!(page.created_by, Some(1));
        assert!(matches!(
            get_public_by_slug(&db, "sobre-nos").await,
            Err(ApiError::NotFound(_))
        ));

        let editor = CurrentUser::for_tests(2, UserRole::Admin);
        let published = set_status(&db, &editor, page.id, PageStatus::Published).await.unwrap();
        assert!(published.published_at.is_some());
        assert_eq!(published.updated_by, Some(2));

        let public = get_public_by_slug(&db, "sobre-nos").await.unwrap();
        assert_eq!(public.created_by, Some(1));
        assert_eq!(public.published_at, published.published_at);
    }

    #[tokio::test]
    async fn test_slug_unique() {
        let db = connect_in_memory().await.unwrap();
        let admin = CurrentUser::for_tests(1, UserRole::Admin);
        create(&db, &admin, dto("sobre-nos")).await.unwrap();
        assert!(matches!(
            create(&db, &admin, dto("sobre-nos")).await,
            Err(ApiError::Conflict(_))
        ));
    }
}
