use contracts::domain::a008_article::aggregate::{
    Article, ArticleDto, ArticleStatusField, ArticleStatusPatch,
};
use contracts::domain::common::Validate;
use sea_orm::DatabaseConnection;

use super::repository;
use crate::shared::error::{ApiError, ApiResult};

const NOT_FOUND: &str = "Artigo não encontrado";

async fn ensure_unique_path(db: &DatabaseConnection, path: &str, except: Option<i32>) -> ApiResult<()> {
    if let Some(existing) = repository::get_by_path(db, path).await? {
        if Some(existing.id) != except {
            return Err(ApiError::conflict("Já existe um artigo com este caminho"));
        }
    }
    Ok(())
}

pub async fn list_all(db: &DatabaseConnection) -> ApiResult<Vec<Article>> {
    Ok(repository::list_all(db).await?)
}

pub async fn list_public(db: &DatabaseConnection) -> ApiResult<Vec<Article>> {
    Ok(repository::list_published(db).await?)
}

pub async fn get_by_id(db: &DatabaseConnection, id: i32) -> ApiResult<Article> {
    repository::get_by_id(db, id)
        .await?
        .ok_or_else(|| ApiError::not_found(NOT_FOUND))
}

/// Drafts, disabled and trashed articles look missing to the public site
pub async fn get_public_by_path(db: &DatabaseConnection, path: &str) -> ApiResult<Article> {
    repository::get_by_path(db, path)
        .await?
        .filter(Article::is_published)
        .ok_or_else(|| ApiError::not_found(NOT_FOUND))
}

pub async fn create(db: &DatabaseConnection, dto: ArticleDto) -> ApiResult<Article> {
    dto.validate()?;
    let mut aggregate = Article::new_for_insert(&dto);
    ensure_unique_path(db, &aggregate.path, None).await?;

    aggregate.before_write();
    aggregate.id = repository::insert(db, &aggregate).await?;
    tracing::info!("Article '{}' created at /{}", aggregate.title, aggregate.path);
    Ok(aggregate)
}

pub async fn update(db: &DatabaseConnection, id: i32, dto: ArticleDto) -> ApiResult<Article> {
    dto.validate()?;
    let mut aggregate = get_by_id(db, id).await?;
    aggregate.update(&dto);
    ensure_unique_path(db, &aggregate.path, Some(id)).await?;

    aggregate.before_write();
    repository::update(db, &aggregate).await?;
    Ok(aggregate)
}

pub async fn set_status(db: &DatabaseConnection, id: i32, patch: ArticleStatusPatch) -> ApiResult<Article> {
    let mut aggregate = get_by_id(db, id).await?;
    aggregate.set_status(patch.field, patch.value);
    aggregate.before_write();
    repository::update(db, &aggregate).await?;
    Ok(aggregate)
}

/// Without `permanent` the article only moves to the trash
pub async fn delete(db: &DatabaseConnection, id: i32, permanent: bool) -> ApiResult<()> {
    if permanent {
        if !repository::delete(db, id).await? {
            return Err(ApiError::not_found(NOT_FOUND));
        }
        tracing::info!("Article {} permanently deleted", id);
        return Ok(());
    }
    set_status(
        db,
        id,
        ArticleStatusPatch {
            field: ArticleStatusField::IsDeleted,
            value: true,
        },
    )
    .await?;
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::shared::data::db::connect_in_memory;

    pub(crate) fn article_dto(path: &str) -> ArticleDto {
        ArticleDto {
            title: "Roteiros em Angra".into(),
            path: path.into(),
            author: "Equipe Charter".into(),
            description: "Os melhores passeios de lancha".into(),
            paragraphs: vec!["Primeiro parágrafo".into(), "Segundo parágrafo".into()],
            tags: vec!["angra".into(), "lancha".into()],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_lists_survive_storage() {
        let db = connect_in_memory().await.unwrap();
        let created = create(&db, article_dto("roteiros-angra")).await.unwrap();
        let stored = get_by_id(&db, created.id).await.unwrap();
        assert_eq!(stored.paragraphs.len(), 2);
        assert_eq!(stored.tags, vec!["angra".to_string(), "lancha".to_string()]);
        assert!(stored.enabled);
    }

    #[tokio::test]
    async fn test_path_unique() {
        let db = connect_in_memory().await.unwrap();
        create(&db, article_dto("roteiros-angra")).await.unwrap();
        let err = create(&db, article_dto("roteiros-angra")).await.unwrap_err();
        assert!(matches!(err, ApiError::Conflict(_)));
        let other = create(&db, article_dto("ilha-grande")).await.unwrap();
        assert!(matches!(
            update(&db, other.id, article_dto("roteiros-angra")).await,
            Err(ApiError::Conflict(_))
        ));
    }

    #[tokio::test]
    async fn test_soft_then_permanent_delete() {
        let db = connect_in_memory().await.unwrap();
        let article = create(&db, article_dto("roteiros-angra")).await.unwrap();
        assert_eq!(list_public(&db).await.unwrap().len(), 1);
        get_public_by_path(&db, "roteiros-angra").await.unwrap();

        delete(&db, article.id, false).await.unwrap();
        assert!(list_public(&db).await.unwrap().is_empty());
        assert!(matches!(
            get_public_by_path(&db, "roteiros-angra").await,
            Err(ApiError::NotFound(_))
        ));
        let admin_list = list_all(&db).await.unwrap();
        assert_eq!(admin_list.len(), 1);
        assert!(admin_list[0].is_deleted);

        delete(&db, article.id, true).await.unwrap();
        assert!(list_all(&db).await.unwrap().is_empty());
        assert!(matches!(delete(&db, article.id, true).await, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_drafts_are_not_public() {
        let db = connect_in_memory().await.unwrap();
        let article = create(
            &db,
            ArticleDto {
                is_draft: true,
                ..article_dto("rascunho")
            },
        )
        .await
        .unwrap();
        assert!(list_public(&db).await.unwrap().is_empty());

        let published = set_status(
            &db,
            article.id,
            ArticleStatusPatch {
                field: ArticleStatusField::IsDraft,
                value: false,
            },
        )
        .await
        .unwrap();
        assert!(published.is_published());
        assert_eq!(list_public(&db).await.unwrap().len(), 1);
    }
}
