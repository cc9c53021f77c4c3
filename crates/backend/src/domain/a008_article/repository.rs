use contracts::domain::a008_article::aggregate::Article;
use contracts::domain::common::EntityMetadata;
use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, Set};

use crate::shared::data::json_column::{decode_list, encode_list};

/// `paragraphs` and `tags` are JSON arrays stored as TEXT
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "a008_articles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub path: String,
    pub author: String,
    pub description: String,
    pub paragraphs: String,
    pub image: Option<String>,
    pub caption: Option<String>,
    pub tags: String,
    pub publication_date: Option<String>,
    pub enabled: bool,
    pub is_draft: bool,
    pub is_deleted: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Article {
    fn from(m: Model) -> Self {
        Article {
            id: m.id,
            title: m.title,
            path: m.path,
            author: m.author,
            description: m.description,
            paragraphs: decode_list(&m.paragraphs),
            image: m.image,
            caption: m.caption,
            tags: decode_list(&m.tags),
            publication_date: m.publication_date,
            enabled: m.enabled,
            is_draft: m.is_draft,
            is_deleted: m.is_deleted,
            metadata: EntityMetadata {
                created_at: m.created_at,
                updated_at: m.updated_at,
            },
        }
    }
}

fn to_active(a: &Article) -> ActiveModel {
    ActiveModel {
        title: Set(a.title.clone()),
        path: Set(a.path.clone()),
        author: Set(a.author.clone()),
        description: Set(a.description.clone()),
        paragraphs: Set(encode_list(&a.paragraphs)),
        image: Set(a.image.clone()),
        caption: Set(a.caption.clone()),
        tags: Set(encode_list(&a.tags)),
        publication_date: Set(a.publication_date.clone()),
        enabled: Set(a.enabled),
        is_draft: Set(a.is_draft),
        is_deleted: Set(a.is_deleted),
        updated_at: Set(a.metadata.updated_at),
        ..Default::default()
    }
}

fn into_aggregates(models: Vec<Model>) -> Vec<Article> {
    models.into_iter().map(Into::into).collect()
}

/// Admin list: every article, trash included, newest first
pub async fn list_all(db: &DatabaseConnection) -> anyhow::Result<Vec<Article>> {
    let models = Entity::find()
        .order_by_desc(Column::CreatedAt)
        .all(db)
        .await?;
    Ok(into_aggregates(models))
}

/// Enabled, not a draft, not in the trash
pub async fn list_published(db: &DatabaseConnection) -> anyhow::Result<Vec<Article>> {
    let models = Entity::find()
        .filter(Column::Enabled.eq(true))
        .filter(Column::IsDraft.eq(false))
        .filter(Column::IsDeleted.eq(false))
        .order_by_desc(Column::PublicationDate)
        .order_by_desc(Column::CreatedAt)
        .all(db)
        .await?;
    Ok(into_aggregates(models))
}

pub async fn get_by_id(db: &DatabaseConnection, id: i32) -> anyhow::Result<Option<Article>> {
    Ok(Entity::find_by_id(id).one(db).await?.map(Into::into))
}

pub async fn get_by_path(db: &DatabaseConnection, path: &str) -> anyhow::Result<Option<Article>> {
    let result = Entity::find().filter(Column::Path.eq(path)).one(db).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(db: &DatabaseConnection, aggregate: &Article) -> anyhow::Result<i32> {
    let mut active = to_active(aggregate);
    active.created_at = Set(aggregate.metadata.created_at);
    Ok(active.insert(db).await?.id)
}

pub async fn update(db: &DatabaseConnection, aggregate: &Article) -> anyhow::Result<()> {
    let mut active = to_active(aggregate);
    active.id = Set(aggregate.id);
    active.update(db).await?;
    Ok(())
}

pub async fn delete(db: &DatabaseConnection, id: i32) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}
