use contracts::domain::a009_page::aggregate::{Page, PageStatus};
use contracts::domain::common::EntityMetadata;
use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "a009_pages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub content: Option<String>,
    pub slug: String,
    pub canonical_url: Option<String>,
    pub image_url: Option<String>,
    pub image_alt: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub status: String,
    pub published_at: Option<String>,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Page {
    fn from(m: Model) -> Self {
        Page {
            id: m.id,
            title: m.title,
            description: m.description,
            content: m.content,
            slug: m.slug,
            canonical_url: m.canonical_url,
            image_url: m.image_url,
            image_alt: m.image_alt,
            meta_title: m.meta_title,
            meta_description: m.meta_description,
            status: PageStatus::parse(&m.status).unwrap_or_default(),
            published_at: m.published_at,
            created_by: m.created_by,
            updated_by: m.updated_by,
            metadata: EntityMetadata {
                created_at: m.created_at,
                updated_at: m.updated_at,
            },
        }
    }
}

fn to_active(p: &Page) -> ActiveModel {
    ActiveModel {
        title: Set(p.title.clone()),
        description: Set(p.description.clone()),
        content: Set(p.content.clone()),
        slug: Set(p.slug.clone()),
        canonical_url: Set(p.canonical_url.clone()),
        image_url: Set(p.image_url.clone()),
        image_alt: Set(p.image_alt.clone()),
        meta_title: Set(p.meta_title.clone()),
        meta_description: Set(p.meta_description.clone()),
        status: Set(p.status.as_str().to_string()),
        published_at: Set(p.published_at.clone()),
        updated_by: Set(p.updated_by),
        updated_at: Set(p.metadata.updated_at),
        ..Default::default()
    }
}

pub async fn list_all(db: &DatabaseConnection) -> anyhow::Result<Vec<Page>> {
    let items = Entity::find()
        .order_by_asc(Column::Title)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(db: &DatabaseConnection, id: i32) -> anyhow::Result<Option<Page>> {
    Ok(Entity::find_by_id(id).one(db).await?.map(Into::into))
}

pub async fn get_by_slug(db: &DatabaseConnection, slug: &str) -> anyhow::Result<Option<Page>> {
    let result = Entity::find().filter(Column::Slug.eq(slug)).one(db).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(db: &DatabaseConnection, aggregate: &Page) -> anyhow::Result<i32> {
    let mut active = to_active(aggregate);
    active.created_by = Set(aggregate.created_by);
    active.created_at = Set(aggregate.metadata.created_at);
    Ok(active.insert(db).await?.id)
}

pub async fn update(db: &DatabaseConnection, aggregate: &Page) -> anyhow::Result<()> {
    let mut active = to_active(aggregate);
    active.id = Set(aggregate.id);
    active.update(db).await?;
    Ok(())
}

pub async fn delete(db: &DatabaseConnection, id: i32) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}
