use contracts::domain::a005_country::aggregate::Country;
use contracts::domain::common::EntityMetadata;
use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "a005_countries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub code: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Country {
    fn from(m: Model) -> Self {
        Country {
            id: m.id,
            name: m.name,
            code: m.code,
            metadata: EntityMetadata {
                created_at: m.created_at,
                updated_at: m.updated_at,
            },
        }
    }
}

pub async fn list_all(db: &DatabaseConnection) -> anyhow::Result<Vec<Country>> {
    let items = Entity::find()
        .order_by_asc(Column::Name)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(db: &DatabaseConnection, id: i32) -> anyhow::Result<Option<Country>> {
    Ok(Entity::find_by_id(id).one(db).await?.map(Into::into))
}

pub async fn get_by_code(db: &DatabaseConnection, code: &str) -> anyhow::Result<Option<Country>> {
    let result = Entity::find().filter(Column::Code.eq(code)).one(db).await?;
    Ok(result.map(Into::into))
}

pub async fn get_by_name(db: &DatabaseConnection, name: &str) -> anyhow::Result<Option<Country>> {
    let result = Entity::find().filter(Column::Name.eq(name)).one(db).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(db: &DatabaseConnection, aggregate: &Country) -> anyhow::Result<i32> {
    let active = ActiveModel {
        name: Set(aggregate.name.clone()),
        code: Set(aggregate.code.clone()),
        created_at: Set(aggregate.metadata.created_at),
        updated_at: Set(aggregate.metadata.updated_at),
        ..Default::default()
    };
    Ok(active.insert(db).await?.id)
}

pub async fn update(db: &DatabaseConnection, aggregate: &Country) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(aggregate.id),
        name: Set(aggregate.name.clone()),
        code: Set(aggregate.code.clone()),
        updated_at: Set(aggregate.metadata.updated_at),
        ..Default::default()
    };
    active.update(db).await?;
    Ok(())
}

pub async fn delete(db: &DatabaseConnection, id: i32) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}
