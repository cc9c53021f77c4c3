use contracts::domain::a007_city::aggregate::City;
use contracts::domain::common::EntityMetadata;
use sea_orm::entity::prelude::*;
use sea_orm::{PaginatorTrait, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "a007_cities")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub state_id: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for City {
    fn from(m: Model) -> Self {
        City {
            id: m.id,
            name: m.name,
            state_id: m.state_id,
            metadata: EntityMetadata {
                created_at: m.created_at,
                updated_at: m.updated_at,
            },
        }
    }
}

pub async fn list(db: &DatabaseConnection, state_id: Option<i32>) -> anyhow::Result<Vec<City>> {
    let mut query = Entity::find();
    if let Some(state_id) = state_id {
        query = query.filter(Column::StateId.eq(state_id));
    }
    let items = query
        .order_by_asc(Column::Name)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(db: &DatabaseConnection, id: i32) -> anyhow::Result<Option<City>> {
    Ok(Entity::find_by_id(id).one(db).await?.map(Into::into))
}

pub async fn find_in_state(db: &DatabaseConnection, state_id: i32, name: &str) -> anyhow::Result<Option<City>> {
    let result = Entity::find()
        .filter(Column::StateId.eq(state_id))
        .filter(Column::Name.eq(name))
        .one(db)
        .await?;
    Ok(result.map(Into::into))
}

pub async fn count_by_state(db: &DatabaseConnection, state_id: i32) -> anyhow::Result<u64> {
    Ok(Entity::find()
        .filter(Column::StateId.eq(state_id))
        .count(db)
        .await?)
}

pub async fn insert(db: &DatabaseConnection, aggregate: &City) -> anyhow::Result<i32> {
    let active = ActiveModel {
        name: Set(aggregate.name.clone()),
        state_id: Set(aggregate.state_id),
        created_at: Set(aggregate.metadata.created_at),
        updated_at: Set(aggregate.metadata.updated_at),
        ..Default::default()
    };
    Ok(active.insert(db).await?.id)
}

pub async fn update(db: &DatabaseConnection, aggregate: &City) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(aggregate.id),
        name: Set(aggregate.name.clone()),
        state_id: Set(aggregate.state_id),
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
