use contracts::domain::a006_state::aggregate::State;
use contracts::domain::common::EntityMetadata;
use sea_orm::entity::prelude::*;
use sea_orm::{PaginatorTrait, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "a006_states")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub code: String,
    pub country_id: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for State {
    fn from(m: Model) -> Self {
        State {
            id: m.id,
            name: m.name,
            code: m.code,
            country_id: m.country_id,
            metadata: EntityMetadata {
                created_at: m.created_at,
                updated_at: m.updated_at,
            },
        }
    }
}

fn to_active(s: &State) -> ActiveModel {
    ActiveModel {
        name: Set(s.name.clone()),
        code: Set(s.code.clone()),
        country_id: Set(s.country_id),
        updated_at: Set(s.metadata.updated_at),
        ..Default::default()
    }
}

/// All states, or only those of one country
pub async fn list(db: &DatabaseConnection, country_id: Option<i32>) -> anyhow::Result<Vec<State>> {
    let mut query = Entity::find();
    if let Some(country_id) = country_id {
        query = query.filter(Column::CountryId.eq(country_id));
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

pub async fn get_by_id(db: &DatabaseConnection, id: i32) -> anyhow::Result<Option<State>> {
    Ok(Entity::find_by_id(id).one(db).await?.map(Into::into))
}

/// Same name or same code inside one country
pub async fn find_in_country(
    db: &DatabaseConnection,
    country_id: i32,
    column: Column,
    value: &str,
) -> anyhow::Result<Option<State>> {
    let result = Entity::find()
        .filter(Column::CountryId.eq(country_id))
        .filter(column.eq(value))
        .one(db)
        .await?;
    Ok(result.map(Into::into))
}

pub async fn count_by_country(db: &DatabaseConnection, country_id: i32) -> anyhow::Result<u64> {
    Ok(Entity::find()
        .filter(Column::CountryId.eq(country_id))
        .count(db)
        .await?)
}

pub async fn insert(db: &DatabaseConnection, aggregate: &State) -> anyhow::Result<i32> {
    let mut active = to_active(aggregate);
    active.created_at = Set(aggregate.metadata.created_at);
    Ok(active.insert(db).await?.id)
}

pub async fn update(db: &DatabaseConnection, aggregate: &State) -> anyhow::Result<()> {
    let mut active = to_active(aggregate);
    active.id = Set(aggregate.id);
    active.update(db).await?;
    Ok(())
}

pub async fn delete(db: &DatabaseConnection, id: i32) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}
