use contracts::domain::a004_itinerary::aggregate::Itinerary;
use contracts::domain::common::EntityMetadata;
use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "a004_itineraries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub observations: Option<String>,
    pub partner_id: Option<i32>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Itinerary {
    fn from(m: Model) -> Self {
        Itinerary {
            id: m.id,
            name: m.name,
            description: m.description,
            observations: m.observations,
            partner_id: m.partner_id,
            metadata: EntityMetadata {
                created_at: m.created_at,
                updated_at: m.updated_at,
            },
        }
    }
}

fn to_active(i: &Itinerary) -> ActiveModel {
    ActiveModel {
        name: Set(i.name.clone()),
        description: Set(i.description.clone()),
        observations: Set(i.observations.clone()),
        partner_id: Set(i.partner_id),
        updated_at: Set(i.metadata.updated_at),
        ..Default::default()
    }
}

pub async fn list_all(db: &DatabaseConnection) -> anyhow::Result<Vec<Itinerary>> {
    let items = Entity::find()
        .order_by_asc(Column::Name)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn list_by_partner(db: &DatabaseConnection, partner_id: i32) -> anyhow::Result<Vec<Itinerary>> {
    let items = Entity::find()
        .filter(Column::PartnerId.eq(partner_id))
        .order_by_asc(Column::Name)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(db: &DatabaseConnection, id: i32) -> anyhow::Result<Option<Itinerary>> {
    Ok(Entity::find_by_id(id).one(db).await?.map(Into::into))
}

pub async fn insert(db: &DatabaseConnection, aggregate: &Itinerary) -> anyhow::Result<i32> {
    let mut active = to_active(aggregate);
    active.created_at = Set(aggregate.metadata.created_at);
    Ok(active.insert(db).await?.id)
}

pub async fn update(db: &DatabaseConnection, aggregate: &Itinerary) -> anyhow::Result<()> {
    let mut active = to_active(aggregate);
    active.id = Set(aggregate.id);
    active.update(db).await?;
    Ok(())
}

pub async fn delete(db: &DatabaseConnection, id: i32) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}
