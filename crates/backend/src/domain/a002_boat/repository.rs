use contracts::domain::a002_boat::aggregate::{Boat, BoatStatus};
use contracts::domain::common::EntityMetadata;
use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "a002_boats")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub status: String,
    pub boat_type: String,
    pub passenger_count: i32,
    pub has_sailor: bool,
    pub model: Option<String>,
    pub size: Option<i32>,
    pub marina_id: Option<i32>,
    pub cruise_speed: Option<String>,
    pub allows_overnight: bool,
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub fuel: Option<String>,
    pub suites: Option<i32>,
    pub cabins: Option<i32>,
    pub bathrooms: Option<i32>,
    pub tie_document: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Boat {
    fn from(m: Model) -> Self {
        Boat {
            id: m.id,
            name: m.name,
            status: BoatStatus::parse(&m.status).unwrap_or_default(),
            boat_type: m.boat_type,
            passenger_count: m.passenger_count,
            has_sailor: m.has_sailor,
            model: m.model,
            size: m.size,
            marina_id: m.marina_id,
            cruise_speed: m.cruise_speed,
            allows_overnight: m.allows_overnight,
            country: m.country,
            state: m.state,
            city: m.city,
            fuel: m.fuel,
            suites: m.suites,
            cabins: m.cabins,
            bathrooms: m.bathrooms,
            tie_document: m.tie_document,
            metadata: EntityMetadata {
                created_at: m.created_at,
                updated_at: m.updated_at,
            },
        }
    }
}

fn to_active(b: &Boat) -> ActiveModel {
    ActiveModel {
        name: Set(b.name.clone()),
        status: Set(b.status.as_str().to_string()),
        boat_type: Set(b.boat_type.clone()),
        passenger_count: Set(b.passenger_count),
        has_sailor: Set(b.has_sailor),
        model: Set(b.model.clone()),
        size: Set(b.size),
        marina_id: Set(b.marina_id),
        cruise_speed: Set(b.cruise_speed.clone()),
        allows_overnight: Set(b.allows_overnight),
        country: Set(b.country.clone()),
        state: Set(b.state.clone()),
        city: Set(b.city.clone()),
        fuel: Set(b.fuel.clone()),
        suites: Set(b.suites),
        cabins: Set(b.cabins),
        bathrooms: Set(b.bathrooms),
        tie_document: Set(b.tie_document.clone()),
        updated_at: Set(b.metadata.updated_at),
        ..Default::default()
    }
}

pub async fn list_all(db: &DatabaseConnection) -> anyhow::Result<Vec<Boat>> {
    let items = Entity::find()
        .order_by_asc(Column::Name)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(db: &DatabaseConnection, id: i32) -> anyhow::Result<Option<Boat>> {
    Ok(Entity::find_by_id(id).one(db).await?.map(Into::into))
}

pub async fn insert(db: &DatabaseConnection, aggregate: &Boat) -> anyhow::Result<i32> {
    let mut active = to_active(aggregate);
    active.created_at = Set(aggregate.metadata.created_at);
    Ok(active.insert(db).await?.id)
}

pub async fn update(db: &DatabaseConnection, aggregate: &Boat) -> anyhow::Result<()> {
    let mut active = to_active(aggregate);
    active.id = Set(aggregate.id);
    active.update(db).await?;
    Ok(())
}

pub async fn delete(db: &DatabaseConnection, id: i32) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}
