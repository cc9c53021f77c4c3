use contracts::domain::a003_marina::aggregate::Marina;
use contracts::domain::common::EntityMetadata;
use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "a003_marinas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub address: Option<String>,
    pub contact_name: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub description: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Marina {
    fn from(m: Model) -> Self {
        Marina {
            id: m.id,
            name: m.name,
            city: m.city,
            state: m.state,
            country: m.country,
            address: m.address,
            contact_name: m.contact_name,
            contact_phone: m.contact_phone,
            contact_email: m.contact_email,
            description: m.description,
            latitude: m.latitude,
            longitude: m.longitude,
            metadata: EntityMetadata {
                created_at: m.created_at,
                updated_at: m.updated_at,
            },
        }
    }
}

fn to_active(m: &Marina) -> ActiveModel {
    ActiveModel {
        name: Set(m.name.clone()),
        city: Set(m.city.clone()),
        state: Set(m.state.clone()),
        country: Set(m.country.clone()),
        address: Set(m.address.clone()),
        contact_name: Set(m.contact_name.clone()),
        contact_phone: Set(m.contact_phone.clone()),
        contact_email: Set(m.contact_email.clone()),
        description: Set(m.description.clone()),
        latitude: Set(m.latitude),
        longitude: Set(m.longitude),
        updated_at: Set(m.metadata.updated_at),
        ..Default::default()
    }
}

pub async fn list_all(db: &DatabaseConnection) -> anyhow::Result<Vec<Marina>> {
    let items = Entity::find()
        .order_by_asc(Column::Name)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(db: &DatabaseConnection, id: i32) -> anyhow::Result<Option<Marina>> {
    Ok(Entity::find_by_id(id).one(db).await?.map(Into::into))
}

pub async fn insert(db: &DatabaseConnection, aggregate: &Marina) -> anyhow::Result<i32> {
    let mut active = to_active(aggregate);
    active.created_at = Set(aggregate.metadata.created_at);
    Ok(active.insert(db).await?.id)
}

pub async fn update(db: &DatabaseConnection, aggregate: &Marina) -> anyhow::Result<()> {
    let mut active = to_active(aggregate);
    active.id = Set(aggregate.id);
    active.update(db).await?;
    Ok(())
}

pub async fn delete(db: &DatabaseConnection, id: i32) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}
