use contracts::domain::a010_partner_price::aggregate::{PartnerPrice, PricingType};
use contracts::domain::common::EntityMetadata;
use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "a010_partner_prices")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub partner_id: i32,
    pub boat_id: i32,
    pub pricing_type: String,
    pub weekday_price: i64,
    pub weekend_price: i64,
    pub holiday_price: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for PartnerPrice {
    fn from(m: Model) -> Self {
        PartnerPrice {
            id: m.id,
            partner_id: m.partner_id,
            boat_id: m.boat_id,
            pricing_type: PricingType::parse(&m.pricing_type).unwrap_or_default(),
            weekday_price: m.weekday_price,
            weekend_price: m.weekend_price,
            holiday_price: m.holiday_price,
            metadata: EntityMetadata {
                created_at: m.created_at,
                updated_at: m.updated_at,
            },
        }
    }
}

fn to_active(p: &PartnerPrice) -> ActiveModel {
    ActiveModel {
        partner_id: Set(p.partner_id),
        boat_id: Set(p.boat_id),
        pricing_type: Set(p.pricing_type.as_str().to_string()),
        weekday_price: Set(p.weekday_price),
        weekend_price: Set(p.weekend_price),
        holiday_price: Set(p.holiday_price),
        updated_at: Set(p.metadata.updated_at),
        ..Default::default()
    }
}

async fn find_where(db: &DatabaseConnection, condition: Option<sea_orm::Condition>) -> anyhow::Result<Vec<PartnerPrice>> {
    let mut query = Entity::find();
    if let Some(condition) = condition {
        query = query.filter(condition);
    }
    let items = query
        .order_by_asc(Column::PartnerId)
        .order_by_asc(Column::BoatId)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn list_all(db: &DatabaseConnection) -> anyhow::Result<Vec<PartnerPrice>> {
    find_where(db, None).await
}

pub async fn list_by_partner(db: &DatabaseConnection, partner_id: i32) -> anyhow::Result<Vec<PartnerPrice>> {
    find_where(db, Some(sea_orm::Condition::all().add(Column::PartnerId.eq(partner_id)))).await
}

pub async fn list_by_boat(db: &DatabaseConnection, boat_id: i32) -> anyhow::Result<Vec<PartnerPrice>> {
    find_where(db, Some(sea_orm::Condition::all().add(Column::BoatId.eq(boat_id)))).await
}

pub async fn get_by_id(db: &DatabaseConnection, id: i32) -> anyhow::Result<Option<PartnerPrice>> {
    Ok(Entity::find_by_id(id).one(db).await?.map(Into::into))
}

pub async fn insert(db: &DatabaseConnection, aggregate: &PartnerPrice) -> anyhow::Result<i32> {
    let mut active = to_active(aggregate);
    active.created_at = Set(aggregate.metadata.created_at);
    Ok(active.insert(db).await?.id)
}

pub async fn update(db: &DatabaseConnection, aggregate: &PartnerPrice) -> anyhow::Result<()> {
    let mut active = to_active(aggregate);
    active.id = Set(aggregate.id);
    active.update(db).await?;
    Ok(())
}

pub async fn delete(db: &DatabaseConnection, id: i32) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}
