use contracts::domain::a011_booking::aggregate::{Booking, BookingPeriod, BookingStatus, PaymentStatus};
use contracts::domain::common::EntityMetadata;
use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "a011_bookings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub boat_id: i32,
    pub itinerary_id: i32,
    pub marina_id: i32,
    pub date: String,
    pub period: String,
    pub status: String,
    pub passenger_count: i32,
    pub total_price: i64,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub special_requests: Option<String>,
    pub payment_status: String,
    pub payment_method: Option<String>,
    pub payment_date: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Booking {
    fn from(m: Model) -> Self {
        Booking {
            id: m.id,
            user_id: m.user_id,
            boat_id: m.boat_id,
            itinerary_id: m.itinerary_id,
            marina_id: m.marina_id,
            date: m.date,
            period: BookingPeriod::parse(&m.period).unwrap_or_default(),
            status: BookingStatus::parse(&m.status).unwrap_or_default(),
            passenger_count: m.passenger_count,
            total_price: m.total_price,
            customer_name: m.customer_name,
            customer_email: m.customer_email,
            customer_phone: m.customer_phone,
            special_requests: m.special_requests,
            payment_status: PaymentStatus::parse(&m.payment_status).unwrap_or_default(),
            payment_method: m.payment_method,
            payment_date: m.payment_date,
            metadata: EntityMetadata {
                created_at: m.created_at,
                updated_at: m.updated_at,
            },
        }
    }
}

fn to_active(b: &Booking) -> ActiveModel {
    ActiveModel {
        user_id: Set(b.user_id),
        boat_id: Set(b.boat_id),
        itinerary_id: Set(b.itinerary_id),
        marina_id: Set(b.marina_id),
        date: Set(b.date.clone()),
        period: Set(b.period.as_str().to_string()),
        status: Set(b.status.as_str().to_string()),
        passenger_count: Set(b.passenger_count),
        total_price: Set(b.total_price),
        customer_name: Set(b.customer_name.clone()),
        customer_email: Set(b.customer_email.clone()),
        customer_phone: Set(b.customer_phone.clone()),
        special_requests: Set(b.special_requests.clone()),
        payment_status: Set(b.payment_status.as_str().to_string()),
        payment_method: Set(b.payment_method.clone()),
        payment_date: Set(b.payment_date.clone()),
        updated_at: Set(b.metadata.updated_at),
        ..Default::default()
    }
}

pub async fn list_all(db: &DatabaseConnection) -> anyhow::Result<Vec<Booking>> {
    let items = Entity::find()
        .order_by_desc(Column::Date)
        .order_by_desc(Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn list_by_user(db: &DatabaseConnection, user_id: i32) -> anyhow::Result<Vec<Booking>> {
    let items = Entity::find()
        .filter(Column::UserId.eq(user_id))
        .order_by_desc(Column::Date)
        .order_by_desc(Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(db: &DatabaseConnection, id: i32) -> anyhow::Result<Option<Booking>> {
    Ok(Entity::find_by_id(id).one(db).await?.map(Into::into))
}

pub async fn insert(db: &DatabaseConnection, aggregate: &Booking) -> anyhow::Result<i32> {
    let mut active = to_active(aggregate);
    active.created_at = Set(aggregate.metadata.created_at);
    Ok(active.insert(db).await?.id)
}

pub async fn update(db: &DatabaseConnection, aggregate: &Booking) -> anyhow::Result<()> {
    let mut active = to_active(aggregate);
    active.id = Set(aggregate.id);
    active.update(db).await?;
    Ok(())
}

pub async fn delete(db: &DatabaseConnection, id: i32) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}
