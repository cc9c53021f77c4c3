use contracts::domain::common::EntityMetadata;
use contracts::system::users::{DocumentType, User, UserRole};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, PaginatorTrait, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "sys_users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub full_name: String,
    pub document: String,
    pub document_type: String,
    pub birth_date: String,
    pub photo_url: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for User {
    fn from(m: Model) -> Self {
        User {
            id: m.id,
            username: m.username,
            email: m.email,
            role: UserRole::parse(&m.role).unwrap_or_default(),
            full_name: m.full_name,
            document: m.document,
            document_type: DocumentType::parse(&m.document_type).unwrap_or_default(),
            birth_date: m.birth_date,
            photo_url: m.photo_url,
            phone: m.phone,
            address: m.address,
            city: m.city,
            state: m.state,
            metadata: EntityMetadata {
                created_at: m.created_at,
                updated_at: m.updated_at,
            },
        }
    }
}

fn profile_columns(user: &User) -> ActiveModel {
    ActiveModel {
        id: NotSet,
        username: Set(user.username.clone()),
        email: Set(user.email.clone()),
        password_hash: NotSet,
        role: Set(user.role.as_str().to_string()),
        full_name: Set(user.full_name.clone()),
        document: Set(user.document.clone()),
        document_type: Set(user.document_type.as_str().to_string()),
        birth_date: Set(user.birth_date.clone()),
        photo_url: Set(user.photo_url.clone()),
        phone: Set(user.phone.clone()),
        address: Set(user.address.clone()),
        city: Set(user.city.clone()),
        state: Set(user.state.clone()),
        created_at: NotSet,
        updated_at: Set(user.metadata.updated_at),
    }
}

pub async fn list_all(db: &DatabaseConnection) -> anyhow::Result<Vec<User>> {
    let items = Entity::find()
        .order_by_asc(Column::FullName)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn list_by_role(db: &DatabaseConnection, role: UserRole) -> anyhow::Result<Vec<User>> {
    let items = Entity::find()
        .filter(Column::Role.eq(role.as_str()))
        .order_by_asc(Column::FullName)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(db: &DatabaseConnection, id: i32) -> anyhow::Result<Option<User>> {
    Ok(Entity::find_by_id(id).one(db).await?.map(Into::into))
}

pub async fn get_by_username(db: &DatabaseConnection, username: &str) -> anyhow::Result<Option<User>> {
    let result = Entity::find()
        .filter(Column::Username.eq(username))
        .one(db)
        .await?;
    Ok(result.map(Into::into))
}

pub async fn get_by_email(db: &DatabaseConnection, email: &str) -> anyhow::Result<Option<User>> {
    let result = Entity::find().filter(Column::Email.eq(email)).one(db).await?;
    Ok(result.map(Into::into))
}

/// `document` must already be normalized to digits
pub async fn get_by_document(db: &DatabaseConnection, document: &str) -> anyhow::Result<Option<User>> {
    let result = Entity::find()
        .filter(Column::Document.eq(document))
        .one(db)
        .await?;
    Ok(result.map(Into::into))
}

pub async fn get_password_hash(db: &DatabaseConnection, id: i32) -> anyhow::Result<Option<String>> {
    Ok(Entity::find_by_id(id).one(db).await?.map(|m| m.password_hash))
}

pub async fn insert(db: &DatabaseConnection, user: &User, password_hash: &str) -> anyhow::Result<i32> {
    let mut active = profile_columns(user);
    active.password_hash = Set(password_hash.to_string());
    active.created_at = Set(user.metadata.created_at);
    let model = active.insert(db).await?;
    Ok(model.id)
}

pub async fn update(db: &DatabaseConnection, user: &User) -> anyhow::Result<()> {
    let mut active = profile_columns(user);
    active.id = Set(user.id);
    active.update(db).await?;
    Ok(())
}

pub async fn update_password(db: &DatabaseConnection, id: i32, password_hash: &str) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(id),
        password_hash: Set(password_hash.to_string()),
        updated_at: Set(chrono::Utc::now()),
        ..Default::default()
    };
    active.update(db).await?;
    Ok(())
}

/// Delete user (hard delete)
pub async fn delete(db: &DatabaseConnection, id: i32) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}

pub async fn count_users(db: &DatabaseConnection) -> anyhow::Result<u64> {
    Ok(Entity::find().count(db).await?)
}
