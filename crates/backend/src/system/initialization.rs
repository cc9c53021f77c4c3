use anyhow::{Context, Result};
use contracts::system::users::{DocumentType, UserDto, UserRole};
use sea_orm::DatabaseConnection;

use crate::shared::config::AuthConfig;
use crate::system::users::{repository, service};

/// Ensure admin user exists (create if table is empty)
pub async fn ensure_admin_user_exists(db: &DatabaseConnection, auth: &AuthConfig) -> Result<()> {
    let count = repository::count_users(db).await?;
    if count > 0 {
        return Ok(());
    }

    tracing::info!("No users found. Creating default admin user...");

    let admin_dto = UserDto {
        username: auth.admin_username.clone(),
        email: format!("{}@localhost.local", auth.admin_username),
        role: UserRole::Admin,
        full_name: "Administrador".to_string(),
        document: "00000000000".to_string(),
        document_type: DocumentType::Cpf,
        birth_date: "1970-01-01".to_string(),
        photo_url: "/img/avatar.png".to_string(),
        password: Some(auth.admin_password.clone()),
        confirm_password: Some(auth.admin_password.clone()),
        ..Default::default()
    };

    let admin = service::create(db, admin_dto)
        .await
        .context("Failed to create default admin user")?;

    tracing::warn!("═══════════════════════════════════════════════");
    tracing::warn!("  Default admin user created!");
    tracing::warn!("  Username: {}", admin.username);
    tracing::warn!("  User ID: {}", admin.id);
    tracing::warn!("  ⚠️  PLEASE CHANGE THE PASSWORD IMMEDIATELY!");
    tracing::warn!("═══════════════════════════════════════════════");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::connect_in_memory;

    #[tokio::test]
    async fn test_admin_created_once() {
        let db = connect_in_memory().await.unwrap();
        let auth = AuthConfig::default();
        ensure_admin_user_exists(&db, &auth).await.unwrap();
        ensure_admin_user_exists(&db, &auth).await.unwrap();
        assert_eq!(repository::count_users(&db).await.unwrap(), 1);

        let admin = service::verify_credentials(&db, &auth.admin_username, &auth.admin_password)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(admin.role, UserRole::Admin);
    }
}
