//! Refresh tokens: only the SHA-256 of the token is stored.

use anyhow::Result;
use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};

use super::jwt;

pub async fn store(db: &DatabaseConnection, user_id: i32, token: &str) -> Result<()> {
    let token_id = uuid::Uuid::new_v4().to_string();
    let expires_at = jwt::calculate_refresh_token_expiration();
    let created_at = Utc::now().to_rfc3339();

    db.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "INSERT INTO sys_refresh_tokens (id, user_id, token_hash, expires_at, created_at)
         VALUES (?, ?, ?, ?, ?)",
        [
            token_id.into(),
            user_id.into(),
            hash_token(token).into(),
            expires_at.into(),
            created_at.into(),
        ],
    ))
    .await?;

    Ok(())
}

/// User id behind a live (not expired, not revoked) token
pub async fn find_user_id(db: &DatabaseConnection, token: &str) -> Result<Option<i32>> {
    let now = Utc::now().to_rfc3339();

    let result = db
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT user_id FROM sys_refresh_tokens
             WHERE token_hash = ? AND expires_at > ? AND revoked_at IS NULL",
            [hash_token(token).into(), now.into()],
        ))
        .await?;

    match result {
        Some(row) => Ok(Some(row.try_get("", "user_id")?)),
        None => Ok(None),
    }
}

pub async fn revoke(db: &DatabaseConnection, token: &str) -> Result<()> {
    let revoked_at = Utc::now().to_rfc3339();

    db.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "UPDATE sys_refresh_tokens SET revoked_at = ? WHERE token_hash = ?",
        [revoked_at.into(), hash_token(token).into()],
    ))
    .await?;

    Ok(())
}

/// Drop every session of a user (password reset, account removal)
pub async fn revoke_all_for_user(db: &DatabaseConnection, user_id: i32) -> Result<()> {
    let revoked_at = Utc::now().to_rfc3339();

    db.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "UPDATE sys_refresh_tokens SET revoked_at = ? WHERE user_id = ? AND revoked_at IS NULL",
        [revoked_at.into(), user_id.into()],
    ))
    .await?;

    Ok(())
}

fn hash_token(token: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::connect_in_memory;

    #[tokio::test]
    async fn test_revoked_token_is_dead() {
        let db = connect_in_memory().await.unwrap();
        let token = jwt::generate_refresh_token();
        store(&db, 3, &token).await.unwrap();
        assert_eq!(find_user_id(&db, &token).await.unwrap(), Some(3));

        revoke(&db, &token).await.unwrap();
        assert_eq!(find_user_id(&db, &token).await.unwrap(), None);
        assert_eq!(find_user_id(&db, "unknown").await.unwrap(), None);
    }

    #[test]
    fn test_hash_is_hex_sha256() {
        assert_eq!(hash_token("abc").len(), 64);
        assert_ne!(hash_token("abc"), "abc");
    }
}
