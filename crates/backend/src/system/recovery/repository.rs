use anyhow::Result;
use chrono::{DateTime, Utc};
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};

pub async fn insert_code(
    db: &DatabaseConnection,
    user_id: i32,
    code: &str,
    expires_at: DateTime<Utc>,
) -> Result<()> {
    db.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "INSERT INTO sys_recovery_codes (user_id, code, expires_at, used, created_at)
         VALUES (?, ?, ?, 0, ?)",
        [
            user_id.into(),
            code.to_string().into(),
            expires_at.to_rfc3339().into(),
            Utc::now().to_rfc3339().into(),
        ],
    ))
    .await?;
    Ok(())
}

/// Id of an unused, unexpired code for the user
pub async fn find_valid(
    db: &DatabaseConnection,
    user_id: i32,
    code: &str,
    now: DateTime<Utc>,
) -> Result<Option<i32>> {
    let result = db
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT id FROM sys_recovery_codes
             WHERE user_id = ? AND code = ? AND used = 0 AND expires_at > ?
             ORDER BY id DESC LIMIT 1",
            [user_id.into(), code.to_string().into(), now.to_rfc3339().into()],
        ))
        .await?;

    match result {
        Some(row) => Ok(Some(row.try_get("", "id")?)),
        None => Ok(None),
    }
}

/// Marks the code used. `false` when another request already took it.
pub async fn claim(db: &DatabaseConnection, id: i32) -> Result<bool> {
    let result = db
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "UPDATE sys_recovery_codes SET used = 1 WHERE id = ? AND used = 0",
            [id.into()],
        ))
        .await?;
    Ok(result.rows_affected() == 1)
}

/// Gives a claimed code back after a failed reset
pub async fn release(db: &DatabaseConnection, id: i32) -> Result<()> {
    db.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "UPDATE sys_recovery_codes SET used = 0 WHERE id = ?",
        [id.into()],
    ))
    .await?;
    Ok(())
}
