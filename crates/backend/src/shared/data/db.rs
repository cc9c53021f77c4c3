use std::path::Path;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

/// `(table, CREATE TABLE ...)` in dependency order
const SCHEMA: &[(&str, &str)] = &[
    (
        "sys_users",
        r#"CREATE TABLE sys_users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL UNIQUE,
            email TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            role TEXT NOT NULL DEFAULT 'cliente',
            full_name TEXT NOT NULL,
            document TEXT NOT NULL UNIQUE,
            document_type TEXT NOT NULL,
            birth_date TEXT NOT NULL,
            photo_url TEXT NOT NULL,
            phone TEXT,
            address TEXT,
            city TEXT,
            state TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );"#,
    ),
    (
        "sys_settings",
        r#"CREATE TABLE sys_settings (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL,
            description TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );"#,
    ),
    (
        "sys_refresh_tokens",
        r#"CREATE TABLE sys_refresh_tokens (
            id TEXT PRIMARY KEY NOT NULL,
            user_id INTEGER NOT NULL,
            token_hash TEXT NOT NULL UNIQUE,
            expires_at TEXT NOT NULL,
            created_at TEXT NOT NULL,
            revoked_at TEXT
        );"#,
    ),
    (
        "sys_recovery_codes",
        r#"CREATE TABLE sys_recovery_codes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL,
            code TEXT NOT NULL,
            expires_at TEXT NOT NULL,
            used INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        );"#,
    ),
    (
        "a001_boat_types",
        r#"CREATE TABLE a001_boat_types (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            description TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );"#,
    ),
    (
        "a003_marinas",
        r#"CREATE TABLE a003_marinas (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            city TEXT,
            state TEXT,
            country TEXT,
            address TEXT,
            contact_name TEXT,
            contact_phone TEXT,
            contact_email TEXT,
            description TEXT,
            latitude REAL,
            longitude REAL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );"#,
    ),
    (
        "a002_boats",
        r#"CREATE TABLE a002_boats (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'active',
            boat_type TEXT NOT NULL,
            passenger_count INTEGER NOT NULL,
            has_sailor INTEGER NOT NULL DEFAULT 0,
            model TEXT,
            size INTEGER,
            marina_id INTEGER,
            cruise_speed TEXT,
            allows_overnight INTEGER NOT NULL DEFAULT 0,
            country TEXT,
            state TEXT,
            city TEXT,
            fuel TEXT,
            suites INTEGER,
            cabins INTEGER,
            bathrooms INTEGER,
            tie_document TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );"#,
    ),
    (
        "a004_itineraries",
        r#"CREATE TABLE a004_itineraries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            description TEXT,
            observations TEXT,
            partner_id INTEGER,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );"#,
    ),
    (
        "a005_countries",
        r#"CREATE TABLE a005_countries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            code TEXT NOT NULL UNIQUE,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );"#,
    ),
    (
        "a006_states",
        r#"CREATE TABLE a006_states (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            code TEXT NOT NULL,
            country_id INTEGER NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );"#,
    ),
    (
        "a007_cities",
        r#"CREATE TABLE a007_cities (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            state_id INTEGER NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );"#,
    ),
    (
        "a008_articles",
        r#"CREATE TABLE a008_articles (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            path TEXT NOT NULL UNIQUE,
            author TEXT NOT NULL,
            description TEXT NOT NULL,
            paragraphs TEXT NOT NULL,
            image TEXT,
            caption TEXT,
            tags TEXT NOT NULL,
            publication_date TEXT,
            enabled INTEGER NOT NULL DEFAULT 1,
            is_draft INTEGER NOT NULL DEFAULT 0,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );"#,
    ),
    (
        "a009_pages",
        r#"CREATE TABLE a009_pages (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT,
            content TEXT,
            slug TEXT NOT NULL UNIQUE,
            canonical_url TEXT,
            image_url TEXT,
            image_alt TEXT,
            meta_title TEXT,
            meta_description TEXT,
            status TEXT NOT NULL DEFAULT 'draft',
            published_at TEXT,
            created_by INTEGER,
            updated_by INTEGER,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );"#,
    ),
    (
        "a010_partner_prices",
        r#"CREATE TABLE a010_partner_prices (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            partner_id INTEGER NOT NULL,
            boat_id INTEGER NOT NULL,
            pricing_type TEXT NOT NULL,
            weekday_price INTEGER NOT NULL,
            weekend_price INTEGER NOT NULL,
            holiday_price INTEGER NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );"#,
    ),
    (
        "a011_bookings",
        r#"CREATE TABLE a011_bookings (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL,
            boat_id INTEGER NOT NULL,
            itinerary_id INTEGER NOT NULL,
            marina_id INTEGER NOT NULL,
            date TEXT NOT NULL,
            period TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'pending',
            passenger_count INTEGER NOT NULL,
            total_price INTEGER NOT NULL,
            customer_name TEXT NOT NULL,
            customer_email TEXT NOT NULL,
            customer_phone TEXT,
            special_requests TEXT,
            payment_status TEXT NOT NULL DEFAULT 'pending',
            payment_method TEXT,
            payment_date TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );"#,
    ),
];

/// Open (or create) the SQLite file and make sure every table exists
pub async fn initialize_database(db_file: &Path) -> anyhow::Result<DatabaseConnection> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);

    tracing::info!("Opening database: {}", absolute_path.display());
    let conn = Database::connect(&db_url).await?;
    bootstrap_schema(&conn).await?;
    Ok(conn)
}

/// Private in-memory database (tests). A single pooled connection keeps
/// the same database alive for the whole pool lifetime.
pub async fn connect_in_memory() -> anyhow::Result<DatabaseConnection> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let conn = Database::connect(options).await?;
    bootstrap_schema(&conn).await?;
    Ok(conn)
}

/// Минимальный bootstrap схемы: создаём только отсутствующие таблицы
pub async fn bootstrap_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    for (table, create_sql) in SCHEMA {
        if table_exists(conn, table).await? {
            continue;
        }
        tracing::info!("Creating {} table", table);
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            create_sql.to_string(),
        ))
        .await?;
    }
    Ok(())
}

async fn table_exists(conn: &DatabaseConnection, table: &str) -> anyhow::Result<bool> {
    let rows = conn
        .query_all(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT name FROM sqlite_master WHERE type='table' AND name = ?;",
            [table.into()],
        ))
        .await?;
    Ok(!rows.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a008_article::aggregate::Article;
    use contracts::domain::common::AggregateRoot;

    #[tokio::test]
    async fn test_bootstrap_is_idempotent() {
        let conn = connect_in_memory().await.unwrap();
        bootstrap_schema(&conn).await.unwrap();
        for (table, _) in SCHEMA {
            assert!(table_exists(&conn, table).await.unwrap(), "{table} missing");
        }
    }

    #[test]
    fn test_schema_matches_aggregate_tables() {
        let tables: Vec<&str> = SCHEMA.iter().map(|(t, _)| *t).collect();
        assert!(tables.contains(&Article::table_name().as_str()));
        assert!(tables.contains(&contracts::system::users::User::table_name().as_str()));
    }
}
