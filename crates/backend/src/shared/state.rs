use sea_orm::DatabaseConnection;

/// Shared handler state: one connection pool for the whole process
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
