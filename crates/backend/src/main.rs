#![allow(clippy::too_many_arguments, clippy::derivable_impls)]

pub mod domain;
pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;

use anyhow::Context;
use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::shared::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = shared::config::load_config().context("config load failed")?;
    let db_path = shared::config::get_database_path(&config);
    let db = shared::data::db::initialize_database(&db_path)
        .await
        .map_err(|e| anyhow::anyhow!("db init failed: {e}"))?;

    // Ensure admin user exists
    system::initialization::ensure_admin_user_exists(&db, &config.auth).await?;
    domain::a001_boat_type::service::ensure_defaults(&db).await?;

    let app = routes::configure_routes(AppState::new(db));

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .with_context(|| format!("invalid server address {}:{}", config.server.host, config.server.port))?;

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
