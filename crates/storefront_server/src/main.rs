//! Server entrypoint.
//!
//! # Responsibility
//! - Wire process-wide infrastructure once at startup: configuration,
//!   logging, storage connection, route registration, listener.
//! - Contain no business logic.

mod config;
mod error;
mod handlers;
mod router;
mod state;

use config::AppConfig;
use log::info;
use router::create_router;
use state::AppState;
use storefront_core::db::{open_db, open_db_in_memory};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("storefront: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let config = AppConfig::from_env()?;
    storefront_core::init_logging(&config.log_level, &config.log_dir)?;

    let conn = match &config.db_path {
        Some(path) => open_db(path),
        None => open_db_in_memory(),
    }
    .map_err(|err| format!("failed to open database: {err}"))?;

    let state = AppState::new(conn);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .map_err(|err| format!("failed to bind {}: {err}", config.bind_addr))?;

    info!(
        "event=server_start module=server status=ok addr={} db={}",
        config.bind_addr,
        config.db_path.as_deref().unwrap_or(":memory:")
    );

    axum::serve(listener, app)
        .await
        .map_err(|err| format!("server error: {err}"))
}
