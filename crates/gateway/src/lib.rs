//! API Gateway Library
//!
//! This crate provides the HTTP REST API over the embedded user service.
//! `GET /api/users` returns every registered user; any failure becomes a
//! 500 with a fixed, detail-free message.

pub mod config;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod shutdown;
pub mod state;

use std::net::SocketAddr;

use tracing::info;

use user_service_lib::config::UserServiceConfig;
use user_service_lib::infra::Database;

use crate::config::GatewayConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Connect to the store, then serve HTTP until a shutdown signal arrives.
pub async fn run_embedded(
    config: GatewayConfig,
    user_config: UserServiceConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize database (applies pending migrations)
    let database = Database::connect(&user_config.database).await?;
    let user_service = user_service_lib::build_user_service(&database);

    let addr: SocketAddr = config.server_addr().parse()?;
    let state = AppState::new(user_service, database, config);
    let app = create_router(state);

    info!("Gateway listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::shutdown_signal())
        .await?;

    info!("Gateway stopped");
    Ok(())
}
