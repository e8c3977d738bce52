//! Server construction: pool setup, migrations, and actix wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use color_eyre::eyre::WrapErr;
use tracing::info;

use crate::inbound::http::health::HealthState;
use crate::inbound::http::routes;
use crate::inbound::http::state::HttpState;
use crate::outbound::persistence::{
    PoolConfig, SqlitePostRepository, SqliteUserRepository, run_migrations,
};

/// Build the pool, apply migrations, and run the HTTP server to completion.
pub async fn run(config: ServerConfig) -> color_eyre::Result<()> {
    let pool = PoolConfig::new(config.database_url())
        .with_max_size(config.pool_size())
        .build()
        .wrap_err("building connection pool")?;
    run_migrations(&pool).wrap_err("applying migrations")?;

    let state = web::Data::new(HttpState::new(
        Arc::new(SqliteUserRepository::new(pool.clone())),
        Arc::new(SqlitePostRepository::new(pool)),
    ));
    let health_state = web::Data::new(HealthState::new());
    // Clone for the server factory so the probe handle stays accessible.
    let server_health_state = health_state.clone();

    let bind_addr = config.bind_addr();
    info!(%bind_addr, "starting HTTP server");
    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(server_health_state.clone())
            .configure(routes::configure)
    })
    .bind(bind_addr)
    .wrap_err_with(|| format!("binding {bind_addr}"))?;

    health_state.mark_ready();
    server.run().await.wrap_err("running HTTP server")
}
