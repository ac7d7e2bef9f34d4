//! Backend entry-point: wires the landing route, session middleware, and
//! health probes over either PostgreSQL or in-memory adapters.

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use backend::Trace;
use backend::inbound::http::health::{HealthState, live, ready};
use backend::inbound::http::landing::{landing, landing_submit};
use backend::inbound::http::state::HttpState;
use backend::outbound::persistence::{
    DbPool, DieselCatalogueReader, DieselUserRepository, InMemoryCatalogue,
    InMemoryUserRepository, PasswordAuthService, PoolConfig,
};
use backend::server::{ServerConfig, session_middleware};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = ServerConfig::from_env()?;
    let state = build_state(&config).await?;

    let key = config.key();
    let cookie_secure = config.cookie_secure();
    let health_state = web::Data::new(HealthState::new());
    // Clone for the server factory so the readiness probe stays accessible.
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(server_health_state.clone())
            .wrap(session_middleware(key.clone(), cookie_secure))
            .wrap(Trace)
            .service(landing)
            .service(landing_submit)
            .service(ready)
            .service(live)
    })
    .bind(config.bind_addr())?;

    health_state.mark_ready();
    server.run().await
}

/// Choose adapters from configuration: PostgreSQL when `DATABASE_URL` is
/// set, in-memory sample data otherwise.
async fn build_state(config: &ServerConfig) -> std::io::Result<HttpState> {
    match config.database_url() {
        Some(url) => {
            let pool = DbPool::new(PoolConfig::new(url))
                .await
                .map_err(std::io::Error::other)?;
            let users = Arc::new(DieselUserRepository::new(pool.clone()));
            Ok(HttpState::new(
                Arc::new(PasswordAuthService::new(users)),
                Arc::new(DieselCatalogueReader::new(pool)),
            ))
        }
        None => {
            warn!("DATABASE_URL not set; serving sample data from memory");
            Ok(HttpState::new(
                Arc::new(PasswordAuthService::new(Arc::new(
                    InMemoryUserRepository::new(),
                ))),
                Arc::new(InMemoryCatalogue::sample()),
            ))
        }
    }
}
