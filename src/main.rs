//! Process bootstrap: configuration, database, router, server.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use subhub::adapters::auth::JwtTokenCodec;
use subhub::adapters::http::{app_router, AppState};
use subhub::adapters::postgres::PgUserRepository;
use subhub::adapters::stripe::{StripeConfig, StripePaymentAdapter};
use subhub::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone())),
        )
        .init();

    // The process does not start without a database connection.
    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Database connection failed");
            e
        })?;
    tracing::info!("Connected to database");

    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Migrations applied");
    }

    let state = AppState::new(
        Arc::new(PgUserRepository::new(pool)),
        Arc::new(StripePaymentAdapter::new(StripeConfig::from_payment_config(
            &config.payment,
        ))?),
        Arc::new(JwtTokenCodec::new(&config.auth)),
        &config.payment,
    );

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Now listening");

    axum::serve(listener, app_router(state)).await?;

    Ok(())
}
