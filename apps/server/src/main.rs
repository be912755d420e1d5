use anyhow::Context;
use bmi_backend::{config::Config, http};
use clap::Parser;
use dotenv::dotenv;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::parse();

    // Connect eagerly so an unreachable or misconfigured database is fatal
    // before the listener binds. No route queries the pool yet; it is kept
    // on the shared context for handlers that will.
    let db = PgPoolOptions::new()
        .max_connections(10)
        .connect_with(config.pg_connect_options())
        .await
        .context("failed to connect to PostgreSQL")?;

    tracing::info!("connected to PostgreSQL");

    // spin up API
    http::serve(config, db).await?;

    Ok(())
}
