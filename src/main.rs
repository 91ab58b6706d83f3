//! Cine Tasty Backend
//!
//! Entry point for the GraphQL gateway. All operations are exposed via
//! GraphQL at /graphql.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cine_tasty::config::Config;
use cine_tasty::services::TmdbService;
use cine_tasty::{AppState, build_app, graphql};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cine_tasty=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    tracing::info!("Starting Cine Tasty Backend");

    let config = Arc::new(Config::from_env()?);
    tracing::info!(tmdb = ?config.tmdb, "Configuration loaded");

    let tmdb = Arc::new(TmdbService::from_config(&config.tmdb)?);
    let schema = graphql::build_schema(tmdb);
    tracing::info!("GraphQL schema built");

    let state = AppState {
        config: config.clone(),
        schema,
    };
    let app = build_app(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);
    tracing::info!("GraphQL playground: http://localhost:{}/graphql", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
