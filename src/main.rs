mod cache;
mod config;
mod domain;
mod publisher;
mod scoring;
mod slack;
mod state;
mod time_utils;
mod web;

use crate::slack::client::SlackClient;
use crate::state::AppState;
use std::sync::Arc;
use tokio::sync::broadcast;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::Config::from_env()?;

    let cache = Arc::new(cache::FileCache::load(config.cache_file.clone()).await);
    let gateway: Arc<dyn slack::ChatGateway> =
        Arc::new(SlackClient::new(config.slack_token.clone(), cache));
    let (updates, _) = broadcast::channel(16);

    let shared: state::SharedState = Arc::new(AppState {
        config,
        gateway,
        updates,
    });

    tokio::spawn(publisher::run(shared.clone()));
    tracing::info!(
        "Realtime publisher started, cycle every {}s",
        publisher::CYCLE_SECONDS
    );

    let frontend = ServeDir::new("frontend").not_found_service(ServeFile::new("frontend/index.html"));
    let app = web::routes(shared.clone())
        .fallback_service(frontend)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = shared.config.bind_addr.clone();
    tracing::info!("Listening on {addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
