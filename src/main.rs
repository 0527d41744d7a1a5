use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod endpoints;
mod extractors;
mod types;

use types::MovieCatalog;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<MovieCatalog>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = types::Config::parse_from_file("config.yml");

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_level))
        .init();

    let catalog = MovieCatalog::load_from_file(&config.catalog_path)?;
    info!("Loaded {} movies from {}", catalog.len(), config.catalog_path);

    let state = AppState {
        catalog: Arc::new(catalog),
    };

    let app = Router::new()
        .merge(endpoints::routes(&config))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind((config.listen_addr.as_str(), config.listen_port)).await?;
    info!("Listening on {}:{}", config.listen_addr, config.listen_port);

    axum::serve(listener, app).await?;

    Ok(())
}
