use axum::{http::StatusCode, routing::get, Router};
use tower_http::{
    compression::{predicate::SizeAbove, CompressionLayer},
    limit::RequestBodyLimitLayer,
};

use crate::{types::Config, AppState};

mod movies;
mod search;

pub fn routes(config: &Config) -> Router<AppState> {
    Router::new()
        .merge(search::routes())
        .merge(movies::routes())
        .route("/status", get(status))
        .layer(RequestBodyLimitLayer::new(config.payload_limit as usize))
        .layer(CompressionLayer::new().compress_when(SizeAbove::new(1024)))
}

async fn status() -> StatusCode {
    StatusCode::OK
}
