use std::time::Duration;

use axum::{response::IntoResponse, routing::get, Router};
use axum_extra::extract::Query;
use serde::Deserialize;
use tokio::time::sleep;
use tracing::debug;

use crate::{extractors::Json, AppState};

// simulated upstream latency, applied to every request
const LOOKUP_DELAY: Duration = Duration::from_millis(1000);

// placeholder search corpus
const CORPUS: [&str; 3] = ["hello", "world", "test"];

pub fn routes() -> Router<AppState> {
    Router::new().route("/search", get(search))
}

#[derive(Deserialize)]
struct SearchQuery {
    keyword: Option<String>,
}

async fn search(Query(query): Query<SearchQuery>) -> impl IntoResponse {
    sleep(LOOKUP_DELAY).await;

    let hits = match &query.keyword {
        Some(keyword) => CORPUS
            .iter()
            .copied()
            .filter(|v| v.contains(keyword.as_str()))
            .collect(),
        None => CORPUS.to_vec(),
    };

    debug!("keyword {:?} matched {} entries", query.keyword, hits.len());
    Json(hits)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::types::MovieCatalog;
    use crate::AppState;

    use super::*;

    fn app() -> Router {
        let state = AppState {
            catalog: Arc::new(MovieCatalog::new(vec![])),
        };
        routes().with_state(state)
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_json(resp: axum::response::Response) -> serde_json::Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn no_keyword_returns_full_corpus() {
        let resp = app().oneshot(get_request("/search")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await, serde_json::json!(["hello", "world", "test"]));
    }

    #[tokio::test(start_paused = true)]
    async fn keyword_filters_by_substring_in_order() {
        let resp = app().oneshot(get_request("/search?keyword=e")).await.unwrap();
        assert_eq!(body_json(resp).await, serde_json::json!(["hello", "test"]));
    }

    #[tokio::test(start_paused = true)]
    async fn unmatched_keyword_returns_empty_list() {
        let resp = app().oneshot(get_request("/search?keyword=xyz")).await.unwrap();
        assert_eq!(body_json(resp).await, serde_json::json!([]));
    }

    #[tokio::test(start_paused = true)]
    async fn empty_keyword_matches_everything() {
        let resp = app().oneshot(get_request("/search?keyword=")).await.unwrap();
        assert_eq!(body_json(resp).await, serde_json::json!(["hello", "world", "test"]));
    }

    #[tokio::test(start_paused = true)]
    async fn response_waits_out_the_fixed_delay() {
        let started = tokio::time::Instant::now();
        let resp = app().oneshot(get_request("/search")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(started.elapsed() >= LOOKUP_DELAY);
    }
}
