use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    response::IntoResponse,
};
use http::HeaderValue;
use serde::Serialize;

// based on:
// https://github.com/tokio-rs/axum/blob/axum-v0.7.3/examples/customize-extractor-error/src/custom_extractor.rs
// movie-query clients don't reliably send a content-type header, and
// axum::Json rejects those requests with 415 before the body is even read.
// the header is forced here so the body is always treated as JSON.

#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Json<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = JsonRejection;

    async fn from_request(mut req: Request, state: &S) -> Result<Self, Self::Rejection> {
        req.headers_mut().insert(
            "content-type",
            HeaderValue::from_static(mime::APPLICATION_JSON.as_ref()),
        );
        axum::Json::<T>::from_request(req, state)
            .await
            .map(|v| Self(v.0))
    }
}

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> axum::response::Response {
        let Self(value) = self;
        axum::Json(value).into_response()
    }
}
