//! Request body extraction.
//!
//! [`JsonBody`] decodes the raw body as JSON without looking at the
//! `Content-Type` header or the method, and rejects with an [`AppError`] so
//! malformed bodies get the same `{code, message}` shape as service errors.
//! Failures to read the body keep the status axum assigns them (413 for an
//! oversized body); only undecodable JSON becomes 400.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body extractor that answers decode failures with 400 Bad Request.
///
/// The body is subject to axum's `DefaultBodyLimit` (2 MB unless overridden).
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::new(e.status().as_u16(), e.body_text()))?;

        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|e| AppError::bad_request(format!("Invalid JSON: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        value: u32,
    }

    #[tokio::test]
    async fn decodes_without_content_type() {
        let req = Request::builder()
            .method("GET")
            .uri("/")
            .body(Body::from(r#"{"value": 7}"#))
            .unwrap();

        let JsonBody(probe) = JsonBody::<Probe>::from_request(req, &()).await.unwrap();
        assert_eq!(probe.value, 7);
    }

    #[tokio::test]
    async fn malformed_body_is_bad_request() {
        let req = Request::builder()
            .uri("/")
            .body(Body::from("{not json"))
            .unwrap();

        let err = JsonBody::<Probe>::from_request(req, &()).await.unwrap_err();
        assert_eq!(err.code, 400);
        assert!(err.message.starts_with("Invalid JSON"));
    }

    #[tokio::test]
    async fn oversized_body_is_payload_too_large() {
        let req = Request::builder()
            .uri("/")
            .body(Body::from(vec![b' '; 3 * 1024 * 1024]))
            .unwrap();

        let err = JsonBody::<Probe>::from_request(req, &()).await.unwrap_err();
        assert_eq!(err.code, 413);
    }
}
