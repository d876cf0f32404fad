//! REST helpers for the dashboard collections.
//!
//! One pair of generic calls serves all four entity kinds: the path comes
//! from [`Entity::KIND`] and the verb from the [`SaveRequest`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "crud_test.rs"]
mod crud_test;

use super::error::ApiError;
use crate::state::collection::{Entity, SaveRequest};
#[cfg(feature = "csr")]
use crate::state::collection::SaveMethod;

/// Fetch the full collection via `GET /{kind}`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport, status, or decode failure.
pub async fn list<E: Entity>(token: Option<&str>) -> Result<Vec<E>, ApiError> {
    #[cfg(feature = "csr")]
    {
        use super::api::{authorized, network_error, read_json};

        let url = crate::config::endpoint(E::KIND.path());
        let resp = authorized(gloo_net::http::Request::get(&url), token)
            .send()
            .await
            .map_err(network_error)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Submit a create (`POST /{kind}`) or update (`PUT /{kind}/{id}`).
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or non-2xx status.
pub async fn save<E: Entity>(token: Option<&str>, req: &SaveRequest<E>) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        use super::api::{authorized, ensure_ok, network_error};
        use gloo_net::http::Request;

        let url = crate::config::endpoint(&req.path());
        let builder = match req.method {
            SaveMethod::Update(_) => Request::put(&url),
            SaveMethod::Create => Request::post(&url),
        };
        let resp = authorized(builder, token)
            .json(&req.body)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(network_error)?;
        ensure_ok(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, req);
        Err(ApiError::Unavailable)
    }
}

/// Message shown in the modal when a save fails.
pub fn save_failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Network(_) => "Could not reach the server. Try again.".to_owned(),
        ApiError::Rejected { detail: Some(detail), .. } => format!("Save failed: {detail}"),
        other => format!("Save failed: {other}"),
    }
}
