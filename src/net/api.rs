//! REST helpers for auth and the single-action tools.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning [`ApiError::Unavailable`] so state and
//! page logic can compile and test without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ApiError>`. A 401 always surfaces as
//! [`ApiError::Unauthorized`]; callers route it through
//! `util::auth::handle_api_error` to expire the session.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{AiChatRequest, AiChatResponse, ApiCallRequest, Credentials, LoginResponse, Profile, RunCodeRequest, RunCodeResponse};

#[cfg(any(test, feature = "csr"))]
pub(crate) fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(feature = "csr")]
pub(crate) fn authorized(
    builder: gloo_net::http::RequestBuilder,
    token: Option<&str>,
) -> gloo_net::http::RequestBuilder {
    match token {
        Some(token) => builder.header("Authorization", &bearer_value(token)),
        None => builder,
    }
}

#[cfg(feature = "csr")]
pub(crate) fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

/// Map a non-2xx response to an [`ApiError`], consuming the body for `detail`.
#[cfg(feature = "csr")]
pub(crate) async fn ensure_ok(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::from_status(status, &body))
}

#[cfg(feature = "csr")]
pub(crate) async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    let resp = ensure_ok(resp).await?;
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Exchange credentials for a bearer token via form-encoded `POST /auth/login`.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] with the backend `detail` on bad credentials.
pub async fn login(username: &str, password: &str) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let form = web_sys::UrlSearchParams::new().map_err(|_| ApiError::Encode("login form".to_owned()))?;
        form.append("username", username);
        form.append("password", password);
        let resp = gloo_net::http::Request::post(&crate::config::endpoint("/auth/login"))
            .body(form)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (username, password);
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /auth/register`.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] when the backend refuses the registration.
pub async fn register(credentials: &Credentials) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&crate::config::endpoint("/auth/register"))
            .json(credentials)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(network_error)?;
        ensure_ok(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = credentials;
        Err(ApiError::Unavailable)
    }
}

/// Validate `token` and fetch the profile via `GET /me`.
///
/// # Errors
///
/// Returns [`ApiError::Unauthorized`] when the token is no longer accepted.
pub async fn fetch_me(token: &str) -> Result<Profile, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = authorized(gloo_net::http::Request::get(&crate::config::endpoint("/me")), Some(token))
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

/// Execute Python source in the backend sandbox via `POST /run-code`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or non-2xx status. A script
/// that fails still returns `Ok` with `success == false`.
pub async fn run_code(token: Option<&str>, req: &RunCodeRequest) -> Result<RunCodeResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = authorized(gloo_net::http::Request::post(&crate::config::endpoint("/run-code")), token)
            .json(req)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(network_error)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, req);
        Err(ApiError::Unavailable)
    }
}

/// Relay an outbound HTTP request via `POST /call-api`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or non-2xx status from the relay.
pub async fn call_api(token: Option<&str>, req: &ApiCallRequest) -> Result<serde_json::Value, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = authorized(gloo_net::http::Request::post(&crate::config::endpoint("/call-api")), token)
            .json(req)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(network_error)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, req);
        Err(ApiError::Unavailable)
    }
}

/// Send one prompt to the selected provider via `POST /ai/chat`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or non-2xx status. Provider
/// failures arrive as `Ok` with the `error` field set.
pub async fn ai_chat(token: Option<&str>, req: &AiChatRequest) -> Result<AiChatResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = authorized(gloo_net::http::Request::post(&crate::config::endpoint("/ai/chat")), token)
            .json(req)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(network_error)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, req);
        Err(ApiError::Unavailable)
    }
}

/// Probe `GET /health`. Returns `false` on any failure.
pub async fn health() -> bool {
    #[cfg(feature = "csr")]
    {
        gloo_net::http::Request::get(&crate::config::endpoint("/health"))
            .send()
            .await
            .is_ok_and(|resp| resp.ok())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}
