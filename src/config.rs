//! Backend endpoint configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The API base URL is baked in at compile time so the static bundle needs no
//! runtime config fetch:
//!
//! - `PYTOOL_API_URL`: backend origin (default `http://localhost:8000`)
//! - `PYTOOL_SAME_ORIGIN`: when set, requests go to the serving origin and
//!   `PYTOOL_API_URL` is ignored

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Base URL for every backend request, without a trailing slash.
pub fn api_base() -> String {
    resolve_api_base(option_env!("PYTOOL_SAME_ORIGIN").is_some(), option_env!("PYTOOL_API_URL"))
}

/// Absolute URL for a backend path such as `/tasks`.
pub fn endpoint(path: &str) -> String {
    join_endpoint(&api_base(), path)
}

fn resolve_api_base(same_origin: bool, configured: Option<&str>) -> String {
    if same_origin {
        return String::new();
    }
    configured
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_URL)
        .trim_end_matches('/')
        .to_owned()
}

fn join_endpoint(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}
