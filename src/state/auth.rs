//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the single source of truth for the bearer token and username.
//! `App` restores it from `localStorage` once and provides it as a
//! `RwSignal<AuthState>` context; pages read the token from here instead of
//! touching storage themselves.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::error::ApiError;
use crate::net::types::Profile;
use crate::util::storage;

pub const TOKEN_KEY: &str = "token";
pub const USERNAME_KEY: &str = "username";

/// Authentication state tracking the session token and verification status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub token: Option<String>,
    pub username: Option<String>,
    /// Profile confirmed by `GET /me` for the current token.
    pub profile: Option<Profile>,
    /// A stored token is being verified.
    pub loading: bool,
}

impl AuthState {
    /// Load the persisted session. A restored token starts in the loading
    /// state until it has been verified.
    pub fn restore() -> Self {
        let token = storage::load_string(TOKEN_KEY).filter(|t| !t.is_empty());
        let username = storage::load_string(USERNAME_KEY);
        let loading = token.is_some();
        Self { token, username, profile: None, loading }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Store a freshly issued token and persist it.
    pub fn sign_in(&mut self, token: String, username: String) {
        storage::save_string(TOKEN_KEY, &token);
        storage::save_string(USERNAME_KEY, &username);
        self.token = Some(token);
        self.username = Some(username);
        self.loading = false;
    }

    pub fn verified(&mut self, profile: Profile) {
        if !profile.username.is_empty() {
            self.username = Some(profile.username.clone());
        }
        self.profile = Some(profile);
        self.loading = false;
    }

    /// Apply the startup `GET /me` check. A rejected token clears the
    /// session; any other failure keeps it and lets later calls decide.
    pub fn apply_verification(&mut self, result: Result<Profile, ApiError>) {
        match result {
            Ok(profile) => self.verified(profile),
            Err(err) if err.is_unauthorized() => self.clear(),
            Err(err) => {
                log::warn!("session: could not verify stored token: {err}");
                self.loading = false;
            }
        }
    }

    /// Drop the session from memory and storage.
    pub fn clear(&mut self) {
        storage::remove(TOKEN_KEY);
        storage::remove(USERNAME_KEY);
        self.token = None;
        self.username = None;
        self.profile = None;
        self.loading = false;
    }
}
