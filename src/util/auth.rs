//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page applies the same unauthenticated redirect, and every API error
//! goes through [`handle_api_error`] so a 401 expires the session in one
//! place.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::error::ApiError;
use crate::state::auth::AuthState;

pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && !state.is_authenticated()
}

/// Redirect to `/login` whenever auth has settled and no token is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Clear the session in place. Returns whether the error was an auth
/// rejection.
pub fn apply_api_error(state: &mut AuthState, err: &ApiError) -> bool {
    if !err.is_unauthorized() {
        return false;
    }
    state.clear();
    true
}

/// Expire the session on 401 and force the app back to the login screen.
/// Other errors are left to the caller.
pub fn handle_api_error(auth: RwSignal<AuthState>, err: &ApiError) {
    let mut expired = false;
    auth.update(|state| expired = apply_api_error(state, err));
    if expired {
        log::info!("session expired; returning to login");
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
    }
}

/// Sign out locally and return to the login screen.
pub fn logout(auth: RwSignal<AuthState>) {
    auth.update(AuthState::clear);
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }
}
