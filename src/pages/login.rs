//! Login and sign-up page.
//!
//! DESIGN
//! ======
//! A successful `POST /auth/login` is not trusted on its own: the returned
//! token is checked with `GET /me` before `on_login` fires, so a token the
//! backend cannot resolve never reaches the session.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::future::Future;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::types::{Credentials, LoginResponse, Profile};

pub const VERIFY_FAILED: &str = "Login succeeded but verification failed. Try again.";
pub const REGISTERED: &str = "Success! Now log in.";

/// A verified session handed to the login callback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedIn {
    pub token: String,
    pub username: String,
}

/// Trim the username and require both fields.
pub fn validate_credentials(username: &str, password: &str) -> Result<Credentials, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter a username and password.");
    }
    Ok(Credentials { username: username.to_owned(), password: password.to_owned() })
}

fn failure_message(err: &ApiError, fallback: &str) -> String {
    match err {
        ApiError::Network(_) => "Connection error".to_owned(),
        other => other.detail().map_or_else(|| fallback.to_owned(), str::to_owned),
    }
}

pub fn login_error_message(err: &ApiError) -> String {
    failure_message(err, "Invalid credentials")
}

pub fn register_error_message(err: &ApiError) -> String {
    failure_message(err, "Registration failed")
}

/// Log in, then verify the issued token.
///
/// # Errors
///
/// Returns the inline message to show when either step fails.
pub async fn run_login<L, LF, V, VF>(credentials: Credentials, login: L, verify: V) -> Result<SignedIn, String>
where
    L: FnOnce(Credentials) -> LF,
    LF: Future<Output = Result<LoginResponse, ApiError>>,
    V: FnOnce(String) -> VF,
    VF: Future<Output = Result<Profile, ApiError>>,
{
    let fallback_name = credentials.username.clone();
    let issued = login(credentials).await.map_err(|e| login_error_message(&e))?;
    let token = issued.access_token;
    match verify(token.clone()).await {
        Ok(profile) => {
            let username = if profile.username.is_empty() { fallback_name } else { profile.username };
            Ok(SignedIn { token, username })
        }
        Err(err) => {
            log::warn!("login: token verification failed: {err}");
            Err(VERIFY_FAILED.to_owned())
        }
    }
}

#[component]
pub fn LoginPage(on_login: Callback<SignedIn>) -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let signing_up = RwSignal::new(false);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_credentials(&username.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());
        let registering = signing_up.get();

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            if registering {
                match crate::net::api::register(&credentials).await {
                    Ok(()) => {
                        signing_up.set(false);
                        password.set(String::new());
                        info.set(REGISTERED.to_owned());
                    }
                    Err(e) => info.set(register_error_message(&e)),
                }
            } else {
                let result = run_login(
                    credentials,
                    |c| async move { crate::net::api::login(&c.username, &c.password).await },
                    |token| async move { crate::net::api::fetch_me(&token).await },
                )
                .await;
                match result {
                    Ok(signed_in) => on_login.run(signed_in),
                    Err(message) => info.set(message),
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (credentials, registering, on_login);
            busy.set(false);
        }
    };

    let toggle_mode = move |_| {
        signing_up.update(|s| *s = !*s);
        info.set(String::new());
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"PyTool"</h1>
                <p class="login-card__subtitle">
                    {move || if signing_up.get() { "Create an account" } else { "Sign in to your workspace" }}
                </p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <div class="login-input__row">
                        <input
                            class="login-input"
                            type=move || if show_password.get() { "text" } else { "password" }
                            autocomplete="current-password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button
                            class="btn btn--ghost"
                            type="button"
                            title="Toggle password visibility"
                            on:click=move |_| show_password.update(|s| *s = !*s)
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || match (busy.get(), signing_up.get()) {
                            (true, _) => "Please wait...",
                            (false, true) => "Sign Up",
                            (false, false) => "Login",
                        }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <button class="btn btn--ghost" type="button" on:click=toggle_mode>
                    {move || {
                        if signing_up.get() { "Already have an account? Login" } else { "Need an account? Sign Up" }
                    }}
                </button>
            </div>
        </div>
    }
}
