//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_navigate;
use leptos_router::{NavigateOptions, StaticSegment};

use crate::pages::login::{LoginPage, SignedIn};
use crate::pages::workspace::WorkspacePage;
use crate::state::{auth::AuthState, chat::ChatState, ui::UiState};

/// Root application component.
///
/// Restores the stored session, provides shared state contexts and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::restore());
    let ui = RwSignal::new(UiState::default());
    let chat = RwSignal::new(ChatState::default());

    provide_context(auth);
    provide_context(ui);
    provide_context(chat);

    // Verify a restored token once; a 401 drops the session.
    #[cfg(feature = "csr")]
    {
        if let Some(token) = auth.with_untracked(|a| a.token.clone()) {
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_me(&token).await;
                auth.update(|a| a.apply_verification(result));
            });
        }
    }

    view! {
        <Title text="PyTool"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginRoute/>
                <Route path=StaticSegment("") view=WorkspacePage/>
            </Routes>
        </Router>
    }
}

/// `/login`: signs the session in on success and bounces already
/// authenticated visitors to the workspace.
#[component]
fn LoginRoute() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    // Covers both a fresh sign-in and a visitor who is already signed in.
    Effect::new(move || {
        if auth.with(|a| !a.loading && a.is_authenticated()) {
            navigate("/", NavigateOptions::default());
        }
    });

    let on_login = Callback::new(move |signed_in: SignedIn| {
        log::info!("auth: signed in as {}", signed_in.username);
        auth.update(|a| a.sign_in(signed_in.token, signed_in.username));
    });

    view! { <LoginPage on_login=on_login/> }
}
