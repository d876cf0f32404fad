//! Authenticated shell: sidebar plus the active tool section.
//!
//! Unauthenticated visits are sent to `/login` once the startup token check
//! has settled.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::ai_chat::AiChatPage;
use super::api_caller::ApiCallerPage;
use super::code_runner::CodeRunnerPage;
use super::dashboard::DashboardPage;
use super::settings::SettingsPage;
use crate::components::sidebar::Sidebar;
use crate::state::auth::AuthState;
use crate::state::ui::{Section, UiState};
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn WorkspacePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    install_unauth_redirect(auth, use_navigate());

    let section = Memo::new(move |_| ui.with(|u| u.section));
    let ready = move || auth.with(|a| !a.loading && a.is_authenticated());

    view! {
        <Show
            when=ready
            fallback=move || {
                view! {
                    <div class="workspace workspace--pending">
                        <p>{move || if auth.with(|a| a.loading) { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="workspace">
                <Sidebar/>
                <main class="workspace__main">
                    {move || match section.get() {
                        Section::CodeRunner => view! { <CodeRunnerPage/> }.into_any(),
                        Section::ApiCaller => view! { <ApiCallerPage/> }.into_any(),
                        Section::AiChat => view! { <AiChatPage/> }.into_any(),
                        Section::Dashboard => view! { <DashboardPage/> }.into_any(),
                        Section::Settings => view! { <SettingsPage/> }.into_any(),
                    }}
                </main>
            </div>
        </Show>
    }
}
