//! Workspace navigation sidebar with backend status and session controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! The sidebar owns the one-shot `GET /health` probe; the result lands in
//! `UiState::backend` so other views can read it too.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::ui::{BackendStatus, Section, UiState};
use crate::util::auth::logout;

fn status_class(status: BackendStatus) -> &'static str {
    match status {
        BackendStatus::Unknown => "sidebar__status sidebar__status--unknown",
        BackendStatus::Online => "sidebar__status sidebar__status--online",
        BackendStatus::Offline => "sidebar__status sidebar__status--offline",
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let ok = crate::net::api::health().await;
        ui.update(|u| u.backend = BackendStatus::from_probe(ok));
    });

    let username = move || auth.with(|a| a.username.clone().unwrap_or_default());
    let backend = move || ui.with(|u| u.backend);

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">"PyTool"</div>
            <nav class="sidebar__nav">
                {Section::ALL
                    .into_iter()
                    .map(|section| {
                        let class = move || {
                            if ui.with(|u| u.section == section) {
                                "sidebar__item sidebar__item--active"
                            } else {
                                "sidebar__item"
                            }
                        };
                        view! {
                            <button
                                class=class
                                on:click=move |_| ui.update(|u| u.section = section)
                            >
                                <span class="sidebar__icon">{section.icon()}</span>
                                <span>{section.label()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            <span class="sidebar__spacer"></span>
            <div class=move || status_class(backend())>{move || backend().label()}</div>
            <div class="sidebar__user">
                <span class="sidebar__username">{username}</span>
                <button class="btn btn--ghost" on:click=move |_| logout(auth) title="Logout">
                    "Logout"
                </button>
            </div>
        </aside>
    }
}
