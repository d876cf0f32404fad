//! Personal dashboard: websites, servers, tasks and notes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each kind keeps its own `CollectionState` signal. Activating a tab
//! re-fetches that kind; every completed save re-fetches it as well, so the
//! grid always reflects the server rather than a local merge.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::entity_panel::EntityPanel;
use crate::components::{notes, servers, tasks, websites};
use crate::net::crud;
use crate::net::error::ApiError;
use crate::state::auth::AuthState;
use crate::state::collection::{CollectionState, Entity, EntityKind, today};
use crate::state::entities::{Note, Server, Task, Website};

pub fn tab_class(kind: EntityKind, active: EntityKind) -> &'static str {
    if kind == active { "dashboard__tab dashboard__tab--active" } else { "dashboard__tab" }
}

/// Replace `state` with a fresh `GET /{kind}`. Failures are logged and keep
/// the previous items.
pub fn refresh<E: Entity>(state: RwSignal<CollectionState<E>>, auth: RwSignal<AuthState>) {
    state.update(CollectionState::begin_fetch);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let token = auth.with_untracked(|a| a.token.clone());
        match crud::list::<E>(token.as_deref()).await {
            Ok(items) => state.update(|s| s.replace_items(items)),
            Err(e) => {
                log::warn!("dashboard: fetching {} failed: {e}", E::KIND.label());
                crate::util::auth::handle_api_error(auth, &e);
                state.update(CollectionState::fetch_failed);
            }
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = auth;
        state.update(CollectionState::fetch_failed);
    }
}

/// Record a save outcome against the modal session that issued it.
pub fn settle_save<E: Entity>(state: &mut CollectionState<E>, session: u64, result: Result<(), ApiError>) {
    state.finish_save(session, result.map_err(|e| crud::save_failure_message(&e)));
}

/// Submit the open draft, record the outcome in the modal, then re-fetch.
/// A draft missing required fields sends nothing.
pub fn submit<E: Entity>(state: RwSignal<CollectionState<E>>, auth: RwSignal<AuthState>) {
    let mut request = None;
    state.update(|s| request = s.begin_save(&today()));
    let Some(request) = request else {
        return;
    };

    leptos::task::spawn_local(async move {
        let token = auth.with_untracked(|a| a.token.clone());
        let result = crud::save(token.as_deref(), &request).await;
        if let Err(e) = &result {
            log::warn!("dashboard: {} {} failed: {e}", request.http_method(), request.path());
            crate::util::auth::handle_api_error(auth, e);
        }
        state.update(|s| settle_save(s, request.session, result));
        refresh(state, auth);
    });
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let tab = RwSignal::new(EntityKind::default());
    let copied = RwSignal::new(None::<String>);

    let website_state = RwSignal::new(CollectionState::<Website>::default());
    let server_state = RwSignal::new(CollectionState::<Server>::default());
    let task_state = RwSignal::new(CollectionState::<Task>::default());
    let note_state = RwSignal::new(CollectionState::<Note>::default());

    Effect::new(move || match tab.get() {
        EntityKind::Websites => refresh(website_state, auth),
        EntityKind::Servers => refresh(server_state, auth),
        EntityKind::Tasks => refresh(task_state, auth),
        EntityKind::Notes => refresh(note_state, auth),
    });

    let panel = move || match tab.get() {
        EntityKind::Websites => view! {
            <EntityPanel
                state=website_state
                copied=copied
                card=websites::card
                form=websites::form
                on_submit=Callback::new(move |()| submit(website_state, auth))
            />
        }
        .into_any(),
        EntityKind::Servers => view! {
            <EntityPanel
                state=server_state
                copied=copied
                card=servers::card
                form=servers::form
                on_submit=Callback::new(move |()| submit(server_state, auth))
            />
        }
        .into_any(),
        EntityKind::Tasks => view! {
            <EntityPanel
                state=task_state
                copied=copied
                card=tasks::card
                form=tasks::form
                on_submit=Callback::new(move |()| submit(task_state, auth))
            />
        }
        .into_any(),
        EntityKind::Notes => view! {
            <EntityPanel
                state=note_state
                copied=copied
                card=notes::card
                form=notes::form
                on_submit=Callback::new(move |()| submit(note_state, auth))
            />
        }
        .into_any(),
    };

    view! {
        <div class="tool-page dashboard">
            <nav class="dashboard__tabs">
                {EntityKind::ALL
                    .into_iter()
                    .map(|kind| {
                        view! {
                            <button class=move || tab_class(kind, tab.get()) on:click=move |_| tab.set(kind)>
                                {kind.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            <h2 class="dashboard__title">{move || tab.get().label()}</h2>
            {panel}
        </div>
    }
}
