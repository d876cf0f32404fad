//! One dashboard tab: filter bar, record grid and create/edit modal.

#[cfg(test)]
#[path = "entity_panel_test.rs"]
mod entity_panel_test;

use leptos::prelude::*;

use super::entity_modal::EntityModal;
use super::filter_bar::FilterBar;
use crate::state::collection::{CollectionState, Entity, EntityKind};

/// Placeholder text for a grid with nothing to show.
pub fn empty_message(kind: EntityKind, loading: bool, total: usize) -> String {
    if loading && total == 0 {
        "Loading...".to_owned()
    } else if total == 0 {
        format!("No {} yet.", kind.label().to_lowercase())
    } else {
        "Nothing matches the current filters.".to_owned()
    }
}

/// Generic collection view. `card` renders one record's body; `form`
/// renders the modal fields bound to the draft.
#[component]
pub fn EntityPanel<E: Entity>(
    state: RwSignal<CollectionState<E>>,
    copied: RwSignal<Option<String>>,
    card: fn(E, RwSignal<Option<String>>) -> AnyView,
    form: fn(RwSignal<CollectionState<E>>) -> AnyView,
    on_submit: Callback<()>,
) -> impl IntoView {
    let kind = E::KIND;

    view! {
        <section class="entity-panel">
            <header class="entity-panel__header">
                <div class="filter-bar">
                    <FilterBar state=state/>
                </div>
                <span class="entity-panel__spacer"></span>
                <button class="btn btn--primary" on:click=move |_| state.update(CollectionState::open_create)>
                    {format!("+ New {}", kind.singular())}
                </button>
            </header>
            <div class="entity-panel__grid">
                {move || {
                    let (visible, loading, total) = state.with(|s| (s.visible(), s.loading, s.items.len()));
                    if visible.is_empty() {
                        return view! { <p class="entity-panel__empty">{empty_message(kind, loading, total)}</p> }
                            .into_any();
                    }
                    visible
                        .into_iter()
                        .map(|record| {
                            let target = record.clone();
                            view! {
                                <article class="entity-card">
                                    {card(record, copied)}
                                    <footer class="entity-card__actions">
                                        <button
                                            class="btn btn--ghost"
                                            on:click=move |_| state.update(|s| s.open_edit(&target))
                                        >
                                            "Edit"
                                        </button>
                                    </footer>
                                </article>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>
            <Show when=move || state.with(|s| s.modal_open)>
                <EntityModal state=state on_submit=on_submit>
                    {form(state)}
                </EntityModal>
            </Show>
        </section>
    }
}
