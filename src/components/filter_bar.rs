//! Facet selects for one dashboard collection.

use leptos::prelude::*;

use crate::state::collection::{CollectionState, Entity, Facet};

/// One `<select>` per facet of `E`, with options derived from the loaded
/// records.
#[component]
pub fn FilterBar<E: Entity>(state: RwSignal<CollectionState<E>>) -> impl IntoView {
    E::FACETS
        .iter()
        .map(|&facet| view! { <FacetSelect state=state facet=facet/> })
        .collect::<Vec<_>>()
}

#[component]
fn FacetSelect<E: Entity>(state: RwSignal<CollectionState<E>>, facet: Facet) -> impl IntoView {
    view! {
        <label class="filter-bar__item">
            <span class="filter-bar__label">{facet.label()}</span>
            <select
                class="filter-bar__select"
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| s.set_filter(facet, value));
                }
            >
                {move || {
                    let (options, current) = state.with(|s| (s.filter_options(facet), s.filter(facet).to_owned()));
                    options
                        .into_iter()
                        .map(|option| {
                            let selected = option == current;
                            let label = option.clone();
                            view! {
                                <option value=option selected=selected>
                                    {label}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </select>
        </label>
    }
}
