//! Form field bound to one string field of a collection draft.

use leptos::prelude::*;

use crate::state::collection::{CollectionState, Entity};

/// Text input (or textarea) reading and writing one draft field.
#[component]
pub fn DraftInput<E: Entity>(
    state: RwSignal<CollectionState<E>>,
    label: &'static str,
    get: impl Fn(&E) -> String + Copy + Send + Sync + 'static,
    set: impl Fn(&mut E, String) + Copy + Send + Sync + 'static,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] required: bool,
    #[prop(optional)] multiline: bool,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    let value = move || state.with(|s| get(s.draft.record()));
    let on_input = move |ev: leptos::ev::Event| {
        let next = event_target_value(&ev);
        state.update(|s| s.edit_draft(|record| set(record, next)));
    };
    let caption = if required { format!("{label} *") } else { label.to_owned() };

    view! {
        <label class="dialog__label">
            {caption}
            {if multiline {
                view! {
                    <textarea
                        class="dialog__input dialog__input--multiline"
                        rows="4"
                        placeholder=placeholder
                        prop:value=value
                        on:input=on_input
                    ></textarea>
                }
                    .into_any()
            } else {
                view! {
                    <input
                        class="dialog__input"
                        type=input_type
                        placeholder=placeholder
                        prop:value=value
                        on:input=on_input
                    />
                }
                    .into_any()
            }}
        </label>
    }
}
