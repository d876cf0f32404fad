//! Create/edit dialog shell shared by every dashboard collection.

use leptos::prelude::*;

use crate::state::collection::{CollectionState, Entity};

/// Modal wrapping a kind-specific form. Cancel and backdrop clicks close
/// the modal and reset the draft; the save button is disabled while a
/// submission is in flight.
#[component]
pub fn EntityModal<E: Entity>(
    state: RwSignal<CollectionState<E>>,
    on_submit: Callback<()>,
    children: Children,
) -> impl IntoView {
    let title = move || {
        let verb = if state.with(|s| s.draft.is_editing()) { "Edit" } else { "New" };
        format!("{verb} {}", E::KIND.singular())
    };
    let close = move || state.update(CollectionState::close_modal);
    let saving = move || state.with(|s| s.saving);
    let submittable = move || state.with(|s| s.draft.record().has_required_fields());

    view! {
        <div class="dialog-backdrop" on:click=move |_| close()>
            <div
                class="dialog"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        ev.prevent_default();
                        close();
                    }
                }
            >
                <h2>{title}</h2>
                <div class="dialog__form">{children()}</div>
                <Show when=move || state.with(|s| s.save_error.is_some())>
                    <p class="dialog__danger">{move || state.with(|s| s.save_error.clone().unwrap_or_default())}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| close()>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || saving() || !submittable()
                        on:click=move |_| on_submit.run(())
                    >
                        {move || if saving() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
