//! Copy-to-clipboard button with transient "Copied" feedback.

use leptos::prelude::*;

use crate::util::clipboard::copy_with_feedback;

/// `id` keys the feedback so only the clicked button flips to "Copied".
#[component]
pub fn CopyButton(text: String, id: String, copied: RwSignal<Option<String>>) -> impl IntoView {
    let is_copied = {
        let id = id.clone();
        move || copied.with(|current| current.as_deref() == Some(id.as_str()))
    };
    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        copy_with_feedback(text.clone(), id.clone(), copied);
    };

    view! {
        <button class="btn btn--ghost copy-button" on:click=on_click title="Copy to clipboard">
            {move || if is_copied() { "Copied" } else { "Copy" }}
        </button>
    }
}
