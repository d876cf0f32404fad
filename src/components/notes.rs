//! Note cards and form, including screenshot paste.

use leptos::prelude::*;

use super::copy_button::CopyButton;
use super::draft_input::DraftInput;
use crate::state::collection::CollectionState;
use crate::state::entities::Note;

pub fn card(note: Note, copied: RwSignal<Option<String>>) -> AnyView {
    let copy_id = format!("note-{}", note.id.unwrap_or_default());
    let tags = note
        .tag_list()
        .into_iter()
        .map(|tag| view! { <span class="entity-card__badge">{tag}</span> })
        .collect_view();
    let images = note
        .image_list()
        .into_iter()
        .map(|src| view! { <img class="note-image" src=src alt="Pasted image"/> })
        .collect_view();
    let link = (!note.ref_link.trim().is_empty()).then(|| {
        view! {
            <a href=note.ref_link.clone() target="_blank" rel="noopener noreferrer">
                {note.ref_link.clone()}
            </a>
        }
    });

    let Note { content, date_created, .. } = note;
    let shown = content.clone();

    view! {
        <pre class="entity-card__content">{shown}</pre>
        <div class="note-images">{images}</div>
        <div class="entity-card__subtitle">{tags}</div>
        <div class="entity-card__meta">
            {link}
            <span>{date_created}</span>
            <CopyButton text=content id=copy_id copied=copied/>
        </div>
    }
    .into_any()
}

pub fn form(state: RwSignal<CollectionState<Note>>) -> AnyView {
    let on_paste = move |ev: leptos::ev::ClipboardEvent| {
        #[cfg(feature = "csr")]
        {
            let started = crate::util::clipboard::read_pasted_images(&ev, move |url| {
                state.update(|s| s.edit_draft(|note| note.push_image(&url)));
            });
            if started > 0 {
                ev.prevent_default();
            }
        }
        #[cfg(not(feature = "csr"))]
        let _ = (ev, state);
    };
    let images = move || {
        state
            .with(|s| s.draft.record().image_list())
            .into_iter()
            .enumerate()
            .map(|(index, src)| {
                view! {
                    <figure class="note-image__item">
                        <img class="note-image" src=src alt="Pasted image"/>
                        <button
                            class="btn btn--ghost note-image__remove"
                            title="Remove image"
                            on:click=move |_| state.update(|s| s.edit_draft(|note| note.remove_image(index)))
                        >
                            "✕"
                        </button>
                    </figure>
                }
            })
            .collect_view()
    };

    view! {
        <div class="note-form" on:paste=on_paste>
            <DraftInput
                state=state
                label="Content"
                required=true
                multiline=true
                placeholder="Paste screenshots straight into this dialog"
                get=|n: &Note| n.content.clone()
                set=|n: &mut Note, v: String| n.content = v
            />
            <DraftInput
                state=state
                label="Tags"
                placeholder="comma, separated"
                get=|n: &Note| n.tags.clone()
                set=|n: &mut Note, v: String| n.tags = v
            />
            <DraftInput
                state=state
                label="Reference link"
                input_type="url"
                placeholder="https://"
                get=|n: &Note| n.ref_link.clone()
                set=|n: &mut Note, v: String| n.ref_link = v
            />
            <div class="note-images">{images}</div>
        </div>
    }
    .into_any()
}
