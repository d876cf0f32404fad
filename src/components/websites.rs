//! Website cards and form.

#[cfg(test)]
#[path = "websites_test.rs"]
mod websites_test;

use leptos::prelude::*;

use super::copy_button::CopyButton;
use super::draft_input::DraftInput;
use crate::state::collection::CollectionState;
use crate::state::entities::{DEFAULT_CATEGORY, Website};

/// How a website's icon field renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IconView {
    Image(String),
    Glyph(String),
}

/// URLs render as images; anything else (usually an emoji) as text. A blank
/// icon falls back to the name's first letter.
pub fn icon_view(site: &Website) -> IconView {
    let icon = site.icon.trim();
    if icon.starts_with("http://") || icon.starts_with("https://") || icon.starts_with("data:") {
        return IconView::Image(icon.to_owned());
    }
    if !icon.is_empty() {
        return IconView::Glyph(icon.to_owned());
    }
    let initial = site.name.trim().chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default();
    IconView::Glyph(initial)
}

pub fn card(site: Website, copied: RwSignal<Option<String>>) -> AnyView {
    let icon = match icon_view(&site) {
        IconView::Image(src) => view! { <img class="entity-card__icon" src=src alt=""/> }.into_any(),
        IconView::Glyph(text) => view! { <span class="entity-card__icon">{text}</span> }.into_any(),
    };
    let category = if site.category.trim().is_empty() { DEFAULT_CATEGORY.to_owned() } else { site.category.clone() };
    let copy_id = format!("website-{}", site.id.unwrap_or_default());
    let Website { name, link, description, .. } = site;
    let href = link.clone();
    let shown_link = link.clone();

    view! {
        <div class="entity-card__title">
            {icon}
            <a href=href target="_blank" rel="noopener noreferrer">
                {name}
            </a>
            <span class="entity-card__badge">{category}</span>
        </div>
        <p class="entity-card__description">{description}</p>
        <div class="entity-card__meta">
            <code class="entity-card__mono">{shown_link}</code>
            <CopyButton text=link id=copy_id copied=copied/>
        </div>
    }
    .into_any()
}

pub fn form(state: RwSignal<CollectionState<Website>>) -> AnyView {
    view! {
        <DraftInput
            state=state
            label="Name"
            required=true
            get=|w: &Website| w.name.clone()
            set=|w: &mut Website, v: String| w.name = v
        />
        <DraftInput
            state=state
            label="Link"
            required=true
            input_type="url"
            placeholder="https://"
            get=|w: &Website| w.link.clone()
            set=|w: &mut Website, v: String| w.link = v
        />
        <DraftInput
            state=state
            label="Icon"
            placeholder="Emoji or image URL"
            get=|w: &Website| w.icon.clone()
            set=|w: &mut Website, v: String| w.icon = v
        />
        <DraftInput
            state=state
            label="Category"
            placeholder=DEFAULT_CATEGORY
            get=|w: &Website| w.category.clone()
            set=|w: &mut Website, v: String| w.category = v
        />
        <DraftInput
            state=state
            label="Description"
            multiline=true
            get=|w: &Website| w.description.clone()
            set=|w: &mut Website, v: String| w.description = v
        />
    }
    .into_any()
}
