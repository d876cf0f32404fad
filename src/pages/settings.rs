//! Provider API key settings.
//!
//! Keys live in `localStorage` and are forwarded to the backend with each
//! chat request for that provider; the backend's own keys apply otherwise.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;

use crate::state::chat::AiProvider;

pub const SAVED_RESET_MS: u64 = 2000;

pub fn saved_label(saved: bool) -> &'static str {
    if saved { "✓ Saved!" } else { "Save Settings" }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let keys: Vec<(AiProvider, RwSignal<String>)> = AiProvider::ALL
        .into_iter()
        .map(|p| (p, RwSignal::new(p.load_api_key().unwrap_or_default())))
        .collect();
    let saved = RwSignal::new(false);

    let save_keys = keys.clone();
    let on_save = move |_| {
        for (provider, key) in &save_keys {
            provider.save_api_key(&key.get_untracked());
        }
        log::info!("settings: provider keys saved");
        saved.set(true);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(SAVED_RESET_MS)).await;
            saved.set(false);
        });
    };

    view! {
        <div class="tool-page settings">
            <h2>"Settings"</h2>
            <div class="settings__card">
                {keys
                    .into_iter()
                    .map(|(provider, key)| {
                        view! {
                            <label class="dialog__label">
                                {format!("{} API key", provider.label())}
                                <input
                                    class="dialog__input"
                                    type="password"
                                    autocomplete="off"
                                    placeholder=provider.key_placeholder()
                                    prop:value=move || key.get()
                                    on:input=move |ev| key.set(event_target_value(&ev))
                                />
                            </label>
                        }
                    })
                    .collect_view()}
                <button class="btn btn--primary" on:click=on_save>
                    {move || saved_label(saved.get())}
                </button>
                <p class="settings__note">
                    "Keys are stored in this browser and sent to the PyTool backend with each chat request. "
                    "Leave a field empty to use the backend's configured key (ANTHROPIC_API_KEY / OPENAI_API_KEY)."
                </p>
            </div>
        </div>
    }
}
