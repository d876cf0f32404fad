//! System clipboard helpers: copy-to-clipboard feedback and image paste.
//!
//! TRADE-OFFS
//! ==========
//! Pasted images are read with one `FileReader` per item, so completions can
//! arrive in any order. Callers append each data-URL to the current draft as
//! it lands rather than collecting them up front.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

use leptos::prelude::*;

/// How long the "copied" marker stays visible.
pub const COPIED_RESET_MS: u64 = 2000;

/// Clear the copied marker only if it still belongs to `id`; a newer copy
/// must not be cleared by an older timer.
pub fn clear_copied_if_current(current: &mut Option<String>, id: &str) {
    if current.as_deref() == Some(id) {
        *current = None;
    }
}

/// Write `text` to the clipboard and flag `id` as copied for
/// [`COPIED_RESET_MS`].
pub fn copy_with_feedback(text: String, id: String, copied: RwSignal<Option<String>>) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Some(clipboard) = window.navigator().clipboard() {
            let _ = clipboard.write_text(&text);
        }
        copied.set(Some(id.clone()));
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(COPIED_RESET_MS)).await;
            copied.update(|current| clear_copied_if_current(current, &id));
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (text, id, copied);
    }
}

/// Decode every image item in a paste event to a data-URL and hand each one
/// to `on_image` as it completes. Returns how many reads were started.
#[cfg(feature = "csr")]
pub fn read_pasted_images<F>(ev: &web_sys::ClipboardEvent, on_image: F) -> u32
where
    F: Fn(String) + Clone + 'static,
{
    use wasm_bindgen::JsCast as _;
    use wasm_bindgen::closure::Closure;

    let Some(data) = ev.clipboard_data() else {
        return 0;
    };
    let items = data.items();
    let mut started = 0;
    for index in 0..items.length() {
        let Some(item) = items.get(index) else {
            continue;
        };
        if !super::images::is_image_mime(&item.type_()) {
            continue;
        }
        let Ok(Some(file)) = item.get_as_file() else {
            continue;
        };
        let Ok(reader) = web_sys::FileReader::new() else {
            continue;
        };
        let on_image = on_image.clone();
        let reader_done = reader.clone();
        let onload = Closure::once_into_js(move |_: web_sys::Event| match reader_done.result() {
            Ok(result) => {
                if let Some(url) = result.as_string() {
                    on_image(url);
                }
            }
            Err(_) => log::warn!("clipboard: failed to read pasted image"),
        });
        reader.set_onload(Some(onload.unchecked_ref()));
        if reader.read_as_data_url(&file).is_ok() {
            started += 1;
        }
    }
    started
}
