//! Outbound HTTP relay through `POST /call-api`.
//!
//! The headers and body boxes hold raw JSON text; they are parsed before any
//! request goes out so malformed input is reported without a round trip.

#[cfg(test)]
#[path = "api_caller_test.rs"]
mod api_caller_test;

use leptos::prelude::*;
use serde_json::{Map, Value};

use crate::net::error::ApiError;
use crate::net::types::ApiCallRequest;
use crate::state::auth::AuthState;

pub const HTTP_METHODS: [&str; 5] = ["GET", "POST", "PUT", "PATCH", "DELETE"];
pub const SAMPLE_URL: &str = "https://jsonplaceholder.typicode.com/posts/1";

/// Validate the form and build the relay body.
///
/// # Errors
///
/// Returns the inline message for a missing URL or malformed JSON.
pub fn build_api_call(method: &str, url: &str, headers: &str, body: &str) -> Result<ApiCallRequest, String> {
    let url = url.trim();
    if url.is_empty() {
        return Err("Enter a URL.".to_owned());
    }
    let headers = if headers.trim().is_empty() {
        Map::new()
    } else {
        match serde_json::from_str::<Value>(headers) {
            Ok(Value::Object(map)) => map,
            _ => return Err("Headers must be a JSON object.".to_owned()),
        }
    };
    let body = if body.trim().is_empty() {
        None
    } else {
        Some(serde_json::from_str::<Value>(body).map_err(|e| format!("Body is not valid JSON: {e}"))?)
    };
    Ok(ApiCallRequest { url: url.to_owned(), method: method.to_owned(), headers, body, params: None })
}

pub fn format_api_response(result: &Result<Value, ApiError>) -> String {
    match result {
        Ok(value) => serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string()),
        Err(e) => format!("Error: {e}"),
    }
}

#[component]
pub fn ApiCallerPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let method = RwSignal::new(HTTP_METHODS[0].to_owned());
    let url = RwSignal::new(SAMPLE_URL.to_owned());
    let headers = RwSignal::new("{}".to_owned());
    let body = RwSignal::new(String::new());
    let response = RwSignal::new(String::new());
    let sending = RwSignal::new(false);

    let on_send = move |_| {
        if sending.get() {
            return;
        }
        let req = match build_api_call(&method.get(), &url.get(), &headers.get(), &body.get()) {
            Ok(req) => req,
            Err(message) => {
                response.set(message);
                return;
            }
        };
        sending.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let token = auth.with_untracked(|a| a.token.clone());
            let result = crate::net::api::call_api(token.as_deref(), &req).await;
            if let Err(e) = &result {
                crate::util::auth::handle_api_error(auth, e);
            }
            response.set(format_api_response(&result));
            sending.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (req, auth);
            sending.set(false);
        }
    };

    view! {
        <div class="tool-page">
            <h2>"API Caller"</h2>
            <div class="api-caller__bar">
                <select class="api-caller__method" on:change=move |ev| method.set(event_target_value(&ev))>
                    {HTTP_METHODS
                        .into_iter()
                        .map(|m| view! { <option value=m selected=move || method.get() == m>{m}</option> })
                        .collect_view()}
                </select>
                <input
                    class="api-caller__url"
                    type="text"
                    placeholder="https://api.example.com/..."
                    prop:value=move || url.get()
                    on:input=move |ev| url.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" on:click=on_send disabled=move || sending.get()>
                    {move || if sending.get() { "Sending..." } else { "Send" }}
                </button>
            </div>
            <div class="api-caller__grid">
                <label class="tool-page__label">
                    "Headers (JSON)"
                    <textarea
                        rows="3"
                        prop:value=move || headers.get()
                        on:input=move |ev| headers.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="tool-page__label">
                    "Body (JSON)"
                    <textarea
                        rows="3"
                        placeholder="{\"key\": \"value\"}"
                        prop:value=move || body.get()
                        on:input=move |ev| body.set(event_target_value(&ev))
                    ></textarea>
                </label>
            </div>
            <div class="tool-page__label">"Response"</div>
            <pre class="tool-page__output">
                {move || {
                    let text = response.get();
                    if text.is_empty() { "Send a request to see the response...".to_owned() } else { text }
                }}
            </pre>
        </div>
    }
}
