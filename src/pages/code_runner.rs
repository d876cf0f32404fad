//! Python code runner backed by the sandboxed `POST /run-code` endpoint.

#[cfg(test)]
#[path = "code_runner_test.rs"]
mod code_runner_test;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::types::{RUN_CODE_TIMEOUT_SECS, RunCodeRequest, RunCodeResponse};
use crate::state::auth::AuthState;

pub const SAMPLE_CODE: &str = "# Write your Python code here\nprint(\"Hello from PyTool! 🚀\")\n\nfor i in range(5):\n    print(f\"Count: {i}\")";

pub fn format_run_output(result: &Result<RunCodeResponse, ApiError>) -> String {
    match result {
        Ok(resp) if resp.success => resp.output.clone(),
        Ok(resp) => format!("❌ Error:\n{}", resp.error),
        Err(e) => format!("❌ Connection error: {e}"),
    }
}

pub fn build_run_request(code: &str) -> RunCodeRequest {
    RunCodeRequest { code: code.to_owned(), timeout: RUN_CODE_TIMEOUT_SECS }
}

#[component]
pub fn CodeRunnerPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let code = RwSignal::new(SAMPLE_CODE.to_owned());
    let output = RwSignal::new(String::new());
    let running = RwSignal::new(false);

    let on_run = move |_| {
        if running.get() {
            return;
        }
        running.set(true);
        output.set(String::new());
        let req = build_run_request(&code.get());

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let token = auth.with_untracked(|a| a.token.clone());
            let result = crate::net::api::run_code(token.as_deref(), &req).await;
            if let Err(e) = &result {
                crate::util::auth::handle_api_error(auth, e);
            }
            output.set(format_run_output(&result));
            running.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (req, auth);
            running.set(false);
        }
    };

    view! {
        <div class="tool-page">
            <header class="tool-page__header">
                <h2>"Python Code Runner"</h2>
                <button class="btn btn--primary" on:click=on_run disabled=move || running.get()>
                    {move || if running.get() { "Running..." } else { "▶ Run Code" }}
                </button>
            </header>
            <textarea
                class="code-editor"
                spellcheck="false"
                prop:value=move || code.get()
                on:input=move |ev| code.set(event_target_value(&ev))
            ></textarea>
            <div class="tool-page__label">"Output"</div>
            <pre class="tool-page__output">
                {move || {
                    let text = output.get();
                    if text.is_empty() { "Click 'Run Code' to see output...".to_owned() } else { text }
                }}
            </pre>
        </div>
    }
}
