//! AI chat against the backend's `POST /ai/chat` proxy.

#[cfg(test)]
#[path = "ai_chat_test.rs"]
mod ai_chat_test;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::types::{AiChatRequest, AiChatResponse};
use crate::state::auth::AuthState;
use crate::state::chat::{AiProvider, ChatRole, ChatState};
use crate::util::markdown;

pub fn build_chat_request(prompt: String, provider: AiProvider, api_key: Option<String>) -> AiChatRequest {
    AiChatRequest { prompt, provider: provider.as_str().to_owned(), api_key }
}

/// Transcript text for a finished request, and whether it is an error.
pub fn reply_message(result: Result<AiChatResponse, ApiError>) -> (String, bool) {
    match result {
        Ok(resp) => resp.into_message(),
        Err(e) => (format!("Error: {e}"), true),
    }
}

fn bubble_class(role: ChatRole) -> &'static str {
    match role {
        ChatRole::User => "chat__bubble chat__bubble--user",
        ChatRole::Assistant => "chat__bubble chat__bubble--assistant",
        ChatRole::Error => "chat__bubble chat__bubble--error",
    }
}

#[component]
pub fn AiChatPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let input = RwSignal::new(String::new());

    let send = move || {
        let mut prompt = None;
        chat.update(|c| prompt = c.begin_send(&input.get_untracked()));
        let Some(prompt) = prompt else {
            return;
        };
        input.set(String::new());
        let provider = chat.with_untracked(|c| c.provider);
        let req = build_chat_request(prompt, provider, provider.load_api_key());

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let token = auth.with_untracked(|a| a.token.clone());
            let result = crate::net::api::ai_chat(token.as_deref(), &req).await;
            if let Err(e) = &result {
                crate::util::auth::handle_api_error(auth, e);
            }
            let (content, is_error) = reply_message(result);
            chat.update(|c| c.finish(content, is_error));
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (req, auth);
            chat.update(|c| c.finish(ApiError::Unavailable.to_string(), true));
        }
    };

    view! {
        <div class="tool-page chat">
            <header class="tool-page__header">
                <h2>"AI Chat"</h2>
                <select
                    class="chat__provider"
                    on:change=move |ev| {
                        if let Some(provider) = AiProvider::parse(&event_target_value(&ev)) {
                            chat.update(|c| c.provider = provider);
                        }
                    }
                >
                    {AiProvider::ALL
                        .into_iter()
                        .map(|p| {
                            view! {
                                <option value=p.as_str() selected=move || chat.with(|c| c.provider == p)>
                                    {p.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </header>
            <div class="chat__transcript">
                <For
                    each=move || chat.with(|c| c.messages.clone())
                    key=|message| message.id.clone()
                    children=move |message| {
                        let body = if message.role == ChatRole::Assistant {
                            view! { <div class="chat__markdown" inner_html=markdown::render(&message.content)></div> }
                                .into_any()
                        } else {
                            view! { <div class="chat__text">{message.content.clone()}</div> }.into_any()
                        };
                        view! { <div class=bubble_class(message.role)>{body}</div> }
                    }
                />
                <Show when=move || chat.with(|c| c.loading)>
                    <div class="chat__bubble chat__bubble--assistant chat__bubble--pending">"Thinking..."</div>
                </Show>
            </div>
            <div class="chat__composer">
                <input
                    class="chat__input"
                    type="text"
                    placeholder="Ask something..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" && !ev.shift_key() {
                            ev.prevent_default();
                            send();
                        }
                    }
                />
                <button
                    class="btn btn--primary"
                    disabled=move || chat.with(|c| c.loading)
                    on:click=move |_| send()
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}
