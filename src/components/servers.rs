//! Server cards and form.

use leptos::prelude::*;

use super::copy_button::CopyButton;
use super::draft_input::DraftInput;
use crate::state::collection::CollectionState;
use crate::state::entities::{DEFAULT_CLIENT, DEFAULT_PROVIDER, Server};

fn or_default(value: &str, default: &str) -> String {
    if value.trim().is_empty() { default.to_owned() } else { value.to_owned() }
}

pub fn card(server: Server, copied: RwSignal<Option<String>>) -> AnyView {
    let provider = or_default(&server.provider, DEFAULT_PROVIDER);
    let client = or_default(&server.client, DEFAULT_CLIENT);
    let provider_view = if server.provider_link.trim().is_empty() {
        view! { <span>{provider}</span> }.into_any()
    } else {
        view! {
            <a href=server.provider_link.clone() target="_blank" rel="noopener noreferrer">
                {provider}
            </a>
        }
        .into_any()
    };
    let ip_view = (!server.server_ip.trim().is_empty()).then(|| {
        let copy_id = format!("server-ip-{}", server.id.unwrap_or_default());
        view! {
            <div class="entity-card__meta">
                <code class="entity-card__mono">{server.server_ip.clone()}</code>
                <CopyButton text=server.server_ip.clone() id=copy_id copied=copied/>
            </div>
        }
    });

    view! {
        <div class="entity-card__title">
            <strong>{server.server_name.clone()}</strong>
            <span class="entity-card__badge">{client}</span>
        </div>
        <div class="entity-card__subtitle">{provider_view}</div>
        {ip_view}
        <p class="entity-card__description">{server.description.clone()}</p>
    }
    .into_any()
}

pub fn form(state: RwSignal<CollectionState<Server>>) -> AnyView {
    view! {
        <DraftInput
            state=state
            label="Server name"
            required=true
            get=|s: &Server| s.server_name.clone()
            set=|s: &mut Server, v: String| s.server_name = v
        />
        <DraftInput
            state=state
            label="Provider"
            placeholder=DEFAULT_PROVIDER
            get=|s: &Server| s.provider.clone()
            set=|s: &mut Server, v: String| s.provider = v
        />
        <DraftInput
            state=state
            label="Provider link"
            input_type="url"
            placeholder="https://"
            get=|s: &Server| s.provider_link.clone()
            set=|s: &mut Server, v: String| s.provider_link = v
        />
        <DraftInput
            state=state
            label="Client"
            placeholder=DEFAULT_CLIENT
            get=|s: &Server| s.client.clone()
            set=|s: &mut Server, v: String| s.client = v
        />
        <DraftInput
            state=state
            label="IP address"
            placeholder="203.0.113.10"
            get=|s: &Server| s.server_ip.clone()
            set=|s: &mut Server, v: String| s.server_ip = v
        />
        <DraftInput
            state=state
            label="Description"
            multiline=true
            get=|s: &Server| s.description.clone()
            set=|s: &mut Server, v: String| s.description = v
        />
    }
    .into_any()
}
