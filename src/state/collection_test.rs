use super::*;
use crate::state::entities::{Note, Server, Task, TaskStatus, Website};

const TODAY: &str = "2026-10-19";

fn server(id: i64, name: &str, client: &str, provider: &str) -> Server {
    Server {
        id: Some(id),
        server_name: name.to_owned(),
        client: client.to_owned(),
        provider: provider.to_owned(),
        ..Server::default()
    }
}

fn loaded_servers() -> CollectionState<Server> {
    let mut state = CollectionState::default();
    state.replace_items(vec![
        server(1, "web-1", "Acme", "Hetzner"),
        server(2, "web-2", "", "Hetzner"),
        server(3, "db-1", "Acme", "AWS"),
    ]);
    state
}

// =============================================================
// Defaults and kinds
// =============================================================

#[test]
fn default_state_is_closed_and_empty() {
    let state = CollectionState::<Website>::default();
    assert!(state.items.is_empty());
    assert!(!state.loaded);
    assert!(!state.modal_open);
    assert!(!state.saving);
    assert_eq!(state.draft, Draft::New(Website::default()));
}

#[test]
fn entity_kind_paths_and_labels() {
    assert_eq!(EntityKind::Websites.path(), "/websites");
    assert_eq!(EntityKind::Notes.label(), "Notes");
    assert_eq!(EntityKind::Servers.singular(), "Server");
    assert_eq!(EntityKind::default(), EntityKind::Websites);
}

// =============================================================
// Fetch
// =============================================================

#[test]
fn replace_items_swaps_collection_wholesale() {
    let mut state = loaded_servers();
    state.begin_fetch();
    state.replace_items(vec![server(9, "new", "", "")]);
    assert_eq!(state.items.len(), 1);
    assert!(state.loaded);
    assert!(!state.loading);
}

#[test]
fn failed_fetch_keeps_previous_items() {
    let mut state = loaded_servers();
    state.begin_fetch();
    state.fetch_failed();
    assert_eq!(state.items.len(), 3);
    assert!(!state.loading);
}

// =============================================================
// Modal + save
// =============================================================

#[test]
fn save_without_required_fields_is_noop_for_every_kind() {
    let mut websites = CollectionState::<Website>::default();
    websites.open_create();
    websites.edit_draft(|w| w.name = "Only name".to_owned());
    assert!(websites.begin_save(TODAY).is_none());
    assert!(!websites.saving);
    assert!(websites.modal_open);

    let mut servers = CollectionState::<Server>::default();
    servers.open_create();
    assert!(servers.begin_save(TODAY).is_none());

    let mut tasks = CollectionState::<Task>::default();
    tasks.open_create();
    assert!(tasks.begin_save(TODAY).is_none());

    let mut notes = CollectionState::<Note>::default();
    notes.open_create();
    assert!(notes.begin_save(TODAY).is_none());
}

#[test]
fn open_create_resets_previous_edit() {
    let mut state = loaded_servers();
    let first = state.items[0].clone();
    state.open_edit(&first);
    assert!(state.draft.is_editing());
    state.open_create();
    assert!(!state.draft.is_editing());
    assert_eq!(state.draft.record(), &Server::default());
    assert!(state.modal_open);
}

#[test]
fn edit_with_identity_saves_as_update() {
    let mut state = loaded_servers();
    let first = state.items[0].clone();
    state.open_edit(&first);
    state.edit_draft(|s| s.server_ip = "10.0.0.1".to_owned());
    let req = state.begin_save(TODAY).expect("save request");
    assert_eq!(req.method, SaveMethod::Update(1));
    assert_eq!(req.http_method(), "PUT");
    assert_eq!(req.path(), "/servers/1");
    assert_eq!(req.body.server_ip, "10.0.0.1");
    assert!(state.saving);
}

#[test]
fn edit_without_identity_saves_as_create() {
    let mut state = CollectionState::<Server>::default();
    state.open_edit(&Server { server_name: "draft".to_owned(), ..Server::default() });
    let req = state.begin_save(TODAY).expect("save request");
    assert_eq!(req.method, SaveMethod::Create);
    assert_eq!(req.http_method(), "POST");
    assert_eq!(req.path(), "/servers");
}

#[test]
fn second_save_while_in_flight_is_ignored() {
    let mut state = CollectionState::<Task>::default();
    state.open_create();
    state.edit_draft(|t| t.task_name = "x".to_owned());
    assert!(state.begin_save(TODAY).is_some());
    assert!(state.begin_save(TODAY).is_none());
}

#[test]
fn successful_save_closes_modal_and_resets_draft() {
    let mut state = CollectionState::<Task>::default();
    state.open_create();
    state.edit_draft(|t| {
        t.task_name = "x".to_owned();
        t.status = TaskStatus::OnHold;
    });
    let req = state.begin_save(TODAY).expect("save request");
    state.finish_save(req.session, Ok(()));
    assert!(!state.modal_open);
    assert!(!state.saving);
    assert_eq!(state.draft, Draft::New(Task::default()));
}

#[test]
fn failed_save_keeps_modal_open_with_error() {
    let mut state = CollectionState::<Note>::default();
    state.open_create();
    state.edit_draft(|n| n.content = "keep me".to_owned());
    let req = state.begin_save(TODAY).expect("save request");
    state.finish_save(req.session, Err("request failed (500)".to_owned()));
    assert!(state.modal_open);
    assert!(!state.saving);
    assert_eq!(state.save_error.as_deref(), Some("request failed (500)"));
    assert_eq!(state.draft.record().content, "keep me");
}

#[test]
fn late_success_from_closed_session_keeps_new_draft() {
    let mut state = CollectionState::<Website>::default();
    state.open_create();
    state.edit_draft(|w| {
        w.name = "A".to_owned();
        w.link = "https://a.example".to_owned();
    });
    let first = state.begin_save(TODAY).expect("save request");
    state.close_modal();
    state.open_create();
    state.edit_draft(|w| w.name = "B".to_owned());

    state.finish_save(first.session, Ok(()));

    assert!(state.modal_open);
    assert_eq!(state.draft, Draft::New(Website { name: "B".to_owned(), ..Website::default() }));
}

#[test]
fn late_failure_from_closed_session_does_not_touch_pending_save() {
    let mut state = CollectionState::<Website>::default();
    state.open_create();
    state.edit_draft(|w| {
        w.name = "A".to_owned();
        w.link = "https://a.example".to_owned();
    });
    let first = state.begin_save(TODAY).expect("first save");
    state.close_modal();
    state.open_create();
    state.edit_draft(|w| {
        w.name = "B".to_owned();
        w.link = "https://b.example".to_owned();
    });
    let second = state.begin_save(TODAY).expect("second save");
    assert_ne!(first.session, second.session);

    state.finish_save(first.session, Err("first failed".to_owned()));
    assert!(state.saving);
    assert_eq!(state.save_error, None);
    assert_eq!(state.draft.record().name, "B");

    state.finish_save(second.session, Ok(()));
    assert!(!state.modal_open);
    assert!(!state.saving);
}

#[test]
fn reopening_the_modal_allows_a_fresh_save() {
    let mut state = CollectionState::<Task>::default();
    state.open_create();
    state.edit_draft(|t| t.task_name = "x".to_owned());
    state.begin_save(TODAY).expect("save request");
    state.close_modal();
    state.open_create();
    state.edit_draft(|t| t.task_name = "y".to_owned());
    assert!(state.begin_save(TODAY).is_some());
}

#[test]
fn close_modal_clears_draft_and_error() {
    let mut state = CollectionState::<Website>::default();
    state.open_create();
    state.edit_draft(|w| w.name = "half".to_owned());
    state.save_error = Some("x".to_owned());
    state.close_modal();
    assert!(!state.modal_open);
    assert!(state.save_error.is_none());
    assert_eq!(state.draft.record(), &Website::default());
}

// =============================================================
// Filters
// =============================================================

#[test]
fn filter_defaults_to_all_and_returns_everything() {
    let state = loaded_servers();
    assert_eq!(state.filter(Facet::Client), ALL);
    assert_eq!(state.visible(), state.items);
}

#[test]
fn filter_options_are_derived_from_loaded_items() {
    let state = loaded_servers();
    assert_eq!(state.filter_options(Facet::Client), vec!["All", "Acme", "Self"]);
    assert_eq!(state.filter_options(Facet::Provider), vec!["All", "AWS", "Hetzner"]);
}

#[test]
fn concrete_filter_selects_exact_subset_with_default_substitution() {
    let mut state = loaded_servers();
    state.set_filter(Facet::Client, "Self");
    let names: Vec<_> = state.visible().into_iter().map(|s| s.server_name).collect();
    assert_eq!(names, vec!["web-2"]);

    state.set_filter(Facet::Client, "Acme");
    state.set_filter(Facet::Provider, "AWS");
    let names: Vec<_> = state.visible().into_iter().map(|s| s.server_name).collect();
    assert_eq!(names, vec!["db-1"]);
}

#[test]
fn selecting_all_clears_dimension() {
    let mut state = loaded_servers();
    state.set_filter(Facet::Provider, "AWS");
    assert_eq!(state.visible().len(), 1);
    state.set_filter(Facet::Provider, ALL);
    assert_eq!(state.visible().len(), 3);
    assert_eq!(state.filter(Facet::Provider), ALL);
}

#[test]
fn note_tag_filter_matches_tag_membership() {
    let mut state = CollectionState::<Note>::default();
    state.replace_items(vec![
        Note { id: Some(1), content: "a".to_owned(), tags: "rust, web".to_owned(), ..Note::default() },
        Note { id: Some(2), content: "b".to_owned(), tags: "ops".to_owned(), ..Note::default() },
        Note { id: Some(3), content: "c".to_owned(), ..Note::default() },
    ]);
    assert_eq!(state.filter_options(Facet::Tag), vec!["All", "ops", "rust", "web"]);
    state.set_filter(Facet::Tag, "web");
    let ids: Vec<_> = state.visible().into_iter().filter_map(|n| n.id).collect();
    assert_eq!(ids, vec![1]);
}

#[test]
fn filter_on_value_absent_from_collection_yields_nothing() {
    let mut state = loaded_servers();
    state.set_filter(Facet::Client, "Nobody");
    assert!(state.visible().is_empty());
}

#[test]
fn refetch_drops_filter_whose_value_disappeared() {
    let mut state = loaded_servers();
    state.set_filter(Facet::Provider, "AWS");
    state.set_filter(Facet::Client, "Acme");
    state.replace_items(vec![server(1, "web-1", "Acme", "Hetzner"), server(2, "web-2", "", "Hetzner")]);

    assert_eq!(state.filter(Facet::Provider), ALL);
    assert_eq!(state.filter(Facet::Client), "Acme");
    assert_eq!(state.filter_options(Facet::Provider), vec!["All", "Hetzner"]);
    let names: Vec<_> = state.visible().into_iter().map(|s| s.server_name).collect();
    assert_eq!(names, vec!["web-1"]);
}

#[test]
fn today_is_iso_date() {
    let date = today();
    assert_eq!(date.len(), 10);
    assert_eq!(date.as_bytes()[4], b'-');
    assert_eq!(date.as_bytes()[7], b'-');
}
