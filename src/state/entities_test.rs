use super::*;
use crate::state::collection::{CollectionState, SaveMethod};

// =============================================================
// Decoding
// =============================================================

#[test]
fn website_decodes_null_columns_as_empty() {
    let site: Website = serde_json::from_str(
        r#"{"id":4,"name":"Docs","link":"https://docs.rs","icon":null,"description":null,"category":null}"#,
    )
    .expect("decode");
    assert_eq!(site.id, Some(4));
    assert_eq!(site.icon, "");
    assert_eq!(site.category, "");
}

#[test]
fn new_record_serializes_without_id() {
    let site = Website { name: "Docs".to_owned(), link: "https://docs.rs".to_owned(), ..Website::default() };
    let value = serde_json::to_value(&site).expect("encode");
    assert!(value.get("id").is_none());
    assert_eq!(value["name"], "Docs");
}

#[test]
fn task_status_round_trips_display_labels() {
    let task: Task = serde_json::from_str(r#"{"id":1,"task_name":"Ship","status":"In Progress"}"#).expect("decode");
    assert_eq!(task.status, TaskStatus::InProgress);
    let value = serde_json::to_value(&task).expect("encode");
    assert_eq!(value["status"], "In Progress");
}

#[test]
fn task_status_unknown_or_null_is_pending() {
    let task: Task = serde_json::from_str(r#"{"task_name":"x","status":null}"#).expect("decode");
    assert_eq!(task.status, TaskStatus::Pending);
    assert_eq!(TaskStatus::parse("Archived"), TaskStatus::Pending);
    assert_eq!(TaskStatus::parse("on hold"), TaskStatus::OnHold);
}

#[test]
fn note_default_images_is_empty_array() {
    assert_eq!(Note::default().images, "[]");
    let note: Note = serde_json::from_str(r#"{"content":"hi"}"#).expect("decode");
    assert_eq!(note.images, "[]");
}

// =============================================================
// Required fields
// =============================================================

#[test]
fn website_requires_name_and_link() {
    let mut site = Website { name: "Docs".to_owned(), ..Website::default() };
    assert!(!site.has_required_fields());
    site.link = "  ".to_owned();
    assert!(!site.has_required_fields());
    site.link = "https://docs.rs".to_owned();
    assert!(site.has_required_fields());
}

#[test]
fn server_task_note_require_their_name_field() {
    assert!(!Server::default().has_required_fields());
    assert!(Server { server_name: "db-1".to_owned(), ..Server::default() }.has_required_fields());
    assert!(!Task::default().has_required_fields());
    assert!(Task { task_name: "Invoice".to_owned(), ..Task::default() }.has_required_fields());
    assert!(!Note::default().has_required_fields());
    assert!(Note { content: "todo".to_owned(), ..Note::default() }.has_required_fields());
}

// =============================================================
// Facets
// =============================================================

#[test]
fn server_client_defaults_to_self() {
    let server = Server { server_name: "a".to_owned(), ..Server::default() };
    assert_eq!(server.facet_values(Facet::Client), vec!["Self".to_owned()]);
    assert_eq!(server.facet_values(Facet::Provider), vec!["Other".to_owned()]);
}

#[test]
fn website_category_defaults_to_general() {
    assert_eq!(Website::default().facet_values(Facet::Category), vec!["General".to_owned()]);
}

#[test]
fn parse_tags_trims_and_dedups() {
    assert_eq!(
        parse_tags(" rust, web ,, rust,ops "),
        vec!["rust".to_owned(), "web".to_owned(), "ops".to_owned()]
    );
    assert!(parse_tags("").is_empty());
}

// =============================================================
// Auto-stamping
// =============================================================

#[test]
fn completed_task_without_completion_date_is_stamped() {
    let mut state = CollectionState::<Task>::default();
    state.open_create();
    state.edit_draft(|t| {
        t.task_name = "Deploy".to_owned();
        t.status = TaskStatus::Completed;
    });
    let req = state.begin_save("2026-10-19").expect("save request");
    assert_eq!(req.method, SaveMethod::Create);
    assert_eq!(req.body.date_completed, "2026-10-19");
    assert_eq!(req.body.date_created, "2026-10-19");
}

#[test]
fn existing_dates_are_not_overwritten() {
    let mut task = Task {
        id: Some(3),
        task_name: "Deploy".to_owned(),
        status: TaskStatus::Completed,
        date_created: "2026-01-01".to_owned(),
        date_completed: "2026-02-02".to_owned(),
        ..Task::default()
    };
    task.stamp("2026-10-19", false);
    assert_eq!(task.date_created, "2026-01-01");
    assert_eq!(task.date_completed, "2026-02-02");
}

#[test]
fn pending_task_update_gets_no_completion_date() {
    let mut task = Task { id: Some(3), task_name: "Deploy".to_owned(), ..Task::default() };
    task.stamp("2026-10-19", false);
    assert_eq!(task.date_completed, "");
    assert_eq!(task.date_created, "");
}

#[test]
fn note_stamp_normalizes_malformed_images() {
    let mut note = Note { content: "x".to_owned(), images: "oops".to_owned(), ..Note::default() };
    note.stamp("2026-10-19", true);
    assert_eq!(note.images, "[]");
    assert_eq!(note.date_created, "2026-10-19");
}

// =============================================================
// Pasted images
// =============================================================

#[test]
fn pasting_two_images_into_new_note_keeps_both() {
    let mut state = CollectionState::<Note>::default();
    state.open_create();
    // Each decoded image lands through its own draft update.
    state.edit_draft(|n| n.push_image("data:image/png;base64,AAA"));
    state.edit_draft(|n| n.push_image("data:image/png;base64,BBB"));
    let images = state.draft.record().image_list();
    assert_eq!(images.len(), 2);
    assert!(images.iter().all(|url| url.starts_with("data:image/")));
}

#[test]
fn remove_image_applies_to_draft() {
    let mut note = Note::default();
    note.push_image("data:a");
    note.push_image("data:b");
    note.remove_image(0);
    assert_eq!(note.image_list(), vec!["data:b".to_owned()]);
}
