//! Task cards and form.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use leptos::prelude::*;

use super::draft_input::DraftInput;
use crate::state::collection::CollectionState;
use crate::state::entities::{DEFAULT_CATEGORY, DEFAULT_CLIENT, Task, TaskStatus};

/// CSS modifier for a status badge.
pub fn status_class(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Pending => "status status--pending",
        TaskStatus::InProgress => "status status--in-progress",
        TaskStatus::Completed => "status status--completed",
        TaskStatus::OnHold => "status status--on-hold",
    }
}

pub fn card(task: Task, _copied: RwSignal<Option<String>>) -> AnyView {
    let category = if task.category.trim().is_empty() { DEFAULT_CATEGORY.to_owned() } else { task.category.clone() };
    let client = if task.client.trim().is_empty() { DEFAULT_CLIENT.to_owned() } else { task.client.clone() };
    let completed = (!task.date_completed.is_empty()).then(|| format!("Completed {}", task.date_completed));

    view! {
        <div class="entity-card__title">
            <strong>{task.task_name.clone()}</strong>
            <span class=status_class(task.status)>{task.status.as_str()}</span>
        </div>
        <div class="entity-card__subtitle">
            <span class="entity-card__badge">{category}</span>
            <span class="entity-card__badge">{client}</span>
        </div>
        <div class="entity-card__meta">
            <span>{format!("Created {}", task.date_created)}</span>
            {completed.map(|text| view! { <span>{text}</span> })}
        </div>
    }
    .into_any()
}

pub fn form(state: RwSignal<CollectionState<Task>>) -> AnyView {
    let on_status = move |ev: leptos::ev::Event| {
        let status = TaskStatus::parse(&event_target_value(&ev));
        state.update(|s| s.edit_draft(|task| task.status = status));
    };

    view! {
        <DraftInput
            state=state
            label="Task"
            required=true
            get=|t: &Task| t.task_name.clone()
            set=|t: &mut Task, v: String| t.task_name = v
        />
        <DraftInput
            state=state
            label="Category"
            placeholder=DEFAULT_CATEGORY
            get=|t: &Task| t.category.clone()
            set=|t: &mut Task, v: String| t.category = v
        />
        <DraftInput
            state=state
            label="Client"
            placeholder=DEFAULT_CLIENT
            get=|t: &Task| t.client.clone()
            set=|t: &mut Task, v: String| t.client = v
        />
        <label class="dialog__label">
            "Status"
            <select class="dialog__input" on:change=on_status>
                {TaskStatus::ALL
                    .into_iter()
                    .map(|status| {
                        view! {
                            <option
                                value=status.as_str()
                                selected=move || state.with(|s| s.draft.record().status == status)
                            >
                                {status.as_str()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
        <DraftInput
            state=state
            label="Created"
            input_type="date"
            get=|t: &Task| t.date_created.clone()
            set=|t: &mut Task, v: String| t.date_created = v
        />
        <DraftInput
            state=state
            label="Completed"
            input_type="date"
            get=|t: &Task| t.date_completed.clone()
            set=|t: &mut Task, v: String| t.date_completed = v
        />
    }
    .into_any()
}
