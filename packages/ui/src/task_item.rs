//! A single row in the task list.

use dioxus::prelude::*;

use store::{QueryKey, Task};

use crate::auth::use_api;
use crate::queries::use_queries;

/// One task with its toggle, edit and delete controls.
///
/// The toggle sends the pure negation of the flag this row was rendered
/// with and is disabled while a request is in flight, so a row can't queue
/// up two flips against the same stale base. Delete leaves the cache alone
/// on failure; the row just becomes clickable again.
#[component]
pub fn TaskItem(task: Task, on_edit: EventHandler<Task>) -> Element {
    let api = use_api();
    let mut queries = use_queries();
    let mut toggling = use_signal(|| false);
    let mut deleting = use_signal(|| false);

    let busy = toggling() || deleting();
    let item_class = if task.completed {
        "task-item task-done"
    } else {
        "task-item"
    };
    let check_class = if task.completed {
        "task-check task-check-on"
    } else {
        "task-check"
    };

    let toggle_api = api.clone();
    let toggle_task = task.clone();
    let handle_toggle = move |_| {
        let api = toggle_api.clone();
        let task = toggle_task.clone();
        async move {
            toggling.set(true);
            match api.toggle_task(&task).await {
                Ok(_) => queries.invalidate(QueryKey::Tasks),
                Err(err) => tracing::error!(error = %err, "failed to toggle task"),
            }
            toggling.set(false);
        }
    };

    let delete_api = api.clone();
    let delete_id = task.id.clone();
    let handle_delete = move |_| {
        let api = delete_api.clone();
        let id = delete_id.clone();
        async move {
            deleting.set(true);
            match api.delete_task(&id).await {
                Ok(_) => queries.invalidate(QueryKey::Tasks),
                Err(err) => {
                    tracing::error!(error = %err, "failed to delete task");
                    deleting.set(false);
                }
            }
        }
    };

    let edit_task = task.clone();

    rsx! {
        div { class: "{item_class}",
            button {
                class: "{check_class}",
                disabled: busy,
                onclick: handle_toggle,
                if task.completed { "✓" }
            }
            div { class: "task-body",
                p { class: "task-title", "{task.title}" }
                if let Some(description) = &task.description {
                    p { class: "task-description", "{description}" }
                }
                p { class: "task-date", "{task.created_at}" }
            }
            div { class: "task-actions",
                button {
                    class: "btn btn-ghost",
                    disabled: busy,
                    onclick: move |_| on_edit.call(edit_task.clone()),
                    "Edit"
                }
                button {
                    class: "btn btn-destructive",
                    disabled: busy,
                    onclick: handle_delete,
                    if deleting() { "Deleting..." } else { "Delete" }
                }
            }
        }
    }
}
