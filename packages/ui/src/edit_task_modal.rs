//! Modal form for editing an existing task.

use dioxus::prelude::*;

use store::{QueryKey, Task, TaskUpdate};

use crate::auth::use_api;
use crate::components::{Input, Textarea};
use crate::modal_overlay::ModalOverlay;
use crate::queries::use_queries;

const TITLE_MAX: usize = 500;

/// Edits title and description; the completed flag is only ever touched by
/// the row's toggle.
#[component]
pub fn EditTaskModal(task: Task, on_close: EventHandler<()>) -> Element {
    let api = use_api();
    let mut queries = use_queries();

    let initial_title = task.title.clone();
    let initial_description = task.description.clone().unwrap_or_default();
    let mut title = use_signal(move || initial_title);
    let mut description = use_signal(move || initial_description);
    let mut title_error = use_signal(|| None::<String>);
    let mut submit_error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let task_id = task.id.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let trimmed = title().trim().to_string();
        if trimmed.is_empty() {
            title_error.set(Some("Title is required".to_string()));
            return;
        }
        if trimmed.chars().count() > TITLE_MAX {
            title_error.set(Some(format!("Title must be at most {TITLE_MAX} characters")));
            return;
        }
        title_error.set(None);

        let update = TaskUpdate {
            title: Some(trimmed),
            description: {
                let text = description().trim().to_string();
                if text.is_empty() { None } else { Some(text) }
            },
            completed: None,
        };

        let api = api.clone();
        let id = task_id.clone();
        spawn(async move {
            submitting.set(true);
            match api.update_task(&id, &update).await {
                Ok(_) => {
                    queries.invalidate(QueryKey::Tasks);
                    on_close.call(());
                }
                Err(err) => {
                    tracing::error!(error = %err, "failed to update task");
                    submit_error.set(Some(err.to_string()));
                    submitting.set(false);
                }
            }
        });
    };

    rsx! {
        ModalOverlay { on_close,
            h2 { class: "modal-title", "Edit Task" }
            form { onsubmit: handle_submit,
                Input {
                    label: "Title",
                    value: title(),
                    error: title_error(),
                    disabled: submitting(),
                    oninput: move |evt: FormEvent| title.set(evt.value()),
                }
                Textarea {
                    label: "Description",
                    value: description(),
                    disabled: submitting(),
                    oninput: move |evt: FormEvent| description.set(evt.value()),
                }
                if let Some(message) = submit_error() {
                    p { class: "form-error", "{message}" }
                }
                div { class: "modal-actions",
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        disabled: submitting(),
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Saving..." } else { "Save Changes" }
                    }
                }
            }
        }
    }
}
