//! Shared form for adding and editing a student.

use dioxus::prelude::*;

use api::StudentDirectory;
use store::{QueryKey, Student, StudentDraft};

use crate::components::{valid_email, Input};
use crate::queries::use_queries;
use crate::students::use_students;

/// Create form when `student` is absent, edit form when present. Calls
/// `on_saved` after the directory write lands and the roster cache has been
/// invalidated.
#[component]
pub fn StudentForm(
    #[props(default = None)] student: Option<Student>,
    on_saved: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let source = use_students();
    let mut queries = use_queries();

    let initial_name = student.as_ref().map(|s| s.name.clone()).unwrap_or_default();
    let initial_email = student.as_ref().map(|s| s.email.clone()).unwrap_or_default();
    let initial_age = student
        .as_ref()
        .map(|s| s.age.to_string())
        .unwrap_or_default();
    let mut name = use_signal(move || initial_name);
    let mut email = use_signal(move || initial_email);
    let mut age = use_signal(move || initial_age);

    let mut name_error = use_signal(|| None::<String>);
    let mut email_error = use_signal(|| None::<String>);
    let mut age_error = use_signal(|| None::<String>);
    let mut submit_error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let editing_id = student.as_ref().map(|s| s.id);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let name_value = name().trim().to_string();
        let email_value = email().trim().to_string();
        let age_value = age().trim().to_string();

        let mut valid = true;
        if name_value.is_empty() {
            name_error.set(Some("Name is required".to_string()));
            valid = false;
        } else {
            name_error.set(None);
        }
        if !valid_email(&email_value) {
            email_error.set(Some("Enter a valid email address".to_string()));
            valid = false;
        } else {
            email_error.set(None);
        }
        let parsed_age = match age_value.parse::<u32>() {
            Ok(age) if (1..=150).contains(&age) => {
                age_error.set(None);
                Some(age)
            }
            _ => {
                age_error.set(Some("Age must be between 1 and 150".to_string()));
                valid = false;
                None
            }
        };
        if !valid {
            return;
        }

        let draft = StudentDraft {
            name: name_value,
            email: email_value,
            age: parsed_age.unwrap_or_default(),
        };

        let source = source.clone();
        spawn(async move {
            submitting.set(true);
            let result = match editing_id {
                Some(id) => source.update(id, &draft).await,
                None => source.create(&draft).await,
            };
            match result {
                Ok(_) => {
                    queries.invalidate(QueryKey::Students);
                    on_saved.call(());
                }
                Err(err) => {
                    tracing::error!(error = %err, "failed to save student");
                    submit_error.set(Some(err.to_string()));
                    submitting.set(false);
                }
            }
        });
    };

    rsx! {
        form { class: "student-form", onsubmit: handle_submit,
            Input {
                label: "Name",
                placeholder: "Full name",
                value: name(),
                error: name_error(),
                disabled: submitting(),
                oninput: move |evt: FormEvent| name.set(evt.value()),
            }
            Input {
                label: "Email",
                r#type: "email",
                placeholder: "student@example.com",
                value: email(),
                error: email_error(),
                disabled: submitting(),
                oninput: move |evt: FormEvent| email.set(evt.value()),
            }
            Input {
                label: "Age",
                r#type: "number",
                value: age(),
                error: age_error(),
                disabled: submitting(),
                oninput: move |evt: FormEvent| age.set(evt.value()),
            }
            if let Some(message) = submit_error() {
                p { class: "form-error", "{message}" }
            }
            div { class: "form-actions",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: submitting(),
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Saving..." } else if editing_id.is_some() { "Update Student" } else { "Add Student" }
                }
            }
        }
    }
}
