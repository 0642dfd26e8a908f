//! Edit-student page.

use dioxus::prelude::*;

use api::{ApiError, StudentDirectory};
use store::Student;
use ui::{use_auth, use_students, StudentForm};

use crate::Route;

#[component]
pub fn StudentEdit(id: i64) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let source = use_students();

    let mut student = use_signal(|| None::<Student>);
    let mut missing = use_signal(|| false);

    let _loader = use_resource(move || {
        let source = source.clone();
        async move {
            match source.get(id).await {
                Ok(row) => student.set(Some(row)),
                Err(ApiError::NotFound(_)) => missing.set(true),
                Err(err) => {
                    tracing::error!(error = %err, "failed to load student");
                    missing.set(true);
                }
            }
        }
    });

    // Not logged in: this page is for authenticated users only.
    if !auth().loading && auth().user.is_none() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    rsx! {
        div { class: "page page-narrow",
            header { class: "page-header",
                h1 { "Edit Student" }
            }
            if missing() {
                p { class: "form-error", "Student not found." }
                Link { class: "btn btn-secondary", to: Route::Students {}, "Back to Students" }
            } else if let Some(row) = student() {
                StudentForm {
                    student: Some(row),
                    on_saved: move |_| {
                        nav.push(Route::Students {});
                    },
                    on_cancel: move |_| {
                        nav.push(Route::Students {});
                    },
                }
            } else {
                p { class: "empty-note", "Loading student..." }
            }
        }
    }
}
