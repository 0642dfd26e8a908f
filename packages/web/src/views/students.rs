//! The student directory page.

use dioxus::prelude::*;

use api::StudentDirectory;
use store::QueryKey;
use ui::{
    use_auth, use_queries, use_student_roster, use_students, LogoutButton, ModalOverlay,
    StudentTable,
};

use crate::Route;

#[component]
pub fn Students() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let source = use_students();
    let mut queries = use_queries();
    let roster = use_student_roster();

    let mut confirm_wipe = use_signal(|| false);
    let mut wiping = use_signal(|| false);

    if !auth().loading && auth().user.is_none() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    let loading = (roster.loading)();
    let load_error = (roster.error)();
    let students = roster.students.read().clone();
    let have_students = !students.is_empty();

    let handle_wipe = move |_| {
        let source = source.clone();
        async move {
            wiping.set(true);
            match source.delete_all().await {
                Ok(_) => queries.invalidate(QueryKey::Students),
                Err(err) => tracing::error!(error = %err, "failed to delete all students"),
            }
            wiping.set(false);
            confirm_wipe.set(false);
        }
    };

    rsx! {
        div { class: "page",
            header { class: "page-header",
                h1 { "Students" }
                div { class: "page-header-actions",
                    Link { class: "btn btn-ghost", to: Route::Tasks {}, "My Tasks" }
                    LogoutButton {
                        on_logged_out: move |_| {
                            nav.push(Route::Login {});
                        },
                    }
                }
            }

            div { class: "toolbar",
                Link { class: "btn btn-primary", to: Route::StudentAdd {}, "Add Student" }
                if have_students {
                    button {
                        class: "btn btn-destructive",
                        onclick: move |_| confirm_wipe.set(true),
                        "Delete All"
                    }
                }
            }

            if loading {
                p { class: "empty-note", "Loading students..." }
            } else if let Some(message) = load_error {
                p { class: "form-error", "{message}" }
            } else {
                StudentTable {
                    students,
                    on_edit: move |student: store::Student| {
                        nav.push(Route::StudentEdit { id: student.id });
                    },
                }
            }

            if confirm_wipe() {
                ModalOverlay { on_close: move |_| confirm_wipe.set(false),
                    h2 { class: "modal-title", "Delete all students?" }
                    p { "This removes every student from the directory." }
                    div { class: "modal-actions",
                        button {
                            class: "btn btn-secondary",
                            disabled: wiping(),
                            onclick: move |_| confirm_wipe.set(false),
                            "Cancel"
                        }
                        button {
                            class: "btn btn-destructive",
                            disabled: wiping(),
                            onclick: handle_wipe,
                            if wiping() { "Deleting..." } else { "Delete All" }
                        }
                    }
                }
            }
        }
    }
}
