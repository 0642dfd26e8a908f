//! The student roster table.

use dioxus::prelude::*;

use api::StudentDirectory;
use store::{QueryKey, Student};

use crate::queries::use_queries;
use crate::students::use_students;

/// Roster table with per-row edit and delete.
///
/// Deletes go straight to the directory; a success invalidates the cached
/// roster so the page refetches, a failure leaves the row in place.
#[component]
pub fn StudentTable(students: Vec<Student>, on_edit: EventHandler<Student>) -> Element {
    let source = use_students();
    let mut queries = use_queries();
    let mut deleting_id = use_signal(|| None::<i64>);

    if students.is_empty() {
        return rsx! {
            p { class: "empty-note", "No students yet." }
        };
    }

    rsx! {
        table { class: "roster",
            thead {
                tr {
                    th { "ID" }
                    th { "Name" }
                    th { "Email" }
                    th { "Age" }
                    th { "" }
                }
            }
            tbody {
                for student in students {
                    tr { key: "{student.id}",
                        td { "{student.id}" }
                        td { "{student.name}" }
                        td { "{student.email}" }
                        td { "{student.age}" }
                        td { class: "roster-actions",
                            {
                                let edit_student = student.clone();
                                let delete_source = source.clone();
                                let id = student.id;
                                rsx! {
                                    button {
                                        class: "btn btn-ghost",
                                        onclick: move |_| on_edit.call(edit_student.clone()),
                                        "Edit"
                                    }
                                    button {
                                        class: "btn btn-destructive",
                                        disabled: deleting_id() == Some(id),
                                        onclick: move |_| {
                                            let source = delete_source.clone();
                                            async move {
                                                deleting_id.set(Some(id));
                                                match source.delete(id).await {
                                                    Ok(_) => queries.invalidate(QueryKey::Students),
                                                    Err(err) => {
                                                        tracing::error!(error = %err, "failed to delete student")
                                                    }
                                                }
                                                deleting_id.set(None);
                                            }
                                        },
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
