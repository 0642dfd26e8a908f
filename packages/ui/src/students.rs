//! Student directory context and read-through loader.

use dioxus::prelude::*;

use api::{StudentDirectory, StudentSource};
use store::{QueryKey, Student};

use crate::queries::use_queries;

/// The [`StudentSource`] wired up at the app root.
pub fn use_students() -> StudentSource {
    use_context()
}

/// Signals produced by [`use_student_roster`].
#[derive(Clone, Copy)]
pub struct StudentsQuery {
    pub students: Signal<Vec<Student>>,
    pub loading: Signal<bool>,
    pub error: Signal<Option<String>>,
}

/// Cached read-through of the student roster, refetched whenever the
/// `Students` key is invalidated.
pub fn use_student_roster() -> StudentsQuery {
    let queries = use_queries();
    let source = use_students();

    let mut students = use_signal(Vec::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| None);

    let _loader = use_resource(move || {
        let source = source.clone();
        async move {
            let _version = queries.version(QueryKey::Students);
            if let Some(cached) = queries.get::<Vec<Student>>(QueryKey::Students) {
                students.set(cached);
                loading.set(false);
                error.set(None);
                return;
            }
            loading.set(true);
            match source.list().await {
                Ok(roster) => {
                    queries.put(QueryKey::Students, &roster);
                    students.set(roster);
                    error.set(None);
                }
                Err(err) => {
                    tracing::error!(error = %err, "failed to load students");
                    error.set(Some(err.to_string()));
                }
            }
            loading.set(false);
        }
    });

    StudentsQuery {
        students,
        loading,
        error,
    }
}
