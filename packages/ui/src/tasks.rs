//! Read-through loader for the task list.

use dioxus::prelude::*;

use store::{QueryKey, Task};

use crate::auth::use_api;
use crate::queries::use_queries;

/// Signals produced by [`use_tasks`].
#[derive(Clone, Copy)]
pub struct TasksQuery {
    pub tasks: Signal<Vec<Task>>,
    pub loading: Signal<bool>,
    pub error: Signal<Option<String>>,
}

/// Cached read-through of the task list.
///
/// Serves the cached list when one exists and only hits the backend on a
/// miss. The loader reads the `Tasks` version counter, so any
/// `invalidate(QueryKey::Tasks)` after a mutation reruns it and the fresh
/// list lands in `tasks`.
pub fn use_tasks() -> TasksQuery {
    let queries = use_queries();
    let api = use_api();

    let mut tasks = use_signal(Vec::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| None);

    let _loader = use_resource(move || {
        let api = api.clone();
        async move {
            let _version = queries.version(QueryKey::Tasks);
            if let Some(cached) = queries.get::<Vec<Task>>(QueryKey::Tasks) {
                tasks.set(cached);
                loading.set(false);
                error.set(None);
                return;
            }
            loading.set(true);
            match api.list_tasks().await {
                Ok(list) => {
                    queries.put(QueryKey::Tasks, &list);
                    tasks.set(list);
                    error.set(None);
                }
                Err(err) => {
                    tracing::error!(error = %err, "failed to load tasks");
                    error.set(Some(err.to_string()));
                }
            }
            loading.set(false);
        }
    });

    TasksQuery {
        tasks,
        loading,
        error,
    }
}
