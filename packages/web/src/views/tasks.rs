//! The task list page.

use dioxus::prelude::*;

use store::Task;
use ui::{use_auth, use_tasks, AddTaskModal, EditTaskModal, LogoutButton, TaskItem};

use crate::Route;

#[derive(Clone, Copy, PartialEq)]
enum Filter {
    All,
    Active,
    Completed,
}

impl Filter {
    fn keeps(self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !task.completed,
            Filter::Completed => task.completed,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }
}

#[component]
pub fn Tasks() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let query = use_tasks();

    let mut filter = use_signal(|| Filter::All);
    let mut show_add = use_signal(|| false);
    let mut editing = use_signal(|| None::<Task>);

    // Not logged in: this page is for authenticated users only.
    if !auth().loading && auth().user.is_none() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    let loading = (query.loading)();
    let load_error = (query.error)();
    let (visible, tabs) = {
        let tasks = query.tasks.read();
        let active = tasks.iter().filter(|t| !t.completed).count();
        let visible: Vec<Task> = tasks
            .iter()
            .filter(|t| filter().keeps(t))
            .cloned()
            .collect();
        let tabs = [
            (Filter::All, tasks.len()),
            (Filter::Active, active),
            (Filter::Completed, tasks.len() - active),
        ];
        (visible, tabs)
    };

    let email = auth().user.map(|user| user.email).unwrap_or_default();

    rsx! {
        div { class: "page",
            header { class: "page-header",
                h1 { "My Tasks" }
                div { class: "page-header-actions",
                    span { class: "welcome", "{email}" }
                    Link { class: "btn btn-ghost", to: Route::Students {}, "Students" }
                    LogoutButton {
                        on_logged_out: move |_| {
                            nav.push(Route::Login {});
                        },
                    }
                }
            }

            div { class: "toolbar",
                div { class: "filter-tabs",
                    for (option, count) in tabs {
                        button {
                            class: if filter() == option { "tab tab-active" } else { "tab" },
                            onclick: move |_| filter.set(option),
                            {format!("{} ({count})", option.label())}
                        }
                    }
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| show_add.set(true),
                    "Add Task"
                }
            }

            if loading {
                p { class: "empty-note", "Loading tasks..." }
            } else if let Some(message) = load_error {
                p { class: "form-error", "{message}" }
            } else if visible.is_empty() {
                p { class: "empty-note", "Nothing here. Add a task to get started." }
            } else {
                div { class: "task-list",
                    for task in visible {
                        TaskItem {
                            key: "{task.id}",
                            task: task.clone(),
                            on_edit: move |task| editing.set(Some(task)),
                        }
                    }
                }
            }

            if show_add() {
                AddTaskModal { on_close: move |_| show_add.set(false) }
            }
            if let Some(task) = editing() {
                EditTaskModal {
                    task,
                    on_close: move |_| editing.set(None),
                }
            }
        }
    }
}
