//! # UI crate — hooks, providers and shared components
//!
//! Everything here is platform-neutral Dioxus: the session provider, the
//! reactive query cache, the read-through loaders, and the widgets the
//! pages compose. Platform specifics (where the token and config live) are
//! confined to [`storage`].

mod add_task_modal;
mod auth;
mod components;
mod edit_task_modal;
mod modal_overlay;
mod queries;
mod storage;
mod student_form;
mod student_table;
mod students;
mod task_item;
mod tasks;

pub use add_task_modal::AddTaskModal;
pub use auth::{apply_auth_success, sign_out, use_api, use_auth, AuthProvider, AuthState, LogoutButton};
pub use components::{valid_email, Input, Textarea};
pub use edit_task_modal::EditTaskModal;
pub use modal_overlay::ModalOverlay;
pub use queries::{use_queries, Queries, QueryProvider};
pub use storage::{load_config, make_token_store};
pub use student_form::StudentForm;
pub use student_table::StudentTable;
pub use task_item::TaskItem;
pub use students::{use_student_roster, use_students, StudentsQuery};
pub use tasks::{use_tasks, TasksQuery};
