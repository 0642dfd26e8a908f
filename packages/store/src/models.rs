//! # Domain models shared across the workspace
//!
//! Client-side representations of the records the backend owns. Everything
//! here is `Serialize + Deserialize + PartialEq` so values can round-trip
//! through the JSON API and the query cache.
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`UserIdentity`] | The current user as derived from the session token or returned by the auth endpoints. `created_at` is an ISO-8601 string; when the identity is decoded from a token it is synthesized as "now" because the token carries no such claim. |
//! | [`Task`] | A task record from `GET /api/v1/tasks`. The backend is the source of truth; the client only ever holds an invalidatable cached copy. |
//! | [`TaskCreate`] / [`TaskUpdate`] | Request bodies for creating and partially updating a task. `TaskUpdate` skips absent fields so a toggle sends only `completed`. |
//! | [`Student`] | A student directory entry. |
//! | [`StudentDraft`] | The writable fields of a student, used for both create and update. |

use serde::{Deserialize, Serialize};

/// The authenticated user, as the client knows it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: String,
    pub email: String,
    pub created_at: String,
}

/// A task owned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: String,
}

/// Body for `POST /api/v1/tasks`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskCreate {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Partial body for `PUT /api/v1/tasks/{id}`. Absent fields are left
/// untouched by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

/// A student directory entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: u32,
}

/// Writable student fields, shared by create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentDraft {
    pub name: String,
    pub email: String,
    pub age: u32,
}
