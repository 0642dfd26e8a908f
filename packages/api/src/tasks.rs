//! # Task operations
//!
//! Straight CRUD against `/api/v1/tasks`. Callers invalidate the cached
//! task list after any successful mutation; there is no optimistic merge,
//! so the UI shows the old list until the refetch lands.

use store::{Task, TaskCreate, TaskUpdate};

use crate::client::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    /// `GET /api/v1/tasks` — all tasks for the current user.
    pub async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        self.get_json("/api/v1/tasks").await
    }

    /// `POST /api/v1/tasks`
    pub async fn create_task(&self, task: &TaskCreate) -> Result<Task, ApiError> {
        self.post_json("/api/v1/tasks", task).await
    }

    /// `PUT /api/v1/tasks/{id}` — partial update.
    pub async fn update_task(&self, id: &str, update: &TaskUpdate) -> Result<Task, ApiError> {
        self.put_json(&format!("/api/v1/tasks/{id}"), update).await
    }

    /// `DELETE /api/v1/tasks/{id}`
    pub async fn delete_task(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/api/v1/tasks/{id}")).await
    }

    /// Flip a task's completed flag.
    pub async fn toggle_task(&self, task: &Task) -> Result<Task, ApiError> {
        self.update_task(&task.id, &toggle_update(task)).await
    }
}

/// The update a toggle sends: the pure negation of the current `completed`
/// flag and nothing else.
///
/// This is read-then-negate-then-write, not a server-side atomic flip; two
/// in-flight toggles for the same task can re-apply a stale base value and
/// the last write wins on the next refetch.
pub fn toggle_update(task: &Task) -> TaskUpdate {
    TaskUpdate {
        completed: Some(!task.completed),
        ..TaskUpdate::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(completed: bool) -> Task {
        Task {
            id: "t1".to_string(),
            title: "Water the plants".to_string(),
            description: Some("the ones on the balcony".to_string()),
            completed,
            created_at: "2024-03-01T09:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_toggle_negates_completed() {
        assert_eq!(toggle_update(&task(false)).completed, Some(true));
        assert_eq!(toggle_update(&task(true)).completed, Some(false));
    }

    #[test]
    fn test_toggle_touches_nothing_else() {
        let update = toggle_update(&task(false));
        assert!(update.title.is_none());
        assert!(update.description.is_none());

        // Wire shape: only the completed field is sent
        let body = serde_json::to_value(&update).unwrap();
        assert_eq!(body, serde_json::json!({ "completed": true }));
    }
}
