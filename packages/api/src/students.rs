//! # Student directory — a swappable data source
//!
//! The student pages are mid-migration from fabricated in-memory data to a
//! real backend, so data access is a capability the presentation layer
//! never sees past: [`StudentDirectory`] with two interchangeable
//! implementations.
//!
//! | Implementation | Backing |
//! |----------------|---------|
//! | [`RestStudents`] | `/api/v1/students` endpoints via [`ApiClient`] |
//! | [`MockStudents`] | a seeded `Arc<Mutex<Vec<Student>>>` |
//!
//! [`StudentSource`] wraps both so the app can pick one at startup and pass
//! a single concrete type through context.

use std::future::Future;
use std::sync::{Arc, Mutex};

use store::{Student, StudentDraft};

use crate::client::ApiClient;
use crate::error::ApiError;

/// Data-access capability for the student directory.
pub trait StudentDirectory {
    fn list(&self) -> impl Future<Output = Result<Vec<Student>, ApiError>>;
    fn get(&self, id: i64) -> impl Future<Output = Result<Student, ApiError>>;
    fn create(&self, draft: &StudentDraft) -> impl Future<Output = Result<Student, ApiError>>;
    fn update(
        &self,
        id: i64,
        draft: &StudentDraft,
    ) -> impl Future<Output = Result<Student, ApiError>>;
    fn delete(&self, id: i64) -> impl Future<Output = Result<(), ApiError>>;
    fn delete_all(&self) -> impl Future<Output = Result<(), ApiError>>;
}

/// Students served by the backend.
#[derive(Clone)]
pub struct RestStudents {
    client: ApiClient,
}

impl RestStudents {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl StudentDirectory for RestStudents {
    async fn list(&self) -> Result<Vec<Student>, ApiError> {
        self.client.get_json("/api/v1/students").await
    }

    async fn get(&self, id: i64) -> Result<Student, ApiError> {
        self.client.get_json(&format!("/api/v1/students/{id}")).await
    }

    async fn create(&self, draft: &StudentDraft) -> Result<Student, ApiError> {
        self.client.post_json("/api/v1/students", draft).await
    }

    async fn update(&self, id: i64, draft: &StudentDraft) -> Result<Student, ApiError> {
        self.client
            .put_json(&format!("/api/v1/students/{id}"), draft)
            .await
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("/api/v1/students/{id}")).await
    }

    async fn delete_all(&self) -> Result<(), ApiError> {
        self.client.delete("/api/v1/students").await
    }
}

/// In-memory stand-in for the student backend.
#[derive(Clone, Default)]
pub struct MockStudents {
    rows: Arc<Mutex<Vec<Student>>>,
    next_id: Arc<Mutex<i64>>,
}

impl MockStudents {
    /// An empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// The directory pre-filled with the demo roster.
    pub fn seeded() -> Self {
        let rows = vec![
            student(1, "John Doe", "john@example.com", 20),
            student(2, "Jane Smith", "jane@example.com", 22),
            student(3, "Bob Johnson", "bob@example.com", 25),
            student(4, "Alice Williams", "alice@example.com", 23),
            student(5, "Charlie Brown", "charlie@example.com", 21),
        ];
        Self {
            rows: Arc::new(Mutex::new(rows)),
            next_id: Arc::new(Mutex::new(6)),
        }
    }

    fn not_found(id: i64) -> ApiError {
        ApiError::NotFound(format!("Student {id} not found"))
    }
}

fn student(id: i64, name: &str, email: &str, age: u32) -> Student {
    Student {
        id,
        name: name.to_string(),
        email: email.to_string(),
        age,
    }
}

impl StudentDirectory for MockStudents {
    async fn list(&self) -> Result<Vec<Student>, ApiError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn get(&self, id: i64) -> Result<Student, ApiError> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    async fn create(&self, draft: &StudentDraft) -> Result<Student, ApiError> {
        let id = {
            let mut next = self.next_id.lock().unwrap();
            *next += 1;
            *next - 1
        };
        let row = Student {
            id,
            name: draft.name.clone(),
            email: draft.email.clone(),
            age: draft.age,
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn update(&self, id: i64, draft: &StudentDraft) -> Result<Student, ApiError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        row.name = draft.name.clone();
        row.email = draft.email.clone();
        row.age = draft.age;
        Ok(row.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|s| s.id != id);
        if rows.len() == before {
            Err(Self::not_found(id))
        } else {
            Ok(())
        }
    }

    async fn delete_all(&self) -> Result<(), ApiError> {
        self.rows.lock().unwrap().clear();
        Ok(())
    }
}

/// The data source the app actually wires up.
#[derive(Clone)]
pub enum StudentSource {
    Rest(RestStudents),
    Mock(MockStudents),
}

impl StudentSource {
    pub fn rest(client: ApiClient) -> Self {
        StudentSource::Rest(RestStudents::new(client))
    }

    pub fn mock() -> Self {
        StudentSource::Mock(MockStudents::seeded())
    }
}

impl StudentDirectory for StudentSource {
    async fn list(&self) -> Result<Vec<Student>, ApiError> {
        match self {
            StudentSource::Rest(rest) => rest.list().await,
            StudentSource::Mock(mock) => mock.list().await,
        }
    }

    async fn get(&self, id: i64) -> Result<Student, ApiError> {
        match self {
            StudentSource::Rest(rest) => rest.get(id).await,
            StudentSource::Mock(mock) => mock.get(id).await,
        }
    }

    async fn create(&self, draft: &StudentDraft) -> Result<Student, ApiError> {
        match self {
            StudentSource::Rest(rest) => rest.create(draft).await,
            StudentSource::Mock(mock) => mock.create(draft).await,
        }
    }

    async fn update(&self, id: i64, draft: &StudentDraft) -> Result<Student, ApiError> {
        match self {
            StudentSource::Rest(rest) => rest.update(id, draft).await,
            StudentSource::Mock(mock) => mock.update(id, draft).await,
        }
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        match self {
            StudentSource::Rest(rest) => rest.delete(id).await,
            StudentSource::Mock(mock) => mock.delete(id).await,
        }
    }

    async fn delete_all(&self) -> Result<(), ApiError> {
        match self {
            StudentSource::Rest(rest) => rest.delete_all().await,
            StudentSource::Mock(mock) => mock.delete_all().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_roster() {
        let mock = MockStudents::seeded();
        let students = mock.list().await.unwrap();
        assert_eq!(students.len(), 5);
        assert_eq!(students[0].name, "John Doe");
    }

    #[tokio::test]
    async fn test_create_assigns_fresh_ids() {
        let mock = MockStudents::seeded();
        let draft = StudentDraft {
            name: "New Student".to_string(),
            email: "new@example.com".to_string(),
            age: 19,
        };

        let created = mock.create(&draft).await.unwrap();
        assert_eq!(created.id, 6);
        let again = mock.create(&draft).await.unwrap();
        assert_eq!(again.id, 7);
        assert_eq!(mock.list().await.unwrap().len(), 7);
    }

    #[tokio::test]
    async fn test_update_and_get() {
        let mock = MockStudents::seeded();
        let draft = StudentDraft {
            name: "Jane Renamed".to_string(),
            email: "jane@example.com".to_string(),
            age: 23,
        };

        let updated = mock.update(2, &draft).await.unwrap();
        assert_eq!(updated.name, "Jane Renamed");
        assert_eq!(mock.get(2).await.unwrap().age, 23);

        assert!(matches!(
            mock.update(999, &draft).await,
            Err(ApiError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_and_delete_all() {
        let mock = MockStudents::seeded();

        mock.delete(3).await.unwrap();
        assert_eq!(mock.list().await.unwrap().len(), 4);
        assert!(matches!(mock.delete(3).await, Err(ApiError::NotFound(_))));

        mock.delete_all().await.unwrap();
        assert!(mock.list().await.unwrap().is_empty());
    }
}
