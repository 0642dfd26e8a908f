//! # API crate — the REST client shared by every frontend
//!
//! The backend is an external collaborator reached over `/api/v1`; this crate
//! owns everything about talking to it. All requests are JSON, and every
//! authenticated request carries the stored bearer token.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`] — configured `reqwest` client, base URL, bearer header, JSON helpers |
//! | [`error`] | [`ApiError`] — typed mapping of backend error payloads (`INVALID_CREDENTIALS`, `EMAIL_EXISTS`, …) |
//! | [`auth`] | register / login / logout against `/api/v1/auth` |
//! | [`tasks`] | task CRUD against `/api/v1/tasks`, including the negated-flag toggle |
//! | [`students`] | [`StudentDirectory`] capability with REST and in-memory mock implementations |
//!
//! ## Side-effect boundaries
//!
//! `ApiClient::register` and `ApiClient::login` persist the returned token
//! into the [`store::TokenStore`] they were constructed with; updating the
//! session cache and navigating belong to the UI layer. `ApiClient::logout`
//! only performs the network notification — the local clear happens at the
//! call site unconditionally, whatever the backend said.

pub mod auth;
pub mod client;
pub mod error;
pub mod students;
pub mod tasks;

pub use auth::{AuthResponse, Credentials};
pub use client::{ApiClient, SharedTokenStore};
pub use error::ApiError;
pub use students::{MockStudents, RestStudents, StudentDirectory, StudentSource};
pub use tasks::toggle_update;
