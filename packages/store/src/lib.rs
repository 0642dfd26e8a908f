pub mod cache;
pub mod config;
pub mod models;
pub mod session;
pub mod token;

pub use cache::{QueryCache, QueryKey};
pub use config::AppConfig;
pub use models::{Student, StudentDraft, Task, TaskCreate, TaskUpdate, UserIdentity};
pub use session::{decode_identity, derive_session};
pub use token::{MemoryTokenStore, TokenStore, ACCESS_TOKEN_KEY};

#[cfg(not(target_arch = "wasm32"))]
pub use token::FileTokenStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use token::WebTokenStore;
