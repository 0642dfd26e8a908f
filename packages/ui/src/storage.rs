//! Platform wiring: where the token and the config file live.

use std::sync::Arc;

use api::SharedTokenStore;
use store::AppConfig;

/// The token store for the platform we are running on.
///
/// Web builds keep the token in `localStorage`; native builds keep it in a
/// file under the user data directory. A wasm build without the `web`
/// feature (component tests) gets a non-persistent in-memory store.
pub fn make_token_store() -> SharedTokenStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Arc::new(store::WebTokenStore::new())
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        Arc::new(store::MemoryTokenStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Arc::new(store::FileTokenStore::new(data_dir()))
    }
}

/// Load the app config, falling back to defaults when the file is missing
/// or unreadable. Web builds always use the defaults baked into the bundle.
pub fn load_config() -> AppConfig {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let path = data_dir().join(AppConfig::filename());
        match std::fs::read_to_string(&path) {
            Ok(text) => AppConfig::from_toml(&text).unwrap_or_else(|err| {
                tracing::warn!(path = %path.display(), error = %err, "ignoring malformed config file");
                AppConfig::default()
            }),
            Err(_) => AppConfig::default(),
        }
    }
    #[cfg(target_arch = "wasm32")]
    {
        AppConfig::default()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn data_dir() -> std::path::PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("taskverse")
}
