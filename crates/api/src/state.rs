//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::store::Store;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The store is owned here rather than living
/// in module-level statics, so each test can build its own isolated state.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ApiConfig,
    store: Store,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: ApiConfig, store: Store) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, store }),
        }
    }

    /// Get a reference to the API configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Get a reference to the entity store.
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.inner.store
    }
}

#[cfg(test)]
impl AppState {
    /// State wrapping the given store with a default config, for handler tests.
    #[must_use]
    pub fn for_tests(store: Store) -> Self {
        let config = ApiConfig {
            host: std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
            port: 0,
            database_url: None,
            sentry_dsn: None,
        };
        Self::new(config, store)
    }
}
