//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the database pool, the identity provider behind a trait object,
//! and the parsed configuration. Every field is cheap to clone.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::AppConfig;
use crate::services::identity::IdentityProvider;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub identity: Arc<dyn IdentityProvider>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(pool: PgPool, identity: Arc<dyn IdentityProvider>, config: AppConfig) -> Self {
        Self { pool, identity, config: Arc::new(config) }
    }

    /// Whether cookies issued by this server carry the `Secure` flag.
    #[must_use]
    pub fn cookie_secure(&self) -> bool {
        self.config.cookie_secure
    }
}

#[cfg(test)]
#[path = "state_helpers_test.rs"]
pub mod test_helpers;

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
