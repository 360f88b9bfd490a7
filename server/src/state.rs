//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It owns the single database pool for the lifetime of the process. No
//! handler queries it yet; it is closed by `main` after shutdown.

use sqlx::PgPool;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; `PgPool` is Arc-backed.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

impl AppState {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lazy_state_opens_no_connections() {
        let state = test_helpers::test_app_state();
        assert_eq!(state.pool.size(), 0);
        assert!(!state.pool.is_closed());
    }

    #[tokio::test]
    async fn cloned_state_shares_one_pool() {
        let state = test_helpers::test_app_state();
        let clone = state.clone();
        clone.pool.close().await;
        assert!(state.pool.is_closed());
    }
}
