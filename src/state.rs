//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! Pages render without any backing store, so the pool is optional and only
//! present when `DATABASE_URL` is configured.

use std::path::PathBuf;

use sqlx::PgPool;

/// Clone is required by Axum; `PgPool` is internally reference counted.
#[derive(Clone)]
pub struct AppState {
    pub pool: Option<PgPool>,
    pub public_dir: PathBuf,
}

impl AppState {
    #[must_use]
    pub fn new(pool: Option<PgPool>, public_dir: PathBuf) -> Self {
        Self { pool, public_dir }
    }
}

#[cfg(test)]
#[path = "state_helpers_test.rs"]
pub mod test_helpers;
