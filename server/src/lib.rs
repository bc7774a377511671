//! HTTP API for Herodex.
//!
//! A single `/hero/` endpoint:
//! - `POST` resolves a hero by name against the upstream source and upserts
//!   it into the local store
//! - `GET` lists stored heroes, optionally filtered by name and stats
//!
//! Errors are returned as `{"error": "..."}` with a 4xx status.

mod config;
mod error;
mod handler;

use std::sync::Arc;

use axum::{routing::any, Router};
use herodex_db::HeroStore;
use herodex_upstream::HeroSource;

pub use config::ServerConfig;
pub use error::ApiError;
pub use handler::{HeroCommand, HeroList};

/// Shared state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<HeroStore>,
    pub source: Arc<dyn HeroSource>,
}

impl AppState {
    pub fn new(store: Arc<HeroStore>, source: Arc<dyn HeroSource>) -> Self {
        Self { store, source }
    }
}

/// Build the HTTP API router with the given state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/hero/", any(handler::hero))
        .route("/hero", any(handler::hero))
        .with_state(state)
}
