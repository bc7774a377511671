//! SQLite storage for Herodex.
//!
//! Heroes live in a single flat `heroes` table keyed by a unique `name`.
//! The store owns one connection behind a mutex; callers on an async
//! runtime should hop onto a blocking thread before calling in.

mod error;
mod hero_store;

pub use error::{StoreError, StoreResult};
pub use hero_store::HeroStore;
