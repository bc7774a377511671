//! Core type definitions for Herodex.
//!
//! This crate defines the plain data shared by every other crate:
//! - `Hero` records as persisted and served over HTTP
//! - `HeroStats` as resolved from the upstream source
//! - Stat filters (`Comparison`, `StatFilter`, `HeroQuery`) and their parser
//!
//! Nothing here performs I/O.

mod filter;
mod hero;

pub use filter::{parse_filter, Comparison, FilterError, HeroQuery, StatFilter};
pub use hero::{Hero, HeroStats, Stat};
