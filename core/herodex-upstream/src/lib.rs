//! Upstream superhero data source for Herodex.
//!
//! Two upstreams are supported:
//! - a bulk JSON dataset (any URL ending in `/all.json`) that is downloaded
//!   in full and scanned for the hero
//! - the token-gated search API at `{base}/api/{token}/search/{name}`
//!
//! Either way the upstream is best-effort: any network, status or decode
//! failure is logged and reported as "not found".

mod client;
mod config;
mod error;
mod normalize;

pub use client::{HeroSource, UpstreamClient};
pub use config::{UpstreamConfig, UpstreamMode, DATASET_SUFFIX, DEFAULT_SEARCH_BASE_URL};
pub use error::{UpstreamError, UpstreamResult};
pub use normalize::{hero_from_entry, normalize_stat};
