//! Preference-based scoring and ranking of catalog products.

pub mod ranker;
pub mod reasons;
pub mod scoring;

pub use ranker::{recommend, MATCH_THRESHOLD};
