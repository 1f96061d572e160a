//! Per-weekday preference mining over the history log.

pub mod analyzer;

pub use analyzer::{MAX_AFFINITY, PreferenceMap, analyze};
