//! Mukzi core: the deterministic recommendation pipeline.
//!
//! Turns three independent signals (current weather, a satiety level,
//! and per-weekday preferences mined from chat history) into a ranked
//! list of food categories. Everything here is synchronous, stateless
//! computation except the [`history::HistoryStore`] seam, which abstracts
//! the append-only log the preference analyzer reads.

pub mod catalog;
pub mod config;
pub mod error;
pub mod geo;
pub mod history;
pub mod preference;
pub mod recommend;
pub mod weather;

// Re-export common error type
pub use error::MukziError;
