//! Mukzi infrastructure: persistence and platform concerns.
//!
//! Provides the file-backed history store (atomic JSON with file
//! locking), an in-memory store for tests and embedders, configuration
//! loading, and platform path resolution. Everything here implements
//! seams defined by `mukzi-core`; the scoring pipeline never touches
//! the filesystem itself.

pub mod config_service;
pub mod dto;
pub mod json_history_repository;
pub mod memory_history_repository;
pub mod paths;
pub mod storage;

pub use json_history_repository::JsonHistoryRepository;
pub use memory_history_repository::InMemoryHistoryStore;
pub use paths::{MukziPaths, PathError};
