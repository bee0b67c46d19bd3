//! # MarkBlog Infrastructure
//!
//! Concrete implementations of the ports defined in `markblog-core`.
//! Two storage backends ship here: an in-memory map for tests and
//! ephemeral sessions, and a file-per-key store for durable use.

pub mod storage;

pub use storage::{FileStorage, InMemoryStorage};
