//! # MarkBlog Core
//!
//! The domain layer of the MarkBlog story store.
//! Post entities, derived fields, markdown rendering, search, and the
//! storage port - pure business logic with zero infrastructure dependencies.

pub mod derive;
pub mod domain;
pub mod error;
pub mod ports;
pub mod render;
pub mod search;
pub mod store;

pub use domain::{Post, PostDraft};
pub use error::StoreError;
pub use store::PostStore;
