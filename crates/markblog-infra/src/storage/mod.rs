//! Storage backend implementations - in-memory and file-backed.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::InMemoryStorage;
