//! Storage layer for the durable token slot.

mod atomic_json;
mod token_storage;

pub use atomic_json::{AtomicJsonError, AtomicJsonFile};
pub use token_storage::{FileTokenStore, MemoryTokenStore};
