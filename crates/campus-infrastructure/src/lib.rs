//! Infrastructure layer for the Campus console.
//!
//! Concrete adapters for the ports defined in `campus-core`: the reqwest
//! based [`ApiClient`], token stores, path resolution and configuration.

pub mod api;
pub mod config_service;
pub mod paths;
pub mod storage;

pub use crate::api::{ApiClient, AuthInterceptor};
pub use crate::config_service::ConfigService;
pub use crate::paths::CampusPaths;
pub use crate::storage::{FileTokenStore, MemoryTokenStore};
