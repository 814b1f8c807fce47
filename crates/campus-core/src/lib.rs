//! Domain layer for the Campus console.
//!
//! Plain records exchanged with the remote REST API, the client-side session,
//! and the ports (`TokenStore`, `AuthFailureHook`) implemented by the
//! infrastructure layer.

pub mod assignment;
pub mod auth;
pub mod config;
pub mod course;
pub mod enrollment;
pub mod error;
pub mod serde_ext;
pub mod session;
pub mod submission;
pub mod user;

pub use error::{CampusError, Result};
