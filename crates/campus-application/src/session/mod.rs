//! Session use cases: login, registration, logout and startup restore.

mod store;

pub use store::{RestoreOutcome, SessionStore};
