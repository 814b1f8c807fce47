//! Application layer for the Campus console.
//!
//! Use cases that coordinate the domain and infrastructure layers: the
//! session store, the dashboard and role gating, plus the composition root.

pub mod bootstrap;
pub mod dashboard;
pub mod permissions;
pub mod session;

pub use bootstrap::{CampusApp, TokenPersistence, token_store_for};
pub use dashboard::{DashboardService, DashboardSummary};
pub use permissions::{Capability, require};
pub use session::{RestoreOutcome, SessionStore};
