pub mod assignments;
pub mod auth;
pub mod courses;
pub mod dashboard;
pub mod enrollments;
pub mod students;
pub mod submissions;
pub mod teachers;
pub mod users;

use anyhow::Result;
use campus_application::{CampusApp, Capability};
use campus_core::user::UserSummary;

use crate::output::Output;

/// State shared by every subcommand.
pub struct Context {
    pub app: CampusApp,
    pub output: Output,
}

impl Context {
    /// Fails unless the logged-in viewer holds `capability`.
    pub fn require(&self, capability: Capability) -> Result<UserSummary> {
        Ok(campus_application::require(self.app.session.context(), capability)?)
    }
}
