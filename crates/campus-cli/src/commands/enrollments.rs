use anyhow::Result;
use campus_application::Capability;
use clap::Subcommand;

use super::Context;

#[derive(Subcommand, Debug)]
pub enum EnrollmentAction {
    /// Remove an enrollment by its id
    Delete { id: i64 },
}

pub async fn run(ctx: &Context, action: EnrollmentAction) -> Result<()> {
    match action {
        EnrollmentAction::Delete { id } => {
            ctx.require(Capability::ManageCoursework)?;
            ctx.app.api.delete_enrollment(id).await?;
            ctx.output.done(&format!("Deleted enrollment {id}"))
        }
    }
}
