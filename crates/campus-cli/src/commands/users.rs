use anyhow::Result;
use campus_application::Capability;
use campus_core::user::{CreateUserDto, Role};
use clap::Subcommand;

use super::Context;
use super::students::render_student;

#[derive(Subcommand, Debug)]
pub enum UserAction {
    /// Create an account with any role
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "CAMPUS_NEW_PASSWORD", hide_env_values = true)]
        password: String,
        /// ADMIN, TEACHER or STUDENT
        #[arg(long)]
        role: Role,
    },
}

pub async fn run(ctx: &Context, action: UserAction) -> Result<()> {
    match action {
        UserAction::Create {
            name,
            email,
            password,
            role,
        } => {
            ctx.require(Capability::ManageTeachers)?;
            let user = ctx
                .app
                .api
                .create_user(&CreateUserDto {
                    email,
                    password,
                    name,
                    role,
                })
                .await?;
            ctx.output.show(&user, render_student)
        }
    }
}
