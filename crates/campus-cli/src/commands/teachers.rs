use anyhow::{Result, bail};
use campus_application::Capability;
use campus_core::user::UpdateUserDto;
use clap::Subcommand;

use super::Context;
use super::students::student_rows;
use crate::output::table;

#[derive(Subcommand, Debug)]
pub enum TeacherAction {
    /// List teachers
    List,
    /// Update fields of a teacher
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        password: Option<String>,
    },
}

pub async fn run(ctx: &Context, action: TeacherAction) -> Result<()> {
    let api = &ctx.app.api;
    match action {
        TeacherAction::List => {
            let teachers = api.get_teachers().await?;
            // Same columns as students.
            ctx.output
                .show(&teachers, |t| table(&["ID", "NAME", "EMAIL"], &student_rows(t)))
        }
        TeacherAction::Update {
            id,
            name,
            email,
            password,
        } => {
            ctx.require(Capability::ManageTeachers)?;
            let changes = UpdateUserDto {
                name,
                email,
                password,
                role: None,
            };
            if changes.is_empty() {
                bail!("Nothing to update; pass at least one of --name, --email, --password");
            }
            let teacher = api.update_teacher(&id, &changes).await?;
            ctx.output.show(&teacher, |t| format!("Updated teacher {}", t.id))
        }
    }
}
