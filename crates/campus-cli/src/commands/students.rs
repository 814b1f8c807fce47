use anyhow::{Result, bail};
use campus_application::Capability;
use campus_core::user::{CreateUserDto, Role, Student, UpdateUserDto};
use clap::Subcommand;

use super::Context;
use crate::output::{details, or_dash, table};

#[derive(Subcommand, Debug)]
pub enum StudentAction {
    /// List students
    List,
    /// Show one student
    Show { id: String },
    /// Create a student account
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "CAMPUS_NEW_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Update fields of a student
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        password: Option<String>,
    },
    /// Delete a student
    Delete { id: String },
}

pub async fn run(ctx: &Context, action: StudentAction) -> Result<()> {
    let api = &ctx.app.api;
    match action {
        StudentAction::List => {
            let students = api.get_students().await?;
            ctx.output
                .show(&students, |s| table(&["ID", "NAME", "EMAIL"], &student_rows(s)))
        }
        StudentAction::Show { id } => {
            let student = api.get_student(&id).await?;
            ctx.output.show(&student, render_student)
        }
        StudentAction::Create {
            name,
            email,
            password,
        } => {
            ctx.require(Capability::ManageStudents)?;
            let student = api
                .create_student(&CreateUserDto {
                    email,
                    password,
                    name,
                    role: Role::Student,
                })
                .await?;
            ctx.output
                .show(&student, |s| format!("Created student {} ({})", s.id, s.email))
        }
        StudentAction::Update {
            id,
            name,
            email,
            password,
        } => {
            ctx.require(Capability::ManageStudents)?;
            let changes = UpdateUserDto {
                name,
                email,
                password,
                role: None,
            };
            if changes.is_empty() {
                bail!("Nothing to update; pass at least one of --name, --email, --password");
            }
            let student = api.update_student(&id, &changes).await?;
            ctx.output.show(&student, |s| format!("Updated student {}", s.id))
        }
        StudentAction::Delete { id } => {
            ctx.require(Capability::ManageStudents)?;
            api.delete_student(&id).await?;
            ctx.output.done(&format!("Deleted student {id}"))
        }
    }
}

pub(crate) fn student_rows(students: &[Student]) -> Vec<Vec<String>> {
    students
        .iter()
        .map(|s| vec![s.id.clone(), s.name.clone(), s.email.clone()])
        .collect()
}

pub(crate) fn render_student(user: &Student) -> String {
    details(&[
        ("id", user.id.clone()),
        ("name", user.name.clone()),
        ("email", user.email.clone()),
        ("role", user.role.to_string()),
        ("created", or_dash(user.created_at)),
    ])
}
