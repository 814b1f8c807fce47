use anyhow::{Context as _, Result, bail};
use campus_application::Capability;
use campus_core::assignment::{Assignment, CreateAssignmentDto, UpdateAssignmentDto};
use clap::Subcommand;

use super::Context;
use crate::output::{details, or_dash, table};

#[derive(Subcommand, Debug)]
pub enum AssignmentAction {
    /// List assignments, optionally for one course
    List {
        #[arg(long)]
        course_id: Option<i64>,
    },
    /// Show one assignment
    Show { id: i64 },
    /// Create an assignment
    Create {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        /// ISO-8601 date, e.g. 2024-10-01
        #[arg(long)]
        due_date: String,
        #[arg(long)]
        course_id: i64,
        /// Defaults to the logged-in user
        #[arg(long)]
        creator_id: Option<i64>,
    },
    /// Update fields of an assignment
    Update {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        due_date: Option<String>,
    },
    /// Mark an assignment as completed
    Complete { id: i64 },
    /// Mark an assignment as open again
    Reopen { id: i64 },
    /// Delete an assignment
    Delete { id: i64 },
}

pub async fn run(ctx: &Context, action: AssignmentAction) -> Result<()> {
    let api = &ctx.app.api;
    match action {
        AssignmentAction::List { course_id } => {
            let assignments = api.get_assignments(course_id).await?;
            ctx.output.show(&assignments, |a| {
                table(&["ID", "TITLE", "DUE", "COURSE", "STATUS"], &assignment_rows(a))
            })
        }
        AssignmentAction::Show { id } => {
            let assignment = api.get_assignment(id).await?;
            ctx.output.show(&assignment, render_assignment)
        }
        AssignmentAction::Create {
            title,
            description,
            due_date,
            course_id,
            creator_id,
        } => {
            let viewer = ctx.require(Capability::ManageCoursework)?;
            let creator_id = match creator_id {
                Some(id) => id,
                None => viewer
                    .id
                    .parse()
                    .with_context(|| format!("User id '{}' is not numeric; pass --creator-id", viewer.id))?,
            };
            let assignment = api
                .create_assignment(&CreateAssignmentDto {
                    title,
                    description,
                    due_date,
                    course_id,
                    creator_id,
                })
                .await?;
            ctx.output
                .show(&assignment, |a| format!("Created assignment {} ({})", a.id, a.title))
        }
        AssignmentAction::Update {
            id,
            title,
            description,
            due_date,
        } => {
            ctx.require(Capability::ManageCoursework)?;
            let changes = UpdateAssignmentDto {
                title,
                description,
                due_date,
                completed: None,
            };
            if changes.title.is_none() && changes.description.is_none() && changes.due_date.is_none() {
                bail!("Nothing to update; pass at least one of --title, --description, --due-date");
            }
            let assignment = api.update_assignment(id, &changes).await?;
            ctx.output.show(&assignment, |a| format!("Updated assignment {}", a.id))
        }
        AssignmentAction::Complete { id } => set_status(ctx, id, true).await,
        AssignmentAction::Reopen { id } => set_status(ctx, id, false).await,
        AssignmentAction::Delete { id } => {
            ctx.require(Capability::ManageCoursework)?;
            api.delete_assignment(id).await?;
            ctx.output.done(&format!("Deleted assignment {id}"))
        }
    }
}

async fn set_status(ctx: &Context, id: i64, completed: bool) -> Result<()> {
    ctx.require(Capability::ManageCoursework)?;
    let assignment = ctx.app.api.update_assignment_status(id, completed).await?;
    ctx.output.show(&assignment, |a| {
        format!("Assignment {} is now {}", a.id, status_label(a))
    })
}

fn status_label(assignment: &Assignment) -> &'static str {
    if assignment.completed { "completed" } else { "open" }
}

fn assignment_rows(assignments: &[Assignment]) -> Vec<Vec<String>> {
    assignments
        .iter()
        .map(|a| {
            vec![
                a.id.to_string(),
                a.title.clone(),
                a.due_date.clone(),
                a.course_id.to_string(),
                status_label(a).to_string(),
            ]
        })
        .collect()
}

fn render_assignment(assignment: &Assignment) -> String {
    details(&[
        ("id", assignment.id.to_string()),
        ("title", assignment.title.clone()),
        ("description", assignment.description.clone()),
        ("due", assignment.due_date.clone()),
        ("status", status_label(assignment).to_string()),
        (
            "course",
            assignment
                .course
                .as_ref()
                .map(|c| format!("{} ({})", c.title, c.id))
                .unwrap_or_else(|| assignment.course_id.to_string()),
        ),
        (
            "creator",
            or_dash(
                assignment
                    .creator
                    .as_ref()
                    .map(|u| u.name.clone())
                    .or_else(|| assignment.creator_id.clone()),
            ),
        ),
    ])
}
