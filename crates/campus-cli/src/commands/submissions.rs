use anyhow::{Result, bail};
use campus_application::Capability;
use campus_core::submission::{CreateSubmissionDto, Submission, UpdateSubmissionDto};
use clap::Subcommand;

use super::Context;
use crate::output::{details, or_dash, table};

#[derive(Subcommand, Debug)]
pub enum SubmissionAction {
    /// List submissions, optionally for one assignment
    List {
        #[arg(long)]
        assignment_id: Option<i64>,
    },
    /// Show one submission
    Show { id: i64 },
    /// Submit work for an assignment
    Create {
        #[arg(long)]
        assignment_id: i64,
        #[arg(long)]
        student_id: i64,
        #[arg(long)]
        content: String,
    },
    /// Replace the submitted content
    Update {
        id: i64,
        #[arg(long)]
        content: String,
    },
    /// Grade a submission
    Grade {
        id: i64,
        #[arg(long)]
        grade: f64,
        #[arg(long)]
        feedback: Option<String>,
    },
    /// Delete a submission
    Delete { id: i64 },
}

pub async fn run(ctx: &Context, action: SubmissionAction) -> Result<()> {
    let api = &ctx.app.api;
    match action {
        SubmissionAction::List { assignment_id } => {
            let submissions = match assignment_id {
                Some(id) => api.get_submissions_for_assignment(id).await?,
                None => api.get_submissions().await?,
            };
            ctx.output.show(&submissions, |s| {
                table(&["ID", "ASSIGNMENT", "STUDENT", "GRADE"], &submission_rows(s))
            })
        }
        SubmissionAction::Show { id } => {
            let submission = api.get_submission(id).await?;
            ctx.output.show(&submission, render_submission)
        }
        SubmissionAction::Create {
            assignment_id,
            student_id,
            content,
        } => {
            let submission = api
                .create_submission(&CreateSubmissionDto {
                    assignment_id,
                    student_id,
                    content,
                })
                .await?;
            ctx.output
                .show(&submission, |s| format!("Created submission {}", s.id))
        }
        SubmissionAction::Update { id, content } => {
            let changes = UpdateSubmissionDto {
                content: Some(content),
                ..Default::default()
            };
            let submission = api.update_submission(id, &changes).await?;
            ctx.output.show(&submission, |s| format!("Updated submission {}", s.id))
        }
        SubmissionAction::Grade { id, grade, feedback } => {
            ctx.require(Capability::ManageCoursework)?;
            if !grade.is_finite() || grade < 0.0 {
                bail!("Grade must be a non-negative number, got {grade}");
            }
            let changes = UpdateSubmissionDto {
                grade: Some(grade),
                feedback,
                ..Default::default()
            };
            let submission = api.update_submission(id, &changes).await?;
            ctx.output.show(&submission, |s| {
                format!("Graded submission {}: {}", s.id, or_dash(s.grade))
            })
        }
        SubmissionAction::Delete { id } => {
            api.delete_submission(id).await?;
            ctx.output.done(&format!("Deleted submission {id}"))
        }
    }
}

fn submission_rows(submissions: &[Submission]) -> Vec<Vec<String>> {
    submissions
        .iter()
        .map(|s| {
            vec![
                s.id.to_string(),
                s.assignment_id.to_string(),
                s.student_id.to_string(),
                or_dash(s.grade),
            ]
        })
        .collect()
}

fn render_submission(submission: &Submission) -> String {
    details(&[
        ("id", submission.id.to_string()),
        ("assignment", submission.assignment_id.to_string()),
        (
            "student",
            submission
                .student
                .as_ref()
                .map(|s| s.name.clone())
                .unwrap_or_else(|| submission.student_id.to_string()),
        ),
        ("content", submission.content.clone()),
        ("grade", or_dash(submission.grade)),
        ("feedback", or_dash(submission.feedback.as_ref())),
        ("submitted", or_dash(submission.created_at)),
    ])
}
