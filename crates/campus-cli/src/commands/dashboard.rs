use anyhow::Result;
use campus_application::DashboardSummary;

use super::Context;
use super::courses::course_rows;
use crate::output::{details, table};

pub async fn show(ctx: &Context) -> Result<()> {
    let summary = ctx.app.dashboard.load().await?;
    ctx.output.show(&summary, render)
}

fn render(summary: &DashboardSummary) -> String {
    let counts = details(&[
        ("courses", summary.course_count.to_string()),
        ("students", summary.student_count.to_string()),
        (
            "assignments",
            format!(
                "{} ({} open)",
                summary.assignment_count, summary.open_assignment_count
            ),
        ),
    ]);
    format!(
        "{counts}\n\nRecent courses\n{}",
        table(&["ID", "TITLE", "TEACHER"], &course_rows(&summary.recent_courses))
    )
}
