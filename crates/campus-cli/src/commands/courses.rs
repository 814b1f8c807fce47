use anyhow::{Result, bail};
use campus_application::Capability;
use campus_core::course::{Course, CreateCourseDto, FilterCoursesDto, UpdateCourseDto};
use campus_core::enrollment::{EnrollStudentDto, EnrollStudentsDto};
use clap::Subcommand;

use super::Context;
use super::students::student_rows;
use crate::output::{details, or_dash, table};

#[derive(Subcommand, Debug)]
pub enum CourseAction {
    /// List courses, optionally filtered
    List {
        /// Title contains
        #[arg(long)]
        title: Option<String>,
        /// Only courses this student is enrolled in
        #[arg(long)]
        student_id: Option<String>,
        /// Only courses with an assignment whose title contains this
        #[arg(long)]
        assignment_title: Option<String>,
    },
    /// Show one course
    Show { id: i64 },
    /// Create a course
    Create {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        teacher_id: String,
    },
    /// Update fields of a course
    Update {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        teacher_id: Option<String>,
    },
    /// Delete a course
    Delete { id: i64 },
    /// List the students enrolled in a course
    Enrollments { id: i64 },
    /// Enroll one student
    Enroll {
        id: i64,
        #[arg(long)]
        student_id: String,
    },
    /// Enroll several students at once
    EnrollMany {
        id: i64,
        #[arg(long = "student-id", required = true, num_args = 1..)]
        student_ids: Vec<String>,
    },
}

pub async fn run(ctx: &Context, action: CourseAction) -> Result<()> {
    let api = &ctx.app.api;
    match action {
        CourseAction::List {
            title,
            student_id,
            assignment_title,
        } => {
            let filters = FilterCoursesDto {
                title,
                student_id,
                assignment_title,
            };
            let courses = api.get_courses(Some(&filters)).await?;
            ctx.output
                .show(&courses, |c| table(&["ID", "TITLE", "TEACHER"], &course_rows(c)))
        }
        CourseAction::Show { id } => {
            let course = api.get_course(id).await?;
            ctx.output.show(&course, render_course)
        }
        CourseAction::Create {
            title,
            description,
            teacher_id,
        } => {
            ctx.require(Capability::ManageCoursework)?;
            let course = api
                .create_course(&CreateCourseDto {
                    title,
                    description,
                    teacher_id,
                })
                .await?;
            ctx.output.show(&course, |c| format!("Created course {} ({})", c.id, c.title))
        }
        CourseAction::Update {
            id,
            title,
            description,
            teacher_id,
        } => {
            ctx.require(Capability::ManageCoursework)?;
            let changes = UpdateCourseDto {
                title,
                description,
                teacher_id,
            };
            if changes.is_empty() {
                bail!("Nothing to update; pass at least one of --title, --description, --teacher-id");
            }
            let course = api.update_course(id, &changes).await?;
            ctx.output.show(&course, |c| format!("Updated course {}", c.id))
        }
        CourseAction::Delete { id } => {
            ctx.require(Capability::ManageCoursework)?;
            api.delete_course(id).await?;
            ctx.output.done(&format!("Deleted course {id}"))
        }
        CourseAction::Enrollments { id } => {
            let course = api.get_enrollments(id).await?;
            let students = course.students.unwrap_or_default();
            ctx.output.show(&students, |s| table(&["ID", "NAME", "EMAIL"], &student_rows(s)))
        }
        CourseAction::Enroll { id, student_id } => {
            ctx.require(Capability::ManageCoursework)?;
            let course = api.enroll_student(id, &EnrollStudentDto { student_id }).await?;
            ctx.output.show(&course, |c| {
                format!("Enrolled student in course {} ({} enrolled)", c.id, or_dash(c.student_count()))
            })
        }
        CourseAction::EnrollMany { id, student_ids } => {
            ctx.require(Capability::ManageCoursework)?;
            let count = student_ids.len();
            api.enroll_students(id, &EnrollStudentsDto { student_ids }).await?;
            ctx.output.done(&format!("Enrolled {count} students in course {id}"))
        }
    }
}

pub(crate) fn course_rows(courses: &[Course]) -> Vec<Vec<String>> {
    courses
        .iter()
        .map(|c| vec![c.id.to_string(), c.title.clone(), teacher_label(c)])
        .collect()
}

fn teacher_label(course: &Course) -> String {
    course
        .teacher
        .as_ref()
        .map(|t| t.name.clone())
        .unwrap_or_else(|| course.teacher_id.clone())
}

fn render_course(course: &Course) -> String {
    details(&[
        ("id", course.id.to_string()),
        ("title", course.title.clone()),
        ("description", course.description.clone()),
        ("teacher", teacher_label(course)),
        ("students", or_dash(course.student_count())),
        ("assignments", or_dash(course.assignments.as_ref().map(Vec::len))),
        ("created", or_dash(course.created_at)),
    ])
}
