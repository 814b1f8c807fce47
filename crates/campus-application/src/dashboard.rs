//! Dashboard overview: platform-wide counts and the newest courses.

use campus_core::course::Course;
use campus_core::error::Result;
use campus_infrastructure::ApiClient;
use serde::Serialize;

const RECENT_COURSES: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub course_count: usize,
    pub student_count: usize,
    pub assignment_count: usize,
    pub open_assignment_count: usize,
    pub recent_courses: Vec<Course>,
}

pub struct DashboardService {
    api: ApiClient,
}

impl DashboardService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Loads courses, students and assignments concurrently.
    ///
    /// Fails as a whole if any of the three calls fails.
    pub async fn load(&self) -> Result<DashboardSummary> {
        let (courses, students, assignments) = tokio::try_join!(
            self.api.get_courses(None),
            self.api.get_students(),
            self.api.get_assignments(None),
        )?;

        let open_assignment_count = assignments.iter().filter(|a| !a.completed).count();

        Ok(DashboardSummary {
            course_count: courses.len(),
            student_count: students.len(),
            assignment_count: assignments.len(),
            open_assignment_count,
            recent_courses: recent_courses(courses, RECENT_COURSES),
        })
    }
}

/// Newest first by creation time; courses without a timestamp keep API order
/// after the dated ones.
fn recent_courses(mut courses: Vec<Course>, limit: usize) -> Vec<Course> {
    courses.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    courses.truncate(limit);
    courses
}
