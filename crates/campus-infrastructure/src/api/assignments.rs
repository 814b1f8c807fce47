use campus_core::assignment::{
    Assignment, AssignmentStatusDto, CreateAssignmentDto, UpdateAssignmentDto,
};
use campus_core::error::Result;

use super::ApiClient;

impl ApiClient {
    /// `GET /assignments`, or `GET /assignments/course/{id}` when a course is given.
    pub async fn get_assignments(&self, course_id: Option<i64>) -> Result<Vec<Assignment>> {
        match course_id {
            Some(course_id) => {
                self.get(&["assignments", "course", &course_id.to_string()])
                    .await
            }
            None => self.get(&["assignments"]).await,
        }
    }

    /// `GET /assignments/{id}`
    pub async fn get_assignment(&self, id: i64) -> Result<Assignment> {
        self.get(&["assignments", &id.to_string()]).await
    }

    /// `POST /assignments`
    pub async fn create_assignment(&self, data: &CreateAssignmentDto) -> Result<Assignment> {
        self.post(&["assignments"], data).await
    }

    /// `PATCH /assignments/{id}`
    pub async fn update_assignment(&self, id: i64, data: &UpdateAssignmentDto) -> Result<Assignment> {
        self.patch(&["assignments", &id.to_string()], data).await
    }

    /// `PATCH /assignments/{id}/status`
    pub async fn update_assignment_status(&self, id: i64, completed: bool) -> Result<Assignment> {
        self.patch(
            &["assignments", &id.to_string(), "status"],
            &AssignmentStatusDto { completed },
        )
        .await
    }

    /// `DELETE /assignments/{id}`
    pub async fn delete_assignment(&self, id: i64) -> Result<()> {
        self.delete(&["assignments", &id.to_string()]).await
    }
}
