use campus_core::error::Result;
use campus_core::submission::{CreateSubmissionDto, Submission, UpdateSubmissionDto};

use super::ApiClient;

impl ApiClient {
    /// `POST /submissions`
    pub async fn create_submission(&self, data: &CreateSubmissionDto) -> Result<Submission> {
        self.post(&["submissions"], data).await
    }

    /// `GET /submissions`
    pub async fn get_submissions(&self) -> Result<Vec<Submission>> {
        self.get(&["submissions"]).await
    }

    /// `GET /submissions/{id}`
    pub async fn get_submission(&self, id: i64) -> Result<Submission> {
        self.get(&["submissions", &id.to_string()]).await
    }

    /// `GET /submissions/assignment/{id}`
    pub async fn get_submissions_for_assignment(&self, assignment_id: i64) -> Result<Vec<Submission>> {
        self.get(&["submissions", "assignment", &assignment_id.to_string()])
            .await
    }

    /// `PATCH /submissions/{id}`
    pub async fn update_submission(&self, id: i64, data: &UpdateSubmissionDto) -> Result<Submission> {
        self.patch(&["submissions", &id.to_string()], data).await
    }

    /// `DELETE /submissions/{id}`
    pub async fn delete_submission(&self, id: i64) -> Result<()> {
        self.delete(&["submissions", &id.to_string()]).await
    }
}
