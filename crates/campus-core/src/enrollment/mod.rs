//! Course enrollment requests.

use serde::{Deserialize, Serialize};

/// Body of `POST /courses/{id}/enroll-student`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollStudentDto {
    pub student_id: String,
}

/// Body of `POST /courses/{id}/enroll`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollStudentsDto {
    pub student_ids: Vec<String>,
}
