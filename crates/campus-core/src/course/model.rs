use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::assignment::Assignment;
use crate::serde_ext::string_or_number;
use crate::user::{Student, Teacher};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(deserialize_with = "string_or_number")]
    pub teacher_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher: Option<Teacher>,
    /// Present on the detail and enrollment endpoints only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub students: Option<Vec<Student>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignments: Option<Vec<Assignment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Course {
    /// Number of enrolled students, when the API included them.
    pub fn student_count(&self) -> Option<usize> {
        self.students.as_ref().map(Vec::len)
    }
}

/// Body of `POST /courses`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseDto {
    pub title: String,
    pub description: String,
    pub teacher_id: String,
}

/// Body of `PATCH /courses/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher_id: Option<String>,
}

impl UpdateCourseDto {
    /// True when no field would be sent.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.teacher_id.is_none()
    }
}

/// Query string of `GET /courses`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCoursesDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment_title: Option<String>,
}

impl FilterCoursesDto {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.student_id.is_none() && self.assignment_title.is_none()
    }
}
