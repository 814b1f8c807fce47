use campus_core::course::Course;
use campus_core::enrollment::{EnrollStudentDto, EnrollStudentsDto};
use campus_core::error::Result;

use super::ApiClient;

impl ApiClient {
    /// `GET /courses/{id}/enrollments`: the course with its enrolled students.
    pub async fn get_enrollments(&self, course_id: i64) -> Result<Course> {
        self.get(&["courses", &course_id.to_string(), "enrollments"])
            .await
    }

    /// `POST /courses/{id}/enroll-student`
    pub async fn enroll_student(&self, course_id: i64, data: &EnrollStudentDto) -> Result<Course> {
        self.post(&["courses", &course_id.to_string(), "enroll-student"], data)
            .await
    }

    /// `POST /courses/{id}/enroll`
    pub async fn enroll_students(&self, course_id: i64, data: &EnrollStudentsDto) -> Result<()> {
        self.post_discarding(&["courses", &course_id.to_string(), "enroll"], data)
            .await
    }

    /// `DELETE /enrollments/{id}`
    pub async fn delete_enrollment(&self, enrollment_id: i64) -> Result<()> {
        self.delete(&["enrollments", &enrollment_id.to_string()])
            .await
    }
}
