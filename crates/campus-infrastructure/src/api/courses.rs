use campus_core::course::{Course, CreateCourseDto, FilterCoursesDto, UpdateCourseDto};
use campus_core::error::Result;

use super::ApiClient;

impl ApiClient {
    /// `GET /courses`, with the filter sent as query parameters.
    pub async fn get_courses(&self, filters: Option<&FilterCoursesDto>) -> Result<Vec<Course>> {
        match filters.filter(|f| !f.is_empty()) {
            Some(filters) => self.get_with_query(&["courses"], filters).await,
            None => self.get(&["courses"]).await,
        }
    }

    /// `GET /courses/{id}`
    pub async fn get_course(&self, id: i64) -> Result<Course> {
        self.get(&["courses", &id.to_string()]).await
    }

    /// `POST /courses`
    pub async fn create_course(&self, data: &CreateCourseDto) -> Result<Course> {
        self.post(&["courses"], data).await
    }

    /// `PATCH /courses/{id}`
    pub async fn update_course(&self, id: i64, data: &UpdateCourseDto) -> Result<Course> {
        self.patch(&["courses", &id.to_string()], data).await
    }

    /// `DELETE /courses/{id}`
    pub async fn delete_course(&self, id: i64) -> Result<()> {
        self.delete(&["courses", &id.to_string()]).await
    }
}
