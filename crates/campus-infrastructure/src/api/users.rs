use campus_core::error::Result;
use campus_core::user::{CreateUserDto, Student, Teacher, UpdateUserDto, User};

use super::ApiClient;

impl ApiClient {
    /// `POST /users`
    pub async fn create_user(&self, data: &CreateUserDto) -> Result<User> {
        self.post(&["users"], data).await
    }

    /// `GET /users/teachers`
    pub async fn get_teachers(&self) -> Result<Vec<Teacher>> {
        self.get(&["users", "teachers"]).await
    }

    /// `PATCH /users/teachers/{id}`
    pub async fn update_teacher(&self, id: &str, data: &UpdateUserDto) -> Result<Teacher> {
        self.patch(&["users", "teachers", id], data).await
    }

    /// `GET /users/students`
    pub async fn get_students(&self) -> Result<Vec<Student>> {
        self.get(&["users", "students"]).await
    }

    /// `GET /users/students/{id}`
    pub async fn get_student(&self, id: &str) -> Result<Student> {
        self.get(&["users", "students", id]).await
    }

    /// `POST /students`
    pub async fn create_student(&self, data: &CreateUserDto) -> Result<Student> {
        self.post(&["students"], data).await
    }

    /// `PATCH /users/students/{id}`
    pub async fn update_student(&self, id: &str, data: &UpdateUserDto) -> Result<Student> {
        self.patch(&["users", "students", id], data).await
    }

    /// `DELETE /users/students/{id}`
    pub async fn delete_student(&self, id: &str) -> Result<()> {
        self.delete(&["users", "students", id]).await
    }
}
