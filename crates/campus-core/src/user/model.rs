use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CampusError;
use crate::serde_ext::string_or_number;

/// The closed set of roles known to the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Teacher,
    Student,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Teacher, Role::Student];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Teacher => "TEACHER",
            Role::Student => "STUDENT",
        }
    }

    /// Whether this role may create, edit or delete courses, assignments and
    /// enrollments, and grade submissions.
    pub fn can_manage_coursework(&self) -> bool {
        matches!(self, Role::Admin | Role::Teacher)
    }

    /// Whether this role may edit or remove student accounts.
    pub fn can_manage_students(&self) -> bool {
        matches!(self, Role::Admin | Role::Teacher)
    }

    /// Whether this role may edit teacher accounts.
    pub fn can_manage_teachers(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CampusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ADMIN" => Ok(Role::Admin),
            "TEACHER" => Ok(Role::Teacher),
            "STUDENT" => Ok(Role::Student),
            other => Err(CampusError::validation(format!(
                "unknown role '{other}' (expected ADMIN, TEACHER or STUDENT)"
            ))),
        }
    }
}

/// A user record as returned by the user collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Students share the user record shape; the role is `STUDENT`.
pub type Student = User;

/// Teachers share the user record shape; the role is `TEACHER`.
pub type Teacher = User;

/// The signed-in viewer, as returned by `GET /auth/me`.
///
/// Only used for authorization gating (e.g. "can this viewer edit this item").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}

/// Body of `POST /users` and `POST /students`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUserDto {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: Role,
}

/// Body of `PATCH /users/students/{id}` and `PATCH /users/teachers/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateUserDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl UpdateUserDto {
    /// True when no field would be sent.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none() && self.role.is_none()
    }
}
