//! Users, students and teachers.

pub mod model;

pub use model::{CreateUserDto, Role, Student, Teacher, UpdateUserDto, User, UserSummary};
