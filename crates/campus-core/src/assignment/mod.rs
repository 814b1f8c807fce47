//! Assignments attached to courses.

pub mod model;

pub use model::{Assignment, AssignmentStatusDto, CreateAssignmentDto, UpdateAssignmentDto};
