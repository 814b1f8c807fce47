//! Student submissions for assignments.

pub mod model;

pub use model::{CreateSubmissionDto, Submission, UpdateSubmissionDto};
