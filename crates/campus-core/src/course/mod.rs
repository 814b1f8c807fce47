//! Courses and the course filter.

pub mod model;

pub use model::{Course, CreateCourseDto, FilterCoursesDto, UpdateCourseDto};
