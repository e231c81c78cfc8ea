//! Data models for the records engine

pub mod course;
pub mod enrollment;
pub mod grade;
pub mod student;

pub use course::{Course, CourseBuilder};
pub use enrollment::Enrollment;
pub use grade::Grade;
pub use student::Student;
