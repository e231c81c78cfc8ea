//! In-memory registries for students and courses
//!
//! Both directories keep insertion order and match keys case-insensitively.
//! Uniqueness of keys is the caller's responsibility; lookups return the first
//! match. Listings hand out snapshots so the backing storage is never exposed
//! mutably.

use crate::core::models::{Course, Student};
use crate::info;
use std::sync::Arc;

/// Registry of students keyed by registration number
#[derive(Debug, Clone)]
pub struct StudentDirectory {
    students: Vec<Student>,
    next_id: u32,
}

impl StudentDirectory {
    /// Create an empty directory; the first student gets id 1
    #[must_use]
    pub const fn new() -> Self {
        Self {
            students: Vec::new(),
            next_id: 1,
        }
    }

    /// Register a student under the next sequential id
    ///
    /// # Returns
    /// The newly stored student
    pub fn add(
        &mut self,
        reg_no: impl Into<String>,
        full_name: impl Into<String>,
        email: impl Into<String>,
    ) -> &Student {
        let student = Student::new(self.next_id, reg_no, full_name, email);
        self.next_id += 1;
        info!("Student added: {}", student.full_name());
        self.students.push(student);
        let last = self.students.len() - 1;
        &self.students[last]
    }

    /// Find a student by registration number (case-insensitive)
    #[must_use]
    pub fn find_by_reg_no(&self, reg_no: &str) -> Option<&Student> {
        let reg_no = reg_no.trim();
        self.students
            .iter()
            .find(|s| s.reg_no().eq_ignore_ascii_case(reg_no))
    }

    /// Mutable lookup, used to enroll or grade the student
    pub fn find_by_reg_no_mut(&mut self, reg_no: &str) -> Option<&mut Student> {
        let reg_no = reg_no.trim();
        self.students
            .iter_mut()
            .find(|s| s.reg_no().eq_ignore_ascii_case(reg_no))
    }

    /// Snapshot of all students in insertion order
    #[must_use]
    pub fn all(&self) -> Vec<Student> {
        self.students.clone()
    }

    /// Read-only iterator over students, without copying
    pub fn iter(&self) -> impl Iterator<Item = &Student> {
        self.students.iter()
    }

    /// Number of registered students
    #[must_use]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Whether no students are registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

impl Default for StudentDirectory {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry of courses keyed by course code
///
/// Courses are shared with the enrollments that reference them.
#[derive(Debug, Clone, Default)]
pub struct CourseDirectory {
    courses: Vec<Arc<Course>>,
}

impl CourseDirectory {
    /// Create an empty directory
    #[must_use]
    pub const fn new() -> Self {
        Self {
            courses: Vec::new(),
        }
    }

    /// Store a course and return the shared handle
    pub fn add(&mut self, course: Course) -> Arc<Course> {
        info!("Course added: {}", course.title());
        let course = Arc::new(course);
        self.courses.push(Arc::clone(&course));
        course
    }

    /// Find a course by code (case-insensitive)
    #[must_use]
    pub fn find_by_code(&self, code: &str) -> Option<Arc<Course>> {
        self.courses.iter().find(|c| c.matches_code(code)).cloned()
    }

    /// Snapshot of all courses in insertion order
    #[must_use]
    pub fn all(&self) -> Vec<Arc<Course>> {
        self.courses.clone()
    }

    /// Number of stored courses
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the directory is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let mut students = StudentDirectory::new();
        assert_eq!(students.add("S001", "Alice", "a@example.com").id(), 1);
        assert_eq!(students.add("S002", "Bob", "b@example.com").id(), 2);
        assert_eq!(students.add("S003", "Carol", "c@example.com").id(), 3);
        assert_eq!(students.len(), 3);
    }

    #[test]
    fn test_find_student_case_insensitive() {
        let mut students = StudentDirectory::new();
        students.add("S001", "Alice", "a@example.com");

        assert_eq!(
            students.find_by_reg_no("s001").map(Student::full_name),
            Some("Alice")
        );
        assert!(students.find_by_reg_no("S999").is_none());
    }

    #[test]
    fn test_duplicate_reg_no_first_wins() {
        let mut students = StudentDirectory::new();
        students.add("S001", "First", "1@example.com");
        students.add("s001", "Second", "2@example.com");

        assert_eq!(students.find_by_reg_no("S001").map(Student::id), Some(1));
    }

    #[test]
    fn test_student_snapshot_is_detached() {
        let mut students = StudentDirectory::new();
        students.add("S001", "Alice", "a@example.com");

        let mut snapshot = students.all();
        snapshot[0].set_email("changed@example.com");
        snapshot.clear();

        assert_eq!(students.len(), 1);
        assert_eq!(
            students.find_by_reg_no("S001").map(Student::email),
            Some("a@example.com")
        );
    }

    #[test]
    fn test_find_course_case_insensitive() {
        let mut courses = CourseDirectory::new();
        courses.add(Course::builder("CS101", "Intro").credits(4).build().unwrap());

        let found = courses.find_by_code("cs101").unwrap();
        assert_eq!(found.code(), "CS101");
        assert!(courses.find_by_code("CS999").is_none());
    }

    #[test]
    fn test_course_snapshot_is_detached() {
        let mut courses = CourseDirectory::new();
        courses.add(Course::builder("CS101", "Intro").build().unwrap());

        let mut snapshot = courses.all();
        snapshot.clear();
        assert_eq!(courses.len(), 1);
        assert!(!courses.is_empty());
    }
}
