//! Classroom aggregate.
//!
//! # Invariants
//! - A student id appears at most once in `enrolled_students`.
//! - Assignments are only appended; list position decides submission
//!   matching order.

use crate::model::assignment::Assignment;
use log::{debug, info};

/// One named class with its enrollments and scheduled assignments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classroom {
    name: String,
    enrolled_students: Vec<String>,
    assignments: Vec<Assignment>,
}

impl Classroom {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        debug!("event=classroom_created module=classroom status=ok name={name}");
        Self {
            name,
            enrolled_students: Vec::new(),
            assignments: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Enrolled student ids in enrollment order.
    pub fn enrolled_students(&self) -> &[String] {
        &self.enrolled_students
    }

    /// Scheduled assignments in scheduling order.
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn is_enrolled(&self, student_id: &str) -> bool {
        self.enrolled_students.iter().any(|id| id == student_id)
    }

    /// Enrolls `student_id`. Returns `false` when it was already enrolled.
    pub fn enroll(&mut self, student_id: &str) -> bool {
        if self.is_enrolled(student_id) {
            info!(
                "event=enroll module=classroom status=noop classroom={} student={}",
                self.name, student_id
            );
            return false;
        }
        self.enrolled_students.push(student_id.to_string());
        info!(
            "event=enroll module=classroom status=ok classroom={} student={}",
            self.name, student_id
        );
        true
    }

    pub fn schedule(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// First pending assignment named `name` (case-insensitive), in list order.
    pub fn find_pending_mut(&mut self, name: &str) -> Option<&mut Assignment> {
        self.assignments
            .iter_mut()
            .find(|assignment| assignment.matches_name(name) && !assignment.is_submitted())
    }
}
