//! Student entity and submission subject.
//!
//! # Responsibility
//! - Own the student's submission history.
//! - Fan submission notifications out to attached observers.
//!
//! # Invariants
//! - `id` is immutable and unique within one registry.
//! - Observers are notified synchronously, in attachment order, from a
//!   snapshot taken when the pass starts.

use crate::model::assignment::Assignment;
use crate::observer::notification::{NotificationObserver, NotificationSubject, ObserverSet};
use log::debug;
use std::rc::Rc;

/// One learner known to the registry.
#[derive(Debug)]
pub struct Student {
    id: String,
    name: String,
    observers: ObserverSet,
    submitted_assignments: Vec<Assignment>,
}

impl Student {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            observers: ObserverSet::new(),
            submitted_assignments: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Shared handle to this student's observer list.
    pub fn observers(&self) -> ObserverSet {
        self.observers.clone()
    }

    /// Assignments submitted by this student, oldest first.
    pub fn submitted_assignments(&self) -> &[Assignment] {
        &self.submitted_assignments
    }

    /// Marks `assignment` submitted, records it and notifies observers.
    ///
    /// Returns the notification message that was delivered.
    pub fn submit_assignment(&mut self, assignment: &mut Assignment) -> String {
        assignment.mark_submitted();
        self.submitted_assignments.push(assignment.clone());

        let message = format!(
            "Assignment '{}' submitted by Student [{}] in class {}.",
            assignment.name(),
            self.id,
            assignment.classroom_name()
        );
        self.notify_observers(&message);
        message
    }
}

impl NotificationSubject for Student {
    fn attach(&self, observer: Rc<dyn NotificationObserver>) -> bool {
        let observer_name = observer.name().to_string();
        let added = self.observers.attach(observer);
        if added {
            debug!(
                "event=observer_attached module=student status=ok student={} observer={}",
                self.id, observer_name
            );
        }
        added
    }

    fn detach(&self, observer: &Rc<dyn NotificationObserver>) -> bool {
        self.observers.detach(observer)
    }

    fn notify_observers(&self, message: &str) {
        debug!(
            "event=submission_notify module=student status=ok student={}",
            self.id
        );
        self.observers.notify(message);
    }
}

#[cfg(test)]
mod tests {
    use super::Student;
    use crate::model::assignment::{Assignment, AssignmentKind};
    use crate::observer::notification::{NotificationObserver, NotificationSubject};
    use crate::observer::teacher::Teacher;
    use std::rc::Rc;

    #[test]
    fn submit_marks_records_and_notifies() {
        let teacher = Rc::new(Teacher::new("Admin Teacher"));
        let mut student = Student::new("S1", "Ann");
        student.attach(teacher.clone());

        let mut assignment = Assignment::new("HW1", "Math101", AssignmentKind::Mcq);
        let message = student.submit_assignment(&mut assignment);

        assert!(assignment.is_submitted());
        assert_eq!(student.submitted_assignments().len(), 1);
        assert!(student.submitted_assignments()[0].is_submitted());
        assert_eq!(
            message,
            "Assignment 'HW1' submitted by Student [S1] in class Math101."
        );
        assert_eq!(teacher.received(), vec![message]);
    }

    #[test]
    fn attach_is_idempotent_and_detach_stops_delivery() {
        let teacher = Rc::new(Teacher::new("T"));
        let handle: Rc<dyn NotificationObserver> = teacher.clone();
        let mut student = Student::new("S2", "Bo");

        assert!(student.attach(Rc::clone(&handle)));
        assert!(!student.attach(Rc::clone(&handle)));
        assert_eq!(student.observers().len(), 1);

        assert!(student.detach(&handle));
        assert!(!student.detach(&handle));

        let mut assignment = Assignment::new("Essay", "Lit", AssignmentKind::Essay);
        student.submit_assignment(&mut assignment);
        assert!(teacher.received().is_empty());
    }
}
