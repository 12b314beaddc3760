//! Classroom registry use-case service.
//!
//! # Responsibility
//! - Own every classroom and student for one process.
//! - Resolve caller-supplied names/ids, then mutate the resolved records.
//! - Attach default observers to students at creation time.
//!
//! # Invariants
//! - Classroom names and student ids are unique map keys.
//! - A student record is created at most once per id.
//! - Errors never leave partial mutations behind.

use crate::factory::assignment_factory;
use crate::model::assignment::{AssignmentKind, AssignmentKindError};
use crate::model::classroom::Classroom;
use crate::model::student::Student;
use crate::observer::notification::{NotificationObserver, NotificationSubject};
use crate::observer::teacher::Teacher;
use log::{error, info};
use serde::Serialize;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

/// Name of the observer seeded by [`ClassroomManager::new`].
pub const DEFAULT_TEACHER_NAME: &str = "Admin Teacher";

pub type ManagerResult<T> = Result<T, ManagerError>;

/// Conceptual category of a [`ManagerError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagerErrorKind {
    AlreadyExists,
    NotFound,
    InvalidAssignmentKind,
}

/// Registry operation errors. All are recoverable by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManagerError {
    ClassroomAlreadyExists(String),
    ClassroomNotFound(String),
    StudentNotFound(String),
    /// No pending assignment with that name (missing or already submitted).
    AssignmentNotFound {
        assignment: String,
        classroom: String,
    },
    InvalidAssignmentKind(AssignmentKindError),
}

impl ManagerError {
    pub fn kind(&self) -> ManagerErrorKind {
        match self {
            Self::ClassroomAlreadyExists(_) => ManagerErrorKind::AlreadyExists,
            Self::ClassroomNotFound(_)
            | Self::StudentNotFound(_)
            | Self::AssignmentNotFound { .. } => ManagerErrorKind::NotFound,
            Self::InvalidAssignmentKind(_) => ManagerErrorKind::InvalidAssignmentKind,
        }
    }
}

impl Display for ManagerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ClassroomAlreadyExists(name) => {
                write!(f, "Classroom [{name}] already exists.")
            }
            Self::ClassroomNotFound(name) => write!(f, "Classroom [{name}] not found."),
            Self::StudentNotFound(id) => write!(f, "Student [{id}] not found."),
            Self::AssignmentNotFound {
                assignment,
                classroom,
            } => write!(
                f,
                "Assignment '{assignment}' not found or already submitted in class [{classroom}]."
            ),
            Self::InvalidAssignmentKind(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ManagerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidAssignmentKind(err) => Some(err),
            _ => None,
        }
    }
}

impl From<AssignmentKindError> for ManagerError {
    fn from(value: AssignmentKindError) -> Self {
        Self::InvalidAssignmentKind(value)
    }
}

/// Result of an enrollment request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollOutcome {
    Enrolled,
    AlreadyEnrolled,
}

/// Listing row for one classroom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassroomSummary {
    pub name: String,
    pub student_count: usize,
}

/// Listing row for one enrolled student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentSummary {
    pub id: String,
    pub name: String,
}

/// In-memory registry of classrooms and students.
///
/// Construct one at startup and pass it to every caller that needs it.
pub struct ClassroomManager {
    classrooms: BTreeMap<String, Classroom>,
    students: BTreeMap<String, Student>,
    default_observers: Vec<Rc<dyn NotificationObserver>>,
}

impl Default for ClassroomManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassroomManager {
    /// Creates an empty registry seeded with the admin teacher observer.
    pub fn new() -> Self {
        let admin: Rc<dyn NotificationObserver> = Rc::new(Teacher::new(DEFAULT_TEACHER_NAME));
        Self::with_default_observers(vec![admin])
    }

    /// Creates an empty registry with caller-provided default observers.
    ///
    /// An empty list falls back to the admin teacher, so the registry always
    /// holds at least one default observer.
    pub fn with_default_observers(observers: Vec<Rc<dyn NotificationObserver>>) -> Self {
        let mut manager = Self {
            classrooms: BTreeMap::new(),
            students: BTreeMap::new(),
            default_observers: Vec::new(),
        };
        for observer in observers {
            manager.add_default_observer(observer);
        }
        if manager.default_observers.is_empty() {
            manager.add_default_observer(Rc::new(Teacher::new(DEFAULT_TEACHER_NAME)));
        }
        info!(
            "event=registry_init module=manager status=ok default_observers={}",
            manager.default_observers.len()
        );
        manager
    }

    /// Adds a default observer for students created from now on.
    pub fn add_default_observer(&mut self, observer: Rc<dyn NotificationObserver>) {
        if !self
            .default_observers
            .iter()
            .any(|existing| Rc::ptr_eq(existing, &observer))
        {
            self.default_observers.push(observer);
        }
    }

    pub fn default_observers(&self) -> &[Rc<dyn NotificationObserver>] {
        &self.default_observers
    }

    pub fn classroom(&self, name: &str) -> Option<&Classroom> {
        self.classrooms.get(name)
    }

    pub fn student(&self, id: &str) -> Option<&Student> {
        self.students.get(id)
    }

    pub fn classroom_count(&self) -> usize {
        self.classrooms.len()
    }

    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    /// Registers a new empty classroom.
    ///
    /// # Errors
    /// - `ClassroomAlreadyExists` when `name` is taken; nothing changes.
    pub fn add_classroom(&mut self, name: &str) -> ManagerResult<()> {
        if self.classrooms.contains_key(name) {
            error!("event=add_classroom module=manager status=error reason=duplicate name={name}");
            return Err(ManagerError::ClassroomAlreadyExists(name.to_string()));
        }
        self.classrooms
            .insert(name.to_string(), Classroom::new(name));
        info!("event=add_classroom module=manager status=ok name={name}");
        Ok(())
    }

    /// Enrolls a student, creating the student record on first sight.
    ///
    /// # Contract
    /// - A new student gets every default observer attached once.
    /// - An existing student is reused as-is; `student_name` is ignored.
    /// - Enrolling twice into the same classroom is a no-op.
    ///
    /// # Errors
    /// - `ClassroomNotFound` when `class_name` is unknown.
    pub fn enroll_student(
        &mut self,
        student_id: &str,
        student_name: &str,
        class_name: &str,
    ) -> ManagerResult<EnrollOutcome> {
        let classroom = self
            .classrooms
            .get_mut(class_name)
            .ok_or_else(|| ManagerError::ClassroomNotFound(class_name.to_string()))?;

        let default_observers = &self.default_observers;
        let student = self
            .students
            .entry(student_id.to_string())
            .or_insert_with(|| {
                info!(
                    "event=student_created module=manager status=ok id={student_id} name={student_name}"
                );
                let student = Student::new(student_id, student_name);
                for observer in default_observers {
                    student.attach(Rc::clone(observer));
                }
                student
            });

        if classroom.enroll(student.id()) {
            Ok(EnrollOutcome::Enrolled)
        } else {
            Ok(EnrollOutcome::AlreadyEnrolled)
        }
    }

    /// Schedules a new assignment in a classroom.
    ///
    /// # Errors
    /// - `ClassroomNotFound` when `class_name` is unknown (checked first).
    /// - `InvalidAssignmentKind` when `kind_token` is not MCQ/ESSAY/PRACTICAL.
    pub fn schedule_assignment(
        &mut self,
        class_name: &str,
        assignment_name: &str,
        kind_token: &str,
    ) -> ManagerResult<AssignmentKind> {
        let classroom = self
            .classrooms
            .get_mut(class_name)
            .ok_or_else(|| ManagerError::ClassroomNotFound(class_name.to_string()))?;

        let assignment =
            assignment_factory::create_from_token(kind_token, assignment_name, class_name)?;
        let kind = assignment.kind();
        classroom.schedule(assignment);
        info!(
            "event=schedule_assignment module=manager status=ok classroom={class_name} assignment={assignment_name} kind={kind}"
        );
        Ok(kind)
    }

    /// Submits the first pending assignment matching `assignment_name`.
    ///
    /// Returns the notification message delivered to the student's observers.
    ///
    /// # Errors
    /// - `StudentNotFound` / `ClassroomNotFound` for unknown references.
    /// - `AssignmentNotFound` when no pending assignment has that name.
    pub fn submit_assignment(
        &mut self,
        student_id: &str,
        class_name: &str,
        assignment_name: &str,
    ) -> ManagerResult<String> {
        let student = self
            .students
            .get_mut(student_id)
            .ok_or_else(|| ManagerError::StudentNotFound(student_id.to_string()))?;
        let classroom = self
            .classrooms
            .get_mut(class_name)
            .ok_or_else(|| ManagerError::ClassroomNotFound(class_name.to_string()))?;

        let Some(assignment) = classroom.find_pending_mut(assignment_name) else {
            error!(
                "event=submit_assignment module=manager status=error reason=no_pending classroom={class_name} assignment={assignment_name}"
            );
            return Err(ManagerError::AssignmentNotFound {
                assignment: assignment_name.to_string(),
                classroom: class_name.to_string(),
            });
        };

        let message = student.submit_assignment(assignment);
        info!(
            "event=submit_assignment module=manager status=ok student={student_id} classroom={class_name} assignment={assignment_name}"
        );
        Ok(message)
    }

    /// Lists classrooms in name order. An empty vec means none exist.
    pub fn list_classrooms(&self) -> Vec<ClassroomSummary> {
        self.classrooms
            .values()
            .map(|classroom| ClassroomSummary {
                name: classroom.name().to_string(),
                student_count: classroom.enrolled_students().len(),
            })
            .collect()
    }

    /// Lists students enrolled in `class_name`, in enrollment order.
    ///
    /// # Errors
    /// - `ClassroomNotFound` when `class_name` is unknown.
    pub fn list_students_in_class(&self, class_name: &str) -> ManagerResult<Vec<StudentSummary>> {
        let classroom = self
            .classrooms
            .get(class_name)
            .ok_or_else(|| ManagerError::ClassroomNotFound(class_name.to_string()))?;

        Ok(classroom
            .enrolled_students()
            .iter()
            .filter_map(|id| self.students.get(id))
            .map(|student| StudentSummary {
                id: student.id().to_string(),
                name: student.name().to_string(),
            })
            .collect())
    }
}
