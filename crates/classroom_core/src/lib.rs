//! Core domain logic for the classroom registry.
//! This crate is the single source of truth for registry invariants.

pub mod factory;
pub mod logging;
pub mod model;
pub mod observer;
pub mod service;

pub use factory::assignment_factory::{create_assignment, parse_kind};
pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use model::assignment::{Assignment, AssignmentKind, AssignmentKindError};
pub use model::classroom::Classroom;
pub use model::student::Student;
pub use observer::notification::{NotificationObserver, NotificationSubject, ObserverSet};
pub use observer::teacher::Teacher;
pub use service::classroom_manager::{
    ClassroomManager, ClassroomSummary, EnrollOutcome, ManagerError, ManagerErrorKind,
    ManagerResult, StudentSummary, DEFAULT_TEACHER_NAME,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
