//! Assignment factory.
//!
//! # Responsibility
//! - Validate caller-supplied kind tokens before anything is constructed.
//! - Build pending assignments for a classroom.

use crate::model::assignment::{Assignment, AssignmentKind, AssignmentKindError};
use log::{debug, error};

/// Parses a kind token (`MCQ`, `ESSAY`, `PRACTICAL`; case-insensitive).
pub fn parse_kind(token: &str) -> Result<AssignmentKind, AssignmentKindError> {
    token.parse::<AssignmentKind>().map_err(|err| {
        error!(
            "event=parse_assignment_kind module=factory status=error token={}",
            err.token
        );
        err
    })
}

/// Creates a new, unsubmitted assignment of `kind`.
pub fn create_assignment(kind: AssignmentKind, name: &str, classroom_name: &str) -> Assignment {
    debug!(
        "event=create_assignment module=factory status=ok kind={} label={}",
        kind,
        kind.label()
    );
    Assignment::new(name, classroom_name, kind)
}

/// Parses `token` and creates the assignment in one step.
pub fn create_from_token(
    token: &str,
    name: &str,
    classroom_name: &str,
) -> Result<Assignment, AssignmentKindError> {
    let kind = parse_kind(token)?;
    Ok(create_assignment(kind, name, classroom_name))
}

#[cfg(test)]
mod tests {
    use super::{create_assignment, create_from_token};
    use crate::model::assignment::AssignmentKind;

    #[test]
    fn creates_pending_assignment_with_label() {
        let assignment = create_assignment(AssignmentKind::Practical, "Lab1", "Chem");
        assert_eq!(assignment.name(), "Lab1");
        assert_eq!(assignment.classroom_name(), "Chem");
        assert_eq!(assignment.kind().label(), "Practical Project");
        assert!(!assignment.is_submitted());
    }

    #[test]
    fn create_from_token_rejects_before_construction() {
        let err = create_from_token("quiz", "HW", "Math").expect_err("quiz is invalid");
        assert_eq!(err.token, "quiz");

        let ok = create_from_token("essay", "HW", "Math").expect("essay is valid");
        assert_eq!(ok.kind(), AssignmentKind::Essay);
    }
}
