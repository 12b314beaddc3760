//! Assignment domain model.
//!
//! # Responsibility
//! - Define the record for one scheduled task instance in a classroom.
//! - Keep submission state transitions one-way.
//!
//! # Invariants
//! - `name`, `classroom_name` and `kind` never change after construction.
//! - `submitted` moves from `false` to `true` at most once and never back.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const VALID_KIND_TOKENS: &[&str] = &["MCQ", "ESSAY", "PRACTICAL"];

/// Closed set of assignment categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentKind {
    /// Multiple choice quiz.
    Mcq,
    /// Written essay.
    Essay,
    /// Hands-on practical project.
    Practical,
}

impl AssignmentKind {
    /// Canonical upper-case token accepted by [`AssignmentKind::from_str`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mcq => "MCQ",
            Self::Essay => "ESSAY",
            Self::Practical => "PRACTICAL",
        }
    }

    /// Human-readable category label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Mcq => "Multiple Choice Quiz",
            Self::Essay => "Essay Submission",
            Self::Practical => "Practical Project",
        }
    }

    /// Returns the accepted kind tokens in display order.
    pub fn valid_tokens() -> &'static [&'static str] {
        VALID_KIND_TOKENS
    }
}

impl Display for AssignmentKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssignmentKind {
    type Err = AssignmentKindError;

    /// Parses a kind token case-insensitively, ignoring surrounding whitespace.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_uppercase().as_str() {
            "MCQ" => Ok(Self::Mcq),
            "ESSAY" => Ok(Self::Essay),
            "PRACTICAL" => Ok(Self::Practical),
            _ => Err(AssignmentKindError {
                token: value.trim().to_string(),
            }),
        }
    }
}

/// Kind token outside the supported enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentKindError {
    pub token: String,
}

impl Display for AssignmentKindError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid assignment type `{}`; use one of: {}",
            self.token,
            VALID_KIND_TOKENS.join(", ")
        )
    }
}

impl Error for AssignmentKindError {}

/// One scheduled assignment and its submission status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    name: String,
    classroom_name: String,
    kind: AssignmentKind,
    submitted: bool,
}

impl Assignment {
    /// Creates a pending assignment.
    pub fn new(
        name: impl Into<String>,
        classroom_name: impl Into<String>,
        kind: AssignmentKind,
    ) -> Self {
        Self {
            name: name.into(),
            classroom_name: classroom_name.into(),
            kind,
            submitted: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn classroom_name(&self) -> &str {
        &self.classroom_name
    }

    pub fn kind(&self) -> AssignmentKind {
        self.kind
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Marks this assignment as submitted. Repeated calls are no-ops.
    pub fn mark_submitted(&mut self) {
        self.submitted = true;
    }

    /// Whether `name` refers to this assignment (Unicode case-insensitive).
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// One-line status summary.
    pub fn details(&self) -> String {
        format!(
            "{} ({}) for class {}. Status: {}.",
            self.name,
            self.kind.label(),
            self.classroom_name,
            if self.submitted {
                "Submitted"
            } else {
                "Pending"
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Assignment, AssignmentKind};

    #[test]
    fn kind_parses_case_insensitive_tokens() {
        assert_eq!("mcq".parse::<AssignmentKind>(), Ok(AssignmentKind::Mcq));
        assert_eq!(" Essay ".parse::<AssignmentKind>(), Ok(AssignmentKind::Essay));
        assert_eq!(
            "PRACTICAL".parse::<AssignmentKind>(),
            Ok(AssignmentKind::Practical)
        );
    }

    #[test]
    fn kind_rejects_unknown_token_and_lists_valid_kinds() {
        let err = "QUIZ"
            .parse::<AssignmentKind>()
            .expect_err("QUIZ is not a supported kind");
        assert_eq!(err.token, "QUIZ");
        let message = err.to_string();
        assert!(message.contains("MCQ, ESSAY, PRACTICAL"));
    }

    #[test]
    fn mark_submitted_is_one_way() {
        let mut assignment = Assignment::new("HW1", "Math101", AssignmentKind::Essay);
        assert!(!assignment.is_submitted());

        assignment.mark_submitted();
        assignment.mark_submitted();
        assert!(assignment.is_submitted());
    }

    #[test]
    fn matches_name_ignores_case() {
        let assignment = Assignment::new("Lab-2", "Physics", AssignmentKind::Practical);
        assert!(assignment.matches_name("lab-2"));
        assert!(!assignment.matches_name("lab-3"));
    }

    #[test]
    fn matches_name_folds_non_ascii_case_and_keeps_whitespace() {
        let umlaut = Assignment::new("Übung", "C", AssignmentKind::Mcq);
        assert!(umlaut.matches_name("übung"));
        assert!(umlaut.matches_name("ÜBUNG"));

        let padded = Assignment::new(" HW1", "C", AssignmentKind::Mcq);
        assert!(padded.matches_name(" HW1"));
        assert!(padded.matches_name(" hw1"));
        assert!(!padded.matches_name("HW1"));
    }
}
