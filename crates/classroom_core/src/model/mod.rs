//! Classroom domain model.
//!
//! # Responsibility
//! - Define the records the registry mutates: assignments, students,
//!   classrooms.
//! - Keep observer fan-out on the student side of a submission.
//!
//! # Invariants
//! - Students are keyed by id and referenced from classrooms by that id.
//! - A submitted assignment never reverts to pending.

pub mod assignment;
pub mod classroom;
pub mod student;
