//! Submission notification contracts.
//!
//! Observers are shared `Rc` handles: one teacher instance may watch many
//! students, and identity (not equality) decides whether an observer is
//! already attached.

pub mod notification;
pub mod teacher;
