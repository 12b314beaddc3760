//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate lookups and mutations into use-case level APIs.
//! - Keep the CLI decoupled from model internals.

pub mod classroom_manager;
