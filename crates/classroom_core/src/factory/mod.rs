//! Construction helpers for domain records.

pub mod assignment_factory;
