//! Command implementations.
//!
//! - [`analyze`] - Summarize a leaked-credential CSV dump

pub mod analyze;
