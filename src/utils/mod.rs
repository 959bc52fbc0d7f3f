//! Shared utilities.
//!
//! - [`format`] - Number formatting for console output
//! - [`progress`] - Progress bar wrapper around indicatif
//! - [`reader`] - Input reader with transparent decompression

pub mod format;
pub mod progress;
pub mod reader;
