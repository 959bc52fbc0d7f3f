//! Input data structures for leaked-credential dumps.

pub mod types;
