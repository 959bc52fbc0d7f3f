//! The analytical pipeline.
//!
//! Three stages, strictly forward:
//!
//! 1. [`aggregate`] - single-pass ingestion into running counters
//!    (dates parsed by [`date`])
//! 2. [`rank`] - deterministic top-N lists and quarter ordering
//! 3. [`similar`] - substring-overlap hash clustering
//!
//! [`report`] assembles the ranked and clustered output into the fixed row
//! layout of the report CSV.

pub mod aggregate;
pub mod date;
pub mod rank;
pub mod report;
pub mod similar;
