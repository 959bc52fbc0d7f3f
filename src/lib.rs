//! # Leak Audit Tools
//!
//! Command-line analyzer for leaked-credential CSV dumps.
//!
//! ## Overview
//!
//! This crate ingests a CSV export of leaked-credential records (import
//! timestamp, identity indicator, credential hash, source label) in a single
//! streaming pass and produces a summary report:
//!
//! - most frequent identity indicators (top 10)
//! - record volume per calendar quarter
//! - the most-used credential hashes in the trailing year, each enriched with
//!   "similar" hashes (4-character substring overlap) and the full set of
//!   identities associated with the resulting hash cluster
//!
//! The report is written as CSV; progress narration and a final summary go to
//! the console.
//!
//! ## Architecture
//!
//! - [`leak`] - Input row types and header validation
//! - [`analysis`] - The analytical pipeline: date parsing, aggregation,
//!   ranking, and similarity clustering
//! - [`commands`] - The `analyze` command implementation
//! - [`utils`] - Shared utilities (progress, formatting, compressed input)
//!
//! ## Example Usage
//!
//! ```bash
//! # Analyze a dump, default output risultati_analisi.csv
//! leak-audit combolist_export.csv
//!
//! # Explicit output path; compressed dumps work directly
//! leak-audit combolist_export.csv.gz -o report.csv
//! ```

pub mod analysis;
pub mod commands;
pub mod leak;
pub mod utils;
