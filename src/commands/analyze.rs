//! Leaked-credential dump analyzer.
//!
//! Streams the input CSV row by row into the aggregation counters, then
//! writes the summary report and prints closing statistics.
//!
//! # Usage
//!
//! ```bash
//! # Default output path (risultati_analisi.csv)
//! leak-audit combolist_export.csv
//!
//! # Explicit output; compressed dumps are decompressed transparently
//! leak-audit combolist_export.csv.gz -o report.csv
//! ```
//!
//! # Output
//!
//! A CSV report with columns `Metrica`, `Valore`, `Count`, `Simili`,
//! `Simili_Count`, `Utenti Coinvolti`, holding in order:
//!
//! - the most frequent identity indicator
//! - the top 10 identity indicators
//! - total occurrences per calendar quarter
//! - the top 5 hashes of the trailing year, each with its similar-hash
//!   cluster and the identities involved
//!
//! Useful for:
//! - Triaging which identities a dump hits hardest
//! - Spotting reuse of the same (or near-identical) credential hashes
//! - Tracking dump volume over time

use crate::analysis::aggregate::Aggregates;
use crate::analysis::report::{build_report, Report};
use crate::leak::types::{validate_headers, LeakRecord};
use crate::utils::format::format_number;
use crate::utils::progress::ProgressBar;
use crate::utils::reader::open_file;
use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use std::fs::File;

const BANNER: &str = r"
 _     _____    _    _  __     _   _   _ ____ ___ _____
| |   | ____|  / \  | |/ /    / \ | | | |  _ \_ _|_   _|
| |   |  _|   / _ \ | ' /    / _ \| | | | | | | |  | |
| |___| |___ / ___ \| . \   / ___ \ |_| | |_| | |  | |
|_____|_____/_/   \_\_|\_\ /_/   \_\___/|____/___| |_|
";

/// Output CSV header, fixed for downstream consumers.
const OUTPUT_COLUMNS: [&str; 6] = [
    "Metrica",
    "Valore",
    "Count",
    "Simili",
    "Simili_Count",
    "Utenti Coinvolti",
];

/// Runs the analysis with the wall-clock year captured once, at invocation.
pub fn run(input: &str, output: &str) -> Result<()> {
    run_with_year(input, output, Local::now().year())
}

/// Runs the analysis against an explicit "current year".
///
/// The year parameter pins the trailing-year window, making runs
/// deterministic under test.
pub fn run_with_year(input: &str, output: &str, current_year: i32) -> Result<()> {
    println!("{BANNER}");

    let aggregates = ingest(input, current_year)?;

    eprintln!("Looking for the most frequent identity indicator...");
    eprintln!("Ranking the top 10 identity indicators by frequency...");
    eprintln!("Totalling occurrences per quarter...");
    eprintln!("Identifying the top 5 hashes of the trailing year...");
    let report = build_report(&aggregates);

    write_report(output, &report)?;

    // The summary prints only once the report is safely on disk.
    eprintln!("\nAnalysis complete. Results written to '{output}'");
    eprintln!("\n=== ANALYSIS SUMMARY ===");
    eprintln!(
        "Total records analyzed: {}",
        format_number(report.stats.identity_rows)
    );
    eprintln!(
        "Unique identity indicators: {}",
        format_number(report.stats.distinct_identities)
    );
    eprintln!(
        "Unique hashes in the trailing year: {}",
        format_number(report.stats.recent_hashes)
    );
    eprintln!(
        "Quarters analyzed: {}",
        format_number(report.stats.quarters)
    );

    Ok(())
}

/// Streams the dump into the aggregation counters in a single pass.
fn ingest(input: &str, current_year: i32) -> Result<Aggregates> {
    let reader = open_file(input)?;
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .context("Failed to read CSV header row")?
        .clone();
    validate_headers(&headers)?;

    // Byte positions only line up with the on-disk size for plain files;
    // compressed inputs get a row spinner instead.
    let compressed = input.ends_with(".gz") || input.ends_with(".zst");
    let file_size = if compressed {
        None
    } else {
        std::fs::metadata(input).ok().map(|m| m.len() as usize)
    };
    let progress = if let Some(size) = file_size {
        ProgressBar::new(size, "Ingesting")
    } else {
        ProgressBar::new_spinner("Ingesting")
    };

    let mut aggregates = Aggregates::new(current_year);
    let mut rows = 0usize;
    let mut raw = csv::StringRecord::new();

    while csv_reader
        .read_record(&mut raw)
        .context("Failed to read CSV row")?
    {
        let record: LeakRecord = raw
            .deserialize(Some(&headers))
            .with_context(|| format!("Failed to decode CSV row {}", rows + 2))?;
        aggregates.observe(&record);

        rows += 1;
        if rows % 10_000 == 0 {
            if let Some(size) = file_size {
                progress.update((csv_reader.position().byte() as usize).min(size));
            } else {
                progress.update(rows);
            }
        }
    }

    if let Some(size) = file_size {
        progress.update(size);
    }
    progress.finish_with_message(&format!("Ingested {} rows", format_number(rows)));

    Ok(aggregates)
}

/// Writes the report rows under the fixed output header.
fn write_report(output: &str, report: &Report) -> Result<()> {
    if let Some(parent) = std::path::Path::new(output).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).context("Failed to create output directory")?;
        }
    }

    let file = File::create(output).context("Failed to create output file")?;
    let mut writer = csv::Writer::from_writer(file);

    writer.write_record(OUTPUT_COLUMNS)?;
    for row in &report.records {
        let count = row.count.to_string();
        let similar_count = row.similar_count.map(|c| c.to_string()).unwrap_or_default();
        writer.write_record([
            row.metric.as_str(),
            row.value.as_str(),
            count.as_str(),
            row.similar.as_deref().unwrap_or(""),
            similar_count.as_str(),
            row.involved.as_deref().unwrap_or(""),
        ])?;
    }
    writer.flush().context("Failed to write output file")?;

    Ok(())
}
