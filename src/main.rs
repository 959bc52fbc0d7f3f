use anyhow::Result;
use clap::Parser;

use leak_audit_tools::commands;

#[derive(Parser)]
#[command(name = "leak-audit")]
#[command(about = "Summarize a leaked-credential CSV dump", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the input CSV file (plain, .gz, or .zst)
    input_file: String,

    /// Output CSV file path
    #[arg(short, long, default_value = "risultati_analisi.csv")]
    output: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    eprintln!("Analyzing file: {}", cli.input_file);

    // Failures are reported, not raised: this tool promises exit code 0 on
    // completion and nothing more.
    if let Err(err) = commands::analyze::run(&cli.input_file, &cli.output) {
        eprintln!("Error: {err:#}");
    }

    Ok(())
}
