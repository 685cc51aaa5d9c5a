//! Example: Analyze a delimited data file and print the findings.
//!
//! Usage:
//!   cargo run --example analyze -- <file_path>

use std::env;
use std::path::Path;

use eda_core::{Eda, flatten_missing_for_print, flatten_summary_for_print};

fn main() -> eda_core::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example analyze -- <file_path>");
        std::process::exit(1);
    }

    let file_path = &args[1];
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Error: File not found: {}", file_path);
        std::process::exit(1);
    }

    let separator = "=".repeat(80);
    println!("{}", separator);
    println!("EDA: {}", file_path);
    println!("{}", separator);
    println!();

    let report = Eda::new().analyze(path)?;

    if let Some(source) = &report.source {
        println!("## Source Metadata");
        println!("  File: {}", source.file);
        println!("  Format: {}", source.format);
        println!("  Rows: {}", source.row_count);
        println!("  Columns: {}", source.column_count);
        println!();
    }

    println!("## Columns ({})", report.summary.n_cols);
    println!();
    print!("{}", flatten_summary_for_print(&report.summary).render());
    println!();

    println!("## Missing values");
    println!();
    print!("{}", flatten_missing_for_print(&report.missing).render());
    println!();

    let flags = &report.flags;
    println!("## Quality (score {:.2})", flags.quality_score);
    for (flag, finding) in flags.findings() {
        println!("  [{}] {}: {}", flag, finding.column, finding.detail);
    }
    for penalty in &flags.penalties {
        println!("  -{:.3} {}", penalty.amount, penalty.source);
    }
    println!();

    let pairs = report.correlation.strongest_pairs(3);
    if !pairs.is_empty() {
        println!("## Strongest correlations");
        for (a, b, r) in pairs {
            println!("  {:>20} / {:<20} {:+.3}", a, b, r);
        }
        println!();
    }

    println!("{}", separator);
    println!("Recommendation: {}", report.recommendation);
    println!("{}", separator);

    Ok(())
}
