//! Overview command - print a summary of a data file.

use std::path::PathBuf;

use colored::Colorize;
use eda_core::{Eda, EdaReport, FlagValue, flatten_summary_for_print};

use super::config_with_sep;

pub fn run(
    file: PathBuf,
    sep: Option<String>,
    json: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let eda = Eda::with_config(config_with_sep(sep.as_deref())?);
    let report = eda.analyze(&file)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_overview(&file, &report, verbose);
    Ok(())
}

fn print_overview(file: &std::path::Path, report: &EdaReport, verbose: bool) {
    let summary = &report.summary;
    let flags = &report.flags;

    println!(
        "{} {}",
        "Overview of".cyan().bold(),
        file.display().to_string().white()
    );
    println!(
        "{} rows x {} columns",
        summary.n_rows.to_string().white().bold(),
        summary.n_cols.to_string().white().bold()
    );
    if let Some(source) = &report.source {
        if verbose {
            println!("Format: {}  Size: {} bytes", source.format, source.size_bytes);
            println!("Hash: {}", source.hash);
        }
    }
    println!();

    println!("{}", "Columns:".yellow().bold());
    print!("{}", flatten_summary_for_print(summary).render());
    println!();

    println!("{}", "Quality flags:".yellow().bold());
    for (name, value) in flags.entries() {
        if name == "quality_score" {
            continue;
        }
        let shown = match value {
            FlagValue::Bool(true) => "true".red().to_string(),
            FlagValue::Bool(false) => "false".green().to_string(),
            FlagValue::Count(0) => "0".to_string(),
            FlagValue::Count(n) => n.to_string().yellow().to_string(),
            other => other.to_string(),
        };
        println!("  {:36} {}", name, shown);
    }

    if verbose {
        for (flag, finding) in flags.findings() {
            println!("    {} {}: {}", flag.dimmed(), finding.column, finding.detail);
        }
        for penalty in &flags.penalties {
            println!("    {} -{:.3}", penalty.source.dimmed(), penalty.amount);
        }
    }
    println!();

    let score = format!("{:.0}%", flags.quality_score * 100.0);
    let score = if flags.quality_score >= 0.9 {
        score.green().bold()
    } else if flags.quality_score >= 0.7 {
        score.yellow().bold()
    } else {
        score.red().bold()
    };
    println!("Data quality score: {}", score);
    println!("{}", report.recommendation);
}
