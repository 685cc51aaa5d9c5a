//! Report command - write a Markdown report and CSV tables.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use colored::Colorize;
use eda_core::{
    Eda, PrintTable, QualityConfig, ReportOptions, flatten_categories_for_print,
    flatten_correlation_for_print, flatten_missing_for_print, flatten_summary_for_print,
    render_markdown,
};
use tracing::debug;

use super::config_with_sep;
use crate::cli::ReportArgs;

pub fn run(args: ReportArgs, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !args.file.exists() {
        return Err(format!("File not found: {}", args.file.display()).into());
    }

    let mut config = config_with_sep(args.sep.as_deref())?;
    config.max_category_columns = args.max_category_columns;
    config.top_k_categories = args.top_k_categories;
    config.quality = QualityConfig {
        high_cardinality_threshold: args.high_cardinality_threshold,
        zero_share_threshold: args.zero_share_threshold,
        ..QualityConfig::default()
    };
    config.validate()?;

    println!(
        "{} {}",
        "Analyzing".cyan().bold(),
        args.file.display().to_string().white()
    );

    let report = Eda::with_config(config).analyze(&args.file)?;

    let out_dir = &args.out_dir;
    fs::create_dir_all(out_dir)?;

    let options = ReportOptions {
        title: args.title.clone(),
        min_missing_share: args.min_missing_share,
        ..ReportOptions::default()
    };
    let mut written = Vec::new();

    let md_path = out_dir.join("report.md");
    fs::write(&md_path, render_markdown(&report, &options))?;
    written.push(md_path);

    let summary_path = out_dir.join("summary.csv");
    write_table_csv(&flatten_summary_for_print(&report.summary), &summary_path)?;
    written.push(summary_path);

    let missing_path = out_dir.join("missing.csv");
    write_table_csv(&flatten_missing_for_print(&report.missing), &missing_path)?;
    written.push(missing_path);

    let correlation_path = out_dir.join("correlation.csv");
    write_table_csv(&flatten_correlation_for_print(&report.correlation), &correlation_path)?;
    written.push(correlation_path);

    if !report.top_categories.is_empty() {
        let categories_dir = out_dir.join("top_categories");
        fs::create_dir_all(&categories_dir)?;

        let mut used = HashSet::new();
        for (column, values) in &report.top_categories {
            let name = unique_file_stem(column, &mut used);
            let path = categories_dir.join(format!("{}.csv", name));
            write_table_csv(&flatten_categories_for_print(values), &path)?;
            written.push(path);
        }
    }

    let flags_path = out_dir.join("quality_flags.json");
    fs::write(&flags_path, serde_json::to_string_pretty(&report.flags)?)?;
    written.push(flags_path);

    if verbose {
        for path in &written {
            println!("  {}", path.display());
        }
    }

    println!(
        "{} {} files to {}",
        "Wrote".green().bold(),
        written.len(),
        out_dir.display().to_string().white()
    );
    println!(
        "Data quality score: {:.0}%",
        report.flags.quality_score * 100.0
    );

    Ok(())
}

/// Write a printable table as CSV with a header row.
fn write_table_csv(table: &PrintTable, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(&table.columns)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    debug!(path = %path.display(), rows = table.len(), "Wrote table");
    Ok(())
}

/// File-system safe stem for a column name, unique within `used`.
fn unique_file_stem(column: &str, used: &mut HashSet<String>) -> String {
    let mut stem: String = column
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if stem.is_empty() {
        stem = "column".to_string();
    }

    let mut candidate = stem.clone();
    let mut n = 2;
    while !used.insert(candidate.clone()) {
        candidate = format!("{}_{}", stem, n);
        n += 1;
    }
    candidate
}
