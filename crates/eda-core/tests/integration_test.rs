//! Integration tests for eda-core.

use std::io::Write;
use tempfile::NamedTempFile;

use eda_core::{
    ColumnKind, DataTable, Eda, EdaConfig, EdaError, FlagValue, Parser, ParserConfig,
    QualityConfig, ReportOptions, compute_quality_flags, correlation_matrix,
    flatten_summary_for_print, missing_table, render_markdown, summarize_dataset, top_categories,
};

/// Helper to create a temporary file with given content.
fn create_test_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

fn parse(content: &str) -> DataTable {
    Parser::new().parse_str(content).expect("Parse failed")
}

// =============================================================================
// Summaries
// =============================================================================

#[test]
fn test_summary_of_mixed_table() {
    let table = parse(
        "age,height,city\n\
         10,140,A\n\
         20,150,B\n\
         30,160,A\n\
         ,170,\n",
    );

    let summary = summarize_dataset(&table);
    assert_eq!(summary.n_rows, 4);
    assert_eq!(summary.n_cols, 3);

    let age = summary.get_column("age").unwrap();
    assert_eq!(age.kind, ColumnKind::Numeric);
    assert_eq!(age.missing_count, 1);
    let stats = age.numeric.as_ref().unwrap();
    assert_eq!(stats.min, 10.0);
    assert_eq!(stats.max, 30.0);
    assert!((stats.mean - 20.0).abs() < 1e-12);

    let city = summary.get_column("city").unwrap();
    assert_eq!(city.kind, ColumnKind::Categorical);
    assert_eq!(city.distinct_count, 2);
    assert!(city.numeric.is_none());

    let missing = missing_table(&table);
    assert_eq!(missing["age"].missing_count, 1);
    assert_eq!(missing["height"].missing_count, 0);
    assert!((missing["city"].missing_share - 0.25).abs() < 1e-12);
}

#[test]
fn test_null_markers_count_as_missing() {
    let table = parse("score\n1\nNA\nnull\n \n4\n");
    let missing = missing_table(&table);

    assert_eq!(missing["score"].missing_count, 3);
    assert_eq!(
        summarize_dataset(&table).get_column("score").unwrap().kind,
        ColumnKind::Numeric
    );
}

#[test]
fn test_missing_table_agrees_with_summary() {
    let table = parse("a,b,c\n1,,x\n,,y\n3,,\n");
    let summary = summarize_dataset(&table);
    let missing = missing_table(&table);

    for column in &summary.columns {
        assert_eq!(missing[column.name.as_str()].missing_count, column.missing_count);
        assert!(column.missing_count <= summary.n_rows);
    }
    assert_eq!(
        missing.iter().map(|(name, _)| name).collect::<Vec<_>>(),
        vec!["a", "b", "c"]
    );
}

#[test]
fn test_duplicate_headers_keep_every_column() {
    let table = parse("a,a\n1,\n2,x\n3,\n");
    let summary = summarize_dataset(&table);
    let missing = missing_table(&table);

    assert_eq!(table.headers, vec!["a", "a.1"]);
    assert_eq!(summary.n_cols, 2);
    assert_eq!(missing.len(), 2);
    assert_eq!(missing["a"].missing_count, 0);
    assert_eq!(missing["a.1"].missing_count, 2);
    for column in &summary.columns {
        assert_eq!(missing[column.name.as_str()].missing_count, column.missing_count);
    }
}

#[test]
fn test_flatten_summary_rows_follow_column_order() {
    let table = parse("z,a,m\n1,x,2\n2,y,3\n");
    let printed = flatten_summary_for_print(&summarize_dataset(&table));

    assert_eq!(printed.column("name").unwrap(), vec!["z", "a", "m"]);
    assert!(printed.column("missing_share").is_some());
    assert_eq!(printed.column("is_numeric").unwrap(), vec!["true", "false", "true"]);
}

// =============================================================================
// Quality Flags
// =============================================================================

fn flags_for(table: &DataTable) -> eda_core::QualityFlags {
    compute_quality_flags(&summarize_dataset(table), &missing_table(table), table)
}

#[test]
fn test_constant_column_detected() {
    let table = parse(
        "id,constant_col,normal_col\n\
         1,5,1\n\
         2,5,2\n\
         3,5,3\n\
         4,5,4\n",
    );
    let flags = flags_for(&table);

    assert!(flags.has_constant_columns);
    assert_eq!(flags.constant_columns_count, 1);
    assert_eq!(flags.constant_columns[0].column, "constant_col");
    assert!(!flags.has_suspicious_id_duplicates);
}

#[test]
fn test_duplicate_identifier_detected() {
    let table = parse("user_id,name\n1,A\n2,B\n3,C\n1,D\n");
    let flags = flags_for(&table);

    assert!(flags.has_suspicious_id_duplicates);
    assert_eq!(flags.suspicious_id_count, 1);
    assert_eq!(flags.suspicious_id_columns[0].column, "user_id");
}

#[test]
fn test_many_zero_values_detected() {
    let table = parse("col1,col2\n0,1\n0,2\n0,3\n10,4\n");
    let flags = flags_for(&table);

    assert!(flags.has_many_zero_values);
    assert!(flags.many_zero_values_count >= 1);
    assert_eq!(flags.many_zero_columns[0].column, "col1");
}

#[test]
fn test_high_cardinality_detected() {
    let mut content = String::from("label,value\n");
    for i in 0..60 {
        content.push_str(&format!("cat_{},{}\n", i, i % 7));
    }
    let flags = flags_for(&parse(&content));

    assert!(flags.has_high_cardinality_categoricals);
    assert!(flags.high_cardinality_count >= 1);
    assert_eq!(flags.high_cardinality_columns[0].column, "label");
}

#[test]
fn test_constant_column_with_repeated_name_lowers_score() {
    let mut sparse = vec![Some("1"), Some("2")];
    sparse.extend(std::iter::repeat_n(None, 98));
    let before = flags_for(&DataTable::from_columns(vec![("a", sparse.clone())])).quality_score;

    let table = DataTable::from_columns(vec![("a", sparse), ("a", vec![Some("5"); 100])]);
    let flags = flags_for(&table);

    assert!(flags.has_constant_columns);
    assert!(flags.quality_score < before, "before={} after={}", before, flags.quality_score);
}

#[test]
fn test_clean_table_scores_one() {
    let table = parse("x,y\n1,10\n2,20\n3,15\n4,12\n");
    let flags = flags_for(&table);

    assert!(!flags.any_detector_fired());
    assert_eq!(flags.quality_score, 1.0);
    assert!(flags.penalties.is_empty());
    assert_eq!(flags.get("quality_score"), Some(FlagValue::Share(1.0)));
}

#[test]
fn test_informational_flags_do_not_penalize() {
    let table = parse("x,y\n1,\n2,\n3,\n");
    let flags = flags_for(&table);

    assert!(flags.too_few_rows);
    assert!(flags.too_many_missing);
    assert_eq!(flags.max_missing_share, 1.0);
    // Only the all-null column and average missingness cost points
    let sources: Vec<&str> = flags.penalties.iter().map(|p| p.source.as_str()).collect();
    assert_eq!(sources, vec!["has_constant_columns", "missingness"]);
}

#[test]
fn test_degenerate_tables_do_not_fail() {
    let empty = DataTable::new(Vec::new(), Vec::new(), b',');
    let flags = flags_for(&empty);
    assert_eq!(flags.quality_score, 1.0);
    assert!(!flags.any_detector_fired());

    let header_only = parse("a,b\n");
    assert_eq!(summarize_dataset(&header_only).n_rows, 0);
    let flags = flags_for(&header_only);
    assert!(!flags.has_constant_columns);

    let single_row = parse("a,b\n1,x\n");
    let flags = flags_for(&single_row);
    assert!(flags.quality_score >= 0.0 && flags.quality_score <= 1.0);
}

// =============================================================================
// Correlation and Categories
// =============================================================================

#[test]
fn test_correlation_matrix_is_symmetric() {
    let table = parse("a,b,c,label\n1,2,9,x\n2,4,7,y\n3,6,8,x\n4,8,1,y\n");
    let matrix = correlation_matrix(&table);

    assert_eq!(matrix.columns, vec!["a", "b", "c"]);
    for x in &matrix.columns {
        for y in &matrix.columns {
            assert_eq!(matrix.get(x, y), matrix.get(y, x));
        }
    }
    assert!((matrix.get("a", "b").unwrap() - 1.0).abs() < 1e-12);
    assert_eq!(matrix.get("a", "a"), Some(1.0));
}

#[test]
fn test_correlation_requires_two_numeric_columns() {
    let table = parse("a,label\n1,x\n2,y\n");
    assert!(correlation_matrix(&table).is_empty());
}

#[test]
fn test_top_categories_limits_and_order() {
    let table = parse(
        "c1,c2,c3,n\n\
         b,x,p,1\n\
         a,x,q,2\n\
         a,y,r,3\n\
         b,z,s,4\n\
         c,x,t,5\n",
    );
    let top = top_categories(&table, 2, 2);

    assert_eq!(top.keys().collect::<Vec<_>>(), vec!["c1", "c2"]);
    let c1: Vec<(&str, usize)> = top["c1"].iter().map(|c| (c.value.as_str(), c.count)).collect();
    // b and a tie; b was seen first
    assert_eq!(c1, vec![("b", 2), ("a", 2)]);
    assert_eq!(top["c2"][0].value, "x");
    assert_eq!(top["c2"][0].count, 3);
}

#[test]
fn test_top_categories_with_large_k_returns_all() {
    let table = parse("c\nx\ny\nx\n");
    let top = top_categories(&table, 5, 10);
    assert_eq!(top["c"].len(), 2);
}

// =============================================================================
// Full Pipeline
// =============================================================================

#[test]
fn test_analyze_tsv_file() {
    let content = "sample_id\tage\tgroup\n\
                   S1\t30\tcase\n\
                   S2\t41\tcontrol\n\
                   S2\t35\tcase\n";
    let file = create_test_file(content);

    let report = Eda::new().analyze(file.path()).expect("Analysis failed");

    let source = report.source.as_ref().unwrap();
    assert_eq!(source.format, "tsv");
    assert_eq!(source.column_count, 3);
    assert!(report.flags.has_suspicious_id_duplicates);
    assert!(report.flags.quality_score < 1.0);
    assert!(report.top_categories.contains_key("sample_id"));
}

#[test]
fn test_analyze_with_explicit_delimiter() {
    let file = create_test_file("a;b\n1;2\n3;5\n");
    let eda = Eda::with_config(EdaConfig {
        parser: ParserConfig {
            delimiter: Some(b';'),
            ..ParserConfig::default()
        },
        ..EdaConfig::default()
    });

    let report = eda.analyze(file.path()).unwrap();
    assert_eq!(report.summary.column_names(), vec!["a", "b"]);
}

#[test]
fn test_analyze_empty_file_is_an_error() {
    let file = create_test_file("");
    let err = Eda::new().analyze(file.path()).unwrap_err();
    assert!(matches!(err, EdaError::EmptyData(_)));
}

#[test]
fn test_custom_thresholds_change_flags() {
    let mut content = String::from("label\n");
    for i in 0..10 {
        content.push_str(&format!("v{}\n", i % 8));
    }
    let file = create_test_file(&content);

    let default_report = Eda::new().analyze(file.path()).unwrap();
    assert!(!default_report.flags.has_high_cardinality_categoricals);

    let strict = Eda::with_config(EdaConfig {
        quality: QualityConfig {
            high_cardinality_threshold: 5,
            ..QualityConfig::default()
        },
        ..EdaConfig::default()
    });
    let report = strict.analyze(file.path()).unwrap();
    assert!(report.flags.has_high_cardinality_categoricals);
}

#[test]
fn test_markdown_report_from_file() {
    let file = create_test_file("x,y,kind\n1,2,a\n2,4,b\n3,7,a\n,9,\n");
    let report = Eda::new().analyze(file.path()).unwrap();
    let md = render_markdown(&report, &ReportOptions::default());

    assert!(md.contains("Source file:"));
    assert!(md.contains("## Correlation"));
    assert!(md.contains("Strongest pairs:"));
    assert!(md.contains("### kind"));
}
