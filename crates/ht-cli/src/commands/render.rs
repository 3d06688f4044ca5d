//! Text and JSON rendering for the session screens.
//!
//! All functions return strings so the session can write them to any sink and
//! tests can compare them directly.

use std::fmt::Write;

use anyhow::Result;
use ht_core::{ActivityRecord, AggregationResult, GrandMean, RecordStore, format_record_date};
use serde::Serialize;

/// Writes a section title underlined to its own width.
fn section(output: &mut String, title: &str) {
    writeln!(output, "{title}").unwrap();
    writeln!(output, "{}", "─".repeat(title.chars().count())).unwrap();
}

/// Shortens `label` to `width` characters, marking the cut with `...`.
pub fn truncate_label(label: &str, width: usize) -> String {
    if label.chars().count() <= width {
        return label.to_string();
    }
    let kept: String = label.chars().take(width.saturating_sub(3)).collect();
    format!("{kept}...")
}

// ========== Menu ==========

/// Formats the main menu with the current fill level of the store.
pub fn format_menu(store: &RecordStore) -> String {
    let mut output = String::new();
    writeln!(output).unwrap();
    section(&mut output, "MAIN MENU");
    writeln!(output, "  [1] Add record").unwrap();
    writeln!(output, "  [2] List records").unwrap();
    writeln!(output, "  [3] Show statistics").unwrap();
    writeln!(output, "  [4] Quit").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "Records stored: {}/{}", store.len(), store.capacity()).unwrap();
    output
}

// ========== Record Summary ==========

/// Formats the confirmation shown after a record is added.
pub fn format_added(record: &ActivityRecord) -> String {
    let mut output = String::new();
    writeln!(output, "Record added.").unwrap();
    writeln!(output, "  Activity: {}", record.activity_type()).unwrap();
    writeln!(output, "  Date:     {}", format_record_date(record.date())).unwrap();
    writeln!(output, "  Value:    {:.2}", record.value()).unwrap();
    output
}

// ========== Listing ==========

/// Formats every record as a table in insertion order.
pub fn format_listing(records: &[ActivityRecord], label_width: usize) -> String {
    let mut output = String::new();

    if records.is_empty() {
        writeln!(output, "No records found. Add your first record!").unwrap();
        return output;
    }

    let w = label_width;
    section(&mut output, "RECORDS");
    writeln!(output, "{:>3}  {:<w$}  {:<10}  {:>10}", "#", "ACTIVITY", "DATE", "VALUE").unwrap();
    writeln!(
        output,
        "{}  {}  {}  {}",
        "─".repeat(3),
        "─".repeat(w),
        "─".repeat(10),
        "─".repeat(10)
    )
    .unwrap();

    for (i, record) in records.iter().enumerate() {
        let label = truncate_label(record.activity_type().as_str(), w);
        let date = format_record_date(record.date());
        writeln!(output, "{:>3}  {label:<w$}  {date:<10}  {:>10.2}", i + 1, record.value()).unwrap();
    }

    writeln!(output).unwrap();
    writeln!(output, "Total records: {}", records.len()).unwrap();
    output
}

// ========== Statistics ==========

fn format_grand_mean(mean: GrandMean) -> String {
    match mean {
        GrandMean::Value(v) => format!("{v:.2}"),
        GrandMean::NotApplicable => "n/a".to_string(),
    }
}

/// Formats the human-readable statistics report.
pub fn format_stats(result: &AggregationResult, label_width: usize) -> String {
    let mut output = String::new();

    if result.is_empty() {
        writeln!(output, "No records found to compute statistics.").unwrap();
        return output;
    }

    let w = label_width;
    section(&mut output, "SUMMARY");
    writeln!(output, "Total records:   {}", result.total_records).unwrap();
    writeln!(output, "Activity types:  {}", result.distinct_types()).unwrap();

    writeln!(output).unwrap();
    section(&mut output, "BY ACTIVITY");
    writeln!(output, "{:<w$}  {:>10}  {:>10}  {:>6}", "ACTIVITY", "SUM", "MEAN", "COUNT").unwrap();
    writeln!(
        output,
        "{}  {}  {}  {}",
        "─".repeat(w),
        "─".repeat(10),
        "─".repeat(10),
        "─".repeat(6)
    )
    .unwrap();

    for row in &result.rows {
        let label = truncate_label(row.activity_type.as_str(), w);
        writeln!(
            output,
            "{label:<w$}  {:>10.2}  {:>10.2}  {:>6}",
            row.sum,
            row.mean(),
            row.count
        )
        .unwrap();
    }

    writeln!(output).unwrap();
    writeln!(output, "Grand total:  {:.2}", result.grand_sum).unwrap();
    writeln!(output, "Grand mean:   {}", format_grand_mean(result.grand_mean)).unwrap();
    output
}

// ========== JSON Output ==========

/// JSON statistics structure.
#[derive(Debug, Serialize)]
pub struct JsonStats {
    pub total_records: usize,
    pub distinct_types: usize,
    pub grand_sum: f64,
    pub grand_mean: Option<f64>,
    pub by_activity: Vec<JsonActivity>,
}

#[derive(Debug, Serialize)]
pub struct JsonActivity {
    pub activity_type: String,
    pub sum: f64,
    pub mean: f64,
    pub count: usize,
}

/// Formats the statistics as pretty JSON. Empty input yields a null mean.
pub fn format_stats_json(result: &AggregationResult) -> Result<String> {
    let stats = JsonStats {
        total_records: result.total_records,
        distinct_types: result.distinct_types(),
        grand_sum: result.grand_sum,
        grand_mean: result.grand_mean.value(),
        by_activity: result
            .rows
            .iter()
            .map(|row| JsonActivity {
                activity_type: row.activity_type.to_string(),
                sum: row.sum,
                mean: row.mean(),
                count: row.count,
            })
            .collect(),
    };

    Ok(serde_json::to_string_pretty(&stats)?)
}
