// src/io/reporting.rs

use crate::calculator::config::ReportConfig;
use crate::calculator::engine::{CostCurve, EoqAnalysis};
use crate::error::Result;
use std::io::Write;
use std::path::Path;

/// Formats `value` with `decimals` fraction digits and `,` between thousands.
///
/// `format_thousands(1234567.891, 2)` gives `"1,234,567.89"`.
pub fn format_thousands(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(fixed.len() + integer.len() / 3 + 1);
    if value.is_sign_negative() && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        grouped.push('-');
    }
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

/// Whole-currency amount, e.g. `Rp 158,114`.
pub fn format_currency(symbol: &str, value: f64) -> String {
    format!("{} {}", symbol, format_thousands(value, 0))
}

/// Renders the result block shown to the user.
pub fn render_text(analysis: &EoqAnalysis, labels: &ReportConfig) -> String {
    let result = &analysis.result;
    let money = |value| format_currency(&labels.currency_symbol, value);

    let mut lines = vec![
        "=== Economic Order Quantity ===".to_string(),
        format!(
            "Inputs: D = {}, S = {}, H = {}",
            format_thousands(analysis.inputs.annual_demand, 0),
            money(analysis.inputs.ordering_cost),
            money(analysis.inputs.holding_cost),
        ),
        format!(
            "EOQ (optimal order quantity): {} {}",
            format_thousands(result.eoq, 2),
            labels.unit_label
        ),
        format!(
            "Orders per year: {} (every {} days)",
            format_thousands(result.order_frequency, 2),
            format_thousands(result.cycle_days(), 1)
        ),
        String::new(),
        "=== Cost Analysis ===".to_string(),
    ];
    for (component, cost) in analysis.cost_breakdown() {
        lines.push(format!("{} cost: {}", component, money(cost)));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Renders the result as pretty-printed JSON.
pub fn render_json(analysis: &EoqAnalysis) -> Result<String> {
    Ok(serde_json::to_string_pretty(&analysis.summary())?)
}

/// Writes the sampled curve as CSV to any writer.
///
/// Columns: `quantity,ordering_cost,holding_cost,total_cost`.
/// Returns the number of data rows written.
pub fn write_curve<W: Write>(writer: W, curve: &CostCurve) -> Result<usize> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut rows = 0;
    for point in curve {
        wtr.serialize(point)?;
        rows += 1;
    }

    wtr.flush()?;
    Ok(rows)
}

/// Writes the sampled curve to a CSV file.
///
/// # Arguments
/// * `file_path` - Destination, e.g. `"curves/classic.csv"`.
/// * `curve` - The curve to evaluate and export.
pub fn write_curve_file(file_path: &Path, curve: &CostCurve) -> Result<usize> {
    let file = std::fs::File::create(file_path)?;
    let rows = write_curve(file, curve)?;

    tracing::info!(rows, path = ?file_path, "exported cost curve");
    Ok(rows)
}
