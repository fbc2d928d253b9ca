pub mod csv;
pub mod json;
pub mod markdown;
pub mod table;

use anyhow::Result;
use serde::Serialize;

use crate::estimator::{EstimationResult, TierSet};

/// Fixed labels for the three delivery tiers, in tier order.
pub const TIER_LABELS: [&str; 3] = [
    "Basic — MVP",
    "Standard — stable production",
    "Enterprise — large-scale",
];

/// The three artifacts produced from one estimation, plus a suggested
/// filename stem for writing them to disk.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedQuote {
    pub structured: EstimationResult,
    pub narrative: String,
    pub tabular: String,
    pub filename: String,
}

pub fn render(result: &EstimationResult) -> Result<RenderedQuote> {
    Ok(RenderedQuote {
        structured: result.clone(),
        narrative: markdown::render_markdown(result),
        tabular: csv::quote_to_csv(result)?,
        filename: suggested_filename(result),
    })
}

/// `quote_<project>_<date>`, with each whitespace run in the project name
/// collapsed to a single underscore.
pub fn suggested_filename(result: &EstimationResult) -> String {
    format!(
        "quote_{}_{}",
        underscore_whitespace(&result.project_name),
        result.generated_at.format("%Y-%m-%d")
    )
}

fn underscore_whitespace(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_gap = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_gap {
                out.push('_');
            }
            in_gap = true;
        } else {
            out.push(ch);
            in_gap = false;
        }
    }
    out
}

pub(crate) fn tiers(set: &TierSet) -> [f64; 3] {
    [set.basic, set.standard, set.enterprise]
}

/// Currency for display: whole units, half away from zero.
pub(crate) fn round_currency(value: f64) -> i64 {
    value.round() as i64
}

/// Currency with thousands separators, for the narrative document.
pub(crate) fn format_currency(value: f64) -> String {
    group_thousands(round_currency(value))
}

/// Hours for display: one decimal place, half away from zero.
pub(crate) fn format_hours(value: f64) -> String {
    format!("{:.1}", (value * 10.0).round() / 10.0)
}

fn group_thousands(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
