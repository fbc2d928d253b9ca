use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

use crate::estimator::EstimationResult;
use crate::output::{format_currency, format_hours, tiers, TIER_LABELS};

pub fn render_quote_table(result: &EstimationResult) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Category",
        "Items",
        "Basic Hours",
        "Basic Cost",
        "Standard Hours",
        "Standard Cost",
        "Enterprise Hours",
        "Enterprise Cost",
    ]);

    for (name, category) in &result.categories {
        let hours = tiers(&category.hours);
        let costs = tiers(&category.costs);
        table.add_row(vec![
            name.clone(),
            category.items.to_string(),
            format_hours(hours[0]),
            format_currency(costs[0]),
            format_hours(hours[1]),
            format_currency(costs[1]),
            format_hours(hours[2]),
            format_currency(costs[2]),
        ]);
    }

    let totals = tiers(&result.totals);
    table.add_row(vec![
        "TOTAL".to_string(),
        "-".to_string(),
        "-".to_string(),
        format_currency(totals[0]),
        "-".to_string(),
        format_currency(totals[1]),
        "-".to_string(),
        format_currency(totals[2]),
    ]);
    table.to_string()
}

pub fn render_summary_table(result: &EstimationResult) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Tier", "Total Cost (MXN)"]);
    for (label, total) in TIER_LABELS.iter().zip(tiers(&result.totals)) {
        table.add_row(vec![label.to_string(), format!("${}", format_currency(total))]);
    }
    table.to_string()
}
