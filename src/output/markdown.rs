use std::fmt::Write;

use crate::estimator::EstimationResult;
use crate::output::{format_currency, format_hours, tiers, TIER_LABELS};

/// Narrative artifact: executive summary, per-category breakdown and the
/// resolved configuration echo, as a Markdown document.
pub fn render_markdown(result: &EstimationResult) -> String {
    let mut doc = String::new();
    let _ = writeln!(doc, "# Quotation: {}\n", result.project_name);
    let _ = writeln!(doc, "*Generated {}*\n", result.generated_at.to_rfc3339());

    doc.push_str("## Executive Summary\n\n");
    doc.push_str("| Tier | Total Cost |\n");
    doc.push_str("|------|-----------:|\n");
    for (label, total) in TIER_LABELS.iter().zip(tiers(&result.totals)) {
        let _ = writeln!(doc, "| {label} | ${} MXN |", format_currency(total));
    }

    doc.push_str("\n## Categories\n");
    for (name, category) in &result.categories {
        let hours = tiers(&category.hours);
        let costs = tiers(&category.costs);
        let _ = writeln!(doc, "\n### {name}");
        let _ = writeln!(doc, "- Items: {}", category.items);
        let _ = writeln!(
            doc,
            "- Hours (Basic/Standard/Enterprise): {}/{}/{}",
            format_hours(hours[0]),
            format_hours(hours[1]),
            format_hours(hours[2]),
        );
        let _ = writeln!(
            doc,
            "- Costs: ${}/${}/${} MXN",
            format_currency(costs[0]),
            format_currency(costs[1]),
            format_currency(costs[2]),
        );
    }

    let config = &result.config;
    doc.push_str("\n## Configuration\n");
    let _ = writeln!(doc, "- AI efficiency: {}%", config.ai_efficiency_pct);
    let _ = writeln!(doc, "- Markup: {}%", config.markup_pct);
    let _ = writeln!(doc, "- AI hourly rate: ${} MXN/hour", config.ai_hourly_rate);
    let _ = writeln!(doc, "- PM factor: {}%", config.pm_factor_pct);
    let _ = writeln!(doc, "- Testing factor: {}%", config.testing_factor_pct);
    let _ = writeln!(
        doc,
        "- Contingency factor: {}%",
        config.contingency_factor_pct
    );
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BlockHours, BuildingBlock, Catalog, Category};
    use crate::estimator::engine::estimate;

    fn scenario_result() -> EstimationResult {
        let mut category = Category {
            name: Some("Core".to_string()),
            ..Category::default()
        };
        category.building_blocks.insert(
            "api".to_string(),
            BuildingBlock {
                hours: Some(BlockHours {
                    easy: 10.0,
                    medium: 20.0,
                    complex: 30.0,
                }),
            },
        );
        let mut catalog = Catalog::default();
        catalog.categories.insert("core".to_string(), category);
        estimate(Some(&catalog), None)
    }

    #[test]
    fn summary_lists_all_tier_labels_with_rounded_totals() {
        let doc = render_markdown(&scenario_result());
        assert!(doc.contains("# Quotation: Unnamed Project"));
        assert!(doc.contains("| Basic — MVP | $4,095 MXN |"));
        assert!(doc.contains("| Standard — stable production | $8,190 MXN |"));
        assert!(doc.contains("| Enterprise — large-scale | $12,285 MXN |"));
    }

    #[test]
    fn category_section_shows_hours_and_costs() {
        let doc = render_markdown(&scenario_result());
        assert!(doc.contains("### Core"));
        assert!(doc.contains("- Items: 1"));
        assert!(doc.contains("- Hours (Basic/Standard/Enterprise): 6.5/13.0/19.5"));
        assert!(doc.contains("- Costs: $2,730/$5,460/$8,190 MXN"));
    }

    #[test]
    fn configuration_echo_lists_resolved_values() {
        let doc = render_markdown(&scenario_result());
        assert!(doc.contains("- AI efficiency: 35%"));
        assert!(doc.contains("- AI hourly rate: $300 MXN/hour"));
        assert!(doc.contains("- Contingency factor: 20%"));
    }
}
