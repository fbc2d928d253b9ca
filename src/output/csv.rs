use anyhow::Result;

use crate::estimator::EstimationResult;
use crate::output::{format_hours, round_currency, tiers};

/// Tabular artifact: one row per category in catalog order, then a TOTAL
/// row. Hours are not summed across categories, so the TOTAL row carries
/// `-` placeholders in the item and hour columns and only the
/// overhead-scaled costs.
pub fn quote_to_csv(result: &EstimationResult) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record([
        "category",
        "items",
        "basic_hours",
        "basic_cost",
        "standard_hours",
        "standard_cost",
        "enterprise_hours",
        "enterprise_cost",
    ])?;

    for (name, category) in &result.categories {
        let hours = tiers(&category.hours);
        let costs = tiers(&category.costs);
        writer.write_record([
            name.clone(),
            category.items.to_string(),
            format_hours(hours[0]),
            round_currency(costs[0]).to_string(),
            format_hours(hours[1]),
            round_currency(costs[1]).to_string(),
            format_hours(hours[2]),
            round_currency(costs[2]).to_string(),
        ])?;
    }

    let totals = tiers(&result.totals);
    writer.write_record([
        "TOTAL".to_string(),
        "-".to_string(),
        "-".to_string(),
        round_currency(totals[0]).to_string(),
        "-".to_string(),
        round_currency(totals[1]).to_string(),
        "-".to_string(),
        round_currency(totals[2]).to_string(),
    ])?;

    let data = writer.into_inner()?;
    Ok(String::from_utf8_lossy(&data).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BlockHours, BuildingBlock, Catalog, Category};
    use crate::estimator::engine::estimate;

    fn scenario_catalog() -> Catalog {
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
        catalog
    }

    #[test]
    fn category_row_and_total_row() {
        let result = estimate(Some(&scenario_catalog()), None);
        let rendered = quote_to_csv(&result).expect("failed to render csv");
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "category,items,basic_hours,basic_cost,standard_hours,standard_cost,enterprise_hours,enterprise_cost"
        );
        assert_eq!(lines[1], "Core,1,6.5,2730,13.0,5460,19.5,8190");
        assert_eq!(lines[2], "TOTAL,-,-,4095,-,8190,-,12285");
    }

    #[test]
    fn empty_result_still_emits_header_and_total() {
        let result = estimate(None, None);
        let rendered = quote_to_csv(&result).expect("failed to render csv");
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "TOTAL,-,-,0,-,0,-,0");
    }
}
