use chrono::Utc;
use indexmap::IndexMap;
use tracing::warn;

use crate::catalog::{Catalog, Category};
use crate::config::QuoteConfig;
use crate::estimator::{CategoryResult, EstimationResult, TierSet};

/// Cost factors derived once from the config and shared by every block.
#[derive(Debug, Clone, Copy)]
pub struct Rates {
    pub efficiency_factor: f64,
    pub markup_factor: f64,
    pub hourly_rate: f64,
}

impl Rates {
    pub fn from_config(config: &QuoteConfig) -> Self {
        Self {
            efficiency_factor: config.efficiency_factor(),
            markup_factor: config.markup_factor(),
            hourly_rate: config.ai_hourly_rate,
        }
    }
}

/// Computes the tiered estimate for a catalog. Total over any input:
/// an absent catalog yields empty categories and zero totals, an absent
/// config falls back to the defaults. Never rounds; rendering owns all
/// display rounding.
pub fn estimate(catalog: Option<&Catalog>, config: Option<&QuoteConfig>) -> EstimationResult {
    let config = config.cloned().unwrap_or_default();
    let rates = Rates::from_config(&config);

    let mut categories: IndexMap<String, CategoryResult> = IndexMap::new();
    if let Some(catalog) = catalog {
        for (id, category) in &catalog.categories {
            let name = category.display_name(id).to_string();
            let result = estimate_category(category, &rates);
            if categories.insert(name.clone(), result).is_some() {
                warn!("duplicate category display name '{name}': later entry replaces earlier");
            }
        }
    }

    // Overhead is applied exactly once, to the cross-category subtotal.
    let subtotal = categories
        .values()
        .fold(TierSet::default(), |acc, category| acc.add(category.costs));
    let totals = subtotal.scale(config.overhead_factor());

    EstimationResult {
        project_name: config.project_name.clone(),
        generated_at: Utc::now(),
        categories,
        totals,
        config,
    }
}

/// Estimates a single category in isolation. Blocks without an `hours`
/// object are skipped and do not count as items.
pub fn estimate_category(category: &Category, rates: &Rates) -> CategoryResult {
    let mut result = CategoryResult::default();
    for block in category.building_blocks.values() {
        let Some(hours) = &block.hours else {
            continue;
        };
        let effective = TierSet {
            basic: hours.easy,
            standard: hours.medium,
            enterprise: hours.complex,
        }
        .scale(rates.efficiency_factor);
        let cost = effective.scale(rates.hourly_rate * rates.markup_factor);

        result.hours = result.hours.add(effective);
        result.costs = result.costs.add(cost);
        result.items += 1;
    }
    result
}
