pub mod engine;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::QuoteConfig;

/// One value per delivery tier. Raw effort maps one-to-one onto tiers:
/// easy to basic, medium to standard, complex to enterprise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TierSet {
    pub basic: f64,
    pub standard: f64,
    pub enterprise: f64,
}

impl TierSet {
    pub fn scale(self, factor: f64) -> Self {
        Self {
            basic: self.basic * factor,
            standard: self.standard * factor,
            enterprise: self.enterprise * factor,
        }
    }

    pub fn add(self, other: Self) -> Self {
        Self {
            basic: self.basic + other.basic,
            standard: self.standard + other.standard,
            enterprise: self.enterprise + other.enterprise,
        }
    }
}

/// Aggregate for a single category. `costs` is pre-overhead: overhead is a
/// project-wide line, not attributable per category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryResult {
    pub items: usize,
    pub hours: TierSet,
    pub costs: TierSet,
}

/// Output of one estimation run. Keys of `categories` are resolved display
/// names in catalog order; `totals` carries the overhead-scaled costs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimationResult {
    pub project_name: String,
    pub generated_at: DateTime<Utc>,
    pub categories: IndexMap<String, CategoryResult>,
    pub totals: TierSet,
    pub config: QuoteConfig,
}
