use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Economic parameters for one quotation run. Every field has its own
/// default, so a partially specified config resolves field by field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteConfig {
    #[serde(default = "default_project_name")]
    pub project_name: String,
    #[serde(default = "default_ai_efficiency_pct")]
    pub ai_efficiency_pct: f64,
    #[serde(default = "default_markup_pct")]
    pub markup_pct: f64,
    #[serde(default = "default_ai_hourly_rate")]
    pub ai_hourly_rate: f64,
    #[serde(default = "default_pm_factor_pct")]
    pub pm_factor_pct: f64,
    #[serde(default = "default_testing_factor_pct")]
    pub testing_factor_pct: f64,
    #[serde(default = "default_contingency_factor_pct")]
    pub contingency_factor_pct: f64,
}

/// Command-line overrides applied on top of a loaded config.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub project_name: Option<String>,
    pub ai_efficiency_pct: Option<f64>,
    pub markup_pct: Option<f64>,
    pub ai_hourly_rate: Option<f64>,
    pub pm_factor_pct: Option<f64>,
    pub testing_factor_pct: Option<f64>,
    pub contingency_factor_pct: Option<f64>,
}

impl QuoteConfig {
    pub fn default_path() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".config/tierquote/config.toml")
    }

    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path
            .map(|p| p.to_path_buf())
            .unwrap_or_else(Self::default_path);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read_to_string(&path)
            .with_context(|| format!("failed reading config: {}", path.display()))?;
        let parsed: Self = toml::from_str(&data)
            .with_context(|| format!("failed parsing TOML config: {}", path.display()))?;
        Ok(parsed)
    }

    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(project_name) = overrides.project_name {
            self.project_name = project_name;
        }
        if let Some(value) = overrides.ai_efficiency_pct {
            self.ai_efficiency_pct = value;
        }
        if let Some(value) = overrides.markup_pct {
            self.markup_pct = value;
        }
        if let Some(value) = overrides.ai_hourly_rate {
            self.ai_hourly_rate = value;
        }
        if let Some(value) = overrides.pm_factor_pct {
            self.pm_factor_pct = value;
        }
        if let Some(value) = overrides.testing_factor_pct {
            self.testing_factor_pct = value;
        }
        if let Some(value) = overrides.contingency_factor_pct {
            self.contingency_factor_pct = value;
        }
    }

    pub fn write_template(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed creating config directory: {}", parent.display())
            })?;
        }
        fs::write(path, Self::default_template())
            .with_context(|| format!("failed writing config template: {}", path.display()))
    }

    /// Fraction of raw hours that remains after the AI efficiency discount.
    pub fn efficiency_factor(&self) -> f64 {
        (100.0 - self.ai_efficiency_pct) / 100.0
    }

    /// Margin multiplier applied to effective cost.
    pub fn markup_factor(&self) -> f64 {
        (100.0 + self.markup_pct) / 100.0
    }

    /// Combined PM, testing and contingency multiplier. Applied exactly once
    /// to the cross-category totals, never per category or per block.
    pub fn overhead_factor(&self) -> f64 {
        1.0 + (self.pm_factor_pct + self.testing_factor_pct + self.contingency_factor_pct) / 100.0
    }

    pub fn default_template() -> String {
        let template = r#"project_name = "Unnamed Project"

# Percentage reduction applied to raw hours (automation offset)
ai_efficiency_pct = 35.0

# Margin percentage applied to cost
markup_pct = 40.0

# Rate per effective hour, MXN
ai_hourly_rate = 300.0

# Project-wide overhead, percentages of the subtotal
pm_factor_pct = 18.0
testing_factor_pct = 12.0
contingency_factor_pct = 20.0
"#;
        template.to_string()
    }
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            project_name: default_project_name(),
            ai_efficiency_pct: default_ai_efficiency_pct(),
            markup_pct: default_markup_pct(),
            ai_hourly_rate: default_ai_hourly_rate(),
            pm_factor_pct: default_pm_factor_pct(),
            testing_factor_pct: default_testing_factor_pct(),
            contingency_factor_pct: default_contingency_factor_pct(),
        }
    }
}

fn default_project_name() -> String {
    "Unnamed Project".to_string()
}

fn default_ai_efficiency_pct() -> f64 {
    35.0
}

fn default_markup_pct() -> f64 {
    40.0
}

fn default_ai_hourly_rate() -> f64 {
    300.0
}

fn default_pm_factor_pct() -> f64 {
    18.0
}

fn default_testing_factor_pct() -> f64 {
    12.0
}

fn default_contingency_factor_pct() -> f64 {
    20.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = QuoteConfig::default();
        assert_eq!(config.project_name, "Unnamed Project");
        assert_eq!(config.ai_efficiency_pct, 35.0);
        assert_eq!(config.markup_pct, 40.0);
        assert_eq!(config.ai_hourly_rate, 300.0);
        assert_eq!(config.pm_factor_pct, 18.0);
        assert_eq!(config.testing_factor_pct, 12.0);
        assert_eq!(config.contingency_factor_pct, 20.0);
        assert!((config.overhead_factor() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn partial_input_resolves_field_by_field() {
        let config: QuoteConfig =
            serde_json::from_str(r#"{ "markup_pct": 25.0 }"#).expect("failed to parse config");
        assert_eq!(config.markup_pct, 25.0);
        assert_eq!(config.ai_efficiency_pct, 35.0);
        assert_eq!(config.project_name, "Unnamed Project");
    }

    #[test]
    fn template_round_trips() {
        let config: QuoteConfig = toml::from_str(&QuoteConfig::default_template())
            .expect("failed to parse default template");
        assert_eq!(config.ai_hourly_rate, 300.0);
    }

    #[test]
    fn overrides_replace_only_provided_fields() {
        let mut config = QuoteConfig::default();
        config.apply_overrides(ConfigOverrides {
            project_name: Some("CRM Portal".to_string()),
            ai_hourly_rate: Some(450.0),
            ..ConfigOverrides::default()
        });
        assert_eq!(config.project_name, "CRM Portal");
        assert_eq!(config.ai_hourly_rate, 450.0);
        assert_eq!(config.markup_pct, 40.0);
    }
}
