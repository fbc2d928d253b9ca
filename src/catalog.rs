use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Work breakdown supplied by the caller: categories of building blocks,
/// each block carrying raw effort figures for the three tiers.
///
/// Insertion order of the maps is preserved so rendered documents list
/// categories in the order the catalog declared them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub categories: IndexMap<String, Category>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub building_blocks: IndexMap<String, BuildingBlock>,
}

impl Category {
    /// Display name for rendered output. An absent or empty `name` falls
    /// back to the catalog key.
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => id,
        }
    }
}

/// Atomic estimated work item. A block without an `hours` object is
/// incomplete and is skipped during aggregation, not rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildingBlock {
    #[serde(default)]
    pub hours: Option<BlockHours>,
}

/// Raw effort in hours per implementation difficulty. Missing fields
/// default to zero.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BlockHours {
    #[serde(default)]
    pub easy: f64,
    #[serde(default)]
    pub medium: f64,
    #[serde(default)]
    pub complex: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_falls_back_to_id() {
        let named = Category {
            name: Some("Integrations".to_string()),
            ..Category::default()
        };
        assert_eq!(named.display_name("cat_a"), "Integrations");

        let unnamed = Category::default();
        assert_eq!(unnamed.display_name("cat_a"), "cat_a");

        let empty = Category {
            name: Some(String::new()),
            ..Category::default()
        };
        assert_eq!(empty.display_name("cat_a"), "cat_a");
    }

    #[test]
    fn parses_catalog_with_partial_blocks() {
        let raw = r#"{
            "categories": {
                "backend": {
                    "name": "Backend",
                    "building_blocks": {
                        "auth": { "hours": { "easy": 10, "complex": 30 } },
                        "notes": {}
                    }
                }
            }
        }"#;
        let catalog: Catalog = serde_json::from_str(raw).expect("failed to parse catalog");
        let backend = &catalog.categories["backend"];
        assert_eq!(backend.building_blocks.len(), 2);

        let auth = backend.building_blocks["auth"]
            .hours
            .expect("auth block should have hours");
        assert_eq!(auth.easy, 10.0);
        assert_eq!(auth.medium, 0.0);
        assert_eq!(auth.complex, 30.0);
        assert!(backend.building_blocks["notes"].hours.is_none());
    }

    #[test]
    fn preserves_category_order() {
        let raw = r#"{
            "categories": {
                "zeta": {},
                "alpha": {},
                "mid": {}
            }
        }"#;
        let catalog: Catalog = serde_json::from_str(raw).expect("failed to parse catalog");
        let keys: Vec<&str> = catalog.categories.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }
}
