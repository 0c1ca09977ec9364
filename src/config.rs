use serde::{Deserialize, Serialize};

use crate::entities::SheetDims;

#[cfg(doc)]
use crate::entities::SheetCatalog;

/// Configuration for a nesting run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NestConfig {
    /// Overrides the [`SheetCatalog`] lookup for every material group
    pub stock_override: Option<SheetDims>,
    /// If set, only units of this material are processed; all others are out of
    /// scope for the call (not reported as unplaceable)
    pub material_filter: Option<String>,
    /// Nest independent material groups on parallel worker threads
    #[serde(default = "default_parallel_groups")]
    pub parallel_groups: bool,
}

fn default_parallel_groups() -> bool {
    true
}

impl Default for NestConfig {
    fn default() -> Self {
        NestConfig {
            stock_override: None,
            material_filter: None,
            parallel_groups: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_round_trips_through_json() {
        let config = NestConfig {
            stock_override: Some(SheetDims {
                length: 2440.0,
                width: 1220.0,
            }),
            material_filter: Some("MDF".to_string()),
            parallel_groups: false,
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: NestConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn parallel_groups_defaults_to_true_when_absent() {
        let parsed: NestConfig =
            serde_json::from_str(r#"{"stock_override": null, "material_filter": null}"#).unwrap();
        assert!(parsed.parallel_groups);
    }
}
