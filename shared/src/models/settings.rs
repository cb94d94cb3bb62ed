//! Venue Settings Model

use serde::{Deserialize, Serialize};

use crate::util::flexible_i64;

/// Venue settings (桌台数量 + 每桌座位数)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub id: String,
    pub tables: u32,
    #[serde(rename = "chairsPerTable")]
    pub chairs_per_table: u32,
}

/// Update settings payload
///
/// Counts stay signed so that non-positive input reaches validation instead
/// of failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsUpdate {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(deserialize_with = "flexible_i64")]
    pub tables: i64,
    #[serde(rename = "chairsPerTable", deserialize_with = "flexible_i64")]
    pub chairs_per_table: i64,
}

/// Settings plus the current free-table snapshot (GET /owner)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerView {
    #[serde(flatten)]
    pub settings: Settings,
    pub table_count: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_wire_names() {
        let settings = Settings {
            id: "s1".to_string(),
            tables: 3,
            chairs_per_table: 4,
        };
        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(json["chairsPerTable"], 4);
        assert_eq!(json["tables"], 3);
    }

    #[test]
    fn test_update_accepts_string_counts() {
        let update: SettingsUpdate =
            serde_json::from_str(r#"{"id": "s1", "tables": "5", "chairsPerTable": 2}"#).unwrap();
        assert_eq!(update.id.as_deref(), Some("s1"));
        assert_eq!(update.tables, 5);
        assert_eq!(update.chairs_per_table, 2);
    }

    #[test]
    fn test_update_keeps_negative_values() {
        let update: SettingsUpdate =
            serde_json::from_str(r#"{"tables": -1, "chairsPerTable": 0}"#).unwrap();
        assert!(update.id.is_none());
        assert_eq!(update.tables, -1);
        assert_eq!(update.chairs_per_table, 0);
    }

    #[test]
    fn test_owner_view_is_flat() {
        let view = OwnerView {
            settings: Settings {
                id: "s1".to_string(),
                tables: 2,
                chairs_per_table: 4,
            },
            table_count: vec!["T1".to_string(), "T2".to_string()],
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["id"], "s1");
        assert_eq!(json["table_count"][1], "T2");
    }
}
