//! Wire types for the loads backend.
//!
//! Field names follow the backend's camelCase JSON contract. Timestamps are
//! zone-less (`LocalDateTime` on the backend), so they map to
//! [`NaiveDateTime`].

use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single ammunition reload specification record, owned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Load {
    pub id: i64,
    pub cartridge: String,
    pub bullet: String,
    pub powder: String,
    pub powder_charge: Option<f64>,
    pub primer: Option<String>,
    pub case_name: Option<String>,
    pub overall_length: Option<f64>,
    pub velocity: Option<i32>,
    pub notes: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
    pub created_by: Option<String>,
}

/// Payload for creating or updating a load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLoad {
    pub cartridge: String,
    pub bullet: String,
    pub powder: String,
    pub powder_charge: Option<f64>,
    pub primer: Option<String>,
    pub case_name: Option<String>,
    pub overall_length: Option<f64>,
    pub velocity: Option<i32>,
    pub notes: Option<String>,
}

impl NewLoad {
    /// Build a submission payload from validated form values.
    ///
    /// Numeric coercion happens here and nowhere earlier: the form layer
    /// holds raw strings, and blank optional numerics become `None`.
    /// `powderCharge` and `overallLength` parse as decimals, `velocity` as
    /// an integer.
    pub fn from_form(values: &HashMap<String, String>) -> Self {
        let text = |name: &str| values.get(name).cloned().unwrap_or_default();
        let optional = |name: &str| values.get(name).map(|v| v.trim()).filter(|v| !v.is_empty());

        Self {
            cartridge: text("cartridge"),
            bullet: text("bullet"),
            powder: text("powder"),
            powder_charge: optional("powderCharge").and_then(|v| v.parse().ok()),
            primer: optional("primer").map(str::to_string),
            case_name: optional("caseName").map(str::to_string),
            overall_length: optional("overallLength").and_then(|v| v.parse().ok()),
            velocity: optional("velocity").and_then(|v| v.parse().ok()),
            notes: optional("notes").map(str::to_string),
        }
    }
}

/// One page of loads as returned by `GET /loads`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadPage {
    pub content: Vec<Load>,
    pub total_pages: u32,
    pub total_elements: u64,
}

/// Session status as returned by `GET /api/user`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub authenticated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_load_deserializes_from_backend_json() {
        let json = r#"{
            "id": 42,
            "cartridge": "223 Remington",
            "bullet": "Sierra MatchKing 77gr",
            "powder": "IMR 8208 XBR",
            "powderCharge": 23.5,
            "primer": "CCI 400",
            "caseName": "Lake City",
            "overallLength": 2.26,
            "velocity": 2650,
            "notes": "Accuracy load",
            "createdAt": "2024-03-01T12:30:00",
            "updatedAt": null,
            "createdBy": "shooter"
        }"#;

        let load: Load = serde_json::from_str(json).unwrap();
        assert_eq!(load.id, 42);
        assert_eq!(load.cartridge, "223 Remington");
        assert_eq!(load.powder_charge, Some(23.5));
        assert_eq!(load.case_name, Some("Lake City".to_string()));
        assert_eq!(load.velocity, Some(2650));
        assert!(load.created_at.is_some());
        assert_eq!(load.updated_at, None);
    }

    #[test]
    fn test_new_load_serializes_camel_case() {
        let load = NewLoad {
            cartridge: "308 Win".to_string(),
            bullet: "168gr BTHP".to_string(),
            powder: "Varget".to_string(),
            powder_charge: Some(43.0),
            overall_length: Some(2.8),
            ..Default::default()
        };

        let json = serde_json::to_value(&load).unwrap();
        assert_eq!(json["powderCharge"], 43.0);
        assert_eq!(json["overallLength"], 2.8);
        assert_eq!(json["caseName"], serde_json::Value::Null);
    }

    #[test]
    fn test_load_page_deserializes() {
        let json = r#"{"content": [], "totalPages": 3, "totalElements": 25}"#;
        let page: LoadPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_elements, 25);
        assert!(page.content.is_empty());
    }

    #[test]
    fn test_user_info_tolerates_missing_username() {
        let info: UserInfo = serde_json::from_str(r#"{"authenticated": false}"#).unwrap();
        assert!(!info.authenticated);
        assert_eq!(info.username, None);
    }

    mod from_form {
        use super::*;
        use pretty_assertions::assert_eq;

        fn values() -> HashMap<String, String> {
            HashMap::from([
                ("cartridge".to_string(), "223 Remington".to_string()),
                ("bullet".to_string(), "77gr SMK".to_string()),
                ("powder".to_string(), "H4895".to_string()),
                ("powderCharge".to_string(), "23.5".to_string()),
                ("overallLength".to_string(), "2.260".to_string()),
                ("velocity".to_string(), "2650".to_string()),
                ("primer".to_string(), "".to_string()),
                ("notes".to_string(), "ladder test".to_string()),
            ])
        }

        #[test]
        fn test_coerces_numeric_fields() {
            let load = NewLoad::from_form(&values());
            assert_eq!(load.powder_charge, Some(23.5));
            assert_eq!(load.overall_length, Some(2.26));
            assert_eq!(load.velocity, Some(2650));
        }

        #[test]
        fn test_blank_optionals_become_none() {
            let mut v = values();
            v.insert("powderCharge".to_string(), "  ".to_string());
            let load = NewLoad::from_form(&v);
            assert_eq!(load.powder_charge, None);
            assert_eq!(load.primer, None);
        }

        #[test]
        fn test_unparseable_numerics_become_none() {
            let mut v = values();
            v.insert("velocity".to_string(), "fast".to_string());
            let load = NewLoad::from_form(&v);
            assert_eq!(load.velocity, None);
        }

        #[test]
        fn test_missing_required_fields_default_to_empty() {
            let load = NewLoad::from_form(&HashMap::new());
            assert_eq!(load.cartridge, "");
            assert_eq!(load.notes, None);
        }
    }
}
