use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One resource group as returned by the management plane. ARM sends more
/// fields (id, type, properties); only the ones this tool reports survive
/// deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceGroup {
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

/// Request body for create-or-update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceGroupParams {
    pub location: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub tags: HashMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct AccessToken {
    pub token: String,
    pub expires_on: DateTime<Utc>,
}

impl AccessToken {
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_on
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_group_without_tags_defaults_to_empty_map() {
        let group: ResourceGroup =
            serde_json::from_str(r#"{"name":"rg1","location":"eastus"}"#).unwrap();
        assert_eq!(group.name, "rg1");
        assert_eq!(group.location, "eastus");
        assert!(group.tags.is_empty());
    }

    #[test]
    fn test_resource_group_ignores_unknown_provider_fields() {
        let raw = r#"{
            "id": "/subscriptions/sub-123/resourceGroups/rg1",
            "name": "rg1",
            "type": "Microsoft.Resources/resourceGroups",
            "location": "westeurope",
            "properties": {"provisioningState": "Succeeded"},
            "tags": {"Environment": "prod"}
        }"#;
        let group: ResourceGroup = serde_json::from_str(raw).unwrap();
        assert_eq!(group.tags.get("Environment").unwrap(), "prod");
    }

    #[test]
    fn test_params_omit_empty_tags_from_request_body() {
        let params = ResourceGroupParams {
            location: "West Europe".to_string(),
            tags: HashMap::new(),
        };
        let body = serde_json::to_value(&params).unwrap();
        assert_eq!(body, serde_json::json!({"location": "West Europe"}));
    }

    #[test]
    fn test_access_token_expiry() {
        let live = AccessToken {
            token: "tok".to_string(),
            expires_on: Utc::now() + chrono::Duration::seconds(3600),
        };
        assert!(!live.is_expired());

        let stale = AccessToken {
            token: "tok".to_string(),
            expires_on: Utc::now() - chrono::Duration::seconds(1),
        };
        assert!(stale.is_expired());
    }
}
