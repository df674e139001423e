//! Request and response bodies exchanged with the REST API that are not
//! records in their own right.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One filled resource slot inside a [`MachineUsageRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceUsage {
    pub resource_id: String,
    pub amount: f64,
    pub is_own_material: bool,
}

/// Body of `POST /use/{machine_id}`.
///
/// `resource_usages` is keyed by slot id and only carries slots that resolved
/// to a concrete resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineUsageRequest {
    pub as_org_id: Option<String>,
    pub duration_seconds: u64,
    pub resource_usages: BTreeMap<String, ResourceUsage>,
}

/// Error body the API attaches to non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

/// Body of a successful `POST /login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    /// Unix seconds.
    #[serde(default)]
    pub expires_at: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_request_serializes_with_null_org() {
        let mut resource_usages = BTreeMap::new();
        resource_usages.insert(
            "slot-1".to_string(),
            ResourceUsage {
                resource_id: "res-1".to_string(),
                amount: 12.5,
                is_own_material: false,
            },
        );
        let request = MachineUsageRequest {
            as_org_id: None,
            duration_seconds: 5400,
            resource_usages,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "as_org_id": null,
                "duration_seconds": 5400,
                "resource_usages": {
                    "slot-1": {"resource_id": "res-1", "amount": 12.5, "is_own_material": false}
                }
            })
        );
    }

    #[test]
    fn login_response_reads_expiry_seconds() {
        let login: LoginResponse =
            serde_json::from_str(r#"{"access_token":"tok","expires_at":1760900000}"#).unwrap();
        assert_eq!(login.access_token, "tok");
        assert_eq!(login.expires_at, Some(1_760_900_000));

        let bare: LoginResponse = serde_json::from_str(r#"{"access_token":"tok"}"#).unwrap();
        assert_eq!(bare.expires_at, None);
    }
}
