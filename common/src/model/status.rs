use serde::{Deserialize, Serialize};

/// Live state of one machine as published by the public `GET /machinestatus`.
///
/// `usage_start` is kept as the raw timestamp string; parsing happens when the
/// feed is normalized (see `crate::status`). `usage_duration` is in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineStatus {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub in_use: bool,
    #[serde(default)]
    pub failed: bool,
    #[serde(default)]
    pub failed_at: Option<String>,
    #[serde(default)]
    pub usage_start: Option<String>,
    #[serde(default)]
    pub usage_duration: Option<u64>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub maintenance_mode: bool,
    #[serde(default)]
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineStatusGroup {
    pub name: String,
    #[serde(default)]
    pub machines: Vec<MachineStatus>,
}

/// Snapshot of every machine: grouped machines plus the ones without a group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MachineStatusResponse {
    #[serde(default)]
    pub groups: Vec<MachineStatusGroup>,
    #[serde(default)]
    pub loners: Vec<MachineStatus>,
}
