use serde::{Deserialize, Serialize};

/// A machine as listed by `GET /machines`.
///
/// Only `id` and `name` are guaranteed by every endpoint that returns machines;
/// the descriptive fields fall back to their defaults when absent so a trimmed
/// listing still decodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Machine {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default, rename = "type")]
    pub machine_type: Option<String>,
    #[serde(default)]
    pub type_id: Option<String>,
    #[serde(default)]
    pub maintenance_mode: bool,
    #[serde(default)]
    pub disabled: bool,
}

impl Machine {
    /// Whether the machine can be offered in the usage wizard.
    pub fn is_usable(&self) -> bool {
        !self.maintenance_mode && !self.disabled
    }
}
