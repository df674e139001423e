use serde::{Deserialize, Serialize};

use crate::model::resource::Resource;

/// One resource slot a machine usage must (or may) fill, as returned by
/// `GET /use/{machine_id}/schema`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceSlotSchema {
    pub resource_slot_id: String,
    pub display_name: String,
    #[serde(default)]
    pub valid_resources: Vec<Resource>,
    #[serde(default)]
    pub allow_own_material: bool,
    #[serde(default)]
    pub allow_empty: bool,
}

/// Everything needed to log a usage of one machine.
///
/// The schema is fetched once per machine selection and never patched; a new
/// selection replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineUsageSchema {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub group_name: Option<String>,
    #[serde(default)]
    pub type_name: Option<String>,
    #[serde(default)]
    pub resource_slots: Vec<ResourceSlotSchema>,
}

impl MachineUsageSchema {
    pub fn slot(&self, slot_id: &str) -> Option<&ResourceSlotSchema> {
        self.resource_slots
            .iter()
            .find(|slot| slot.resource_slot_id == slot_id)
    }
}
