//! Slot state aggregator: one working record per resource slot of the selected
//! machine, kept in schema declaration order.

use crate::catalog::Selection;
use crate::model::schema::MachineUsageSchema;

/// Working state of one resource slot while the wizard is open.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceSlotElement {
    pub slot_id: String,
    /// Concrete resource the selection resolved to, if any.
    pub resource_id: Option<String>,
    pub selection: Selection,
    pub amount: f64,
    /// The user brings their own material; the slot costs nothing.
    pub own: bool,
    pub cost: f64,
}

impl ResourceSlotElement {
    pub fn empty(slot_id: &str) -> Self {
        Self {
            slot_id: slot_id.to_string(),
            resource_id: None,
            selection: Selection::default(),
            amount: 0.0,
            own: false,
            cost: 0.0,
        }
    }
}

/// Ordered collection of [`ResourceSlotElement`], at most one per slot id.
///
/// The set of slots is fixed by the schema it was built from: elements are
/// only ever replaced, never added or removed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotAggregator {
    elements: Vec<ResourceSlotElement>,
}

impl SlotAggregator {
    pub fn from_schema(schema: &MachineUsageSchema) -> Self {
        Self {
            elements: schema
                .resource_slots
                .iter()
                .map(|slot| ResourceSlotElement::empty(&slot.resource_slot_id))
                .collect(),
        }
    }

    /// Replaces the element with the same slot id. Elements for unknown slots
    /// are rejected and `false` is returned.
    pub fn replace(&mut self, element: ResourceSlotElement) -> bool {
        match self
            .elements
            .iter_mut()
            .find(|existing| existing.slot_id == element.slot_id)
        {
            Some(existing) => {
                *existing = element;
                true
            }
            None => {
                log::warn!("ignoring update for unknown resource slot {}", element.slot_id);
                false
            }
        }
    }

    pub fn get(&self, slot_id: &str) -> Option<&ResourceSlotElement> {
        self.elements.iter().find(|element| element.slot_id == slot_id)
    }

    pub fn elements(&self) -> &[ResourceSlotElement] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn total_cost(&self) -> f64 {
        self.elements.iter().map(|element| element.cost).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::schema::ResourceSlotSchema;

    fn schema(slot_ids: &[&str]) -> MachineUsageSchema {
        MachineUsageSchema {
            id: "m1".to_string(),
            name: "Prusa 1".to_string(),
            group_name: None,
            type_name: None,
            resource_slots: slot_ids
                .iter()
                .map(|id| ResourceSlotSchema {
                    resource_slot_id: id.to_string(),
                    display_name: id.to_uppercase(),
                    valid_resources: Vec::new(),
                    allow_own_material: false,
                    allow_empty: true,
                })
                .collect(),
        }
    }

    #[test]
    fn starts_with_one_blank_element_per_slot() {
        let slots = SlotAggregator::from_schema(&schema(&["filament", "support"]));
        let ids: Vec<_> = slots.elements().iter().map(|e| e.slot_id.as_str()).collect();
        assert_eq!(ids, vec!["filament", "support"]);
        assert!(slots.elements().iter().all(|e| e.resource_id.is_none()
            && e.selection == Selection::default()
            && e.amount == 0.0
            && !e.own
            && e.cost == 0.0));
    }

    #[test]
    fn replace_keeps_declaration_order() {
        let mut slots = SlotAggregator::from_schema(&schema(&["a", "b", "c"]));
        let mut updated = ResourceSlotElement::empty("c");
        updated.amount = 3.0;
        assert!(slots.replace(updated.clone()));
        let mut updated_a = ResourceSlotElement::empty("a");
        updated_a.amount = 1.0;
        assert!(slots.replace(updated_a));

        let ids: Vec<_> = slots.elements().iter().map(|e| e.slot_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(slots.get("c"), Some(&updated));
        assert_eq!(slots.get("a").map(|e| e.amount), Some(1.0));
    }

    #[test]
    fn unknown_slots_are_never_appended() {
        let mut slots = SlotAggregator::from_schema(&schema(&["a"]));
        assert!(!slots.replace(ResourceSlotElement::empty("zzz")));
        assert_eq!(slots.elements().len(), 1);
    }

    #[test]
    fn total_cost_sums_slots() {
        let mut slots = SlotAggregator::from_schema(&schema(&["a", "b"]));
        let mut a = ResourceSlotElement::empty("a");
        a.cost = 1.5;
        let mut b = ResourceSlotElement::empty("b");
        b.cost = 2.25;
        slots.replace(a);
        slots.replace(b);
        assert!((slots.total_cost() - 3.75).abs() < 1e-12);
    }
}
