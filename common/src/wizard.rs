//! "Use a Machine" wizard.
//!
//! A linear four step flow: pick a machine, fill its resource slots, enter the
//! usage duration, then accept the usage policy and submit. Moving forward is
//! guarded per step; moving back is always allowed. Every operation is a plain
//! state transition on [`UsageWizard`] so the UI only has to forward events and
//! render the result.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use crate::catalog::{self, SlotEvent};
use crate::model::resource::Resource;
use crate::model::schema::MachineUsageSchema;
use crate::requests::{MachineUsageRequest, ResourceUsage};
use crate::slots::{ResourceSlotElement, SlotAggregator};

/// Amount above which a single spool is not expected to last the whole job.
pub const SPOOL_WARNING_THRESHOLD: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WizardStep {
    MachineSelect = 1,
    ResourceSelect = 2,
    Duration = 3,
    PolicySubmit = 4,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::MachineSelect,
        WizardStep::ResourceSelect,
        WizardStep::Duration,
        WizardStep::PolicySubmit,
    ];

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|step| step.number() == number)
    }

    pub fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    /// Previous step, staying on the first one.
    pub fn previous(self) -> Self {
        Self::from_number(self.number().saturating_sub(1)).unwrap_or(WizardStep::MachineSelect)
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::MachineSelect => "Select a Machine",
            WizardStep::ResourceSelect => "Select Resources",
            WizardStep::Duration => "Usage Duration",
            WizardStep::PolicySubmit => "Usage Policy",
        }
    }
}

/// Reasons a step transition or the submission is refused. The display text is
/// shown to the user as is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("Please select a machine first.")]
    NoMachineSelected,
    #[error("The selected machine is still loading, please wait a moment.")]
    SchemaNotLoaded,
    #[error("The selected machine could not be loaded. Please select it again to retry.")]
    SchemaUnavailable,
    #[error("{slot} does not allow using your own material.")]
    OwnMaterialNotAllowed { slot: String },
    #[error("{slot} cannot be left empty. Please enter the amount you will use.")]
    EmptySlot { slot: String },
    #[error("Please select a resource for {slot}.")]
    MissingResource { slot: String },
    #[error("Please enter how long you will be using the machine.")]
    ZeroDuration,
    #[error("You must agree to the usage policy before submitting.")]
    PolicyNotAccepted,
    #[error("Please complete the previous steps before submitting.")]
    NotReady,
    #[error("Cannot go from step {from} to step {to}.")]
    InvalidTransition { from: u8, to: u8 },
}

/// Non-blocking notices raised when leaving the resource step.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardWarning {
    SpoolChange { slot: String, amount: f64 },
    OwnMaterialSufficiency { slot: String, amount: f64 },
}

impl fmt::Display for WizardWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WizardWarning::SpoolChange { slot, amount } => write!(
                f,
                "{slot}: {amount} is more than a single spool holds. A volunteer will need to \
                 change the filament spool partway through your print."
            ),
            WizardWarning::OwnMaterialSufficiency { slot, amount } => write!(
                f,
                "{slot}: {amount} is a lot of material. Make sure the material you are \
                 bringing is enough to finish the job."
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UsageWizard {
    step: WizardStep,
    machine_id: Option<String>,
    schema: Option<MachineUsageSchema>,
    /// The last schema fetch for `machine_id` failed.
    schema_failed: bool,
    slots: SlotAggregator,
    hours: u32,
    minutes: u32,
    policy_accepted: bool,
    as_org_id: Option<String>,
}

impl Default for UsageWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl UsageWizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::MachineSelect,
            machine_id: None,
            schema: None,
            schema_failed: false,
            slots: SlotAggregator::default(),
            hours: 0,
            minutes: 0,
            policy_accepted: false,
            as_org_id: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn machine_id(&self) -> Option<&str> {
        self.machine_id.as_deref()
    }

    pub fn schema(&self) -> Option<&MachineUsageSchema> {
        self.schema.as_ref()
    }

    pub fn schema_load_failed(&self) -> bool {
        self.schema_failed
    }

    pub fn slots(&self) -> &SlotAggregator {
        &self.slots
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn policy_accepted(&self) -> bool {
        self.policy_accepted
    }

    pub fn as_org_id(&self) -> Option<&str> {
        self.as_org_id.as_deref()
    }

    pub fn duration_seconds(&self) -> u64 {
        u64::from(self.hours) * 3600 + u64::from(self.minutes) * 60
    }

    pub fn total_cost(&self) -> f64 {
        self.slots.total_cost()
    }

    /// Changes the selected machine and drops the previous machine's schema
    /// and slots. Returns `true` when a schema fetch is now needed, which
    /// includes reselecting a machine whose schema never arrived.
    pub fn select_machine(&mut self, machine_id: Option<String>) -> bool {
        if machine_id == self.machine_id {
            if self.machine_id.is_none() || self.schema.is_some() {
                return false;
            }
            log::debug!("refetching schema for {:?}", machine_id);
            self.schema_failed = false;
            return true;
        }
        log::debug!("machine selection changed to {:?}", machine_id);
        self.machine_id = machine_id;
        self.schema = None;
        self.schema_failed = false;
        self.slots = SlotAggregator::default();
        self.machine_id.is_some()
    }

    /// Records that the schema fetch for `machine_id` failed. Failures for a
    /// machine that is no longer selected are ignored.
    pub fn schema_failed(&mut self, machine_id: &str) -> bool {
        if self.machine_id.as_deref() != Some(machine_id) || self.schema.is_some() {
            return false;
        }
        self.schema_failed = true;
        true
    }

    /// Installs the schema fetched for `machine_id` and rebuilds the slots.
    /// A schema for a machine that is no longer selected is dropped.
    pub fn load_schema(&mut self, machine_id: &str, schema: MachineUsageSchema) -> bool {
        if self.machine_id.as_deref() != Some(machine_id) {
            log::debug!("discarding stale schema for machine {}", machine_id);
            return false;
        }
        self.slots = SlotAggregator::from_schema(&schema);
        self.schema = Some(schema);
        self.schema_failed = false;
        true
    }

    /// Routes a slot input event through the catalog resolver and stores the
    /// recomputed element.
    pub fn update_slot(&mut self, slot_id: &str, event: SlotEvent) -> bool {
        let Some(slot) = self.schema.as_ref().and_then(|schema| schema.slot(slot_id)) else {
            log::warn!("update for resource slot {} outside the current schema", slot_id);
            return false;
        };
        let Some(previous) = self.slots.get(slot_id) else {
            return false;
        };
        let next = catalog::reduce(slot, previous, event);
        self.slots.replace(next)
    }

    /// The concrete resource a slot currently resolves to.
    pub fn resolved_resource(&self, slot_id: &str) -> Option<&Resource> {
        let slot = self.schema.as_ref()?.slot(slot_id)?;
        let resource_id = self.slots.get(slot_id)?.resource_id.as_deref()?;
        slot.valid_resources
            .iter()
            .find(|resource| resource.id == resource_id)
    }

    pub fn set_duration(&mut self, hours: u32, minutes: u32) {
        self.hours = hours;
        self.minutes = minutes;
    }

    pub fn set_policy_accepted(&mut self, accepted: bool) {
        self.policy_accepted = accepted;
    }

    pub fn set_org(&mut self, as_org_id: Option<String>) {
        self.as_org_id = as_org_id;
    }

    /// Moves forward to `target`, which must be the step right after the
    /// current one. On failure the step does not change.
    pub fn advance(&mut self, target: WizardStep) -> Result<Vec<WizardWarning>, WizardError> {
        if self.step.next() != Some(target) {
            return Err(WizardError::InvalidTransition {
                from: self.step.number(),
                to: target.number(),
            });
        }

        let warnings = match target {
            WizardStep::ResourceSelect => {
                self.check_machine()?;
                Vec::new()
            }
            WizardStep::Duration => self.check_slots()?,
            WizardStep::PolicySubmit => {
                self.check_duration()?;
                Vec::new()
            }
            WizardStep::MachineSelect => {
                return Err(WizardError::InvalidTransition {
                    from: self.step.number(),
                    to: target.number(),
                });
            }
        };

        self.step = target;
        Ok(warnings)
    }

    /// Goes back one step. Never fails; stays put on the first step.
    pub fn back(&mut self) -> WizardStep {
        self.step = self.step.previous();
        self.step
    }

    /// Builds the usage request for the selected machine.
    pub fn submission(&self) -> Result<(String, MachineUsageRequest), WizardError> {
        if self.step != WizardStep::PolicySubmit {
            return Err(WizardError::NotReady);
        }
        if !self.policy_accepted {
            return Err(WizardError::PolicyNotAccepted);
        }
        let machine_id = self
            .machine_id
            .clone()
            .ok_or(WizardError::NoMachineSelected)?;

        let resource_usages: BTreeMap<String, ResourceUsage> = self
            .slots
            .elements()
            .iter()
            .filter_map(|element| {
                element.resource_id.as_ref().map(|resource_id| {
                    (
                        element.slot_id.clone(),
                        ResourceUsage {
                            resource_id: resource_id.clone(),
                            amount: element.amount,
                            is_own_material: element.own,
                        },
                    )
                })
            })
            .collect();

        Ok((
            machine_id,
            MachineUsageRequest {
                as_org_id: self.as_org_id.clone(),
                duration_seconds: self.duration_seconds(),
                resource_usages,
            },
        ))
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn check_machine(&self) -> Result<(), WizardError> {
        if self.machine_id.is_none() {
            return Err(WizardError::NoMachineSelected);
        }
        if self.schema.is_none() {
            return Err(if self.schema_failed {
                WizardError::SchemaUnavailable
            } else {
                WizardError::SchemaNotLoaded
            });
        }
        Ok(())
    }

    fn check_slots(&self) -> Result<Vec<WizardWarning>, WizardError> {
        let schema = self.schema.as_ref().ok_or(WizardError::SchemaNotLoaded)?;
        let mut warnings = Vec::new();

        for slot in &schema.resource_slots {
            let blank = ResourceSlotElement::empty(&slot.resource_slot_id);
            let element = self.slots.get(&slot.resource_slot_id).unwrap_or(&blank);
            let name = || slot.display_name.clone();

            if element.own && !slot.allow_own_material {
                return Err(WizardError::OwnMaterialNotAllowed { slot: name() });
            }
            if !slot.allow_empty && element.amount <= 0.0 && !element.own {
                return Err(WizardError::EmptySlot { slot: name() });
            }
            if !slot.allow_empty && element.resource_id.is_none() {
                return Err(WizardError::MissingResource { slot: name() });
            }

            if element.amount > SPOOL_WARNING_THRESHOLD {
                warnings.push(if element.own {
                    WizardWarning::OwnMaterialSufficiency {
                        slot: name(),
                        amount: element.amount,
                    }
                } else {
                    WizardWarning::SpoolChange {
                        slot: name(),
                        amount: element.amount,
                    }
                });
            }
        }

        Ok(warnings)
    }

    fn check_duration(&self) -> Result<(), WizardError> {
        if self.hours == 0 && self.minutes == 0 {
            return Err(WizardError::ZeroDuration);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::schema::ResourceSlotSchema;

    fn pla(id: &str, color: &str) -> Resource {
        Resource {
            id: id.to_string(),
            name: "PLA".to_string(),
            brand: Some("Hatchbox".to_string()),
            color: Some(color.to_string()),
            units: "g".to_string(),
            cost: "0.05".to_string(),
        }
    }

    fn slot(id: &str, display: &str, allow_own: bool, allow_empty: bool) -> ResourceSlotSchema {
        ResourceSlotSchema {
            resource_slot_id: id.to_string(),
            display_name: display.to_string(),
            valid_resources: vec![pla(&format!("{id}-black"), "Black"), pla(&format!("{id}-white"), "White")],
            allow_own_material: allow_own,
            allow_empty,
        }
    }

    fn schema(slots: Vec<ResourceSlotSchema>) -> MachineUsageSchema {
        MachineUsageSchema {
            id: "m1".to_string(),
            name: "Prusa 1".to_string(),
            group_name: Some("Prusas".to_string()),
            type_name: Some("MK3S".to_string()),
            resource_slots: slots,
        }
    }

    fn on_resource_step(slots: Vec<ResourceSlotSchema>) -> UsageWizard {
        let mut wizard = UsageWizard::new();
        assert!(wizard.select_machine(Some("m1".to_string())));
        assert!(wizard.load_schema("m1", schema(slots)));
        wizard.advance(WizardStep::ResourceSelect).unwrap();
        wizard
    }

    fn fill(wizard: &mut UsageWizard, slot_id: &str, color: &str, amount: f64) {
        wizard.update_slot(slot_id, SlotEvent::SelectMaterial(Some("PLA".into())));
        wizard.update_slot(slot_id, SlotEvent::SelectBrand(Some("Hatchbox".into())));
        wizard.update_slot(slot_id, SlotEvent::SelectColor(Some(color.into())));
        wizard.update_slot(slot_id, SlotEvent::SetAmount(amount));
    }

    #[test]
    fn failed_schema_fetch_can_be_retried_by_reselecting() {
        let mut wizard = UsageWizard::new();
        assert!(wizard.select_machine(Some("m1".to_string())));
        assert!(wizard.schema_failed("m1"));
        assert!(wizard.schema_load_failed());
        assert_eq!(
            wizard.advance(WizardStep::ResourceSelect),
            Err(WizardError::SchemaUnavailable)
        );

        assert!(wizard.select_machine(Some("m1".to_string())));
        assert!(!wizard.schema_load_failed());
        assert_eq!(
            wizard.advance(WizardStep::ResourceSelect),
            Err(WizardError::SchemaNotLoaded)
        );
        assert!(wizard.load_schema("m1", schema(vec![slot("s", "Filament", false, true)])));
        assert!(!wizard.select_machine(Some("m1".to_string())));
        assert!(wizard.advance(WizardStep::ResourceSelect).is_ok());
    }

    #[test]
    fn schema_failure_for_another_machine_is_ignored() {
        let mut wizard = UsageWizard::new();
        wizard.select_machine(Some("m2".to_string()));
        assert!(!wizard.schema_failed("m1"));
        assert_eq!(
            wizard.advance(WizardStep::ResourceSelect),
            Err(WizardError::SchemaNotLoaded)
        );
    }

    #[test]
    fn starts_on_machine_select() {
        let wizard = UsageWizard::new();
        assert_eq!(wizard.step(), WizardStep::MachineSelect);
        assert_eq!(wizard.machine_id(), None);
    }

    #[test]
    fn cannot_leave_step_one_without_a_machine() {
        let mut wizard = UsageWizard::new();
        assert_eq!(
            wizard.advance(WizardStep::ResourceSelect),
            Err(WizardError::NoMachineSelected)
        );
        assert_eq!(wizard.step(), WizardStep::MachineSelect);
    }

    #[test]
    fn waits_for_the_schema_before_leaving_step_one() {
        let mut wizard = UsageWizard::new();
        wizard.select_machine(Some("m1".to_string()));
        assert_eq!(
            wizard.advance(WizardStep::ResourceSelect),
            Err(WizardError::SchemaNotLoaded)
        );
        assert_eq!(wizard.step(), WizardStep::MachineSelect);
    }

    #[test]
    fn stale_schema_is_discarded() {
        let mut wizard = UsageWizard::new();
        wizard.select_machine(Some("m1".to_string()));
        wizard.select_machine(Some("m2".to_string()));
        assert!(!wizard.load_schema("m1", schema(vec![slot("s", "Filament", false, true)])));
        assert!(wizard.schema().is_none());
    }

    #[test]
    fn reselecting_a_machine_replaces_schema_and_slots() {
        let mut wizard = UsageWizard::new();
        wizard.select_machine(Some("m1".to_string()));
        wizard.load_schema("m1", schema(vec![slot("s", "Filament", false, true)]));
        fill(&mut wizard, "s", "Black", 10.0);

        assert!(!wizard.select_machine(Some("m1".to_string())));
        assert!(wizard.slots().get("s").unwrap().resource_id.is_some());

        assert!(wizard.select_machine(Some("m2".to_string())));
        assert!(wizard.schema().is_none());
        assert!(wizard.slots().is_empty());
        // No schema for m2 yet, so selecting it again asks for another fetch.
        assert!(wizard.select_machine(Some("m2".to_string())));
        assert!(!wizard.select_machine(None) && wizard.machine_id().is_none());
    }

    #[test]
    fn empty_forbidden_slot_blocks_with_its_name() {
        let mut wizard = on_resource_step(vec![slot("s", "Filament", false, false)]);
        let err = wizard.advance(WizardStep::Duration).unwrap_err();
        assert_eq!(err, WizardError::EmptySlot { slot: "Filament".to_string() });
        assert!(err.to_string().contains("Filament"));
        assert_eq!(wizard.step(), WizardStep::ResourceSelect);
    }

    #[test]
    fn own_material_where_forbidden_blocks() {
        let mut wizard = on_resource_step(vec![slot("s", "Resin", false, true)]);
        wizard.update_slot("s", SlotEvent::SetOwn(true));
        assert_eq!(
            wizard.advance(WizardStep::Duration),
            Err(WizardError::OwnMaterialNotAllowed { slot: "Resin".to_string() })
        );
        assert_eq!(wizard.step(), WizardStep::ResourceSelect);
    }

    #[test]
    fn required_slot_needs_a_resolved_resource() {
        let mut wizard = on_resource_step(vec![slot("s", "Filament", true, false)]);
        wizard.update_slot("s", SlotEvent::SetAmount(20.0));
        assert_eq!(
            wizard.advance(WizardStep::Duration),
            Err(WizardError::MissingResource { slot: "Filament".to_string() })
        );
    }

    #[test]
    fn own_material_skips_the_amount_check() {
        let mut wizard = on_resource_step(vec![slot("s", "Filament", true, false)]);
        wizard.update_slot("s", SlotEvent::SelectMaterial(Some("PLA".into())));
        wizard.update_slot("s", SlotEvent::SetOwn(true));
        assert_eq!(wizard.advance(WizardStep::Duration), Ok(Vec::new()));
    }

    #[test]
    fn optional_empty_slot_passes() {
        let mut wizard = on_resource_step(vec![slot("s", "Support", false, true)]);
        assert_eq!(wizard.advance(WizardStep::Duration), Ok(Vec::new()));
    }

    #[test]
    fn large_amount_warns_but_advances() {
        let mut wizard = on_resource_step(vec![slot("s", "Filament", false, false)]);
        fill(&mut wizard, "s", "Black", 1500.0);

        let warnings = wizard.advance(WizardStep::Duration).unwrap();
        assert_eq!(
            warnings,
            vec![WizardWarning::SpoolChange { slot: "Filament".to_string(), amount: 1500.0 }]
        );
        assert_eq!(wizard.step(), WizardStep::Duration);
    }

    #[test]
    fn large_own_amount_gets_the_other_warning() {
        let mut wizard = on_resource_step(vec![slot("s", "Filament", true, false)]);
        fill(&mut wizard, "s", "White", 1200.0);
        wizard.update_slot("s", SlotEvent::SetOwn(true));

        let warnings = wizard.advance(WizardStep::Duration).unwrap();
        assert!(matches!(
            warnings.as_slice(),
            [WizardWarning::OwnMaterialSufficiency { .. }]
        ));
        assert!(warnings[0].to_string().starts_with("Filament"));
    }

    #[test]
    fn zero_duration_blocks_step_four() {
        let mut wizard = on_resource_step(vec![]);
        wizard.advance(WizardStep::Duration).unwrap();
        assert_eq!(
            wizard.advance(WizardStep::PolicySubmit),
            Err(WizardError::ZeroDuration)
        );
        assert_eq!(wizard.step(), WizardStep::Duration);

        wizard.set_duration(0, 45);
        assert!(wizard.advance(WizardStep::PolicySubmit).is_ok());
    }

    #[test]
    fn skipping_steps_is_refused() {
        let mut wizard = UsageWizard::new();
        wizard.select_machine(Some("m1".to_string()));
        wizard.load_schema("m1", schema(vec![]));
        assert_eq!(
            wizard.advance(WizardStep::Duration),
            Err(WizardError::InvalidTransition { from: 1, to: 3 })
        );
        assert_eq!(wizard.step(), WizardStep::MachineSelect);
    }

    #[test]
    fn back_always_succeeds_and_clamps() {
        let mut wizard = on_resource_step(vec![]);
        wizard.advance(WizardStep::Duration).unwrap();
        wizard.set_duration(1, 0);
        wizard.advance(WizardStep::PolicySubmit).unwrap();

        assert_eq!(wizard.back(), WizardStep::Duration);
        assert_eq!(wizard.back(), WizardStep::ResourceSelect);
        assert_eq!(wizard.back(), WizardStep::MachineSelect);
        assert_eq!(wizard.back(), WizardStep::MachineSelect);
    }

    #[test]
    fn submit_requires_the_policy() {
        let mut wizard = on_resource_step(vec![]);
        wizard.advance(WizardStep::Duration).unwrap();
        wizard.set_duration(2, 0);
        wizard.advance(WizardStep::PolicySubmit).unwrap();

        assert_eq!(wizard.submission(), Err(WizardError::PolicyNotAccepted));
        wizard.set_policy_accepted(true);
        assert!(wizard.submission().is_ok());
    }

    #[test]
    fn submit_before_the_last_step_is_refused() {
        let mut wizard = on_resource_step(vec![]);
        wizard.set_policy_accepted(true);
        assert_eq!(wizard.submission(), Err(WizardError::NotReady));
    }

    #[test]
    fn payload_only_carries_resolved_slots() {
        let mut wizard = on_resource_step(vec![
            slot("filament", "Filament", true, false),
            slot("support", "Support", false, true),
        ]);
        fill(&mut wizard, "filament", "White", 42.0);
        wizard.update_slot("filament", SlotEvent::SetOwn(true));
        wizard.update_slot("support", SlotEvent::SetAmount(5.0));
        wizard.advance(WizardStep::Duration).unwrap();
        wizard.set_duration(1, 30);
        wizard.advance(WizardStep::PolicySubmit).unwrap();
        wizard.set_policy_accepted(true);
        wizard.set_org(Some("org-7".to_string()));

        let (machine_id, request) = wizard.submission().unwrap();
        assert_eq!(machine_id, "m1");
        assert_eq!(request.duration_seconds, 5400);
        assert_eq!(request.as_org_id.as_deref(), Some("org-7"));
        assert_eq!(request.resource_usages.len(), 1);
        let usage = &request.resource_usages["filament"];
        assert_eq!(usage.resource_id, "filament-white");
        assert_eq!(usage.amount, 42.0);
        assert!(usage.is_own_material);
    }

    #[test]
    fn resolved_resource_and_cost_follow_the_slots() {
        let mut wizard = on_resource_step(vec![slot("s", "Filament", false, false)]);
        fill(&mut wizard, "s", "Black", 100.0);
        assert_eq!(wizard.resolved_resource("s").map(|r| r.id.as_str()), Some("s-black"));
        assert!((wizard.total_cost() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn updates_for_unknown_slots_are_ignored() {
        let mut wizard = on_resource_step(vec![slot("s", "Filament", false, false)]);
        assert!(!wizard.update_slot("nope", SlotEvent::SetAmount(3.0)));
    }

    #[test]
    fn reset_returns_to_a_fresh_wizard() {
        let mut wizard = on_resource_step(vec![]);
        wizard.reset();
        assert_eq!(wizard, UsageWizard::new());
    }

    #[test]
    fn step_numbers_round_trip() {
        for step in WizardStep::ALL {
            assert_eq!(WizardStep::from_number(step.number()), Some(step));
        }
        assert_eq!(WizardStep::from_number(0), None);
        assert_eq!(WizardStep::PolicySubmit.next(), None);
    }
}
