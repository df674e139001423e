use forge_common::catalog::SlotEvent;
use forge_common::model::machine::Machine;
use forge_common::model::schema::MachineUsageSchema;
use forge_common::outcome::SubmitOutcome;
use forge_common::wizard::WizardStep;

#[derive(Clone)]
pub enum Msg {
    MachinesLoaded(Vec<Machine>),
    MachinesFailed(String),
    SelectMachine(Option<String>),
    SchemaLoaded { machine_id: String, schema: MachineUsageSchema },
    SchemaFailed { machine_id: String, error: String },
    RetrySchema,
    Slot { slot_id: String, event: SlotEvent },
    SetHours(u32),
    SetMinutes(u32),
    SetPolicyAccepted(bool),
    Advance(WizardStep),
    Back,
    Submit,
    Submitted(SubmitOutcome),
}
