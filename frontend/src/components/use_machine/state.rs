use forge_common::model::machine::Machine;
use forge_common::wizard::UsageWizard;

pub struct UseMachineComponent {
    /// Machines offered in the first step. Machines in maintenance or disabled
    /// are left out.
    pub machines: Vec<Machine>,
    pub machines_loading: bool,
    pub wizard: UsageWizard,
    /// Set while `POST /use/{id}` is in flight so the button cannot double submit.
    pub submitting: bool,
}

impl UseMachineComponent {
    pub fn new() -> Self {
        Self {
            machines: Vec::new(),
            machines_loading: true,
            wizard: UsageWizard::new(),
            submitting: false,
        }
    }

    pub fn selected_machine(&self) -> Option<&Machine> {
        let id = self.wizard.machine_id()?;
        self.machines.iter().find(|machine| machine.id == id)
    }
}
