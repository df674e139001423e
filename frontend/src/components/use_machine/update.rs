//! Message handling for the usage wizard.
//!
//! Validation errors are shown in a blocking alert and leave the wizard where it
//! was. Warnings are shown as toasts and never block. Every submission outcome
//! is alerted and followed by a full page reload.

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::helpers::{reload_page, show_alert, show_toast};

use super::messages::Msg;
use super::state::UseMachineComponent;

pub fn update(component: &mut UseMachineComponent, ctx: &Context<UseMachineComponent>, msg: Msg) -> bool {
    match msg {
        Msg::MachinesLoaded(machines) => {
            component.machines = machines.into_iter().filter(|machine| machine.is_usable()).collect();
            component.machines_loading = false;
            true
        }
        Msg::MachinesFailed(error) => {
            gloo_console::error!(format!("loading machines failed: {}", error));
            component.machines_loading = false;
            show_toast(&format!("Could not load machines. {}", error));
            true
        }
        Msg::SelectMachine(machine_id) => {
            if component.wizard.select_machine(machine_id.clone()) {
                if let Some(machine_id) = machine_id {
                    fetch_schema(ctx, machine_id);
                }
            }
            true
        }
        Msg::SchemaLoaded { machine_id, schema } => component.wizard.load_schema(&machine_id, schema),
        Msg::SchemaFailed { machine_id, error } => {
            gloo_console::error!(format!("loading schema for {} failed: {}", machine_id, error));
            if component.wizard.schema_failed(&machine_id) {
                show_toast(&format!("Could not load the selected machine. {}", error));
                return true;
            }
            false
        }
        Msg::RetrySchema => {
            let machine_id = component.wizard.machine_id().map(str::to_string);
            if component.wizard.select_machine(machine_id.clone()) {
                if let Some(machine_id) = machine_id {
                    fetch_schema(ctx, machine_id);
                }
            }
            true
        }
        Msg::Slot { slot_id, event } => component.wizard.update_slot(&slot_id, event),
        Msg::SetHours(hours) => {
            let minutes = component.wizard.minutes();
            component.wizard.set_duration(hours, minutes);
            true
        }
        Msg::SetMinutes(minutes) => {
            let hours = component.wizard.hours();
            component.wizard.set_duration(hours, minutes);
            true
        }
        Msg::SetPolicyAccepted(accepted) => {
            component.wizard.set_policy_accepted(accepted);
            true
        }
        Msg::Advance(target) => match component.wizard.advance(target) {
            Ok(warnings) => {
                for warning in warnings {
                    show_toast(&warning.to_string());
                }
                true
            }
            Err(err) => {
                show_alert(&err.to_string());
                false
            }
        },
        Msg::Back => {
            component.wizard.back();
            true
        }
        Msg::Submit => {
            if component.submitting {
                return false;
            }
            match component.wizard.submission() {
                Ok((machine_id, request)) => {
                    component.submitting = true;
                    let api = ctx.props().api.clone();
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        let outcome = api.use_machine(&machine_id, &request).await;
                        link.send_message(Msg::Submitted(outcome));
                    });
                    true
                }
                Err(err) => {
                    show_alert(&err.to_string());
                    false
                }
            }
        }
        Msg::Submitted(outcome) => {
            if outcome.is_success() {
                gloo_console::log!("machine usage logged");
            } else {
                gloo_console::error!(format!("machine usage rejected: {:?}", outcome));
            }
            show_alert(&outcome.message());
            // The wizard always starts over from a fresh page.
            reload_page();
            false
        }
    }
}

fn fetch_schema(ctx: &Context<UseMachineComponent>, machine_id: String) {
    let api = ctx.props().api.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        match api.usage_schema(&machine_id).await {
            Ok(schema) => link.send_message(Msg::SchemaLoaded { machine_id, schema }),
            Err(err) => link.send_message(Msg::SchemaFailed {
                machine_id,
                error: err.to_string(),
            }),
        }
    });
}
