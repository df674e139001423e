//! "Fail a Machine" form. The submit button only appears once a machine is
//! selected; the form clears after every submission attempt.

use forge_common::failure::{FailureReport, NOTICEABLE_FAULTS};
use forge_common::model::machine::Machine;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::ApiHandle;
use crate::helpers::{parse_whole, show_alert, show_toast};

pub enum Msg {
    MachinesLoaded(Vec<Machine>),
    MachinesFailed(String),
    SelectMachine(Option<String>),
    SetPercent(u32),
    SetErrorMessage(String),
    ToggleFault(&'static str),
    Submit,
    Submitted(Result<(), String>),
}

#[derive(Properties, PartialEq, Clone)]
pub struct FailMachineProps {
    pub api: ApiHandle,
}

pub struct FailMachineComponent {
    machines: Vec<Machine>,
    report: FailureReport,
    submitting: bool,
}

impl Component for FailMachineComponent {
    type Message = Msg;
    type Properties = FailMachineProps;

    fn create(ctx: &Context<Self>) -> Self {
        let api = ctx.props().api.clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            match api.machines().await {
                Ok(machines) => link.send_message(Msg::MachinesLoaded(machines)),
                Err(err) => link.send_message(Msg::MachinesFailed(err.to_string())),
            }
        });

        Self {
            machines: Vec::new(),
            report: FailureReport::default(),
            submitting: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::MachinesLoaded(machines) => {
                self.machines = machines;
                true
            }
            Msg::MachinesFailed(error) => {
                gloo_console::error!(format!("loading machines failed: {}", error));
                show_toast(&format!("Could not load machines. {}", error));
                false
            }
            Msg::SelectMachine(machine_id) => {
                self.report.machine_id = machine_id;
                true
            }
            Msg::SetPercent(percent) => {
                if let Err(err) = self.report.set_percent_completed(percent) {
                    show_alert(&err.to_string());
                }
                true
            }
            Msg::SetErrorMessage(message) => {
                self.report.error_message = message;
                false
            }
            Msg::ToggleFault(fault) => {
                self.report.toggle_fault(fault);
                true
            }
            Msg::Submit => {
                if self.submitting {
                    return false;
                }
                let machine_id = match self.report.validate() {
                    Ok(machine_id) => machine_id.to_string(),
                    Err(err) => {
                        show_alert(&err.to_string());
                        return false;
                    }
                };
                self.submitting = true;
                let report = self.report.clone();
                let api = ctx.props().api.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api.fail_machine(&machine_id, &report).await.map_err(|err| err.to_string());
                    link.send_message(Msg::Submitted(result));
                });
                true
            }
            Msg::Submitted(result) => {
                self.submitting = false;
                match result {
                    Ok(()) => show_toast("Thanks! The machine has been marked as failed."),
                    Err(error) => {
                        gloo_console::error!(format!("failure report rejected: {}", error));
                        show_alert(&format!("Could not report the failure. {}", error));
                    }
                }
                self.report.reset_fields();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let selected = self.report.machine_id.clone().unwrap_or_default();

        html! {
            <form class="fail-machine" onsubmit={link.callback(|e: SubmitEvent| {
                e.prevent_default();
                Msg::Submit
            })}>
                <h2>{"Fail a Machine"}</h2>
                <label class="field">
                    <span>{"Machine"}</span>
                    <select onchange={link.callback(|e: Event| {
                        let value = e.target_unchecked_into::<HtmlSelectElement>().value();
                        Msg::SelectMachine((!value.is_empty()).then_some(value))
                    })}>
                        <option value="" selected={selected.is_empty()}>{"Select a machine"}</option>
                        { for self.machines.iter().map(|machine| html! {
                            <option value={machine.id.clone()} selected={machine.id == selected}>{ machine.name.clone() }</option>
                        }) }
                    </select>
                </label>
                <label class="field">
                    <span>{"Percent completed"}</span>
                    <input
                        type="number"
                        min="0"
                        max="100"
                        value={self.report.percent_completed.to_string()}
                        onchange={link.callback(|e: Event| {
                            Msg::SetPercent(parse_whole(&e.target_unchecked_into::<HtmlInputElement>().value()))
                        })}
                    />
                </label>
                <label class="field">
                    <span>{"Printer error message"}</span>
                    <textarea
                        value={self.report.error_message.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::SetErrorMessage(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                        })}
                    />
                </label>
                <fieldset class="faults">
                    <legend>{"Noticeable faults"}</legend>
                    { for NOTICEABLE_FAULTS.into_iter().map(|fault| {
                        html! {
                            <label class="field checkbox">
                                <input
                                    type="checkbox"
                                    checked={self.report.has_fault(fault)}
                                    onchange={link.callback(move |_| Msg::ToggleFault(fault))}
                                />
                                <span>{ fault }</span>
                            </label>
                        }
                    }) }
                </fieldset>
                if self.report.machine_id.is_some() {
                    <button type="submit" class="btn primary" disabled={self.submitting}>{"Submit"}</button>
                }
            </form>
        }
    }
}
