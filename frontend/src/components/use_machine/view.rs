//! View rendering for the usage wizard: a step indicator, the body of the
//! current step and the back/next navigation.

use forge_common::wizard::WizardStep;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::helpers::{format_cost, parse_markdown_to_html, parse_whole};

use super::messages::Msg;
use super::slot::slot_view;
use super::state::UseMachineComponent;

const USAGE_POLICY: &str = r#"
## Machine Usage Policy

- Only start a job on a machine you have been trained on.
- Stay nearby for the first layers of every print and check on it regularly.
- Report failed prints and broken machines with **Fail a Machine**.
- Remove your finished work promptly so the next maker can start.
- Material taken from The Forge is billed at the listed rate for the amount you entered.
"#;

pub fn view(component: &UseMachineComponent, ctx: &Context<UseMachineComponent>) -> Html {
    let link = ctx.link();
    let step = component.wizard.step();

    html! {
        <div class="use-machine">
            { build_step_indicator(step) }
            <section class="wizard-step">
                <h2>{ step.title() }</h2>
                {
                    match step {
                        WizardStep::MachineSelect => build_machine_step(component, link),
                        WizardStep::ResourceSelect => build_resource_step(component, link),
                        WizardStep::Duration => build_duration_step(component, link),
                        WizardStep::PolicySubmit => build_policy_step(component, link),
                    }
                }
            </section>
            { build_navigation(component, link) }
        </div>
    }
}

fn build_step_indicator(current: WizardStep) -> Html {
    html! {
        <ol class="step-indicator">
            { for WizardStep::ALL.iter().map(|step| {
                let class = classes!(
                    "step",
                    (*step == current).then_some("active"),
                    (*step < current).then_some("done"),
                );
                html! { <li {class}>{ format!("{}. {}", step.number(), step.title()) }</li> }
            }) }
        </ol>
    }
}

fn build_machine_step(component: &UseMachineComponent, link: &Scope<UseMachineComponent>) -> Html {
    if component.machines_loading {
        return html! { <p class="loading">{"Loading machines..."}</p> };
    }
    let selected = component.wizard.machine_id().unwrap_or_default().to_string();

    html! {
        <>
        <label class="field">
            <span>{"Machine"}</span>
            <select onchange={link.callback(|e: Event| {
                let value = e.target_unchecked_into::<HtmlSelectElement>().value();
                Msg::SelectMachine((!value.is_empty()).then_some(value))
            })}>
                <option value="" selected={selected.is_empty()}>{"Select a machine"}</option>
                { for component.machines.iter().map(|machine| {
                    let label = match &machine.group {
                        Some(group) => format!("{} ({})", machine.name, group),
                        None => machine.name.clone(),
                    };
                    html! {
                        <option value={machine.id.clone()} selected={machine.id == selected}>{ label }</option>
                    }
                }) }
            </select>
        </label>
        if component.wizard.schema_load_failed() {
            <p class="error">
                {"This machine could not be loaded. "}
                <button class="btn link" onclick={link.callback(|_| Msg::RetrySchema)}>{"Retry"}</button>
            </p>
        }
        </>
    }
}

fn build_resource_step(component: &UseMachineComponent, link: &Scope<UseMachineComponent>) -> Html {
    let Some(schema) = component.wizard.schema() else {
        return html! { <p class="loading">{"Loading machine..."}</p> };
    };

    if schema.resource_slots.is_empty() {
        return html! { <p>{ format!("{} does not use any resources.", schema.name) }</p> };
    }

    html! {
        <div class="resource-slots">
            { for schema.resource_slots.iter().filter_map(|slot| {
                component
                    .wizard
                    .slots()
                    .get(&slot.resource_slot_id)
                    .map(|element| slot_view(slot, element, link))
            }) }
        </div>
    }
}

fn build_duration_step(component: &UseMachineComponent, link: &Scope<UseMachineComponent>) -> Html {
    html! {
        <div class="duration">
            <label class="field">
                <span>{"Hours"}</span>
                <input
                    type="number"
                    min="0"
                    value={component.wizard.hours().to_string()}
                    onchange={link.callback(|e: Event| {
                        Msg::SetHours(parse_whole(&e.target_unchecked_into::<HtmlInputElement>().value()))
                    })}
                />
            </label>
            <label class="field">
                <span>{"Minutes"}</span>
                <input
                    type="number"
                    min="0"
                    max="59"
                    value={component.wizard.minutes().to_string()}
                    onchange={link.callback(|e: Event| {
                        Msg::SetMinutes(parse_whole(&e.target_unchecked_into::<HtmlInputElement>().value()))
                    })}
                />
            </label>
        </div>
    }
}

fn build_policy_step(component: &UseMachineComponent, link: &Scope<UseMachineComponent>) -> Html {
    let policy_html = AttrValue::from(parse_markdown_to_html(USAGE_POLICY));
    let machine = component
        .selected_machine()
        .map(|machine| machine.name.clone())
        .unwrap_or_default();
    let seconds = component.wizard.duration_seconds();

    html! {
        <div class="policy">
            <div class="policy-text">{ Html::from_html_unchecked(policy_html) }</div>
            <dl class="summary">
                <dt>{"Machine"}</dt>
                <dd>{ machine }</dd>
                <dt>{"Duration"}</dt>
                <dd>{ format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60) }</dd>
                <dt>{"Total cost"}</dt>
                <dd>{ format_cost(component.wizard.total_cost()) }</dd>
            </dl>
            <label class="field checkbox">
                <input
                    type="checkbox"
                    checked={component.wizard.policy_accepted()}
                    onchange={link.callback(|e: Event| {
                        Msg::SetPolicyAccepted(e.target_unchecked_into::<HtmlInputElement>().checked())
                    })}
                />
                <span>{"I have read and agree to the machine usage policy"}</span>
            </label>
        </div>
    }
}

fn build_navigation(component: &UseMachineComponent, link: &Scope<UseMachineComponent>) -> Html {
    let step = component.wizard.step();

    html! {
        <div class="wizard-nav">
            if step != WizardStep::MachineSelect {
                <button class="btn secondary" onclick={link.callback(|_| Msg::Back)}>{"Back"}</button>
            }
            {
                match step.next() {
                    Some(next) => html! {
                        <button class="btn primary" onclick={link.callback(move |_| Msg::Advance(next))}>{"Next"}</button>
                    },
                    None => html! {
                        <button
                            class="btn primary"
                            disabled={component.submitting}
                            onclick={link.callback(|_| Msg::Submit)}
                        >
                            { if component.submitting { "Submitting..." } else { "Submit" } }
                        </button>
                    },
                }
            }
        </div>
    }
}
