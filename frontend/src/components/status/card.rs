use chrono::{DateTime, FixedOffset, Utc};
use forge_common::status::{format_end_time, MachineState, MachineStatusView};
use yew::html::Scope;
use yew::prelude::*;

use super::{Msg, StatusBoard};

pub fn machine_card(
    machine: &MachineStatusView,
    now: DateTime<Utc>,
    highlight_failed: bool,
    link: &Scope<StatusBoard>,
) -> Html {
    let state = machine.state(now);
    let class = classes!(
        "machine-card",
        state.css_class(),
        (highlight_failed && state == MachineState::Failed).then_some("highlight"),
    );
    let machine_id = machine.id.clone();

    html! {
        <div {class} onclick={link.callback(move |_| Msg::ShowDetails(machine_id.clone()))}>
            <div class="machine-card-header">
                <h4>{ machine.name.clone() }</h4>
                <span class={classes!("state-badge", state.css_class())}>{ state.label() }</span>
            </div>
            if let Some(group) = &machine.group {
                <p class="machine-group">{ group.clone() }</p>
            }
            {
                match state {
                    MachineState::InProgress | MachineState::Completed => progress_view(machine, now),
                    _ => Html::default(),
                }
            }
        </div>
    }
}

fn progress_view(machine: &MachineStatusView, now: DateTime<Utc>) -> Html {
    let progress = machine.progress(now);
    html! {
        <div class="progress">
            <div class="progress-track">
                <div class="progress-fill" style={format!("width: {:.0}%;", progress)} />
            </div>
            <p class="progress-text">
                { format!("{:.0}% | {}", progress, machine.time_remaining(now)) }
            </p>
        </div>
    }
}

/// Body of the details sheet opened from a card.
pub fn details_view(
    machine: &MachineStatusView,
    now: DateTime<Utc>,
    offset: FixedOffset,
    link: &Scope<StatusBoard>,
) -> Html {
    let state = machine.state(now);
    let failed_at = machine
        .failed_at
        .map(|at| format_end_time(at, offset))
        .unwrap_or_else(|| "N/A".to_string());
    let machine_id = machine.id.clone();

    html! {
        <div class="machine-details">
            <dl>
                <dt>{"Status"}</dt>
                <dd>{ state.label() }</dd>
                <dt>{"User"}</dt>
                <dd>{ machine.user_display().to_string() }</dd>
                <dt>{"Estimated completion"}</dt>
                <dd>{ machine.end_time_display(offset) }</dd>
                <dt>{"Time remaining"}</dt>
                <dd>{ machine.time_remaining(now) }</dd>
                if machine.failed {
                    <dt>{"Failed at"}</dt>
                    <dd>{ failed_at }</dd>
                }
            </dl>
            if machine.failed {
                <button class="btn primary" onclick={link.callback(move |_| Msg::ClearMachine(machine_id.clone()))}>
                    {"Clear failure"}
                </button>
            }
        </div>
    }
}
