use chrono::{DateTime, FixedOffset, Utc};
use forge_common::status::MachineStatusView;
use yew::prelude::*;

/// The machines that free up soonest.
pub fn up_next_view(machines: &[&MachineStatusView], now: DateTime<Utc>, offset: FixedOffset) -> Html {
    if machines.is_empty() {
        return Html::default();
    }

    html! {
        <section class="up-next">
            <h3>{"Up Next"}</h3>
            <ul>
                { for machines.iter().map(|machine| html! {
                    <li>
                        <strong>{ machine.name.clone() }</strong>
                        <span>{ format!(" {} (done {})", machine.time_remaining(now), machine.end_time_display(offset)) }</span>
                    </li>
                }) }
            </ul>
        </section>
    }
}
