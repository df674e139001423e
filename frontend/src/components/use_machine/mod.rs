//! "Use a Machine" wizard component.
//!
//! The component owns a [`UsageWizard`](forge_common::wizard::UsageWizard) and
//! forwards every user interaction to it as a message. Network calls run with
//! `spawn_local` and report back through the same message loop.

use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod props;
mod slot;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::UseMachineProps;
pub use state::UseMachineComponent;

impl Component for UseMachineComponent {
    type Message = Msg;
    type Properties = UseMachineProps;

    fn create(ctx: &Context<Self>) -> Self {
        let api = ctx.props().api.clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            match api.machines().await {
                Ok(machines) => link.send_message(Msg::MachinesLoaded(machines)),
                Err(err) => link.send_message(Msg::MachinesFailed(err.to_string())),
            }
        });
        UseMachineComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
