//! Machine status board.
//!
//! Fetches `/machinestatus` on mount and then every `status_poll_seconds`.
//! A one second tick re-derives progress, remaining time and display state
//! from the last snapshot without refetching.

use chrono::{DateTime, FixedOffset, Utc};
use forge_common::model::status::MachineStatusResponse;
use forge_common::status::{self, FilterKind, MachineStatusView, StatusFilter, UP_NEXT_LIMIT};
use gloo_timers::callback::Interval;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::ApiHandle;
use crate::board_grid::BoardGrid;
use crate::helpers::{local_offset, now_utc, show_alert, show_toast};
use crate::tops_sheet::top_sheet::{close_top_sheet, open_top_sheet, TopSheet};

mod card;
mod toolbar;
mod up_next;

use card::{details_view, machine_card};
use toolbar::toolbar_view;
use up_next::up_next_view;

pub enum Msg {
    Fetch,
    Loaded(MachineStatusResponse),
    Failed(String),
    Tick,
    ToggleFilter(FilterKind, String),
    ClearFilters,
    ToggleHighlight,
    ShowDetails(String),
    CloseDetails,
    ClearMachine(String),
    Cleared { machine_id: String, error: Option<String> },
}

#[derive(Properties, PartialEq, Clone)]
pub struct StatusBoardProps {
    pub api: ApiHandle,
}

pub struct StatusBoard {
    machines: Vec<MachineStatusView>,
    groups: Vec<String>,
    loaded: bool,
    filter: StatusFilter,
    highlight_failed: bool,
    now: DateTime<Utc>,
    offset: FixedOffset,
    selected: Option<String>,
    details_ref: NodeRef,
    _poll: Interval,
    _tick: Interval,
}

impl Component for StatusBoard {
    type Message = Msg;
    type Properties = StatusBoardProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Fetch);

        let seconds = ctx.props().api.config().status_poll_seconds.max(1);
        let poll = {
            let link = ctx.link().clone();
            Interval::new(seconds.saturating_mul(1000), move || link.send_message(Msg::Fetch))
        };
        let tick = {
            let link = ctx.link().clone();
            Interval::new(1000, move || link.send_message(Msg::Tick))
        };

        Self {
            machines: Vec::new(),
            groups: Vec::new(),
            loaded: false,
            filter: StatusFilter::default(),
            highlight_failed: false,
            now: now_utc(),
            offset: local_offset(),
            selected: None,
            details_ref: NodeRef::default(),
            _poll: poll,
            _tick: tick,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Fetch => {
                let api = ctx.props().api.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api.machine_status().await {
                        Ok(response) => link.send_message(Msg::Loaded(response)),
                        Err(err) => link.send_message(Msg::Failed(err.to_string())),
                    }
                });
                false
            }
            Msg::Loaded(response) => {
                self.groups = status::group_names(&response);
                self.machines = status::normalize(response);
                self.loaded = true;
                self.now = now_utc();
                true
            }
            Msg::Failed(error) => {
                gloo_console::error!(format!("status refresh failed: {}", error));
                if !self.loaded {
                    show_toast(&format!("Could not load machine status. {}", error));
                }
                false
            }
            Msg::Tick => {
                self.now = now_utc();
                true
            }
            Msg::ToggleFilter(kind, value) => {
                self.filter.toggle(kind, &value);
                true
            }
            Msg::ClearFilters => {
                self.filter.clear();
                true
            }
            Msg::ToggleHighlight => {
                self.highlight_failed = !self.highlight_failed;
                true
            }
            Msg::ShowDetails(machine_id) => {
                self.selected = Some(machine_id);
                open_top_sheet(&self.details_ref);
                true
            }
            Msg::CloseDetails => {
                close_top_sheet(&self.details_ref);
                false
            }
            Msg::ClearMachine(machine_id) => {
                let api = ctx.props().api.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let error = api.clear_machine(&machine_id).await.err().map(|err| err.to_string());
                    link.send_message(Msg::Cleared { machine_id, error });
                });
                false
            }
            Msg::Cleared { machine_id, error } => {
                match error {
                    None => {
                        gloo_console::log!(format!("machine {} cleared", machine_id));
                        show_toast("Machine cleared.");
                        close_top_sheet(&self.details_ref);
                        ctx.link().send_message(Msg::Fetch);
                    }
                    Some(error) => show_alert(&format!("Could not clear the machine. {}", error)),
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let visible = self.filter.apply(&self.machines, self.now);
        let up_next = status::up_next(&self.machines, UP_NEXT_LIMIT);
        let selected = self
            .selected
            .as_ref()
            .and_then(|id| self.machines.iter().find(|machine| &machine.id == id));

        html! {
            <div class="status-board">
                { toolbar_view(&self.groups, &self.filter, self.highlight_failed, link) }
                { up_next_view(&up_next, self.now, self.offset) }
                if !self.loaded {
                    <p class="loading">{"Loading machine status..."}</p>
                } else if visible.is_empty() {
                    <p class="empty">{"No machines match the selected filters."}</p>
                } else {
                    <BoardGrid>
                        { for visible.iter().map(|machine| {
                            machine_card(machine, self.now, self.highlight_failed, link)
                        }) }
                    </BoardGrid>
                }
                <TopSheet
                    node_ref={self.details_ref.clone()}
                    title={selected.map(|machine| machine.name.clone()).unwrap_or_default()}
                    on_close={link.callback(|_| Msg::CloseDetails)}
                >
                    { selected.map(|machine| details_view(machine, self.now, self.offset, link)).unwrap_or_default() }
                </TopSheet>
            </div>
        }
    }
}
