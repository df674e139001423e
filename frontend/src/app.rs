use std::rc::Rc;

use forge_common::model::config::ClientConfig;
use yew::platform::spawn_local;
use yew::{classes, html, Component, Context, Html};

use crate::api::{ApiHandle, ForgeApi, LocalStorageCredentials};
use crate::components::fail_machine::FailMachineComponent;
use crate::components::login::LoginComponent;
use crate::components::status::StatusBoard;
use crate::components::use_machine::UseMachineComponent;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Status,
    UseMachine,
    FailMachine,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Status, Tab::UseMachine, Tab::FailMachine];

    fn label(self) -> &'static str {
        match self {
            Tab::Status => "Status",
            Tab::UseMachine => "Use a Machine",
            Tab::FailMachine => "Fail a Machine",
        }
    }

    fn requires_login(self) -> bool {
        !matches!(self, Tab::Status)
    }
}

pub enum Msg {
    ConfigLoaded(ClientConfig),
    SetTab(Tab),
    LoggedIn,
    Logout,
}

pub struct App {
    api: Option<ApiHandle>,
    tab: Tab,
    logged_in: bool,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::ConfigLoaded(ForgeApi::load_config().await));
        });
        Self {
            api: None,
            tab: Tab::Status,
            logged_in: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ConfigLoaded(config) => {
                gloo_console::log!(format!("using API at {}", config.api_base_url));
                let api = ForgeApi::new(config, Rc::new(LocalStorageCredentials));
                self.logged_in = api.is_logged_in();
                self.api = Some(ApiHandle::new(api));
                true
            }
            Msg::SetTab(tab) => {
                self.tab = tab;
                if let Some(api) = &self.api {
                    self.logged_in = api.is_logged_in();
                }
                true
            }
            Msg::LoggedIn => {
                self.logged_in = true;
                true
            }
            Msg::Logout => {
                if let Some(api) = &self.api {
                    api.logout();
                }
                self.logged_in = false;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let Some(api) = self.api.clone() else {
            return html! { <p class="loading">{"Loading The Forge..."}</p> };
        };

        let body = if self.tab.requires_login() && !self.logged_in {
            html! { <LoginComponent api={api.clone()} on_login={link.callback(|_| Msg::LoggedIn)} /> }
        } else {
            match self.tab {
                Tab::Status => html! { <StatusBoard api={api.clone()} /> },
                Tab::UseMachine => html! { <UseMachineComponent api={api.clone()} /> },
                Tab::FailMachine => html! { <FailMachineComponent api={api.clone()} /> },
            }
        };

        html! {
            <div class="forge-app">
                <nav class="tab-bar">
                    { for Tab::ALL.iter().map(|tab| {
                        let tab = *tab;
                        html! {
                            <button
                                class={classes!("tab-btn", (tab == self.tab).then_some("active"))}
                                onclick={link.callback(move |_| Msg::SetTab(tab))}
                            >
                                { tab.label() }
                            </button>
                        }
                    }) }
                    if self.logged_in {
                        <button class="tab-btn logout" onclick={link.callback(|_| Msg::Logout)}>{"Log out"}</button>
                    }
                </nav>
                <main>{ body }</main>
            </div>
        }
    }
}
