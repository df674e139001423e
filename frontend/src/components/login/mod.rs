//! Minimal login form. On success the token is stored by the credential
//! provider and the parent is told through `on_login`.

use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::ApiHandle;
use crate::helpers::show_toast;

pub enum Msg {
    SetUsername(String),
    SetPassword(String),
    Submit,
    Finished(Result<(), String>),
}

#[derive(Properties, PartialEq, Clone)]
pub struct LoginProps {
    pub api: ApiHandle,
    pub on_login: Callback<()>,
}

pub struct LoginComponent {
    username: String,
    password: String,
    error: Option<String>,
    pending: bool,
}

impl Component for LoginComponent {
    type Message = Msg;
    type Properties = LoginProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            error: None,
            pending: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetUsername(username) => {
                self.username = username;
                false
            }
            Msg::SetPassword(password) => {
                self.password = password;
                false
            }
            Msg::Submit => {
                if self.pending || self.username.trim().is_empty() || self.password.is_empty() {
                    self.error = Some("Please enter your username and password.".to_string());
                    return true;
                }
                self.pending = true;
                self.error = None;
                let api = ctx.props().api.clone();
                let link = ctx.link().clone();
                let (username, password) = (self.username.trim().to_string(), self.password.clone());
                spawn_local(async move {
                    let result = api.login(&username, &password).await.map_err(|err| err.to_string());
                    link.send_message(Msg::Finished(result));
                });
                true
            }
            Msg::Finished(result) => {
                self.pending = false;
                match result {
                    Ok(()) => {
                        self.password.clear();
                        show_toast("Logged in.");
                        ctx.props().on_login.emit(());
                    }
                    Err(error) => {
                        gloo_console::error!(format!("login failed: {}", error));
                        self.error = Some(error);
                    }
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <form class="login" onsubmit={link.callback(|e: SubmitEvent| {
                e.prevent_default();
                Msg::Submit
            })}>
                <h2>{"Log in"}</h2>
                <label class="field">
                    <span>{"Username"}</span>
                    <input
                        type="text"
                        autocomplete="username"
                        oninput={link.callback(|e: InputEvent| {
                            Msg::SetUsername(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                </label>
                <label class="field">
                    <span>{"Password"}</span>
                    <input
                        type="password"
                        autocomplete="current-password"
                        oninput={link.callback(|e: InputEvent| {
                            Msg::SetPassword(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                </label>
                if let Some(error) = &self.error {
                    <p class="error">{ error.clone() }</p>
                }
                <button type="submit" class="btn primary" disabled={self.pending}>{"Log in"}</button>
            </form>
        }
    }
}
