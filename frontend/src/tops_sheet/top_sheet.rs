use uuid::Uuid;
use web_sys::js_sys;
use yew::{html, Callback, Component, Context, Html, MouseEvent, NodeRef, Properties};

/// Sliding panel used for machine details on the status board.
pub struct TopSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
    #[prop_or_default]
    pub title: String,
    pub on_close: Callback<MouseEvent>,
}

impl Component for TopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("id-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div class="top-sheet" id={self.id.clone()} ref={props.node_ref.clone()}>
                <div class="top-sheet-header">
                    <h3>{ props.title.clone() }</h3>
                    <button class="icon-btn" title="Close" onclick={props.on_close.clone()}>
                        <span class="material-icons">{"close"}</span>
                    </button>
                </div>
                { props.children.clone() }
            </div>
        }
    }
}

pub fn open_top_sheet(top_sheet_ref: &NodeRef) {
    toggle_show(top_sheet_ref, "add");
}

pub fn close_top_sheet(top_sheet_ref: &NodeRef) {
    toggle_show(top_sheet_ref, "remove");
}

// Deferred so the CSS transition runs after the sheet content is rendered.
fn toggle_show(top_sheet_ref: &NodeRef, action: &str) {
    if let Some(top_sheet) = top_sheet_ref.cast::<web_sys::HtmlElement>() {
        let func = js_sys::Function::new_no_args(&format!(
            "document.querySelector('#{}').classList.{}('show')",
            top_sheet.id(),
            action
        ));
        if let Some(window) = web_sys::window() {
            if window
                .set_timeout_with_callback_and_timeout_and_arguments_0(&func, 50)
                .is_err()
            {
                gloo_console::error!("could not schedule top sheet toggle");
            }
        }
    }
}
