use forge_common::status::{filter_sections, StatusFilter};
use yew::html::Scope;
use yew::prelude::*;

use super::{Msg, StatusBoard};

pub fn toolbar_view(
    groups: &[String],
    filter: &StatusFilter,
    highlight_failed: bool,
    link: &Scope<StatusBoard>,
) -> Html {
    html! {
        <div class="status-toolbar">
            { for filter_sections(groups).into_iter().filter(|section| !section.values.is_empty()).map(|section| html! {
                <div class="filter-section">
                    <span class="filter-title">{ section.name }</span>
                    { for section.values.into_iter().map(|value| {
                        let kind = section.kind;
                        let class = classes!("chip", filter.is_active(kind, &value).then_some("active"));
                        let label = value.clone();
                        html! {
                            <button {class} onclick={link.callback(move |_| Msg::ToggleFilter(kind, value.clone()))}>
                                { label }
                            </button>
                        }
                    }) }
                </div>
            }) }
            if !filter.is_empty() {
                <button class="btn link" onclick={link.callback(|_| Msg::ClearFilters)}>{"Clear filters"}</button>
            }
            <label class="field checkbox">
                <input type="checkbox" checked={highlight_failed} onchange={link.callback(|_| Msg::ToggleHighlight)} />
                <span>{"Highlight failed"}</span>
            </label>
        </div>
    }
}
