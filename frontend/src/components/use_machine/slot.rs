//! Rendering of one resource slot in the second wizard step.
//!
//! Three cascading selects narrow the slot's catalog; the option lists come
//! straight from the resolver so a selector never offers a value that would
//! make the selection unresolvable.

use forge_common::catalog::{self, Selection, SlotEvent, UNSELECTED};
use forge_common::model::schema::ResourceSlotSchema;
use forge_common::slots::ResourceSlotElement;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::helpers::{format_cost, parse_amount};

use super::messages::Msg;
use super::state::UseMachineComponent;

pub fn slot_view(
    slot: &ResourceSlotSchema,
    element: &ResourceSlotElement,
    link: &Scope<UseMachineComponent>,
) -> Html {
    let resources = slot.valid_resources.as_slice();
    let selection = &element.selection;
    let slot_id = slot.resource_slot_id.clone();

    let units = element
        .resource_id
        .as_ref()
        .and_then(|id| resources.iter().find(|resource| &resource.id == id))
        .map(|resource| resource.units.clone())
        .unwrap_or_default();

    html! {
        <fieldset class="resource-slot">
            <legend>
                { slot.display_name.clone() }
                if !slot.allow_empty {
                    <span class="required" title="Required">{" *"}</span>
                }
            </legend>

            { selector(
                "Material",
                &catalog::material_options(resources),
                &selection.name,
                slot_callback(link, &slot_id, SlotEvent::SelectMaterial),
            ) }
            { selector(
                "Brand",
                &catalog::brand_options(resources, selection),
                &selection.brand,
                slot_callback(link, &slot_id, SlotEvent::SelectBrand),
            ) }
            { selector(
                "Color",
                &catalog::color_options(resources, selection),
                &selection.color,
                slot_callback(link, &slot_id, SlotEvent::SelectColor),
            ) }

            if catalog::is_ambiguous(resources, selection) {
                <p class="hint">{"Several resources match this selection; the first one listed will be used."}</p>
            }

            <label class="field">
                <span>{ format!("Amount {}", units) }</span>
                <input
                    type="number"
                    min="0"
                    step="any"
                    value={element.amount.to_string()}
                    onchange={{
                        let slot_id = slot_id.clone();
                        link.callback(move |e: Event| {
                            let raw = e.target_unchecked_into::<HtmlInputElement>().value();
                            Msg::Slot { slot_id: slot_id.clone(), event: SlotEvent::SetAmount(parse_amount(&raw)) }
                        })
                    }}
                />
            </label>

            if slot.allow_own_material {
                <label class="field checkbox">
                    <input
                        type="checkbox"
                        checked={element.own}
                        onchange={{
                            let slot_id = slot_id.clone();
                            link.callback(move |e: Event| {
                                let own = e.target_unchecked_into::<HtmlInputElement>().checked();
                                Msg::Slot { slot_id: slot_id.clone(), event: SlotEvent::SetOwn(own) }
                            })
                        }}
                    />
                    <span>{"I am bringing my own material"}</span>
                </label>
            }

            <p class="slot-cost">{ format!("Cost: {}", format_cost(element.cost)) }</p>
        </fieldset>
    }
}

fn slot_callback(
    link: &Scope<UseMachineComponent>,
    slot_id: &str,
    event: fn(Option<String>) -> SlotEvent,
) -> Callback<Event> {
    let slot_id = slot_id.to_string();
    link.callback(move |e: Event| {
        let value = e.target_unchecked_into::<HtmlSelectElement>().value();
        Msg::Slot {
            slot_id: slot_id.clone(),
            event: event(Selection::parse_option_value(&value)),
        }
    })
}

fn selector(label: &str, options: &[String], selected: &Option<String>, onchange: Callback<Event>) -> Html {
    let current = Selection::option_value(selected);
    html! {
        <label class="field">
            <span>{ label.to_string() }</span>
            <select {onchange}>
                <option value={UNSELECTED} selected={current == UNSELECTED}>{ format!("Select {}", label.to_lowercase()) }</option>
                { for options.iter().map(|option| html! {
                    <option value={option.clone()} selected={current == option.as_str()}>{ option.clone() }</option>
                }) }
            </select>
        </label>
    }
}
