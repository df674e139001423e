//! Resource catalog resolver.
//!
//! Each resource slot of a machine comes with a fixed list of valid resources.
//! The user narrows that list with three cascading selectors, material (the
//! resource `name`) then brand then color, until at most one concrete
//! [`Resource`] is left. This module computes the options each selector offers,
//! resolves a selection to a resource, and folds selector events into a new
//! [`ResourceSlotElement`] through [`reduce`].
//!
//! Unselected fields act as wildcards. When a wildcard leaves several resources
//! matching, the first one in catalog order wins; [`is_ambiguous`] lets callers
//! detect that case.

use crate::model::resource::Resource;
use crate::model::schema::ResourceSlotSchema;
use crate::slots::ResourceSlotElement;

/// Option value the UI uses for "nothing selected" in a `<select>`.
pub const UNSELECTED: &str = "_";

/// A partial material/brand/color choice. `None` means unselected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub color: Option<String>,
}

impl Selection {
    /// Decodes a `<select>` value, mapping the sentinel (or an empty value) to `None`.
    pub fn parse_option_value(value: &str) -> Option<String> {
        if value.is_empty() || value == UNSELECTED {
            None
        } else {
            Some(value.to_string())
        }
    }

    /// Encodes a field back into a `<select>` value.
    pub fn option_value(field: &Option<String>) -> &str {
        field.as_deref().unwrap_or(UNSELECTED)
    }
}

/// A change coming from one of a slot's inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum SlotEvent {
    SelectMaterial(Option<String>),
    SelectBrand(Option<String>),
    SelectColor(Option<String>),
    SetAmount(f64),
    SetOwn(bool),
}

fn admits(selected: &Option<String>, value: Option<&str>) -> bool {
    match selected {
        None => true,
        Some(selected) => value == Some(selected.as_str()),
    }
}

fn push_distinct(options: &mut Vec<String>, value: &str) {
    if !options.iter().any(|existing| existing == value) {
        options.push(value.to_string());
    }
}

/// Every distinct material in the catalog, in catalog order.
pub fn material_options(resources: &[Resource]) -> Vec<String> {
    let mut options = Vec::new();
    for resource in resources {
        push_distinct(&mut options, &resource.name);
    }
    options
}

/// Distinct brands of the resources admitted by the selected material.
pub fn brand_options(resources: &[Resource], selection: &Selection) -> Vec<String> {
    let mut options = Vec::new();
    for resource in resources
        .iter()
        .filter(|resource| admits(&selection.name, Some(&resource.name)))
    {
        if let Some(brand) = &resource.brand {
            push_distinct(&mut options, brand);
        }
    }
    options
}

/// Distinct colors of the resources admitted by the selected material and
/// brand. Until a material is chosen every color is offered, whatever the brand.
pub fn color_options(resources: &[Resource], selection: &Selection) -> Vec<String> {
    let mut options = Vec::new();
    for resource in resources.iter().filter(|resource| {
        selection.name.is_none()
            || (admits(&selection.name, Some(&resource.name))
                && admits(&selection.brand, resource.brand.as_deref()))
    }) {
        if let Some(color) = &resource.color {
            push_distinct(&mut options, color);
        }
    }
    options
}

fn matches(resource: &Resource, selection: &Selection) -> bool {
    selection.name.as_deref() == Some(resource.name.as_str())
        && admits(&selection.brand, resource.brand.as_deref())
        && admits(&selection.color, resource.color.as_deref())
}

/// First resource matching the selection. Nothing resolves until a material is chosen.
pub fn resolve<'a>(resources: &'a [Resource], selection: &Selection) -> Option<&'a Resource> {
    resources.iter().find(|resource| matches(resource, selection))
}

/// True when more than one resource matches, so [`resolve`] had to pick the first.
pub fn is_ambiguous(resources: &[Resource], selection: &Selection) -> bool {
    resources
        .iter()
        .filter(|resource| matches(resource, selection))
        .nth(1)
        .is_some()
}

/// Cost of using `amount` units of `resolved`. Own material is always free.
pub fn slot_cost(resolved: Option<&Resource>, amount: f64, own: bool) -> f64 {
    if own {
        return 0.0;
    }
    amount * resolved.map(Resource::unit_cost).unwrap_or(0.0)
}

/// Folds one event into a slot element and returns the recomputed element.
///
/// Selector values that the current options do not offer are ignored. A new
/// material clears a brand it no longer admits, and a new material or brand
/// clears a color that is no longer admitted.
pub fn reduce(
    slot: &ResourceSlotSchema,
    previous: &ResourceSlotElement,
    event: SlotEvent,
) -> ResourceSlotElement {
    let resources = slot.valid_resources.as_slice();
    let mut next = previous.clone();

    match event {
        SlotEvent::SelectMaterial(name) => {
            if !offered(&name, &material_options(resources)) {
                log::warn!("slot {}: material {:?} is not offered", slot.resource_slot_id, name);
                return previous.clone();
            }
            next.selection.name = name;
            drop_stale_brand(resources, &mut next.selection);
            drop_stale_color(resources, &mut next.selection);
        }
        SlotEvent::SelectBrand(brand) => {
            if !offered(&brand, &brand_options(resources, &next.selection)) {
                log::warn!("slot {}: brand {:?} is not offered", slot.resource_slot_id, brand);
                return previous.clone();
            }
            next.selection.brand = brand;
            drop_stale_color(resources, &mut next.selection);
        }
        SlotEvent::SelectColor(color) => {
            if !offered(&color, &color_options(resources, &next.selection)) {
                log::warn!("slot {}: color {:?} is not offered", slot.resource_slot_id, color);
                return previous.clone();
            }
            next.selection.color = color;
        }
        SlotEvent::SetAmount(amount) => {
            next.amount = if amount.is_finite() { amount.max(0.0) } else { 0.0 };
        }
        SlotEvent::SetOwn(own) => {
            next.own = own;
        }
    }

    let resolved = resolve(resources, &next.selection);
    next.resource_id = resolved.map(|resource| resource.id.clone());
    next.cost = slot_cost(resolved, next.amount, next.own);
    next
}

fn offered(value: &Option<String>, options: &[String]) -> bool {
    value
        .as_ref()
        .map_or(true, |value| options.iter().any(|option| option == value))
}

fn drop_stale_brand(resources: &[Resource], selection: &mut Selection) {
    if let Some(brand) = &selection.brand {
        if !brand_options(resources, selection).contains(brand) {
            selection.brand = None;
        }
    }
}

fn drop_stale_color(resources: &[Resource], selection: &mut Selection) {
    if let Some(color) = &selection.color {
        if !color_options(resources, selection).contains(color) {
            selection.color = None;
        }
    }
}
