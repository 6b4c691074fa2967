//! Dioxus rendering of the order form.

use crate::model::OrderFormModel;
use crate::submission::SubmitOutcome;
use barista_domain::catalog::display_label;
use barista_domain::config::ValidationPolicy;
use barista_domain::{CoffeeCatalog, CoffeeOrder, CoffeeType, FormField};
use dioxus::prelude::*;
use std::convert::Infallible;

const PLACEHOLDER: &str = "-- Select --";

/// Coffee order form.
///
/// Flavor and size only list what the catalog offers for the chosen type and stay disabled
/// until a type is picked. `on_submit` runs once per valid submission, after which the form
/// is cleared.
#[component]
pub fn CoffeeOrderForm(
    catalog: CoffeeCatalog,
    #[props(default)] policy: ValidationPolicy,
    on_submit: EventHandler<CoffeeOrder>,
) -> Element {
    let form = use_signal(move || OrderFormModel::new(catalog).with_policy(policy));

    rsx! {
        OrderFormView { form, on_submit }
    }
}

#[component]
fn OrderFormView(form: Signal<OrderFormModel>, on_submit: EventHandler<CoffeeOrder>) -> Element {
    let (draft, errors, flavors, sizes) = {
        let model = form.read();
        (
            model.draft().clone(),
            model.errors().clone(),
            model.allowed_flavors().to_vec(),
            model.allowed_sizes().to_vec(),
        )
    };
    let types: Vec<CoffeeType> = form.read().catalog().types().collect();
    let no_type = draft.coffee_type.is_none();
    let strength = draft.strength.map(|s| s.to_string()).unwrap_or_default();

    rsx! {
        div { class: "coffee-container",
            form {
                class: "coffee-form",
                novalidate: true,
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    send(form, on_submit);
                },
                h2 { "Order Your Coffee" }

                div { class: "form-group",
                    label { r#for: "coffee-type", "Type:" }
                    select {
                        id: "coffee-type",
                        name: "type",
                        onchange: move |evt: FormEvent| edit(form, FormField::Type, &evt.value()),
                        option { value: "", selected: no_type, "{PLACEHOLDER}" }
                        for coffee_type in types {
                            option {
                                key: "{coffee_type}",
                                value: "{coffee_type}",
                                selected: draft.coffee_type == Some(coffee_type),
                                {coffee_type.label()}
                            }
                        }
                    }
                    if let Some(message) = errors.get(FormField::Type) {
                        span { class: "error", "{message}" }
                    }
                }

                div { class: "form-group",
                    label { r#for: "coffee-flavor", "Flavor:" }
                    select {
                        id: "coffee-flavor",
                        name: "flavor",
                        disabled: no_type,
                        onchange: move |evt: FormEvent| edit(form, FormField::Flavor, &evt.value()),
                        option { value: "", selected: draft.flavor.is_empty(), "{PLACEHOLDER}" }
                        for flavor in flavors {
                            option {
                                key: "{flavor}",
                                value: "{flavor}",
                                selected: draft.flavor == flavor,
                                {display_label(&flavor)}
                            }
                        }
                    }
                    if let Some(message) = errors.get(FormField::Flavor) {
                        span { class: "error", "{message}" }
                    }
                }

                div { class: "form-group",
                    label { r#for: "coffee-size", "Size:" }
                    select {
                        id: "coffee-size",
                        name: "size",
                        disabled: no_type,
                        onchange: move |evt: FormEvent| edit(form, FormField::Size, &evt.value()),
                        option { value: "", selected: draft.size.is_empty(), "{PLACEHOLDER}" }
                        for size in sizes {
                            option {
                                key: "{size}",
                                value: "{size}",
                                selected: draft.size == size,
                                {display_label(&size)}
                            }
                        }
                    }
                    if let Some(message) = errors.get(FormField::Size) {
                        span { class: "error", "{message}" }
                    }
                }

                div { class: "form-group",
                    label { r#for: "coffee-strength", "Strength (%):" }
                    input {
                        id: "coffee-strength",
                        name: "strength",
                        r#type: "number",
                        step: "1",
                        value: "{strength}",
                        oninput: move |evt: FormEvent| edit(form, FormField::Strength, &evt.value()),
                    }
                    if let Some(message) = errors.get(FormField::Strength) {
                        span { class: "error", "{message}" }
                    }
                }

                button { class: "submit-btn", r#type: "submit", "Submit Order" }
            }
        }
    }
}

fn edit(mut form: Signal<OrderFormModel>, field: FormField, raw: &str) {
    if let Err(err) = form.write().set_field(field, raw) {
        tracing::warn!(%err, %field, "Ignoring form input");
    }
}

fn send(mut form: Signal<OrderFormModel>, on_submit: EventHandler<CoffeeOrder>) {
    let mut forward = |order: CoffeeOrder| -> Result<(), Infallible> {
        on_submit.call(order);
        Ok(())
    };

    match form.write().submit(&mut forward) {
        Ok(SubmitOutcome::Submitted) => {},
        Ok(SubmitOutcome::Rejected(errors)) => {
            tracing::debug!(count = errors.len(), "Showing inline validation errors");
        },
    }
}
