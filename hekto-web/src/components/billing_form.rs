//! Billing information form: one labeled input per recognized field.

use hekto_checkout::{BillingField, BillingForm};
use yew::prelude::*;

use crate::components::text_field::TextField;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub form: BillingForm,
    /// True while a confirmation or notice dialog is open; disables the
    /// submit trigger so it cannot fire twice.
    pub busy: bool,
    pub on_edit: Callback<(BillingField, String)>,
    pub on_place_order: Callback<()>,
}

fn field_input(props: &Props, field: BillingField) -> Html {
    let oninput = props.on_edit.reform(move |value| (field, value));
    let error = props
        .form
        .is_missing(field)
        .then(|| AttrValue::from(field.required_message()));
    html! {
        <TextField
            id={field.key()}
            label={field.label()}
            value={props.form.value(field).to_string()}
            placeholder={format!("Enter your {}", field.label().to_lowercase())}
            {error}
            {oninput}
        />
    }
}

#[function_component(BillingFormBlock)]
pub fn billing_form_block(props: &Props) -> Html {
    let on_place_order = {
        let cb = props.on_place_order.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {
        <div class="billing" data-testid="billing-form">
            <h3>{ "Billing Information" }</h3>
            <div class="billing__fields">
                { for BillingField::ALL.into_iter().map(|field| field_input(props, field)) }
            </div>
            <button
                type="button"
                class="billing__submit"
                disabled={props.busy}
                onclick={on_place_order}
                data-testid="place-order"
            >
                { "Place Order" }
            </button>
        </div>
    }
}
