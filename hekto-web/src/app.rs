//! Stateful wiring for the checkout page.
//!
//! Owns the cart snapshot, the applied discount, the billing form, and the
//! submission flow; loads the external state once at mount and maps user
//! events onto flow transitions.

use std::rc::Rc;

use hekto_checkout::{
    BillingField, BillingForm, CheckoutFlow, OrderSummary, Product, SubmitOutcome, load_cart,
    load_discount,
};
use yew::prelude::*;

use crate::pages::checkout::CheckoutPage;
use crate::storage::BrowserStore;

#[function_component(App)]
pub fn app() -> Html {
    let items = use_state(|| Rc::new(Vec::<Product>::new()));
    let discount_cents = use_state(|| 0_i64);
    let form = use_state(BillingForm::new);
    let flow = use_state(CheckoutFlow::new);

    {
        let items = items.clone();
        let discount_cents = discount_cents.clone();
        use_effect_with((), move |()| {
            let store = BrowserStore::open();
            items.set(Rc::new(load_cart(&store)));
            discount_cents.set(load_discount(&store));
            || {}
        });
    }

    let on_edit = {
        let form = form.clone();
        Callback::from(move |(field, value): (BillingField, String)| {
            let mut next = (*form).clone();
            next.set(field, value);
            form.set(next);
        })
    };

    let on_place_order = {
        let flow = flow.clone();
        Callback::from(move |()| {
            let mut next = (*flow).clone();
            if next.request_order() {
                flow.set(next);
            }
        })
    };

    let on_confirm = {
        let flow = flow.clone();
        let form = form.clone();
        let items = items.clone();
        let discount_cents = discount_cents.clone();
        Callback::from(move |()| {
            let mut next_flow = (*flow).clone();
            let mut next_form = (*form).clone();
            let mut store = BrowserStore::open();
            if next_flow.confirm(&mut next_form, &mut store) == Some(SubmitOutcome::Placed) {
                discount_cents.set(0);
                items.set(Rc::new(Vec::new()));
            }
            form.set(next_form);
            flow.set(next_flow);
        })
    };

    let on_cancel = {
        let flow = flow.clone();
        Callback::from(move |()| {
            let mut next = (*flow).clone();
            next.cancel_confirmation();
            flow.set(next);
        })
    };

    let on_acknowledge = {
        let flow = flow.clone();
        Callback::from(move |()| {
            let mut next = (*flow).clone();
            next.acknowledge_notice();
            flow.set(next);
        })
    };

    let summary = OrderSummary::compute(items.as_slice(), *discount_cents);

    html! {
        <CheckoutPage
            items={(*items).clone()}
            {summary}
            form={(*form).clone()}
            submit_state={flow.state()}
            {on_edit}
            {on_place_order}
            {on_confirm}
            {on_cancel}
            {on_acknowledge}
        />
    }
}
