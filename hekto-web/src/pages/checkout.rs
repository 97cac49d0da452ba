//! The checkout page: order summary, billing form, and the submission
//! dialogs. Purely presentational; `crate::app` owns the state.

use std::rc::Rc;

use hekto_checkout::{BillingField, BillingForm, OrderSummary, Product, SubmitOutcome, SubmitState};
use yew::prelude::*;

use crate::components::billing_form::BillingFormBlock;
use crate::components::dialog::{Dialog, DialogSeverity};
use crate::components::order_summary::OrderSummaryBlock;

#[derive(Properties, PartialEq, Clone)]
pub struct CheckoutPageProps {
    pub items: Rc<Vec<Product>>,
    pub summary: OrderSummary,
    pub form: BillingForm,
    pub submit_state: SubmitState,
    pub on_edit: Callback<(BillingField, String)>,
    pub on_place_order: Callback<()>,
    /// User confirmed the order in the yes/no dialog.
    pub on_confirm: Callback<()>,
    /// User declined the yes/no dialog.
    pub on_cancel: Callback<()>,
    /// User dismissed the terminal success/error notice.
    pub on_acknowledge: Callback<()>,
}

fn submission_dialog(props: &CheckoutPageProps) -> Html {
    match props.submit_state {
        SubmitState::Idle => Html::default(),
        SubmitState::Confirming => html! {
            <Dialog
                open=true
                title="Order Confirmation"
                message="Are you sure you want to place the order?"
                severity={DialogSeverity::Info}
                confirmation=true
                on_confirm={props.on_confirm.clone()}
                on_dismiss={props.on_cancel.clone()}
            />
        },
        SubmitState::Notice(SubmitOutcome::Placed) => html! {
            <Dialog
                open=true
                title="Order Placed!"
                message="Your order has been placed successfully."
                severity={DialogSeverity::Success}
                on_dismiss={props.on_acknowledge.clone()}
            />
        },
        SubmitState::Notice(SubmitOutcome::MissingFields) => html! {
            <Dialog
                open=true
                title="Error"
                message="Please fill in all the fields."
                severity={DialogSeverity::Error}
                on_dismiss={props.on_acknowledge.clone()}
            />
        },
    }
}

#[function_component(CheckoutPage)]
pub fn checkout_page(props: &CheckoutPageProps) -> Html {
    let busy = !matches!(props.submit_state, SubmitState::Idle);
    html! {
        <section class="checkout" data-testid="checkout-page">
            <h2>{ "Checkout" }</h2>
            <OrderSummaryBlock items={props.items.clone()} summary={props.summary} />
            <BillingFormBlock
                form={props.form.clone()}
                {busy}
                on_edit={props.on_edit.clone()}
                on_place_order={props.on_place_order.clone()}
            />
            { submission_dialog(props) }
        </section>
    }
}
