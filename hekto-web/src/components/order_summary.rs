//! Order summary block: per-item rows plus subtotal, discount, and total.

use std::rc::Rc;

use hekto_checkout::{OrderSummary, Product, format_cents};
use yew::prelude::*;

use crate::images::image_url;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub items: Rc<Vec<Product>>,
    pub summary: OrderSummary,
}

fn item_row(item: &Product) -> Html {
    html! {
        <div class="summary__row" key={item.id.clone()}>
            <img
                class="summary__thumb"
                src={image_url(&item.image)}
                alt={item.name.clone()}
                width="64"
                height="64"
            />
            <div class="summary__item">
                <p class="summary__name">{ item.name.clone() }</p>
                <p class="summary__qty">{ format!("Quantity: {}", item.stock_level) }</p>
            </div>
            <p class="summary__line-total">{ format!("${}", format_cents(item.line_total_cents())) }</p>
        </div>
    }
}

#[function_component(OrderSummaryBlock)]
pub fn order_summary_block(props: &Props) -> Html {
    let rows: Html = if props.items.is_empty() {
        html! { <p class="summary__empty">{ "Your cart is empty." }</p> }
    } else {
        props.items.iter().map(item_row).collect()
    };
    html! {
        <div class="summary" data-testid="order-summary">
            <h3>{ "Order Summary" }</h3>
            { rows }
            <div class="summary__totals">
                <p>{ "Subtotal: " }<span>{ format!("${}", format_cents(props.summary.subtotal_cents)) }</span></p>
                <p>{ "Discount: " }<span>{ format!("-${}", format_cents(props.summary.discount_cents)) }</span></p>
                <p class="summary__total">{ format!("Total: ${}", format_cents(props.summary.total_cents)) }</p>
            </div>
        </div>
    }
}
