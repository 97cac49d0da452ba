pub mod billing_form;
pub mod dialog;
pub mod order_summary;
pub mod text_field;
