use web_sys::HtmlInputElement;
use yew::html::TargetCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    /// Inline error line rendered under the input when set.
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub oninput: Callback<String>,
}

/// A labeled text input with an optional inline error line.
#[function_component(TextField)]
pub fn text_field(props: &Props) -> Html {
    let oninput = {
        let cb = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                cb.emit(input.value());
            }
        })
    };
    html! {
        <div class="text-field">
            <label for={props.id.clone()}>{ props.label.clone() }</label>
            <input
                id={props.id.clone()}
                type="text"
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                {oninput}
            />
            { props.error.as_ref().map(|error| html! {
                <p class="text-field__error">{ error.clone() }</p>
            }).unwrap_or_default() }
        </div>
    }
}
