//! Modal confirmation and notice dialogs for the submission flow.

use yew::prelude::*;

/// Severity of the dialog, mapped to an icon glyph and a CSS modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogSeverity {
    Info,
    Success,
    Error,
}

impl DialogSeverity {
    const fn suffix(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    const fn glyph(self) -> &'static str {
        match self {
            Self::Info => "?",
            Self::Success => "\u{2713}",
            Self::Error => "!",
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub title: AttrValue,
    pub message: AttrValue,
    pub severity: DialogSeverity,
    /// Render a Yes/No pair instead of a single OK button.
    #[prop_or_default]
    pub confirmation: bool,
    /// Affirmative answer of a confirmation dialog.
    #[prop_or_default]
    pub on_confirm: Callback<()>,
    /// Dismissal: No, OK, Escape, or a backdrop click.
    pub on_dismiss: Callback<()>,
}

#[function_component(Dialog)]
pub fn dialog(props: &Props) -> Html {
    if !props.open {
        return Html::default();
    }

    let on_dismiss = {
        let cb = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_confirm = {
        let cb = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_keydown = {
        let cb = props.on_dismiss.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                e.prevent_default();
                cb.emit(());
            }
        })
    };
    let stop_bubble = Callback::from(|e: MouseEvent| e.stop_propagation());
    let severity_class = format!("dialog--{}", props.severity.suffix());

    let actions = if props.confirmation {
        html! {
            <>
                <button type="button" class="dialog__confirm" onclick={on_confirm}>{ "Yes" }</button>
                <button type="button" class="dialog__cancel" onclick={on_dismiss.clone()}>{ "No" }</button>
            </>
        }
    } else {
        html! {
            <button type="button" class="dialog__confirm" onclick={on_dismiss.clone()}>{ "OK" }</button>
        }
    };

    html! {
        <div class="dialog-backdrop" role="presentation" onclick={on_dismiss.clone()}>
            <div
                class={classes!("dialog", severity_class)}
                role="dialog"
                aria-modal="true"
                aria-labelledby="dialog-title"
                aria-describedby="dialog-message"
                onkeydown={on_keydown}
                onclick={stop_bubble}
                tabindex="-1"
            >
                <span class="dialog__icon" aria-hidden="true">{ props.severity.glyph() }</span>
                <h2 id="dialog-title">{ props.title.clone() }</h2>
                <p id="dialog-message">{ props.message.clone() }</p>
                <div class="dialog__actions">
                    { actions }
                </div>
            </div>
        </div>
    }
}
