use yew::prelude::*;
use gloo_timers::callback::Timeout;

use crate::apply::controller::{Notice, NoticeLevel};

const TOAST_DURATION_MS: u32 = 5000;

/// A notice as shown on screen. `id` changes on every show, so repeating the
/// same notice restarts the dismiss timer.
#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: u32,
    pub notice: Notice,
}

impl ToastMessage {
    pub fn after(previous: Option<&ToastMessage>, notice: Notice) -> Self {
        let id = previous.map_or(0, |shown| shown.id.wrapping_add(1));
        Self { id, notice }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: Option<ToastMessage>,
    pub on_dismiss: Callback<()>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |message| {
                let timeout = message.as_ref().map(|_| {
                    Timeout::new(TOAST_DURATION_MS, move || on_dismiss.emit(()))
                });
                // Dropping the timeout cancels it when the message changes.
                move || drop(timeout)
            },
            props.message.clone(),
        );
    }

    let Some(ToastMessage { notice, .. }) = props.message.as_ref() else {
        return html! {};
    };

    let level_class = match notice.level {
        NoticeLevel::Success => "toast-success",
        NoticeLevel::Error => "toast-error",
    };

    let close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class={classes!("toast", level_class)} role="status">
            <style>
                {r#"
                    .toast {
                        position: fixed;
                        bottom: 1.5rem;
                        left: 1.5rem;
                        z-index: 60;
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        max-width: 420px;
                        padding: 1rem 1.25rem;
                        border-radius: 12px;
                        background: #fff;
                        box-shadow: 0 10px 30px rgba(0, 0, 0, 0.15);
                        font-weight: 500;
                    }
                    .toast-success { border-left: 4px solid #22a06b; }
                    .toast-error { border-left: 4px solid #d9363e; }
                    .toast button {
                        background: none;
                        border: none;
                        cursor: pointer;
                        font-size: 1rem;
                        color: #666;
                    }
                "#}
            </style>
            <span>{ &notice.message }</span>
            <button onclick={close}>{ "✕" }</button>
        </div>
    }
}
