//! Masked password prompt

use dioxus::prelude::*;

use crate::state::AppState;
use crate::theme::{button_style, PALETTE};

/// Modal asking for a password; answers the open `PasswordRequest`
#[component]
pub fn PasswordPrompt() -> Element {
    let mut state = use_context::<AppState>();
    let mut password = use_signal(String::new);
    let colors = &PALETTE;

    let Some(request) = (state.password_request)() else {
        return rsx! {};
    };
    let prompt = request.prompt();

    let mut finish = move |answer: Option<String>| {
        let Some(request) = state.password_request.write().take() else {
            return;
        };
        password.set(String::new());
        state.dispatch(request.into_command(answer));
    };

    rsx! {
        div {
            class: "password-overlay",
            style: "
                position: fixed;
                inset: 0;
                display: flex;
                align-items: center;
                justify-content: center;
                background: {colors.overlay};
            ",

            div {
                style: "
                    display: flex;
                    flex-direction: column;
                    gap: 10px;
                    min-width: 320px;
                    padding: 16px;
                    background: {colors.bg_secondary};
                    color: {colors.text_primary};
                    border: 1px solid {colors.border};
                ",

                label { "{prompt}" }
                input {
                    r#type: "password",
                    autofocus: true,
                    value: "{password}",
                    oninput: move |evt: Event<FormData>| password.set(evt.value()),
                    onkeydown: move |evt: Event<KeyboardData>| match evt.key() {
                        Key::Enter => finish(Some(password())),
                        Key::Escape => finish(None),
                        _ => {}
                    },
                }
                div {
                    style: "display: flex; justify-content: flex-end; gap: 8px;",
                    button { style: button_style(), onclick: move |_| finish(Some(password())), "OK" }
                    button { style: button_style(), onclick: move |_| finish(None), "Cancel" }
                }
            }
        }
    }
}
