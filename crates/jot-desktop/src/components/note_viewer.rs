//! Read-only view of a decoded hidden note

use dioxus::prelude::*;

use jot_core::Command;

use crate::state::AppState;
use crate::theme::{button_style, PALETTE};

#[component]
pub fn NoteViewer() -> Element {
    let mut state = use_context::<AppState>();
    let colors = &PALETTE;

    let Some(note) = state.session.read().revealed().cloned() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "viewer-overlay",
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
                    width: 70%;
                    max-height: 80%;
                    padding: 16px;
                    background: {colors.bg_secondary};
                    color: {colors.text_primary};
                    border: 1px solid {colors.border};
                ",

                strong { "{note.file_name}" }
                pre {
                    style: "
                        flex: 1;
                        overflow: auto;
                        margin: 0;
                        white-space: pre-wrap;
                        font-family: Arial, sans-serif;
                        font-size: 14px;
                    ",
                    "{note.text}"
                }
                div {
                    style: "display: flex; justify-content: flex-end;",
                    button {
                        style: button_style(),
                        onclick: move |_| state.dispatch(Command::CloseRevealed),
                        "Close"
                    }
                }
            }
        }
    }
}
