//! Editor tab: free text plus the save actions

use dioxus::prelude::*;

use jot_core::Command;

use crate::services::{pick_folder, pick_save_path};
use crate::state::{AppState, PasswordRequest};
use crate::theme::{button_style, PALETTE};

/// Plain text editor with save, save-hidden and folder selection
#[component]
pub fn EditorPane() -> Element {
    let mut state = use_context::<AppState>();
    let colors = &PALETTE;
    let session = state.session.read();
    let text = session.editor_text().to_string();
    let folder_label = session.notes_dir().map_or_else(
        || "Not Selected".to_string(),
        |dir| dir.display().to_string(),
    );
    drop(session);

    let on_input = move |evt: Event<FormData>| {
        state.dispatch(Command::EditText(evt.value()));
    };

    let save_note = move |_| {
        let initial_dir = state.session.read().save_dialog_dir();
        spawn(async move {
            let path = pick_save_path(&initial_dir).await;
            state.dispatch(Command::SaveNote(path));
        });
    };

    let save_hidden_note = move |_| {
        state.password_request.set(Some(PasswordRequest::SaveHidden));
    };

    let choose_folder = move |_| {
        spawn(async move {
            let folder = pick_folder().await;
            state.dispatch(Command::ChooseFolder(folder));
        });
    };

    rsx! {
        div {
            class: "editor-pane",
            style: "display: flex; flex-direction: column; flex: 1; gap: 8px; padding: 5px;",

            textarea {
                value: "{text}",
                oninput: on_input,
                spellcheck: "false",
                style: "
                    flex: 1;
                    resize: none;
                    font-family: Arial, sans-serif;
                    font-size: 14px;
                    padding: 8px;
                    background: {colors.bg_primary};
                    color: {colors.text_primary};
                    caret-color: {colors.text_primary};
                    border: 1px solid {colors.border};
                    outline: none;
                ",
            }

            div {
                style: "display: flex; flex-direction: column; align-items: center; gap: 6px;",
                button { style: button_style(), onclick: save_note, "Save Note" }
                button { style: button_style(), onclick: save_hidden_note, "Save Hidden Note" }
                button { style: button_style(), onclick: choose_folder, "Select Folder" }
                span {
                    style: "color: {colors.text_primary}; max-width: 400px; overflow-wrap: anywhere;",
                    "Save Folder: {folder_label}"
                }
            }
        }
    }
}
