//! Home view - the tabbed main window

use dioxus::prelude::*;

use jot_core::{Command, NoteRecord};

use crate::components::{EditorPane, NoteTable, TabBar};
use crate::state::{AppState, PasswordRequest, Tab};
use crate::theme::{button_style, PALETTE};

/// Home view component - tab strip over the active tab's content
#[component]
pub fn Home() -> Element {
    let state = use_context::<AppState>();
    let active = (state.active_tab)();

    rsx! {
        div {
            class: "home-container",
            style: "display: flex; flex-direction: column; height: 100vh;",

            TabBar {}

            div {
                class: "tab-content",
                style: "flex: 1; display: flex; flex-direction: column; overflow: auto; padding: 10px;",

                {match active {
                    Tab::Editor => rsx! { EditorPane {} },
                    Tab::Saved => rsx! { SavedNotes {} },
                    Tab::Recent => rsx! { RecentNotes {} },
                    Tab::Hidden => rsx! { HiddenNotes {} },
                }}
            }
        }
    }
}

#[component]
fn SavedNotes() -> Element {
    let mut state = use_context::<AppState>();
    let session = state.session.read();
    let rows = session.saved_notes().to_vec();
    let empty_text = if session.notes_dir().is_some() {
        "No notes in this folder"
    } else {
        "Select a folder in the Editor tab"
    };
    drop(session);

    rsx! {
        ListingToolbar {
            onrefresh: move |()| state.dispatch(Command::RefreshSaved),
        }
        NoteTable { rows, empty_text: empty_text.to_string() }
    }
}

#[component]
fn RecentNotes() -> Element {
    let state = use_context::<AppState>();
    let rows: Vec<NoteRecord> = state.session.read().recent_notes().iter().cloned().collect();

    rsx! {
        NoteTable { rows, empty_text: "Nothing saved yet this session" }
    }
}

#[component]
fn HiddenNotes() -> Element {
    let mut state = use_context::<AppState>();
    let rows = state.session.read().hidden_notes().to_vec();

    rsx! {
        ListingToolbar {
            onrefresh: move |()| state.dispatch(Command::RefreshHidden),
        }
        NoteTable {
            rows,
            empty_text: "No hidden notes",
            onselect: move |file_name: String| {
                state.password_request.set(Some(PasswordRequest::Reveal(file_name)));
            },
        }
    }
}

#[component]
fn ListingToolbar(onrefresh: EventHandler<()>) -> Element {
    let colors = &PALETTE;

    rsx! {
        div {
            style: "display: flex; justify-content: flex-end; padding-bottom: 8px; color: {colors.text_muted};",
            button {
                style: button_style(),
                onclick: move |_| onrefresh.call(()),
                "Refresh"
            }
        }
    }
}
