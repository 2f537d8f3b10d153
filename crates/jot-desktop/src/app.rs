//! Main application component

use dioxus::prelude::*;

use jot_core::config::AppConfig;
use jot_core::Session;

use crate::components::{NoteViewer, PasswordPrompt};
use crate::services::notify;
use crate::state::{AppState, Tab};
use crate::theme::PALETTE;
use crate::views::Home;

/// Root application component
#[component]
pub fn App() -> Element {
    let mut session = use_signal(|| Session::new(AppConfig::default()));
    let active_tab = use_signal(|| Tab::Editor);
    let password_request = use_signal(|| None);

    // Create the hidden folder and load the initial listings (only once)
    use_hook(move || {
        let outcome = session.write().start();
        tracing::info!(
            "Session started with {} hidden notes in {}",
            session.peek().hidden_notes().len(),
            session.peek().hidden_dir().display()
        );
        if let Some(notification) = outcome {
            spawn(notify(notification));
        }
    });

    use_context_provider(|| AppState {
        session,
        active_tab,
        password_request,
    });

    let colors = &PALETTE;

    rsx! {
        div {
            class: "app-container",
            style: "
                min-height: 100vh;
                font-family: system-ui, -apple-system, sans-serif;
                background: {colors.bg_primary};
                color: {colors.text_primary};
            ",
            Home {}
            PasswordPrompt {}
            NoteViewer {}
        }
    }
}
