//! Application state management
//!
//! The window's state lives in a single `Session`; components reach it through
//! the `AppState` context and change it only by dispatching commands.

use dioxus::prelude::*;

use jot_core::{Command, Session};

use crate::services::notify;

/// Tabs across the top of the window
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Editor,
    Saved,
    Recent,
    Hidden,
}

impl Tab {
    pub const ALL: [Self; 4] = [Self::Editor, Self::Saved, Self::Recent, Self::Hidden];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Editor => "Editor",
            Self::Saved => "Saved Notes",
            Self::Recent => "Recent Notes",
            Self::Hidden => "Hidden Notes",
        }
    }
}

/// Why the password prompt is open
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PasswordRequest {
    /// Obfuscate the editor contents into a new hidden note
    SaveHidden,
    /// Decode an existing hidden note
    Reveal(String),
}

impl PasswordRequest {
    #[must_use]
    pub fn prompt(&self) -> String {
        match self {
            Self::SaveHidden => "Enter password for the hidden note:".to_string(),
            Self::Reveal(file_name) => format!("Enter password for {file_name}:"),
        }
    }

    /// Turn the prompt's answer into a session command
    #[must_use]
    pub fn into_command(self, password: Option<String>) -> Command {
        match self {
            Self::SaveHidden => Command::SaveHiddenNote(password),
            Self::Reveal(file_name) => Command::RevealHiddenNote {
                file_name,
                password,
            },
        }
    }
}

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Everything the window displays
    pub session: Signal<Session>,
    /// Currently visible tab
    pub active_tab: Signal<Tab>,
    /// Open password prompt, if any
    pub password_request: Signal<Option<PasswordRequest>>,
}

impl AppState {
    /// Apply a command and show its outcome, if it has one.
    pub fn dispatch(&mut self, command: Command) {
        let outcome = self.session.write().apply(command);
        if let Some(notification) = outcome {
            spawn(notify(notification));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_labels_follow_window_order() {
        let labels: Vec<_> = Tab::ALL.iter().map(|tab| tab.label()).collect();
        assert_eq!(
            labels,
            vec!["Editor", "Saved Notes", "Recent Notes", "Hidden Notes"]
        );
    }

    #[test]
    fn password_request_maps_to_commands() {
        assert_eq!(
            PasswordRequest::SaveHidden.into_command(Some("pw".to_string())),
            Command::SaveHiddenNote(Some("pw".to_string()))
        );
        assert_eq!(
            PasswordRequest::Reveal("hidden_1.hidden".to_string()).into_command(None),
            Command::RevealHiddenNote {
                file_name: "hidden_1.hidden".to_string(),
                password: None,
            }
        );
    }
}
