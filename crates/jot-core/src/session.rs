//! Session state and the commands that change it.
//!
//! A [`Session`] owns everything the window shows: editor text, the chosen
//! folder and the three listings. UI handlers never touch those fields; they
//! send a [`Command`] to [`Session::apply`] and display whatever
//! [`Notification`] comes back. Every failure is caught here, so no command
//! can take the process down.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};

use crate::cipher::Password;
use crate::config::AppConfig;
use crate::recent::RecentNotes;
use crate::{registry, store, NoteKind, NoteRecord};

/// Severity of a user-facing notification, least severe first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

/// Outcome message shown to the user as a modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub message: String,
}

impl Notification {
    fn new(level: NotificationLevel, title: &str, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.to_string(),
            message: message.into(),
        }
    }

    fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Info, "Success", message)
    }

    fn canceled(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Warning, "Canceled", message)
    }

    fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, "Error", message)
    }

    /// Fold two outcomes into one modal.
    ///
    /// The more severe level and its title win; messages are kept in order.
    fn merge(first: Option<Self>, second: Option<Self>) -> Option<Self> {
        match (first, second) {
            (Some(first), Some(second)) => {
                let (level, title) = if second.level > first.level {
                    (second.level, second.title)
                } else {
                    (first.level, first.title)
                };
                Some(Self {
                    level,
                    title,
                    message: format!("{}\n{}", first.message, second.message),
                })
            }
            (first, second) => first.or(second),
        }
    }
}

/// User actions, already resolved from their dialogs.
///
/// `None` payloads mean the user dismissed the picker or prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the editor contents
    EditText(String),
    /// Use a folder for plaintext notes
    ChooseFolder(Option<PathBuf>),
    /// Save the editor contents as plain text at a path
    SaveNote(Option<PathBuf>),
    /// Save the editor contents as a hidden note with a password
    SaveHiddenNote(Option<String>),
    /// Decode a hidden note for viewing
    RevealHiddenNote {
        file_name: String,
        password: Option<String>,
    },
    /// Dismiss the decoded note viewer
    CloseRevealed,
    /// Re-scan the chosen folder
    RefreshSaved,
    /// Re-scan the hidden folder
    RefreshHidden,
}

/// A hidden note decoded for read-only viewing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealedNote {
    pub file_name: String,
    pub text: String,
}

/// All application state for one window
#[derive(Debug)]
pub struct Session {
    config: AppConfig,
    editor_text: String,
    notes_dir: Option<PathBuf>,
    saved: Vec<NoteRecord>,
    recent: RecentNotes,
    hidden: Vec<NoteRecord>,
    revealed: Option<RevealedNote>,
    clock: fn() -> NaiveDateTime,
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

impl Session {
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self::with_clock(config, local_now)
    }

    /// Create a session that reads save times from `clock`
    #[must_use]
    pub fn with_clock(config: AppConfig, clock: fn() -> NaiveDateTime) -> Self {
        Self {
            notes_dir: None,
            recent: RecentNotes::with_capacity(config.recent_capacity),
            config,
            editor_text: String::new(),
            saved: Vec::new(),
            hidden: Vec::new(),
            revealed: None,
            clock,
        }
    }

    /// Prepare the hidden folder and load the initial listings.
    pub fn start(&mut self) -> Option<Notification> {
        if let Err(error) = store::ensure_dir(&self.config.hidden_dir) {
            tracing::error!("Failed to create hidden folder: {}", error);
            return Some(Notification::error(format!(
                "Failed to create hidden notes folder: {error}"
            )));
        }

        let hidden = self.refresh_hidden();
        let saved = self.refresh_saved();
        Notification::merge(hidden, saved)
    }

    /// Run one command against the session.
    pub fn apply(&mut self, command: Command) -> Option<Notification> {
        let notification = match command {
            Command::EditText(text) => {
                self.editor_text = text;
                None
            }
            Command::ChooseFolder(Some(dir)) => {
                tracing::info!("Notes folder set to {}", dir.display());
                self.notes_dir = Some(dir);
                self.refresh_saved()
            }
            Command::ChooseFolder(None) => Some(Notification::canceled("No folder selected.")),
            Command::SaveNote(Some(path)) => self.save_note(&path),
            Command::SaveNote(None) => Some(Notification::canceled("Note saving canceled.")),
            Command::SaveHiddenNote(password) => Some(self.save_hidden_note(password)),
            Command::RevealHiddenNote {
                file_name,
                password,
            } => self.reveal_hidden_note(file_name, password),
            Command::CloseRevealed => {
                self.revealed = None;
                None
            }
            Command::RefreshSaved => self.refresh_saved(),
            Command::RefreshHidden => self.refresh_hidden(),
        };

        if let Some(ref notification) = notification {
            if notification.level != NotificationLevel::Info {
                tracing::warn!("{}: {}", notification.title, notification.message);
            }
        }
        notification
    }

    #[must_use]
    pub fn editor_text(&self) -> &str {
        &self.editor_text
    }

    #[must_use]
    pub fn notes_dir(&self) -> Option<&Path> {
        self.notes_dir.as_deref()
    }

    #[must_use]
    pub fn hidden_dir(&self) -> &Path {
        &self.config.hidden_dir
    }

    /// Folder the save-as picker should open in
    #[must_use]
    pub fn save_dialog_dir(&self) -> PathBuf {
        self.notes_dir
            .clone()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    #[must_use]
    pub fn saved_notes(&self) -> &[NoteRecord] {
        &self.saved
    }

    #[must_use]
    pub const fn recent_notes(&self) -> &RecentNotes {
        &self.recent
    }

    #[must_use]
    pub fn hidden_notes(&self) -> &[NoteRecord] {
        &self.hidden
    }

    #[must_use]
    pub const fn revealed(&self) -> Option<&RevealedNote> {
        self.revealed.as_ref()
    }

    fn save_note(&mut self, path: &Path) -> Option<Notification> {
        match store::save_note(path, &self.editor_text, (self.clock)()) {
            Ok((written, record)) => {
                let listing = self.track_saved(&written, record.clone());
                self.recent.push(record);
                self.editor_text.clear();
                let saved = Notification::info(format!("File saved: {}", written.display()));
                Notification::merge(Some(saved), listing)
            }
            Err(error) => Some(Notification::error(format!(
                "Failed to save file: {error}"
            ))),
        }
    }

    fn save_hidden_note(&mut self, password: Option<String>) -> Notification {
        let Some(password) = password.and_then(|value| Password::new(value).ok()) else {
            return Notification::canceled("Hidden note saving canceled.");
        };

        match store::save_hidden_note(
            &self.config.hidden_dir,
            &self.editor_text,
            &password,
            (self.clock)(),
        ) {
            Ok((written, record)) => {
                self.hidden.push(record);
                self.editor_text.clear();
                Notification::info(format!("Hidden note saved: {}", written.display()))
            }
            Err(error) => Notification::error(format!("Failed to save hidden note: {error}")),
        }
    }

    fn reveal_hidden_note(
        &mut self,
        file_name: String,
        password: Option<String>,
    ) -> Option<Notification> {
        let Some(password) = password.and_then(|value| Password::new(value).ok()) else {
            return Some(Notification::canceled("Opening hidden note canceled."));
        };

        match store::read_hidden_note(&self.config.hidden_dir, &file_name, &password) {
            Ok(text) => {
                self.revealed = Some(RevealedNote { file_name, text });
                None
            }
            Err(error) => Some(Notification::error(format!(
                "Failed to open hidden note: {error}"
            ))),
        }
    }

    /// Update the saved listing after writing `written`.
    ///
    /// Files inside the chosen folder show up through a re-scan; files saved
    /// elsewhere are appended so the user still sees them this session. A
    /// failed re-scan still lists the new note and is returned to the caller.
    fn track_saved(&mut self, written: &Path, record: NoteRecord) -> Option<Notification> {
        let in_folder = self
            .notes_dir
            .as_deref()
            .is_some_and(|dir| written.parent() == Some(dir));

        if !in_folder {
            self.saved.push(record);
            return None;
        }

        let failure = self.refresh_saved();
        if failure.is_some() {
            self.saved.push(record);
        }
        failure
    }

    fn refresh_saved(&mut self) -> Option<Notification> {
        let dir = self.notes_dir.as_deref()?;
        match registry::scan(dir, NoteKind::Plain) {
            Ok(records) => {
                self.saved = records;
                None
            }
            Err(error) => {
                self.saved.clear();
                Some(Notification::error(format!("Failed to load notes: {error}")))
            }
        }
    }

    fn refresh_hidden(&mut self) -> Option<Notification> {
        match registry::scan(&self.config.hidden_dir, NoteKind::Hidden) {
            Ok(records) => {
                self.hidden = records;
                None
            }
            Err(error) => {
                self.hidden.clear();
                Some(Notification::error(format!(
                    "Failed to load hidden notes: {error}"
                )))
            }
        }
    }
}
