//! UI Components
//!
//! Building blocks for the single Jot window.

mod editor_pane;
mod note_table;
mod note_viewer;
mod password_prompt;
mod tab_bar;

pub use editor_pane::EditorPane;
pub use note_table::NoteTable;
pub use note_viewer::NoteViewer;
pub use password_prompt::PasswordPrompt;
pub use tab_bar::TabBar;
