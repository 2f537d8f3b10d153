//! Native file pickers and message boxes.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use rfd::{AsyncFileDialog, AsyncMessageDialog, MessageButtons, MessageLevel};

use jot_core::{NoteKind, Notification, NotificationLevel};

/// Ask the user for a plaintext notes folder.
pub async fn pick_folder() -> Option<PathBuf> {
    AsyncFileDialog::new()
        .set_title("Select notes folder")
        .pick_folder()
        .await
        .map(|folder| folder.path().to_path_buf())
}

/// Ask the user where to save a plaintext note.
pub async fn pick_save_path(initial_dir: &Path) -> Option<PathBuf> {
    let default_name = suggested_note_file_name(chrono::Local::now().naive_local());
    AsyncFileDialog::new()
        .set_title("Save note")
        .set_directory(initial_dir)
        .set_file_name(default_name)
        .add_filter("Text files", &[NoteKind::Plain.extension()])
        .save_file()
        .await
        .map(|file| file.path().to_path_buf())
}

/// Show a notification as a modal message box.
pub async fn notify(notification: Notification) {
    AsyncMessageDialog::new()
        .set_level(message_level(notification.level))
        .set_title(notification.title)
        .set_description(notification.message)
        .set_buttons(MessageButtons::Ok)
        .show()
        .await;
}

/// Build a default file name for the save dialog.
#[must_use]
pub fn suggested_note_file_name(now: NaiveDateTime) -> String {
    format!(
        "note-{}.{}",
        now.format("%Y%m%d-%H%M%S"),
        NoteKind::Plain.extension()
    )
}

const fn message_level(level: NotificationLevel) -> MessageLevel {
    match level {
        NotificationLevel::Info => MessageLevel::Info,
        NotificationLevel::Warning => MessageLevel::Warning,
        NotificationLevel::Error => MessageLevel::Error,
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn suggested_note_file_name_uses_plain_extension() {
        let now = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(14, 5, 7)
            .unwrap();
        assert_eq!(suggested_note_file_name(now), "note-20240309-140507.txt");
    }

    #[test]
    fn message_level_matches_notification_level() {
        assert!(matches!(
            message_level(NotificationLevel::Info),
            MessageLevel::Info
        ));
        assert!(matches!(
            message_level(NotificationLevel::Warning),
            MessageLevel::Warning
        ));
        assert!(matches!(
            message_level(NotificationLevel::Error),
            MessageLevel::Error
        ));
    }
}
