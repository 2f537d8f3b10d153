//! Note record model

use std::fmt;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Local, NaiveDateTime, TimeDelta, TimeZone, Timelike};

/// Display format for save timestamps (seconds precision).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Which family of notes a file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteKind {
    /// Plain text note in the user-chosen folder
    Plain,
    /// XOR-obfuscated note in the hidden folder
    Hidden,
}

impl NoteKind {
    /// File extension (without the dot) used for this kind of note
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Plain => "txt",
            Self::Hidden => "hidden",
        }
    }

    /// Check whether a path's file name ends in this kind's extension
    ///
    /// A bare `.txt` counts: it is a dot file as far as `Path::extension` is
    /// concerned, but still a note.
    #[must_use]
    pub fn matches(self, path: &Path) -> bool {
        let suffix = format!(".{}", self.extension());
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(&suffix))
    }
}

/// A row in one of the note listings
///
/// Records are never persisted; they are rebuilt from the filesystem on every
/// scan, or kept in memory for the recent list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRecord {
    /// File name without directory
    pub file_name: String,
    /// Save (or last modification) time, truncated to whole seconds
    pub saved_at: NaiveDateTime,
}

impl NoteRecord {
    /// Create a record, dropping sub-second precision from the timestamp
    #[must_use]
    pub fn new(file_name: impl Into<String>, saved_at: NaiveDateTime) -> Self {
        Self {
            file_name: file_name.into(),
            saved_at: saved_at.with_nanosecond(0).unwrap_or(saved_at),
        }
    }

    /// Create a record from a filesystem modification time
    ///
    /// Returns `None` when the time cannot be represented as a local date.
    #[must_use]
    pub fn from_modified(file_name: impl Into<String>, modified: SystemTime) -> Option<Self> {
        let utc = match modified.duration_since(UNIX_EPOCH) {
            Ok(after) => {
                DateTime::from_timestamp(i64::try_from(after.as_secs()).ok()?, after.subsec_nanos())
            }
            Err(before) => {
                let before = before.duration();
                DateTime::from_timestamp(-i64::try_from(before.as_secs()).ok()?, 0)
            }
        }?
        .naive_utc();

        let offset = Local.offset_from_utc_datetime(&utc).local_minus_utc();
        let local = utc.checked_add_signed(TimeDelta::seconds(i64::from(offset)))?;
        Some(Self::new(file_name, local))
    }

    /// Save time rendered as `YYYY-MM-DD HH:MM:SS`
    #[must_use]
    pub fn saved_at_display(&self) -> String {
        self.saved_at.format(TIMESTAMP_FORMAT).to_string()
    }
}

impl fmt::Display for NoteRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  {}", self.file_name, self.saved_at_display())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_milli_opt(14, 5, 7, 999)
            .unwrap()
    }

    #[test]
    fn test_record_truncates_to_seconds() {
        let record = NoteRecord::new("todo.txt", timestamp());
        assert_eq!(record.saved_at.nanosecond(), 0);
        assert_eq!(record.saved_at_display(), "2024-03-09 14:05:07");
    }

    #[test]
    fn test_display_shows_name_and_time() {
        let record = NoteRecord::new("todo.txt", timestamp());
        assert_eq!(record.to_string(), "todo.txt  2024-03-09 14:05:07");
    }

    #[test]
    fn test_from_modified_keeps_whole_seconds() {
        let modified = UNIX_EPOCH + Duration::new(1_700_000_000, 250_000_000);
        let record = NoteRecord::from_modified("a.txt", modified).unwrap();
        let expected: DateTime<Local> = Local.timestamp_opt(1_700_000_000, 0).unwrap();
        assert_eq!(record.saved_at, expected.naive_local());
    }

    #[test]
    fn test_from_modified_out_of_range_is_none() {
        let far_future = UNIX_EPOCH + Duration::from_secs(9_999_999_999_999);
        assert_eq!(NoteRecord::from_modified("future.txt", far_future), None);
    }

    #[test]
    fn test_kind_extensions() {
        assert_eq!(NoteKind::Plain.extension(), "txt");
        assert_eq!(NoteKind::Hidden.extension(), "hidden");
    }

    #[test]
    fn test_kind_matches_extension_exactly() {
        assert!(NoteKind::Plain.matches(Path::new("/notes/a.txt")));
        assert!(!NoteKind::Plain.matches(Path::new("/notes/a.txt.bak")));
        assert!(!NoteKind::Plain.matches(Path::new("/notes/txt")));
        assert!(NoteKind::Plain.matches(Path::new("/notes/.txt")));
        assert!(NoteKind::Hidden.matches(Path::new("hidden_20240309140507.hidden")));
        assert!(!NoteKind::Hidden.matches(Path::new("a.txt")));
    }
}
