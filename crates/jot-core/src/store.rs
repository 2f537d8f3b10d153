//! Reading and writing note files.
//!
//! Writes go straight to the destination path; there is no temp-file rename,
//! so an interrupted write can leave a partial file behind.

use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::cipher::{self, Password};
use crate::{Error, NoteKind, NoteRecord, Result};

/// Prefix for generated hidden-note file names.
pub const HIDDEN_FILE_PREFIX: &str = "hidden_";

const HIDDEN_STAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Create `dir` (and parents) if it does not exist yet.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    Ok(())
}

/// Append the plaintext extension when the chosen path has none.
#[must_use]
pub fn with_default_extension(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(NoteKind::Plain.extension())
    }
}

/// File name for a hidden note saved at `saved_at`.
#[must_use]
pub fn hidden_file_name(saved_at: NaiveDateTime) -> String {
    format!(
        "{HIDDEN_FILE_PREFIX}{}.{}",
        saved_at.format(HIDDEN_STAMP_FORMAT),
        NoteKind::Hidden.extension()
    )
}

/// Write a plaintext note verbatim and return its listing row.
///
/// Returns the record together with the path actually written, which may
/// differ from `path` by the default extension.
pub fn save_note(
    path: &Path,
    content: &str,
    saved_at: NaiveDateTime,
) -> Result<(PathBuf, NoteRecord)> {
    let path = with_default_extension(path);
    let file_name = file_name_of(&path)?;

    std::fs::write(&path, content)?;
    tracing::info!("Saved note to {}", path.display());

    Ok((path, NoteRecord::new(file_name, saved_at)))
}

/// Obfuscate `content` with `password` and write it into `dir`.
///
/// Names only carry whole seconds, so a second hidden save within the same
/// second fails with `AlreadyExists` instead of replacing the first.
pub fn save_hidden_note(
    dir: &Path,
    content: &str,
    password: &Password,
    saved_at: NaiveDateTime,
) -> Result<(PathBuf, NoteRecord)> {
    let file_name = hidden_file_name(saved_at);
    let path = dir.join(&file_name);

    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)?
        .write_all(&cipher::encrypt(content, password))?;
    tracing::info!("Saved hidden note to {}", path.display());

    Ok((path, NoteRecord::new(file_name, saved_at)))
}

/// Read and decode a hidden note from `dir`.
pub fn read_hidden_note(dir: &Path, file_name: &str, password: &Password) -> Result<String> {
    let path = dir.join(file_name);
    if path.file_name().and_then(|name| name.to_str()) != Some(file_name) {
        return Err(Error::InvalidInput(format!(
            "Not a hidden note name: {file_name}"
        )));
    }

    let payload = std::fs::read(&path)?;
    tracing::debug!("Read {} bytes from {}", payload.len(), path.display());
    cipher::decrypt(&payload, password)
}

fn file_name_of(path: &Path) -> Result<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| Error::InvalidInput(format!("No file name in {}", path.display())))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(14, 5, 7)
            .unwrap()
    }

    fn password(value: &str) -> Password {
        Password::new(value).unwrap()
    }

    #[test]
    fn hidden_file_name_uses_compact_timestamp() {
        assert_eq!(hidden_file_name(timestamp()), "hidden_20240309140507.hidden");
    }

    #[test]
    fn default_extension_only_added_when_missing() {
        assert_eq!(
            with_default_extension(Path::new("/tmp/shopping")),
            PathBuf::from("/tmp/shopping.txt")
        );
        assert_eq!(
            with_default_extension(Path::new("/tmp/shopping.txt")),
            PathBuf::from("/tmp/shopping.txt")
        );
        assert_eq!(
            with_default_extension(Path::new("/tmp/log.md")),
            PathBuf::from("/tmp/log.md")
        );
    }

    #[test]
    fn save_note_writes_content_verbatim() {
        let dir = tempdir().unwrap();
        let content = "first line\nsecond line without newline";

        let (path, record) = save_note(&dir.path().join("todo"), content, timestamp()).unwrap();

        assert_eq!(path, dir.path().join("todo.txt"));
        assert_eq!(record.file_name, "todo.txt");
        assert_eq!(record.saved_at, timestamp());
        assert_eq!(std::fs::read_to_string(path).unwrap(), content);
    }

    #[test]
    fn save_note_into_missing_folder_fails() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("missing").join("todo.txt");
        assert!(matches!(
            save_note(&target, "text", timestamp()),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn hidden_note_bytes_decode_with_same_password() {
        let dir = tempdir().unwrap();

        let (path, record) =
            save_hidden_note(dir.path(), "hello", &password("abc"), timestamp()).unwrap();
        assert_eq!(record.file_name, "hidden_20240309140507.hidden");

        let stored = std::fs::read(path).unwrap();
        assert_ne!(stored, b"hello");
        let decoded = cipher::xor_keystream(&stored, b"abc").unwrap();
        assert_eq!(decoded, b"hello");
    }

    #[test]
    fn hidden_save_in_same_second_keeps_first_note() {
        let dir = tempdir().unwrap();
        let (path, _) = save_hidden_note(dir.path(), "one", &password("k"), timestamp()).unwrap();

        let second = save_hidden_note(dir.path(), "two", &password("k"), timestamp());
        match second {
            Err(Error::Io(error)) => assert_eq!(error.kind(), std::io::ErrorKind::AlreadyExists),
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(
            cipher::xor_keystream(&std::fs::read(path).unwrap(), b"k").unwrap(),
            b"one"
        );
    }

    #[test]
    fn read_hidden_note_round_trips() {
        let dir = tempdir().unwrap();
        let (_, record) =
            save_hidden_note(dir.path(), "dear diary ✓", &password("pw"), timestamp()).unwrap();

        let text = read_hidden_note(dir.path(), &record.file_name, &password("pw")).unwrap();
        assert_eq!(text, "dear diary ✓");
    }

    #[test]
    fn read_hidden_note_rejects_paths() {
        let dir = tempdir().unwrap();
        let result = read_hidden_note(dir.path(), "../escape.hidden", &password("pw"));
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn ensure_dir_is_idempotent() {
        let dir = tempdir().unwrap();
        let hidden = dir.path().join("Hidden");
        ensure_dir(&hidden).unwrap();
        ensure_dir(&hidden).unwrap();
        assert!(hidden.is_dir());
    }
}
