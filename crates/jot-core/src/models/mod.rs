//! Data models for Jot

mod note;

pub use note::{NoteKind, NoteRecord, TIMESTAMP_FORMAT};
