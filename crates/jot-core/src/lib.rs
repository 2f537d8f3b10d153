//! jot-core - Core library for Jot
//!
//! This crate contains the note models, the hidden-note cipher, folder
//! registries and the session controller used by the Jot desktop shell.

pub mod cipher;
pub mod config;
pub mod error;
pub mod models;
pub mod recent;
pub mod registry;
pub mod session;
pub mod store;

pub use error::{Error, Result};
pub use models::{NoteKind, NoteRecord};
pub use session::{Command, Notification, NotificationLevel, Session};
