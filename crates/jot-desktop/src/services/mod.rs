//! Application services
//!
//! Native dialogs used by the desktop shell.

mod dialogs;

pub use dialogs::{notify, pick_folder, pick_save_path};
