//! Two-column table of note records

use dioxus::prelude::*;

use jot_core::NoteRecord;

use crate::theme::PALETTE;

/// File name / save time listing
///
/// When `onselect` is set, rows are clickable and report their file name.
#[component]
pub fn NoteTable(
    rows: Vec<NoteRecord>,
    empty_text: String,
    onselect: Option<EventHandler<String>>,
) -> Element {
    let colors = &PALETTE;
    let cursor = if onselect.is_some() { "pointer" } else { "default" };

    rsx! {
        table {
            class: "note-table",
            style: "width: 100%; border-collapse: collapse;",

            thead {
                tr {
                    style: "text-align: left; color: {colors.text_muted};",
                    th { style: "padding: 6px 8px; border-bottom: 1px solid {colors.border};", "File Name" }
                    th { style: "padding: 6px 8px; border-bottom: 1px solid {colors.border};", "Save Time" }
                }
            }

            tbody {
                if rows.is_empty() {
                    tr {
                        td {
                            colspan: "2",
                            style: "padding: 20px; text-align: center; color: {colors.text_muted};",
                            "{empty_text}"
                        }
                    }
                }
                for (index, row) in rows.into_iter().enumerate() {
                    {
                        let saved_at = row.saved_at_display();
                        let file_name = row.file_name;
                        let selected_name = file_name.clone();

                        rsx! {
                            tr {
                                key: "{index}-{file_name}",
                                style: "cursor: {cursor}; border-bottom: 1px solid {colors.border};",
                                onclick: move |_| {
                                    if let Some(handler) = onselect {
                                        handler.call(selected_name.clone());
                                    }
                                },
                                td { style: "padding: 6px 8px;", "{file_name}" }
                                td { style: "padding: 6px 8px; white-space: nowrap;", "{saved_at}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
