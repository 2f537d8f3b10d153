//! Colors for the desktop app
//!
//! Jot ships one dark palette: charcoal surfaces with gold action buttons.

/// Color palette for the application
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub bg_primary: &'static str,
    pub bg_secondary: &'static str,
    pub text_primary: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub accent_text: &'static str,
    pub overlay: &'static str,
}

pub const PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#2e2e2e",
    bg_secondary: "#383838",
    text_primary: "#ffffff",
    text_muted: "#a0a0a0",
    border: "#4a4a4a",
    accent: "#ffd700",
    accent_text: "#000000",
    overlay: "rgba(0, 0, 0, 0.55)",
};

/// Inline style for the gold action buttons
#[must_use]
pub fn button_style() -> String {
    let colors = &PALETTE;
    format!(
        "
        background: {};
        color: {};
        border: 3px outset {};
        padding: 6px 18px;
        font-weight: 600;
        cursor: pointer;
        ",
        colors.accent, colors.accent_text, colors.accent
    )
}
