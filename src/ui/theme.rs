//! Color theme constants.
//!
//! The site's palette: deep blue primary, teal secondary, pale blue-grey
//! background for tiles, red for the health accent and errors.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Brand Colors
// ============================================================================

/// Primary blue (#020887), header bar and selected tiles
pub const COLOR_PRIMARY: Color = Color::Rgb(2, 8, 135);

/// Secondary teal (#00635D), subtitles and success messages
pub const COLOR_SECONDARY: Color = Color::Rgb(0, 99, 93);

/// Light tile background (#DBE4EE)
pub const COLOR_BACKGROUND_LIGHT: Color = Color::Rgb(219, 228, 238);

/// Health accent and errors (#E3170A)
pub const COLOR_ACCENT_RED: Color = Color::Rgb(227, 23, 10);

pub const COLOR_WHITE: Color = Color::White;

// ============================================================================
// Text
// ============================================================================

/// Muted body text (#6B7280)
pub const COLOR_MUTED: Color = Color::Rgb(107, 114, 128);

pub const COLOR_BORDER: Color = Color::DarkGray;

pub const COLOR_DIM: Color = Color::DarkGray;

/// Links and `[n]` markers (#6366F1)
pub const COLOR_LINK: Color = Color::Rgb(99, 102, 241);

pub fn header_style() -> Style {
    Style::default()
        .fg(COLOR_WHITE)
        .bg(COLOR_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn selected_style() -> Style {
    Style::default()
        .fg(COLOR_WHITE)
        .bg(COLOR_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn title_style() -> Style {
    Style::default()
        .fg(COLOR_BACKGROUND_LIGHT)
        .add_modifier(Modifier::BOLD)
}
