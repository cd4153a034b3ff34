//! Color theme constants for the console
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Selected tab / focused input
pub const COLOR_ACTIVE: Color = Color::LightGreen;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Background for input areas
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);

/// Background of the selected table row
pub const COLOR_SELECTED_BG: Color = Color::Rgb(40, 40, 60);

// ============================================================================
// Status Colors
// ============================================================================

pub const COLOR_OK: Color = Color::Rgb(4, 181, 117); // green #04B575

pub const COLOR_ERROR: Color = Color::Red;

// ============================================================================
// Chart Colors
// ============================================================================

/// Session charts
pub const COLOR_SESSIONS: Color = Color::Rgb(0, 122, 204); // blue #007ACC

/// Crash charts
pub const COLOR_CRASHES: Color = Color::Rgb(224, 108, 117);

/// Slices of pie charts, cycled
pub const PIE_PALETTE: [Color; 6] = [
    Color::Rgb(0, 122, 204),
    Color::Rgb(4, 181, 117),
    Color::Rgb(229, 192, 123),
    Color::Rgb(224, 108, 117),
    Color::Rgb(198, 120, 221),
    Color::Rgb(86, 182, 194),
];

// ============================================================================
// Dialog Colors
// ============================================================================

/// Background color for the config dialog
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);
