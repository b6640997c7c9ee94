//! UI Theme - Shared colors and styling constants
//!
//! Night-sky palette for the jar scene and warm paper tones for panels.

use macroquad::prelude::Color;

// =============================================================================
// Scene
// =============================================================================

/// Clear color behind the jar
pub const SKY_COLOR: Color = Color::new(0.06, 0.07, 0.14, 1.0);

/// Jar outline
pub const GLASS_COLOR: Color = Color::new(0.75, 0.85, 0.95, 0.55);

/// Jar floor
pub const GLASS_BASE: Color = Color::new(0.7, 0.8, 0.9, 0.25);

/// Dim layer behind the fold area and modals
pub const SCRIM: Color = Color::new(0.0, 0.0, 0.0, 0.55);

// =============================================================================
// Panels
// =============================================================================

pub const PANEL_BG: Color = Color::new(0.98, 0.96, 0.92, 1.0);

pub const PANEL_BORDER: Color = Color::new(0.82, 0.78, 0.72, 1.0);

pub const INPUT_BG: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// Primary text on panels
pub const TEXT_COLOR: Color = Color::new(0.2, 0.18, 0.16, 1.0);

/// Placeholders, dates, counters
pub const TEXT_DIM: Color = Color::new(0.55, 0.52, 0.48, 1.0);

/// Text drawn straight on the sky
pub const TEXT_LIGHT: Color = Color::new(0.95, 0.93, 0.85, 1.0);

/// Buttons and focus rings
pub const ACCENT: Color = Color::new(0.96, 0.62, 0.2, 1.0);

pub const ACCENT_HOVER: Color = Color::new(1.0, 0.7, 0.3, 1.0);

pub const DANGER: Color = Color::new(0.86, 0.26, 0.24, 1.0);

pub const DISABLED: Color = Color::new(0.75, 0.73, 0.7, 1.0);

// =============================================================================
// Font Sizes
// =============================================================================

pub const FONT_SIZE_TITLE: f32 = 28.0;

pub const FONT_SIZE_HEADER: f32 = 20.0;

pub const FONT_SIZE_CONTENT: f32 = 18.0;

pub const FONT_SIZE_SMALL: f32 = 14.0;
