//! Star records and the color palette

use serde::{Deserialize, Serialize};

use crate::locale::StringId;

/// Longest wish a star can hold, in characters
pub const MAX_MESSAGE_LENGTH: usize = 50;

/// Creation-time clock reading in epoch milliseconds, unique per store
pub type StarId = i64;

/// The seven paper colors a star can be folded from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StarColor {
    #[default]
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Indigo,
    Violet,
}

impl StarColor {
    /// Palette order, as shown in the color picker
    pub const ALL: [StarColor; 7] = [
        StarColor::Red,
        StarColor::Orange,
        StarColor::Yellow,
        StarColor::Green,
        StarColor::Blue,
        StarColor::Indigo,
        StarColor::Violet,
    ];

    pub fn id(self) -> &'static str {
        match self {
            StarColor::Red => "red",
            StarColor::Orange => "orange",
            StarColor::Yellow => "yellow",
            StarColor::Green => "green",
            StarColor::Blue => "blue",
            StarColor::Indigo => "indigo",
            StarColor::Violet => "violet",
        }
    }

    /// The value stored on a record
    pub fn hex(self) -> &'static str {
        match self {
            StarColor::Red => "#FF5252",
            StarColor::Orange => "#FF9800",
            StarColor::Yellow => "#F9C600",
            StarColor::Green => "#4CAF50",
            StarColor::Blue => "#2196F3",
            StarColor::Indigo => "#3F51B5",
            StarColor::Violet => "#9C27B0",
        }
    }

    pub fn label_id(self) -> StringId {
        match self {
            StarColor::Red => StringId::ColorRed,
            StarColor::Orange => StringId::ColorOrange,
            StarColor::Yellow => StringId::ColorYellow,
            StarColor::Green => StringId::ColorGreen,
            StarColor::Blue => StringId::ColorBlue,
            StarColor::Indigo => StringId::ColorIndigo,
            StarColor::Violet => StringId::ColorViolet,
        }
    }

    pub fn from_id(id: &str) -> Option<StarColor> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }

    /// Case-insensitive hex lookup
    pub fn from_hex(hex: &str) -> Option<StarColor> {
        Self::ALL.into_iter().find(|c| c.hex().eq_ignore_ascii_case(hex))
    }

    pub fn rgb(self) -> [u8; 3] {
        parse_hex(self.hex()).unwrap_or([255, 255, 255])
    }
}

/// Parse `#RRGGBB` into bytes
pub fn parse_hex(hex: &str) -> Option<[u8; 3]> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}

/// Whether `text` may become a star: non-blank and within the length bound
pub fn is_submittable(text: &str) -> bool {
    !text.trim().is_empty() && text.chars().count() <= MAX_MESSAGE_LENGTH
}

/// Cosmetic placement picked when a star finishes its drop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementHint {
    /// Degrees, [0, 360)
    pub rotation: f32,
    /// Horizontal position as a percentage of the strip, [10, 90)
    pub x_percent: f32,
}

/// A persisted star.
///
/// Field names match the stored JSON so existing jars keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarRecord {
    pub id: StarId,
    pub message: String,
    /// Palette hex value, e.g. `#2196F3`
    pub color: String,
    /// Epoch milliseconds
    pub timestamp: i64,
    #[serde(default)]
    pub rotation: f32,
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
}

impl StarRecord {
    /// Palette entry for this record, if the stored hex is one of ours
    pub fn star_color(&self) -> Option<StarColor> {
        StarColor::from_hex(&self.color)
    }

    /// Render color; unknown hex values fall back to white paper
    pub fn rgb(&self) -> [u8; 3] {
        parse_hex(&self.color).unwrap_or([255, 255, 255])
    }
}
