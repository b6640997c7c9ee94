//! Immediate-mode UI for the star jar
//!
//! - Rect-based layout, rebuilt every frame
//! - Widgets report clicks; panels turn them into actions for the app
//! - Macroquad integration for rendering

mod input;
mod panels;
mod rect;
mod text_input;
pub mod theme;
mod widgets;

pub use input::*;
pub use panels::*;
pub use rect::*;
pub use text_input::*;
pub use widgets::*;
