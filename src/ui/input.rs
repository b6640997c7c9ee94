//! Input state for UI interaction

use macroquad::prelude::*;

use super::Rect;

/// Mouse button state. Touches arrive as the left button.
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub left_down: bool,
    pub left_pressed: bool,  // Just pressed this frame
    pub left_released: bool, // Just released this frame
    pub scroll: f32,         // Scroll wheel delta
}

impl MouseState {
    /// Read this frame's mouse from macroquad
    pub fn capture() -> Self {
        let (x, y) = mouse_position();
        Self {
            x,
            y,
            left_down: is_mouse_button_down(MouseButton::Left),
            left_pressed: is_mouse_button_pressed(MouseButton::Left),
            left_released: is_mouse_button_released(MouseButton::Left),
            scroll: mouse_wheel().1,
        }
    }

    pub fn position(&self) -> Vec2 {
        vec2(self.x, self.y)
    }

    /// Check if mouse is inside a rect
    pub fn inside(&self, rect: &Rect) -> bool {
        rect.contains(self.x, self.y)
    }

    /// Check if mouse just clicked inside a rect
    pub fn clicked(&self, rect: &Rect) -> bool {
        self.left_pressed && rect.contains(self.x, self.y)
    }
}

/// UI context passed through the frame
#[derive(Debug, Default)]
pub struct UiContext {
    pub mouse: MouseState,
    /// Set once a widget has used this frame's click, so the scene behind
    /// it doesn't react as well
    consumed: bool,
}

impl UiContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset at start of frame (call before UI code)
    pub fn begin_frame(&mut self, mouse: MouseState) {
        self.mouse = mouse;
        self.consumed = false;
    }

    /// A click inside `rect` that nothing else has claimed yet. Claims it.
    pub fn take_click(&mut self, rect: &Rect) -> bool {
        if !self.consumed && self.mouse.clicked(rect) {
            self.consumed = true;
            return true;
        }
        false
    }

    /// Claim the click if it landed in `rect` (for panels that swallow input)
    pub fn block(&mut self, rect: &Rect) {
        if self.mouse.clicked(rect) {
            self.consumed = true;
        }
    }

    /// Claim any press this frame, wherever it landed (modal panels)
    pub fn consume_if_pressed(&mut self) {
        if self.mouse.left_pressed {
            self.consumed = true;
        }
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed
    }
}
