//! Rectangle type for UI layout

/// A rectangle defined by position and size
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Create from screen dimensions
    pub fn screen(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.w * 0.5
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.h * 0.5
    }

    /// Check if point is inside
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Shrink by padding on all sides
    pub fn pad(&self, padding: f32) -> Self {
        Self::new(
            self.x + padding,
            self.y + padding,
            (self.w - padding * 2.0).max(0.0),
            (self.h - padding * 2.0).max(0.0),
        )
    }

    /// A `w × h` rect centered in this one (clamped to fit)
    pub fn centered(&self, w: f32, h: f32) -> Self {
        let w = w.min(self.w);
        let h = h.min(self.h);
        Self::new(self.center_x() - w * 0.5, self.center_y() - h * 0.5, w, h)
    }

    /// Split horizontally at fixed pixel position from left, returns (left, right)
    pub fn split_h_px(&self, pixels: f32) -> (Self, Self) {
        let split_x = pixels.clamp(0.0, self.w);
        (
            Self::new(self.x, self.y, split_x, self.h),
            Self::new(self.x + split_x, self.y, self.w - split_x, self.h),
        )
    }

    /// Get a horizontal slice (for headers)
    pub fn slice_top(&self, height: f32) -> Self {
        Self::new(self.x, self.y, self.w, height.min(self.h))
    }

    /// Get remaining area after slicing top
    pub fn remaining_after_top(&self, height: f32) -> Self {
        let h = height.min(self.h);
        Self::new(self.x, self.y + h, self.w, self.h - h)
    }

    /// Get a horizontal slice from bottom
    pub fn slice_bottom(&self, height: f32) -> Self {
        let h = height.min(self.h);
        Self::new(self.x, self.bottom() - h, self.w, h)
    }

    /// Get remaining area after slicing bottom
    pub fn remaining_after_bottom(&self, height: f32) -> Self {
        let h = height.min(self.h);
        Self::new(self.x, self.y, self.w, self.h - h)
    }

    /// Slice from the right edge
    pub fn slice_right(&self, width: f32) -> Self {
        let w = width.min(self.w);
        Self::new(self.right() - w, self.y, w, self.h)
    }

    /// `count` equal cells laid left to right with `gap` between them
    pub fn columns(&self, count: usize, gap: f32) -> Vec<Self> {
        if count == 0 {
            return Vec::new();
        }
        let total_gap = gap * (count - 1) as f32;
        let cell = ((self.w - total_gap) / count as f32).max(0.0);
        (0..count)
            .map(|i| Self::new(self.x + i as f32 * (cell + gap), self.y, cell, self.h))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!(r.contains(50.0, 40.0));
        assert!(!r.contains(5.0, 40.0));
        assert!(!r.contains(50.0, 100.0));
    }

    #[test]
    fn test_slices() {
        let r = Rect::screen(400.0, 800.0);
        let header = r.slice_top(60.0);
        let body = r.remaining_after_top(60.0);
        assert_eq!(header.h, 60.0);
        assert_eq!(body.y, 60.0);
        assert_eq!(body.h, 740.0);

        let strip = body.slice_bottom(140.0);
        assert_eq!(strip.bottom(), 800.0);
        assert_eq!(body.remaining_after_bottom(140.0).bottom(), strip.y);
    }

    #[test]
    fn test_centered() {
        let r = Rect::new(0.0, 0.0, 100.0, 100.0).centered(40.0, 200.0);
        assert_eq!(r, Rect::new(30.0, 0.0, 40.0, 100.0));
    }

    #[test]
    fn test_columns() {
        let cells = Rect::new(0.0, 0.0, 230.0, 20.0).columns(7, 5.0);
        assert_eq!(cells.len(), 7);
        assert!((cells[0].w - 200.0 / 7.0).abs() < 1e-4);
        assert!((cells[6].right() - 230.0).abs() < 1e-3);
        assert!(Rect::new(0.0, 0.0, 10.0, 10.0).columns(0, 1.0).is_empty());
    }
}
