//! Basic UI widgets

use macroquad::prelude::*;

use super::theme::*;
use super::{Rect, UiContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    Primary,
    Secondary,
    Danger,
}

/// Draw a rounded rectangle (simple approximation using overlapping rects)
pub fn draw_rounded_rect(x: f32, y: f32, w: f32, h: f32, r: f32, color: Color) {
    let r = r.min(w * 0.5).min(h * 0.5);
    // Main body
    draw_rectangle(x + r, y, w - r * 2.0, h, color);
    draw_rectangle(x, y + r, w, h - r * 2.0, color);
    // Corners (circles)
    draw_circle(x + r, y + r, r, color);
    draw_circle(x + w - r, y + r, r, color);
    draw_circle(x + r, y + h - r, r, color);
    draw_circle(x + w - r, y + h - r, r, color);
}

/// Draw text centered in a rect
pub fn draw_text_centered(text: &str, rect: &Rect, font_size: f32, color: Color) {
    let dims = measure_text(text, None, font_size as u16, 1.0);
    let x = (rect.center_x() - dims.width * 0.5).round();
    let y = (rect.center_y() + dims.offset_y * 0.5).round();
    draw_text(text, x, y, font_size, color);
}

/// Labeled button, returns true if clicked. Disabled buttons never click.
pub fn button(ctx: &mut UiContext, rect: Rect, label: &str, style: ButtonStyle, enabled: bool) -> bool {
    let hovered = enabled && ctx.mouse.inside(&rect);

    let (fill, text) = match (style, enabled) {
        (_, false) => (DISABLED, WHITE),
        (ButtonStyle::Primary, true) => (if hovered { ACCENT_HOVER } else { ACCENT }, WHITE),
        (ButtonStyle::Danger, true) => (DANGER, WHITE),
        (ButtonStyle::Secondary, true) => (if hovered { PANEL_BORDER } else { PANEL_BG }, TEXT_COLOR),
    };

    draw_rounded_rect(rect.x, rect.y, rect.w, rect.h, 8.0, fill);
    if style == ButtonStyle::Secondary {
        draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, PANEL_BORDER);
    }
    draw_text_centered(label, &rect, FONT_SIZE_CONTENT, text);

    if !enabled {
        ctx.block(&rect);
        return false;
    }
    ctx.take_click(&rect)
}

/// Round color chip for the palette picker, returns true if clicked
pub fn swatch(ctx: &mut UiContext, rect: Rect, color: Color, selected: bool) -> bool {
    let radius = rect.w.min(rect.h) * 0.5 - 2.0;
    let (cx, cy) = (rect.center_x(), rect.center_y());
    if selected {
        draw_circle(cx, cy, radius + 2.0, TEXT_COLOR);
        draw_circle(cx, cy, radius, WHITE);
        draw_circle(cx, cy, radius - 3.0, color);
    } else {
        draw_circle(cx, cy, radius - 3.0, color);
    }
    ctx.take_click(&rect)
}

/// Paper-color bytes to a macroquad color
pub fn rgb_color(rgb: [u8; 3]) -> Color {
    Color::from_rgba(rgb[0], rgb[1], rgb[2], 255)
}

/// Greedy line wrap by measured width.
///
/// Breaks between characters, not just at spaces, so unspaced CJK text
/// wraps too. A single character wider than `max_width` still gets a line.
pub fn wrap_lines(text: &str, max_width: f32, measure: impl Fn(&str) -> f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        if ch == '\n' {
            lines.push(std::mem::take(&mut current));
            continue;
        }
        current.push(ch);
        if measure(&current) > max_width && current.chars().count() > 1 {
            current.pop();
            // Prefer breaking at the last space on the line
            match current.rfind(' ') {
                Some(space) if space > 0 => {
                    let rest = current[space + 1..].to_string();
                    current.truncate(space);
                    lines.push(std::mem::replace(&mut current, rest));
                }
                _ => lines.push(std::mem::take(&mut current)),
            }
            current.push(ch);
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// `wrap_lines` with macroquad's default font
pub fn wrap_text(text: &str, max_width: f32, font_size: f32) -> Vec<String> {
    wrap_lines(text, max_width, |s| measure_text(s, None, font_size as u16, 1.0).width)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every character is 10 wide
    fn mono(s: &str) -> f32 {
        s.chars().count() as f32 * 10.0
    }

    #[test]
    fn test_short_text_is_one_line() {
        assert_eq!(wrap_lines("peace", 100.0, mono), vec!["peace"]);
        assert_eq!(wrap_lines("", 100.0, mono), vec![""]);
    }

    #[test]
    fn test_wraps_at_spaces() {
        assert_eq!(
            wrap_lines("love and peace", 90.0, mono),
            vec!["love and", "peace"]
        );
    }

    #[test]
    fn test_wraps_unspaced_text() {
        assert_eq!(wrap_lines("星星星星星", 30.0, mono), vec!["星星星", "星星"]);
    }

    #[test]
    fn test_narrow_width_keeps_one_char_per_line() {
        assert_eq!(wrap_lines("ab", 5.0, mono), vec!["a", "b"]);
    }

    #[test]
    fn test_rgb_color() {
        let c = rgb_color([255, 0, 0]);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
    }
}
