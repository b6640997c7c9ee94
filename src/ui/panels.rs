//! App panels: header, wish strip, wish list, star card and confirm dialog
//!
//! Each panel draws itself and reports what the user asked for; the app
//! decides what that means. Panels never touch the store directly.

use macroquad::prelude::*;

use super::theme::*;
use super::{
    button, draw_rounded_rect, draw_text_centered, draw_text_input, rgb_color, swatch, wrap_text,
    ButtonStyle, Rect, TextInputState, UiContext,
};
use crate::locale::{self, Language, StringId};
use crate::star::{format_timestamp, is_submittable, StarColor, StarId, StarRecord};

pub const HEADER_HEIGHT: f32 = 72.0;
pub const STRIP_HEIGHT: f32 = 128.0;
const LIST_ROW_HEIGHT: f32 = 64.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    CycleLanguage,
    OpenList,
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripAction {
    Submit,
    PickColor(StarColor),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    Close,
    Open(StarId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Close,
    Delete,
}

/// `n / max` under the wish field
pub fn char_counter(count: usize, max: usize) -> String {
    format!("{} / {}", count, max)
}

/// Title bar with today's count and the header buttons
pub fn header(
    ctx: &mut UiContext,
    rect: Rect,
    lang: Language,
    today: usize,
    daily_limit: usize,
    has_stars: bool,
) -> Option<HeaderAction> {
    let mut action = None;

    draw_text(locale::text(lang, StringId::Title), rect.x + 16.0, rect.y + 32.0, FONT_SIZE_TITLE, TEXT_LIGHT);
    draw_text(locale::text(lang, StringId::Subtitle), rect.x + 16.0, rect.y + 54.0, FONT_SIZE_SMALL, TEXT_LIGHT);

    let today_text = locale::format(lang, StringId::TodayCount, today, daily_limit);
    draw_text(&today_text, rect.x + 16.0, rect.bottom() - 2.0, FONT_SIZE_SMALL, TEXT_DIM);

    let buttons = rect.slice_right(240.0).pad(16.0);
    let cells = buttons.columns(3, 8.0);

    if button(ctx, cells[0], lang.code(), ButtonStyle::Secondary, true) {
        action = Some(HeaderAction::CycleLanguage);
    }
    if button(ctx, cells[1], locale::text(lang, StringId::WishList), ButtonStyle::Secondary, true) {
        action = Some(HeaderAction::OpenList);
    }
    if has_stars && button(ctx, cells[2], locale::text(lang, StringId::Clear), ButtonStyle::Danger, true) {
        action = Some(HeaderAction::Clear);
    }

    action
}

/// Wish field, live counter, palette and submit button along the bottom
pub fn wish_strip(
    ctx: &mut UiContext,
    rect: Rect,
    input: &mut TextInputState,
    color: StarColor,
    lang: Language,
) -> Option<StripAction> {
    let mut action = None;

    draw_rectangle(rect.x, rect.y, rect.w, rect.h, PANEL_BG);
    draw_line(rect.x, rect.y, rect.right(), rect.y, 1.0, PANEL_BORDER);

    let inner = rect.pad(12.0);
    let (field_row, lower) = (inner.slice_top(44.0), inner.remaining_after_top(52.0));
    let (field, submit_rect) = field_row.split_h_px(field_row.w - 120.0);
    let field = Rect::new(field.x, field.y, field.w - 8.0, field.h);

    if ctx.mouse.left_pressed {
        input.focused = ctx.mouse.inside(&field);
    }
    draw_text_input(field, input, locale::text(lang, StringId::Placeholder), FONT_SIZE_CONTENT);

    let can_submit = is_submittable(&input.text);
    if button(ctx, submit_rect, locale::text(lang, StringId::Submit), ButtonStyle::Primary, can_submit)
        || (can_submit && input.focused && is_key_pressed(KeyCode::Enter))
    {
        action = Some(StripAction::Submit);
    }

    // Palette on the left, counter on the right
    let (palette, counter) = lower.split_h_px(lower.w - 80.0);
    let palette = Rect::new(palette.x, palette.y, (StarColor::ALL.len() as f32 * 40.0).min(palette.w), 36.0);
    for (cell, option) in palette.columns(StarColor::ALL.len(), 4.0).into_iter().zip(StarColor::ALL) {
        if swatch(ctx, cell, rgb_color(option.rgb()), option == color) {
            action = Some(StripAction::PickColor(option));
        }
    }

    let counter_text = char_counter(input.char_count(), input.max_chars);
    let counter_color = if input.is_full() { DANGER } else { TEXT_DIM };
    draw_text_centered(&counter_text, &counter.slice_top(36.0), FONT_SIZE_SMALL, counter_color);
    draw_text(
        locale::text(lang, color.label_id()),
        palette.x,
        palette.bottom() + 16.0,
        FONT_SIZE_SMALL,
        TEXT_DIM,
    );

    // Clicks on the strip's background don't reach the jar
    ctx.block(&rect);
    action
}

/// Every wish, newest first. `scroll` is in pixels and is clamped here.
pub fn wish_list(
    ctx: &mut UiContext,
    screen: Rect,
    records: &[&StarRecord],
    lang: Language,
    utc_offset_minutes: i32,
    scroll: &mut f32,
) -> Option<ListAction> {
    let mut action = None;

    draw_rectangle(screen.x, screen.y, screen.w, screen.h, SCRIM);
    let panel = screen.centered(screen.w.min(520.0) - 24.0, screen.h - 48.0);
    draw_rounded_rect(panel.x, panel.y, panel.w, panel.h, 12.0, PANEL_BG);

    let inner = panel.pad(16.0);
    draw_text(locale::text(lang, StringId::PaperTitle), inner.x, inner.y + 22.0, FONT_SIZE_HEADER, TEXT_COLOR);
    draw_text(locale::text(lang, StringId::PaperSubtitle), inner.x, inner.y + 44.0, FONT_SIZE_SMALL, TEXT_DIM);
    let total = locale::format(lang, StringId::TotalCount, records.len(), 0);
    draw_text(&total, inner.x, inner.y + 64.0, FONT_SIZE_SMALL, TEXT_DIM);
    let limit = locale::text(lang, StringId::DailyLimit);
    let limit_width = measure_text(limit, None, FONT_SIZE_SMALL as u16, 1.0).width;
    draw_text(limit, inner.right() - limit_width, inner.y + 64.0, FONT_SIZE_SMALL, TEXT_DIM);

    let close = inner.slice_top(32.0).slice_right(88.0);
    if button(ctx, close, locale::text(lang, StringId::Close), ButtonStyle::Secondary, true) {
        action = Some(ListAction::Close);
    }

    let rows = inner.remaining_after_top(80.0);
    if records.is_empty() {
        draw_text_centered(locale::text(lang, StringId::NoWishes), &rows.slice_top(60.0), FONT_SIZE_CONTENT, TEXT_DIM);
    }

    let content_height = records.len() as f32 * LIST_ROW_HEIGHT;
    let max_scroll = (content_height - rows.h).max(0.0);
    if ctx.mouse.inside(&rows) {
        *scroll -= ctx.mouse.scroll * 24.0;
    }
    *scroll = scroll.clamp(0.0, max_scroll);

    for (i, record) in records.iter().enumerate() {
        let row = Rect::new(
            rows.x,
            rows.y + i as f32 * LIST_ROW_HEIGHT - *scroll,
            rows.w,
            LIST_ROW_HEIGHT - 6.0,
        );
        // No clipping, so only whole rows are shown
        if row.y < rows.y - 0.5 || row.bottom() > rows.bottom() + 0.5 {
            continue;
        }

        draw_rounded_rect(row.x, row.y, row.w, row.h, 8.0, WHITE);
        draw_circle(row.x + 18.0, row.center_y(), 8.0, rgb_color(record.rgb()));
        let date = format_timestamp(record.timestamp, utc_offset_minutes);
        draw_text(&date, row.x + 36.0, row.y + 20.0, FONT_SIZE_SMALL, TEXT_DIM);
        let lines = wrap_text(&record.message, row.w - 48.0, FONT_SIZE_CONTENT);
        let first = lines.first().map(String::as_str).unwrap_or("");
        let shown = if lines.len() > 1 { format!("{}...", first) } else { first.to_string() };
        draw_text(&shown, row.x + 36.0, row.y + 44.0, FONT_SIZE_CONTENT, TEXT_COLOR);

        if ctx.take_click(&row) {
            action = Some(ListAction::Open(record.id));
        }
    }

    // The panel swallows every click; a click outside closes it
    if ctx.mouse.left_pressed && !ctx.mouse.inside(&panel) && !ctx.is_consumed() {
        action = Some(ListAction::Close);
    }
    ctx.consume_if_pressed();
    action
}

/// A single star's wish, color and date, with a delete button
pub fn star_card(
    ctx: &mut UiContext,
    screen: Rect,
    record: &StarRecord,
    lang: Language,
    utc_offset_minutes: i32,
) -> Option<CardAction> {
    let mut action = None;

    draw_rectangle(screen.x, screen.y, screen.w, screen.h, SCRIM);
    let card = screen.centered(340.0, 300.0);
    draw_rounded_rect(card.x, card.y, card.w, card.h, 12.0, PANEL_BG);
    let inner = card.pad(20.0);

    let paper = rgb_color(record.rgb());
    draw_circle(inner.x + 12.0, inner.y + 14.0, 10.0, paper);
    draw_text(locale::text(lang, StringId::StarModalTitle), inner.x + 32.0, inner.y + 20.0, FONT_SIZE_HEADER, TEXT_COLOR);

    let mut y = inner.y + 64.0;
    for line in wrap_text(&record.message, inner.w, FONT_SIZE_CONTENT) {
        draw_text(&line, inner.x, y, FONT_SIZE_CONTENT, TEXT_COLOR);
        y += FONT_SIZE_CONTENT + 6.0;
    }

    let mut footer = format_timestamp(record.timestamp, utc_offset_minutes);
    if let Some(color) = record.star_color() {
        footer = format!("{} · {}", locale::text(lang, color.label_id()), footer);
    }
    draw_text(&footer, inner.x, inner.bottom() - 56.0, FONT_SIZE_SMALL, TEXT_DIM);

    let buttons = inner.slice_bottom(40.0).columns(2, 12.0);
    if button(ctx, buttons[0], locale::text(lang, StringId::Close), ButtonStyle::Secondary, true) {
        action = Some(CardAction::Close);
    }
    if button(ctx, buttons[1], locale::text(lang, StringId::Delete), ButtonStyle::Danger, true) {
        action = Some(CardAction::Delete);
    }

    if ctx.mouse.left_pressed && !ctx.mouse.inside(&card) && !ctx.is_consumed() {
        action = Some(CardAction::Close);
    }
    ctx.consume_if_pressed();
    action
}

/// Yes/no dialog. `Some(true)` confirms, `Some(false)` cancels.
pub fn confirm_dialog(ctx: &mut UiContext, screen: Rect, message: &str, lang: Language) -> Option<bool> {
    let mut answer = None;

    draw_rectangle(screen.x, screen.y, screen.w, screen.h, SCRIM);
    let dialog = screen.centered(340.0, 200.0);
    draw_rounded_rect(dialog.x, dialog.y, dialog.w, dialog.h, 12.0, PANEL_BG);
    let inner = dialog.pad(20.0);

    let mut y = inner.y + 20.0;
    for line in wrap_text(message, inner.w, FONT_SIZE_CONTENT) {
        draw_text(&line, inner.x, y, FONT_SIZE_CONTENT, TEXT_COLOR);
        y += FONT_SIZE_CONTENT + 6.0;
    }

    let buttons = inner.slice_bottom(40.0).columns(2, 12.0);
    if button(ctx, buttons[0], locale::text(lang, StringId::Cancel), ButtonStyle::Secondary, true) {
        answer = Some(false);
    }
    if button(ctx, buttons[1], locale::text(lang, StringId::Confirm), ButtonStyle::Danger, true) {
        answer = Some(true);
    }

    ctx.consume_if_pressed();
    answer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_counter() {
        assert_eq!(char_counter(0, 50), "0 / 50");
        assert_eq!(char_counter(50, 50), "50 / 50");
    }
}
