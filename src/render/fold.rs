//! The fold area drawn over the jar while a wish is being folded
//!
//! Knotting and wrapping are flat paper drawn in screen space. From
//! inflation on, the star is a real mesh under its own camera so the puff
//! and the drop read as 3D.

use macroquad::math::EulerRot;
use macroquad::prelude::*;

use super::star::draw_smooth_star;
use crate::fold::drop::{START_ROTATION, START_SCALE};
use crate::fold::{FoldSession, FoldStage};
use crate::geometry::{rebuild, StarTopology};
use crate::locale::{self, Language, StringId};
use crate::ui::theme::{FONT_SIZE_CONTENT, FONT_SIZE_HEADER, SCRIM, TEXT_LIGHT};
use crate::ui::{draw_text_centered, rgb_color, Rect};

/// Paper strip proportions during knotting
const STRIP_HEIGHT: f32 = 44.0;
const PENTAGON_RADIUS: f32 = 80.0;
/// Side-to-side sway while the star inflates: amplitude in radians, rate in radians per second
const IDLE_SWAY: f32 = 0.4;
const IDLE_SWAY_RATE: f32 = 1.6;

fn fold_camera(screen: &Rect) -> Camera3D {
    Camera3D {
        position: Vec3::new(0.0, 0.0, 6.0),
        target: Vec3::ZERO,
        up: Vec3::Y,
        fovy: 45f32.to_radians(),
        aspect: Some(screen.w / screen.h.max(1.0)),
        ..Default::default()
    }
}

/// The rect gestures are read from
pub fn fold_area(screen: Rect) -> Rect {
    screen.centered(screen.w.min(440.0), (screen.h - 160.0).min(520.0))
}

fn hint_id(stage: FoldStage) -> Option<StringId> {
    match stage {
        FoldStage::Knotting => Some(StringId::HintKnot),
        FoldStage::Wrapping => Some(StringId::HintWrap),
        FoldStage::Inflating => Some(StringId::HintInflate),
        FoldStage::Collecting => Some(StringId::HintCollect),
        FoldStage::Completed => None,
    }
}

fn draw_strip(area: &Rect, session: &FoldSession, paper: Color) {
    let strip = area.centered(area.w * 0.85, STRIP_HEIGHT);
    draw_rectangle(strip.x, strip.y, strip.w, strip.h, paper);
    // Free end flicked up, waiting to be knotted
    draw_triangle(
        vec2(strip.right() - 36.0, strip.y),
        vec2(strip.right(), strip.y),
        vec2(strip.right() - 8.0, strip.y - 40.0),
        paper,
    );
    draw_text_centered(session.message(), &strip, FONT_SIZE_CONTENT, WHITE);
}

fn draw_pentagon(area: &Rect, session: &FoldSession, paper: Color) {
    let (cx, cy) = (area.center_x(), area.center_y());
    // A pentagon's flat side is down when rotated -90°
    draw_poly(cx, cy, 5, PENTAGON_RADIUS, -90.0, paper);
    draw_poly(cx, cy, 5, PENTAGON_RADIUS, -90.0, Color::new(0.0, 0.0, 0.0, session.wrap_shade()));

    let dots_y = cy + PENTAGON_RADIUS + 28.0;
    for i in 0..crate::fold::session::WRAPS_REQUIRED {
        let x = cx + (i as f32 - 1.0) * 24.0;
        if i < session.wrap_count() {
            draw_circle(x, dots_y, 7.0, TEXT_LIGHT);
        } else {
            draw_circle_lines(x, dots_y, 7.0, 1.5, TEXT_LIGHT);
        }
    }
}

fn draw_star_3d(screen: &Rect, session: &FoldSession, now_ms: f64, topology: &StarTopology) {
    let rgb = session.color().rgb();
    let transform = match session.drop_pose() {
        Some(pose) => {
            // The mesh already faces this camera; tumble relative to the start
            let r = pose.rotation - START_ROTATION;
            Mat4::from_scale_rotation_translation(
                Vec3::splat(pose.scale),
                Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z),
                pose.position,
            )
        }
        None => {
            let sway = ((now_ms / 1000.0) as f32 * IDLE_SWAY_RATE).sin() * IDLE_SWAY;
            Mat4::from_scale_rotation_translation(
                Vec3::splat(START_SCALE * session.pop_scale(now_ms)),
                Quat::from_rotation_y(sway),
                Vec3::ZERO,
            )
        }
    };

    set_camera(&fold_camera(screen));
    draw_smooth_star(&rebuild(session.thickness(now_ms)), topology, transform, rgb);
    set_default_camera();
}

/// Draw the fold overlay for the current stage
pub fn draw_fold(screen: Rect, session: &FoldSession, now_ms: f64, lang: Language, topology: &StarTopology) {
    draw_rectangle(screen.x, screen.y, screen.w, screen.h, SCRIM);
    let area = fold_area(screen);
    let paper = rgb_color(session.color().rgb());

    match session.stage() {
        FoldStage::Knotting => draw_strip(&area, session, paper),
        FoldStage::Wrapping => draw_pentagon(&area, session, paper),
        FoldStage::Inflating | FoldStage::Collecting => draw_star_3d(&screen, session, now_ms, topology),
        FoldStage::Completed => {}
    }

    if let Some(hint) = hint_id(session.stage()) {
        let hint_rect = Rect::new(area.x, area.bottom() - 48.0, area.w, 40.0);
        draw_text_centered(locale::text(lang, hint), &hint_rect, FONT_SIZE_HEADER, TEXT_LIGHT);
    }
}
