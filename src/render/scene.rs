//! The jar scene: camera, glass and the stars inside

use std::f32::consts::TAU;

use macroquad::prelude::*;

use super::star::draw_star;
use crate::geometry::{StarTopology, VERTEX_COUNT};
use crate::jar::shape::{
    BASE_CENTER_Y, BASE_SIZE, BODY_CENTER_Y, BODY_HEIGHT, BODY_RADIUS, NECK_CENTER_Y, NECK_HEIGHT,
    NECK_RADIUS,
};
use crate::jar::{StarPose, JAR_ORIGIN};
use crate::pick::PickCamera;
use crate::star::StarId;
use crate::ui::theme::{GLASS_BASE, GLASS_COLOR};

const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 6.0, 22.0);
const CAMERA_TARGET: Vec3 = Vec3::new(0.0, 2.5, 0.0);
const CAMERA_FOVY_DEGREES: f32 = 45.0;

/// Segments per glass ring outline
const RING_SEGMENTS: usize = 48;

/// Star box collider is 0.4 wide; the mesh has radius 1, so shrink to match
pub const STAR_SCALE_IN_JAR: f32 = 0.22;

/// Camera for the jar, plus the same view as a pick camera
pub fn jar_camera(screen_w: f32, screen_h: f32) -> (Camera3D, PickCamera) {
    let fovy = CAMERA_FOVY_DEGREES.to_radians();
    let aspect = screen_w / screen_h.max(1.0);
    let camera = Camera3D {
        position: CAMERA_POSITION,
        target: CAMERA_TARGET,
        up: Vec3::Y,
        fovy,
        aspect: Some(aspect),
        ..Default::default()
    };
    let pick = PickCamera {
        position: CAMERA_POSITION,
        target: CAMERA_TARGET,
        up: Vec3::Y,
        fovy,
        aspect,
    };
    (camera, pick)
}

fn draw_ring(center: Vec3, radius: f32, color: Color) {
    let point = |i: usize| {
        let a = i as f32 / RING_SEGMENTS as f32 * TAU;
        center + Vec3::new(a.sin() * radius, 0.0, a.cos() * radius)
    };
    for i in 0..RING_SEGMENTS {
        draw_line_3d(point(i), point(i + 1), color);
    }
}

/// Glass outline: rings at the top and bottom of the body and neck, a few
/// vertical staves, and a translucent floor
pub fn draw_jar() {
    let body_bottom = JAR_ORIGIN.y + BODY_CENTER_Y - BODY_HEIGHT * 0.5;
    let body_top = JAR_ORIGIN.y + BODY_CENTER_Y + BODY_HEIGHT * 0.5;
    let neck_bottom = JAR_ORIGIN.y + NECK_CENTER_Y - NECK_HEIGHT * 0.5;
    let neck_top = JAR_ORIGIN.y + NECK_CENTER_Y + NECK_HEIGHT * 0.5;

    for y in [body_bottom, body_bottom + 0.05, body_top] {
        draw_ring(Vec3::new(0.0, y, 0.0), BODY_RADIUS, GLASS_COLOR);
    }
    for y in [neck_bottom, neck_top, neck_top - 0.15] {
        draw_ring(Vec3::new(0.0, y, 0.0), NECK_RADIUS, GLASS_COLOR);
    }

    // Shoulder from body to neck
    for i in 0..8 {
        let a = i as f32 / 8.0 * TAU;
        let dir = Vec3::new(a.sin(), 0.0, a.cos());
        draw_line_3d(
            dir * BODY_RADIUS + Vec3::Y * body_bottom,
            dir * BODY_RADIUS + Vec3::Y * body_top,
            GLASS_COLOR,
        );
        draw_line_3d(
            dir * BODY_RADIUS + Vec3::Y * body_top,
            dir * NECK_RADIUS + Vec3::Y * neck_bottom,
            GLASS_COLOR,
        );
        draw_line_3d(
            dir * NECK_RADIUS + Vec3::Y * neck_bottom,
            dir * NECK_RADIUS + Vec3::Y * neck_top,
            GLASS_COLOR,
        );
    }

    draw_cube(JAR_ORIGIN + Vec3::Y * BASE_CENTER_Y, BASE_SIZE, None, GLASS_BASE);
}

/// Draw every star in the jar. `color_of` maps a star to its paper color.
pub fn draw_jar_stars(
    poses: &[StarPose],
    positions: &[Vec3; VERTEX_COUNT],
    topology: &StarTopology,
    color_of: impl Fn(StarId) -> Option<[u8; 3]>,
) {
    for pose in poses {
        let Some(rgb) = color_of(pose.id) else {
            continue;
        };
        let transform = Mat4::from_scale_rotation_translation(
            Vec3::splat(STAR_SCALE_IN_JAR),
            pose.rotation,
            pose.position,
        );
        draw_star(positions, topology, transform, rgb);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_camera_matches_scene_camera() {
        let (camera, pick) = jar_camera(800.0, 600.0);
        assert_eq!(camera.position, pick.position);
        assert_eq!(camera.target, pick.target);
        assert_eq!(camera.fovy, pick.fovy);
        assert_eq!(camera.aspect, Some(pick.aspect));
    }

    #[test]
    fn test_camera_sees_the_jar_center() {
        use crate::pick::screen_to_ray;
        let (_, pick) = jar_camera(800.0, 600.0);
        let ray = screen_to_ray(Vec2::new(400.0, 300.0), Vec2::new(800.0, 600.0), &pick);
        let to_target = (CAMERA_TARGET - CAMERA_POSITION).normalize();
        assert!((ray.direction - to_target).length() < 1e-5);
    }
}
