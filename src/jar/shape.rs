//! Jar collision geometry
//!
//! The jar is a ring of thin boxes: a wide body, a narrower neck above it,
//! and a slab for the floor. Everything is described in the jar body's
//! local frame; the physics world and the renderer both build from this.

use std::f32::consts::TAU;

use macroquad::math::Vec3;

/// World position of the jar body
pub const JAR_ORIGIN: Vec3 = Vec3::new(0.0, -1.5, 0.0);

pub const WALL_SEGMENTS: usize = 16;
pub const WALL_THICKNESS: f32 = 0.4;
/// Segments are a little wider than their arc so neighbors overlap
const SEGMENT_OVERLAP: f32 = 1.1;

pub const BASE_SIZE: Vec3 = Vec3::new(3.5, 0.2, 3.5);
pub const BASE_CENTER_Y: f32 = 0.7;

pub const BODY_RADIUS: f32 = 2.3;
pub const BODY_CENTER_Y: f32 = 3.5;
pub const BODY_HEIGHT: f32 = 6.0;

pub const NECK_RADIUS: f32 = 1.4;
pub const NECK_CENTER_Y: f32 = 7.5;
pub const NECK_HEIGHT: f32 = 3.0;

/// One box of the jar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JarPart {
    /// Center, jar-local
    pub center: Vec3,
    /// Full extents along the part's own axes
    pub size: Vec3,
    /// Rotation about +y, radians
    pub yaw: f32,
}

impl JarPart {
    pub fn half_extents(&self) -> Vec3 {
        self.size * 0.5
    }
}

fn ring(radius: f32, center_y: f32, height: f32) -> impl Iterator<Item = JarPart> {
    let width = TAU * radius / WALL_SEGMENTS as f32 * SEGMENT_OVERLAP;
    (0..WALL_SEGMENTS).map(move |i| {
        let angle = i as f32 / WALL_SEGMENTS as f32 * TAU;
        JarPart {
            // Yawing by `angle` turns local +x along the ring's tangent here
            center: Vec3::new(angle.sin() * radius, center_y, angle.cos() * radius),
            size: Vec3::new(width, height, WALL_THICKNESS),
            yaw: angle,
        }
    })
}

/// Every part of the jar: base first, then body ring, then neck ring
pub fn jar_parts() -> Vec<JarPart> {
    let base = JarPart {
        center: Vec3::new(0.0, BASE_CENTER_Y, 0.0),
        size: BASE_SIZE,
        yaw: 0.0,
    };
    std::iter::once(base)
        .chain(ring(BODY_RADIUS, BODY_CENTER_Y, BODY_HEIGHT))
        .chain(ring(NECK_RADIUS, NECK_CENTER_Y, NECK_HEIGHT))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_count() {
        assert_eq!(jar_parts().len(), 1 + 2 * WALL_SEGMENTS);
    }

    #[test]
    fn test_rings_sit_on_their_radius() {
        let parts = jar_parts();
        let body = &parts[1..=WALL_SEGMENTS];
        let neck = &parts[WALL_SEGMENTS + 1..];

        for part in body {
            let r = (part.center.x.powi(2) + part.center.z.powi(2)).sqrt();
            assert!((r - BODY_RADIUS).abs() < 1e-5);
            assert_eq!(part.center.y, BODY_CENTER_Y);
            assert_eq!(part.size.y, BODY_HEIGHT);
        }
        for part in neck {
            let r = (part.center.x.powi(2) + part.center.z.powi(2)).sqrt();
            assert!((r - NECK_RADIUS).abs() < 1e-5);
            assert_eq!(part.size.y, NECK_HEIGHT);
        }
    }

    #[test]
    fn test_walls_face_the_center() {
        for part in &jar_parts()[1..] {
            // Local +z after yaw points radially outward
            let normal = Vec3::new(part.yaw.sin(), 0.0, part.yaw.cos());
            let radial = Vec3::new(part.center.x, 0.0, part.center.z).normalize();
            assert!((normal - radial).length() < 1e-5);
        }
    }

    #[test]
    fn test_segments_overlap() {
        let part = jar_parts()[1];
        let arc = TAU * BODY_RADIUS / WALL_SEGMENTS as f32;
        assert!(part.size.x > arc);
        assert_eq!(part.half_extents().z, WALL_THICKNESS / 2.0);
    }
}
