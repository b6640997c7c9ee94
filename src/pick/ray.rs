//! Screen-space to world-space rays for picking
//!
//! Inverts the perspective camera the jar scene is drawn with, so a click
//! at a pixel becomes a ray from the eye through that pixel.

use macroquad::math::{Vec2, Vec3};

/// A 3D ray with origin and direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3, // Normalized
}

impl Ray {
    /// Create a new ray, normalizing the direction
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Get point at distance t along ray
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// The parts of a perspective camera a pick needs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickCamera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view, radians
    pub fovy: f32,
    /// Viewport width / height
    pub aspect: f32,
}

impl PickCamera {
    /// Camera basis: (forward, right, up), all unit length
    fn basis(&self) -> (Vec3, Vec3, Vec3) {
        let forward = (self.target - self.position).normalize_or_zero();
        let right = forward.cross(self.up).normalize_or_zero();
        let up = right.cross(forward);
        (forward, right, up)
    }
}

/// Generate a ray from a pixel through the camera.
///
/// `screen` is in pixels from the top-left corner of a viewport of size
/// `viewport`.
pub fn screen_to_ray(screen: Vec2, viewport: Vec2, camera: &PickCamera) -> Ray {
    let ndc_x = 2.0 * screen.x / viewport.x - 1.0;
    // Screen y grows downward
    let ndc_y = 1.0 - 2.0 * screen.y / viewport.y;

    let half_height = (camera.fovy * 0.5).tan();
    let half_width = half_height * camera.aspect;

    let (forward, right, up) = camera.basis();
    let direction = forward + right * (ndc_x * half_width) + up * (ndc_y * half_height);

    Ray::new(camera.position, direction)
}
