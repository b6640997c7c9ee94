//! Drop animation
//!
//! After inflation the star falls out of the fold area: a quadratic drop
//! with a sideways wobble, tumbling and shrinking as it goes. The curve is a
//! pure function of progress; only the tumble accumulates per frame.

use std::f32::consts::{FRAC_PI_2, PI};

use macroquad::math::Vec3;

use crate::rng::Rng;
use crate::star::PlacementHint;

pub const DROP_DURATION_MS: f64 = 800.0;
pub const START_SCALE: f32 = 1.5;
/// How far the star falls over the whole drop
const FALL_DISTANCE: f32 = 8.0;
const WOBBLE_AMPLITUDE: f32 = 0.5;
/// Two full wobbles per drop
const WOBBLE_RADIANS: f32 = 4.0 * PI;
const SHRINK: f32 = 0.3;
/// Tumble added every frame, radians about x, y, z
pub const SPIN_PER_FRAME: Vec3 = Vec3::new(0.5, 0.8, 0.3);
/// Star starts lying face-up
pub const START_ROTATION: Vec3 = Vec3::new(FRAC_PI_2, 0.0, 0.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropPose {
    pub position: Vec3,
    /// Euler angles, radians
    pub rotation: Vec3,
    pub scale: f32,
}

/// Result of one drop step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DropStep {
    Falling,
    /// The frame the drop reached the end. Returned once.
    Done(PlacementHint),
    /// Every step after `Done`
    Finished,
}

/// Position and scale at a point of the drop
pub fn sample(progress: f32, base_offset: f32) -> (Vec3, f32) {
    let p = progress.clamp(0.0, 1.0);
    let x = base_offset + (p * WOBBLE_RADIANS).sin() * WOBBLE_AMPLITUDE;
    let y = -FALL_DISTANCE * p * p;
    (Vec3::new(x, y, 0.0), START_SCALE * (1.0 - SHRINK * p))
}

/// Pick where the star will sit on the wish strip
pub fn placement_hint(rng: &mut Rng) -> PlacementHint {
    PlacementHint {
        rotation: rng.range(0.0, 360.0),
        x_percent: rng.range(10.0, 90.0),
    }
}

#[derive(Debug, Clone)]
pub struct DropSimulator {
    base_offset: f32,
    progress: f32,
    rotation: Vec3,
    finished: bool,
}

impl DropSimulator {
    /// Start a drop; the sideways offset is drawn once here
    pub fn new(rng: &mut Rng) -> Self {
        Self {
            base_offset: rng.spread(1.0),
            progress: 0.0,
            rotation: START_ROTATION,
            finished: false,
        }
    }

    /// Advance to `elapsed_ms` since the drop started. Call once per frame.
    pub fn advance(&mut self, elapsed_ms: f64, rng: &mut Rng) -> DropStep {
        if self.finished {
            return DropStep::Finished;
        }

        self.progress = (elapsed_ms / DROP_DURATION_MS).clamp(0.0, 1.0) as f32;
        self.rotation += SPIN_PER_FRAME;

        if self.progress >= 1.0 {
            self.finished = true;
            DropStep::Done(placement_hint(rng))
        } else {
            DropStep::Falling
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn base_offset(&self) -> f32 {
        self.base_offset
    }

    pub fn pose(&self) -> DropPose {
        let (position, scale) = sample(self.progress, self.base_offset);
        DropPose {
            position,
            rotation: self.rotation,
            scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_pose() {
        let mut rng = Rng::new(1);
        let sim = DropSimulator::new(&mut rng);
        let pose = sim.pose();

        assert_eq!(pose.position, Vec3::new(sim.base_offset(), 0.0, 0.0));
        assert_eq!(pose.rotation, START_ROTATION);
        assert_eq!(pose.scale, START_SCALE);
        assert!(sim.base_offset() >= -1.0 && sim.base_offset() < 1.0);
    }

    #[test]
    fn test_end_pose() {
        let (position, scale) = sample(1.0, 0.25);
        assert!((scale - START_SCALE * 0.7).abs() < 1e-6);
        assert_eq!(position.y, -8.0);
        // sin(4π) is ~0, so the wobble ends where it started
        assert!((position.x - 0.25).abs() < 1e-5);
    }

    #[test]
    fn test_progress_is_clamped() {
        assert_eq!(sample(-1.0, 0.0), sample(0.0, 0.0));
        assert_eq!(sample(3.0, 0.0), sample(1.0, 0.0));
    }

    #[test]
    fn test_completes_exactly_once() {
        let mut rng = Rng::new(99);
        let mut sim = DropSimulator::new(&mut rng);

        let mut done = 0;
        let mut elapsed = 0.0;
        for _ in 0..120 {
            elapsed += 16.0;
            match sim.advance(elapsed, &mut rng) {
                DropStep::Done(hint) => {
                    done += 1;
                    assert!(hint.rotation >= 0.0 && hint.rotation < 360.0);
                    assert!(hint.x_percent >= 10.0 && hint.x_percent < 90.0);
                }
                DropStep::Falling => assert!(elapsed < DROP_DURATION_MS),
                DropStep::Finished => assert!(sim.is_finished()),
            }
        }
        assert_eq!(done, 1);
        assert_eq!(sim.progress(), 1.0);
    }

    #[test]
    fn test_tumble_accumulates_per_frame() {
        let mut rng = Rng::new(3);
        let mut sim = DropSimulator::new(&mut rng);
        sim.advance(10.0, &mut rng);
        sim.advance(20.0, &mut rng);
        let expected = START_ROTATION + SPIN_PER_FRAME * 2.0;
        assert!((sim.pose().rotation - expected).length() < 1e-6);
    }
}
