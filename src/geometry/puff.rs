//! Puff animation: the flat paper strip springs into a fat star
//!
//! Two tweens start together when the user presses during inflation:
//! thickness goes from `FLAT` to `PUFFED` over 1.2 s, and the overall scale
//! pops from 0.1× to 1× over 0.8 s. Both use elastic-out easing, so values
//! briefly overshoot before settling.

use std::f32::consts::TAU;

use super::star_mesh::{Thickness, FLAT, PUFFED};

pub const THICKNESS_DURATION_MS: f64 = 1200.0;
pub const POP_DURATION_MS: f64 = 800.0;
pub const POP_START_SCALE: f32 = 0.1;

const ELASTIC_PERIOD: f32 = 0.5;

/// Elastic-out easing with amplitude 1: 0 at `t = 0`, 1 at `t = 1`,
/// overshooting in between
pub fn elastic_out(t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let phase = (t - ELASTIC_PERIOD / 4.0) * TAU / ELASTIC_PERIOD;
    2f32.powf(-10.0 * t) * phase.sin() + 1.0
}

fn progress(now_ms: f64, started_ms: f64, duration_ms: f64) -> f32 {
    ((now_ms - started_ms) / duration_ms).clamp(0.0, 1.0) as f32
}

#[derive(Debug, Clone, Default)]
pub struct PuffAnimation {
    started_ms: Option<f64>,
}

impl PuffAnimation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin the tween. Later calls keep the original start time.
    pub fn start(&mut self, now_ms: f64) {
        self.started_ms.get_or_insert(now_ms);
    }

    pub fn thickness(&self, now_ms: f64) -> Thickness {
        match self.started_ms {
            None => FLAT,
            Some(start) => {
                let t = progress(now_ms, start, THICKNESS_DURATION_MS);
                FLAT.lerp(PUFFED, elastic_out(t))
            }
        }
    }

    /// Multiplier on the star's display scale
    pub fn scale(&self, now_ms: f64) -> f32 {
        match self.started_ms {
            None => 1.0,
            Some(start) => {
                let t = progress(now_ms, start, POP_DURATION_MS);
                POP_START_SCALE + (1.0 - POP_START_SCALE) * elastic_out(t)
            }
        }
    }
}
