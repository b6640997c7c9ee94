//! Fold session: one wish, folded through the stage sequence
//!
//! ```text
//! Knotting ──swipe up──▶ Wrapping ──3 taps──▶ Inflating ──press, +1.5 s──▶ Collecting ──drop──▶ Completed
//! ```
//!
//! Stages only move forward. A gesture that doesn't belong to the current
//! stage is ignored and reported as `false`. Feedback for every transition
//! (and every wrap tap) is queued for the app to drain.

use super::drop::{DropPose, DropSimulator, DropStep};
use super::event::EventQueue;
use super::haptics::Feedback;
use crate::geometry::{PuffAnimation, Thickness};
use crate::rng::Rng;
use crate::star::{is_submittable, PlacementHint, StarColor};

/// Vertical drag (pixels, negative is up) needed to tie the knot
pub const KNOT_SWIPE_THRESHOLD: f32 = -50.0;
pub const WRAPS_REQUIRED: u8 = 3;
/// Overlay darkening per wrap
pub const WRAP_SHADE_STEP: f32 = 0.2;
/// Delay between the inflate press and the drop
pub const COLLECT_DELAY_MS: f64 = 1500.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FoldStage {
    Knotting,
    Wrapping,
    Inflating,
    Collecting,
    Completed,
}

/// What a finished session hands to the store
#[derive(Debug, Clone, PartialEq)]
pub struct FoldOutcome {
    pub message: String,
    pub color: StarColor,
    pub hint: PlacementHint,
}

#[derive(Debug, Clone)]
pub struct FoldSession {
    message: String,
    color: StarColor,
    stage: FoldStage,
    wrap_count: u8,
    puff: PuffAnimation,
    /// When inflation hands over to the drop
    collect_at: Option<f64>,
    collect_started: f64,
    drop: Option<DropSimulator>,
    feedback: EventQueue<Feedback>,
}

impl FoldSession {
    /// Start folding `message`. Returns `None` for a message that can't become a star.
    pub fn new(message: &str, color: StarColor) -> Option<Self> {
        if !is_submittable(message) {
            return None;
        }
        Some(Self {
            message: message.to_string(),
            color,
            stage: FoldStage::Knotting,
            wrap_count: 0,
            puff: PuffAnimation::new(),
            collect_at: None,
            collect_started: 0.0,
            drop: None,
            feedback: EventQueue::new(),
        })
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn color(&self) -> StarColor {
        self.color
    }

    pub fn stage(&self) -> FoldStage {
        self.stage
    }

    pub fn wrap_count(&self) -> u8 {
        self.wrap_count
    }

    /// Opacity of the darkening overlay on the paper
    pub fn wrap_shade(&self) -> f32 {
        self.wrap_count as f32 * WRAP_SHADE_STEP
    }

    /// A finished drag. Ties the knot on a long enough upward swipe.
    pub fn drag_end(&mut self, dy: f32) -> bool {
        if self.stage != FoldStage::Knotting || dy >= KNOT_SWIPE_THRESHOLD {
            return false;
        }
        self.stage = FoldStage::Wrapping;
        self.feedback.send(Feedback::Fold);
        true
    }

    /// One wrap around the strip. The third moves on to inflation.
    pub fn tap(&mut self) -> bool {
        if self.stage != FoldStage::Wrapping {
            return false;
        }
        self.wrap_count += 1;
        self.feedback.send(Feedback::Wrap);
        if self.wrap_count >= WRAPS_REQUIRED {
            self.stage = FoldStage::Inflating;
        }
        true
    }

    /// Press during inflation. The star puffs at once and the drop is
    /// scheduled; pressing again changes nothing.
    pub fn press_start(&mut self, now_ms: f64) -> bool {
        if self.stage != FoldStage::Inflating || self.collect_at.is_some() {
            return false;
        }
        self.puff.start(now_ms);
        self.collect_at = Some(now_ms + COLLECT_DELAY_MS);
        self.feedback.send(Feedback::Inflate);
        true
    }

    /// Releasing doesn't cancel inflation
    pub fn press_end(&mut self) -> bool {
        false
    }

    /// Per-frame step. Returns the outcome on the frame the drop lands, and
    /// never again.
    pub fn update(&mut self, now_ms: f64, rng: &mut Rng) -> Option<FoldOutcome> {
        if self.stage == FoldStage::Inflating {
            match self.collect_at {
                Some(at) if now_ms >= at => {
                    self.stage = FoldStage::Collecting;
                    self.collect_started = now_ms;
                    self.drop = Some(DropSimulator::new(rng));
                    self.feedback.send(Feedback::Collect);
                }
                _ => return None,
            }
        }

        if self.stage != FoldStage::Collecting {
            return None;
        }

        let drop = self.drop.as_mut()?;
        match drop.advance(now_ms - self.collect_started, rng) {
            DropStep::Done(hint) => {
                self.stage = FoldStage::Completed;
                Some(FoldOutcome {
                    message: self.message.clone(),
                    color: self.color,
                    hint,
                })
            }
            DropStep::Falling | DropStep::Finished => None,
        }
    }

    /// Star thickness for this frame
    pub fn thickness(&self, now_ms: f64) -> Thickness {
        self.puff.thickness(now_ms)
    }

    /// Display scale multiplier for this frame
    pub fn pop_scale(&self, now_ms: f64) -> f32 {
        self.puff.scale(now_ms)
    }

    /// Where the falling star is, while it falls
    pub fn drop_pose(&self) -> Option<DropPose> {
        match self.stage {
            FoldStage::Collecting => self.drop.as_ref().map(|d| d.pose()),
            _ => None,
        }
    }

    /// Feedback queued since the last drain
    pub fn drain_feedback(&mut self) -> impl Iterator<Item = Feedback> + '_ {
        self.feedback.drain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn session() -> FoldSession {
        FoldSession::new("peace", StarColor::Blue).unwrap()
    }

    /// Run a session to `Inflating`
    fn wrapped() -> FoldSession {
        let mut s = session();
        assert!(s.drag_end(-120.0));
        for _ in 0..WRAPS_REQUIRED {
            assert!(s.tap());
        }
        assert_eq!(s.stage(), FoldStage::Inflating);
        s
    }

    /// Step frames at 60 Hz until an outcome appears
    fn run_until_outcome(s: &mut FoldSession, mut now: f64, rng: &mut Rng) -> (FoldOutcome, f64) {
        for _ in 0..1_000 {
            now += 16.0;
            if let Some(outcome) = s.update(now, rng) {
                return (outcome, now);
            }
        }
        panic!("session never completed");
    }

    #[test]
    fn test_rejects_unsubmittable_messages() {
        assert!(FoldSession::new("", StarColor::Red).is_none());
        assert!(FoldSession::new("  ", StarColor::Red).is_none());
        assert!(FoldSession::new(&"a".repeat(51), StarColor::Red).is_none());
    }

    #[test]
    fn test_knot_needs_upward_swipe() {
        let mut s = session();
        assert!(!s.drag_end(-50.0));
        assert!(!s.drag_end(80.0));
        assert_eq!(s.stage(), FoldStage::Knotting);
        assert!(s.drag_end(-51.0));
        assert_eq!(s.stage(), FoldStage::Wrapping);
    }

    #[test]
    fn test_out_of_stage_gestures_ignored() {
        let mut s = session();
        assert!(!s.tap());
        assert!(!s.press_start(0.0));
        assert_eq!(s.wrap_count(), 0);

        s.drag_end(-100.0);
        assert!(!s.drag_end(-100.0));
        assert!(!s.press_start(0.0));
    }

    #[test]
    fn test_wrapping_needs_exactly_three_taps() {
        let mut s = session();
        s.drag_end(-100.0);

        assert!(s.tap());
        assert!(s.tap());
        assert_eq!(s.stage(), FoldStage::Wrapping);
        assert!((s.wrap_shade() - 0.4).abs() < 1e-6);

        assert!(s.tap());
        assert_eq!(s.stage(), FoldStage::Inflating);

        // A fourth tap belongs to no stage
        assert!(!s.tap());
        assert_eq!(s.wrap_count(), 3);
    }

    #[test]
    fn test_inflate_schedules_collect_once() {
        let mut s = wrapped();
        let mut rng = Rng::new(5);

        assert!(s.press_start(1_000.0));
        // Second press doesn't push the deadline back
        assert!(!s.press_start(2_000.0));
        // Release doesn't cancel
        assert!(!s.press_end());

        assert!(s.update(2_499.0, &mut rng).is_none());
        assert_eq!(s.stage(), FoldStage::Inflating);

        assert!(s.update(2_500.0, &mut rng).is_none());
        assert_eq!(s.stage(), FoldStage::Collecting);
        assert!(s.drop_pose().is_some());
    }

    #[test]
    fn test_inflating_waits_for_press() {
        let mut s = wrapped();
        let mut rng = Rng::new(5);
        assert!(s.update(1e9, &mut rng).is_none());
        assert_eq!(s.stage(), FoldStage::Inflating);
    }

    #[test]
    fn test_outcome_delivered_exactly_once() {
        let mut s = wrapped();
        let mut rng = Rng::new(11);
        s.press_start(0.0);

        let (outcome, now) = run_until_outcome(&mut s, 0.0, &mut rng);
        assert_eq!(outcome.message, "peace");
        assert_eq!(outcome.color, StarColor::Blue);
        assert_eq!(s.stage(), FoldStage::Completed);

        for i in 1..100 {
            assert!(s.update(now + i as f64 * 16.0, &mut rng).is_none());
        }
    }

    #[test]
    fn test_feedback_sequence() {
        let mut s = wrapped();
        let mut rng = Rng::new(2);
        s.press_start(0.0);
        s.update(COLLECT_DELAY_MS, &mut rng);

        let feedback: Vec<Feedback> = s.drain_feedback().collect();
        assert_eq!(
            feedback,
            vec![
                Feedback::Fold,
                Feedback::Wrap,
                Feedback::Wrap,
                Feedback::Wrap,
                Feedback::Inflate,
                Feedback::Collect,
            ]
        );
        assert_eq!(s.drain_feedback().count(), 0);
    }

    #[test]
    fn test_peace_in_blue_lands_in_store_and_jar() {
        use crate::config::JarConfig;
        use crate::jar::JarWorld;
        use crate::star::StarStore;

        let mut store = StarStore::load(Box::new(MemoryStorage::new()), "lucky-stars");
        let mut jar = JarWorld::new(JarConfig::default());
        let mut rng = Rng::new(2024);

        let mut s = session();
        s.drag_end(-200.0);
        s.tap();
        s.tap();
        s.tap();
        s.press_start(10_000.0);
        let (outcome, now) = run_until_outcome(&mut s, 10_000.0, &mut rng);

        let id = store
            .append(&outcome.message, outcome.color, outcome.hint, now as i64)
            .unwrap();
        jar.sync(store.records(), &mut rng);

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(id).unwrap().color, "#2196F3");
        assert_eq!(jar.body_count(), 1);
        assert!(jar.contains(id));
    }
}
