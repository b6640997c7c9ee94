//! Folding a wish into a star
//!
//! - `session`: the stage machine driven by drag, tap and press gestures
//! - `drop`: the fall out of the fold area once the star is puffed
//! - `haptics`: vibration pulses for each transition
//! - `event`: the queue the session reports feedback through

pub mod drop;
pub mod event;
pub mod haptics;
pub mod session;

pub use haptics::{DeviceHaptics, Haptics};
pub use session::{FoldSession, FoldStage};
