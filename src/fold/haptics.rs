//! Vibration feedback
//!
//! Each stage transition has a short pulse pattern. Browsers that support
//! `navigator.vibrate` play it; everything else drops it silently.

/// Something the user should feel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// Knot tied (knotting → wrapping)
    Fold,
    /// Every wrap tap
    Wrap,
    /// Star puffed up
    Inflate,
    /// Star heading for the jar
    Collect,
}

impl Feedback {
    /// Alternating on/off durations in milliseconds
    pub fn pattern(self) -> &'static [u32] {
        match self {
            Feedback::Fold => &[50],
            Feedback::Wrap => &[30],
            Feedback::Inflate => &[100, 50, 100],
            Feedback::Collect => &[20],
        }
    }
}

pub trait Haptics {
    /// Play a pulse pattern. Must never fail; unsupported devices ignore it.
    fn vibrate(&mut self, pattern: &[u32]);

    fn play(&mut self, feedback: Feedback) {
        self.vibrate(feedback.pattern());
    }
}

#[cfg(target_arch = "wasm32")]
extern "C" {
    /// `navigator.vibrate(pattern)` in the JS plugin; a no-op where unsupported
    fn starjar_vibrate(pattern_ptr: *const u32, pattern_len: usize);
}

/// The platform vibration motor, if any
#[derive(Debug, Clone, Copy, Default)]
pub struct DeviceHaptics;

impl Haptics for DeviceHaptics {
    #[cfg(target_arch = "wasm32")]
    fn vibrate(&mut self, pattern: &[u32]) {
        unsafe { starjar_vibrate(pattern.as_ptr(), pattern.len()) };
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn vibrate(&mut self, _pattern: &[u32]) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder(Vec<Vec<u32>>);

    impl Haptics for Recorder {
        fn vibrate(&mut self, pattern: &[u32]) {
            self.0.push(pattern.to_vec());
        }
    }

    #[test]
    fn test_patterns() {
        let mut recorder = Recorder::default();
        recorder.play(Feedback::Inflate);
        recorder.play(Feedback::Wrap);
        assert_eq!(recorder.0, vec![vec![100, 50, 100], vec![30]]);
    }

    #[test]
    fn test_device_haptics_never_fails() {
        let mut device = DeviceHaptics;
        for feedback in [Feedback::Fold, Feedback::Wrap, Feedback::Inflate, Feedback::Collect] {
            device.play(feedback);
        }
    }
}
