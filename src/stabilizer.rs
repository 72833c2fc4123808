//! Temporal stabilization of per-frame gesture classifications.
//!
//! Raw classifications flicker with detection jitter, so a signal must
//! be positive for a number of consecutive frames before the stable
//! flag flips on. What happens on a negative frame is per-signal: a
//! pinch drops instantly (a grab must be confident, and release must
//! feel immediate), while a smile decays gradually so a single stray
//! frame mid-smile does not truncate the capture.

/// How a stabilizer reacts to a negative frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecayPolicy {
    /// Reset the counter and clear the stable flag on the first
    /// negative frame
    Immediate,
    /// Decay the counter by one per negative frame; clear the stable
    /// flag only once the counter reaches zero
    Gradual,
}

/// Consecutive-frame debouncer for one boolean signal
#[derive(Debug, Clone)]
pub struct TemporalStabilizer {
    required_frames: u32,
    decay: DecayPolicy,
    count: u32,
    stable: bool,
}

impl TemporalStabilizer {
    /// Create a stabilizer requiring `required_frames` consecutive
    /// positives before the stable flag flips on
    #[must_use]
    pub fn new(required_frames: u32, decay: DecayPolicy) -> Self {
        Self {
            required_frames: required_frames.max(1),
            decay,
            count: 0,
            stable: false,
        }
    }

    /// Feed one raw classification; returns the stable flag
    pub fn update(&mut self, raw_positive: bool) -> bool {
        if raw_positive {
            if self.count < self.required_frames {
                self.count += 1;
            }
            if self.count >= self.required_frames {
                self.stable = true;
            }
        } else {
            match self.decay {
                DecayPolicy::Immediate => {
                    self.count = 0;
                    self.stable = false;
                }
                DecayPolicy::Gradual => {
                    self.count = self.count.saturating_sub(1);
                    if self.count == 0 {
                        self.stable = false;
                    }
                }
            }
        }
        self.stable
    }

    /// Hard reset regardless of decay policy. Used when the detector
    /// reports no instance at all: missing data is an unambiguous
    /// negative, not a momentary gap.
    pub fn reset(&mut self) {
        self.count = 0;
        self.stable = false;
    }

    /// Current stable flag
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        self.stable
    }
}
