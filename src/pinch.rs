//! Frame-level pinch classification from hand landmarks.
//!
//! A pinch is thumb tip and index fingertip closer than a distance
//! threshold. The threshold is one-sided hysteretic: while the stable
//! state is already "pinching", the band widens by a margin so a
//! distance hovering at the boundary cannot flicker the classification.

use crate::{
    constants::{DEFAULT_PINCH_HYSTERESIS_MARGIN, DEFAULT_PINCH_THRESHOLD},
    landmarks::{DetectionSnapshot, LandmarkName, Point2},
};

/// One frame's pinch classification
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchObservation {
    /// Raw (unstabilized) pinch classification for this frame
    pub is_pinching: bool,
    /// Midpoint of thumb and index tips in video-pixel space, if a
    /// hand with both tips was detected
    pub position: Option<Point2>,
    /// Raw tip-to-tip distance, for diagnostics
    pub distance: Option<f64>,
    /// True when no hand instance or a required landmark was missing;
    /// the caller must hard-reset the pinch stabilizer in that case
    pub requires_reset: bool,
}

impl PinchObservation {
    /// Negative observation for a frame with no usable hand data
    #[must_use]
    pub const fn absent() -> Self {
        Self {
            is_pinching: false,
            position: None,
            distance: None,
            requires_reset: true,
        }
    }
}

/// Classifies pinch/no-pinch per frame
#[derive(Debug, Clone)]
pub struct PinchExtractor {
    base_threshold: f64,
    hysteresis_margin: f64,
}

impl Default for PinchExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_PINCH_THRESHOLD, DEFAULT_PINCH_HYSTERESIS_MARGIN)
    }
}

impl PinchExtractor {
    #[must_use]
    pub fn new(base_threshold: f64, hysteresis_margin: f64) -> Self {
        Self {
            base_threshold,
            hysteresis_margin,
        }
    }

    /// Classify one hand snapshot.
    ///
    /// `was_stable_pinching` is the stabilizer's flag from the previous
    /// frame and selects which side of the hysteresis band applies.
    #[must_use]
    pub fn classify(&self, snapshot: &DetectionSnapshot, was_stable_pinching: bool) -> PinchObservation {
        let Some(hand) = snapshot.first() else {
            return PinchObservation::absent();
        };

        let (Some(&thumb), Some(&index)) = (
            hand.get(&LandmarkName::ThumbTip),
            hand.get(&LandmarkName::IndexFingerTip),
        ) else {
            // Missing tips are an unambiguous negative, same as no hand
            return PinchObservation::absent();
        };

        let distance = thumb.distance(index);
        let threshold = if was_stable_pinching {
            self.base_threshold + self.hysteresis_margin
        } else {
            self.base_threshold
        };

        PinchObservation {
            is_pinching: distance < threshold,
            position: Some(thumb.midpoint(index)),
            distance: Some(distance),
            requires_reset: false,
        }
    }
}
