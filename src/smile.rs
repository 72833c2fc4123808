//! Frame-level smile classification from face landmarks.
//!
//! A smile is an open *and* wide mouth: the mouth-openness ratio and the
//! mouth-width ratio must both exceed their thresholds. Both ratios are
//! normalized against face height so the classification is distance
//! invariant. No face-width landmark is tracked; width is normalized
//! against `face_height * FACE_WIDTH_RATIO` instead.

use crate::{
    constants::{
        DEFAULT_MOUTH_OPEN_THRESHOLD, DEFAULT_MOUTH_WIDTH_THRESHOLD, FACE_WIDTH_RATIO,
        MIN_FACE_LANDMARKS,
    },
    landmarks::{DetectionSnapshot, LandmarkName},
};

/// One frame's smile classification
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmileObservation {
    /// Raw (unstabilized) smile classification for this frame
    pub is_smiling: bool,
    /// Mouth-openness ratio (lip gap over face height), for status display
    pub mouth_openness: f64,
    /// True when no face instance or a required landmark was missing;
    /// the caller must hard-reset the smile stabilizer in that case
    pub requires_reset: bool,
}

impl SmileObservation {
    /// Negative observation for a frame with no usable face data
    #[must_use]
    pub const fn absent() -> Self {
        Self {
            is_smiling: false,
            mouth_openness: 0.0,
            requires_reset: true,
        }
    }
}

/// Classifies smile/no-smile per frame
#[derive(Debug, Clone)]
pub struct SmileExtractor {
    open_threshold: f64,
    width_threshold: f64,
    min_landmarks: usize,
}

impl Default for SmileExtractor {
    fn default() -> Self {
        Self::new(
            DEFAULT_MOUTH_OPEN_THRESHOLD,
            DEFAULT_MOUTH_WIDTH_THRESHOLD,
            MIN_FACE_LANDMARKS,
        )
    }
}

const REQUIRED_LANDMARKS: [LandmarkName; 6] = [
    LandmarkName::UpperLipTop,
    LandmarkName::LowerLipBottom,
    LandmarkName::MouthLeftCorner,
    LandmarkName::MouthRightCorner,
    LandmarkName::Forehead,
    LandmarkName::Chin,
];

impl SmileExtractor {
    #[must_use]
    pub fn new(open_threshold: f64, width_threshold: f64, min_landmarks: usize) -> Self {
        Self {
            open_threshold,
            width_threshold,
            min_landmarks,
        }
    }

    /// Classify one face snapshot
    #[must_use]
    pub fn classify(&self, snapshot: &DetectionSnapshot) -> SmileObservation {
        let Some(face) = snapshot.first() else {
            return SmileObservation::absent();
        };

        if face.len() < self.min_landmarks {
            return SmileObservation::absent();
        }

        let mut points = [crate::landmarks::Point2::default(); REQUIRED_LANDMARKS.len()];
        for (slot, name) in points.iter_mut().zip(REQUIRED_LANDMARKS) {
            match face.get(&name) {
                Some(&p) => *slot = p,
                None => return SmileObservation::absent(),
            }
        }
        let [upper_lip, lower_lip, mouth_left, mouth_right, forehead, chin] = points;

        let face_height = (chin.y - forehead.y).abs();

        // Guards keep the ratios total: a degenerate face reads as neutral
        let mouth_open_ratio = if face_height > 0.0 {
            (lower_lip.y - upper_lip.y).abs() / face_height
        } else {
            0.0
        };

        let face_width_approx = face_height * FACE_WIDTH_RATIO;
        let mouth_width_ratio = if face_width_approx > 0.0 {
            (mouth_right.x - mouth_left.x).abs() / face_width_approx
        } else {
            0.0
        };

        SmileObservation {
            is_smiling: mouth_open_ratio > self.open_threshold
                && mouth_width_ratio > self.width_threshold,
            mouth_openness: mouth_open_ratio,
            requires_reset: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarks::{LandmarkSet, Point2};

    /// Face with forehead at y=0, chin at y=100, mouth corners and lips
    /// placed from the given openness/width in video pixels
    fn face_snapshot(lip_gap: f64, mouth_width: f64) -> DetectionSnapshot {
        let mut set = LandmarkSet::new();
        set.insert(LandmarkName::Forehead, Point2::new(50.0, 0.0));
        set.insert(LandmarkName::Chin, Point2::new(50.0, 100.0));
        set.insert(LandmarkName::UpperLipTop, Point2::new(50.0, 70.0));
        set.insert(LandmarkName::LowerLipBottom, Point2::new(50.0, 70.0 + lip_gap));
        set.insert(
            LandmarkName::MouthLeftCorner,
            Point2::new(50.0 - mouth_width / 2.0, 72.0),
        );
        set.insert(
            LandmarkName::MouthRightCorner,
            Point2::new(50.0 + mouth_width / 2.0, 72.0),
        );
        DetectionSnapshot::single(set)
    }

    #[test]
    fn test_open_wide_mouth_is_smile() {
        let extractor = SmileExtractor::default();
        // open ratio 10/100 = 0.1 > 0.05, width ratio 50/80 = 0.625 > 0.55
        let obs = extractor.classify(&face_snapshot(10.0, 50.0));

        assert!(obs.is_smiling);
        assert!((obs.mouth_openness - 0.1).abs() < 1e-12);
        assert!(!obs.requires_reset);
    }

    #[test]
    fn test_wide_closed_mouth_is_not_smile() {
        let extractor = SmileExtractor::default();
        // Width qualifies but openness 2/100 = 0.02 does not
        let obs = extractor.classify(&face_snapshot(2.0, 50.0));
        assert!(!obs.is_smiling);
    }

    #[test]
    fn test_narrow_open_mouth_is_not_smile() {
        let extractor = SmileExtractor::default();
        // Openness qualifies but width 30/80 = 0.375 does not
        let obs = extractor.classify(&face_snapshot(10.0, 30.0));
        assert!(!obs.is_smiling);
    }

    #[test]
    fn test_no_face_forces_reset() {
        let extractor = SmileExtractor::default();
        let obs = extractor.classify(&DetectionSnapshot::empty());

        assert!(!obs.is_smiling);
        assert_eq!(obs.mouth_openness, 0.0);
        assert!(obs.requires_reset);
    }

    #[test]
    fn test_missing_required_landmark_forces_reset() {
        let extractor = SmileExtractor::new(0.05, 0.55, 4);
        let mut set = LandmarkSet::new();
        set.insert(LandmarkName::Forehead, Point2::new(50.0, 0.0));
        set.insert(LandmarkName::Chin, Point2::new(50.0, 100.0));
        set.insert(LandmarkName::UpperLipTop, Point2::new(50.0, 70.0));
        set.insert(LandmarkName::LowerLipBottom, Point2::new(50.0, 80.0));
        // Mouth corners absent
        let obs = extractor.classify(&DetectionSnapshot::single(set));
        assert!(obs.requires_reset);
    }

    #[test]
    fn test_too_few_landmarks_forces_reset() {
        let extractor = SmileExtractor::default();
        let mut set = LandmarkSet::new();
        set.insert(LandmarkName::Chin, Point2::new(50.0, 100.0));
        let obs = extractor.classify(&DetectionSnapshot::single(set));
        assert!(obs.requires_reset);
    }

    #[test]
    fn test_zero_face_height_is_neutral_not_panic() {
        let extractor = SmileExtractor::default();
        let mut set = LandmarkSet::new();
        // Forehead and chin coincide: face_height = 0
        set.insert(LandmarkName::Forehead, Point2::new(50.0, 50.0));
        set.insert(LandmarkName::Chin, Point2::new(50.0, 50.0));
        set.insert(LandmarkName::UpperLipTop, Point2::new(50.0, 50.0));
        set.insert(LandmarkName::LowerLipBottom, Point2::new(50.0, 60.0));
        set.insert(LandmarkName::MouthLeftCorner, Point2::new(30.0, 55.0));
        set.insert(LandmarkName::MouthRightCorner, Point2::new(70.0, 55.0));

        let obs = extractor.classify(&DetectionSnapshot::single(set));
        assert!(!obs.is_smiling);
        assert_eq!(obs.mouth_openness, 0.0);
        assert!(!obs.requires_reset);
    }
}
