//! Landmark data model shared by the hand and face pipelines.
//!
//! Landmarks are named 2D points in video-pixel space, produced fresh on
//! every detection cycle. A `DetectionSnapshot` holds at most one detected
//! instance (single hand / single face) and is overwritten wholesale each
//! cycle; nothing in it carries identity across frames.

use std::collections::HashMap;

/// A 2D point in video-pixel or screen space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Midpoint between two points
    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Euclidean distance to another point
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Names of the landmarks the gesture core consumes.
///
/// The perception models emit many more keypoints; only these reach the
/// extractors. Hand names follow the MediaPipe hand landmark convention,
/// face names the subset of the face mesh the smile classifier needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LandmarkName {
    // Hand
    ThumbTip,
    IndexFingerTip,
    // Face
    UpperLipTop,
    LowerLipBottom,
    MouthLeftCorner,
    MouthRightCorner,
    Forehead,
    Chin,
}

impl LandmarkName {
    /// String representation for logging and status output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ThumbTip => "thumb_tip",
            Self::IndexFingerTip => "index_finger_tip",
            Self::UpperLipTop => "upper_lip_top",
            Self::LowerLipBottom => "lower_lip_bottom",
            Self::MouthLeftCorner => "mouth_left_corner",
            Self::MouthRightCorner => "mouth_right_corner",
            Self::Forehead => "forehead",
            Self::Chin => "chin",
        }
    }
}

/// Landmarks of a single detected instance, keyed by name
pub type LandmarkSet = HashMap<LandmarkName, Point2>;

/// The latest detection result from one perception model.
///
/// Valid only for the frame it was computed from. At most one instance
/// per snapshot in this design (single hand, single face).
#[derive(Debug, Clone, Default)]
pub struct DetectionSnapshot {
    instances: Vec<LandmarkSet>,
}

impl DetectionSnapshot {
    /// An empty snapshot (no detected instances)
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Snapshot holding a single detected instance
    #[must_use]
    pub fn single(landmarks: LandmarkSet) -> Self {
        Self {
            instances: vec![landmarks],
        }
    }

    /// The first (and only) detected instance, if any
    #[must_use]
    pub fn first(&self) -> Option<&LandmarkSet> {
        self.instances.first()
    }

    /// Whether no instance was detected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Number of landmarks in the first instance (0 if none)
    #[must_use]
    pub fn landmark_count(&self) -> usize {
        self.first().map_or(0, HashMap::len)
    }
}

/// Dimensions of the decoded video frames a model processes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoDimensions {
    pub width: u32,
    pub height: u32,
}

impl VideoDimensions {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}
