//! Constants used throughout the application

/// Pinch distance threshold in video pixels (thumb tip to index tip)
pub const DEFAULT_PINCH_THRESHOLD: f64 = 40.0;

/// Extra slack added to the pinch threshold while already pinching,
/// so a distance hovering at the boundary does not flicker the state
pub const DEFAULT_PINCH_HYSTERESIS_MARGIN: f64 = 10.0;

/// Consecutive positive frames required before a pinch becomes stable
pub const DEFAULT_PINCH_REQUIRED_FRAMES: u32 = 3;

/// Mouth-openness ratio threshold for smile classification
pub const DEFAULT_MOUTH_OPEN_THRESHOLD: f64 = 0.05;

/// Mouth-width ratio threshold for smile classification
pub const DEFAULT_MOUTH_WIDTH_THRESHOLD: f64 = 0.55;

/// Consecutive positive frames required before a smile becomes stable
pub const DEFAULT_SMILE_REQUIRED_FRAMES: u32 = 5;

/// Minimum number of face landmarks required for smile classification
pub const MIN_FACE_LANDMARKS: usize = 6;

/// Approximate face width as a fraction of face height. No face-width
/// landmark is tracked, so mouth-width is normalized against this proxy.
pub const FACE_WIDTH_RATIO: f64 = 0.8;

/// Cooldown between capture triggers, in milliseconds
pub const DEFAULT_CAPTURE_COOLDOWN_MS: u64 = 3000;

/// Default frames per second assumption
pub const DEFAULT_FPS: f64 = 30.0;

/// Default video frame dimensions
pub const DEFAULT_VIDEO_WIDTH: u32 = 640;
pub const DEFAULT_VIDEO_HEIGHT: u32 = 480;

/// Numeric precision epsilon
pub const EPSILON: f64 = 1e-10;
