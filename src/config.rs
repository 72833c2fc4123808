//! Configuration management for the gesture-booth application

use crate::{constants, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Pinch classification configuration
    pub pinch: PinchConfig,

    /// Smile classification configuration
    pub smile: SmileConfig,

    /// Capture trigger configuration
    pub capture: CaptureConfig,

    /// Display / video configuration
    pub display: DisplayConfig,
}

/// Pinch classification parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PinchConfig {
    /// Tip-to-tip distance threshold in video pixels
    pub base_threshold: f64,

    /// Extra slack while already pinching (one-sided hysteresis band)
    pub hysteresis_margin: f64,

    /// Consecutive positive frames before the pinch becomes stable
    pub required_frames: u32,
}

/// Smile classification parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SmileConfig {
    /// Mouth-openness ratio threshold (lip gap over face height)
    pub open_threshold: f64,

    /// Mouth-width ratio threshold (corner distance over approximated
    /// face width)
    pub width_threshold: f64,

    /// Consecutive positive frames before the smile becomes stable
    pub required_frames: u32,

    /// Minimum landmark count for a face instance to be usable
    pub min_landmarks: usize,
}

/// Capture trigger parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Cooldown between capture triggers, in milliseconds
    pub cooldown_ms: u64,
}

/// Display / video parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Target framerate of the per-frame tick
    pub target_fps: u32,

    /// Video frame width in pixels
    pub video_width: u32,

    /// Video frame height in pixels
    pub video_height: u32,
}

impl Default for PinchConfig {
    fn default() -> Self {
        Self {
            base_threshold: constants::DEFAULT_PINCH_THRESHOLD,
            hysteresis_margin: constants::DEFAULT_PINCH_HYSTERESIS_MARGIN,
            required_frames: constants::DEFAULT_PINCH_REQUIRED_FRAMES,
        }
    }
}

impl Default for SmileConfig {
    fn default() -> Self {
        Self {
            open_threshold: constants::DEFAULT_MOUTH_OPEN_THRESHOLD,
            width_threshold: constants::DEFAULT_MOUTH_WIDTH_THRESHOLD,
            required_frames: constants::DEFAULT_SMILE_REQUIRED_FRAMES,
            min_landmarks: constants::MIN_FACE_LANDMARKS,
        }
    }
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            cooldown_ms: constants::DEFAULT_CAPTURE_COOLDOWN_MS,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            target_fps: constants::DEFAULT_FPS as u32,
            video_width: constants::DEFAULT_VIDEO_WIDTH,
            video_height: constants::DEFAULT_VIDEO_HEIGHT,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        serde_yaml::from_str(&content).map_err(|e| Error::Config(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            serde_yaml::to_string(self).map_err(|e| Error::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.pinch.base_threshold <= 0.0 {
            return Err(Error::Config(
                "Pinch base threshold must be greater than 0".to_string(),
            ));
        }
        if self.pinch.hysteresis_margin < 0.0 {
            return Err(Error::Config(
                "Pinch hysteresis margin must not be negative".to_string(),
            ));
        }
        if self.pinch.required_frames == 0 || self.smile.required_frames == 0 {
            return Err(Error::Config(
                "Required frame counts must be greater than 0".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.smile.open_threshold) {
            return Err(Error::Config(
                "Smile open threshold must be between 0.0 and 1.0".to_string(),
            ));
        }
        if !(0.0..=2.0).contains(&self.smile.width_threshold) {
            return Err(Error::Config(
                "Smile width threshold must be between 0.0 and 2.0".to_string(),
            ));
        }
        if self.capture.cooldown_ms == 0 {
            return Err(Error::Config(
                "Capture cooldown must be greater than 0".to_string(),
            ));
        }
        if self.display.target_fps == 0 {
            return Err(Error::Config("Target FPS must be greater than 0".to_string()));
        }
        if self.display.video_width == 0 || self.display.video_height == 0 {
            return Err(Error::Config(
                "Video dimensions must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Gesture Booth Configuration

# Pinch classification
pinch:
  base_threshold: 40.0
  hysteresis_margin: 10.0
  required_frames: 3

# Smile classification
smile:
  open_threshold: 0.05
  width_threshold: 0.55
  required_frames: 5
  min_landmarks: 6

# Capture trigger
capture:
  cooldown_ms: 3000

# Display settings
display:
  target_fps: 30
  video_width: 640
  video_height: 480
"#;
