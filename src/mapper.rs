//! Coordinate mapping from video-pixel space to screen space.
//!
//! The webcam feed is displayed as a selfie mirror, so the horizontal
//! axis flips during mapping; the vertical axis does not. The target
//! rectangle is whatever region of the screen currently shows the video
//! and may itself be moving (the window being dragged), so callers must
//! map against the current rectangle every frame and never cache a
//! mapped position.

use crate::landmarks::{Point2, VideoDimensions};

/// An axis-aligned rectangle in screen space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Whether a point lies within the rectangle (edges inclusive)
    #[must_use]
    pub fn contains(&self, p: Point2) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }
}

/// Map a video-pixel position into a screen-space target rectangle.
///
/// X is mirrored, Y is not. Total for all inputs: degenerate video
/// dimensions map to the rectangle's mirrored origin rather than
/// dividing by zero.
#[must_use]
pub fn video_to_screen(pos: Point2, video: VideoDimensions, target: &Rect) -> Point2 {
    let x_ratio = if video.width > 0 {
        pos.x / f64::from(video.width)
    } else {
        0.0
    };
    let y_ratio = if video.height > 0 {
        pos.y / f64::from(video.height)
    } else {
        0.0
    };

    Point2 {
        x: (1.0 - x_ratio).mul_add(target.width, target.x),
        y: y_ratio.mul_add(target.height, target.y),
    }
}
