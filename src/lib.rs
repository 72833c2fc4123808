//! Gesture-booth core: stable gesture events from noisy landmark streams.
//!
//! This library turns per-frame landmark estimates from two independent
//! perception models (hand pose, face mesh) into debounced, hysteresis-
//! controlled discrete control events for a webcam photo booth:
//! pinch-drag of the booth window and smile-triggered photo capture.
//!
//! The pipeline per tick:
//! 1. Non-blocking read of the newest hand/face snapshot from each
//!    [`source::LandmarkSource`] (stale snapshots are expected)
//! 2. Frame-level classification by the [`pinch`] and [`smile`] extractors
//! 3. Temporal stabilization with per-signal decay rules
//!    ([`stabilizer::TemporalStabilizer`])
//! 4. The [`session::SessionController`] turns stabilized signals into
//!    drag start/move/end calls and cooldown-gated capture triggers
//!
//! Perception models, window chrome, and the capture countdown are
//! external collaborators behind the [`source::LandmarkModel`],
//! [`session::WindowManager`], and [`session::CapturePipeline`] traits.
//!
//! # Examples
//!
//! ```no_run
//! use gesture_booth::{app::GestureApp, config::Config, source::ScriptedModel};
//! use gesture_booth::landmarks::{DetectionSnapshot, LandmarkName, LandmarkSet, Point2};
//! use gesture_booth::mapper::Rect;
//! use gesture_booth::session::{CapturePipeline, WindowManager};
//! use std::time::{Duration, Instant};
//!
//! struct Booth {
//!     pos: Point2,
//! }
//!
//! impl WindowManager for Booth {
//!     fn window_position(&self) -> Point2 {
//!         self.pos
//!     }
//!     fn title_bar_rect(&self) -> Rect {
//!         Rect::new(self.pos.x, self.pos.y, 600.0, 22.0)
//!     }
//!     fn video_display_rect(&self) -> Rect {
//!         Rect::new(self.pos.x, self.pos.y + 22.0, 600.0, 450.0)
//!     }
//!     fn drag_start(&mut self) {}
//!     fn drag_move(&mut self, new_pos: Point2) {
//!         self.pos = new_pos;
//!     }
//!     fn drag_end(&mut self) {}
//! }
//!
//! struct Shutter;
//!
//! impl CapturePipeline for Shutter {
//!     fn trigger_capture(&mut self) {
//!         println!("say cheese!");
//!     }
//!     fn is_capture_in_progress(&self) -> bool {
//!         false
//!     }
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut pinching = LandmarkSet::new();
//! pinching.insert(LandmarkName::ThumbTip, Point2::new(310.0, 30.0));
//! pinching.insert(LandmarkName::IndexFingerTip, Point2::new(330.0, 30.0));
//!
//! let hand = ScriptedModel::new(
//!     vec![DetectionSnapshot::single(pinching); 10],
//!     Duration::from_millis(33),
//! );
//! let face = ScriptedModel::new(vec![], Duration::from_millis(33));
//!
//! let mut app = GestureApp::new(
//!     Config::default(),
//!     Box::new(hand),
//!     Box::new(face),
//!     Box::new(Booth { pos: Point2::new(100.0, 50.0) }),
//!     Box::new(Shutter),
//! )?;
//! app.start()?;
//! for _ in 0..10 {
//!     app.tick(Instant::now());
//!     std::thread::sleep(Duration::from_millis(33));
//! }
//! app.stop();
//! # Ok(())
//! # }
//! ```

/// Landmark data model: points, names, detection snapshots
pub mod landmarks;

/// Landmark source adapters wrapping perception models
pub mod source;

/// Frame-level pinch classification with hysteresis
pub mod pinch;

/// Frame-level smile classification from mouth geometry
pub mod smile;

/// Temporal stabilization (consecutive-frame debouncing)
pub mod stabilizer;

/// Video-to-screen coordinate mapping
pub mod mapper;

/// Drag session state machine and capture triggering
pub mod session;

/// Main application module
pub mod app;

/// Error types and result handling
pub mod error;

/// Constants used throughout the application
pub mod constants;

/// Configuration management
pub mod config;

pub use error::{Error, Result};
