//! Main application module: the per-tick gesture pipeline.
//!
//! `GestureApp` owns the full chain from landmark snapshots to side
//! effects: two landmark sources, the pinch and smile extractors, their
//! stabilizers, and the session controller driving the window-manager
//! and capture collaborators. Everything is mutated from within
//! `tick()` on a single thread; the sources' model threads only ever
//! feed channels the tick drains without blocking.

use crate::{
    config::Config,
    landmarks::VideoDimensions,
    pinch::{PinchExtractor, PinchObservation},
    session::{CapturePipeline, SessionController, WindowManager},
    smile::{SmileExtractor, SmileObservation},
    source::{LandmarkModel, LandmarkSource},
    stabilizer::{DecayPolicy, TemporalStabilizer},
    Result,
};
use log::info;
use std::time::{Duration, Instant};

/// Read-only per-tick state snapshot for UI status rendering
#[derive(Debug, Clone, Copy)]
pub struct GestureStatus {
    /// Raw pinch observation from the latest tick
    pub pinch: PinchObservation,
    /// Raw smile observation from the latest tick
    pub smile: SmileObservation,
    /// Stabilized pinch flag
    pub pinch_stable: bool,
    /// Stabilized smile flag
    pub smile_stable: bool,
}

impl Default for GestureStatus {
    fn default() -> Self {
        Self {
            pinch: PinchObservation::absent(),
            smile: SmileObservation::absent(),
            pinch_stable: false,
            smile_stable: false,
        }
    }
}

/// Main application struct
pub struct GestureApp {
    config: Config,
    hand_source: LandmarkSource,
    face_source: LandmarkSource,
    pinch_extractor: PinchExtractor,
    smile_extractor: SmileExtractor,
    pinch_stabilizer: TemporalStabilizer,
    smile_stabilizer: TemporalStabilizer,
    controller: SessionController,
    window_manager: Box<dyn WindowManager>,
    capture: Box<dyn CapturePipeline>,
    video: VideoDimensions,
    status: GestureStatus,
}

impl GestureApp {
    /// Create a new gesture application.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the configuration is invalid.
    pub fn new(
        config: Config,
        hand_model: Box<dyn LandmarkModel>,
        face_model: Box<dyn LandmarkModel>,
        window_manager: Box<dyn WindowManager>,
        capture: Box<dyn CapturePipeline>,
    ) -> Result<Self> {
        config.validate()?;

        let video = VideoDimensions::new(config.display.video_width, config.display.video_height);

        Ok(Self {
            pinch_extractor: PinchExtractor::new(
                config.pinch.base_threshold,
                config.pinch.hysteresis_margin,
            ),
            smile_extractor: SmileExtractor::new(
                config.smile.open_threshold,
                config.smile.width_threshold,
                config.smile.min_landmarks,
            ),
            pinch_stabilizer: TemporalStabilizer::new(
                config.pinch.required_frames,
                DecayPolicy::Immediate,
            ),
            smile_stabilizer: TemporalStabilizer::new(
                config.smile.required_frames,
                DecayPolicy::Gradual,
            ),
            controller: SessionController::new(Duration::from_millis(config.capture.cooldown_ms)),
            hand_source: LandmarkSource::new(hand_model),
            face_source: LandmarkSource::new(face_model),
            window_manager,
            capture,
            video,
            status: GestureStatus::default(),
            config,
        })
    }

    /// Start both perception models.
    ///
    /// # Errors
    ///
    /// Returns `Error::ModelLoad` if either model fails to initialize.
    /// Not retryable within a session.
    pub fn start(&mut self) -> Result<()> {
        info!(
            "Starting gesture pipeline ({}x{} video)",
            self.video.width, self.video.height
        );
        self.hand_source.start(self.video)?;
        self.face_source.start(self.video)?;
        Ok(())
    }

    /// Stop both perception models and clear held snapshots
    pub fn stop(&mut self) {
        self.hand_source.stop();
        self.face_source.stop();
        info!("Gesture pipeline stopped");
    }

    /// Run one frame of the pipeline.
    ///
    /// Non-blocking: reads whatever snapshots are currently available
    /// (stale is fine), classifies, stabilizes, and drives the session
    /// controller. The hand and face paths are independent; a fault in
    /// one (model dropout) resets only that signal.
    pub fn tick(&mut self, now: Instant) {
        let hand = self.hand_source.latest_snapshot().clone();
        let pinch = self
            .pinch_extractor
            .classify(&hand, self.pinch_stabilizer.is_stable());
        let pinch_stable = if pinch.requires_reset {
            self.pinch_stabilizer.reset();
            false
        } else {
            self.pinch_stabilizer.update(pinch.is_pinching)
        };

        let face = self.face_source.latest_snapshot().clone();
        let smile = self.smile_extractor.classify(&face);
        let smile_stable = if smile.requires_reset {
            self.smile_stabilizer.reset();
            false
        } else {
            self.smile_stabilizer.update(smile.is_smiling)
        };

        self.controller.tick(
            now,
            pinch_stable,
            pinch.position,
            self.video,
            smile_stable,
            self.window_manager.as_mut(),
            self.capture.as_mut(),
        );

        self.status = GestureStatus {
            pinch,
            smile,
            pinch_stable,
            smile_stable,
        };
    }

    /// Run the tick loop for a fixed number of frames at the configured
    /// target framerate
    pub fn run(&mut self, frames: u64) {
        let frame_duration = Duration::from_secs_f64(1.0 / f64::from(self.config.display.target_fps));
        for _ in 0..frames {
            let frame_start = Instant::now();
            self.tick(frame_start);

            let elapsed = frame_start.elapsed();
            if elapsed < frame_duration {
                std::thread::sleep(frame_duration - elapsed);
            }
        }
    }

    /// The latest per-tick status snapshot
    #[must_use]
    pub const fn status(&self) -> &GestureStatus {
        &self.status
    }

    /// Whether a drag session is currently active
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }
}
