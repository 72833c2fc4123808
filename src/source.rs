//! Landmark source adapter wrapping a perception model.
//!
//! The model runs on its own schedule (typically a background thread) and
//! pushes a fresh [`DetectionSnapshot`] whenever one is ready. The adapter
//! never blocks waiting for a frame: reads drain whatever has arrived,
//! keep only the newest value, and otherwise return the last one seen.
//! Stale snapshots between model updates are expected — gesture control
//! only cares about current state, not history.

use crate::{
    landmarks::{DetectionSnapshot, VideoDimensions},
    Result,
};
use log::{debug, warn};
use std::sync::mpsc::{Receiver, TryRecvError};

/// A perception model treated as a black box.
///
/// `start` hands back the receiving end of a channel the model pushes
/// snapshots into at its own cadence. Implementations own whatever
/// thread or runtime drives the model; `stop` must release it.
pub trait LandmarkModel: Send {
    /// Initialize the model for the given video dimensions.
    ///
    /// # Errors
    ///
    /// Returns `Error::ModelLoad` if the model cannot initialize.
    fn start(&mut self, video: VideoDimensions) -> Result<Receiver<DetectionSnapshot>>;

    /// Release the model. Safe to call at any time, including before
    /// `start` or more than once.
    fn stop(&mut self);
}

/// Owns a [`LandmarkModel`] and exposes its newest snapshot.
pub struct LandmarkSource {
    model: Box<dyn LandmarkModel>,
    rx: Option<Receiver<DetectionSnapshot>>,
    latest: DetectionSnapshot,
    /// Set once when the model side of the channel goes away, so the
    /// disconnect is logged a single time.
    disconnected: bool,
}

impl LandmarkSource {
    /// Create an adapter around a not-yet-started model
    #[must_use]
    pub fn new(model: Box<dyn LandmarkModel>) -> Self {
        Self {
            model,
            rx: None,
            latest: DetectionSnapshot::empty(),
            disconnected: false,
        }
    }

    /// Start the underlying model.
    ///
    /// # Errors
    ///
    /// Returns `Error::ModelLoad` if the perception model fails to
    /// initialize. Not retryable within a session.
    pub fn start(&mut self, video: VideoDimensions) -> Result<()> {
        let rx = self.model.start(video)?;
        self.rx = Some(rx);
        self.disconnected = false;
        debug!("Landmark source started ({}x{})", video.width, video.height);
        Ok(())
    }

    /// Non-blocking read of the most recent snapshot.
    ///
    /// Drains every snapshot queued since the last read and keeps only
    /// the newest (last-write-wins). If the model has produced nothing
    /// new, the previous snapshot is returned unchanged. After `stop`,
    /// or if the model thread has died, this returns an empty snapshot.
    pub fn latest_snapshot(&mut self) -> &DetectionSnapshot {
        if let Some(rx) = &self.rx {
            loop {
                match rx.try_recv() {
                    Ok(snapshot) => self.latest = snapshot,
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        if !self.disconnected {
                            warn!("Landmark model stopped producing; degrading to no detection");
                            self.disconnected = true;
                        }
                        self.rx = None;
                        self.latest = DetectionSnapshot::empty();
                        break;
                    }
                }
            }
        }
        &self.latest
    }

    /// Release the model and clear the held snapshot.
    ///
    /// Safe to call at any time; subsequent `latest_snapshot` calls
    /// return an empty snapshot.
    pub fn stop(&mut self) {
        self.model.stop();
        self.rx = None;
        self.latest = DetectionSnapshot::empty();
    }
}

/// A stand-in perception model that replays a fixed snapshot sequence
/// on a background thread, one frame per interval.
///
/// Used by the demo binary and integration tests; a real deployment
/// implements [`LandmarkModel`] over an actual hand or face tracker.
pub struct ScriptedModel {
    frames: Vec<DetectionSnapshot>,
    interval: std::time::Duration,
    stop_flag: std::sync::Arc<std::sync::atomic::AtomicBool>,
    handle: Option<std::thread::JoinHandle<()>>,
}

impl ScriptedModel {
    #[must_use]
    pub fn new(frames: Vec<DetectionSnapshot>, interval: std::time::Duration) -> Self {
        Self {
            frames,
            interval,
            stop_flag: std::sync::Arc::new(std::sync::atomic::AtomicBool::new(false)),
            handle: None,
        }
    }
}

impl LandmarkModel for ScriptedModel {
    fn start(&mut self, _video: VideoDimensions) -> Result<Receiver<DetectionSnapshot>> {
        use std::sync::atomic::Ordering;

        let (tx, rx) = std::sync::mpsc::channel();
        let frames = self.frames.clone();
        let interval = self.interval;
        let stop_flag = std::sync::Arc::clone(&self.stop_flag);
        stop_flag.store(false, Ordering::SeqCst);

        self.handle = Some(std::thread::spawn(move || {
            for frame in frames {
                if stop_flag.load(Ordering::SeqCst) || tx.send(frame).is_err() {
                    break;
                }
                std::thread::sleep(interval);
            }
        }));

        Ok(rx)
    }

    fn stop(&mut self) {
        self.stop_flag.store(true, std::sync::atomic::Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            handle.join().ok();
        }
    }
}
