//! Helper functions and utilities for tests

use gesture_booth::{
    landmarks::{DetectionSnapshot, LandmarkName, LandmarkSet, Point2, VideoDimensions},
    mapper::Rect,
    session::{CapturePipeline, WindowManager},
    source::LandmarkModel,
    Result,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, Sender};

/// A perception model whose snapshot sender is handed to the test body,
/// so tests control exactly what arrives before each tick
pub struct ManualModel {
    handoff: Sender<Sender<DetectionSnapshot>>,
}

impl LandmarkModel for ManualModel {
    fn start(&mut self, _video: VideoDimensions) -> Result<Receiver<DetectionSnapshot>> {
        let (tx, rx) = mpsc::channel();
        self.handoff.send(tx).ok();
        Ok(rx)
    }

    fn stop(&mut self) {}
}

/// Build a manual model plus the channel that will yield its sender
/// once the model is started
pub fn manual_model() -> (Box<dyn LandmarkModel>, Receiver<Sender<DetectionSnapshot>>) {
    let (handoff_tx, handoff_rx) = mpsc::channel();
    (Box::new(ManualModel { handoff: handoff_tx }), handoff_rx)
}

/// Window manager mock that records every drag call.
///
/// The title bar tracks the window position (hot zone moves with the
/// window); the video display rectangle is fixed, like a booth whose
/// video is a full-viewport backdrop.
pub struct RecordingWindow {
    pub pos: Point2,
    pub width: f64,
    pub video_rect: Rect,
    pub drag_starts: u32,
    pub drag_ends: u32,
    pub drag_moves: Vec<Point2>,
}

impl RecordingWindow {
    pub fn new(pos: Point2, width: f64, video_rect: Rect) -> Self {
        Self {
            pos,
            width,
            video_rect,
            drag_starts: 0,
            drag_ends: 0,
            drag_moves: Vec::new(),
        }
    }
}

impl WindowManager for RecordingWindow {
    fn window_position(&self) -> Point2 {
        self.pos
    }

    fn title_bar_rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, 22.0)
    }

    fn video_display_rect(&self) -> Rect {
        self.video_rect
    }

    fn drag_start(&mut self) {
        self.drag_starts += 1;
    }

    fn drag_move(&mut self, new_pos: Point2) {
        self.pos = new_pos;
        self.drag_moves.push(new_pos);
    }

    fn drag_end(&mut self) {
        self.drag_ends += 1;
    }
}

/// Capture pipeline mock counting triggers
#[derive(Default)]
pub struct RecordingCapture {
    pub triggers: u32,
    pub in_progress: bool,
}

impl CapturePipeline for RecordingCapture {
    fn trigger_capture(&mut self) {
        self.triggers += 1;
    }

    fn is_capture_in_progress(&self) -> bool {
        self.in_progress
    }
}

/// Shared handle to a [`RecordingWindow`] so tests can keep inspecting
/// the mock after boxing it into the app
#[derive(Clone)]
pub struct SharedWindow(pub Rc<RefCell<RecordingWindow>>);

impl SharedWindow {
    pub fn new(window: RecordingWindow) -> Self {
        Self(Rc::new(RefCell::new(window)))
    }
}

impl WindowManager for SharedWindow {
    fn window_position(&self) -> Point2 {
        self.0.borrow().window_position()
    }

    fn title_bar_rect(&self) -> Rect {
        self.0.borrow().title_bar_rect()
    }

    fn video_display_rect(&self) -> Rect {
        self.0.borrow().video_display_rect()
    }

    fn drag_start(&mut self) {
        self.0.borrow_mut().drag_start();
    }

    fn drag_move(&mut self, new_pos: Point2) {
        self.0.borrow_mut().drag_move(new_pos);
    }

    fn drag_end(&mut self) {
        self.0.borrow_mut().drag_end();
    }
}

/// Shared handle to a [`RecordingCapture`]
#[derive(Clone, Default)]
pub struct SharedCapture(pub Rc<RefCell<RecordingCapture>>);

impl CapturePipeline for SharedCapture {
    fn trigger_capture(&mut self) {
        self.0.borrow_mut().trigger_capture();
    }

    fn is_capture_in_progress(&self) -> bool {
        self.0.borrow().is_capture_in_progress()
    }
}

/// Hand snapshot with thumb and index tips at the given points
pub fn hand_snapshot(thumb: (f64, f64), index: (f64, f64)) -> DetectionSnapshot {
    let mut set = LandmarkSet::new();
    set.insert(LandmarkName::ThumbTip, Point2::new(thumb.0, thumb.1));
    set.insert(LandmarkName::IndexFingerTip, Point2::new(index.0, index.1));
    DetectionSnapshot::single(set)
}

/// Face snapshot with the given lip gap and mouth width, forehead at
/// y=100 and chin at y=300 (face height 200)
pub fn face_snapshot(lip_gap: f64, mouth_width: f64) -> DetectionSnapshot {
    let mut set = LandmarkSet::new();
    set.insert(LandmarkName::Forehead, Point2::new(320.0, 100.0));
    set.insert(LandmarkName::Chin, Point2::new(320.0, 300.0));
    set.insert(LandmarkName::UpperLipTop, Point2::new(320.0, 240.0));
    set.insert(LandmarkName::LowerLipBottom, Point2::new(320.0, 240.0 + lip_gap));
    set.insert(
        LandmarkName::MouthLeftCorner,
        Point2::new(320.0 - mouth_width / 2.0, 245.0),
    );
    set.insert(
        LandmarkName::MouthRightCorner,
        Point2::new(320.0 + mouth_width / 2.0, 245.0),
    );
    DetectionSnapshot::single(set)
}

/// A clearly smiling face (open ratio 0.1, width ratio 0.6875)
pub fn smiling_face() -> DetectionSnapshot {
    face_snapshot(20.0, 110.0)
}

/// A neutral face (closed narrow mouth)
pub fn neutral_face() -> DetectionSnapshot {
    face_snapshot(4.0, 60.0)
}
