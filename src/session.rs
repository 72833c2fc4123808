//! Gesture session controller: drag lifecycle and capture triggering.
//!
//! Consumes the stabilized pinch and smile signals once per tick and
//! drives the two external collaborators: the window manager (drag
//! start/move/end) and the capture pipeline (a cooldown-gated trigger).
//! The two paths share the tick but are independent; a drag in progress
//! never blocks a capture and vice versa.

use crate::{
    landmarks::{Point2, VideoDimensions},
    mapper::{video_to_screen, Rect},
};
use log::{debug, info};
use std::time::{Duration, Instant};

/// Window chrome collaborator. Owns window geometry, the title-bar hot
/// zone, and viewport clamping policy.
pub trait WindowManager {
    /// Current top-left position of the dragged window
    fn window_position(&self) -> Point2;

    /// Title-bar bounds in screen space, recomputed against the current
    /// window position
    fn title_bar_rect(&self) -> Rect;

    /// Screen-space rectangle currently displaying the mirrored video.
    /// May move while the window is dragged.
    fn video_display_rect(&self) -> Rect;

    /// A drag session began over the title bar
    fn drag_start(&mut self);

    /// The dragged window should move to `new_pos` (the manager clamps
    /// to viewport bounds)
    fn drag_move(&mut self, new_pos: Point2);

    /// The drag session ended
    fn drag_end(&mut self);
}

/// Capture collaborator. Owns countdown/flash/save sequencing.
pub trait CapturePipeline {
    /// Kick off a capture (countdown, flash, save)
    fn trigger_capture(&mut self);

    /// Whether a previously triggered capture is still running
    fn is_capture_in_progress(&self) -> bool;
}

/// Time gate between capture triggers
#[derive(Debug, Clone, Copy)]
pub struct CooldownGate {
    cooldown: Duration,
    blocked_until: Option<Instant>,
}

impl CooldownGate {
    #[must_use]
    pub const fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            blocked_until: None,
        }
    }

    /// Whether a trigger is currently allowed
    #[must_use]
    pub fn is_open(&self, now: Instant) -> bool {
        self.blocked_until.map_or(true, |until| now >= until)
    }

    /// Close the gate for the configured cooldown starting at `now`
    pub fn close(&mut self, now: Instant) {
        self.blocked_until = Some(now + self.cooldown);
    }
}

/// Drag lifecycle state. At most one session exists at a time (single
/// hand, single window).
#[derive(Debug, Clone, Copy, PartialEq)]
enum DragState {
    Idle,
    Dragging {
        /// Mapped screen position at engage time
        anchor_screen: Point2,
        /// Window position at engage time
        anchor_window: Point2,
    },
}

/// Per-tick driver of the drag state machine and the capture path
pub struct SessionController {
    drag: DragState,
    prev_pinch_stable: bool,
    gate: CooldownGate,
}

impl SessionController {
    #[must_use]
    pub fn new(capture_cooldown: Duration) -> Self {
        Self {
            drag: DragState::Idle,
            prev_pinch_stable: false,
            gate: CooldownGate::new(capture_cooldown),
        }
    }

    /// Whether a drag session is active
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Run one tick of both gesture paths.
    ///
    /// `pinch_stable` / `smile_stable` are the stabilized flags for this
    /// frame; `pinch_video_pos` is the raw pinch midpoint in video-pixel
    /// space when a hand was observed.
    pub fn tick(
        &mut self,
        now: Instant,
        pinch_stable: bool,
        pinch_video_pos: Option<Point2>,
        video: VideoDimensions,
        smile_stable: bool,
        wm: &mut dyn WindowManager,
        capture: &mut dyn CapturePipeline,
    ) {
        self.tick_drag(pinch_stable, pinch_video_pos, video, wm);
        self.tick_capture(now, smile_stable, capture);
        self.prev_pinch_stable = pinch_stable;
    }

    fn tick_drag(
        &mut self,
        pinch_stable: bool,
        pinch_video_pos: Option<Point2>,
        video: VideoDimensions,
        wm: &mut dyn WindowManager,
    ) {
        match self.drag {
            DragState::Idle => {
                // Engage only on the rising edge, and only over the hot zone
                let rising = pinch_stable && !self.prev_pinch_stable;
                let Some(video_pos) = pinch_video_pos else {
                    return;
                };
                if !rising {
                    return;
                }

                // Map against the current video rect; it may have moved
                let mapped = video_to_screen(video_pos, video, &wm.video_display_rect());
                if wm.title_bar_rect().contains(mapped) {
                    let anchor_window = wm.window_position();
                    info!(
                        "Drag engaged at screen ({:.1}, {:.1})",
                        mapped.x, mapped.y
                    );
                    self.drag = DragState::Dragging {
                        anchor_screen: mapped,
                        anchor_window,
                    };
                    wm.drag_start();
                }
            }
            DragState::Dragging {
                anchor_screen,
                anchor_window,
            } => {
                if !pinch_stable {
                    // Release anywhere; no hot-zone check on the way out
                    debug!("Drag released");
                    self.drag = DragState::Idle;
                    wm.drag_end();
                    return;
                }

                let Some(video_pos) = pinch_video_pos else {
                    return;
                };
                let mapped = video_to_screen(video_pos, video, &wm.video_display_rect());

                // Delta is always relative to the original anchor, never
                // frame-to-frame, so per-frame jitter cannot accumulate
                let new_pos = Point2::new(
                    anchor_window.x + (mapped.x - anchor_screen.x),
                    anchor_window.y + (mapped.y - anchor_screen.y),
                );
                wm.drag_move(new_pos);
            }
        }
    }

    fn tick_capture(&mut self, now: Instant, smile_stable: bool, capture: &mut dyn CapturePipeline) {
        if smile_stable && self.gate.is_open(now) && !capture.is_capture_in_progress() {
            info!("Smile capture triggered");
            capture.trigger_capture();
            self.gate.close(now);
        }
    }
}
