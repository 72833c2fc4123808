//! Gesture-booth demo: drives the gesture pipeline against a scripted
//! perception model and logs the window-drag and capture side effects.

use anyhow::Result;
use clap::Parser;
use gesture_booth::{
    app::GestureApp,
    config::Config,
    landmarks::{DetectionSnapshot, LandmarkName, LandmarkSet, Point2},
    mapper::Rect,
    session::{CapturePipeline, WindowManager},
    source::ScriptedModel,
};
use log::info;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,

    /// Number of frames to run
    #[arg(short, long, default_value = "180")]
    frames: u64,

    /// Override target framerate
    #[arg(long)]
    fps: Option<u32>,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

/// Demo booth window: video fills the window, the title bar overlays
/// the top strip. Clamps drags to a fixed 1920x1080 viewport.
struct DemoWindow {
    pos: Point2,
    width: f64,
    height: f64,
}

const TITLE_BAR_HEIGHT: f64 = 22.0;
const VIEWPORT: (f64, f64) = (1920.0, 1080.0);

impl WindowManager for DemoWindow {
    fn window_position(&self) -> Point2 {
        self.pos
    }

    fn title_bar_rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, TITLE_BAR_HEIGHT)
    }

    fn video_display_rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }

    fn drag_start(&mut self) {
        info!("drag-start at ({:.0}, {:.0})", self.pos.x, self.pos.y);
    }

    fn drag_move(&mut self, new_pos: Point2) {
        self.pos = Point2::new(
            new_pos.x.clamp(0.0, VIEWPORT.0 - self.width),
            new_pos.y.clamp(0.0, VIEWPORT.1 - self.height),
        );
    }

    fn drag_end(&mut self) {
        info!("drag-end at ({:.0}, {:.0})", self.pos.x, self.pos.y);
    }
}

/// Demo capture pipeline: a trigger starts a simulated 2-second countdown
struct DemoCapture {
    busy_until: Option<Instant>,
}

impl CapturePipeline for DemoCapture {
    fn trigger_capture(&mut self) {
        info!("capture-trigger: countdown started");
        self.busy_until = Some(Instant::now() + Duration::from_secs(2));
    }

    fn is_capture_in_progress(&self) -> bool {
        self.busy_until.map_or(false, |until| Instant::now() < until)
    }
}

/// Hand script: absent, then a pinch engaged over the title bar that
/// drifts sideways (mirrored) before opening again
fn hand_script(frames: u64) -> Vec<DetectionSnapshot> {
    let pinch_at = |x: f64| {
        let mut set = LandmarkSet::new();
        set.insert(LandmarkName::ThumbTip, Point2::new(x - 10.0, 10.0));
        set.insert(LandmarkName::IndexFingerTip, Point2::new(x + 10.0, 10.0));
        DetectionSnapshot::single(set)
    };
    let open_at = |x: f64| {
        let mut set = LandmarkSet::new();
        set.insert(LandmarkName::ThumbTip, Point2::new(x - 40.0, 10.0));
        set.insert(LandmarkName::IndexFingerTip, Point2::new(x + 40.0, 10.0));
        DetectionSnapshot::single(set)
    };

    let mut script = Vec::new();
    for i in 0..frames {
        let snapshot = match i {
            0..=14 => DetectionSnapshot::empty(),
            // Pinch over the title bar, drifting left in video space
            // (which moves the mapped point right on the mirrored screen)
            15..=74 => pinch_at(320.0 - (i - 15) as f64 * 2.0),
            75..=89 => open_at(200.0),
            _ => DetectionSnapshot::empty(),
        };
        script.push(snapshot);
    }
    script
}

/// Face script: neutral, then a held smile long enough to trigger capture
fn face_script(frames: u64) -> Vec<DetectionSnapshot> {
    let face_with_mouth = |lip_gap: f64, mouth_width: f64| {
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
    };

    let mut script = Vec::new();
    for i in 0..frames {
        let snapshot = match i {
            0..=29 => face_with_mouth(4.0, 60.0),
            30..=89 => face_with_mouth(20.0, 110.0),
            _ => face_with_mouth(4.0, 60.0),
        };
        script.push(snapshot);
    }
    script
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    info!("Gesture Booth - scripted demo");

    let mut config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {}", config_path);
        match Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("Failed to load config file: {}. Using defaults.", e);
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    if let Some(fps) = args.fps {
        config.display.target_fps = fps;
    }

    let interval = Duration::from_secs_f64(1.0 / f64::from(config.display.target_fps));
    let hand_model = ScriptedModel::new(hand_script(args.frames), interval);
    let face_model = ScriptedModel::new(face_script(args.frames), interval);

    let window = DemoWindow {
        pos: Point2::new(100.0, 50.0),
        width: 600.0,
        height: 472.0,
    };
    let capture = DemoCapture { busy_until: None };

    let mut app = GestureApp::new(
        config,
        Box::new(hand_model),
        Box::new(face_model),
        Box::new(window),
        Box::new(capture),
    )?;

    app.start()?;
    app.run(args.frames);
    app.stop();

    Ok(())
}
