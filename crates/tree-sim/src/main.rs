use std::time::Instant;

use anyhow::{ensure, Context};
use clap::{Parser, ValueEnum};
use dreamy_tree::{
    GesturePipeline, HandLandmarks, HandPose, InstanceData, ReplaySource, Scene, SceneParams,
};

/// Headless driver: runs a session at a fixed frame rate and logs what a
/// renderer would see.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Formation seed
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Number of rendered frames to simulate
    #[arg(short, long, default_value_t = 900)]
    frames: u64,

    /// Render ticks per second of simulated time
    #[arg(long, default_value_t = 60.0)]
    fps: f32,

    /// Run a detection cycle every N render ticks
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u64).range(1..))]
    detect_every: u64,

    /// Input mode for the session
    #[arg(short, long, value_enum, default_value_t = Mode::Gesture)]
    mode: Mode,

    /// Pointer mode: toggle the tree every N frames
    #[arg(long, default_value_t = 240, value_parser = clap::value_parser!(u64).range(1..))]
    toggle_every: u64,

    /// Simulate a camera that fails to start
    #[arg(long)]
    no_camera: bool,

    /// Simulate a hand landmark model that fails to load
    #[arg(long, conflicts_with = "no_camera")]
    no_model: bool,

    /// Cap every collection at this many entities
    #[arg(long)]
    max_entities: Option<usize>,

    /// Log a status line every N frames
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u64).range(1..))]
    log_every: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Click-to-toggle only
    Pointer,
    /// Hand gestures from a replayed landmark stream
    Gesture,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    ensure!(
        args.fps.is_finite() && args.fps > 0.0,
        "fps must be positive, got {}",
        args.fps
    );

    let mut params = SceneParams {
        seed: args.seed,
        ..SceneParams::default()
    };
    if let Some(max) = args.max_entities {
        params = params.capped(max);
    }
    let mut scene = Scene::new(&params).context("invalid scene parameters")?;

    let mut pipeline = match args.mode {
        Mode::Gesture => {
            let source = if args.no_camera {
                ReplaySource::unavailable("no video device")
            } else if args.no_model {
                ReplaySource::model_missing("hand landmark model not found")
            } else {
                ReplaySource::new(choreography())
            };
            let mut p = GesturePipeline::new(source, params.thresholds);
            p.start();
            Some(p)
        }
        Mode::Pointer => None,
    };

    let started = Instant::now();
    let mut instances: Vec<InstanceData> = Vec::new();
    let mut uploaded_bytes = 0usize;
    for frame in 0..args.frames {
        let elapsed = frame as f32 / args.fps;
        match pipeline.as_mut().filter(|p| p.is_running()) {
            Some(p) => {
                if frame % args.detect_every == 0 {
                    let sample = p.poll(elapsed as f64 * 1000.0);
                    scene.on_gesture_frame(sample);
                }
            }
            None => {
                if frame > 0 && frame % args.toggle_every == 0 {
                    let state = scene.toggle_state();
                    log::info!("[sim] frame {frame}: toggled to {state}");
                }
            }
        }

        scene.tick(elapsed);

        for c in scene.collections() {
            if c.kind().is_some_and(|k| k.is_instanced()) {
                c.write_instances(&mut instances);
                uploaded_bytes += dreamy_tree::instance::instance_bytes(&instances).len();
            } else {
                uploaded_bytes += std::mem::size_of_val(c.positions_flat());
            }
        }

        if frame % args.log_every == 0 {
            report(frame, &scene);
        }
    }
    if let Some(p) = pipeline.as_mut() {
        p.stop();
    }

    let wall = started.elapsed();
    log::info!(
        "[sim] {} frames in {:.2?} ({:.1} fps), {:.1} MiB uploaded",
        args.frames,
        wall,
        args.frames as f64 / wall.as_secs_f64().max(1e-9),
        uploaded_bytes as f64 / (1024.0 * 1024.0)
    );
    Ok(())
}

fn report(frame: u64, scene: &Scene) {
    let state = scene.state();
    let errors = scene
        .collections()
        .iter()
        .map(|c| format!("{}={:.2}", c.label(), c.mean_error(state)))
        .collect::<Vec<_>>()
        .join(" ");
    let hand = match scene.hand() {
        Some(h) => format!("{:?}@{:.2}", h.gesture(), h.x),
        None => "none".to_string(),
    };
    let cursor = scene.cursor();
    let star = scene.star().pose();
    log::info!(
        "[sim] frame {frame:>5} {state:<7} yaw={:+.3} hand={hand} cursor=({:.2},{:.2}) star(y={:.2} a={:.2}) err[{errors}]",
        scene.rotation(),
        cursor.x,
        cursor.y,
        star.y,
        star.opacity
    );
}

/// A scripted performance: open palm sweeping right, hand lost, pinch on the
/// left, relaxed hand, then a burst of malformed frames.
fn choreography() -> Vec<Option<HandLandmarks>> {
    let mut frames = Vec::new();
    for i in 0..60 {
        let x = 0.2 + 0.6 * i as f32 / 59.0;
        frames.push(Some(HandLandmarks::posed(HandPose::OpenPalm, x, 0.4)));
    }
    frames.extend(std::iter::repeat(None).take(40));
    for i in 0..60 {
        let x = 0.35 - 0.1 * i as f32 / 59.0;
        frames.push(Some(HandLandmarks::posed(HandPose::Pinch, x, 0.5)));
    }
    for _ in 0..40 {
        frames.push(Some(HandLandmarks::posed(HandPose::Relaxed, 0.5, 0.6)));
    }
    // Too few landmarks: treated as a detection miss.
    let truncated = HandLandmarks::new(
        HandLandmarks::posed(HandPose::Pinch, 0.5, 0.5)
            .points()
            .iter()
            .take(6)
            .copied(),
    );
    frames.extend(std::iter::repeat(Some(truncated)).take(10));
    frames
}
