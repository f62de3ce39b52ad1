// Host-side tests for the whole frame loop: control surface, star, gesture
// pipeline and renderer export.

use dreamy_tree::constants::*;
use dreamy_tree::detector::{GesturePipeline, LandmarkSource, PipelineStatus, ReplaySource};
use dreamy_tree::formation::{CollectionKind, EntitySeed};
use dreamy_tree::gesture::{classify, GestureThresholds, HandLandmarks, HandPose};
use dreamy_tree::morph::{Collection, MorphParams};
use dreamy_tree::{ConfigError, Scene, SceneParams, TreeState};
use glam::Vec3;

fn small_params() -> SceneParams {
    SceneParams::default().capped(64)
}

fn small_scene() -> Scene {
    Scene::new(&small_params()).expect("default params are valid")
}

#[test]
fn default_scene_has_every_collection() {
    let scene = small_scene();
    for kind in CollectionKind::ALL {
        let c = scene.collection(kind).expect("collection present");
        assert_eq!(c.len(), 64);
    }
    assert_eq!(scene.state(), TreeState::Tree);
}

#[test]
fn same_seed_same_layout() {
    let a = small_scene();
    let b = small_scene();
    for (ca, cb) in a.collections().iter().zip(b.collections()) {
        assert_eq!(ca.seeds(), cb.seeds());
    }
    let other = Scene::new(&SceneParams {
        seed: 7,
        ..small_params()
    })
    .expect("valid");
    assert_ne!(a.collections()[0].seeds(), other.collections()[0].seeds());
}

#[test]
fn instanced_collections_fly_in_on_start() {
    let mut scene = small_scene();
    let leaves = scene.collection(CollectionKind::Leaves).expect("leaves");
    let before = leaves.mean_error(TreeState::Tree);
    assert!(before > 1.0, "leaves should start scattered");
    let blossom = scene.collection(CollectionKind::Blossom).expect("blossom");
    assert_eq!(blossom.max_error(TreeState::Tree), 0.0);

    for i in 0..120 {
        scene.tick(i as f32 / 60.0);
    }
    let after = scene
        .collection(CollectionKind::Leaves)
        .expect("leaves")
        .mean_error(TreeState::Tree);
    assert!(after < before * 0.01);
}

#[test]
fn toggle_drives_every_collection_and_the_star() {
    let mut scene = small_scene();
    assert_eq!(scene.toggle_state(), TreeState::Explode);
    for i in 0..300 {
        scene.tick(i as f32 / 60.0);
    }
    for c in scene.collections() {
        assert!(
            c.max_error(TreeState::Explode) < 0.01,
            "{} still far from explode",
            c.label()
        );
    }
    let star = scene.star().pose();
    assert!((star.y - STAR_EXPLODE_Y).abs() < 0.01);
    assert!(star.opacity < 1e-3);

    assert_eq!(scene.toggle_state(), TreeState::Tree);
    for i in 300..600 {
        scene.tick(i as f32 / 60.0);
    }
    let star = scene.star().pose();
    assert!((star.y - STAR_TREE_Y).abs() < 0.01);
    assert!((star.opacity - 1.0).abs() < 1e-3);
    assert!((star.scale - STAR_TREE_SCALE).abs() < 1e-3);
}

#[test]
fn custom_scenario_through_the_scene() {
    let seeds = vec![
        EntitySeed::new(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0)),
        EntitySeed::new(Vec3::ONE, Vec3::splat(5.0)),
        EntitySeed::new(Vec3::splat(2.0), Vec3::ZERO),
    ];
    let custom = Collection::from_seeds(
        seeds,
        MorphParams {
            alpha: 0.5,
            ..MorphParams::default()
        },
    );
    let mut scene = Scene::with_collections(&small_params(), vec![custom])
        .expect("alpha 0.5 is valid");
    scene.toggle_state();
    scene.tick(0.0);
    scene.tick(1.0 / 60.0);
    assert_eq!(
        scene.collections()[0].positions(),
        &[Vec3::new(7.5, 0.0, 0.0), Vec3::splat(4.0), Vec3::splat(0.5)]
    );
}

#[test]
fn custom_collections_with_bad_alpha_are_refused() {
    for alpha in [0.0, 1.5] {
        let custom = Collection::from_seeds(
            vec![EntitySeed::new(Vec3::ZERO, Vec3::splat(3.0))],
            MorphParams {
                alpha,
                ..MorphParams::default()
            },
        );
        assert!(matches!(
            Scene::with_collections(&small_params(), vec![custom]),
            Err(ConfigError::FactorOutOfRange { .. })
        ));
    }
}

#[test]
fn gesture_frames_steer_state_rotation_and_cursor() {
    let params = small_params();
    let th = params.thresholds;
    let mut scene = Scene::new(&params).expect("valid");

    let open_hand = HandLandmarks::posed(HandPose::OpenPalm, 0.9, 0.3);
    let open = classify(Some(&open_hand), &th);
    assert_eq!(scene.on_gesture_frame(open), TreeState::Explode);
    for i in 0..60 {
        scene.tick(i as f32 / 60.0);
    }
    let target = (0.9 - 0.5) * ROTATION_SENSITIVITY;
    assert!((scene.rotation() - target).abs() < 0.1);
    assert!((scene.cursor().x - 0.9).abs() < 0.01);
    assert!((scene.cursor().y - 0.3).abs() < 0.01);

    let pinch_hand = HandLandmarks::posed(HandPose::Pinch, 0.5, 0.5);
    let pinch = classify(Some(&pinch_hand), &th);
    assert_eq!(scene.on_gesture_frame(pinch), TreeState::Tree);

    // Hand lost: state holds, rotation goes back to drifting.
    assert_eq!(scene.on_gesture_frame(None), TreeState::Tree);
    assert!(scene.hand().is_none());
    let before = scene.rotation();
    scene.tick(2.0);
    assert!((scene.rotation() - before - ROTATION_DRIFT).abs() < 1e-4);
}

#[test]
fn cursor_px_maps_to_overlay() {
    let mut scene = small_scene();
    let th = GestureThresholds::default();
    let hand = HandLandmarks::posed(HandPose::Relaxed, 0.5, 0.5);
    let s = classify(Some(&hand), &th);
    scene.on_gesture_frame(s);
    for i in 0..200 {
        scene.tick(i as f32);
    }
    let px = scene.cursor_px(1920, 1080);
    assert!((px.x - 960.0).abs() < 1.0);
    assert!((px.y - 540.0).abs() < 1.0);
}

#[test]
fn instance_export_follows_current_positions() {
    let mut scene = small_scene();
    scene.tick(0.0);
    let leaves = scene.collection(CollectionKind::Leaves).expect("leaves");
    let mut out = Vec::new();
    leaves.write_instances(&mut out);
    assert_eq!(out.len(), leaves.len());
    for (inst, pos) in out.iter().zip(leaves.positions()) {
        assert_eq!(inst.pos, pos.to_array());
    }
    let blossom = scene.collection(CollectionKind::Blossom).expect("blossom");
    assert_eq!(blossom.positions_flat().len(), blossom.len() * 3);
}

#[test]
fn pipeline_feeds_scene_end_to_end() {
    let frames = vec![
        Some(HandLandmarks::posed(HandPose::OpenPalm, 0.7, 0.5)),
        None,
        Some(HandLandmarks::posed(HandPose::Pinch, 0.4, 0.5)),
    ];
    let mut pipeline =
        GesturePipeline::new(ReplaySource::new(frames), GestureThresholds::default());
    assert_eq!(pipeline.start(), PipelineStatus::Running);
    let mut scene = small_scene();

    let states: Vec<TreeState> = (0..3)
        .map(|i| {
            let sample = pipeline.poll(i as f64 * 33.0);
            let state = scene.on_gesture_frame(sample);
            scene.tick(i as f32 / 60.0);
            state
        })
        .collect();
    assert_eq!(
        states,
        vec![TreeState::Explode, TreeState::Explode, TreeState::Tree]
    );

    pipeline.stop();
    assert!(!pipeline.source().is_open(), "camera must be released");
    assert_eq!(pipeline.poll(200.0), None);
}

#[test]
fn malformed_frames_are_discarded() {
    let short = HandLandmarks::new(vec![Vec3::splat(0.5); 5]);
    let mut pipeline = GesturePipeline::new(
        ReplaySource::new(vec![Some(short)]),
        GestureThresholds::default(),
    );
    pipeline.start();
    let mut scene = small_scene();
    scene.toggle_state();
    for i in 0..10 {
        let sample = pipeline.poll(i as f64);
        assert_eq!(sample, None);
        scene.on_gesture_frame(sample);
        scene.tick(i as f32);
    }
    assert_eq!(scene.state(), TreeState::Explode);
}

#[test]
fn unavailable_camera_degrades_once_and_toggle_still_works() {
    let mut pipeline = GesturePipeline::new(
        ReplaySource::unavailable("no device"),
        GestureThresholds::default(),
    );
    assert_eq!(pipeline.start(), PipelineStatus::Unavailable);
    // No automatic retry.
    pipeline.start();
    assert_eq!(pipeline.source().opened_count(), 1);
    assert_eq!(pipeline.poll(0.0), None);

    let mut scene = small_scene();
    for i in 0..5 {
        scene.on_gesture_frame(pipeline.poll(i as f64));
        scene.toggle_state();
        scene.tick(i as f32);
    }
    assert_eq!(scene.state(), TreeState::Explode);

    // Explicit retry tries again.
    assert_eq!(pipeline.retry(), PipelineStatus::Unavailable);
    assert_eq!(pipeline.source().opened_count(), 2);
}

struct CountingSource {
    closes: std::rc::Rc<std::cell::Cell<usize>>,
}

impl LandmarkSource for CountingSource {
    fn open(&mut self) -> Result<(), dreamy_tree::DetectorError> {
        Ok(())
    }

    fn detect(&mut self, _timestamp_ms: f64) -> Option<HandLandmarks> {
        None
    }

    fn close(&mut self) {
        self.closes.set(self.closes.get() + 1);
    }
}

#[test]
fn dropping_a_running_pipeline_releases_the_camera() {
    let closes = std::rc::Rc::new(std::cell::Cell::new(0));
    {
        let mut p = GesturePipeline::new(
            CountingSource {
                closes: closes.clone(),
            },
            GestureThresholds::default(),
        );
        p.start();
    }
    assert_eq!(closes.get(), 1);
}

#[test]
fn secondary_animation_stays_in_band() {
    let mut scene = small_scene();
    for i in 0..600 {
        let t = i as f32 / 60.0;
        scene.tick(t);
        let size = scene.point_size();
        assert!(size >= BLOSSOM_POINT_SIZE - BLOSSOM_POINT_PULSE - 1e-6);
        assert!(size <= BLOSSOM_POINT_SIZE + BLOSSOM_POINT_PULSE + 1e-6);
        assert!((scene.ring().scale() - 1.0).abs() <= RING_PULSE + 1e-6);
        assert!(scene.snow().bob().abs() <= SNOW_BOB + 1e-6);
    }
    assert_eq!(scene.ticks(), 600);
    assert_eq!(scene.sparkles().points().len(), 60);
}
