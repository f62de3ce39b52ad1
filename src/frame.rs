//! Per-frame orchestration.
//!
//! [`Scene`] is the control surface the host drives: `toggle_state` from a
//! click, `on_gesture_frame` once per detection cycle and `tick` once per
//! rendered frame. Detection and render ticks interleave on one thread; a
//! gesture frame is fully applied before the next tick reads it.

use crate::ambient::{blossom_point_size, Ring, Snow};
use crate::config::{check_factor, ConfigError, SceneParams};
use crate::core::{ControlEvent, StateMachine, TreeState};
use crate::formation::CollectionKind;
use crate::gesture::GestureSample;
use crate::input::CursorSmoother;
use crate::morph::Collection;
use crate::rotation::RotationController;
use crate::star::{Sparkles, Star};
use glam::Vec2;

const SPARKLE_STREAM: u64 = 16;
const SNOW_STREAM: u64 = 17;

/// Independent RNG seed for stream `i`, so collections can be resized or
/// reordered without disturbing each other's layout.
#[inline]
pub fn stream_seed(seed: u64, i: u64) -> u64 {
    seed ^ i.wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

fn kind_stream(kind: CollectionKind) -> u64 {
    match kind {
        CollectionKind::Leaves => 0,
        CollectionKind::Decorations => 1,
        CollectionKind::Ribbon => 2,
        CollectionKind::Blossom => 3,
    }
}

pub struct Scene {
    state: StateMachine,
    collections: Vec<Collection>,
    star: Star,
    sparkles: Sparkles,
    ring: Ring,
    snow: Snow,
    point_size: f32,
    rotation: RotationController,
    cursor: CursorSmoother,
    hand: Option<GestureSample>,
    ticks: u64,
}

impl Scene {
    pub fn new(params: &SceneParams) -> Result<Self, ConfigError> {
        params.validate()?;
        let collections = params
            .collections
            .iter()
            .map(|c| {
                Collection::generate(
                    c.kind,
                    c.count,
                    stream_seed(params.seed, kind_stream(c.kind)),
                    c.morph,
                )
            })
            .collect::<Vec<_>>();
        log::info!(
            "[scene] seed={} collections={} entities={}",
            params.seed,
            collections.len(),
            collections.iter().map(Collection::len).sum::<usize>()
        );
        Ok(Self::assemble(params, collections))
    }

    /// Build a scene around caller-provided collections (custom formations).
    /// Each collection's morph factor must lie in (0, 1).
    pub fn with_collections(
        params: &SceneParams,
        collections: Vec<Collection>,
    ) -> Result<Self, ConfigError> {
        params.validate()?;
        for c in &collections {
            check_factor(&format!("{} morph alpha", c.label()), c.alpha())?;
        }
        Ok(Self::assemble(params, collections))
    }

    fn assemble(params: &SceneParams, collections: Vec<Collection>) -> Self {
        Self {
            state: StateMachine::default(),
            collections,
            star: Star::new(params.star),
            sparkles: Sparkles::new(
                params.sparkle_count,
                stream_seed(params.seed, SPARKLE_STREAM),
            ),
            ring: Ring::default(),
            snow: Snow::new(params.snow_count, stream_seed(params.seed, SNOW_STREAM)),
            point_size: blossom_point_size(0.0),
            rotation: RotationController::new(params.rotation),
            cursor: CursorSmoother::new(params.cursor_smoothing),
            hand: None,
            ticks: 0,
        }
    }

    pub fn toggle_state(&mut self) -> TreeState {
        self.state.apply(&ControlEvent::Toggle);
        self.state.state()
    }

    /// Feed one detection cycle. `None` (no hand, or a discarded frame)
    /// clears the active hand so rotation falls back to idle drift.
    pub fn on_gesture_frame(&mut self, sample: Option<GestureSample>) -> TreeState {
        self.state.apply(&ControlEvent::Gesture(sample));
        self.cursor.observe(sample.as_ref());
        self.hand = sample;
        self.state.state()
    }

    /// Advance every animated part by one rendered frame. `elapsed` is the
    /// session clock in seconds and only drives periodic pulses.
    pub fn tick(&mut self, elapsed: f32) {
        let state = self.state.state();
        for c in &mut self.collections {
            c.step(state);
        }
        self.star.tick(state, elapsed);
        self.sparkles.tick(elapsed);
        self.ring.tick(elapsed);
        self.snow.tick(elapsed);
        self.point_size = blossom_point_size(elapsed);
        self.rotation.tick(self.hand.as_ref());
        self.cursor.tick();
        self.ticks += 1;
    }

    pub fn state(&self) -> TreeState {
        self.state.state()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    pub fn collection(&self, kind: CollectionKind) -> Option<&Collection> {
        self.collections.iter().find(|c| c.kind() == Some(kind))
    }

    pub fn star(&self) -> &Star {
        &self.star
    }

    pub fn sparkles(&self) -> &Sparkles {
        &self.sparkles
    }

    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    pub fn snow(&self) -> &Snow {
        &self.snow
    }

    pub fn point_size(&self) -> f32 {
        self.point_size
    }

    /// Yaw of the whole tree group.
    pub fn rotation(&self) -> f32 {
        self.rotation.angle()
    }

    pub fn cursor(&self) -> Vec2 {
        self.cursor.smoothed()
    }

    pub fn cursor_px(&self, width: u32, height: u32) -> Vec2 {
        self.cursor.viewport_px(width, height)
    }

    pub fn hand(&self) -> Option<&GestureSample> {
        self.hand.as_ref()
    }
}
