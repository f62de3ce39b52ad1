//! The star at the tree tip and its sparkle halo.
//!
//! Unlike the morphing collections these animate scalar attributes (height,
//! scale, opacity, light) with the same exponential approach, each with its
//! own factor.

use crate::constants::*;
use crate::core::TreeState;
use crate::formation::scatter_cloud;
use crate::morph::approach;
use glam::{Vec2, Vec3};
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarParams {
    pub tree_y: f32,
    pub explode_y: f32,
    pub tree_scale: f32,
    pub y_alpha: f32,
    pub scale_alpha: f32,
    pub opacity_alpha: f32,
}

impl Default for StarParams {
    fn default() -> Self {
        Self {
            tree_y: STAR_TREE_Y,
            explode_y: STAR_EXPLODE_Y,
            tree_scale: STAR_TREE_SCALE,
            y_alpha: STAR_Y_ALPHA,
            scale_alpha: STAR_SCALE_ALPHA,
            opacity_alpha: STAR_OPACITY_ALPHA,
        }
    }
}

/// Renderer-facing star pose for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StarPose {
    pub y: f32,
    pub scale: f32,
    pub opacity: f32,
    /// Spin about the view axis (radians).
    pub spin: f32,
    pub key_light: f32,
    pub fill_light: f32,
}

#[derive(Clone, Debug)]
pub struct Star {
    params: StarParams,
    pose: StarPose,
}

impl Star {
    /// A star already sitting on the tip, fully visible.
    pub fn new(params: StarParams) -> Self {
        Self {
            pose: StarPose {
                y: params.tree_y,
                scale: params.tree_scale,
                opacity: 1.0,
                spin: 0.0,
                key_light: STAR_KEY_LIGHT,
                fill_light: STAR_FILL_LIGHT,
            },
            params,
        }
    }

    pub fn pose(&self) -> &StarPose {
        &self.pose
    }

    pub fn tick(&mut self, state: TreeState, elapsed: f32) -> &StarPose {
        let p = &self.params;
        let (target_y, target_scale, target_opacity) = match state {
            TreeState::Tree => (p.tree_y, p.tree_scale, 1.0),
            TreeState::Explode => (p.explode_y, 0.0, 0.0),
        };
        let pose = &mut self.pose;
        pose.y = approach(pose.y, target_y, p.y_alpha);
        pose.scale = approach(pose.scale, target_scale, p.scale_alpha);
        pose.opacity = approach(pose.opacity, target_opacity, p.opacity_alpha);
        pose.spin = (elapsed * STAR_SPIN_RATE).rem_euclid(TAU);

        let shine = 1.0 + (elapsed * STAR_SHINE_RATE).sin() * STAR_SHINE_DEPTH;
        pose.key_light = STAR_KEY_LIGHT * shine * pose.opacity;
        pose.fill_light = STAR_FILL_LIGHT * pose.opacity;
        &self.pose
    }
}

impl Default for Star {
    fn default() -> Self {
        Self::new(StarParams::default())
    }
}

/// Static points around the star, animated only through their group
/// transform and material.
#[derive(Clone, Debug)]
pub struct Sparkles {
    points: Vec<Vec3>,
    /// Accumulated (x, y) rotation of the halo.
    spin: Vec2,
    scale: f32,
    opacity: f32,
}

impl Sparkles {
    pub fn new(count: usize, seed: u64) -> Self {
        Self {
            points: scatter_cloud(count, SPARKLE_EXTENT, seed),
            spin: Vec2::ZERO,
            scale: SPARKLE_SCALE_BASE,
            opacity: SPARKLE_OPACITY_BASE,
        }
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn spin(&self) -> Vec2 {
        self.spin
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn tick(&mut self, elapsed: f32) {
        let spin = self.spin + Vec2::new(SPARKLE_SPIN_X, SPARKLE_SPIN_Y);
        self.spin = Vec2::new(spin.x.rem_euclid(TAU), spin.y.rem_euclid(TAU));
        self.scale =
            SPARKLE_SCALE_BASE + (elapsed * SPARKLE_SCALE_RATE).sin() * SPARKLE_SCALE_PULSE;
        self.opacity =
            SPARKLE_OPACITY_BASE + (elapsed * SPARKLE_OPACITY_RATE).sin() * SPARKLE_OPACITY_PULSE;
    }
}
