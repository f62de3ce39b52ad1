//! Yaw control for the whole tree group.

use crate::constants::{ROTATION_DRIFT, ROTATION_EASE, ROTATION_SENSITIVITY};
use crate::gesture::GestureSample;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationParams {
    /// Idle drift added every tick (radians).
    pub drift: f32,
    /// Radians of target yaw per unit of hand x away from center.
    pub sensitivity: f32,
    /// Per-tick ease toward the hand target.
    pub ease: f32,
}

impl Default for RotationParams {
    fn default() -> Self {
        Self {
            drift: ROTATION_DRIFT,
            sensitivity: ROTATION_SENSITIVITY,
            ease: ROTATION_EASE,
        }
    }
}

/// Accumulates in `f64`: at `f32` precision a 0.003 rad step stops
/// registering once the angle passes 2^16, a few days into a session.
#[derive(Clone, Debug, Default)]
pub struct RotationController {
    angle: f64,
    params: RotationParams,
}

impl RotationController {
    pub fn new(params: RotationParams) -> Self {
        Self::starting_at(params, 0.0)
    }

    /// Resume from a previously reached yaw.
    pub fn starting_at(params: RotationParams, angle: f64) -> Self {
        Self { angle, params }
    }

    pub fn angle(&self) -> f32 {
        self.angle as f32
    }

    /// Full-precision yaw.
    pub fn angle_f64(&self) -> f64 {
        self.angle
    }

    /// Yaw the hand at `x` asks for.
    #[inline]
    pub fn target_for(&self, x: f32) -> f32 {
        (x - 0.5) * self.params.sensitivity
    }

    /// Advance one tick. The drift always applies; an active hand then eases
    /// the drifted angle toward its target, which replaces it for this tick.
    pub fn tick(&mut self, hand: Option<&GestureSample>) -> f32 {
        self.angle += f64::from(self.params.drift);
        if let Some(s) = hand.filter(|s| s.is_active()) {
            let target = f64::from(self.target_for(s.x));
            self.angle += (target - self.angle) * f64::from(self.params.ease);
        }
        self.angle()
    }
}
