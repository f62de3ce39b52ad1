//! Ambient motion that does not depend on the tree state: the ground ring,
//! drifting snow and the blossom point-size pulse.

use crate::constants::*;
use crate::formation::scatter_cloud;
use glam::Vec3;
use std::f32::consts::TAU;

#[derive(Clone, Debug)]
pub struct Ring {
    scale: f32,
    spin: f32,
}

impl Default for Ring {
    fn default() -> Self {
        Self {
            scale: 1.0,
            spin: 0.0,
        }
    }
}

impl Ring {
    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn spin(&self) -> f32 {
        self.spin
    }

    pub fn tick(&mut self, elapsed: f32) {
        self.scale = 1.0 + (elapsed * RING_PULSE_RATE).sin() * RING_PULSE;
        self.spin = (self.spin + RING_SPIN).rem_euclid(TAU);
    }
}

#[derive(Clone, Debug)]
pub struct Snow {
    points: Vec<Vec3>,
    yaw: f32,
    bob: f32,
}

impl Snow {
    pub fn new(count: usize, seed: u64) -> Self {
        Self {
            points: scatter_cloud(count, SNOW_EXTENT, seed),
            yaw: 0.0,
            bob: 0.0,
        }
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Vertical offset of the whole snow group.
    pub fn bob(&self) -> f32 {
        self.bob
    }

    pub fn tick(&mut self, elapsed: f32) {
        self.yaw = (self.yaw + SNOW_SPIN).rem_euclid(TAU);
        self.bob = (elapsed * SNOW_BOB_RATE).sin() * SNOW_BOB;
    }
}

#[inline]
pub fn blossom_point_size(elapsed: f32) -> f32 {
    BLOSSOM_POINT_SIZE + (elapsed * BLOSSOM_POINT_PULSE_RATE).sin() * BLOSSOM_POINT_PULSE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_pulse_is_small() {
        let mut ring = Ring::default();
        for i in 0..300 {
            ring.tick(i as f32 / 30.0);
            assert!((ring.scale() - 1.0).abs() <= RING_PULSE + 1e-6);
        }
        assert!((ring.spin() - 300.0 * RING_SPIN).abs() < 1e-4);
    }

    #[test]
    fn snow_bob_is_bounded() {
        let mut snow = Snow::new(SNOW_COUNT, 11);
        assert_eq!(snow.points().len(), SNOW_COUNT);
        for i in 0..100 {
            snow.tick(i as f32);
            assert!(snow.bob().abs() <= SNOW_BOB + 1e-6);
        }
        assert!(snow.yaw() > 0.0);
    }

    #[test]
    fn spins_stay_wrapped() {
        let mut ring = Ring::default();
        let mut snow = Snow::new(0, 1);
        for i in 0..20_000 {
            ring.tick(i as f32);
            snow.tick(i as f32);
        }
        assert!((0.0..TAU).contains(&ring.spin()));
        assert!((0.0..TAU).contains(&snow.yaw()));
        // 20_000 * 0.005 = 100 rad, i.e. 15 full turns plus a remainder.
        let expected = (20_000.0 * RING_SPIN).rem_euclid(TAU);
        assert!((ring.spin() - expected).abs() < 1e-2);
    }

    #[test]
    fn point_size_never_vanishes() {
        for i in 0..100 {
            assert!(blossom_point_size(i as f32 * 0.1) >= BLOSSOM_POINT_SIZE - BLOSSOM_POINT_PULSE);
        }
    }
}
