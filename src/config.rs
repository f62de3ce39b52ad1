//! Session parameters.
//!
//! Defaults reproduce the shipped scene; tests and the headless driver
//! override individual fields. [`SceneParams::validate`] runs before a scene
//! is built.

use crate::constants::*;
use crate::formation::CollectionKind;
use crate::gesture::GestureThresholds;
use crate::morph::{MorphParams, StartFormation};
use crate::rotation::RotationParams;
use crate::star::StarParams;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be in (0, 1), got {value}")]
    FactorOutOfRange { name: String, value: f32 },
    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidMagnitude { name: String, value: f32 },
    #[error("collection {0} is configured more than once")]
    DuplicateCollection(&'static str),
    #[error("collection {0} has no entities")]
    EmptyCollection(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollectionParams {
    pub kind: CollectionKind,
    pub count: usize,
    pub morph: MorphParams,
}

impl CollectionParams {
    /// The shipped size and morph behavior for `kind`.
    pub fn default_for(kind: CollectionKind) -> Self {
        let (count, alpha, start) = match kind {
            CollectionKind::Leaves => (LEAF_COUNT, LEAF_MORPH_ALPHA, StartFormation::Explode),
            CollectionKind::Decorations => (
                DECORATION_COUNT,
                DECORATION_MORPH_ALPHA,
                StartFormation::Explode,
            ),
            CollectionKind::Ribbon => (RIBBON_COUNT, RIBBON_MORPH_ALPHA, StartFormation::Explode),
            CollectionKind::Blossom => (BLOSSOM_COUNT, BLOSSOM_MORPH_ALPHA, StartFormation::Tree),
        };
        Self {
            kind,
            count,
            morph: MorphParams { alpha, start },
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneParams {
    /// Base seed; each collection derives its own stream from it.
    pub seed: u64,
    pub collections: Vec<CollectionParams>,
    pub sparkle_count: usize,
    pub snow_count: usize,
    pub rotation: RotationParams,
    pub star: StarParams,
    pub cursor_smoothing: f32,
    pub thresholds: GestureThresholds,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            seed: 42,
            collections: CollectionKind::ALL
                .iter()
                .map(|k| CollectionParams::default_for(*k))
                .collect(),
            sparkle_count: SPARKLE_COUNT,
            snow_count: SNOW_COUNT,
            rotation: RotationParams::default(),
            star: StarParams::default(),
            cursor_smoothing: CURSOR_SMOOTHING,
            thresholds: GestureThresholds::default(),
        }
    }
}

impl SceneParams {
    /// Same scene with every collection scaled down to at most `max` entities.
    pub fn capped(mut self, max: usize) -> Self {
        for c in &mut self.collections {
            c.count = c.count.min(max);
        }
        self.sparkle_count = self.sparkle_count.min(max);
        self.snow_count = self.snow_count.min(max);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = Vec::with_capacity(self.collections.len());
        for c in &self.collections {
            if seen.contains(&c.kind) {
                return Err(ConfigError::DuplicateCollection(c.kind.label()));
            }
            seen.push(c.kind);
            if c.count == 0 {
                return Err(ConfigError::EmptyCollection(c.kind.label()));
            }
            check_factor(&format!("{} morph alpha", c.kind.label()), c.morph.alpha)?;
        }
        check_factor("rotation ease", self.rotation.ease)?;
        check_factor("cursor smoothing", self.cursor_smoothing)?;
        check_factor("star height alpha", self.star.y_alpha)?;
        check_factor("star scale alpha", self.star.scale_alpha)?;
        check_factor("star opacity alpha", self.star.opacity_alpha)?;
        check_magnitude("rotation drift", self.rotation.drift)?;
        check_magnitude("rotation sensitivity", self.rotation.sensitivity)?;
        check_magnitude("pinch distance", self.thresholds.pinch_distance)?;
        check_magnitude("open margin", self.thresholds.open_margin)?;
        Ok(())
    }
}

pub(crate) fn check_factor(name: &str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(ConfigError::FactorOutOfRange {
            name: name.to_string(),
            value,
        })
    }
}

fn check_magnitude(name: &str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidMagnitude {
            name: name.to_string(),
            value,
        })
    }
}
