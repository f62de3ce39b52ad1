//! Morph engine.
//!
//! Each [`Collection`] owns its formation pairs and the one buffer that
//! changes over time: the current position of every entity. The buffer is
//! written only by [`Collection::step`] and handed to the renderer read-only.

use crate::core::TreeState;
use crate::formation::{self, CollectionKind, EntitySeed};
use glam::Vec3;

/// Exponential approach of a scalar toward `target`.
///
/// Never lands exactly on `target` in finite steps for `alpha` in (0, 1);
/// the error shrinks by `1 - alpha` every call.
#[inline]
pub fn approach(current: f32, target: f32, alpha: f32) -> f32 {
    current + (target - current) * alpha
}

/// Which formation the current positions are seeded from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StartFormation {
    #[default]
    Tree,
    Explode,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MorphParams {
    /// Per-tick interpolation factor in (0, 1).
    pub alpha: f32,
    pub start: StartFormation,
}

impl Default for MorphParams {
    fn default() -> Self {
        Self {
            alpha: 0.06,
            start: StartFormation::Tree,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Collection {
    kind: Option<CollectionKind>,
    seeds: Box<[EntitySeed]>,
    current: Vec<Vec3>,
    params: MorphParams,
}

impl Collection {
    /// Generate a collection of `count` entities using the formation law of `kind`.
    pub fn generate(kind: CollectionKind, count: usize, seed: u64, params: MorphParams) -> Self {
        let mut c = Self::from_seeds(formation::generate(kind, count, seed), params);
        c.kind = Some(kind);
        c
    }

    /// Build a collection from precomputed formation pairs.
    pub fn from_seeds(seeds: Vec<EntitySeed>, params: MorphParams) -> Self {
        let current = seeds
            .iter()
            .map(|s| match params.start {
                StartFormation::Tree => s.tree,
                StartFormation::Explode => s.explode,
            })
            .collect();
        Self {
            kind: None,
            seeds: seeds.into_boxed_slice(),
            current,
            params,
        }
    }

    pub fn kind(&self) -> Option<CollectionKind> {
        self.kind
    }

    pub fn label(&self) -> &'static str {
        self.kind.map_or("custom", CollectionKind::label)
    }

    pub fn alpha(&self) -> f32 {
        self.params.alpha
    }

    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }

    pub fn seeds(&self) -> &[EntitySeed] {
        &self.seeds
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.current
    }

    /// Positions as a tightly packed `xyz` float stream for point buffers.
    pub fn positions_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.current)
    }

    /// Advance every entity one tick toward the formation `state` selects.
    pub fn step(&mut self, state: TreeState) {
        let alpha = self.params.alpha;
        for (pos, seed) in self.current.iter_mut().zip(self.seeds.iter()) {
            *pos = pos.lerp(seed.target(state), alpha);
        }
    }

    /// Largest distance between an entity and its target in `state`.
    pub fn max_error(&self, state: TreeState) -> f32 {
        self.current
            .iter()
            .zip(self.seeds.iter())
            .map(|(p, s)| p.distance(s.target(state)))
            .fold(0.0, f32::max)
    }

    pub fn mean_error(&self, state: TreeState) -> f32 {
        if self.current.is_empty() {
            return 0.0;
        }
        let sum: f32 = self
            .current
            .iter()
            .zip(self.seeds.iter())
            .map(|(p, s)| p.distance(s.target(state)))
            .sum();
        sum / self.current.len() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approach_moves_by_alpha_fraction() {
        assert_eq!(approach(0.0, 10.0, 0.25), 2.5);
        assert_eq!(approach(4.0, 4.0, 0.5), 4.0);
    }

    #[test]
    fn start_formation_selects_initial_buffer() {
        let seeds = vec![EntitySeed::new(Vec3::ONE, Vec3::splat(9.0))];
        let tree = Collection::from_seeds(seeds.clone(), MorphParams::default());
        assert_eq!(tree.positions()[0], Vec3::ONE);
        let explode = Collection::from_seeds(
            seeds,
            MorphParams {
                start: StartFormation::Explode,
                ..MorphParams::default()
            },
        );
        assert_eq!(explode.positions()[0], Vec3::splat(9.0));
    }

    #[test]
    fn flat_positions_are_xyz_triples() {
        let seeds = vec![
            EntitySeed::new(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO),
            EntitySeed::new(Vec3::new(4.0, 5.0, 6.0), Vec3::ZERO),
        ];
        let c = Collection::from_seeds(seeds, MorphParams::default());
        assert_eq!(c.positions_flat(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn custom_collection_has_no_kind() {
        let c = Collection::from_seeds(Vec::new(), MorphParams::default());
        assert_eq!(c.kind(), None);
        assert_eq!(c.label(), "custom");
        assert_eq!(c.mean_error(TreeState::Tree), 0.0);
    }
}
