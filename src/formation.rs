//! Formation generation.
//!
//! Every collection gets two target arrangements per entity: a packed cone or
//! spiral ("tree") and a scattered cloud ("explode"). Both are generated once
//! from an explicit seed and never regenerated, so a layout is reproducible
//! for a given `(kind, count, seed)`.

use crate::constants::*;
use crate::core::TreeState;
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::{PI, TAU};

pub type Rgb = [f32; 3];

/// Convert a packed `0xRRGGBB` color to normalized components.
#[inline]
pub fn hex_rgb(hex: u32) -> Rgb {
    [
        ((hex >> 16) & 0xFF) as f32 / 255.0,
        ((hex >> 8) & 0xFF) as f32 / 255.0,
        (hex & 0xFF) as f32 / 255.0,
    ]
}

#[inline]
pub fn lerp_rgb(a: Rgb, b: Rgb, t: f32) -> Rgb {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

/// The morphing collections that make up the tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    /// Instanced octahedra packed in the main cone.
    Leaves,
    /// Instanced icosahedra hung just outside the leaf cone.
    Decorations,
    /// Instanced segments wound around the cone as a spiral.
    Ribbon,
    /// Point cloud that bursts into a sphere shell.
    Blossom,
}

impl CollectionKind {
    pub const ALL: [CollectionKind; 4] = [
        CollectionKind::Leaves,
        CollectionKind::Decorations,
        CollectionKind::Ribbon,
        CollectionKind::Blossom,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CollectionKind::Leaves => "leaves",
            CollectionKind::Decorations => "decorations",
            CollectionKind::Ribbon => "ribbon",
            CollectionKind::Blossom => "blossom",
        }
    }

    /// Instanced collections carry a full transform per entity; the blossom
    /// cloud is drawn as raw points.
    pub fn is_instanced(self) -> bool {
        !matches!(self, CollectionKind::Blossom)
    }
}

/// Static, per-entity data fixed at generation time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntitySeed {
    pub tree: Vec3,
    pub explode: Vec3,
    pub scale: f32,
    pub color: Rgb,
    /// Euler angles (XYZ) for tumbling instances.
    pub rotation: Option<Vec3>,
}

impl EntitySeed {
    /// A plain formation pair with unit scale and white tint.
    pub fn new(tree: Vec3, explode: Vec3) -> Self {
        Self {
            tree,
            explode,
            scale: 1.0,
            color: [1.0, 1.0, 1.0],
            rotation: None,
        }
    }

    #[inline]
    pub fn target(&self, state: TreeState) -> Vec3 {
        match state {
            TreeState::Tree => self.tree,
            TreeState::Explode => self.explode,
        }
    }
}

/// Generate `count` entities for `kind` from `seed`.
pub fn generate(kind: CollectionKind, count: usize, seed: u64) -> Vec<EntitySeed> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| match kind {
            CollectionKind::Leaves => leaf(&mut rng),
            CollectionKind::Decorations => decoration(&mut rng),
            CollectionKind::Ribbon => ribbon(i, count, &mut rng),
            CollectionKind::Blossom => blossom(i, count, &mut rng),
        })
        .collect()
}

/// Static cloud of points uniformly filling a centered cube.
pub fn scatter_cloud(count: usize, extent: f32, seed: u64) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| box_scatter(&mut rng, [extent; 3]))
        .collect()
}

fn leaf(rng: &mut StdRng) -> EntitySeed {
    let h = rng.gen::<f32>() * LEAF_HEIGHT;
    let radius = (TREE_APEX - h) * LEAF_TAPER;
    let angle = rng.gen::<f32>() * TAU;
    let tree = ring_point(angle, radius, h + LEAF_Y_OFFSET);
    let explode = box_scatter(rng, LEAF_SCATTER);
    let rotation = Vec3::new(rng.gen(), rng.gen(), rng.gen());
    let scale = LEAF_SCALE_MIN + rng.gen::<f32>() * LEAF_SCALE_SPAN;
    let color = palette_pick(rng, &LEAF_PALETTE);
    EntitySeed {
        tree,
        explode,
        scale,
        color,
        rotation: Some(rotation),
    }
}

fn decoration(rng: &mut StdRng) -> EntitySeed {
    let h = rng.gen::<f32>() * DECORATION_HEIGHT;
    let radius = (TREE_APEX - h) * DECORATION_TAPER * DECORATION_OUTSET;
    let angle = rng.gen::<f32>() * TAU;
    let tree = ring_point(angle, radius, h + DECORATION_Y_OFFSET);
    let explode = box_scatter(rng, DECORATION_SCATTER);
    let rotation = Vec3::new(rng.gen(), rng.gen(), rng.gen());
    let scale = DECORATION_SCALE_MIN + rng.gen::<f32>() * DECORATION_SCALE_SPAN;
    let color = palette_pick(rng, &DECORATION_PALETTE);
    EntitySeed {
        tree,
        explode,
        scale,
        color,
        rotation: Some(rotation),
    }
}

// Evenly spaced along the spiral; the angle advances with the index so the
// ribbon wraps the cone several times instead of scattering.
fn ribbon(i: usize, count: usize, rng: &mut StdRng) -> EntitySeed {
    let u = i as f32 / count as f32;
    let angle = u * TAU * RIBBON_WRAPS;
    let h = u * RIBBON_HEIGHT;
    let radius = (TREE_APEX - h) * RIBBON_TAPER;
    let tree = ring_point(angle, radius, h + RIBBON_Y_OFFSET);
    let explode = box_scatter(rng, RIBBON_SCATTER);
    let scale = RIBBON_SCALE_MIN + rng.gen::<f32>() * RIBBON_SCALE_SPAN;
    EntitySeed {
        tree,
        explode,
        scale,
        color: hex_rgb(RIBBON_TINT),
        rotation: None,
    }
}

fn blossom(i: usize, count: usize, rng: &mut StdRng) -> EntitySeed {
    let height = rng.gen::<f32>() * BLOSSOM_HALF_HEIGHT * 2.0 - BLOSSOM_HALF_HEIGHT;
    let normalized = (height + BLOSSOM_HALF_HEIGHT) / (BLOSSOM_HALF_HEIGHT * 2.0);
    let radius = (1.0 - normalized) * BLOSSOM_BASE_RADIUS;
    let angle = rng.gen::<f32>() * TAU;
    let tree = ring_point(angle, radius, height);
    let shell = BLOSSOM_SHELL_MIN + rng.gen::<f32>() * BLOSSOM_SHELL_SPAN;
    let explode = sphere_shell(i, count, shell);
    let color = lerp_rgb(
        hex_rgb(BLOSSOM_GRADIENT[0]),
        hex_rgb(BLOSSOM_GRADIENT[1]),
        normalized,
    );
    EntitySeed {
        tree,
        explode,
        scale: 1.0,
        color,
        rotation: None,
    }
}

#[inline]
fn ring_point(angle: f32, radius: f32, y: f32) -> Vec3 {
    Vec3::new(angle.cos() * radius, y, angle.sin() * radius)
}

#[inline]
fn box_scatter(rng: &mut StdRng, extents: [f32; 3]) -> Vec3 {
    Vec3::new(
        (rng.gen::<f32>() - 0.5) * extents[0],
        (rng.gen::<f32>() - 0.5) * extents[1],
        (rng.gen::<f32>() - 0.5) * extents[2],
    )
}

#[inline]
fn palette_pick(rng: &mut StdRng, palette: &[u32]) -> Rgb {
    palette
        .choose(rng)
        .map(|hex| hex_rgb(*hex))
        .unwrap_or([1.0, 1.0, 1.0])
}

/// Point `i` of `count` on a sphere of `radius`, spaced by the golden-angle
/// spiral so that the poles do not cluster.
pub fn sphere_shell(i: usize, count: usize, radius: f32) -> Vec3 {
    let n = count.max(1) as f32;
    let phi = (-1.0 + 2.0 * i as f32 / n).clamp(-1.0, 1.0).acos();
    let theta = (n * PI).sqrt() * phi;
    Vec3::new(
        theta.cos() * phi.sin() * radius,
        theta.sin() * phi.sin() * radius,
        phi.cos() * radius,
    )
}
