/// Scene tuning constants.
///
/// These express intended behavior (smoothing factors, formation extents,
/// pulse rates) and keep magic numbers out of the engine code. All smoothing
/// factors are per tick, not per second.
// Collection sizes
pub const LEAF_COUNT: usize = 5500;
pub const DECORATION_COUNT: usize = 1500;
pub const RIBBON_COUNT: usize = 1200;
pub const BLOSSOM_COUNT: usize = 8000;
pub const SPARKLE_COUNT: usize = 60;
pub const SNOW_COUNT: usize = 200;

// Per-collection morph factors (larger converges faster)
pub const LEAF_MORPH_ALPHA: f32 = 0.06;
pub const DECORATION_MORPH_ALPHA: f32 = 0.06;
pub const RIBBON_MORPH_ALPHA: f32 = 0.05;
pub const BLOSSOM_MORPH_ALPHA: f32 = 0.08;

// Leaf cone: h in [0, LEAF_HEIGHT), r = (TREE_APEX - h) * LEAF_TAPER, y = h + LEAF_Y_OFFSET
pub const TREE_APEX: f32 = 12.0;
pub const LEAF_HEIGHT: f32 = 12.0;
pub const LEAF_TAPER: f32 = 0.45;
pub const LEAF_Y_OFFSET: f32 = -5.0;
pub const LEAF_SCATTER: [f32; 3] = [30.0, 25.0, 30.0]; // explode box extents
pub const LEAF_SCALE_MIN: f32 = 0.15;
pub const LEAF_SCALE_SPAN: f32 = 0.2;

// Decorations sit slightly outside the leaf cone
pub const DECORATION_HEIGHT: f32 = 11.0;
pub const DECORATION_TAPER: f32 = 0.42;
pub const DECORATION_OUTSET: f32 = 1.05;
pub const DECORATION_Y_OFFSET: f32 = -4.8;
pub const DECORATION_SCATTER: [f32; 3] = [35.0, 30.0, 35.0];
pub const DECORATION_SCALE_MIN: f32 = 0.08;
pub const DECORATION_SCALE_SPAN: f32 = 0.15;

// Ribbon spiral
pub const RIBBON_WRAPS: f32 = 3.5;
pub const RIBBON_HEIGHT: f32 = 11.0;
pub const RIBBON_TAPER: f32 = 0.5;
pub const RIBBON_Y_OFFSET: f32 = -5.0;
pub const RIBBON_SCATTER: [f32; 3] = [40.0, 40.0, 40.0];
pub const RIBBON_SCALE_MIN: f32 = 0.05;
pub const RIBBON_SCALE_SPAN: f32 = 0.05;

// Blossom point cloud: cone in [-5, 5), sphere shell on explode
pub const BLOSSOM_HALF_HEIGHT: f32 = 5.0;
pub const BLOSSOM_BASE_RADIUS: f32 = 4.0;
pub const BLOSSOM_SHELL_MIN: f32 = 8.0;
pub const BLOSSOM_SHELL_SPAN: f32 = 4.0;
pub const BLOSSOM_POINT_SIZE: f32 = 0.08;
pub const BLOSSOM_POINT_PULSE: f32 = 0.02;
pub const BLOSSOM_POINT_PULSE_RATE: f32 = 3.0; // rad/s

// Palettes (sRGB hex)
pub const LEAF_PALETTE: [u32; 3] = [0xFFB7C5, 0xFF69B4, 0xF67280];
pub const DECORATION_PALETTE: [u32; 3] = [0xFFFFFF, 0xE0BBE4, 0x957DAD];
pub const RIBBON_TINT: u32 = 0xFFFFFF;
pub const BLOSSOM_GRADIENT: [u32; 2] = [0xFFB6C1, 0xFFD700]; // base -> tip

// Star at the tree tip
pub const STAR_TREE_Y: f32 = 7.1; // tip of the leaf cone plus a hair
pub const STAR_EXPLODE_Y: f32 = 18.0;
pub const STAR_TREE_SCALE: f32 = 1.3;
pub const STAR_Y_ALPHA: f32 = 0.08;
pub const STAR_SCALE_ALPHA: f32 = 0.1;
pub const STAR_OPACITY_ALPHA: f32 = 0.1;
pub const STAR_SPIN_RATE: f32 = 1.5; // rad/s
pub const STAR_KEY_LIGHT: f32 = 25.0;
pub const STAR_FILL_LIGHT: f32 = 10.0;
pub const STAR_SHINE_RATE: f32 = 10.0;
pub const STAR_SHINE_DEPTH: f32 = 0.4;

// Sparkles orbiting the star
pub const SPARKLE_EXTENT: f32 = 2.5;
pub const SPARKLE_SPIN_X: f32 = 0.005;
pub const SPARKLE_SPIN_Y: f32 = 0.01;
pub const SPARKLE_SCALE_BASE: f32 = 1.2;
pub const SPARKLE_SCALE_PULSE: f32 = 0.4;
pub const SPARKLE_SCALE_RATE: f32 = 6.0;
pub const SPARKLE_OPACITY_BASE: f32 = 0.4;
pub const SPARKLE_OPACITY_PULSE: f32 = 0.2;
pub const SPARKLE_OPACITY_RATE: f32 = 10.0;

// Ground ring and snow
pub const RING_PULSE: f32 = 0.05;
pub const RING_PULSE_RATE: f32 = 1.5;
pub const RING_SPIN: f32 = 0.005;
pub const SNOW_EXTENT: f32 = 40.0;
pub const SNOW_SPIN: f32 = 0.0005;
pub const SNOW_BOB: f32 = 0.3;
pub const SNOW_BOB_RATE: f32 = 0.3;

// Rotation control
pub const ROTATION_DRIFT: f32 = 0.003; // rad per tick
pub const ROTATION_SENSITIVITY: f32 = std::f32::consts::PI * 6.0; // rad per unit of hand x
pub const ROTATION_EASE: f32 = 0.15;

// Gesture classification (normalized image units)
pub const PINCH_THRESHOLD: f32 = 0.06;
pub const OPEN_MARGIN: f32 = 0.05;
pub const CURSOR_SMOOTHING: f32 = 0.15;
