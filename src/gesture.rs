//! Hand gesture classification.
//!
//! A landmark detector hands us one frame of normalized hand landmarks (21
//! points in the usual hand-tracking layout, `x`/`y` in [0, 1] image space with
//! `y` growing downward). [`classify`] turns a frame into a [`GestureSample`]
//! without looking at any previous frame; smoothing happens downstream.

use crate::constants::{OPEN_MARGIN, PINCH_THRESHOLD};
use glam::{Vec2, Vec3};
use smallvec::SmallVec;

pub const THUMB_TIP: usize = 4;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_BASE: usize = 9;
pub const MIDDLE_TIP: usize = 12;
pub const HAND_LANDMARK_COUNT: usize = 21;

/// Landmarks for a single detected hand.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HandLandmarks {
    points: SmallVec<[Vec3; HAND_LANDMARK_COUNT]>,
}

impl HandLandmarks {
    pub fn new(points: impl IntoIterator<Item = Vec3>) -> Self {
        Self {
            points: points.into_iter().collect(),
        }
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A synthetic hand with the index tip at `(1 - cursor_x, cursor_y)` in
    /// raw image space, so that [`classify`] reports the given cursor.
    ///
    /// Used by replay sources and tests in place of a real detector.
    pub fn posed(pose: HandPose, cursor_x: f32, cursor_y: f32) -> Self {
        let index = Vec3::new(1.0 - cursor_x, cursor_y, 0.0);
        let mut points: SmallVec<[Vec3; HAND_LANDMARK_COUNT]> =
            SmallVec::from_elem(index + Vec3::new(0.0, 0.15, 0.0), HAND_LANDMARK_COUNT);
        points[INDEX_TIP] = index;
        points[MIDDLE_BASE] = index + Vec3::new(0.02, 0.1, 0.0);
        match pose {
            HandPose::Pinch => {
                points[THUMB_TIP] = index + Vec3::new(0.02, 0.01, 0.0);
                points[MIDDLE_TIP] = points[MIDDLE_BASE] + Vec3::new(0.0, 0.02, 0.0);
            }
            HandPose::OpenPalm => {
                points[THUMB_TIP] = index + Vec3::new(-0.15, 0.08, 0.0);
                points[MIDDLE_TIP] = points[MIDDLE_BASE] - Vec3::new(0.0, 0.18, 0.0);
            }
            HandPose::Relaxed => {
                points[THUMB_TIP] = index + Vec3::new(-0.12, 0.06, 0.0);
                points[MIDDLE_TIP] = points[MIDDLE_BASE] + Vec3::new(0.0, 0.01, 0.0);
            }
        }
        Self { points }
    }
}

/// Canned hand shapes for [`HandLandmarks::posed`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandPose {
    /// Thumb and index tips touching.
    Pinch,
    /// Fingers extended upward.
    OpenPalm,
    /// Hand visible but neither pinching nor open.
    Relaxed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    Grab,
    Open,
    None,
}

/// Classifier output for one camera frame with a hand in view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSample {
    pub is_grabbing: bool,
    pub is_open: bool,
    /// Mirrored horizontal cursor, 0 = left edge of the displayed feed.
    pub x: f32,
    pub y: f32,
}

impl GestureSample {
    pub fn gesture(&self) -> Gesture {
        if self.is_grabbing {
            Gesture::Grab
        } else if self.is_open {
            Gesture::Open
        } else {
            Gesture::None
        }
    }

    /// Grabbing or open: the hand is steering the tree.
    pub fn is_active(&self) -> bool {
        self.is_grabbing || self.is_open
    }

    pub fn cursor(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureThresholds {
    /// Thumb-index distance below which the hand is grabbing.
    pub pinch_distance: f32,
    /// How far the middle tip must rise above its base to count as open.
    pub open_margin: f32,
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            pinch_distance: PINCH_THRESHOLD,
            open_margin: OPEN_MARGIN,
        }
    }
}

/// Classify one frame. `None` in, or a frame too short or with non-finite
/// coordinates at the indices we read, yields `None`.
pub fn classify(frame: Option<&HandLandmarks>, th: &GestureThresholds) -> Option<GestureSample> {
    let points = frame?.points();
    let thumb = landmark(points, THUMB_TIP)?;
    let index = landmark(points, INDEX_TIP)?;
    let middle_base = landmark(points, MIDDLE_BASE)?;
    let middle_tip = landmark(points, MIDDLE_TIP)?;

    let pinch = thumb.truncate().distance(index.truncate());
    let is_grabbing = pinch < th.pinch_distance;
    let is_open = !is_grabbing && middle_tip.y < middle_base.y - th.open_margin;

    let sample = GestureSample {
        is_grabbing,
        is_open,
        x: (1.0 - index.x).clamp(0.0, 1.0),
        y: index.y.clamp(0.0, 1.0),
    };
    log::trace!(
        "[gesture] pinch={:.3} {:?} cursor=({:.2},{:.2})",
        pinch,
        sample.gesture(),
        sample.x,
        sample.y
    );
    Some(sample)
}

#[inline]
fn landmark(points: &[Vec3], i: usize) -> Option<Vec3> {
    points.get(i).copied().filter(|p| p.is_finite())
}
