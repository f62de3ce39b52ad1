use crate::constants::CURSOR_SMOOTHING;
use crate::gesture::GestureSample;
use glam::Vec2;

/// Low-pass filter for the on-screen hand pointer.
///
/// Samples arrive at camera rate; [`CursorSmoother::tick`] runs at render
/// rate and eases the displayed pointer toward the last raw sample. The last
/// raw position is kept when the hand is lost, so the pointer settles where
/// the hand was last seen.
#[derive(Clone, Debug)]
pub struct CursorSmoother {
    raw: Vec2,
    smoothed: Vec2,
    beta: f32,
}

impl Default for CursorSmoother {
    fn default() -> Self {
        Self::new(CURSOR_SMOOTHING)
    }
}

impl CursorSmoother {
    pub fn new(beta: f32) -> Self {
        Self {
            raw: Vec2::ZERO,
            smoothed: Vec2::ZERO,
            beta,
        }
    }

    #[inline]
    pub fn observe(&mut self, sample: Option<&GestureSample>) {
        if let Some(s) = sample {
            self.raw = s.cursor();
        }
    }

    #[inline]
    pub fn tick(&mut self) -> Vec2 {
        self.smoothed += (self.raw - self.smoothed) * self.beta;
        self.smoothed
    }

    pub fn raw(&self) -> Vec2 {
        self.raw
    }

    pub fn smoothed(&self) -> Vec2 {
        self.smoothed
    }

    /// Smoothed pointer in pixel coordinates of a `width` x `height` overlay.
    #[inline]
    pub fn viewport_px(&self, width: u32, height: u32) -> Vec2 {
        self.smoothed * Vec2::new(width as f32, height as f32)
    }
}
