//! Landmark source boundary and the gesture pipeline that polls it.
//!
//! The detector itself (camera plus hand-landmark model) is external; it only
//! has to implement [`LandmarkSource`]. [`GesturePipeline`] owns the source,
//! starts it fail-soft, classifies each frame and releases the camera when
//! stopped or dropped.

use crate::gesture::{classify, GestureSample, GestureThresholds, HandLandmarks};
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum DetectorError {
    #[error("camera unavailable: {0}")]
    CameraUnavailable(String),
    #[error("hand landmark model failed to load: {0}")]
    ModelUnavailable(String),
}

/// A camera + landmark model producing at most one hand per frame.
pub trait LandmarkSource {
    /// Acquire the camera and load the model. Called at most once per
    /// [`GesturePipeline::start`] or [`GesturePipeline::retry`].
    fn open(&mut self) -> Result<(), DetectorError>;

    /// Run detection on the latest camera frame. `None` means no hand.
    fn detect(&mut self, timestamp_ms: f64) -> Option<HandLandmarks>;

    /// Release the camera. Must be safe to call more than once.
    fn close(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStatus {
    Idle,
    Running,
    /// Startup failed; gesture control stays off until [`GesturePipeline::retry`].
    Unavailable,
    Stopped,
}

pub struct GesturePipeline<S: LandmarkSource> {
    source: S,
    status: PipelineStatus,
    thresholds: GestureThresholds,
}

impl<S: LandmarkSource> GesturePipeline<S> {
    pub fn new(source: S, thresholds: GestureThresholds) -> Self {
        Self {
            source,
            status: PipelineStatus::Idle,
            thresholds,
        }
    }

    pub fn status(&self) -> PipelineStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == PipelineStatus::Running
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Open the source once. A failure is logged and leaves the pipeline
    /// unavailable; later calls do not retry.
    pub fn start(&mut self) -> PipelineStatus {
        if self.status == PipelineStatus::Idle {
            self.open_source();
        }
        self.status
    }

    /// Explicit user request to try the camera again.
    pub fn retry(&mut self) -> PipelineStatus {
        if matches!(
            self.status,
            PipelineStatus::Unavailable | PipelineStatus::Stopped
        ) {
            self.open_source();
        }
        self.status
    }

    fn open_source(&mut self) {
        match self.source.open() {
            Ok(()) => {
                log::info!("[gesture] landmark source running");
                self.status = PipelineStatus::Running;
            }
            Err(e) => {
                log::warn!("[gesture] {e}; continuing without gesture control");
                self.status = PipelineStatus::Unavailable;
            }
        }
    }

    /// One detection cycle. Returns `None` when not running, when no hand is
    /// visible and when the frame is malformed.
    pub fn poll(&mut self, timestamp_ms: f64) -> Option<GestureSample> {
        if !self.is_running() {
            return None;
        }
        let frame = self.source.detect(timestamp_ms);
        classify(frame.as_ref(), &self.thresholds)
    }

    pub fn stop(&mut self) {
        if self.status == PipelineStatus::Running {
            self.source.close();
            log::info!("[gesture] landmark source stopped");
        }
        if self.status != PipelineStatus::Unavailable {
            self.status = PipelineStatus::Stopped;
        }
    }
}

impl<S: LandmarkSource> Drop for GesturePipeline<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Plays back a fixed list of frames, looping at the end.
#[derive(Clone, Debug, Default)]
pub struct ReplaySource {
    frames: Vec<Option<HandLandmarks>>,
    cursor: usize,
    fail_open: Option<DetectorError>,
    open: bool,
    opened_count: usize,
}

impl ReplaySource {
    pub fn new(frames: Vec<Option<HandLandmarks>>) -> Self {
        Self {
            frames,
            ..Self::default()
        }
    }

    /// A source whose camera never comes up.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            fail_open: Some(DetectorError::CameraUnavailable(reason.into())),
            ..Self::default()
        }
    }

    /// A source whose camera works but whose landmark model fails to load.
    pub fn model_missing(reason: impl Into<String>) -> Self {
        Self {
            fail_open: Some(DetectorError::ModelUnavailable(reason.into())),
            ..Self::default()
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// How many times `open` has been attempted.
    pub fn opened_count(&self) -> usize {
        self.opened_count
    }
}

impl LandmarkSource for ReplaySource {
    fn open(&mut self) -> Result<(), DetectorError> {
        self.opened_count += 1;
        if let Some(e) = &self.fail_open {
            return Err(e.clone());
        }
        self.open = true;
        Ok(())
    }

    fn detect(&mut self, _timestamp_ms: f64) -> Option<HandLandmarks> {
        if !self.open || self.frames.is_empty() {
            return None;
        }
        let frame = self.frames[self.cursor % self.frames.len()].clone();
        self.cursor = (self.cursor + 1) % self.frames.len();
        frame
    }

    fn close(&mut self) {
        self.open = false;
    }
}
