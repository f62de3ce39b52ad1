//! Morph engine and gesture control for an interactive 3D tree that bursts
//! into a particle cloud and gathers back.
//!
//! The crate computes positions, states and control signals only; drawing is
//! left to the host renderer, which reads [`Collection`] buffers and the
//! star/ambient poses from a [`Scene`] after every [`Scene::tick`].

pub mod ambient;
pub mod config;
pub mod constants;
pub mod core;
pub mod detector;
pub mod formation;
pub mod frame;
pub mod gesture;
pub mod input;
pub mod instance;
pub mod morph;
pub mod rotation;
pub mod star;

pub use crate::core::{ControlEvent, StateMachine, TreeState};
pub use config::{CollectionParams, ConfigError, SceneParams};
pub use detector::{DetectorError, GesturePipeline, LandmarkSource, PipelineStatus, ReplaySource};
pub use formation::{CollectionKind, EntitySeed};
pub use frame::Scene;
pub use gesture::{classify, Gesture, GestureSample, GestureThresholds, HandLandmarks, HandPose};
pub use instance::InstanceData;
pub use morph::{Collection, MorphParams, StartFormation};
