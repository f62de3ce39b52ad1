//! Discrete tree/explode state and its transition function.
//!
//! The state machine is the only writer of [`TreeState`]. Every collection's
//! morph step, the star and the rotation controller read it once per tick.

use crate::gesture::GestureSample;
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TreeState {
    #[default]
    Tree,
    Explode,
}

impl TreeState {
    pub fn toggled(self) -> Self {
        match self {
            TreeState::Tree => TreeState::Explode,
            TreeState::Explode => TreeState::Tree,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TreeState::Tree => "TREE",
            TreeState::Explode => "EXPLODE",
        }
    }
}

impl fmt::Display for TreeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Input that may move the state machine.
///
/// `Gesture(None)` is a detection cycle that found no hand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ControlEvent {
    Toggle,
    Gesture(Option<GestureSample>),
}

#[derive(Clone, Debug, Default)]
pub struct StateMachine {
    state: TreeState,
}

impl StateMachine {
    pub fn new(initial: TreeState) -> Self {
        Self { state: initial }
    }

    pub fn state(&self) -> TreeState {
        self.state
    }

    /// Apply one control event. Returns true if the state changed.
    ///
    /// There is no debouncing: whichever event arrives last wins.
    pub fn apply(&mut self, event: &ControlEvent) -> bool {
        let next = match event {
            ControlEvent::Toggle => Some(self.state.toggled()),
            ControlEvent::Gesture(Some(sample)) => {
                if sample.is_grabbing {
                    Some(TreeState::Tree)
                } else if sample.is_open {
                    Some(TreeState::Explode)
                } else {
                    None
                }
            }
            ControlEvent::Gesture(None) => None,
        };
        match next {
            Some(s) if s != self.state => {
                log::debug!("[state] {} -> {} ({:?})", self.state, s, event_kind(event));
                self.state = s;
                true
            }
            _ => false,
        }
    }

    pub fn toggle(&mut self) -> bool {
        self.apply(&ControlEvent::Toggle)
    }

    pub fn on_gesture(&mut self, sample: Option<GestureSample>) -> bool {
        self.apply(&ControlEvent::Gesture(sample))
    }
}

fn event_kind(event: &ControlEvent) -> &'static str {
    match event {
        ControlEvent::Toggle => "toggle",
        ControlEvent::Gesture(Some(s)) if s.is_grabbing => "grab",
        ControlEvent::Gesture(Some(s)) if s.is_open => "open",
        ControlEvent::Gesture(_) => "idle hand",
    }
}
