//! Scroll- and pointer-driven animation primitives.
//!
//! The pieces compose in one direction: a tracker produces a normalized
//! sample ([`scroll::use_scroll_progress`]), a keyframe table maps the sample
//! to a visual value ([`keyframes::Keyframes`]), and the value is bound to an
//! element through Leptos' reactive style attributes. Springs and the
//! transform composer cover the pointer-driven cases where raw samples are
//! too jumpy to bind directly.

pub mod keyframes;
pub mod scroll;
pub mod spring;
pub mod transform;

pub use keyframes::{Keyframes, KeyframesError, StepKeyframes};
pub use scroll::{use_scroll_progress, Anchor, Edge, ScrollWindow};
pub use spring::{use_spring, SpringConfig, SpringState};
pub use transform::Transform;

use std::fmt;

/// Discrete pointer-interactivity state derived from scroll progress.
///
/// Bound to `style:pointer-events` so stacked cards only accept clicks while
/// they are the active card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerGate {
    Auto,
    #[default]
    None,
}

impl fmt::Display for PointerGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointerGate::Auto => write!(f, "auto"),
            PointerGate::None => write!(f, "none"),
        }
    }
}
