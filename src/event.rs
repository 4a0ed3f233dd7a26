//! Transitions and button events.
//!
//! A device frame carries one state byte; the detector turns byte-level
//! differences into per-button deltas. Events are always edges: a button that
//! stays down across frames produces nothing after its initial press.
//!
//! ## Conventions
//! - Emitted events carry `Press` or `Release` only. [`Transition::Both`] is a
//!   registration wildcard (see [`HandlerRegistry`](crate::registry::HandlerRegistry))
//!   and never appears in a [`ButtonEvent`].
//! - A bit that toggles down-and-up between two polls is invisible — discrete
//!   sampling cannot see it. Accepted limitation, not a bug.

use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Edge kind for a button, plus the registration-only wildcard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transition {
    /// Button bit went 0 → 1.
    Press,
    /// Button bit went 1 → 0.
    Release,
    /// Wildcard: matches either edge at registration time. Never emitted.
    Both,
}

/// Timestamped button edge produced by the detector.
///
/// `at` is monotonic capture time, suitable for ordering and delta timing
/// within a run.
#[derive(Clone, Debug)]
pub struct ButtonEvent {
    /// Capture time (monotonic).
    pub at: Instant,
    /// Button name from the [`ButtonMap`](crate::buttonmap::ButtonMap).
    pub name: String,
    /// `Press` or `Release`, never `Both`.
    pub transition: Transition,
}

impl ButtonEvent {
    pub fn new(name: impl Into<String>, transition: Transition) -> Self {
        Self {
            at: Instant::now(),
            name: name.into(),
            transition,
        }
    }
}
