#![forbid(unsafe_code)]

//! Normalized pointer events.
//!
//! Hosts translate whatever their input layer produces (mouse tracking
//! loops, pan gesture recognizers, touch streams) into this one event shape
//! before it reaches the engine.
//!
//! # Stream contract
//!
//! Events must form a single, serialized, monotonically ordered stream:
//! `Began`, zero or more `Changed`, then exactly one `Ended` or `Cancelled`.
//! A host with several concurrent input sources must merge them into one
//! logical stream first; the engine rejects a second `Began` while a drag
//! is active rather than queueing it.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Lifecycle phase of a pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerPhase {
    /// Pointer went down (mouse press, gesture began).
    Began,
    /// Pointer moved while down.
    Changed,
    /// Pointer went up normally; the interaction commits.
    Ended,
    /// The interaction was aborted (gesture cancellation, focus loss);
    /// any in-progress work should be rolled back.
    Cancelled,
}

impl PointerPhase {
    /// True for the two phases that close out an interaction.
    #[inline]
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, PointerPhase::Ended | PointerPhase::Cancelled)
    }
}

/// One pointer sample: where the pointer is and what just happened.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub position: Point,
    pub phase: PointerPhase,
}

impl PointerEvent {
    /// Create an event with an explicit phase.
    #[inline]
    #[must_use]
    pub const fn new(position: Point, phase: PointerPhase) -> Self {
        Self { position, phase }
    }

    /// Pointer-down sample.
    #[inline]
    #[must_use]
    pub const fn began(position: Point) -> Self {
        Self::new(position, PointerPhase::Began)
    }

    /// Pointer-moved sample.
    #[inline]
    #[must_use]
    pub const fn changed(position: Point) -> Self {
        Self::new(position, PointerPhase::Changed)
    }

    /// Pointer-up sample.
    #[inline]
    #[must_use]
    pub const fn ended(position: Point) -> Self {
        Self::new(position, PointerPhase::Ended)
    }

    /// Abort sample.
    #[inline]
    #[must_use]
    pub const fn cancelled(position: Point) -> Self {
        Self::new(position, PointerPhase::Cancelled)
    }
}
