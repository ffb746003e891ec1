#![forbid(unsafe_code)]

//! Pointer stream routing and feedback transitions.
//!
//! [`SnapTracker`] sits between a host's input layer and the drag session:
//! pointer events go in, a batch of [`SnapEvent`]s comes out. It owns the
//! box frame across drags, hit-tests `Began` samples against it, and diffs
//! the held-guide state on every move so consumers see discrete
//! capture/switch/release transitions instead of having to poll.
//!
//! The transition events are what a haptic actuator wants: a pulse fires
//! when a guide is captured or switched, not while the box merely rests on
//! a line. Renderers use [`SnapTracker::frame`] and
//! [`SnapTracker::guides_for`] to paint, and the `GuideCaptured` /
//! `GuideReleased` pairs to highlight active guide lines.
//!
//! # Stream tolerance
//!
//! Stray `Changed`/`Ended`/`Cancelled` samples with no drag in progress are
//! reported as [`SnapEvent::Ignored`] with a reason, not errors; input
//! layers routinely deliver a trailing move after a release. The one hard
//! error is a second `Began` while a drag is active, which means the host
//! failed to serialize its input sources into one stream.

use std::fmt;

use serde::{Deserialize, Serialize};

use snapguide_core::event::{PointerEvent, PointerPhase};
use snapguide_core::geometry::{Axis, Rect};

use crate::config::{ConfigError, SnapConfig};
use crate::guide::{Guide, GuideSet};
use crate::session::{DragSession, SessionError};
use crate::snap::SnapState;

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Facts produced by one call to [`SnapTracker::handle`], in order.
///
/// On a move, `BoxMoved` always precedes any guide transitions; per-axis
/// transitions are reported horizontal first, then vertical.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SnapEvent {
    /// A drag began; the frame is the box at its pre-drag position.
    DragStarted { frame: Rect },
    /// The box moved to a new (snapped) frame.
    BoxMoved { frame: Rect },
    /// An axis that held nothing now holds a guide.
    GuideCaptured { axis: Axis, guide: Guide },
    /// An axis switched from one guide to another.
    GuideSwitched { axis: Axis, from: Guide, to: Guide },
    /// An axis let go of its guide.
    GuideReleased { axis: Axis, guide: Guide },
    /// The drag committed at this frame.
    DragEnded { frame: Rect },
    /// The drag was aborted; the frame is the restored pre-drag frame.
    DragCancelled { frame: Rect },
    /// The sample did not apply to any drag and was dropped.
    Ignored { reason: IgnoreReason },
}

impl SnapEvent {
    /// True for the capture/switch/release transitions a feedback actuator
    /// pulses on.
    #[inline]
    #[must_use]
    pub const fn is_guide_transition(&self) -> bool {
        matches!(
            self,
            SnapEvent::GuideCaptured { .. }
                | SnapEvent::GuideSwitched { .. }
                | SnapEvent::GuideReleased { .. }
        )
    }

    /// The frame carried by frame-bearing events.
    #[inline]
    #[must_use]
    pub const fn frame(&self) -> Option<Rect> {
        match self {
            SnapEvent::DragStarted { frame }
            | SnapEvent::BoxMoved { frame }
            | SnapEvent::DragEnded { frame }
            | SnapEvent::DragCancelled { frame } => Some(*frame),
            _ => None,
        }
    }
}

/// Why a pointer sample was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// `Began` landed outside the box.
    MissedBox,
    /// `Changed`/`Ended`/`Cancelled` arrived with no drag in progress.
    NoActiveDrag,
}

// ---------------------------------------------------------------------------
// SnapTracker
// ---------------------------------------------------------------------------

/// Stateful router from a normalized pointer stream to drag sessions.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapTracker {
    session: DragSession,
    frame: Rect,
}

impl SnapTracker {
    /// Create a tracker managing a box at `initial_frame`.
    pub fn new(initial_frame: Rect, config: SnapConfig) -> Result<Self, TrackerError> {
        if !initial_frame.is_finite() {
            return Err(TrackerError::NonFiniteFrame {
                frame: initial_frame,
            });
        }
        Ok(Self {
            session: DragSession::new(config)?,
            frame: initial_frame,
        })
    }

    /// The box frame at its current position.
    #[inline]
    #[must_use]
    pub const fn frame(&self) -> Rect {
        self.frame
    }

    /// True while a drag is in progress.
    #[inline]
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.session.is_dragging()
    }

    /// The guide currently held on `axis`, if any.
    #[inline]
    #[must_use]
    pub fn held(&self, axis: Axis) -> Option<Guide> {
        self.session.snap().and_then(|state| state.held(axis))
    }

    /// The tracker's tuning.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> SnapConfig {
        self.session.config()
    }

    /// The guide set a renderer should paint for `container`, honoring the
    /// configured sources.
    #[must_use]
    pub fn guides_for(&self, container: Rect) -> GuideSet {
        GuideSet::for_container(container, self.config().sources)
    }

    /// Feed one pointer sample; returns the resulting events in order.
    ///
    /// `container` is the current container bounds; guides are rebuilt
    /// from it on every move.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        container: Rect,
    ) -> Result<Vec<SnapEvent>, TrackerError> {
        let events = match event.phase {
            PointerPhase::Began => self.handle_began(event)?,
            PointerPhase::Changed => self.handle_changed(event, container)?,
            PointerPhase::Ended => self.handle_ended()?,
            PointerPhase::Cancelled => self.handle_cancelled()?,
        };
        for event in &events {
            log_event(event);
        }
        Ok(events)
    }

    fn handle_began(&mut self, event: PointerEvent) -> Result<Vec<SnapEvent>, TrackerError> {
        if self.session.is_dragging() {
            return Err(TrackerError::AlreadyDragging);
        }
        if !self.frame.contains(event.position) {
            return Ok(vec![SnapEvent::Ignored {
                reason: IgnoreReason::MissedBox,
            }]);
        }
        self.session.begin(event.position, self.frame)?;
        Ok(vec![SnapEvent::DragStarted { frame: self.frame }])
    }

    fn handle_changed(
        &mut self,
        event: PointerEvent,
        container: Rect,
    ) -> Result<Vec<SnapEvent>, TrackerError> {
        let previous = match self.session.snap() {
            Some(state) => state,
            None => {
                return Ok(vec![SnapEvent::Ignored {
                    reason: IgnoreReason::NoActiveDrag,
                }]);
            }
        };
        let next = self.session.update(event.position, container)?;
        self.frame = Rect::from_origin_size(next.position, self.frame.size);

        let mut events = vec![SnapEvent::BoxMoved { frame: self.frame }];
        for axis in Axis::BOTH {
            push_transition(&mut events, axis, previous.held(axis), next.held(axis));
        }
        Ok(events)
    }

    fn handle_ended(&mut self) -> Result<Vec<SnapEvent>, TrackerError> {
        if !self.session.is_dragging() {
            return Ok(vec![SnapEvent::Ignored {
                reason: IgnoreReason::NoActiveDrag,
            }]);
        }
        let committed = self.session.end()?;
        self.frame = Rect::from_origin_size(committed.position, self.frame.size);

        let mut events = release_events(&committed);
        events.push(SnapEvent::DragEnded { frame: self.frame });
        Ok(events)
    }

    fn handle_cancelled(&mut self) -> Result<Vec<SnapEvent>, TrackerError> {
        let last = match self.session.snap() {
            Some(state) => state,
            None => {
                return Ok(vec![SnapEvent::Ignored {
                    reason: IgnoreReason::NoActiveDrag,
                }]);
            }
        };
        let restored = self.session.cancel()?;
        self.frame = restored;

        let mut events = release_events(&last);
        events.push(SnapEvent::DragCancelled { frame: restored });
        Ok(events)
    }
}

/// Diff one axis' held guide into a transition event, if any.
///
/// Identity is by guide kind: the same kind at a new coordinate (a
/// container that resized mid-drag) is still the same guide, not a switch.
fn push_transition(
    events: &mut Vec<SnapEvent>,
    axis: Axis,
    before: Option<Guide>,
    after: Option<Guide>,
) {
    match (before, after) {
        (None, Some(guide)) => events.push(SnapEvent::GuideCaptured { axis, guide }),
        (Some(guide), None) => events.push(SnapEvent::GuideReleased { axis, guide }),
        (Some(from), Some(to)) if from.kind != to.kind => {
            events.push(SnapEvent::GuideSwitched { axis, from, to });
        }
        _ => {}
    }
}

/// Release transitions for every guide still held when a drag closes, so
/// the capture/release stream an actuator sees is balanced.
fn release_events(state: &SnapState) -> Vec<SnapEvent> {
    let mut events = Vec::new();
    for axis in Axis::BOTH {
        if let Some(guide) = state.held(axis) {
            events.push(SnapEvent::GuideReleased { axis, guide });
        }
    }
    events
}

fn log_event(event: &SnapEvent) {
    match event {
        SnapEvent::DragStarted { frame } => {
            tracing::debug!(
                message = "snap.drag_started",
                x = frame.origin.x,
                y = frame.origin.y,
            );
        }
        SnapEvent::BoxMoved { frame } => {
            tracing::trace!(
                message = "snap.box_moved",
                x = frame.origin.x,
                y = frame.origin.y,
            );
        }
        SnapEvent::GuideCaptured { axis, guide } => {
            tracing::debug!(
                message = "snap.guide_captured",
                axis = ?axis,
                kind = ?guide.kind,
                coordinate = guide.coordinate,
            );
        }
        SnapEvent::GuideSwitched { axis, from, to } => {
            tracing::debug!(
                message = "snap.guide_switched",
                axis = ?axis,
                from = ?from.kind,
                to = ?to.kind,
                coordinate = to.coordinate,
            );
        }
        SnapEvent::GuideReleased { axis, guide } => {
            tracing::debug!(
                message = "snap.guide_released",
                axis = ?axis,
                kind = ?guide.kind,
            );
        }
        SnapEvent::DragEnded { frame } => {
            tracing::debug!(
                message = "snap.drag_ended",
                x = frame.origin.x,
                y = frame.origin.y,
            );
        }
        SnapEvent::DragCancelled { frame } => {
            tracing::debug!(
                message = "snap.drag_cancelled",
                x = frame.origin.x,
                y = frame.origin.y,
            );
        }
        SnapEvent::Ignored { reason } => {
            tracing::trace!(message = "snap.ignored", reason = ?reason);
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors surfaced by [`SnapTracker`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackerError {
    /// `Began` arrived while a drag was already active; the host must
    /// serialize its input sources into one stream.
    AlreadyDragging,
    /// The initial frame carries NaN or infinite coordinates.
    NonFiniteFrame { frame: Rect },
    /// The config is out of range.
    Config(ConfigError),
    /// The underlying session rejected an operation.
    Session(SessionError),
}

impl fmt::Display for TrackerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyDragging => {
                write!(f, "pointer began while a drag was already active")
            }
            Self::NonFiniteFrame { frame } => {
                write!(f, "initial frame has non-finite coordinates: {frame:?}")
            }
            Self::Config(e) => write!(f, "invalid snap config: {e}"),
            Self::Session(e) => write!(f, "drag session error: {e}"),
        }
    }
}

impl std::error::Error for TrackerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Session(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for TrackerError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<SessionError> for TrackerError {
    fn from(e: SessionError) -> Self {
        Self::Session(e)
    }
}
