#![forbid(unsafe_code)]

//! Drag session lifecycle.
//!
//! A [`DragSession`] coordinates one press-drag-release interaction:
//! it captures the pointer's offset into the box at `begin`, turns each
//! pointer move into a snap resolution at `update`, and either commits the
//! last resolved position at `end` or restores the pre-drag frame at
//! `cancel`.
//!
//! # State Machine
//!
//! ```text
//! Idle -> Dragging -> Idle
//! ```
//!
//! `begin` is the only transition out of `Idle`; `end` and `cancel` are the
//! only transitions out of `Dragging`. Calls that do not match the current
//! state fail with [`SessionError`] rather than being queued or coalesced.
//!
//! # Update pipeline
//!
//! Each `update` runs, in order: pointer-offset translation, optional
//! constrain-to-container clamping, optional grid rounding, then snap
//! resolution against guides rebuilt from the current container. The
//! session keeps the previous [`SnapState`] so hysteresis carries across
//! moves within one drag.

use std::fmt;

use snapguide_core::geometry::{Point, Rect, Size};

use crate::config::{ConfigError, SnapConfig};
use crate::guide::GuideSet;
use crate::snap::{self, ResolveError, SnapState};

// ---------------------------------------------------------------------------
// DragSession
// ---------------------------------------------------------------------------

/// Stateful wrapper around snap resolution for a single pointer
/// interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    config: SnapConfig,
    state: DragState,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum DragState {
    Idle,
    Dragging(ActiveDrag),
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ActiveDrag {
    /// Pointer position minus frame origin, captured at `begin`; keeps the
    /// grab point under the pointer for the whole drag.
    origin_offset: Point,
    /// Frame at `begin`, restored on `cancel`.
    initial_frame: Rect,
    size: Size,
    snap: SnapState,
}

impl DragSession {
    /// Create an idle session with the given tuning.
    pub fn new(config: SnapConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            state: DragState::Idle,
        })
    }

    /// The session's tuning.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> SnapConfig {
        self.config
    }

    /// True while a drag is in progress.
    #[inline]
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// The last resolved state, while dragging.
    #[inline]
    #[must_use]
    pub const fn snap(&self) -> Option<SnapState> {
        match self.state {
            DragState::Dragging(drag) => Some(drag.snap),
            DragState::Idle => None,
        }
    }

    /// The box frame at its current (snapped) position, while dragging.
    #[inline]
    #[must_use]
    pub const fn frame(&self) -> Option<Rect> {
        match self.state {
            DragState::Dragging(drag) => {
                Some(Rect::from_origin_size(drag.snap.position, drag.size))
            }
            DragState::Idle => None,
        }
    }

    /// Start a drag: `Idle -> Dragging`.
    ///
    /// Captures `pointer - frame.origin` as the grab offset and `frame` as
    /// the rollback target for [`cancel`](Self::cancel).
    pub fn begin(&mut self, pointer: Point, frame: Rect) -> Result<(), SessionError> {
        if self.is_dragging() {
            return Err(SessionError::AlreadyDragging);
        }
        if !pointer.is_finite() {
            return Err(SessionError::NonFinitePointer { pointer });
        }
        if !frame.is_finite() {
            return Err(SessionError::NonFiniteRect {
                field: "frame",
                rect: frame,
            });
        }
        self.state = DragState::Dragging(ActiveDrag {
            origin_offset: pointer - frame.origin,
            initial_frame: frame,
            size: frame.size,
            snap: SnapState::free(frame.origin),
        });
        Ok(())
    }

    /// Feed one pointer move; returns the newly resolved state.
    ///
    /// Valid only while `Dragging`. Guides are rebuilt from `container` on
    /// every call, so a container that moves or resizes mid-drag is picked
    /// up immediately.
    pub fn update(&mut self, pointer: Point, container: Rect) -> Result<SnapState, SessionError> {
        let config = self.config;
        let drag = match &mut self.state {
            DragState::Dragging(drag) => drag,
            DragState::Idle => return Err(SessionError::NotDragging),
        };
        if !pointer.is_finite() {
            return Err(SessionError::NonFinitePointer { pointer });
        }
        if !container.is_finite() {
            return Err(SessionError::NonFiniteRect {
                field: "container",
                rect: container,
            });
        }

        let mut proposed = Rect::from_origin_size(pointer - drag.origin_offset, drag.size);
        if config.constrain_to_container {
            proposed = proposed.clamp_within(container);
        }
        if let Some(step) = config.grid_step {
            let origin = Point::new(
                round_to_step(proposed.origin.x, step),
                round_to_step(proposed.origin.y, step),
            );
            proposed = Rect::from_origin_size(origin, drag.size);
        }

        let guides = GuideSet::for_container(container, config.sources);
        let next = snap::resolve(proposed, &guides, &drag.snap, &config)?;
        drag.snap = next;
        Ok(next)
    }

    /// Commit the drag: `Dragging -> Idle`.
    ///
    /// Returns the last resolved state unchanged; release performs no
    /// further snapping.
    pub fn end(&mut self) -> Result<SnapState, SessionError> {
        match self.state {
            DragState::Dragging(drag) => {
                self.state = DragState::Idle;
                Ok(drag.snap)
            }
            DragState::Idle => Err(SessionError::NotDragging),
        }
    }

    /// Abort the drag: `Dragging -> Idle`.
    ///
    /// Returns the frame captured at `begin`; all intermediate state is
    /// discarded.
    pub fn cancel(&mut self) -> Result<Rect, SessionError> {
        match self.state {
            DragState::Dragging(drag) => {
                self.state = DragState::Idle;
                Ok(drag.initial_frame)
            }
            DragState::Idle => Err(SessionError::NotDragging),
        }
    }
}

/// Round to the nearest multiple of `step`.
#[inline]
fn round_to_step(value: f64, step: f64) -> f64 {
    (value / step).round() * step
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Lifecycle and input errors for [`DragSession`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionError {
    /// `begin` was called while a drag was already in progress.
    AlreadyDragging,
    /// `update`, `end`, or `cancel` was called with no active drag.
    NotDragging,
    /// A pointer sample carried NaN or infinite coordinates.
    NonFinitePointer { pointer: Point },
    /// A rect argument carried NaN or infinite coordinates.
    NonFiniteRect { field: &'static str, rect: Rect },
    /// Snap resolution rejected its inputs.
    Resolve(ResolveError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyDragging => write!(f, "drag already in progress"),
            Self::NotDragging => write!(f, "no active drag"),
            Self::NonFinitePointer { pointer } => {
                write!(f, "pointer has non-finite coordinates: {pointer:?}")
            }
            Self::NonFiniteRect { field, rect } => {
                write!(f, "{field} has non-finite coordinates: {rect:?}")
            }
            Self::Resolve(e) => write!(f, "snap resolution failed: {e}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Resolve(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ResolveError> for SessionError {
    fn from(e: ResolveError) -> Self {
        Self::Resolve(e)
    }
}
