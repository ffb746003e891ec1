#![forbid(unsafe_code)]

//! Guide-line snapping for draggable boxes.
//!
//! # Role
//! `snapguide` is the decision layer of the engine. Given a box being
//! dragged inside a container, it derives the container's guide lines,
//! decides per axis which guide (if any) the box should stick to, and
//! anchors the box so the matched edge or center sits exactly on the line.
//! It never draws anything and never talks to an input device; hosts feed
//! it normalized pointer samples and render whatever it reports.
//!
//! # Primary responsibilities
//! - **Guides**: edge and center lines derived from a container
//!   ([`GuideSet`]).
//! - **Resolution**: the pure capture/hold/release decision
//!   ([`snap::resolve`]).
//! - **Sessions**: grab-offset bookkeeping and the drag state machine
//!   ([`DragSession`]).
//! - **Tracking**: pointer-stream routing and capture/switch/release
//!   feedback events ([`SnapTracker`]).
//!
//! # How it fits together
//! [`SnapTracker`] is the everything-wired-up entry point. Hosts that keep
//! their own hit testing and event plumbing can drive a [`DragSession`]
//! directly, and hosts that only want the math can call [`snap::resolve`]
//! with their own state.
//!
//! Coordinates follow the shared convention of [`snapguide_core`]:
//! rectangles are origin plus non-negative size, and all comparisons are
//! min/max math, so y-up and y-down hosts read the same.

pub mod config;
pub mod guide;
pub mod session;
pub mod snap;
pub mod tracker;

// --- Core re-exports -------------------------------------------------------

pub use snapguide_core as core;
pub use snapguide_core::event::{PointerEvent, PointerPhase};
pub use snapguide_core::geometry::{Axis, Point, Rect, Size, Span};

// --- Engine re-exports -----------------------------------------------------

pub use config::{ConfigError, SnapConfig, DEFAULT_RELEASE_FACTOR, DEFAULT_TOLERANCE};
pub use guide::{Guide, GuideKind, GuideSet, GuideSources};
pub use session::{DragSession, SessionError};
pub use snap::{resolve, HeldGuide, ResolveError, SnapState};
pub use tracker::{IgnoreReason, SnapEvent, SnapTracker, TrackerError};

#[cfg(feature = "config-file")]
pub use config::ConfigFileError;

// --- Prelude ----------------------------------------------------------------

/// One-line import for the common surface.
pub mod prelude {
    pub use crate::{
        Axis, DragSession, Guide, GuideKind, GuideSet, GuideSources, HeldGuide, Point,
        PointerEvent, PointerPhase, Rect, Size, SnapConfig, SnapEvent, SnapState, SnapTracker,
        Span,
    };
}
