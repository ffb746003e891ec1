#![forbid(unsafe_code)]

//! Snap resolution with hysteresis.
//!
//! [`resolve`] is a pure function from a proposed rect, a guide set, the
//! previous [`SnapState`], and a [`SnapConfig`] to a new [`SnapState`]. The
//! two axes are resolved independently; each can hold at most one guide.
//!
//! # Candidates
//!
//! On each axis the moving rect offers three candidate coordinates: its min
//! edge, max edge, and midpoint. A guide's distance is the smallest absolute
//! difference between its coordinate and any candidate. Capture requires
//! distance <= `tolerance`; among capturable guides the nearest wins, ties
//! going to declaration order (min edge, max edge, center).
//!
//! # Hysteresis
//!
//! A capture records which candidate the guide caught as the hold's anchor.
//! While the axis is held, distance is measured from that anchor candidate
//! alone, and the guide keeps the axis while the anchor stays within
//! `tolerance * release_factor`, even when another guide is now closer.
//! Slow movement between two nearby guides therefore cannot make the held
//! guide chatter, and a hold never migrates to a different part of the
//! rect. Once the anchor's distance exceeds the release window the axis is
//! re-evaluated from scratch.
//!
//! # Invariants
//!
//! 1. A held guide's anchor candidate coincides exactly with the guide
//!    coordinate in the output (the translation is computed from the guide,
//!    not accumulated).
//! 2. An axis holding no guide passes the proposed coordinate through
//!    unchanged, bit for bit.
//! 3. Resolution never changes the rect's size.

use std::fmt;

use serde::{Deserialize, Serialize};

use snapguide_core::geometry::{Axis, Point, Rect, Span};

use crate::config::{ConfigError, SnapConfig};
use crate::guide::{Guide, GuideKind, GuideSet};

// ---------------------------------------------------------------------------
// SnapState
// ---------------------------------------------------------------------------

/// A held guide together with the rect candidate it captured.
///
/// `anchor` reuses the [`GuideKind`] vocabulary for the moving rect's
/// candidate points: `MinEdge` is the rect's min edge, `MaxEdge` its max
/// edge, `Center` its midpoint. The pairing is fixed at capture time;
/// retention measures and anchors through this one candidate, so a hold
/// never silently re-pairs with a different part of the rect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeldGuide {
    /// The captured guide, its coordinate re-read on every pass.
    pub guide: Guide,
    /// Which rect candidate the guide captured.
    pub anchor: GuideKind,
}

/// Result of one resolution pass: the snapped origin and the hold on each
/// axis, if any.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapState {
    /// Snapped origin for the moving rect.
    pub position: Point,
    /// Hold on the y coordinate.
    pub held_horizontal: Option<HeldGuide>,
    /// Hold on the x coordinate.
    pub held_vertical: Option<HeldGuide>,
}

impl SnapState {
    /// A state holding no guides.
    #[inline]
    #[must_use]
    pub const fn free(position: Point) -> Self {
        Self {
            position,
            held_horizontal: None,
            held_vertical: None,
        }
    }

    /// The guide held on `axis`, if any.
    #[inline]
    #[must_use]
    pub const fn held(&self, axis: Axis) -> Option<Guide> {
        match self.hold(axis) {
            Some(hold) => Some(hold.guide),
            None => None,
        }
    }

    /// The full hold on `axis`, including the anchored candidate.
    #[inline]
    #[must_use]
    pub const fn hold(&self, axis: Axis) -> Option<HeldGuide> {
        match axis {
            Axis::Horizontal => self.held_horizontal,
            Axis::Vertical => self.held_vertical,
        }
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Compute the snapped position for `proposed` against `guides`.
///
/// `previous` carries the held-guide state from the last pass of the same
/// interaction; pass [`SnapState::free`] at the start of a drag. The
/// returned state's `position` is the new origin for the rect.
///
/// Deterministic and side-effect free. Errors are precondition violations:
/// a non-finite rect or guide set, or an out-of-range config.
pub fn resolve(
    proposed: Rect,
    guides: &GuideSet,
    previous: &SnapState,
    config: &SnapConfig,
) -> Result<SnapState, ResolveError> {
    config.validate().map_err(ResolveError::InvalidConfig)?;
    if !proposed.is_finite() {
        return Err(ResolveError::NonFiniteRect { rect: proposed });
    }
    if !guides.container().is_finite() {
        return Err(ResolveError::NonFiniteGuides {
            container: guides.container(),
        });
    }

    let (y, held_horizontal) = resolve_axis(
        proposed.span(Axis::Horizontal),
        guides,
        Axis::Horizontal,
        previous.held_horizontal,
        config,
    );
    let (x, held_vertical) = resolve_axis(
        proposed.span(Axis::Vertical),
        guides,
        Axis::Vertical,
        previous.held_vertical,
        config,
    );

    Ok(SnapState {
        position: Point::new(x, y),
        held_horizontal,
        held_vertical,
    })
}

/// Resolve one axis: returns the new origin coordinate and the hold.
fn resolve_axis(
    proposed: Span,
    guides: &GuideSet,
    axis: Axis,
    previous: Option<HeldGuide>,
    config: &SnapConfig,
) -> (f64, Option<HeldGuide>) {
    // Hysteresis: the held guide keeps the axis while its recorded anchor
    // candidate stays within the release window, even if another guide is
    // now closer. Guide identity across rebuilds is by kind; the coordinate
    // is re-read from the fresh set so a container resize mid-drag moves
    // the held line with it.
    if let Some(prev) = previous {
        if let Some(current) = guides.axis(axis).find(|g| g.kind == prev.guide.kind) {
            let distance = (candidate(proposed, prev.anchor) - current.coordinate).abs();
            if distance <= config.release_distance() {
                let hold = HeldGuide {
                    guide: current,
                    anchor: prev.anchor,
                };
                return (anchored_min(proposed, hold), Some(hold));
            }
        }
    }

    let mut best: Option<(HeldGuide, f64)> = None;
    for guide in guides.axis(axis) {
        let (anchor, distance) = nearest_candidate(proposed, guide.coordinate);
        if distance > config.tolerance {
            continue;
        }
        let better = match best {
            // Strict comparison keeps the earliest-declared guide on ties.
            Some((_, best_distance)) => distance < best_distance,
            None => true,
        };
        if better {
            best = Some((HeldGuide { guide, anchor }, distance));
        }
    }

    match best {
        Some((hold, _)) => (anchored_min(proposed, hold), Some(hold)),
        None => (proposed.min, None),
    }
}

/// The three candidate coordinates of a span, in tie-break order.
#[inline]
fn candidates(span: Span) -> [(GuideKind, f64); 3] {
    [
        (GuideKind::MinEdge, span.min),
        (GuideKind::MaxEdge, span.max),
        (GuideKind::Center, span.mid),
    ]
}

/// The span candidate named by `anchor`.
#[inline]
fn candidate(span: Span, anchor: GuideKind) -> f64 {
    match anchor {
        GuideKind::MinEdge => span.min,
        GuideKind::MaxEdge => span.max,
        GuideKind::Center => span.mid,
    }
}

/// The candidate nearest to `coordinate` and its distance, ties going to
/// candidate declaration order.
fn nearest_candidate(span: Span, coordinate: f64) -> (GuideKind, f64) {
    let mut nearest = (GuideKind::MinEdge, f64::INFINITY);
    for (kind, c) in candidates(span) {
        let distance = (c - coordinate).abs();
        if distance < nearest.1 {
            nearest = (kind, distance);
        }
    }
    nearest
}

/// New min coordinate that places the hold's anchor candidate exactly on
/// the guide line. The translation is uniform: the span's length is
/// preserved.
fn anchored_min(span: Span, hold: HeldGuide) -> f64 {
    match hold.anchor {
        GuideKind::MinEdge => hold.guide.coordinate,
        GuideKind::MaxEdge => hold.guide.coordinate - span.length(),
        GuideKind::Center => hold.guide.coordinate - span.length() / 2.0,
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Precondition violations surfaced by [`resolve`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResolveError {
    /// The proposed rect carries NaN or infinite coordinates.
    NonFiniteRect { rect: Rect },
    /// The guide set was built from a non-finite container.
    NonFiniteGuides { container: Rect },
    /// The config is out of range.
    InvalidConfig(ConfigError),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteRect { rect } => {
                write!(f, "proposed rect has non-finite coordinates: {rect:?}")
            }
            Self::NonFiniteGuides { container } => {
                write!(f, "guide container has non-finite coordinates: {container:?}")
            }
            Self::InvalidConfig(e) => write!(f, "invalid snap config: {e}"),
        }
    }
}

impl std::error::Error for ResolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidConfig(e) => Some(e),
            _ => None,
        }
    }
}
