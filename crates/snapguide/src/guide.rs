#![forbid(unsafe_code)]

//! Alignment guide derivation.
//!
//! A [`GuideSet`] is the complete set of candidate alignment lines for one
//! container: per axis, the two edges and the center line. Guides are cheap
//! value types rebuilt from container geometry on every resolution pass;
//! they carry no identity beyond their axis, kind, and coordinate.
//!
//! # Invariants
//!
//! 1. Declaration order per axis is min edge, max edge, center. Snap
//!    resolution breaks distance ties by this order, so it is part of the
//!    observable contract, not an implementation detail.
//! 2. Horizontal guides precede vertical guides in iteration order.
//! 3. A zero-size container yields coincident guides, which is well-defined
//!    (they all name the same coordinate).

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use snapguide_core::geometry::{Axis, Rect};

// ---------------------------------------------------------------------------
// Guide
// ---------------------------------------------------------------------------

/// What part of the container a guide was derived from.
///
/// The same vocabulary names the candidate points on a moving rect (min
/// edge, max edge, midpoint). A capture pairs a guide with whichever
/// candidate was nearest at capture time and records that pairing in
/// [`HeldGuide`](crate::snap::HeldGuide); the two kinds need not match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuideKind {
    /// The container's min edge (left for vertical guides).
    MinEdge,
    /// The container's max edge.
    MaxEdge,
    /// The container's center line.
    Center,
}

impl GuideKind {
    /// True for either edge kind.
    #[inline]
    #[must_use]
    pub const fn is_edge(&self) -> bool {
        matches!(self, GuideKind::MinEdge | GuideKind::MaxEdge)
    }

    /// True for the center line.
    #[inline]
    #[must_use]
    pub const fn is_center(&self) -> bool {
        matches!(self, GuideKind::Center)
    }
}

/// One candidate alignment line: a horizontal or vertical line at a fixed
/// coordinate, derived from container geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Guide {
    pub axis: Axis,
    pub coordinate: f64,
    pub kind: GuideKind,
}

impl Guide {
    /// Create a guide.
    #[inline]
    #[must_use]
    pub const fn new(axis: Axis, coordinate: f64, kind: GuideKind) -> Self {
        Self {
            axis,
            coordinate,
            kind,
        }
    }

    /// Horizontal line `y = coordinate`.
    #[inline]
    #[must_use]
    pub const fn horizontal(coordinate: f64, kind: GuideKind) -> Self {
        Self::new(Axis::Horizontal, coordinate, kind)
    }

    /// Vertical line `x = coordinate`.
    #[inline]
    #[must_use]
    pub const fn vertical(coordinate: f64, kind: GuideKind) -> Self {
        Self::new(Axis::Vertical, coordinate, kind)
    }
}

// ---------------------------------------------------------------------------
// GuideSources
// ---------------------------------------------------------------------------

bitflags! {
    /// Which container features produce guides.
    ///
    /// Clearing [`GuideSources::CENTERS`] turns off center-line snapping
    /// entirely (the guides are never built, so nothing can hold them).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct GuideSources: u8 {
        /// Min and max container edges, per axis.
        const EDGES = 1 << 0;
        /// Container center lines, per axis.
        const CENTERS = 1 << 1;
    }
}

// Serialized as the flags string (`"EDGES | CENTERS"`). bitflags ships the
// format helpers behind its `serde` feature but not the trait impls.
impl Serialize for GuideSources {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        bitflags::serde::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for GuideSources {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        bitflags::serde::deserialize(deserializer)
    }
}

impl Default for GuideSources {
    fn default() -> Self {
        Self::all()
    }
}

// ---------------------------------------------------------------------------
// GuideSet
// ---------------------------------------------------------------------------

/// Ordered guide collection for one container.
///
/// Rebuilt whenever the container changes; order is the tie-break order
/// documented on [`GuideKind`] candidates (min edge, max edge, center,
/// horizontal axis first).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideSet {
    container: Rect,
    guides: Vec<Guide>,
}

impl GuideSet {
    /// Derive the guides for `container` from the selected sources.
    ///
    /// Pure and O(1): at most three guides per axis.
    #[must_use]
    pub fn for_container(container: Rect, sources: GuideSources) -> Self {
        let mut guides = Vec::with_capacity(6);
        for axis in Axis::BOTH {
            let span = container.span(axis);
            if sources.contains(GuideSources::EDGES) {
                guides.push(Guide::new(axis, span.min, GuideKind::MinEdge));
                guides.push(Guide::new(axis, span.max, GuideKind::MaxEdge));
            }
            if sources.contains(GuideSources::CENTERS) {
                guides.push(Guide::new(axis, span.mid, GuideKind::Center));
            }
        }
        Self { container, guides }
    }

    /// The container the guides were derived from.
    #[inline]
    #[must_use]
    pub const fn container(&self) -> Rect {
        self.container
    }

    /// All guides in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Guide> + '_ {
        self.guides.iter().copied()
    }

    /// Guides on one axis, in declaration order.
    pub fn axis(&self, axis: Axis) -> impl Iterator<Item = Guide> + '_ {
        self.guides.iter().copied().filter(move |g| g.axis == axis)
    }

    /// Number of guides.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.guides.len()
    }

    /// True when no sources were selected.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guides.is_empty()
    }
}
