#![forbid(unsafe_code)]

//! Core primitives for the snapguide engine.
//!
//! This crate holds the pieces every other snapguide crate agrees on:
//! `f64` geometry ([`Point`], [`Size`], [`Rect`], [`Axis`], [`Span`]) and the
//! normalized pointer stream ([`PointerEvent`], [`PointerPhase`]) that hosts
//! feed into the engine. It performs no snapping itself.
//!
//! Coordinates are device-independent units. The geometry is
//! orientation-agnostic: everything is expressed as min/max math, so the same
//! code serves y-up and y-down hosts.

pub mod event;
pub mod geometry;

pub use event::{PointerEvent, PointerPhase};
pub use geometry::{Axis, Point, Rect, Size, Span};
