#![forbid(unsafe_code)]

//! Host-agnostic primitives for the sashpane split engine.
//!
//! This crate carries no interaction policy. It defines the floating-point
//! geometry used by the layout solver, the split axis, and the canonical
//! pointer/discrete input events that hosts translate their native events
//! into.

pub mod event;
pub mod geometry;

pub use event::{PointerEvent, PointerEventKind};
pub use geometry::{Point, Rect, Size, SplitAxis};
