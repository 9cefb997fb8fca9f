#![forbid(unsafe_code)]

//! Two-pane split layout and divider interaction engine.
//!
//! A split places two opaque content regions along one axis with a
//! draggable divider between them. The engine covers:
//!
//! - the position model (a fraction of the main-axis span) and the
//!   visibility model (primary / secondary / both),
//! - a pure [`layout::solve`] that derives region frames from container
//!   size and state, parking hidden regions off-screen so hosts can
//!   animate show/hide as a slide,
//! - a drag lifecycle machine with minimum-size clamping,
//!   drag-past-minimum hide, and pre-drag rollback,
//! - [`SplitView`], the composition root wiring pointer events, content
//!   slots, and change notifications, and
//! - storage adapters so position/visibility persist per split id.
//!
//! The engine is single-threaded and host-agnostic: it consumes already
//! recognized pointer and toggle events and never draws anything itself.

pub mod constraints;
pub mod container;
pub mod drag;
pub mod layout;
pub mod registry;
pub mod state;

pub use constraints::{DEFAULT_HANDLE_SPAN, DEFAULT_HIT_SPAN, SplitConstraints};
pub use container::{PaneSlot, SplitView};
pub use drag::{
    DragSession, SplitDragEffect, SplitDragMachine, SplitDragNoopReason, SplitDragState,
};
pub use layout::{SplitFrames, solve};
pub use registry::{
    SPLIT_STATE_SCHEMA_VERSION, SnapshotError, SplitEntry, SplitStateRegistry, SplitStateSnapshot,
};
pub use sashpane_core::event::{PointerEvent, PointerEventKind};
pub use sashpane_core::geometry::{Point, Rect, Size, SplitAxis};
pub use state::{MemoryStore, PaneSide, PaneVisibility, StateCell, StateStore, StorageError};
