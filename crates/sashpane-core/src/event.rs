#![forbid(unsafe_code)]

//! Canonical input events.
//!
//! Hosts translate their native pointer machinery into these events; the
//! engine never decodes raw pointer timing itself. Discrete gestures
//! (double-tap, long-press) arrive pre-recognized from the host as toggle
//! commands on the container, not as events here.
//!
//! # Design Notes
//!
//! - Coordinates are container-local logical pixels.
//! - `Cancel` models teardown mid-interaction (focus loss, container
//!   unmount); it must never produce a commit.
//! - Events carry no pointer id: the engine assumes one active drag per
//!   divider (single-threaded UI contract).

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// A pointer event scoped to the split container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    /// Position in container-local coordinates.
    pub position: Point,
    /// Lifecycle phase.
    pub kind: PointerEventKind,
}

impl PointerEvent {
    /// Press at the given position.
    #[must_use]
    pub const fn down(position: Point) -> Self {
        Self {
            position,
            kind: PointerEventKind::Down,
        }
    }

    /// Movement to the given position.
    #[must_use]
    pub const fn moved(position: Point) -> Self {
        Self {
            position,
            kind: PointerEventKind::Moved,
        }
    }

    /// Release at the given position.
    #[must_use]
    pub const fn up(position: Point) -> Self {
        Self {
            position,
            kind: PointerEventKind::Up,
        }
    }

    /// Interruption; position is the last known one.
    #[must_use]
    pub const fn cancel(position: Point) -> Self {
        Self {
            position,
            kind: PointerEventKind::Cancel,
        }
    }
}

/// Pointer lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerEventKind {
    /// Button/touch pressed.
    Down,
    /// Pointer moved while tracked.
    Moved,
    /// Button/touch released.
    Up,
    /// Interaction interrupted; no commit may follow.
    Cancel,
}

#[cfg(test)]
mod tests {
    use super::{PointerEvent, PointerEventKind};
    use crate::geometry::Point;

    #[test]
    fn constructors_set_kind() {
        let p = Point::new(1.0, 2.0);
        assert_eq!(PointerEvent::down(p).kind, PointerEventKind::Down);
        assert_eq!(PointerEvent::moved(p).kind, PointerEventKind::Moved);
        assert_eq!(PointerEvent::up(p).kind, PointerEventKind::Up);
        assert_eq!(PointerEvent::cancel(p).kind, PointerEventKind::Cancel);
        assert_eq!(PointerEvent::down(p).position, p);
    }
}
