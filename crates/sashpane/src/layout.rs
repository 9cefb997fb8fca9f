#![forbid(unsafe_code)]

//! Pure split geometry solver.
//!
//! [`solve`] maps `(container size, axis, position, visibility,
//! constraints)` to the three region frames. No I/O, no mutation; calling
//! twice with identical inputs yields identical outputs.
//!
//! # Invariants
//!
//! 1. With both panes visible,
//!    `primary span + handle span + secondary span == container span`.
//! 2. A hidden region keeps its computed span and is parked fully outside
//!    the container along the main axis, so show/hide can animate as a
//!    slide instead of a mount/unmount.
//! 3. The divider parks just past the trailing edge when the secondary
//!    pane is hidden and just before the leading edge (negative
//!    coordinates) when the primary pane is hidden.
//! 4. A negative container span is treated as 0.

use sashpane_core::geometry::{Rect, Size, SplitAxis};

use crate::constraints::SplitConstraints;
use crate::state::PaneVisibility;

/// Solved frames for one split container.
///
/// All rectangles are container-local. `divider` is the *visual* divider
/// frame (`handle_span` thick); `divider_hit` is the pointer target
/// (`hit_span` thick, same center).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitFrames {
    pub primary: Rect,
    pub secondary: Rect,
    pub divider: Rect,
    pub divider_hit: Rect,
    /// Divider center coordinate along the main axis.
    pub divider_center: f32,
}

/// Compute region frames for the given container and state.
#[must_use]
pub fn solve(
    container: Size,
    axis: SplitAxis,
    position: f32,
    visibility: PaneVisibility,
    constraints: &SplitConstraints,
) -> SplitFrames {
    let span = container.span(axis).max(0.0);
    let cross = container.cross(axis);
    let handle = constraints.handle_span;

    let divider_center = position.clamp(0.0, 1.0) * span;
    let primary_span = (divider_center - handle / 2.0).max(0.0);
    let secondary_span = (span - primary_span - handle).max(0.0);

    let (primary_start, primary_extent, secondary_start, secondary_extent, center) =
        match visibility {
            PaneVisibility::Both => (
                0.0,
                primary_span,
                primary_span + handle,
                secondary_span,
                divider_center,
            ),
            // Secondary hidden: primary fills the container, secondary and
            // the divider slide off past the trailing edge.
            PaneVisibility::Primary => (
                0.0,
                span,
                span + handle,
                secondary_span,
                span + handle / 2.0,
            ),
            // Primary hidden: secondary fills the container, primary and
            // the divider slide off before the leading edge.
            PaneVisibility::Secondary => (
                -(primary_span + handle),
                primary_span,
                0.0,
                span,
                -handle / 2.0,
            ),
        };

    SplitFrames {
        primary: Rect::from_main(axis, primary_start, primary_extent, cross),
        secondary: Rect::from_main(axis, secondary_start, secondary_extent, cross),
        divider: Rect::from_main(axis, center - handle / 2.0, handle, cross),
        divider_hit: Rect::from_main(
            axis,
            center - constraints.hit_span / 2.0,
            constraints.hit_span,
            cross,
        ),
        divider_center: center,
    }
}

#[cfg(test)]
mod tests {
    use super::solve;
    use crate::constraints::SplitConstraints;
    use crate::state::PaneVisibility;
    use sashpane_core::geometry::{Rect, Size, SplitAxis};

    fn constraints() -> SplitConstraints {
        SplitConstraints::new().handle_span(16.0).hit_span(24.0)
    }

    #[test]
    fn both_visible_centered() {
        let frames = solve(
            Size::new(1000.0, 600.0),
            SplitAxis::Horizontal,
            0.5,
            PaneVisibility::Both,
            &constraints(),
        );
        assert_eq!(frames.primary, Rect::new(0.0, 0.0, 492.0, 600.0));
        assert_eq!(frames.secondary, Rect::new(508.0, 0.0, 492.0, 600.0));
        assert_eq!(frames.divider_center, 500.0);
        assert_eq!(frames.divider, Rect::new(492.0, 0.0, 16.0, 600.0));
    }

    #[test]
    fn span_conservation() {
        let frames = solve(
            Size::new(1000.0, 600.0),
            SplitAxis::Horizontal,
            0.37,
            PaneVisibility::Both,
            &constraints(),
        );
        let total = frames.primary.width + frames.divider.width + frames.secondary.width;
        assert!((total - 1000.0).abs() < 1e-3);
    }

    #[test]
    fn secondary_hidden_parks_past_trailing_edge() {
        let frames = solve(
            Size::new(1000.0, 600.0),
            SplitAxis::Horizontal,
            0.5,
            PaneVisibility::Primary,
            &constraints(),
        );
        assert_eq!(frames.primary, Rect::new(0.0, 0.0, 1000.0, 600.0));
        assert!(frames.secondary.x >= 1000.0);
        assert!(frames.divider_center >= 1000.0 + 16.0 / 2.0);
    }

    #[test]
    fn primary_hidden_parks_before_leading_edge() {
        let frames = solve(
            Size::new(1000.0, 600.0),
            SplitAxis::Horizontal,
            0.5,
            PaneVisibility::Secondary,
            &constraints(),
        );
        assert_eq!(frames.secondary, Rect::new(0.0, 0.0, 1000.0, 600.0));
        // Parked by its own span plus the handle span.
        assert_eq!(frames.primary.x, -(492.0 + 16.0));
        assert!(frames.primary.right() <= 0.0);
        assert_eq!(frames.divider_center, -8.0);
    }

    #[test]
    fn vertical_axis_uses_height() {
        let frames = solve(
            Size::new(600.0, 1000.0),
            SplitAxis::Vertical,
            0.5,
            PaneVisibility::Both,
            &constraints(),
        );
        assert_eq!(frames.primary, Rect::new(0.0, 0.0, 600.0, 492.0));
        assert_eq!(frames.secondary, Rect::new(0.0, 508.0, 600.0, 492.0));
        assert_eq!(frames.divider_center, 500.0);
    }

    #[test]
    fn hit_rect_is_wider_than_divider() {
        let frames = solve(
            Size::new(1000.0, 600.0),
            SplitAxis::Horizontal,
            0.5,
            PaneVisibility::Both,
            &constraints(),
        );
        assert_eq!(frames.divider_hit, Rect::new(488.0, 0.0, 24.0, 600.0));
    }

    #[test]
    fn idempotent_for_identical_inputs() {
        let c = constraints();
        let a = solve(
            Size::new(777.0, 333.0),
            SplitAxis::Horizontal,
            0.42,
            PaneVisibility::Both,
            &c,
        );
        let b = solve(
            Size::new(777.0, 333.0),
            SplitAxis::Horizontal,
            0.42,
            PaneVisibility::Both,
            &c,
        );
        assert_eq!(a, b);
    }

    #[test]
    fn negative_span_treated_as_zero() {
        let frames = solve(
            Size::new(-50.0, 600.0),
            SplitAxis::Horizontal,
            0.5,
            PaneVisibility::Both,
            &constraints(),
        );
        assert_eq!(frames.primary.width, 0.0);
        assert_eq!(frames.secondary.width, 0.0);
        assert_eq!(frames.divider_center, 0.0);
    }

    #[test]
    fn position_at_extremes_keeps_spans_non_negative() {
        let frames = solve(
            Size::new(1000.0, 600.0),
            SplitAxis::Horizontal,
            0.0,
            PaneVisibility::Both,
            &constraints(),
        );
        assert_eq!(frames.primary.width, 0.0);
        assert!(frames.secondary.width >= 0.0);

        let frames = solve(
            Size::new(1000.0, 600.0),
            SplitAxis::Horizontal,
            1.0,
            PaneVisibility::Both,
            &constraints(),
        );
        assert!(frames.primary.width >= 0.0);
        assert_eq!(frames.secondary.width, 0.0);
    }
}
