#![forbid(unsafe_code)]

//! Split configuration: minimum fractions, drag-to-hide policy, divider
//! thickness.
//!
//! # Invariants
//!
//! 1. A `None` minimum means that side is unconstrained down to 0 and its
//!    hide threshold never fires.
//! 2. `drag_to_hide_*` relaxes the corresponding drag bound to the hard
//!    [0,1] edge so the divider can overshoot the minimum; the hide test
//!    still fires at the *minimum*, not at the relaxed bound.
//! 3. `hit_span >= handle_span` is not enforced; hosts may configure a
//!    smaller hit target, they just get a harder-to-grab divider.
//!
//! Malformed configurations (e.g. minima summing past 1.0) are not
//! rejected; the drag bounds pinch and the divider range collapses, which
//! is non-crashing and implementation-defined.

use serde::{Deserialize, Serialize};

/// Default divider visible thickness in logical pixels.
pub const DEFAULT_HANDLE_SPAN: f32 = 8.0;

/// Default divider hit-test thickness in logical pixels.
///
/// Wider than the drawn indicator so touch targets stay grabbable.
pub const DEFAULT_HIT_SPAN: f32 = 16.0;

/// Immutable per-split configuration.
///
/// May be swapped wholesale by the caller between renders; the engine
/// never mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitConstraints {
    /// Minimum fraction for the primary pane, `None` = unconstrained.
    pub min_primary_fraction: Option<f32>,
    /// Minimum fraction for the secondary pane, `None` = unconstrained.
    pub min_secondary_fraction: Option<f32>,
    /// Dragging past `min_primary_fraction` hides the primary pane.
    pub drag_to_hide_primary: bool,
    /// Dragging past `min_secondary_fraction` hides the secondary pane.
    pub drag_to_hide_secondary: bool,
    /// Divider visible thickness along the main axis.
    pub handle_span: f32,
    /// Divider hit-test thickness along the main axis.
    pub hit_span: f32,
}

impl Default for SplitConstraints {
    fn default() -> Self {
        Self {
            min_primary_fraction: None,
            min_secondary_fraction: None,
            drag_to_hide_primary: false,
            drag_to_hide_secondary: false,
            handle_span: DEFAULT_HANDLE_SPAN,
            hit_span: DEFAULT_HIT_SPAN,
        }
    }
}

impl SplitConstraints {
    /// Start from the defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the primary minimum fraction.
    #[must_use]
    pub fn min_primary(mut self, fraction: f32) -> Self {
        self.min_primary_fraction = Some(fraction);
        self
    }

    /// Set the secondary minimum fraction.
    #[must_use]
    pub fn min_secondary(mut self, fraction: f32) -> Self {
        self.min_secondary_fraction = Some(fraction);
        self
    }

    /// Allow drag-past-minimum to hide the primary pane.
    #[must_use]
    pub fn drag_to_hide_primary(mut self, allow: bool) -> Self {
        self.drag_to_hide_primary = allow;
        self
    }

    /// Allow drag-past-minimum to hide the secondary pane.
    #[must_use]
    pub fn drag_to_hide_secondary(mut self, allow: bool) -> Self {
        self.drag_to_hide_secondary = allow;
        self
    }

    /// Set the divider visible thickness.
    #[must_use]
    pub fn handle_span(mut self, span: f32) -> Self {
        self.handle_span = span;
        self
    }

    /// Set the divider hit-test thickness.
    #[must_use]
    pub fn hit_span(mut self, span: f32) -> Self {
        self.hit_span = span;
        self
    }

    /// Lower drag bound for the divider position.
    ///
    /// 0 when drag-to-hide relaxes the primary minimum, otherwise the
    /// minimum itself (0 when unconstrained).
    #[must_use]
    pub fn lower_bound(&self) -> f32 {
        if self.drag_to_hide_primary {
            0.0
        } else {
            self.min_primary_fraction.unwrap_or(0.0)
        }
    }

    /// Upper drag bound for the divider position.
    #[must_use]
    pub fn upper_bound(&self) -> f32 {
        if self.drag_to_hide_secondary {
            1.0
        } else {
            1.0 - self.min_secondary_fraction.unwrap_or(0.0)
        }
    }

    /// Clamp a raw position into the effective drag bounds.
    ///
    /// Bounds are applied lower-last so a pinched configuration
    /// (minima summing past 1.0) resolves toward the lower bound.
    #[must_use]
    pub fn clamp_position(&self, position: f32) -> f32 {
        position.min(self.upper_bound()).max(self.lower_bound())
    }

    /// Whether a final position is past the primary hide threshold.
    ///
    /// Only reachable when `drag_to_hide_primary` relaxed the bound.
    #[must_use]
    pub fn past_primary_threshold(&self, position: f32) -> bool {
        self.min_primary_fraction.is_some_and(|min| position < min)
    }

    /// Whether a final position is past the secondary hide threshold.
    #[must_use]
    pub fn past_secondary_threshold(&self, position: f32) -> bool {
        self.min_secondary_fraction
            .is_some_and(|min| position > 1.0 - min)
    }
}
