#![forbid(unsafe_code)]

//! Divider drag lifecycle state machine.
//!
//! ```text
//! Idle -> Armed (press) -> Dragging (first move) -> Idle (release/cancel)
//!    \--------> Idle (release without movement)
//! ```
//!
//! The machine consumes main-axis movement deltas and discrete toggle
//! commands, mutates the caller-owned position/visibility cells, and
//! emits one typed [`SplitDragEffect`] per step so hosts can log or
//! replay interactions deterministically.
//!
//! # Invariants
//!
//! 1. After every move, the position lies within
//!    `[lower_bound, upper_bound]` of the active constraints.
//! 2. The hide test at release uses the *constraint* minima, never the
//!    relaxed drag bounds: a pane dragged exactly to its minimum stays
//!    visible, only overshoot past it hides.
//! 3. Hiding rolls the position back to its pre-drag value so a later
//!    re-show reopens at the pre-drag size; repeated hide/show cycles do
//!    not ratchet the divider toward an edge.
//! 4. Cancel discards the session without committing or changing
//!    visibility.
//! 5. The toggle path never touches the position.

use serde::{Deserialize, Serialize};

use crate::constraints::SplitConstraints;
use crate::state::{PaneSide, PaneVisibility, StateCell};

/// Rollback data for one press-drag-release cycle.
///
/// Created on the first movement after a press, destroyed on release or
/// cancel; it never outlives the gesture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragSession {
    /// Absolute divider coordinate at drag start.
    pub anchor: f32,
    /// Position immediately before the drag began, restored on hide.
    pub last_stable: f32,
    /// Accumulated movement delta since drag start.
    pub total_delta: f32,
}

/// Drag lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SplitDragState {
    Idle,
    /// Pressed on the divider, no movement yet.
    Armed,
    Dragging(DragSession),
}

/// Explicit no-op diagnostics for inputs that are safely ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitDragNoopReason {
    IdleWithoutPress,
    AlreadyPressed,
    /// Press landed outside the divider hit rectangle.
    OutsideDivider,
    ReleasedWithoutDrag,
    ToggleDuringDrag,
    NoHideableSide,
    ZeroSpan,
}

/// Effect emitted by one machine step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum SplitDragEffect {
    /// Press accepted, waiting for movement.
    Armed,
    /// First movement; session created and position updated.
    DragStarted { position: f32 },
    /// Subsequent movement; position updated.
    PositionChanged {
        position: f32,
        highlight: Option<PaneSide>,
    },
    /// Release inside bounds; position committed.
    Committed { position: f32 },
    /// Release past a hide threshold; pane hidden and position rolled
    /// back to its pre-drag value.
    PaneHidden {
        pane: PaneSide,
        restored_position: f32,
    },
    /// Discrete toggle hid a pane.
    Toggled { visibility: PaneVisibility },
    /// Session discarded without commit.
    Canceled,
    /// Input ignored.
    Noop { reason: SplitDragNoopReason },
}

/// Runtime lifecycle machine for one divider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitDragMachine {
    state: SplitDragState,
    constraints: SplitConstraints,
    highlight: Option<PaneSide>,
}

impl SplitDragMachine {
    /// Machine in `Idle` with the given constraints.
    #[must_use]
    pub fn new(constraints: SplitConstraints) -> Self {
        Self {
            state: SplitDragState::Idle,
            constraints,
            highlight: None,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> SplitDragState {
        self.state
    }

    /// Active constraints.
    #[must_use]
    pub const fn constraints(&self) -> &SplitConstraints {
        &self.constraints
    }

    /// Swap the constraints wholesale (caller re-render path).
    pub fn set_constraints(&mut self, constraints: SplitConstraints) {
        self.constraints = constraints;
    }

    /// Whether a press or drag is in progress.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self.state, SplitDragState::Idle)
    }

    /// Transient hide-preview cue for the renderer.
    ///
    /// `Some(side)` while the divider sits past that side's minimum
    /// during a drag; purely visual, carries no other state.
    #[must_use]
    pub const fn highlight(&self) -> Option<PaneSide> {
        self.highlight
    }

    /// Press on the divider hit area.
    pub fn on_press(&mut self) -> SplitDragEffect {
        if self.is_active() {
            return SplitDragEffect::Noop {
                reason: SplitDragNoopReason::AlreadyPressed,
            };
        }
        self.state = SplitDragState::Armed;
        SplitDragEffect::Armed
    }

    /// Movement delta along the main axis while pressed.
    ///
    /// `span` is the container's current main-axis extent.
    pub fn on_move(
        &mut self,
        delta: f32,
        span: f32,
        position: &mut StateCell<f32>,
    ) -> SplitDragEffect {
        if span <= 0.0 {
            return SplitDragEffect::Noop {
                reason: SplitDragNoopReason::ZeroSpan,
            };
        }
        match self.state {
            SplitDragState::Idle => SplitDragEffect::Noop {
                reason: SplitDragNoopReason::IdleWithoutPress,
            },
            SplitDragState::Armed => {
                let stable = position.get();
                let session = DragSession {
                    anchor: stable * span,
                    last_stable: stable,
                    total_delta: delta,
                };
                let new_position = self.apply(session, span, position);
                self.state = SplitDragState::Dragging(session);
                SplitDragEffect::DragStarted {
                    position: new_position,
                }
            }
            SplitDragState::Dragging(mut session) => {
                session.total_delta += delta;
                let new_position = self.apply(session, span, position);
                self.state = SplitDragState::Dragging(session);
                SplitDragEffect::PositionChanged {
                    position: new_position,
                    highlight: self.highlight,
                }
            }
        }
    }

    /// Release of the press.
    pub fn on_release(
        &mut self,
        position: &mut StateCell<f32>,
        visibility: &mut StateCell<PaneVisibility>,
    ) -> SplitDragEffect {
        let state = self.state;
        self.state = SplitDragState::Idle;
        self.highlight = None;
        match state {
            SplitDragState::Idle => SplitDragEffect::Noop {
                reason: SplitDragNoopReason::IdleWithoutPress,
            },
            SplitDragState::Armed => SplitDragEffect::Noop {
                reason: SplitDragNoopReason::ReleasedWithoutDrag,
            },
            SplitDragState::Dragging(session) => {
                let end = position.get();
                if self.constraints.past_primary_threshold(end) {
                    position.set(session.last_stable);
                    visibility.set(PaneVisibility::hiding(PaneSide::Primary));
                    self.trace_hidden(PaneSide::Primary, session.last_stable);
                    SplitDragEffect::PaneHidden {
                        pane: PaneSide::Primary,
                        restored_position: session.last_stable,
                    }
                } else if self.constraints.past_secondary_threshold(end) {
                    position.set(session.last_stable);
                    visibility.set(PaneVisibility::hiding(PaneSide::Secondary));
                    self.trace_hidden(PaneSide::Secondary, session.last_stable);
                    SplitDragEffect::PaneHidden {
                        pane: PaneSide::Secondary,
                        restored_position: session.last_stable,
                    }
                } else {
                    // Defensive re-clamp; visibility is unchanged.
                    let committed = self.constraints.clamp_position(end);
                    position.set(committed);
                    #[cfg(feature = "tracing")]
                    tracing::debug!(position = committed, "divider position committed");
                    SplitDragEffect::Committed {
                        position: committed,
                    }
                }
            }
        }
    }

    /// Abandon the gesture (container teardown, focus loss).
    ///
    /// Safety valve for RAII cleanup paths: never commits, never changes
    /// visibility, and is a no-op when already idle.
    pub fn force_cancel(&mut self) -> SplitDragEffect {
        if !self.is_active() {
            return SplitDragEffect::Noop {
                reason: SplitDragNoopReason::IdleWithoutPress,
            };
        }
        self.state = SplitDragState::Idle;
        self.highlight = None;
        SplitDragEffect::Canceled
    }

    /// Discrete double-tap (or equivalent) on the divider.
    ///
    /// Hides whichever side is drag-hideable, primary first. Never
    /// touches the position.
    pub fn on_toggle(&mut self, visibility: &mut StateCell<PaneVisibility>) -> SplitDragEffect {
        if self.is_active() {
            return SplitDragEffect::Noop {
                reason: SplitDragNoopReason::ToggleDuringDrag,
            };
        }
        let next = if self.constraints.drag_to_hide_primary {
            PaneVisibility::hiding(PaneSide::Primary)
        } else if self.constraints.drag_to_hide_secondary {
            PaneVisibility::hiding(PaneSide::Secondary)
        } else {
            return SplitDragEffect::Noop {
                reason: SplitDragNoopReason::NoHideableSide,
            };
        };
        visibility.set(next);
        SplitDragEffect::Toggled { visibility: next }
    }

    /// Apply the session's accumulated delta: clamp the raw coordinate
    /// into the container, normalize, clamp into the drag bounds, and
    /// refresh the hide-preview highlight.
    fn apply(&mut self, session: DragSession, span: f32, position: &mut StateCell<f32>) -> f32 {
        let raw = (session.anchor + session.total_delta).clamp(0.0, span) / span;
        let clamped = self.constraints.clamp_position(raw);
        position.set(clamped);
        self.highlight = if self.constraints.past_primary_threshold(clamped) {
            Some(PaneSide::Primary)
        } else if self.constraints.past_secondary_threshold(clamped) {
            Some(PaneSide::Secondary)
        } else {
            None
        };
        clamped
    }

    #[allow(unused_variables)]
    fn trace_hidden(&self, pane: PaneSide, restored: f32) {
        #[cfg(feature = "tracing")]
        tracing::debug!(?pane, restored_position = restored, "pane hidden via drag");
    }
}
