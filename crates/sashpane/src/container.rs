#![forbid(unsafe_code)]

//! Split container: composition root wiring the solver, the drag machine,
//! and three opaque content slots.
//!
//! [`SplitView`] owns the position/visibility cells, recomputes frames on
//! every resize or state change, hit-tests pointer-downs against the
//! divider's hit rectangle, and feeds the drag machine. Hosts observe
//! committed positions and visibility flips through the two change
//! callbacks and persist them however they like.
//!
//! Geometry flows one way (size + state in, frames out) and interaction
//! flows one way (pointer events in, state mutation, re-place).

use sashpane_core::event::{PointerEvent, PointerEventKind};
use sashpane_core::geometry::{Point, Rect, Size, SplitAxis};

use crate::constraints::SplitConstraints;
use crate::drag::{SplitDragEffect, SplitDragMachine, SplitDragNoopReason};
use crate::layout::{SplitFrames, solve};
use crate::state::{PaneSide, PaneVisibility, StateCell, StateStore};

/// A placeable piece of content.
///
/// The engine only needs to position three opaque regions; how a slot
/// draws itself is the host's business. Closures implement this directly.
pub trait PaneSlot {
    /// Receive the slot's frame for the current layout pass.
    fn place(&mut self, frame: Rect);
}

impl<F: FnMut(Rect)> PaneSlot for F {
    fn place(&mut self, frame: Rect) {
        self(frame);
    }
}

/// Callback invoked with each committed divider position.
pub type PositionChanged = Box<dyn FnMut(f32)>;

/// Callback invoked with each visibility flip.
pub type VisibilityChanged = Box<dyn FnMut(PaneVisibility)>;

/// Two-pane split container with a draggable divider.
///
/// The axis is fixed for the lifetime of the instance; constraints may be
/// swapped wholesale between renders via
/// [`set_constraints`](Self::set_constraints).
pub struct SplitView<P, S, D> {
    axis: SplitAxis,
    machine: SplitDragMachine,
    position: StateCell<f32>,
    visibility: StateCell<PaneVisibility>,
    primary: P,
    secondary: S,
    divider: D,
    size: Size,
    last_pointer: Option<Point>,
    on_position_changed: Option<PositionChanged>,
    on_visibility_changed: Option<VisibilityChanged>,
}

impl<P, S, D> SplitView<P, S, D>
where
    P: PaneSlot,
    S: PaneSlot,
    D: PaneSlot,
{
    /// Container with the divider centered and both panes visible.
    #[must_use]
    pub fn new(
        axis: SplitAxis,
        constraints: SplitConstraints,
        primary: P,
        secondary: S,
        divider: D,
    ) -> Self {
        Self {
            axis,
            machine: SplitDragMachine::new(constraints),
            position: StateCell::new(0.5),
            visibility: StateCell::new(PaneVisibility::Both),
            primary,
            secondary,
            divider,
            size: Size::default(),
            last_pointer: None,
            on_position_changed: None,
            on_visibility_changed: None,
        }
    }

    /// Seed the divider position.
    #[must_use]
    pub fn with_position(mut self, position: f32) -> Self {
        self.position = StateCell::new(position);
        self
    }

    /// Project the divider position over a storage adapter.
    ///
    /// `default` applies when the store holds nothing yet.
    #[must_use]
    pub fn with_position_store(mut self, default: f32, store: Box<dyn StateStore<f32>>) -> Self {
        self.position = StateCell::with_store(default, store);
        self
    }

    /// Seed the visibility state.
    #[must_use]
    pub fn with_visibility(mut self, visibility: PaneVisibility) -> Self {
        self.visibility = StateCell::new(visibility);
        self
    }

    /// Project the visibility state over a storage adapter.
    #[must_use]
    pub fn with_visibility_store(
        mut self,
        default: PaneVisibility,
        store: Box<dyn StateStore<PaneVisibility>>,
    ) -> Self {
        self.visibility = StateCell::with_store(default, store);
        self
    }

    /// Observe committed divider positions.
    #[must_use]
    pub fn on_position_changed(mut self, callback: PositionChanged) -> Self {
        self.on_position_changed = Some(callback);
        self
    }

    /// Observe visibility flips.
    #[must_use]
    pub fn on_visibility_changed(mut self, callback: VisibilityChanged) -> Self {
        self.on_visibility_changed = Some(callback);
        self
    }

    /// Fixed split axis.
    #[must_use]
    pub const fn axis(&self) -> SplitAxis {
        self.axis
    }

    /// Current divider position fraction.
    #[must_use]
    pub fn position(&self) -> f32 {
        self.position.get()
    }

    /// Current visibility state.
    #[must_use]
    pub fn visibility(&self) -> PaneVisibility {
        self.visibility.get()
    }

    /// Transient hide-preview cue, if a drag sits past a minimum.
    #[must_use]
    pub const fn highlight(&self) -> Option<PaneSide> {
        self.machine.highlight()
    }

    /// Active constraints.
    #[must_use]
    pub const fn constraints(&self) -> &SplitConstraints {
        self.machine.constraints()
    }

    /// Swap the constraints and re-place content.
    pub fn set_constraints(&mut self, constraints: SplitConstraints) {
        self.machine.set_constraints(constraints);
        self.place();
    }

    /// Solved frames for the current size and state.
    #[must_use]
    pub fn layout(&self) -> SplitFrames {
        solve(
            self.size,
            self.axis,
            self.position.get(),
            self.visibility.get(),
            self.machine.constraints(),
        )
    }

    /// Container resize: adopt the new size and re-place content.
    pub fn resize(&mut self, size: Size) {
        self.size = size;
        self.place();
    }

    /// Feed one pointer event.
    ///
    /// Down events are hit-tested against the divider hit rectangle; a
    /// press elsewhere is ignored. Cancel discards any active session
    /// without committing.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> SplitDragEffect {
        match event.kind {
            PointerEventKind::Down => {
                if !self.layout().divider_hit.contains(event.position) {
                    return SplitDragEffect::Noop {
                        reason: SplitDragNoopReason::OutsideDivider,
                    };
                }
                self.last_pointer = Some(event.position);
                self.machine.on_press()
            }
            PointerEventKind::Moved => {
                let Some(last) = self.last_pointer else {
                    return SplitDragEffect::Noop {
                        reason: SplitDragNoopReason::IdleWithoutPress,
                    };
                };
                let delta = event.position.along(self.axis) - last.along(self.axis);
                self.last_pointer = Some(event.position);
                let span = self.size.span(self.axis);
                let effect = self.machine.on_move(delta, span, &mut self.position);
                match effect {
                    SplitDragEffect::DragStarted { position }
                    | SplitDragEffect::PositionChanged { position, .. } => {
                        self.notify_position(position);
                        self.place();
                    }
                    _ => {}
                }
                effect
            }
            PointerEventKind::Up => {
                self.last_pointer = None;
                let effect = self
                    .machine
                    .on_release(&mut self.position, &mut self.visibility);
                match effect {
                    SplitDragEffect::Committed { position } => {
                        self.notify_position(position);
                        self.place();
                    }
                    SplitDragEffect::PaneHidden {
                        restored_position, ..
                    } => {
                        self.notify_position(restored_position);
                        self.notify_visibility(self.visibility.get());
                        self.place();
                    }
                    _ => {}
                }
                effect
            }
            PointerEventKind::Cancel => {
                self.last_pointer = None;
                self.machine.force_cancel()
            }
        }
    }

    /// Discrete double-tap (or equivalent) on the divider.
    pub fn handle_toggle(&mut self) -> SplitDragEffect {
        let effect = self.machine.on_toggle(&mut self.visibility);
        if let SplitDragEffect::Toggled { visibility } = effect {
            self.notify_visibility(visibility);
            self.place();
        }
        effect
    }

    /// Caller-issued show command; restores `Both` if `side` was hidden.
    pub fn show_pane(&mut self, side: PaneSide) {
        if !self.visibility.get().shows(side) {
            self.visibility.set(PaneVisibility::Both);
            self.notify_visibility(PaneVisibility::Both);
            self.place();
        }
    }

    /// Caller-issued hide command.
    pub fn hide_pane(&mut self, side: PaneSide) {
        let next = PaneVisibility::hiding(side);
        if self.visibility.get() != next {
            self.visibility.set(next);
            self.notify_visibility(next);
            self.place();
        }
    }

    /// Discrete keyboard resize by a signed fraction of the span.
    ///
    /// Clamped by the drag bounds; never hides a pane. Ignored while a
    /// drag is active.
    pub fn nudge(&mut self, delta_fraction: f32) {
        if self.machine.is_active() {
            return;
        }
        let next = self
            .machine
            .constraints()
            .clamp_position(self.position.get() + delta_fraction);
        self.position.set(next);
        self.notify_position(next);
        self.place();
    }

    /// Recompute frames and hand each slot its frame.
    fn place(&mut self) {
        let frames = self.layout();
        self.primary.place(frames.primary);
        self.secondary.place(frames.secondary);
        self.divider.place(frames.divider);
    }

    fn notify_position(&mut self, position: f32) {
        if let Some(callback) = &mut self.on_position_changed {
            callback(position);
        }
    }

    fn notify_visibility(&mut self, visibility: PaneVisibility) {
        if let Some(callback) = &mut self.on_visibility_changed {
            callback(visibility);
        }
    }
}
