//! Gesture state and the per-step dispatch flow.
//!
//! One [`Interaction`] tracks one continuous pointer engagement from contact
//! to release. The engine owns these records through an [`InteractionSet`];
//! action plugins only ever see a mutable reference for the duration of a
//! phase handler, so concurrent gestures cannot share state.
//!
//! Step ordering is encoded directly in the flow methods: the before-move
//! (or resume) phase always completes before the step's outgoing event is
//! built and the move phase runs. Plugins rely on that to stabilize the
//! coordinate baseline before the event snapshot is taken.

use rustc_hash::FxHashMap;

use crate::action::ActionDescriptor;
use crate::coords::CoordsSet;
use crate::event::{ActionEvent, EventPhase};
use crate::pointer::{PointerEvent, PointerId};
use crate::registry::{Phase, PhasePayload, Registry};
use crate::target::Interactable;

/// One gesture in flight.
#[derive(Debug, Default)]
pub struct Interaction {
    pub id: PointerId,
    /// The action that won recognition for this gesture, if any. Phase
    /// handlers use its name to ignore gestures that belong to other actions.
    pub prepared: Option<ActionDescriptor>,
    pub coords: CoordsSet,
}

impl Interaction {
    pub fn new(id: PointerId) -> Self {
        Self {
            id,
            prepared: None,
            coords: CoordsSet::default(),
        }
    }

    /// Seeds coordinate tracking from the initial contact.
    pub fn pointer_down(&mut self, event: &PointerEvent) {
        self.coords.seed(event);
    }

    /// Begins an action on this gesture: records the prepared descriptor,
    /// re-baselines `start`, and emits the action's start event.
    pub fn start(&mut self, descriptor: ActionDescriptor, target: &Interactable) {
        self.prepared = Some(descriptor);
        self.coords.rebase_start();
        self.deliver(EventPhase::Start, target);
    }

    /// One move step: track the sample, run the before-move phase, then build
    /// and deliver the move event through the move phase.
    ///
    /// Coordinates are tracked even while no action is prepared, so a later
    /// `start` measures from the right position; nothing is emitted in that
    /// case.
    pub fn pointer_move(&mut self, event: &PointerEvent, registry: &Registry, target: &Interactable) {
        self.coords.update_cur(event);
        self.coords.update_velocity();
        self.move_step(Phase::BeforeActionMove, EventPhase::Move, registry, target);
        self.coords.roll_prev();
    }

    /// Announces that the inertia simulator has taken over the gesture.
    pub fn start_inertia(&self, target: &Interactable) {
        self.deliver(EventPhase::InertiaStart, target);
    }

    /// Re-enters the move phase after a suspension. Identical to
    /// [`Interaction::pointer_move`] except the resume phase runs in place of
    /// before-move, letting plugins drop momentum carried over from the
    /// suspension.
    pub fn resume(&mut self, event: &PointerEvent, registry: &Registry, target: &Interactable) {
        self.coords.update_cur(event);
        self.coords.update_velocity();
        self.move_step(Phase::ActionResume, EventPhase::Resume, registry, target);
        self.coords.roll_prev();
    }

    /// Ends the gesture: emits the action's end event at the last reported
    /// position and clears the prepared action.
    pub fn pointer_up(&mut self, target: &Interactable) {
        self.deliver(EventPhase::End, target);
        self.prepared = None;
    }

    fn move_step(
        &mut self,
        before_phase: Phase,
        event_phase: EventPhase,
        registry: &Registry,
        target: &Interactable,
    ) {
        let Some(prepared) = self.prepared else {
            return;
        };

        {
            let mut payload = PhasePayload {
                interaction: &mut *self,
                event: None,
            };
            registry.phases.fire(before_phase, &mut payload);
        }

        let mut event = ActionEvent::from_coords(prepared.name, event_phase, &self.coords);

        {
            let mut payload = PhasePayload {
                interaction: &mut *self,
                event: Some(&mut event),
            };
            registry.phases.fire(Phase::ActionMove, &mut payload);
        }

        target.fire(&event);
    }

    fn deliver(&self, phase: EventPhase, target: &Interactable) {
        let Some(prepared) = self.prepared else {
            return;
        };
        let event = ActionEvent::from_coords(prepared.name, phase, &self.coords);
        target.fire(&event);
    }
}

/// The engine's live gestures, one per pointer.
#[derive(Default)]
pub struct InteractionSet {
    active: FxHashMap<PointerId, Interaction>,
}

impl InteractionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The interaction for a pointer, creating a fresh record on first use.
    pub fn get_or_create(&mut self, id: PointerId) -> &mut Interaction {
        self.active.entry(id).or_insert_with(|| Interaction::new(id))
    }

    pub fn get(&self, id: PointerId) -> Option<&Interaction> {
        self.active.get(&id)
    }

    pub fn get_mut(&mut self, id: PointerId) -> Option<&mut Interaction> {
        self.active.get_mut(&id)
    }

    /// Drops a pointer's record, e.g. on release or cancel.
    pub fn remove(&mut self, id: PointerId) -> Option<Interaction> {
        self.active.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
