//! The engine registry: installed actions, lifecycle phase handlers, and
//! per-action default options.
//!
//! The registry is an explicit value with no global state: `Registry::new()`
//! creates one, plugin `install` functions take it and hand it back, and the
//! caller threads it through the engine for the rest of its life. Phase
//! handlers are kept in plain ordered lists and invoked in registration
//! order, so cross-plugin dispatch order is deterministic by construction.

use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::action::{ActionDescriptor, ActionPlugin};
use crate::coords::PointerCoords;
use crate::event::ActionEvent;
use crate::interaction::Interaction;
use crate::pointer::PointerEvent;
use crate::target::Interactable;

/// Lifecycle points action plugins can hook.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Fires after the step's coordinates are updated, before the outgoing
    /// event is built. Handlers may stabilize `cur` and `velocity`.
    BeforeActionMove,
    /// Fires instead of `BeforeActionMove` when a gesture re-enters its move
    /// phase after a suspension (e.g. inertial deceleration).
    ActionResume,
    /// Fires once the outgoing event is built, before listeners see it.
    /// Handlers may rewrite the event.
    ActionMove,
}

/// What a phase handler receives. `event` is present only for
/// [`Phase::ActionMove`].
pub struct PhasePayload<'a> {
    pub interaction: &'a mut Interaction,
    pub event: Option<&'a mut ActionEvent>,
}

pub type PhaseHandler = fn(&mut PhasePayload<'_>);

/// Ordered handler lists, one per phase.
#[derive(Default)]
pub struct PhaseRegistry {
    before_action_move: SmallVec<[PhaseHandler; 4]>,
    action_resume: SmallVec<[PhaseHandler; 4]>,
    action_move: SmallVec<[PhaseHandler; 4]>,
}

impl PhaseRegistry {
    fn list(&self, phase: Phase) -> &SmallVec<[PhaseHandler; 4]> {
        match phase {
            Phase::BeforeActionMove => &self.before_action_move,
            Phase::ActionResume => &self.action_resume,
            Phase::ActionMove => &self.action_move,
        }
    }

    fn list_mut(&mut self, phase: Phase) -> &mut SmallVec<[PhaseHandler; 4]> {
        match phase {
            Phase::BeforeActionMove => &mut self.before_action_move,
            Phase::ActionResume => &mut self.action_resume,
            Phase::ActionMove => &mut self.action_move,
        }
    }

    /// Appends a handler to a phase's list. Subscribing the same handler to
    /// the same phase twice is a no-op, so plugin installation stays
    /// idempotent per registry.
    pub fn on(&mut self, phase: Phase, handler: PhaseHandler) {
        let list = self.list_mut(phase);
        if !list.contains(&handler) {
            list.push(handler);
        }
    }

    /// Runs a phase's handlers in registration order.
    pub fn fire(&self, phase: Phase, payload: &mut PhasePayload<'_>) {
        for handler in self.list(phase) {
            handler(payload);
        }
    }

    pub fn handler_count(&self, phase: Phase) -> usize {
        self.list(phase).len()
    }
}

/// The actions table: name → plugin, in registration order, plus the engine's
/// known event-type list.
#[derive(Default)]
pub struct ActionRegistry {
    plugins: IndexMap<&'static str, ActionPlugin>,
    event_types: SmallVec<[&'static str; 8]>,
}

impl ActionRegistry {
    /// Registers a plugin under its action name. Re-registering the same
    /// name replaces the previous record without changing its position.
    pub fn register(&mut self, plugin: ActionPlugin) {
        log::debug!("registering action plugin '{}' ({})", plugin.name, plugin.id);
        self.plugins.insert(plugin.name, plugin);
    }

    pub fn get(&self, name: &str) -> Option<&ActionPlugin> {
        self.plugins.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.plugins.contains_key(name)
    }

    /// Action names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.plugins.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Appends event types the engine should recognise, skipping ones
    /// already present. Order of the list is not significant.
    pub fn merge_event_types(&mut self, types: &[&'static str]) {
        for ty in types {
            if !self.event_types.contains(ty) {
                self.event_types.push(ty);
            }
        }
    }

    pub fn event_types(&self) -> &[&'static str] {
        &self.event_types
    }
}

/// Per-action default options, applied to targets at construction.
#[derive(Default)]
pub struct DefaultsTable {
    factories: IndexMap<&'static str, crate::action::OptionsFactory>,
}

impl DefaultsTable {
    pub fn insert(&mut self, action: &'static str, factory: crate::action::OptionsFactory) {
        self.factories.insert(action, factory);
    }

    pub fn contains(&self, action: &str) -> bool {
        self.factories.contains_key(action)
    }

    fn seed(&self, target: &mut Interactable) {
        for (&action, factory) in &self.factories {
            target.set_action_options(action, factory());
        }
    }
}

/// Everything installed into one engine instance.
#[derive(Default)]
pub struct Registry {
    pub actions: ActionRegistry,
    pub phases: PhaseRegistry,
    pub defaults: DefaultsTable,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a target with every installed action's default options.
    pub fn create_target(&self) -> Interactable {
        let mut target = Interactable::new();
        self.defaults.seed(&mut target);
        target
    }

    /// Probes installed actions in registration order and returns the first
    /// descriptor a checker produces. The arbitration policy beyond ordering
    /// (e.g. multi-pointer limits) is the host's concern.
    pub fn find_action(
        &self,
        pointer: &PointerCoords,
        event: &PointerEvent,
        target: &Interactable,
    ) -> Option<ActionDescriptor> {
        self.actions
            .plugins
            .values()
            .find_map(|plugin| (plugin.checker)(pointer, event, target))
    }

    /// The pointer-appearance hint of the plugin backing a descriptor.
    pub fn cursor_for(&self, descriptor: &ActionDescriptor) -> Option<&'static str> {
        self.actions.get(descriptor.name).map(|p| (p.cursor)())
    }
}
