//! Interaction targets: per-action options plus user-facing event listeners.
//!
//! A target composes one capability per installed action. The options live in
//! a type-erased map keyed by action name and are seeded from the registry's
//! defaults table when the target is created; action crates provide typed
//! accessors on top (e.g. a `draggable` configurator).

use std::any::Any;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::event::{event_type, ActionEvent, EventPhase};

/// A user-facing listener for delivered action events.
pub type EventListener = Rc<dyn Fn(&ActionEvent)>;

#[derive(Default)]
pub struct Interactable {
    options: FxHashMap<&'static str, Box<dyn Any>>,
    listeners: FxHashMap<String, Vec<EventListener>>,
}

impl Interactable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs (or replaces) the options value for an action capability.
    pub fn set_action_options(&mut self, action: &'static str, options: Box<dyn Any>) {
        self.options.insert(action, options);
    }

    /// The options for an action, if that capability is installed and of the
    /// expected type.
    pub fn action_options<T: 'static>(&self, action: &str) -> Option<&T> {
        self.options.get(action).and_then(|o| o.downcast_ref())
    }

    pub fn action_options_mut<T: 'static>(&mut self, action: &str) -> Option<&mut T> {
        self.options.get_mut(action).and_then(|o| o.downcast_mut())
    }

    /// Subscribes a listener to one event type, e.g. `"dragmove"`.
    /// Listeners for the same type run in subscription order.
    pub fn on(&mut self, event_type: impl Into<String>, listener: impl Fn(&ActionEvent) + 'static) {
        self.listeners
            .entry(event_type.into())
            .or_default()
            .push(Rc::new(listener));
    }

    /// Merges a configuration object's per-event listeners for an action.
    /// This is the listener half of configurator option merging.
    pub fn set_on_events(
        &mut self,
        action: &str,
        listeners: impl IntoIterator<Item = (EventPhase, EventListener)>,
    ) {
        for (phase, listener) in listeners {
            self.listeners
                .entry(event_type(action, phase))
                .or_default()
                .push(listener);
        }
    }

    /// Delivers an event to every listener subscribed to its type.
    pub fn fire(&self, event: &ActionEvent) {
        if let Some(listeners) = self.listeners.get(&event.event_type) {
            for listener in listeners {
                listener(event);
            }
        }
    }

    pub fn has_listeners(&self, event_type: &str) -> bool {
        self.listeners
            .get(event_type)
            .is_some_and(|l| !l.is_empty())
    }
}
