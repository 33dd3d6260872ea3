//! Action plugin records and the descriptor produced by gesture recognition.

use std::any::Any;

use crate::axis::Axis;
use crate::coords::PointerCoords;
use crate::pointer::PointerEvent;
use crate::target::Interactable;

/// The outcome of one recognition attempt: which action applies and which
/// axis constrains it. Produced by a plugin's checker and stored on the
/// interaction as `prepared` while the gesture runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionDescriptor {
    pub name: &'static str,
    pub axis: Axis,
}

/// Decides whether an action applies to a target for the current pointer.
///
/// Pure with respect to the engine: implementations read the target's
/// configuration and return a descriptor, or `None` to pass.
pub type ActionChecker =
    fn(&PointerCoords, &PointerEvent, &Interactable) -> Option<ActionDescriptor>;

/// Advisory pointer-appearance hint for the action.
pub type CursorHint = fn() -> &'static str;

/// Produces a fresh copy of the action's default per-target options.
pub type OptionsFactory = fn() -> Box<dyn Any>;

/// Everything an action contributes to the registry at install time.
pub struct ActionPlugin {
    /// Stable plugin identifier, e.g. `"actions/drag"`.
    pub id: &'static str,
    /// The action name, which also prefixes its event types.
    pub name: &'static str,
    /// Name of the per-target configurator method, e.g. `"draggable"`.
    pub method_name: &'static str,
    pub checker: ActionChecker,
    pub cursor: CursorHint,
    pub defaults: OptionsFactory,
}

impl std::fmt::Debug for ActionPlugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionPlugin")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("method_name", &self.method_name)
            .finish_non_exhaustive()
    }
}
