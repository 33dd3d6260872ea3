//! Outgoing action events delivered to target listeners.

use crate::coords::CoordsSet;
use crate::geometry::Point;

/// The lifecycle phase an event reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventPhase {
    Start,
    Move,
    InertiaStart,
    Resume,
    End,
}

impl EventPhase {
    /// The suffix appended to the action name to form the event type,
    /// e.g. `"drag"` + `"move"` → `"dragmove"`.
    pub fn suffix(self) -> &'static str {
        match self {
            EventPhase::Start => "start",
            EventPhase::Move => "move",
            EventPhase::InertiaStart => "inertiastart",
            EventPhase::Resume => "resume",
            EventPhase::End => "end",
        }
    }
}

/// Builds the `<action><phase>` event type string.
pub fn event_type(action: &str, phase: EventPhase) -> String {
    format!("{}{}", action, phase.suffix())
}

/// One reported step of an action, as observed by user-facing listeners.
///
/// Built from the gesture's coordinate state after the before-move handlers
/// have run; move-phase handlers may rewrite the fields before delivery, so
/// what listeners observe is the engine's final word, not the raw input.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionEvent {
    pub event_type: String,
    pub phase: EventPhase,
    /// Position in document space.
    pub page: Point,
    /// Position in viewport space.
    pub client: Point,
    /// Page-frame movement since the previous reported step.
    pub delta: Point,
    pub uptime: u64,
}

impl ActionEvent {
    pub fn from_coords(action: &str, phase: EventPhase, coords: &CoordsSet) -> Self {
        Self {
            event_type: event_type(action, phase),
            phase,
            page: coords.cur.page,
            client: coords.cur.client,
            delta: coords.page_delta(),
            uptime: coords.cur.timestamp,
        }
    }
}
