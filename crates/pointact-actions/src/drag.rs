//! The drag action.
//!
//! Dragging reports pointer motion to a target, optionally constrained to a
//! single axis. The constraint is applied in two places on every step: the
//! before-move handler pins the gesture's tracked coordinates to the start
//! baseline on the locked-out axis (and drops its velocity), and the move
//! handler rewrites the outgoing event so listeners never observe motion on
//! that axis, whatever the raw pointer delivered. The same before-move
//! handler also runs on resume, so momentum carried through an inertial
//! suspension cannot leak onto the locked-out axis.

use std::any::Any;
use std::rc::Rc;

use pointact_core::{
    ActionDescriptor, ActionEvent, ActionPlugin, Axis, EventListener, EventPhase, Interactable,
    LockAxis, Phase, PhasePayload, PointerCoords, PointerEvent, Registry,
};

pub const ACTION_DRAG: &str = "drag";
pub const PLUGIN_ID: &str = "actions/drag";

/// Event types the drag action emits over a gesture's lifetime.
pub const EVENT_TYPES: [&str; 5] = [
    "dragstart",
    "dragmove",
    "draginertiastart",
    "dragresume",
    "dragend",
];

/// Per-target drag configuration. Lives in the target's options map under
/// the action name and is mutated only through the [`Draggable`] capability.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragOptions {
    pub enabled: bool,
    /// Which axis constrains reported motion. `Start` locks to whichever
    /// axis the gesture started on.
    pub lock_axis: LockAxis,
    /// The axis the first movement must be in for the drag to start; also
    /// the axis `lock_axis: Start` resolves to.
    pub start_axis: Axis,
}

impl Default for DragOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            lock_axis: LockAxis::Xy,
            start_axis: Axis::Xy,
        }
    }
}

fn drag_defaults() -> Box<dyn Any> {
    Box::new(DragOptions::default())
}

/// Installs the drag action into a registry and returns it.
///
/// Idempotent per registry: repeated installation does not duplicate event
/// types, phase subscriptions, or the plugin record.
pub fn install(mut registry: Registry) -> Registry {
    registry.phases.on(Phase::BeforeActionMove, before_move);
    registry.phases.on(Phase::ActionResume, before_move);
    registry.phases.on(Phase::ActionMove, action_move);

    registry.actions.register(ActionPlugin {
        id: PLUGIN_ID,
        name: ACTION_DRAG,
        method_name: "draggable",
        checker,
        cursor,
        defaults: drag_defaults,
    });
    registry.actions.merge_event_types(&EVENT_TYPES);
    registry.defaults.insert(ACTION_DRAG, drag_defaults);
    registry
}

/// Decides whether a drag applies to the target, and on which axis.
///
/// Reads only the target's configuration: `None` when dragging is disabled,
/// otherwise a descriptor whose axis is the configured lock resolved against
/// the start axis.
pub fn checker(
    _pointer: &PointerCoords,
    _event: &PointerEvent,
    target: &Interactable,
) -> Option<ActionDescriptor> {
    let options = target.action_options::<DragOptions>(ACTION_DRAG)?;
    options.enabled.then(|| ActionDescriptor {
        name: ACTION_DRAG,
        axis: options.lock_axis.resolve(options.start_axis),
    })
}

/// Advisory pointer appearance while a drag applies.
pub fn cursor() -> &'static str {
    "move"
}

/// Before-move and resume handler: pins the tracked coordinates to the start
/// baseline on the locked-out axis and drops its velocity, so no drift
/// accumulates between steps and no stale momentum survives a resume.
fn before_move(payload: &mut PhasePayload<'_>) {
    let interaction = &mut *payload.interaction;
    let Some(prepared) = interaction.prepared else {
        return;
    };
    if prepared.name != ACTION_DRAG {
        return;
    }

    let coords = &mut interaction.coords;
    match prepared.axis {
        Axis::X => {
            coords.cur.page.y = coords.start.page.y;
            coords.cur.client.y = coords.start.client.y;
            coords.velocity.client.y = 0.0;
            coords.velocity.page.y = 0.0;
        }
        Axis::Y => {
            coords.cur.page.x = coords.start.page.x;
            coords.cur.client.x = coords.start.client.x;
            coords.velocity.client.x = 0.0;
            coords.velocity.page.x = 0.0;
        }
        Axis::Xy => {}
    }
}

/// Move handler: rewrites the outgoing event so the locked-out axis reports
/// the start position and zero delta.
fn action_move(payload: &mut PhasePayload<'_>) {
    let Some(prepared) = payload.interaction.prepared else {
        return;
    };
    if prepared.name != ACTION_DRAG {
        return;
    }
    let Some(event) = payload.event.as_deref_mut() else {
        return;
    };

    let start = payload.interaction.coords.start;
    match prepared.axis {
        Axis::X => {
            event.page.y = start.page.y;
            event.client.y = start.client.y;
            event.delta.y = 0.0;
        }
        Axis::Y => {
            event.page.x = start.page.x;
            event.client.x = start.client.x;
            event.delta.x = 0.0;
        }
        Axis::Xy => {}
    }
}

/// A structured configuration update for [`Draggable::draggable`].
///
/// Unset fields leave the target's current configuration alone, except
/// `enabled`, which a structured update always sets: applying options
/// enables dragging unless the update says `enabled(false)`. The `_str`
/// setters parse permissively; unrecognized values are ignored and the
/// previous configuration value is retained.
#[derive(Default)]
pub struct DraggableOptions {
    enabled: Option<bool>,
    lock_axis: Option<LockAxis>,
    start_axis: Option<Axis>,
    listeners: Vec<(EventPhase, EventListener)>,
}

impl DraggableOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn lock_axis(mut self, lock_axis: LockAxis) -> Self {
        self.lock_axis = Some(lock_axis);
        self
    }

    pub fn start_axis(mut self, start_axis: Axis) -> Self {
        self.start_axis = Some(start_axis);
        self
    }

    /// Sets the lock axis from `"x"`, `"y"`, `"xy"` or `"start"`.
    pub fn lock_axis_str(mut self, value: &str) -> Self {
        match LockAxis::parse(value) {
            Some(lock_axis) => self.lock_axis = Some(lock_axis),
            None => log::debug!("ignoring unrecognized lock axis value '{value}'"),
        }
        self
    }

    /// Sets the start axis from `"x"`, `"y"` or `"xy"`.
    pub fn start_axis_str(mut self, value: &str) -> Self {
        match Axis::parse(value) {
            Some(start_axis) => self.start_axis = Some(start_axis),
            None => log::debug!("ignoring unrecognized start axis value '{value}'"),
        }
        self
    }

    pub fn on_start(self, listener: impl Fn(&ActionEvent) + 'static) -> Self {
        self.listener(EventPhase::Start, listener)
    }

    pub fn on_move(self, listener: impl Fn(&ActionEvent) + 'static) -> Self {
        self.listener(EventPhase::Move, listener)
    }

    pub fn on_end(self, listener: impl Fn(&ActionEvent) + 'static) -> Self {
        self.listener(EventPhase::End, listener)
    }

    fn listener(mut self, phase: EventPhase, listener: impl Fn(&ActionEvent) + 'static) -> Self {
        self.listeners.push((phase, Rc::new(listener)));
        self
    }
}

/// Argument to [`Draggable::draggable`]: a bare enable/disable toggle or a
/// structured update.
pub enum DraggableArg {
    Enabled(bool),
    Options(DraggableOptions),
}

impl From<bool> for DraggableArg {
    fn from(enabled: bool) -> Self {
        DraggableArg::Enabled(enabled)
    }
}

impl From<DraggableOptions> for DraggableArg {
    fn from(options: DraggableOptions) -> Self {
        DraggableArg::Options(options)
    }
}

/// The per-target drag capability. Implemented by [`Interactable`]; the
/// configuration it manipulates is seeded from the registry's defaults when
/// the target is created.
pub trait Draggable {
    /// Applies a configuration update and returns the target for chaining.
    /// Accepts a `bool` (enable/disable) or a [`DraggableOptions`] value.
    fn draggable(&mut self, arg: impl Into<DraggableArg>) -> &mut Self;

    /// The current drag configuration, if the capability is installed.
    fn draggable_options(&self) -> Option<&DragOptions>;
}

impl Draggable for Interactable {
    fn draggable(&mut self, arg: impl Into<DraggableArg>) -> &mut Self {
        match arg.into() {
            DraggableArg::Enabled(enabled) => {
                if let Some(options) = self.action_options_mut::<DragOptions>(ACTION_DRAG) {
                    options.enabled = enabled;
                }
            }
            DraggableArg::Options(update) => {
                if let Some(options) = self.action_options_mut::<DragOptions>(ACTION_DRAG) {
                    options.enabled = update.enabled != Some(false);
                    if let Some(lock_axis) = update.lock_axis {
                        options.lock_axis = lock_axis;
                    }
                    if let Some(start_axis) = update.start_axis {
                        options.start_axis = start_axis;
                    }
                }
                self.set_on_events(ACTION_DRAG, update.listeners);
            }
        }
        self
    }

    fn draggable_options(&self) -> Option<&DragOptions> {
        self.action_options(ACTION_DRAG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pointact_core::{CoordsSet, Interaction, Point, PointerEventKind};

    fn pointer_event(x: f32, y: f32, uptime: u64) -> PointerEvent {
        PointerEvent::new(PointerEventKind::Move, Point::new(x, y), Point::new(x, y), uptime)
    }

    fn drag_target() -> Interactable {
        install(Registry::new()).create_target()
    }

    fn prepared_interaction(name: &'static str, axis: Axis) -> Interaction {
        let mut interaction = Interaction::new(0);
        interaction.pointer_down(&pointer_event(10.0, 20.0, 0));
        interaction.prepared = Some(ActionDescriptor { name, axis });
        interaction
    }

    #[test]
    fn install_registers_action_and_event_types() {
        let registry = install(Registry::new());
        assert!(registry.actions.contains(ACTION_DRAG));
        assert_eq!(registry.actions.get(ACTION_DRAG).unwrap().method_name, "draggable");
        assert_eq!(registry.actions.event_types().len(), 5);
        assert!(registry.defaults.contains(ACTION_DRAG));
        assert_eq!(registry.phases.handler_count(Phase::BeforeActionMove), 1);
        assert_eq!(registry.phases.handler_count(Phase::ActionResume), 1);
        assert_eq!(registry.phases.handler_count(Phase::ActionMove), 1);
    }

    #[test]
    fn repeated_install_is_idempotent() {
        let registry = install(install(Registry::new()));
        assert_eq!(registry.actions.len(), 1);
        assert_eq!(registry.actions.event_types().len(), 5);
        assert_eq!(registry.phases.handler_count(Phase::BeforeActionMove), 1);
        assert_eq!(registry.phases.handler_count(Phase::ActionResume), 1);
        assert_eq!(registry.phases.handler_count(Phase::ActionMove), 1);
    }

    #[test]
    fn checker_returns_none_when_disabled() {
        let mut target = drag_target();
        target.draggable(false);

        let pointer = PointerCoords::ZERO;
        let event = pointer_event(0.0, 0.0, 0);
        assert_eq!(checker(&pointer, &event, &target), None);

        target.draggable(true);
        assert!(checker(&pointer, &event, &target).is_some());
    }

    #[test]
    fn checker_resolves_lock_axis_start() {
        let mut target = drag_target();
        target.draggable(
            DraggableOptions::new()
                .lock_axis(LockAxis::Start)
                .start_axis(Axis::Y),
        );

        let descriptor = checker(&PointerCoords::ZERO, &pointer_event(0.0, 0.0, 0), &target)
            .expect("drag enabled");
        assert_eq!(descriptor.name, ACTION_DRAG);
        assert_eq!(descriptor.axis, Axis::Y);
    }

    #[test]
    fn checker_uses_fixed_lock_axis_directly() {
        let mut target = drag_target();
        target.draggable(DraggableOptions::new().lock_axis(LockAxis::X).start_axis(Axis::Y));

        let descriptor = checker(&PointerCoords::ZERO, &pointer_event(0.0, 0.0, 0), &target)
            .expect("drag enabled");
        assert_eq!(descriptor.axis, Axis::X);
    }

    #[test]
    fn draggable_bool_round_trips_through_accessor() {
        let mut target = drag_target();
        assert_eq!(target.draggable_options().map(|o| o.enabled), Some(true));

        target.draggable(false);
        assert_eq!(target.draggable_options().map(|o| o.enabled), Some(false));
    }

    #[test]
    fn unrecognized_axis_strings_retain_previous_values() {
        let mut target = drag_target();
        target.draggable(DraggableOptions::new().lock_axis(LockAxis::Y));

        target.draggable(DraggableOptions::new().lock_axis_str("bogus").start_axis_str("start"));

        let options = target.draggable_options().unwrap();
        assert_eq!(options.lock_axis, LockAxis::Y);
        assert_eq!(options.start_axis, Axis::Xy);

        target.draggable(DraggableOptions::new().lock_axis_str("start").start_axis_str("y"));
        let options = target.draggable_options().unwrap();
        assert_eq!(options.lock_axis, LockAxis::Start);
        assert_eq!(options.start_axis, Axis::Y);
    }

    #[test]
    fn structured_update_enables_unless_told_otherwise() {
        let mut target = drag_target();
        target.draggable(false);

        // An options update with no explicit `enabled` switches dragging on.
        target.draggable(DraggableOptions::new().lock_axis(LockAxis::X));
        assert_eq!(target.draggable_options().map(|o| o.enabled), Some(true));

        target.draggable(DraggableOptions::new().enabled(false));
        assert_eq!(target.draggable_options().map(|o| o.enabled), Some(false));
    }

    #[test]
    fn before_move_pins_locked_out_axis() {
        let mut interaction = prepared_interaction(ACTION_DRAG, Axis::X);
        interaction.coords.update_cur(&pointer_event(15.0, 27.0, 16));
        interaction.coords.update_velocity();

        let mut payload = PhasePayload {
            interaction: &mut interaction,
            event: None,
        };
        before_move(&mut payload);

        let coords = &interaction.coords;
        assert_eq!(coords.cur.page.y, coords.start.page.y);
        assert_eq!(coords.cur.client.y, coords.start.client.y);
        assert_eq!(coords.velocity.page.y, 0.0);
        assert_eq!(coords.velocity.client.y, 0.0);
        // The locked axis itself is untouched.
        assert_eq!(coords.cur.page.x, 15.0);
        assert_ne!(coords.velocity.page.x, 0.0);
    }

    #[test]
    fn before_move_mirrors_for_y_lock() {
        let mut interaction = prepared_interaction(ACTION_DRAG, Axis::Y);
        interaction.coords.update_cur(&pointer_event(15.0, 27.0, 16));
        interaction.coords.update_velocity();

        let mut payload = PhasePayload {
            interaction: &mut interaction,
            event: None,
        };
        before_move(&mut payload);

        let coords = &interaction.coords;
        assert_eq!(coords.cur.page.x, coords.start.page.x);
        assert_eq!(coords.velocity.page.x, 0.0);
        assert_eq!(coords.cur.page.y, 27.0);
    }

    #[test]
    fn unconstrained_axis_mutates_nothing() {
        let mut interaction = prepared_interaction(ACTION_DRAG, Axis::Xy);
        interaction.coords.update_cur(&pointer_event(15.0, 27.0, 16));
        interaction.coords.update_velocity();
        let before = interaction.coords;

        let mut payload = PhasePayload {
            interaction: &mut interaction,
            event: None,
        };
        before_move(&mut payload);
        assert_eq!(interaction.coords, before);

        let mut event = ActionEvent::from_coords(ACTION_DRAG, EventPhase::Move, &interaction.coords);
        let snapshot = event.clone();
        let mut payload = PhasePayload {
            interaction: &mut interaction,
            event: Some(&mut event),
        };
        action_move(&mut payload);
        assert_eq!(event, snapshot);
    }

    #[test]
    fn handlers_ignore_other_actions() {
        let mut interaction = prepared_interaction("resize", Axis::X);
        interaction.coords.update_cur(&pointer_event(15.0, 27.0, 16));
        interaction.coords.update_velocity();
        let before = interaction.coords;

        let mut payload = PhasePayload {
            interaction: &mut interaction,
            event: None,
        };
        before_move(&mut payload);
        assert_eq!(interaction.coords, before);
    }

    #[test]
    fn action_move_rewrites_outgoing_event() {
        let mut interaction = prepared_interaction(ACTION_DRAG, Axis::X);
        interaction.coords.update_cur(&pointer_event(15.0, 27.0, 16));

        let mut event = ActionEvent::from_coords(ACTION_DRAG, EventPhase::Move, &interaction.coords);
        assert_eq!(event.delta, Point::new(5.0, 7.0));

        let mut payload = PhasePayload {
            interaction: &mut interaction,
            event: Some(&mut event),
        };
        action_move(&mut payload);

        assert_eq!(event.delta, Point::new(5.0, 0.0));
        assert_eq!(event.page.y, 20.0);
        assert_eq!(event.client.y, 20.0);
        assert_eq!(event.page.x, 15.0);
    }

    #[test]
    fn action_move_without_event_is_a_no_op() {
        let mut interaction = prepared_interaction(ACTION_DRAG, Axis::X);
        let before = interaction.coords;
        let mut payload = PhasePayload {
            interaction: &mut interaction,
            event: None,
        };
        action_move(&mut payload);
        assert_eq!(interaction.coords, before);
    }

    #[test]
    fn cursor_hint_is_move() {
        assert_eq!(cursor(), "move");
        let registry = install(Registry::new());
        let descriptor = ActionDescriptor {
            name: ACTION_DRAG,
            axis: Axis::Xy,
        };
        assert_eq!(registry.cursor_for(&descriptor), Some("move"));
    }

    #[test]
    fn coords_set_default_is_zeroed() {
        // Guards the assumption start/cur/velocity all begin at the origin,
        // which the pin-to-start assertions above rely on.
        let coords = CoordsSet::default();
        assert_eq!(coords.start, coords.cur);
        assert_eq!(coords.velocity.page, Point::ZERO);
    }
}
