//! Per-gesture coordinate tracking in two parallel frames.
//!
//! Every gesture carries a [`CoordsSet`] with the positions that matter to
//! action plugins: where the gesture started, where the pointer was on the
//! previous step, where it is now, and how fast it is moving. Lifecycle
//! handlers may rewrite `cur` and `velocity` in place before the step's
//! outgoing event is built, which is how axis locking is applied.

use crate::geometry::Point;
use crate::pointer::PointerEvent;

/// A position snapshot in both coordinate frames.
///
/// Also doubles as the per-frame vector holder for `velocity`, where `page`
/// and `client` are px/s vectors rather than positions.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PointerCoords {
    pub page: Point,
    pub client: Point,
    pub timestamp: u64,
}

impl PointerCoords {
    pub const ZERO: PointerCoords = PointerCoords {
        page: Point::ZERO,
        client: Point::ZERO,
        timestamp: 0,
    };

    pub fn from_event(event: &PointerEvent) -> Self {
        Self {
            page: event.page,
            client: event.client,
            timestamp: event.uptime,
        }
    }

    pub fn set_from_event(&mut self, event: &PointerEvent) {
        self.page = event.page;
        self.client = event.client;
        self.timestamp = event.uptime;
    }
}

/// The coordinate state of one gesture.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct CoordsSet {
    pub start: PointerCoords,
    pub prev: PointerCoords,
    pub cur: PointerCoords,
    pub velocity: PointerCoords,
}

impl CoordsSet {
    /// Seeds all positions from the initial contact. Called on pointer down.
    pub fn seed(&mut self, event: &PointerEvent) {
        let coords = PointerCoords::from_event(event);
        self.start = coords;
        self.prev = coords;
        self.cur = coords;
        self.velocity = PointerCoords::ZERO;
    }

    /// Re-baselines `start` to the current position. Called when an action
    /// begins, so deltas and axis pins measure from the gesture start rather
    /// than the initial contact.
    pub fn rebase_start(&mut self) {
        self.start = self.cur;
        self.velocity = PointerCoords::ZERO;
    }

    pub fn update_cur(&mut self, event: &PointerEvent) {
        self.cur.set_from_event(event);
    }

    /// Recomputes `velocity` from the `prev` → `cur` movement.
    ///
    /// A non-advancing timestamp yields zero velocity rather than a division
    /// artifact; platforms occasionally deliver same-timestamp samples.
    pub fn update_velocity(&mut self) {
        let dt_ms = self.cur.timestamp.saturating_sub(self.prev.timestamp);
        if dt_ms == 0 {
            self.velocity.page = Point::ZERO;
            self.velocity.client = Point::ZERO;
        } else {
            let per_second = 1000.0 / dt_ms as f32;
            self.velocity.page = (self.cur.page - self.prev.page).scaled(per_second);
            self.velocity.client = (self.cur.client - self.prev.client).scaled(per_second);
        }
        self.velocity.timestamp = self.cur.timestamp;
    }

    /// Rolls `prev` forward after a step's event has been delivered.
    pub fn roll_prev(&mut self) {
        self.prev = self.cur;
    }

    /// Page-frame movement of the current step.
    pub fn page_delta(&self) -> Point {
        self.cur.page - self.prev.page
    }
}
