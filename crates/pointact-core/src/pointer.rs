//! Normalized pointer events handed to the engine by the capture layer.
//!
//! The engine does not talk to any windowing system itself; a platform
//! integration translates native mouse/touch input into [`PointerEvent`]
//! values carrying both coordinate frames and a monotonic timestamp.

use crate::geometry::Point;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// One normalized input sample.
///
/// `page` and `client` are the same physical position measured in two frames
/// (document space and viewport space); both are tracked in parallel for the
/// whole gesture. `uptime` is in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub page: Point,
    pub client: Point,
    pub uptime: u64,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, page: Point, client: Point, uptime: u64) -> Self {
        Self {
            id: 0,
            kind,
            page,
            client,
            uptime,
        }
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }
}
