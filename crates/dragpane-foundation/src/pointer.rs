//! Pointer input types.
//!
//! The platform's event capture is out of scope; hosts translate their
//! native pointer/touch events into [`PointerEvent`]s and feed them to a
//! recognizer. Single-pointer only.

use dragpane_geometry::Point;
use std::cell::Cell;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Discrete stage of a continuous gesture, as delivered to gesture
/// handlers by a recognizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    Began,
    Changed,
    Ended,
    Cancelled,
}

/// A single pointer change in parent-bounds coordinates.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub uptime: u64,
    pub position: Point,
    pub kind: PointerEventKind,
    is_consumed: Cell<bool>,
}

impl PointerEvent {
    pub fn new(id: PointerId, uptime: u64, position: Point, kind: PointerEventKind) -> Self {
        Self {
            id,
            uptime,
            position,
            kind,
            is_consumed: Cell::new(false),
        }
    }

    pub fn is_consumed(&self) -> bool {
        self.is_consumed.get()
    }

    pub fn consume(&self) {
        self.is_consumed.set(true);
    }
}
