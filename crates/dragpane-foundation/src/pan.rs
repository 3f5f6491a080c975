//! Pan gesture recognition.
//!
//! Converts raw pointer events into phase-tagged translation samples.
//! The recognizer accumulates cumulative translation since the last
//! reset; consumers that want incremental deltas read the translation
//! and then call [`PanRecognizer::reset_translation`] after each sample.

use crate::pointer::{GesturePhase, PointerEvent, PointerEventKind};
use dragpane_geometry::Point;
use std::cell::RefCell;
use std::rc::Rc;

type PanHandler = Rc<dyn Fn(GesturePhase, &PanRecognizer)>;

struct PanInner {
    translation: Point,
    last_position: Option<Point>,
    tracking: bool,
    handler: Option<PanHandler>,
}

/// Single-pointer pan recognizer attached to a gesture area.
///
/// Dispatches one sample per pointer event to the registered handler.
/// Handlers are invoked with no internal borrows held, so they may call
/// back into the recognizer (read/reset the translation) freely.
#[derive(Clone)]
pub struct PanRecognizer {
    inner: Rc<RefCell<PanInner>>,
}

impl Default for PanRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl PanRecognizer {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(PanInner {
                translation: Point::ZERO,
                last_position: None,
                tracking: false,
                handler: None,
            })),
        }
    }

    /// Registers the sample consumer, replacing any previous one.
    pub fn set_handler(&self, handler: impl Fn(GesturePhase, &PanRecognizer) + 'static) {
        self.inner.borrow_mut().handler = Some(Rc::new(handler));
    }

    /// Cumulative translation since the last reset, in the coordinate
    /// space the pointer events were delivered in.
    pub fn translation(&self) -> Point {
        self.inner.borrow().translation
    }

    /// Zeroes the translation accumulator. Called by consumers after
    /// each sample to turn cumulative translation into per-sample deltas.
    pub fn reset_translation(&self) {
        self.inner.borrow_mut().translation = Point::ZERO;
    }

    pub fn is_tracking(&self) -> bool {
        self.inner.borrow().tracking
    }

    pub fn on_pointer_event(&self, event: &PointerEvent) {
        let phase = {
            let mut inner = self.inner.borrow_mut();
            match event.kind {
                PointerEventKind::Down => {
                    if event.is_consumed() {
                        return;
                    }
                    inner.tracking = true;
                    inner.translation = Point::ZERO;
                    inner.last_position = Some(event.position);
                    log::trace!("pan began at {:?}", event.position);
                    // Down is left unconsumed so sibling recognizers
                    // (e.g. tap) can still see it.
                    GesturePhase::Began
                }
                PointerEventKind::Move => {
                    if !inner.tracking || event.is_consumed() {
                        return;
                    }
                    if let Some(last) = inner.last_position {
                        let delta = event.position - last;
                        inner.translation = inner.translation + delta;
                    }
                    inner.last_position = Some(event.position);
                    event.consume();
                    GesturePhase::Changed
                }
                PointerEventKind::Up => {
                    if !inner.tracking {
                        return;
                    }
                    inner.tracking = false;
                    inner.last_position = None;
                    log::trace!("pan ended at {:?}", event.position);
                    GesturePhase::Ended
                }
                PointerEventKind::Cancel => {
                    if !inner.tracking {
                        return;
                    }
                    inner.tracking = false;
                    inner.last_position = None;
                    GesturePhase::Cancelled
                }
            }
        };

        let handler = self.inner.borrow().handler.clone();
        if let Some(handler) = handler {
            handler(phase, self);
        }
    }
}
