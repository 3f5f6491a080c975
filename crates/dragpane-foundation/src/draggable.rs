//! Draggable-panel interaction.
//!
//! A [`DragController`] moves a rectangle along one axis in direct
//! response to pan samples, clamped so it can only travel toward its
//! dismiss side. When the gesture ends it either snaps the rectangle
//! back to its rest origin or settles it fully outside the parent
//! bounds, notifying the delegate only in the off-screen case.

use crate::gesture_constants::{DRAG_COMMIT_FRACTION, SETTLE_DURATION_MILLIS};
use crate::pan::PanRecognizer;
use crate::pointer::GesturePhase;
use dragpane_animation::{AnimationSpec, Easing, TweenAnimation};
use dragpane_core::RuntimeHandle;
use dragpane_geometry::{Point, Rect};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// The single translation degree of freedom a panel responds to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragAxis {
    Horizontal,
    Vertical,
}

/// Notified once per gesture that carried the panel fully off-screen.
/// Held weakly: the controller never extends the delegate's lifetime,
/// and a dropped delegate simply stops receiving notifications.
pub trait DragDelegate {
    fn on_drag_completed(&self);
}

struct DragInner {
    frame: Rc<Cell<Rect>>,
    parent: Rc<Cell<Rect>>,
    axis: DragAxis,
    /// Rest origin along the active axis, captured once at setup.
    initial_origin: f32,
    delegate: Option<Weak<dyn DragDelegate>>,
    settle: TweenAnimation,
}

impl DragInner {
    fn origin_on_axis(&self) -> f32 {
        let frame = self.frame.get();
        match self.axis {
            DragAxis::Horizontal => frame.x,
            DragAxis::Vertical => frame.y,
        }
    }

    fn extent_on_axis(&self) -> f32 {
        let frame = self.frame.get();
        match self.axis {
            DragAxis::Horizontal => frame.width,
            DragAxis::Vertical => frame.height,
        }
    }

    /// Writes the active-axis origin. The cross-axis coordinate and the
    /// size are never touched by the controller.
    fn move_to(&self, position: f32) {
        self.frame.set(move_on_axis(self.frame.get(), self.axis, position));
    }
}

fn move_on_axis(rect: Rect, axis: DragAxis, position: f32) -> Rect {
    match axis {
        DragAxis::Horizontal => rect.with_x(position),
        DragAxis::Vertical => rect.with_y(position),
    }
}

/// Axis-constrained drag interaction for a panel rectangle.
///
/// The shared `Rc<Cell<Rect>>` passed at construction is the live frame
/// of the dragged rectangle; assigning to it is the position commit the
/// rendering side observes. Samples normally arrive via the
/// [`PanRecognizer`] the controller is bound to in [`setup`], but can
/// also be fed directly through [`on_sample`].
///
/// [`setup`]: DragController::setup
/// [`on_sample`]: DragController::on_sample
pub struct DragController {
    inner: Rc<RefCell<DragInner>>,
}

impl DragController {
    pub fn new(frame: Rc<Cell<Rect>>, runtime: RuntimeHandle) -> Self {
        let inner = DragInner {
            frame,
            parent: Rc::new(Cell::new(Rect::default())),
            axis: DragAxis::Vertical,
            initial_origin: 0.0,
            delegate: None,
            settle: TweenAnimation::new(runtime),
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Binds the controller to its collaborators and registers it as the
    /// recognizer's sample consumer. Call exactly once, before the first
    /// gesture; the rest origin is captured from the frame's current
    /// position along `axis`.
    ///
    /// The registered handler reads the recognizer's cumulative
    /// translation, processes the sample, then resets the accumulator so
    /// the next sample arrives as an incremental delta.
    pub fn setup(
        &self,
        gesture_area: &PanRecognizer,
        parent: Rc<Cell<Rect>>,
        axis: DragAxis,
        delegate: Option<Weak<dyn DragDelegate>>,
    ) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.parent = parent;
            inner.axis = axis;
            inner.delegate = delegate;
            inner.initial_origin = inner.origin_on_axis();
        }

        let weak = Rc::downgrade(&self.inner);
        gesture_area.set_handler(move |phase, recognizer| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let translation = recognizer.translation();
            Self::handle_pan(&inner, phase, translation);
            recognizer.reset_translation();
        });
    }

    /// Feeds one incremental translation sample directly, bypassing the
    /// recognizer. `translation` is the delta since the previous sample,
    /// in parent-bounds coordinates.
    pub fn on_sample(&self, phase: GesturePhase, translation: Point) {
        Self::handle_pan(&self.inner, phase, translation);
    }

    /// Rest origin along the active axis, as captured at setup.
    pub fn initial_origin(&self) -> f32 {
        self.inner.borrow().initial_origin
    }

    /// Whether an end-of-gesture settle animation is in flight.
    pub fn is_settling(&self) -> bool {
        self.inner.borrow().settle.is_running()
    }

    fn handle_pan(inner: &Rc<RefCell<DragInner>>, phase: GesturePhase, translation: Point) {
        // Began/Cancelled samples carry no state change of their own.
        if !matches!(phase, GesturePhase::Changed | GesturePhase::Ended) {
            return;
        }

        let inner = inner.borrow();

        // A sample arriving mid-settle belongs to a new gesture: stop
        // the animation and track from wherever it left the frame.
        inner.settle.cancel();

        let delta = match inner.axis {
            DragAxis::Horizontal => translation.x,
            DragAxis::Vertical => translation.y,
        };
        let raw_position = inner.origin_on_axis() + delta;

        // Asymmetric clamp: travel past the rest origin is only
        // permitted toward the dismiss side (down for vertical, left
        // for horizontal).
        let new_position = match inner.axis {
            DragAxis::Horizontal => raw_position.min(inner.initial_origin),
            DragAxis::Vertical => raw_position.max(inner.initial_origin),
        };

        inner.move_to(new_position);

        if phase != GesturePhase::Ended {
            return;
        }

        let half = inner.extent_on_axis() * DRAG_COMMIT_FRACTION;
        let (completed, target) = match inner.axis {
            DragAxis::Vertical => {
                if new_position > inner.initial_origin + half {
                    (true, inner.parent.get().height)
                } else {
                    (false, inner.initial_origin)
                }
            }
            // The horizontal threshold is measured from zero, not from
            // the rest origin. Kept as-is from the original
            // interaction; see DESIGN.md.
            DragAxis::Horizontal => {
                if new_position < -half {
                    (true, -inner.parent.get().width)
                } else {
                    (false, inner.initial_origin)
                }
            }
        };

        log::debug!(
            "drag ended at {new_position}: {} to {target}",
            if completed { "committing" } else { "snapping back" },
        );

        let settle = inner.settle.clone();
        let frame = inner.frame.clone();
        let axis = inner.axis;
        let delegate = if completed {
            inner.delegate.clone()
        } else {
            None
        };
        drop(inner);

        settle.start(
            new_position,
            target,
            AnimationSpec::tween(SETTLE_DURATION_MILLIS, Easing::EaseInOut),
            move |position| {
                frame.set(move_on_axis(frame.get(), axis, position));
            },
            move || {
                if let Some(delegate) = delegate.and_then(|weak| weak.upgrade()) {
                    delegate.on_drag_completed();
                }
            },
        );
    }
}
