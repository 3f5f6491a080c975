//! Tween animation driver.
//!
//! Drives a bounded interpolation between two values using the runtime's
//! frame callback system and reports completion exactly once.

use crate::animation::{AnimationSpec, Lerp};
use dragpane_core::{FrameCallbackRegistration, FrameClock, RuntimeHandle};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Schedules the next tween frame. Called recursively to drive the
/// animation forward; `on_end` travels along until the final frame.
fn schedule_next_frame<F, G>(
    state: Rc<RefCell<Option<TweenState>>>,
    frame_clock: FrameClock,
    on_update: F,
    on_end: G,
) where
    F: Fn(f32) + 'static,
    G: FnOnce() + 'static,
{
    let state_for_closure = state.clone();
    let frame_clock_for_closure = frame_clock.clone();
    let on_end = RefCell::new(Some(on_end));

    let registration = frame_clock.with_frame_nanos(move |frame_time_nanos| {
        let finished = {
            let state_guard = state_for_closure.borrow();
            let Some(tween) = state_guard.as_ref() else {
                return;
            };

            if !tween.is_running.get() {
                return;
            }

            let start_time = match tween.start_frame_time_nanos.get() {
                Some(value) => value,
                None => {
                    tween.start_frame_time_nanos.set(Some(frame_time_nanos));
                    frame_time_nanos
                }
            };

            let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
            let delay_nanos = tween.spec.delay_millis * 1_000_000;

            if elapsed_nanos < delay_nanos {
                false
            } else {
                let duration_nanos = (tween.spec.duration_millis * 1_000_000).max(1);
                let linear_progress = ((elapsed_nanos - delay_nanos) as f32
                    / duration_nanos as f32)
                    .clamp(0.0, 1.0);
                let progress = tween.spec.easing.transform(linear_progress);

                if linear_progress >= 1.0 {
                    // Land exactly on the target, not on an eased
                    // approximation of it.
                    on_update(tween.end_value);
                    tween.is_running.set(false);
                    true
                } else {
                    on_update(tween.start_value.lerp(&tween.end_value, progress));
                    false
                }
            }
        };

        if finished {
            state_for_closure.borrow_mut().take();
            if let Some(end_fn) = on_end.borrow_mut().take() {
                end_fn();
            }
        } else if let Some(end_fn) = on_end.borrow_mut().take() {
            schedule_next_frame(
                state_for_closure.clone(),
                frame_clock_for_closure.clone(),
                on_update,
                end_fn,
            );
        }
    });

    // Store the registration to keep the callback alive.
    if let Some(tween) = state.borrow_mut().as_mut() {
        tween.registration = Some(registration);
    }
}

/// State for an active tween.
struct TweenState {
    start_value: f32,
    end_value: f32,
    spec: AnimationSpec,
    /// Frame time stamped on the first serviced frame; keeps timing
    /// deterministic regardless of when `start` was called.
    start_frame_time_nanos: Cell<Option<u64>>,
    /// Current frame callback registration (kept alive to continue).
    registration: Option<FrameCallbackRegistration>,
    is_running: Cell<bool>,
}

/// Drives an eased interpolation from one value to another over a fixed
/// duration, invoking `on_update` every frame and `on_end` exactly once
/// when the target is reached. Cancelling suppresses `on_end`.
pub struct TweenAnimation {
    state: Rc<RefCell<Option<TweenState>>>,
    frame_clock: FrameClock,
}

impl TweenAnimation {
    pub fn new(runtime: RuntimeHandle) -> Self {
        Self {
            state: Rc::new(RefCell::new(None)),
            frame_clock: runtime.frame_clock(),
        }
    }

    /// Starts a tween, cancelling any in-flight run first.
    ///
    /// `on_update` receives interpolated values including the exact
    /// `to` value on the final frame; `on_end` runs right after that
    /// final update.
    pub fn start<F, G>(&self, from: f32, to: f32, spec: AnimationSpec, on_update: F, on_end: G)
    where
        F: Fn(f32) + 'static,
        G: FnOnce() + 'static,
    {
        self.cancel();

        let tween = TweenState {
            start_value: from,
            end_value: to,
            spec,
            start_frame_time_nanos: Cell::new(None),
            registration: None,
            is_running: Cell::new(true),
        };
        *self.state.borrow_mut() = Some(tween);

        schedule_next_frame(
            self.state.clone(),
            self.frame_clock.clone(),
            on_update,
            on_end,
        );
    }

    /// Stops the tween where it is. No further updates are delivered and
    /// the completion callback never fires.
    pub fn cancel(&self) {
        if let Some(tween) = self.state.borrow_mut().take() {
            tween.is_running.set(false);
            drop(tween.registration);
        }
    }

    /// Returns true while a tween is in flight.
    pub fn is_running(&self) -> bool {
        self.state
            .borrow()
            .as_ref()
            .is_some_and(|tween| tween.is_running.get())
    }
}

impl Clone for TweenAnimation {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            frame_clock: self.frame_clock.clone(),
        }
    }
}

#[cfg(test)]
#[path = "tests/tween_tests.rs"]
mod tests;
