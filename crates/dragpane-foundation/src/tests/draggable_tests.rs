use crate::draggable::{DragAxis, DragController, DragDelegate};
use crate::pan::PanRecognizer;
use crate::pointer::{GesturePhase, PointerEvent, PointerEventKind};
use dragpane_core::{DefaultScheduler, Runtime, RuntimeHandle};
use dragpane_geometry::{Point, Rect};
use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

#[derive(Default)]
struct RecordingDelegate {
    completed: Cell<u32>,
}

impl DragDelegate for RecordingDelegate {
    fn on_drag_completed(&self) {
        self.completed.set(self.completed.get() + 1);
    }
}

struct Harness {
    _runtime: Runtime,
    handle: RuntimeHandle,
    frame: Rc<Cell<Rect>>,
    recognizer: PanRecognizer,
    controller: DragController,
    delegate: Rc<RecordingDelegate>,
}

impl Harness {
    fn new(frame: Rect, parent: Rect, axis: DragAxis) -> Self {
        let runtime = Runtime::new(Arc::new(DefaultScheduler));
        let handle = runtime.handle();
        let frame = Rc::new(Cell::new(frame));
        let parent = Rc::new(Cell::new(parent));
        let recognizer = PanRecognizer::new();
        let controller = DragController::new(Rc::clone(&frame), handle.clone());
        let delegate = Rc::new(RecordingDelegate::default());
        let delegate_dyn: Rc<dyn DragDelegate> = delegate.clone();
        controller.setup(&recognizer, parent, axis, Some(Rc::downgrade(&delegate_dyn)));
        Self {
            _runtime: runtime,
            handle,
            frame,
            recognizer,
            controller,
            delegate,
        }
    }

    fn press(&self, x: f32, y: f32) {
        self.recognizer
            .on_pointer_event(&PointerEvent::new(0, 0, Point::new(x, y), PointerEventKind::Down));
    }

    fn drag_to(&self, x: f32, y: f32) {
        self.recognizer
            .on_pointer_event(&PointerEvent::new(0, 0, Point::new(x, y), PointerEventKind::Move));
    }

    fn release(&self, x: f32, y: f32) {
        self.recognizer
            .on_pointer_event(&PointerEvent::new(0, 0, Point::new(x, y), PointerEventKind::Up));
    }

    /// Pumps two frames: one to stamp the settle animation's start time
    /// and one safely past the 200 ms settle duration.
    fn run_settle(&self) {
        self.handle.drain_frame_callbacks(0);
        self.handle.drain_frame_callbacks(250_000_000);
    }

    fn frame(&self) -> Rect {
        self.frame.get()
    }

    fn completions(&self) -> u32 {
        self.delegate.completed.get()
    }
}

fn vertical_panel() -> Harness {
    // Panel resting at (10, 0), 100x200, inside an 800-tall parent.
    Harness::new(
        Rect::new(10.0, 0.0, 100.0, 200.0),
        Rect::new(0.0, 0.0, 400.0, 800.0),
        DragAxis::Vertical,
    )
}

fn horizontal_panel() -> Harness {
    // Panel resting at (0, 10), 100x200, inside a 400-wide parent.
    Harness::new(
        Rect::new(0.0, 10.0, 100.0, 200.0),
        Rect::new(0.0, 0.0, 400.0, 800.0),
        DragAxis::Horizontal,
    )
}

#[test]
fn vertical_drag_cannot_move_above_rest_origin() {
    let harness = vertical_panel();

    harness.press(50.0, 100.0);
    harness.drag_to(50.0, 40.0); // 60 px upward
    assert_eq!(harness.frame().y, 0.0);

    // Still pinned after more upward travel.
    harness.drag_to(50.0, 10.0);
    assert_eq!(harness.frame().y, 0.0);
}

#[test]
fn horizontal_drag_cannot_move_right_of_rest_origin() {
    let harness = horizontal_panel();

    harness.press(50.0, 100.0);
    harness.drag_to(120.0, 100.0); // 70 px rightward
    assert_eq!(harness.frame().x, 0.0);
}

#[test]
fn changed_samples_track_the_pointer_exactly() {
    let harness = vertical_panel();

    harness.press(50.0, 100.0);
    harness.drag_to(50.0, 140.0); // +40
    harness.drag_to(50.0, 165.0); // +25
    harness.drag_to(50.0, 155.0); // -10

    assert_eq!(harness.frame().y, 55.0);
    assert!(!harness.controller.is_settling());
}

#[test]
fn vertical_drag_past_half_commits_and_notifies() {
    let harness = vertical_panel();

    harness.press(50.0, 0.0);
    harness.drag_to(50.0, 150.0); // y = 150 > 0 + 200/2
    assert_eq!(harness.frame().y, 150.0);

    harness.release(50.0, 150.0);
    assert!(harness.controller.is_settling());
    assert_eq!(harness.completions(), 0, "fires only after the animation");

    harness.run_settle();
    assert_eq!(harness.frame().y, 800.0, "settles at parent height");
    assert_eq!(harness.completions(), 1);
    assert!(!harness.controller.is_settling());
}

#[test]
fn vertical_short_drag_snaps_back_without_notification() {
    let harness = vertical_panel();

    harness.press(50.0, 0.0);
    harness.drag_to(50.0, 80.0); // below the 100 px halfway mark
    harness.release(50.0, 80.0);
    harness.run_settle();

    assert_eq!(harness.frame().y, 0.0);
    assert_eq!(harness.completions(), 0);
}

#[test]
fn vertical_drag_exactly_at_half_snaps_back() {
    let harness = vertical_panel();

    harness.press(50.0, 0.0);
    harness.drag_to(50.0, 100.0); // exactly initial + half: not past it
    harness.release(50.0, 100.0);
    harness.run_settle();

    assert_eq!(harness.frame().y, 0.0);
    assert_eq!(harness.completions(), 0);
}

#[test]
fn horizontal_drag_past_half_commits_to_negative_parent_width() {
    let harness = horizontal_panel();

    harness.press(80.0, 100.0);
    harness.drag_to(20.0, 100.0); // x = -60 < -(100/2)
    assert_eq!(harness.frame().x, -60.0);

    harness.release(20.0, 100.0);
    harness.run_settle();

    assert_eq!(harness.frame().x, -400.0, "settles left of the parent");
    assert_eq!(harness.completions(), 1);
}

#[test]
fn horizontal_short_drag_snaps_back() {
    let harness = horizontal_panel();

    harness.press(80.0, 100.0);
    harness.drag_to(40.0, 100.0); // x = -40, inside the -50 threshold
    harness.release(40.0, 100.0);
    harness.run_settle();

    assert_eq!(harness.frame().x, 0.0);
    assert_eq!(harness.completions(), 0);
}

#[test]
fn horizontal_commit_threshold_is_measured_from_zero() {
    // Panel resting at x = 30. The commit threshold stays at
    // -(width / 2) = -50 in parent coordinates, NOT rest - 50.
    let harness = Harness::new(
        Rect::new(30.0, 0.0, 100.0, 200.0),
        Rect::new(0.0, 0.0, 400.0, 800.0),
        DragAxis::Horizontal,
    );
    assert_eq!(harness.controller.initial_origin(), 30.0);

    // 50 px of travel past rest only reaches x = -20: snaps back.
    harness.press(100.0, 0.0);
    harness.drag_to(50.0, 0.0);
    assert_eq!(harness.frame().x, -20.0);
    harness.release(50.0, 0.0);
    harness.run_settle();
    assert_eq!(harness.frame().x, 30.0);
    assert_eq!(harness.completions(), 0);

    // Crossing x = -50 commits.
    harness.press(100.0, 0.0);
    harness.drag_to(10.0, 0.0); // x = 30 + (10 - 100) = -60
    harness.release(10.0, 0.0);
    harness.run_settle();
    assert_eq!(harness.frame().x, -400.0);
    assert_eq!(harness.completions(), 1);
}

#[test]
fn repeated_ended_samples_re_evaluate_from_current_position() {
    let harness = vertical_panel();

    harness.controller.on_sample(GesturePhase::Changed, Point::new(0.0, 150.0));
    harness.controller.on_sample(GesturePhase::Ended, Point::ZERO);
    // No frames have run; the frame is still at 150 and a second ended
    // sample reaches the same decision.
    harness.controller.on_sample(GesturePhase::Ended, Point::ZERO);

    harness.run_settle();
    assert_eq!(harness.frame().y, 800.0);
    assert_eq!(
        harness.completions(),
        1,
        "the superseded settle must not also notify"
    );
}

#[test]
fn cross_axis_coordinate_is_never_touched() {
    let harness = vertical_panel();

    // Diagonal gesture: the horizontal component must be ignored.
    harness.press(50.0, 0.0);
    harness.drag_to(90.0, 150.0);
    assert_eq!(harness.frame().x, 10.0);
    assert_eq!(harness.frame().y, 150.0);

    harness.release(90.0, 150.0);
    harness.run_settle();
    assert_eq!(harness.frame().x, 10.0, "unchanged through the settle");
    assert_eq!(harness.frame().width, 100.0);
    assert_eq!(harness.frame().height, 200.0);

    let harness = horizontal_panel();
    harness.press(80.0, 100.0);
    harness.drag_to(20.0, 170.0);
    assert_eq!(harness.frame().y, 10.0);
    assert_eq!(harness.frame().x, -60.0);
}

#[test]
fn began_and_cancelled_phases_do_not_move_the_frame() {
    let harness = vertical_panel();

    harness.controller.on_sample(GesturePhase::Began, Point::new(0.0, 50.0));
    assert_eq!(harness.frame().y, 0.0);

    harness.controller.on_sample(GesturePhase::Cancelled, Point::new(0.0, 50.0));
    assert_eq!(harness.frame().y, 0.0);
    assert!(!harness.controller.is_settling());
}

#[test]
fn new_gesture_cancels_an_in_flight_settle() {
    let harness = vertical_panel();

    harness.press(50.0, 0.0);
    harness.drag_to(50.0, 80.0);
    harness.release(50.0, 80.0);
    assert!(harness.controller.is_settling());
    harness.handle.drain_frame_callbacks(0); // stamp the settle start

    harness.press(50.0, 80.0);
    harness.drag_to(50.0, 90.0);
    assert!(!harness.controller.is_settling(), "settle cancelled");
    assert_eq!(harness.frame().y, 90.0, "tracking resumed from the live frame");

    // Whatever frames were still queued for the old settle do nothing.
    harness.handle.drain_frame_callbacks(100_000_000);
    assert_eq!(harness.frame().y, 90.0);
    assert_eq!(harness.completions(), 0);
}

#[test]
fn delegate_dropped_before_completion_is_a_no_op() {
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let handle = runtime.handle();
    let frame = Rc::new(Cell::new(Rect::new(10.0, 0.0, 100.0, 200.0)));
    let parent = Rc::new(Cell::new(Rect::new(0.0, 0.0, 400.0, 800.0)));
    let recognizer = PanRecognizer::new();
    let controller = DragController::new(Rc::clone(&frame), handle.clone());

    let delegate: Rc<dyn DragDelegate> = Rc::new(RecordingDelegate::default());
    controller.setup(
        &recognizer,
        parent,
        DragAxis::Vertical,
        Some(Rc::downgrade(&delegate)),
    );

    recognizer.on_pointer_event(&PointerEvent::new(
        0,
        0,
        Point::new(50.0, 0.0),
        PointerEventKind::Down,
    ));
    recognizer.on_pointer_event(&PointerEvent::new(
        0,
        0,
        Point::new(50.0, 150.0),
        PointerEventKind::Move,
    ));
    recognizer.on_pointer_event(&PointerEvent::new(
        0,
        0,
        Point::new(50.0, 150.0),
        PointerEventKind::Up,
    ));
    drop(delegate);

    handle.drain_frame_callbacks(0);
    handle.drain_frame_callbacks(250_000_000);

    assert_eq!(frame.get().y, 800.0, "the settle still lands off-screen");
}

#[test]
fn controller_dropped_mid_gesture_leaves_the_recognizer_inert() {
    let harness = vertical_panel();

    harness.press(50.0, 0.0);
    harness.drag_to(50.0, 40.0);
    drop(harness.controller);

    // Recognizer keeps accumulating, but the handler upgrade fails and
    // nothing observes the samples.
    harness.recognizer.on_pointer_event(&PointerEvent::new(
        0,
        0,
        Point::new(50.0, 60.0),
        PointerEventKind::Move,
    ));
    harness.recognizer.on_pointer_event(&PointerEvent::new(
        0,
        0,
        Point::new(50.0, 60.0),
        PointerEventKind::Up,
    ));
    assert_eq!(harness.frame.get().y, 40.0);
}

#[test]
fn example_scenario_from_overview() {
    // Vertical panel at (10, 0), 100x200, parent 800 tall. One changed
    // sample of +150 tracks to y = 150; on ended, 150 > 0 + 100 commits
    // and the panel settles at y = 800, then the delegate fires.
    let harness = vertical_panel();

    harness.controller.on_sample(GesturePhase::Changed, Point::new(0.0, 150.0));
    assert_eq!(harness.frame().y, 150.0);

    harness.controller.on_sample(GesturePhase::Ended, Point::ZERO);
    harness.run_settle();

    assert_eq!(harness.frame(), Rect::new(10.0, 800.0, 100.0, 200.0));
    assert_eq!(harness.completions(), 1);
}
