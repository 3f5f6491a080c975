use crate::frame_clock::FrameClock;
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};
use std::sync::Arc;

pub type FrameCallbackId = u64;

/// Host hook that is poked whenever a frame callback is registered while
/// the runtime was idle. Windowing hosts use this to request a redraw;
/// tests and manual pumps use [`DefaultScheduler`], which ignores it.
pub trait RuntimeScheduler {
    fn request_frame(&self);
}

/// Scheduler that never requests frames. The host is expected to pump
/// [`RuntimeHandle::drain_frame_callbacks`] itself.
pub struct DefaultScheduler;

impl RuntimeScheduler for DefaultScheduler {
    fn request_frame(&self) {}
}

struct FrameCallbackEntry {
    id: FrameCallbackId,
    callback: Option<Box<dyn FnOnce(u64) + 'static>>,
}

struct RuntimeInner {
    scheduler: Arc<dyn RuntimeScheduler>,
    next_frame_callback_id: Cell<FrameCallbackId>,
    frame_callbacks: RefCell<VecDeque<FrameCallbackEntry>>,
    needs_frame: Cell<bool>,
}

impl RuntimeInner {
    fn new(scheduler: Arc<dyn RuntimeScheduler>) -> Self {
        Self {
            scheduler,
            next_frame_callback_id: Cell::new(0),
            frame_callbacks: RefCell::new(VecDeque::new()),
            needs_frame: Cell::new(false),
        }
    }

    fn register_frame_callback(&self, callback: Box<dyn FnOnce(u64) + 'static>) -> FrameCallbackId {
        let id = self.next_frame_callback_id.get();
        self.next_frame_callback_id.set(id + 1);
        self.frame_callbacks
            .borrow_mut()
            .push_back(FrameCallbackEntry {
                id,
                callback: Some(callback),
            });
        if !self.needs_frame.replace(true) {
            self.scheduler.request_frame();
        }
        id
    }

    fn cancel_frame_callback(&self, id: FrameCallbackId) {
        let mut callbacks = self.frame_callbacks.borrow_mut();
        if let Some(index) = callbacks.iter().position(|entry| entry.id == id) {
            callbacks.remove(index);
        }
        if callbacks.is_empty() {
            self.needs_frame.set(false);
        }
    }

    fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        // Drain the current batch before running anything so a callback
        // that re-registers lands on the NEXT frame, not this one.
        let mut pending: SmallVec<[Box<dyn FnOnce(u64) + 'static>; 8]> = SmallVec::new();
        {
            let mut callbacks = self.frame_callbacks.borrow_mut();
            while let Some(mut entry) = callbacks.pop_front() {
                if let Some(callback) = entry.callback.take() {
                    pending.push(callback);
                }
            }
        }
        for callback in pending {
            callback(frame_time_nanos);
        }
        self.needs_frame
            .set(!self.frame_callbacks.borrow().is_empty());
    }
}

/// Owning side of the runtime. Keep this alive for as long as frame
/// callbacks should be serviced; handles observe it weakly.
pub struct Runtime {
    inner: Rc<RuntimeInner>,
}

impl Runtime {
    pub fn new(scheduler: Arc<dyn RuntimeScheduler>) -> Self {
        Self {
            inner: Rc::new(RuntimeInner::new(scheduler)),
        }
    }

    pub fn handle(&self) -> RuntimeHandle {
        RuntimeHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Whether any frame callbacks are waiting to run.
    pub fn needs_frame(&self) -> bool {
        self.inner.needs_frame.get()
    }
}

/// Non-owning handle to the runtime. All operations degrade to no-ops
/// once the owning [`Runtime`] is dropped.
#[derive(Clone)]
pub struct RuntimeHandle {
    inner: Weak<RuntimeInner>,
}

impl RuntimeHandle {
    pub fn register_frame_callback(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> Option<FrameCallbackId> {
        self.inner
            .upgrade()
            .map(|inner| inner.register_frame_callback(Box::new(callback)))
    }

    pub fn cancel_frame_callback(&self, id: FrameCallbackId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.cancel_frame_callback(id);
        }
    }

    /// Runs every callback registered so far with the given frame time.
    /// Callbacks registered during the drain are deferred to the next one.
    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        if let Some(inner) = self.inner.upgrade() {
            inner.drain_frame_callbacks(frame_time_nanos);
        } else {
            log::trace!("drain_frame_callbacks on a dead runtime");
        }
    }

    pub fn needs_frame(&self) -> bool {
        self.inner
            .upgrade()
            .is_some_and(|inner| inner.needs_frame.get())
    }

    pub fn frame_clock(&self) -> FrameClock {
        FrameClock::new(self.clone())
    }
}
