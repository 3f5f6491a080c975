//! Frame-callback runtime for dragpane.
//!
//! Hosts integrate by pumping [`RuntimeHandle::drain_frame_callbacks`]
//! once per display frame with a monotonic timestamp. Everything that
//! wants to run on the next frame registers through [`FrameClock`].
//! There are no threads and no internal clocks, which keeps animation
//! behavior fully deterministic under test.

mod frame_clock;
mod runtime;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use runtime::{DefaultScheduler, FrameCallbackId, Runtime, RuntimeHandle, RuntimeScheduler};

pub mod prelude {
    pub use crate::frame_clock::{FrameCallbackRegistration, FrameClock};
    pub use crate::runtime::{DefaultScheduler, Runtime, RuntimeHandle, RuntimeScheduler};
}
