//! Foundation elements for dragpane: pointer input, pan recognition, and
//! the draggable-panel interaction.

pub mod draggable;
pub mod gesture_constants;
pub mod pan;
pub mod pointer;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use draggable::{DragAxis, DragController, DragDelegate};
pub use pan::PanRecognizer;
pub use pointer::{GesturePhase, PointerEvent, PointerEventKind, PointerId};

pub mod prelude {
    pub use crate::draggable::{DragAxis, DragController, DragDelegate};
    pub use crate::gesture_constants::{DRAG_COMMIT_FRACTION, SETTLE_DURATION_MILLIS};
    pub use crate::pan::PanRecognizer;
    pub use crate::pointer::{GesturePhase, PointerEvent, PointerEventKind, PointerId};
}
