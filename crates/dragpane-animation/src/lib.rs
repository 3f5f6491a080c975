//! Tween animation system for dragpane.
//!
//! Provides easing curves, a duration-based animation spec, and a
//! frame-clock-driven tween runner with a completion callback.

mod animation;
mod tween;

pub use animation::{AnimationSpec, Easing, Lerp};
pub use tween::TweenAnimation;

pub mod prelude {
    pub use crate::animation::{AnimationSpec, Easing, Lerp};
    pub use crate::tween::TweenAnimation;
}
