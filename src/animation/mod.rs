//! Animation module for the scatter/tree morph
//!
//! Handles the shared mode signal, the smoothed progress that chases it,
//! the easing applied before blending, and the per-frame motion overlays.

mod easing;
mod mode;
mod motion;
mod progress;

pub use easing::{ease, ease_in_out_cubic, Easing};
pub use mode::Mode;
pub use motion::{FloatMotion, MorphProfile, Pulse, Transform, Wave, WaveKind};
pub use progress::{step, Progress};
