//! Dual layouts for every animated element
//!
//! Each element gets a scattered position and a position on the tree cone,
//! generated once and never touched again.

pub mod element;
pub mod generator;

pub use element::Element;
pub use generator::{ConeFill, ConeShape, LayoutGenerator, RestPose, ScatterShape, Spiral};
