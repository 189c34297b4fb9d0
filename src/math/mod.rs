//! Math helpers on top of glam
//!
//! Sampling of the scattered cloud and the cone, plus rest-pose
//! construction for oriented elements.

pub mod sampling;
pub mod pose;

pub use glam::{Mat4, Quat, Vec3};
pub use sampling::{point_in_sphere, point_on_sphere, polar, unit_direction};
pub use pose::{look_at, outward_pose, random_orientation};
