use std::f32::consts::{PI, TAU};

use glam::{EulerRot, Mat3, Quat, Vec3};
use rand::Rng;

/// Uniformly random rotation about all three axes
pub fn random_orientation(rng: &mut impl Rng) -> Quat {
    Quat::from_euler(
        EulerRot::XYZ,
        rng.random::<f32>() * TAU,
        rng.random::<f32>() * TAU,
        rng.random::<f32>() * TAU,
    )
}

/// Orientation whose local +Z axis points from `position` toward `target`
pub fn look_at(position: Vec3, target: Vec3, up: Vec3) -> Quat {
    let forward = (target - position).normalize_or_zero();
    if forward == Vec3::ZERO {
        return Quat::IDENTITY;
    }

    let mut right = up.cross(forward);
    if right.length_squared() < 1e-8 {
        // Looking straight along `up`
        right = Vec3::X;
    }
    let right = right.normalize();
    let up = forward.cross(right);

    Quat::from_mat3(&Mat3::from_cols(right, up, forward)).normalize()
}

/// Rest pose for an element hung on the tree.
///
/// Faces away from the trunk at the element's own height, leans back by
/// `tilt` radians against the slope of the cone, then rolls by `roll`.
pub fn outward_pose(position: Vec3, tilt: f32, roll: f32) -> Quat {
    let trunk = Vec3::new(0.0, position.y, 0.0);
    look_at(position, trunk, Vec3::Y)
        * Quat::from_rotation_y(PI)
        * Quat::from_rotation_x(-tilt)
        * Quat::from_rotation_z(roll)
}
