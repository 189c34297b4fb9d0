use glam::{Quat, Vec3};

/// One animated unit: a foliage point, an ornament instance or a photo frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    /// Position in the scattered cloud
    pub scatter_position: Vec3,
    /// Position on or inside the tree cone
    pub target_position: Vec3,
    /// Rest pose while scattered (identity for unoriented points)
    pub scatter_orientation: Quat,
    /// Rest pose on the tree
    pub target_orientation: Quat,
    /// Desynchronizes drift and pulse, in [0, 1)
    pub random_seed: f32,
    pub visual_scale: f32,
}
