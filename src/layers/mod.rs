//! The three animated layers of the tree
//!
//! - [`FoliageField`]: thousands of points; blending happens in the vertex shader
//! - [`OrnamentLayer`]: instanced ornaments sharing one progress per layer
//! - [`PhotoFrames`]: individually posed frames, one progress each

mod foliage;
mod ornaments;
mod photos;

pub use foliage::FoliageField;
pub use ornaments::OrnamentLayer;
pub use photos::{PhotoFrame, PhotoFrames};
