pub mod shaders;

pub use shaders::{FoliageAttribute, FOLIAGE_FRAGMENT_SHADER, FOLIAGE_VERTEX_SHADER};
