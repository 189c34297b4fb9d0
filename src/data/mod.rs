pub mod scene_config;
pub mod photo_album;

pub use scene_config::{FoliageConfig, OrnamentConfig, OrnamentKind, PhotoConfig, SceneConfig};
pub use photo_album::PhotoAlbum;
