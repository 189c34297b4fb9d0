//! The whole morphing tree
//!
//! Owns every layer and the photo album. The frame clock drives it with
//! [`Scene::update`] once per frame, passing the current [`Mode`]; the
//! renderer then pulls instance buffers for the frame time.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, instrument};

use crate::animation::Mode;
use crate::data::{PhotoAlbum, SceneConfig};
use crate::layers::{FoliageField, OrnamentLayer, PhotoFrames};

pub struct Scene {
    foliage: FoliageField,
    ornaments: Vec<OrnamentLayer>,
    album: PhotoAlbum,
    photos: PhotoFrames,
    rng: StdRng,
}

impl Scene {
    /// Build a scene with fresh randomness
    pub fn new(config: &SceneConfig) -> Self {
        Self::with_seed(config, entropy_seed())
    }

    /// Build a reproducible scene
    pub fn with_seed(config: &SceneConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let foliage = FoliageField::new(&config.foliage, &mut rng);
        let ornaments = config
            .ornaments
            .iter()
            .map(|layer| OrnamentLayer::new(layer, &mut rng))
            .collect();

        info!(
            foliage = config.foliage.count,
            ornament_layers = config.ornaments.len(),
            photo_capacity = config.photos.capacity,
            "scene created"
        );

        Self {
            foliage,
            ornaments,
            album: PhotoAlbum::new(config.photos.capacity),
            photos: PhotoFrames::new(&config.photos),
            rng,
        }
    }

    /// Add photos to the album and hang a frame for each one that fits.
    ///
    /// Returns the number of photos accepted.
    pub fn add_photos<I, S>(&mut self, photos: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let added = self.album.add_photos(photos);
        if added > 0 {
            self.photos.sync(&self.album, &mut self.rng);
        }
        added
    }

    /// Advance every progress tracker one frame toward `mode`
    #[instrument(level = "trace", skip(self))]
    pub fn update(&mut self, mode: Mode) {
        self.foliage.update(mode);
        for layer in &mut self.ornaments {
            layer.update(mode);
        }
        self.photos.update(mode);
    }

    /// Whether every layer has reached `mode`'s layout
    pub fn is_settled(&self, mode: Mode) -> bool {
        self.foliage.is_settled(mode)
            && self.ornaments.iter().all(|l| l.is_settled(mode))
            && self.photos.is_settled(mode)
    }

    pub fn foliage(&self) -> &FoliageField {
        &self.foliage
    }

    pub fn ornaments(&self) -> &[OrnamentLayer] {
        &self.ornaments
    }

    pub fn photos(&self) -> &PhotoFrames {
        &self.photos
    }

    pub fn album(&self) -> &PhotoAlbum {
        &self.album
    }
}

#[cfg(target_arch = "wasm32")]
fn entropy_seed() -> u64 {
    let high = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let low = (js_sys::Math::random() * u32::MAX as f64) as u64;
    (high << 32) | low
}

#[cfg(not(target_arch = "wasm32"))]
fn entropy_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x5eed)
}
