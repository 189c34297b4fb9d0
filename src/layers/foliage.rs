use glam::Vec3;
use rand::Rng;
use tracing::debug;

use crate::animation::{ease_in_out_cubic, FloatMotion, Mode, Progress};
use crate::data::FoliageConfig;
use crate::layout::Element;

/// Point cloud forming the body of the tree.
///
/// Too many points to blend on the host every frame, so this layer only
/// hands static attributes and two uniforms to the renderer; the vertex
/// shader in [`crate::render::shaders`] does the blend.
pub struct FoliageField {
    elements: Vec<Element>,
    progress: Progress,
}

impl FoliageField {
    pub fn new(config: &FoliageConfig, rng: &mut impl Rng) -> Self {
        let elements = config.layout().generate(config.count, rng);
        debug!(count = elements.len(), "foliage generated");

        Self {
            elements,
            progress: Progress::new(config.smoothing),
        }
    }

    /// Advance the shared progress one frame
    pub fn update(&mut self, mode: Mode) {
        self.progress.update(mode);
    }

    /// Raw progress for the `u_progress` uniform; the shader eases it
    pub fn progress(&self) -> f32 {
        self.progress.value()
    }

    pub fn is_settled(&self, mode: Mode) -> bool {
        self.progress.is_settled(mode, 1e-3)
    }

    pub fn count(&self) -> usize {
        self.elements.len()
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Scatter positions, 3 floats per point
    pub fn scatter_attribute(&self) -> Vec<f32> {
        self.elements
            .iter()
            .flat_map(|e| e.scatter_position.to_array())
            .collect()
    }

    /// Tree positions, 3 floats per point
    pub fn target_attribute(&self) -> Vec<f32> {
        self.elements
            .iter()
            .flat_map(|e| e.target_position.to_array())
            .collect()
    }

    /// Per-point random seed, 1 float per point
    pub fn random_attribute(&self) -> Vec<f32> {
        self.elements.iter().map(|e| e.random_seed).collect()
    }

    /// Host-side evaluation of the shader blend for one point
    pub fn position_at(&self, index: usize, time: f32) -> Option<Vec3> {
        let element = self.elements.get(index)?;
        let eased = ease_in_out_cubic(self.progress.value());
        Some(
            element.scatter_position.lerp(element.target_position, eased)
                + FloatMotion::foliage().offset(time, element.random_seed, eased),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn field(count: usize) -> FoliageField {
        let config = FoliageConfig {
            count,
            ..FoliageConfig::default()
        };
        FoliageField::new(&config, &mut StdRng::seed_from_u64(99))
    }

    #[test]
    fn test_attribute_sizes() {
        let f = field(64);
        assert_eq!(f.scatter_attribute().len(), 64 * 3);
        assert_eq!(f.target_attribute().len(), 64 * 3);
        assert_eq!(f.random_attribute().len(), 64);
    }

    #[test]
    fn test_empty_field() {
        let mut f = field(0);
        f.update(Mode::TreeShape);
        assert!(f.scatter_attribute().is_empty());
        assert!(f.position_at(0, 1.0).is_none());
    }

    #[test]
    fn test_progress_uniform_tracks_mode() {
        let mut f = field(4);
        assert_eq!(f.progress(), 0.0);
        f.update(Mode::TreeShape);
        assert!((f.progress() - 0.02).abs() < 0.0001);
        f.update(Mode::Scattered);
        assert!(f.progress() < 0.02);
    }

    #[test]
    fn test_assembles_onto_targets() {
        let mut f = field(200);
        while f.progress() <= 0.999 {
            f.update(Mode::TreeShape);
        }
        let tolerance = FloatMotion::foliage().max_offset(1.0) + 0.01;
        for i in 0..f.count() {
            let p = f.position_at(i, 3.7).unwrap();
            let target = f.elements()[i].target_position;
            assert!((p - target).length() <= tolerance);
        }
    }

    #[test]
    fn test_scattered_drift_matches_shader_amplitude() {
        let f = field(32);
        let limit = FloatMotion::foliage().max_offset(0.0) + 1e-4;
        for i in 0..f.count() {
            let e = f.elements()[i];
            let drift = f.position_at(i, 1.3).unwrap() - e.scatter_position;
            assert!(drift.length() <= limit);
        }
    }
}
