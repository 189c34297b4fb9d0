use rand::Rng;
use tracing::debug;

use crate::animation::{Easing, Mode, MorphProfile, Progress, Transform};
use crate::data::{OrnamentConfig, OrnamentKind};
use crate::layout::Element;

/// Instanced ornaments of one weight class.
///
/// All instances share one progress; its speed depends on the class, so
/// heavy gifts trail behind the baubles and lights during assembly.
pub struct OrnamentLayer {
    kind: OrnamentKind,
    elements: Vec<Element>,
    progress: Progress,
    easing: Easing,
    profile: MorphProfile,
}

impl OrnamentLayer {
    pub fn new(config: &OrnamentConfig, rng: &mut impl Rng) -> Self {
        let elements = config.layout().generate(config.count, rng);
        debug!(kind = config.kind.as_str(), count = elements.len(), "ornament layer generated");

        Self {
            kind: config.kind,
            elements,
            progress: Progress::new(config.smoothing),
            easing: config.easing,
            profile: config.profile(),
        }
    }

    pub fn update(&mut self, mode: Mode) {
        self.progress.update(mode);
    }

    pub fn kind(&self) -> OrnamentKind {
        self.kind
    }

    pub fn count(&self) -> usize {
        self.elements.len()
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn progress(&self) -> f32 {
        self.progress.value()
    }

    pub fn is_settled(&self, mode: Mode) -> bool {
        self.progress.is_settled(mode, 1e-3)
    }

    pub fn transform(&self, index: usize, time: f32) -> Option<Transform> {
        let element = self.elements.get(index)?;
        Some(self.profile.transform(element, self.progress.eased(self.easing), time))
    }

    /// One transform per instance, in instance order
    pub fn transforms(&self, time: f32) -> impl Iterator<Item = Transform> + '_ {
        let eased = self.progress.eased(self.easing);
        self.elements
            .iter()
            .map(move |e| self.profile.transform(e, eased, time))
    }

    /// Write the instance matrix buffer (16 floats per instance)
    pub fn write_instances(&self, time: f32, out: &mut Vec<f32>) {
        out.clear();
        out.reserve(self.elements.len() * 16);
        for transform in self.transforms(time) {
            transform.write_to(out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::outward_pose;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn layer(kind: OrnamentKind, count: usize) -> OrnamentLayer {
        let config = OrnamentConfig {
            count,
            ..OrnamentConfig::for_kind(kind)
        };
        OrnamentLayer::new(&config, &mut StdRng::seed_from_u64(5))
    }

    #[test]
    fn test_instance_buffer_size() {
        let l = layer(OrnamentKind::Light, 20);
        let mut buffer = vec![1.0; 7];
        l.write_instances(0.5, &mut buffer);
        assert_eq!(buffer.len(), 20 * 16);
    }

    #[test]
    fn test_empty_layer() {
        let mut l = layer(OrnamentKind::Heavy, 0);
        l.update(Mode::TreeShape);
        let mut buffer = Vec::new();
        l.write_instances(1.0, &mut buffer);
        assert!(buffer.is_empty());
        assert!(l.transform(0, 1.0).is_none());
    }

    #[test]
    fn test_heavy_trails_tiny() {
        let mut heavy = layer(OrnamentKind::Heavy, 1);
        let mut tiny = layer(OrnamentKind::Tiny, 1);
        for _ in 0..30 {
            heavy.update(Mode::TreeShape);
            tiny.update(Mode::TreeShape);
        }
        assert!(heavy.progress() < tiny.progress());
    }

    #[test]
    fn test_assembled_near_targets() {
        let mut l = layer(OrnamentKind::Tiny, 100);
        while l.progress() <= 0.999 {
            l.update(Mode::TreeShape);
        }
        let config = OrnamentConfig::for_kind(OrnamentKind::Tiny);
        let tolerance = config.float.max_offset(1.0) + 0.01;
        for (i, t) in l.transforms(12.0).enumerate() {
            let target = l.elements()[i].target_position;
            assert!((t.position - target).length() <= tolerance);
            assert!(t.orientation.is_normalized());
        }
    }

    #[test]
    fn test_scattered_at_start() {
        let l = layer(OrnamentKind::Light, 10);
        let config = OrnamentConfig::for_kind(OrnamentKind::Light);
        let tolerance = config.float.max_offset(0.0) + 0.01;
        for i in 0..l.count() {
            let t = l.transform(i, 0.0).unwrap();
            assert!((t.position - l.elements()[i].scatter_position).length() <= tolerance);
        }
    }

    #[test]
    fn test_rest_pose_leans_back_with_small_roll() {
        for kind in OrnamentKind::ALL {
            let l = layer(kind, 40);
            for e in l.elements() {
                let normal = e.target_orientation * glam::Vec3::Z;
                assert!((normal.y - 0.25f32.sin()).abs() < 0.001);

                let unrolled = outward_pose(e.target_position, 0.25, 0.0);
                assert!(unrolled.angle_between(e.target_orientation) <= 0.1 + 0.01);
            }
        }
    }

    #[test]
    fn test_scale_pulses_around_base() {
        let l = layer(OrnamentKind::Light, 5);
        for t in l.transforms(1.3) {
            assert!(t.scale.x >= 0.25 * 0.9 - 0.0001 && t.scale.x <= 0.25 * 1.1 + 0.0001);
        }
    }
}
