//! Scene configuration
//!
//! Every knob of the morph engine, with defaults reproducing the stock
//! tree. Can be loaded from YAML; omitted fields keep their defaults.

use glam::Vec3;
use serde::Deserialize;

use super::photo_album::DEFAULT_PHOTO_CAPACITY;
use crate::animation::{Easing, FloatMotion, MorphProfile, Pulse};
use crate::error::SceneError;
use crate::layout::{ConeFill, ConeShape, LayoutGenerator, RestPose, ScatterShape, Spiral};

/// Whole-scene configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub foliage: FoliageConfig,
    pub ornaments: Vec<OrnamentConfig>,
    pub photos: PhotoConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            foliage: FoliageConfig::default(),
            ornaments: OrnamentKind::ALL
                .iter()
                .map(|kind| OrnamentConfig::for_kind(*kind))
                .collect(),
            photos: PhotoConfig::default(),
        }
    }
}

impl SceneConfig {
    /// Parse from YAML string and validate
    pub fn from_yaml(yaml: &str) -> Result<Self, SceneError> {
        let config: SceneConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        self.foliage.validate()?;
        for ornament in &self.ornaments {
            ornament.validate()?;
        }
        self.photos.validate()
    }
}

/// The GPU-blended point cloud.
///
/// Easing and drift are compiled into the foliage shader, so they are not
/// configurable here.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FoliageConfig {
    pub count: usize,
    pub cone: ConeShape,
    pub scatter_radius: f32,
    pub smoothing: f32,
}

impl Default for FoliageConfig {
    fn default() -> Self {
        Self {
            count: 4000,
            cone: ConeShape::new(12.0, 4.5),
            scatter_radius: 15.0,
            smoothing: 0.02,
        }
    }
}

impl FoliageConfig {
    pub fn layout(&self) -> LayoutGenerator {
        LayoutGenerator::new(self.cone, self.scatter_radius)
    }

    fn validate(&self) -> Result<(), SceneError> {
        check_cone("foliage", &self.cone, self.scatter_radius)?;
        check_smoothing("foliage.smoothing", self.smoothing)
    }
}

/// Weight class of an ornament layer; heavier classes assemble slower
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrnamentKind {
    /// Gift boxes
    Heavy,
    /// Baubles
    Light,
    /// Fairy lights
    Tiny,
}

impl OrnamentKind {
    pub const ALL: [OrnamentKind; 3] = [OrnamentKind::Heavy, OrnamentKind::Light, OrnamentKind::Tiny];

    pub fn as_str(self) -> &'static str {
        match self {
            OrnamentKind::Heavy => "heavy",
            OrnamentKind::Light => "light",
            OrnamentKind::Tiny => "tiny",
        }
    }
}

/// One instanced ornament layer
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "OrnamentOverrides")]
pub struct OrnamentConfig {
    pub kind: OrnamentKind,
    pub count: usize,
    pub cone: ConeShape,
    pub scatter_radius: f32,
    pub base_scale: f32,
    pub smoothing: f32,
    pub easing: Easing,
    pub height_taper: f32,
    pub pose: RestPose,
    /// Tumble rate around local X/Y/Z, radians per second
    pub spin: [f32; 3],
    pub pulse: Pulse,
    pub float: FloatMotion,
}

impl OrnamentConfig {
    /// Stock settings for a weight class
    pub fn for_kind(kind: OrnamentKind) -> Self {
        let (count, base_scale, smoothing, height_taper) = match kind {
            OrnamentKind::Heavy => (50, 0.5, 0.015, 0.25),
            OrnamentKind::Light => (200, 0.25, 0.025, 0.0),
            OrnamentKind::Tiny => (500, 0.08, 0.035, 0.0),
        };

        Self {
            kind,
            count,
            cone: ConeShape::new(11.0, 4.2),
            scatter_radius: 18.0,
            base_scale,
            smoothing,
            easing: Easing::EaseInOutCubic,
            height_taper,
            pose: RestPose {
                tilt: 0.25,
                max_roll: 0.1,
            },
            spin: [0.2, 0.1, 0.0],
            pulse: Pulse::default(),
            float: FloatMotion::ornament(),
        }
    }

    pub fn layout(&self) -> LayoutGenerator {
        LayoutGenerator::new(self.cone, self.scatter_radius)
            .with_fill(ConeFill::Surface)
            .with_pose(self.pose)
            .with_height_taper(self.height_taper)
    }

    pub fn profile(&self) -> MorphProfile {
        MorphProfile {
            float: self.float,
            pulse: self.pulse,
            spin: Vec3::from_array(self.spin),
            base_scale: self.base_scale,
        }
    }

    fn validate(&self) -> Result<(), SceneError> {
        let name = self.kind.as_str();
        check_cone(name, &self.cone, self.scatter_radius)?;
        check_smoothing(&format!("{}.smoothing", name), self.smoothing)?;
        check_positive(&format!("{}.base_scale", name), self.base_scale)?;
        check_pose(name, &self.pose)?;
        if !(0.0..1.0).contains(&self.height_taper) {
            return Err(SceneError::invalid(
                &format!("{}.height_taper", name),
                "must be in [0, 1)",
            ));
        }
        Ok(())
    }
}

/// YAML form of an ornament layer: a kind plus any overrides of its stock settings
#[derive(Debug, Deserialize)]
struct OrnamentOverrides {
    kind: OrnamentKind,
    count: Option<usize>,
    cone: Option<ConeShape>,
    scatter_radius: Option<f32>,
    base_scale: Option<f32>,
    smoothing: Option<f32>,
    easing: Option<Easing>,
    height_taper: Option<f32>,
    pose: Option<RestPose>,
    spin: Option<[f32; 3]>,
    pulse: Option<Pulse>,
    float: Option<FloatMotion>,
}

impl From<OrnamentOverrides> for OrnamentConfig {
    fn from(o: OrnamentOverrides) -> Self {
        let stock = OrnamentConfig::for_kind(o.kind);
        Self {
            kind: o.kind,
            count: o.count.unwrap_or(stock.count),
            cone: o.cone.unwrap_or(stock.cone),
            scatter_radius: o.scatter_radius.unwrap_or(stock.scatter_radius),
            base_scale: o.base_scale.unwrap_or(stock.base_scale),
            smoothing: o.smoothing.unwrap_or(stock.smoothing),
            easing: o.easing.unwrap_or(stock.easing),
            height_taper: o.height_taper.unwrap_or(stock.height_taper),
            pose: o.pose.unwrap_or(stock.pose),
            spin: o.spin.unwrap_or(stock.spin),
            pulse: o.pulse.unwrap_or(stock.pulse),
            float: o.float.unwrap_or(stock.float),
        }
    }
}

/// Photo frames hung on the tree
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PhotoConfig {
    pub capacity: usize,
    pub cone: ConeShape,
    pub scatter_radius: f32,
    pub spiral: Spiral,
    pub pose: RestPose,
    pub smoothing: f32,
    pub easing: Easing,
    pub float: FloatMotion,
}

impl Default for PhotoConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_PHOTO_CAPACITY,
            cone: ConeShape::new(10.0, 4.5),
            scatter_radius: 16.0,
            spiral: Spiral {
                angle_step: 2.2,
                surface_offset: 0.6,
            },
            pose: RestPose {
                tilt: 0.25,
                max_roll: 0.1,
            },
            smoothing: 0.02,
            easing: Easing::EaseInOutCubic,
            float: FloatMotion::photo(),
        }
    }
}

impl PhotoConfig {
    pub fn layout(&self) -> LayoutGenerator {
        LayoutGenerator::new(self.cone, self.scatter_radius)
            .with_scatter(ScatterShape::Shell)
            .with_pose(self.pose)
    }

    pub fn profile(&self) -> MorphProfile {
        MorphProfile {
            float: self.float,
            pulse: Pulse::none(),
            spin: Vec3::ZERO,
            base_scale: 1.0,
        }
    }

    fn validate(&self) -> Result<(), SceneError> {
        if self.capacity == 0 {
            return Err(SceneError::invalid("photos.capacity", "must be at least 1"));
        }
        check_cone("photos", &self.cone, self.scatter_radius)?;
        check_smoothing("photos.smoothing", self.smoothing)?;
        check_pose("photos", &self.pose)
    }
}

fn check_positive(field: &str, value: f32) -> Result<(), SceneError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SceneError::invalid(field, format!("must be positive, got {}", value)))
    }
}

fn check_smoothing(field: &str, value: f32) -> Result<(), SceneError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(SceneError::invalid(field, format!("must be in (0, 1], got {}", value)))
    }
}

fn check_cone(layer: &str, cone: &ConeShape, scatter_radius: f32) -> Result<(), SceneError> {
    check_positive(&format!("{}.cone.height", layer), cone.height)?;
    check_positive(&format!("{}.cone.base_radius", layer), cone.base_radius)?;
    check_positive(&format!("{}.scatter_radius", layer), scatter_radius)
}

fn check_pose(layer: &str, pose: &RestPose) -> Result<(), SceneError> {
    if pose.max_roll < 0.0 {
        return Err(SceneError::invalid(
            &format!("{}.pose.max_roll", layer),
            "must not be negative",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SceneConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.foliage.count, 4000);
        assert_eq!(config.ornaments.len(), 3);
        assert_eq!(config.photos.capacity, 10);
    }

    #[test]
    fn test_heavier_layers_are_slower() {
        let heavy = OrnamentConfig::for_kind(OrnamentKind::Heavy);
        let light = OrnamentConfig::for_kind(OrnamentKind::Light);
        let tiny = OrnamentConfig::for_kind(OrnamentKind::Tiny);
        assert!(heavy.smoothing < light.smoothing);
        assert!(light.smoothing < tiny.smoothing);
    }

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config = SceneConfig::from_yaml("{}").unwrap();
        assert_eq!(config, SceneConfig::default());
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = r#"
foliage:
  count: 500
ornaments:
  - kind: tiny
    count: 12
  - kind: heavy
photos:
  capacity: 4
"#;
        let config = SceneConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.foliage.count, 500);
        assert!((config.foliage.scatter_radius - 15.0).abs() < 0.0001);

        assert_eq!(config.ornaments.len(), 2);
        assert_eq!(config.ornaments[0].kind, OrnamentKind::Tiny);
        assert_eq!(config.ornaments[0].count, 12);
        assert!((config.ornaments[0].smoothing - 0.035).abs() < 0.0001);
        assert_eq!(config.ornaments[1].count, 50);

        assert_eq!(config.photos.capacity, 4);
    }

    #[test]
    fn test_rejects_bad_smoothing() {
        let yaml = "foliage:\n  smoothing: 1.5\n";
        match SceneConfig::from_yaml(yaml) {
            Err(SceneError::InvalidParameter { field, .. }) => assert_eq!(field, "foliage.smoothing"),
            other => panic!("expected invalid parameter, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let result = SceneConfig::from_yaml("photos:\n  capacity: 0\n");
        assert!(matches!(result, Err(SceneError::InvalidParameter { .. })));
    }

    #[test]
    fn test_rejects_malformed_yaml() {
        let result = SceneConfig::from_yaml("foliage: [1, 2");
        assert!(matches!(result, Err(SceneError::Config(_))));
    }

    #[test]
    fn test_unknown_ornament_kind() {
        let result = SceneConfig::from_yaml("ornaments:\n  - kind: enormous\n");
        assert!(matches!(result, Err(SceneError::Config(_))));
    }

    #[test]
    fn test_foliage_motion_is_not_configurable() {
        let yaml = "foliage:\n  easing: linear\n  float:\n    max_amplitude: 3.0\n";
        assert!(matches!(SceneConfig::from_yaml(yaml), Err(SceneError::Config(_))));
    }

    #[test]
    fn test_ornaments_share_photo_rest_pose() {
        for kind in OrnamentKind::ALL {
            let pose = OrnamentConfig::for_kind(kind).pose;
            assert_eq!(pose, PhotoConfig::default().pose);
        }
    }

    #[test]
    fn test_ornament_profile() {
        let profile = OrnamentConfig::for_kind(OrnamentKind::Light).profile();
        assert!((profile.base_scale - 0.25).abs() < 0.0001);
        assert_eq!(profile.spin, Vec3::new(0.2, 0.1, 0.0));
        assert!(PhotoConfig::default().profile().pulse.amplitude == 0.0);
    }
}
