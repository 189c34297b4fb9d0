//! Layout generation
//!
//! Scattered positions fill (or sit on) a sphere; tree positions fill a
//! cone whose apex is at `+height / 2` and whose base is at `-height / 2`.

use std::f32::consts::TAU;

use glam::{Quat, Vec3};
use rand::Rng;
use serde::Deserialize;
use tracing::debug;

use super::element::Element;
use crate::math::{outward_pose, point_in_sphere, point_on_sphere, polar, random_orientation};

/// Cone approximating the assembled tree
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ConeShape {
    pub height: f32,
    pub base_radius: f32,
}

impl ConeShape {
    pub const fn new(height: f32, base_radius: f32) -> Self {
        Self { height, base_radius }
    }

    /// World height for a height ratio (0 = base, 1 = apex)
    pub fn y_at(&self, ratio: f32) -> f32 {
        ratio * self.height - self.height / 2.0
    }

    /// Inverse of [`ConeShape::y_at`]
    pub fn ratio_at(&self, y: f32) -> f32 {
        (y + self.height / 2.0) / self.height
    }

    /// Linear taper from the base radius to a point
    pub fn radius_at(&self, ratio: f32) -> f32 {
        self.base_radius * (1.0 - ratio)
    }
}

/// How scattered positions are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScatterShape {
    /// Uniform inside the ball
    #[default]
    Volume,
    /// On the sphere surface
    Shell,
}

/// How tree positions are spread at a given height
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConeFill {
    /// Uniform over the disk at that height
    #[default]
    Volume,
    /// Pushed out toward the cone surface
    Surface,
}

/// Orientation parameters for elements that have a facing
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RestPose {
    /// Backward lean against the slope, radians
    pub tilt: f32,
    /// Random roll is drawn from `[-max_roll, max_roll]`
    pub max_roll: f32,
}

/// Evenly stacked spiral used for individually placed elements
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Spiral {
    /// Azimuth advance per index, radians
    pub angle_step: f32,
    /// Distance outside the cone surface
    pub surface_offset: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutGenerator {
    pub cone: ConeShape,
    pub scatter_radius: f32,
    pub scatter: ScatterShape,
    pub fill: ConeFill,
    pub pose: Option<RestPose>,
    /// Visual scale shrinks by this fraction from base to apex
    pub height_taper: f32,
}

impl LayoutGenerator {
    pub fn new(cone: ConeShape, scatter_radius: f32) -> Self {
        Self {
            cone,
            scatter_radius,
            scatter: ScatterShape::Volume,
            fill: ConeFill::Volume,
            pose: None,
            height_taper: 0.0,
        }
    }

    pub fn with_scatter(mut self, scatter: ScatterShape) -> Self {
        self.scatter = scatter;
        self
    }

    pub fn with_fill(mut self, fill: ConeFill) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_pose(mut self, pose: RestPose) -> Self {
        self.pose = Some(pose);
        self
    }

    pub fn with_height_taper(mut self, taper: f32) -> Self {
        self.height_taper = taper;
        self
    }

    /// Generate `count` elements with random tree placement
    pub fn generate(&self, count: usize, rng: &mut impl Rng) -> Vec<Element> {
        let elements: Vec<Element> = (0..count).map(|_| self.random_element(rng)).collect();
        debug!(count, fill = ?self.fill, "generated layout");
        elements
    }

    fn random_element(&self, rng: &mut impl Rng) -> Element {
        let scatter_position = self.scatter_point(rng);

        let ratio = rng.random::<f32>();
        let radius_at_height = self.cone.radius_at(ratio);
        let radius = match self.fill {
            ConeFill::Volume => rng.random::<f32>().sqrt() * radius_at_height,
            ConeFill::Surface => radius_at_height * (0.8 + 0.2 * rng.random::<f32>()),
        };
        let angle = rng.random::<f32>() * TAU;
        let target_position = polar(radius, angle, self.cone.y_at(ratio));

        self.finish(scatter_position, target_position, ratio, rng)
    }

    /// Place element `index` of `total` on an upward spiral just outside the cone.
    ///
    /// Only the scatter position, pose roll and seed are random; the tree
    /// position depends on `index` and `total` alone.
    pub fn spiral_element(
        &self,
        index: usize,
        total: usize,
        spiral: &Spiral,
        rng: &mut impl Rng,
    ) -> Element {
        let scatter_position = self.scatter_point(rng);

        let ratio = (index + 1) as f32 / (total + 1) as f32;
        let radius = self.cone.radius_at(ratio) + spiral.surface_offset;
        let angle = index as f32 * spiral.angle_step;
        let target_position = polar(radius, angle, self.cone.y_at(ratio));

        self.finish(scatter_position, target_position, ratio, rng)
    }

    fn scatter_point(&self, rng: &mut impl Rng) -> Vec3 {
        match self.scatter {
            ScatterShape::Volume => point_in_sphere(self.scatter_radius, rng),
            ScatterShape::Shell => point_on_sphere(self.scatter_radius, rng),
        }
    }

    fn finish(
        &self,
        scatter_position: Vec3,
        target_position: Vec3,
        ratio: f32,
        rng: &mut impl Rng,
    ) -> Element {
        let (scatter_orientation, target_orientation) = match self.pose {
            Some(pose) => {
                let scatter = random_orientation(rng);
                let roll = (rng.random::<f32>() - 0.5) * 2.0 * pose.max_roll;
                (scatter, outward_pose(target_position, pose.tilt, roll))
            }
            None => (Quat::IDENTITY, Quat::IDENTITY),
        };

        Element {
            scatter_position,
            target_position,
            scatter_orientation,
            target_orientation,
            random_seed: rng.random::<f32>(),
            visual_scale: 1.0 - self.height_taper * ratio,
        }
    }
}
