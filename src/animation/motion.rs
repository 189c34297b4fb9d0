//! Per-frame transform synthesis
//!
//! Blends an element's two layouts by eased progress and layers the
//! floating drift, scale pulse and tumble on top.

use glam::{EulerRot, Mat4, Quat, Vec3};
use serde::Deserialize;

use crate::layout::Element;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaveKind {
    #[default]
    Sin,
    Cos,
}

/// One axis of floating drift: `gain * wave(time * frequency + seed * phase_scale)`
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Wave {
    pub kind: WaveKind,
    pub frequency: f32,
    pub phase_scale: f32,
    pub gain: f32,
}

impl Default for Wave {
    fn default() -> Self {
        Self::sin(1.0, 0.0)
    }
}

impl Wave {
    pub const fn sin(frequency: f32, phase_scale: f32) -> Self {
        Self {
            kind: WaveKind::Sin,
            frequency,
            phase_scale,
            gain: 1.0,
        }
    }

    pub const fn cos(frequency: f32, phase_scale: f32) -> Self {
        Self {
            kind: WaveKind::Cos,
            frequency,
            phase_scale,
            gain: 1.0,
        }
    }

    /// An axis that does not move
    pub const fn still() -> Self {
        Self {
            gain: 0.0,
            ..Self::sin(0.0, 0.0)
        }
    }

    pub const fn with_gain(mut self, gain: f32) -> Self {
        self.gain = gain;
        self
    }

    pub fn sample(&self, time: f32, seed: f32) -> f32 {
        let phase = time * self.frequency + seed * self.phase_scale;
        let wave = match self.kind {
            WaveKind::Sin => phase.sin(),
            WaveKind::Cos => phase.cos(),
        };
        wave * self.gain
    }
}

/// Floating drift whose amplitude shrinks as the tree assembles
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct FloatMotion {
    /// Amplitude while scattered
    pub max_amplitude: f32,
    /// Amplitude once assembled (a gentle breathe)
    pub min_amplitude: f32,
    pub x: Wave,
    pub y: Wave,
    pub z: Wave,
}

impl Default for FloatMotion {
    fn default() -> Self {
        Self::foliage()
    }
}

impl FloatMotion {
    pub fn foliage() -> Self {
        Self {
            max_amplitude: 0.5,
            min_amplitude: 0.05,
            x: Wave::sin(2.0, 10.0),
            y: Wave::cos(1.5, 20.0),
            z: Wave::sin(2.2, 30.0),
        }
    }

    pub fn ornament() -> Self {
        Self {
            max_amplitude: 0.8,
            min_amplitude: 0.05,
            x: Wave::sin(1.0, 10.0),
            y: Wave::cos(0.8, 20.0),
            z: Wave::sin(0.5, 30.0),
        }
    }

    pub fn photo() -> Self {
        Self {
            max_amplitude: 0.5,
            min_amplitude: 0.05,
            x: Wave::cos(0.5, 1.0).with_gain(0.5),
            y: Wave::sin(1.0, 10.0),
            z: Wave::still(),
        }
    }

    pub fn amplitude(&self, eased: f32) -> f32 {
        self.max_amplitude + (self.min_amplitude - self.max_amplitude) * eased
    }

    pub fn offset(&self, time: f32, seed: f32, eased: f32) -> Vec3 {
        let amplitude = self.amplitude(eased);
        Vec3::new(
            self.x.sample(time, seed),
            self.y.sample(time, seed),
            self.z.sample(time, seed),
        ) * amplitude
    }

    /// Largest distance the drift can push an element at this progress
    pub fn max_offset(&self, eased: f32) -> f32 {
        let gains = Vec3::new(self.x.gain, self.y.gain, self.z.gain).abs();
        gains.length() * self.amplitude(eased).abs()
    }
}

/// Scale pulse: `1 + amplitude * sin(time * frequency + seed * phase_scale)`
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Pulse {
    pub amplitude: f32,
    pub frequency: f32,
    pub phase_scale: f32,
}

impl Default for Pulse {
    fn default() -> Self {
        Self {
            amplitude: 0.1,
            frequency: 2.0,
            phase_scale: 100.0,
        }
    }
}

impl Pulse {
    pub fn none() -> Self {
        Self {
            amplitude: 0.0,
            ..Self::default()
        }
    }

    pub fn factor(&self, time: f32, seed: f32) -> f32 {
        1.0 + self.amplitude * (time * self.frequency + seed * self.phase_scale).sin()
    }
}

/// Synthesized transform for one element in one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub orientation: Quat,
    pub scale: Vec3,
}

impl Transform {
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.orientation, self.position)
    }

    /// Append as a column-major 4x4 matrix (16 floats)
    pub fn write_to(&self, out: &mut Vec<f32>) {
        out.extend_from_slice(&self.matrix().to_cols_array());
    }
}

/// Everything a layer needs to turn an element into a transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MorphProfile {
    pub float: FloatMotion,
    pub pulse: Pulse,
    /// Constant tumble rate around local X/Y/Z, radians per second
    pub spin: Vec3,
    pub base_scale: f32,
}

impl MorphProfile {
    /// Position only: the layout blend plus floating drift
    pub fn position(&self, element: &Element, eased: f32, time: f32) -> Vec3 {
        element.scatter_position.lerp(element.target_position, eased)
            + self.float.offset(time, element.random_seed, eased)
    }

    pub fn orientation(&self, element: &Element, eased: f32, time: f32) -> Quat {
        let rest = element
            .scatter_orientation
            .slerp(element.target_orientation, eased);
        if self.spin == Vec3::ZERO {
            return rest;
        }
        let tumble = self.spin * time;
        rest * Quat::from_euler(EulerRot::XYZ, tumble.x, tumble.y, tumble.z)
    }

    pub fn scale(&self, element: &Element, time: f32) -> f32 {
        self.base_scale * element.visual_scale * self.pulse.factor(time, element.random_seed)
    }

    pub fn transform(&self, element: &Element, eased: f32, time: f32) -> Transform {
        Transform {
            position: self.position(element, eased, time),
            orientation: self.orientation(element, eased, time),
            scale: Vec3::splat(self.scale(element, time)),
        }
    }
}
