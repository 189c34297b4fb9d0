//! Smoothed morph progress
//!
//! Each animated group owns one or more [`Progress`] values. Every frame
//! they move a fixed fraction of the remaining distance toward the target
//! implied by the current [`Mode`], so reversing mid-flight just turns the
//! approach around.

use super::easing::{ease, Easing};
use super::mode::Mode;

/// One smoothing step: `lerp(current, target, smoothing)`, kept inside [0, 1]
pub fn step(current: f32, target: f32, smoothing: f32) -> f32 {
    let smoothing = smoothing.clamp(0.0, 1.0);
    let next = current + (target - current) * smoothing;
    next.clamp(0.0, 1.0)
}

/// Morph progress (0.0 = scattered, 1.0 = assembled)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    value: f32,
    /// Fraction of the remaining distance covered per frame
    smoothing: f32,
}

impl Progress {
    /// Start fully scattered
    pub fn new(smoothing: f32) -> Self {
        Self {
            value: 0.0,
            smoothing: smoothing.clamp(0.0, 1.0),
        }
    }

    /// Start at a given value (clamped)
    pub fn at(value: f32, smoothing: f32) -> Self {
        Self {
            value: value.clamp(0.0, 1.0),
            ..Self::new(smoothing)
        }
    }

    /// Advance one frame toward the mode's target
    pub fn update(&mut self, mode: Mode) -> f32 {
        self.value = step(self.value, mode.target(), self.smoothing);
        self.value
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Progress after easing, ready for blending
    pub fn eased(&self, easing: Easing) -> f32 {
        ease(self.value, easing)
    }

    /// Whether the value is within `epsilon` of the mode's target
    pub fn is_settled(&self, mode: Mode, epsilon: f32) -> bool {
        (self.value - mode.target()).abs() <= epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_lerps() {
        assert!((step(0.0, 1.0, 0.25) - 0.25).abs() < 0.0001);
        assert!((step(1.0, 0.0, 0.25) - 0.75).abs() < 0.0001);
    }

    #[test]
    fn test_step_clamps_bad_smoothing() {
        assert_eq!(step(0.5, 1.0, 3.0), 1.0);
        assert_eq!(step(0.5, 0.0, 3.0), 0.0);
        assert_eq!(step(0.5, 1.0, -2.0), 0.5);
        assert_eq!(step(2.0, 1.0, 0.0), 1.0);
    }

    #[test]
    fn test_monotonic_convergence() {
        let smoothing = 0.02;
        let mut progress = Progress::new(smoothing);
        let mut prev = progress.value();
        let mut steps = 0;

        while !progress.is_settled(Mode::TreeShape, 0.001) {
            let v = progress.update(Mode::TreeShape);
            assert!(v >= prev, "progress went backwards at step {}", steps);
            assert!(v <= 1.0);
            prev = v;
            steps += 1;
            assert!(steps < 2000, "did not converge");
        }

        // (1 - s)^n < eps  =>  n ~ ln(1/eps) / s
        let bound = ((1.0f32 / 0.001).ln() / smoothing).ceil() as usize + 1;
        assert!(steps <= bound, "{} steps exceeds bound {}", steps, bound);
    }

    #[test]
    fn test_reverses_mid_flight() {
        let mut progress = Progress::new(0.05);
        for _ in 0..20 {
            progress.update(Mode::TreeShape);
        }
        let peak = progress.value();
        assert!(peak > 0.0 && peak < 1.0);

        progress.update(Mode::Scattered);
        assert!(progress.value() < peak);
    }

    #[test]
    fn test_idempotent_at_rest() {
        let mut low = Progress::at(0.0, 0.035);
        low.update(Mode::Scattered);
        assert_eq!(low.value(), 0.0);

        let mut high = Progress::at(1.0, 0.035);
        for _ in 0..10 {
            high.update(Mode::TreeShape);
        }
        assert!((high.value() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_eased() {
        let progress = Progress::at(0.25, 0.02);
        assert!((progress.eased(Easing::EaseInOutCubic) - 0.0625).abs() < 0.0001);
        assert!((progress.eased(Easing::Linear) - 0.25).abs() < 0.0001);
    }
}
