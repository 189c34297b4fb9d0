use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

/// Point from spherical coordinates (`theta` = azimuth, `phi` = polar angle)
pub fn spherical(radius: f32, theta: f32, phi: f32) -> Vec3 {
    Vec3::new(
        radius * phi.sin() * theta.cos(),
        radius * phi.sin() * theta.sin(),
        radius * phi.cos(),
    )
}

/// Random direction, uniform over the unit sphere
pub fn unit_direction(rng: &mut impl Rng) -> Vec3 {
    let theta = rng.random::<f32>() * TAU;
    // acos keeps the poles from collecting extra points
    let phi = (2.0 * rng.random::<f32>() - 1.0).acos();
    spherical(1.0, theta, phi)
}

/// Random point uniformly distributed inside a ball
pub fn point_in_sphere(radius: f32, rng: &mut impl Rng) -> Vec3 {
    let r = radius * rng.random::<f32>().cbrt();
    unit_direction(rng) * r
}

/// Random point on the surface of a sphere
pub fn point_on_sphere(radius: f32, rng: &mut impl Rng) -> Vec3 {
    unit_direction(rng) * radius
}

/// Point at `radius` from the vertical axis, at azimuth `angle` and height `y`
pub fn polar(radius: f32, angle: f32, y: f32) -> Vec3 {
    Vec3::new(radius * angle.cos(), y, radius * angle.sin())
}

/// Distance from the vertical axis
pub fn horizontal_radius(p: Vec3) -> f32 {
    (p.x * p.x + p.z * p.z).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_unit_direction_is_normalized() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let d = unit_direction(&mut rng);
            assert!((d.length() - 1.0).abs() < 0.0001);
        }
    }

    #[test]
    fn test_point_in_sphere_bounded() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1000 {
            let p = point_in_sphere(15.0, &mut rng);
            assert!(p.length() <= 15.0 + 0.001);
        }
    }

    #[test]
    fn test_point_in_sphere_volume_density() {
        // Uniform in volume means P(r < R/2) = 1/8
        let mut rng = StdRng::seed_from_u64(3);
        let samples = 20_000;
        let inner = (0..samples)
            .map(|_| point_in_sphere(10.0, &mut rng))
            .filter(|p| p.length() < 5.0)
            .count();
        let fraction = inner as f32 / samples as f32;
        assert!((fraction - 0.125).abs() < 0.015, "inner fraction was {}", fraction);
    }

    #[test]
    fn test_point_on_sphere_radius() {
        let mut rng = StdRng::seed_from_u64(5);
        let p = point_on_sphere(16.0, &mut rng);
        assert!((p.length() - 16.0).abs() < 0.001);
    }

    #[test]
    fn test_polar() {
        let p = polar(2.0, std::f32::consts::FRAC_PI_2, 3.0);
        assert!(p.x.abs() < 0.0001);
        assert!((p.y - 3.0).abs() < 0.0001);
        assert!((p.z - 2.0).abs() < 0.0001);
        assert!((horizontal_radius(p) - 2.0).abs() < 0.0001);
    }
}
