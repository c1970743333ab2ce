use crate::*;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// Uniform direction on the unit sphere.
pub struct UnitSphere;

impl Distribution<V3> for UnitSphere {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> V3 {
        use std::f32::consts::PI;
        let z = Uniform::new(-1.0f32, 1.0).sample(rng);
        let theta = Uniform::new(-PI, PI).sample(rng);
        let r = (1.0 - z * z).sqrt();
        V3::new(r * theta.cos(), r * theta.sin(), z)
    }
}

/// Uniform point on the unit disk, as (x, y).
pub struct UnitDisk;

impl Distribution<(f32, f32)> for UnitDisk {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> (f32, f32) {
        use std::f32::consts::PI;
        let theta = Uniform::new(-PI, PI).sample(rng);
        let r = Uniform::new(0.0f32, 1.0).sample(rng).sqrt();
        (r * theta.cos(), r * theta.sin())
    }
}
