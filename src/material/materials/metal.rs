use super::{MaterialImpl, Scatter};
use crate::shape::Hit;
use crate::*;

use rand::prelude::*;

#[derive(Clone, Debug)]
pub struct Metal {
    albedo: RGB,
    fuzz: f32,
}

impl Metal {
    pub fn new(albedo: RGB, fuzz: f32) -> Self {
        assert!(fuzz >= 0.0 && fuzz <= 1.0, "metal fuzz must lie in [0, 1]");
        Metal { albedo, fuzz }
    }
}

impl MaterialImpl for Metal {
    fn scatter<R: Rng + ?Sized>(&self, ray: &Ray, hit: &Hit, rng: &mut R) -> Scatter {
        let reflected = math::reflect(&ray.dir.normalize(), &hit.normal);
        let dir = reflected + sampler::UnitSphere.sample(rng) * self.fuzz;
        // fuzzing may push the direction below the surface: absorb
        let ray = if dir.dot(&hit.normal) > 0.0 {
            Some(Ray::new(hit.pos, dir))
        } else {
            None
        };
        Scatter {
            attenuation: self.albedo,
            ray,
            emitted: RGB::all(0.0),
        }
    }
}
