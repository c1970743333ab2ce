use super::{MaterialImpl, Scatter};
use crate::shape::Hit;
use crate::*;

use rand::prelude::*;

#[derive(Clone, Debug)]
pub struct Dielectric {
    index: f32,
}

impl Dielectric {
    pub fn new(index: f32) -> Self {
        assert!(index > 0.0, "refractive index must be positive");
        Dielectric { index }
    }

    // Schlick's approximation of the Fresnel reflectance.
    fn reflectance(cos_theta: f32, ratio: f32) -> f32 {
        let r0 = (1.0 - ratio) / (1.0 + ratio);
        let r0 = r0 * r0;
        r0 + (1.0 - r0) * (1.0 - cos_theta).powi(5)
    }
}

impl MaterialImpl for Dielectric {
    fn scatter<R: Rng + ?Sized>(&self, ray: &Ray, hit: &Hit, rng: &mut R) -> Scatter {
        use rand::distributions::Uniform;

        let ratio = if hit.front_face {
            1.0 / self.index
        } else {
            self.index
        };
        let unit = ray.dir.normalize();
        let cos_theta = (-unit).dot(&hit.normal).min(1.0);
        let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

        let cannot_refract = ratio * sin_theta > 1.0;
        let dir = if cannot_refract
            || Self::reflectance(cos_theta, ratio) > Uniform::new(0.0f32, 1.0).sample(rng)
        {
            math::reflect(&unit, &hit.normal)
        } else {
            math::refract(&unit, &hit.normal, ratio)
        };

        Scatter {
            // glass absorbs nothing
            attenuation: RGB::all(1.0),
            ray: Some(Ray::new(hit.pos, dir)),
            emitted: RGB::all(0.0),
        }
    }
}
