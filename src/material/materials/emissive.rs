use super::{MaterialImpl, Scatter};
use crate::material::Material;
use crate::shape::Hit;
use crate::texture::Texture;
use crate::*;

use rand::Rng;

#[derive(Clone, Debug)]
pub struct Emissive {
    texture: Texture,
    intensity: f32,
    inner: Option<Box<Material>>,
}

impl Emissive {
    pub fn new_light(texture: Texture, intensity: f32) -> Self {
        assert!(intensity >= 0.0, "emission intensity must be non-negative");
        Emissive {
            texture,
            intensity,
            inner: None,
        }
    }

    pub fn wrap(inner: Material, texture: Texture, intensity: f32) -> Self {
        assert!(intensity >= 0.0, "emission intensity must be non-negative");
        Emissive {
            texture,
            intensity,
            inner: Some(Box::new(inner)),
        }
    }
}

impl MaterialImpl for Emissive {
    fn scatter<R: Rng + ?Sized>(&self, ray: &Ray, hit: &Hit, rng: &mut R) -> Scatter {
        let emitted = self.texture.sample(&hit.normal) * self.intensity;
        match &self.inner {
            Some(inner) => {
                let mut scatter = inner.scatter(ray, hit, rng);
                scatter.emitted += emitted;
                scatter
            }
            None => Scatter {
                attenuation: RGB::all(0.0),
                ray: None,
                emitted,
            },
        }
    }
}
