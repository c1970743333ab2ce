use super::{MaterialImpl, Scatter};
use crate::shape::Hit;
use crate::texture::Texture;
use crate::*;

use rand::prelude::*;

#[derive(Clone, Debug)]
pub struct Lambert {
    texture: Texture,
}

impl Lambert {
    pub fn new(texture: Texture) -> Self {
        Lambert { texture }
    }
}

impl MaterialImpl for Lambert {
    fn scatter<R: Rng + ?Sized>(&self, _ray: &Ray, hit: &Hit, rng: &mut R) -> Scatter {
        let mut dir = hit.normal + sampler::UnitSphere.sample(rng);
        if math::near_zero(&dir) {
            // the sampled direction cancelled the normal
            dir = hit.normal;
        }
        Scatter {
            attenuation: self.texture.sample(&hit.normal),
            ray: Some(Ray::new(hit.pos, dir)),
            emitted: RGB::all(0.0),
        }
    }
}
