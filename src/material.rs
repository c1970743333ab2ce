use crate::shape::Hit;
use crate::texture::Texture;
use crate::*;

use rand::Rng;

pub mod materials;

use materials::MaterialImpl;
pub use materials::Scatter;

#[derive(Clone, Debug)]
pub enum Material {
    Lambert(materials::Lambert),
    Metal(materials::Metal),
    Dielectric(materials::Dielectric),
    Emissive(materials::Emissive),
}

impl_wrap_from_many! {Material, materials, [Lambert, Metal, Dielectric, Emissive]}

impl Material {
    pub fn new_lambert(albedo: RGB) -> Self {
        materials::Lambert::new(Texture::constant(albedo)).into()
    }

    pub fn new_textured_lambert(texture: Texture) -> Self {
        materials::Lambert::new(texture).into()
    }

    pub fn new_metal(albedo: RGB, fuzz: f32) -> Self {
        materials::Metal::new(albedo, fuzz).into()
    }

    pub fn new_dielectric(index: f32) -> Self {
        materials::Dielectric::new(index).into()
    }

    /// Pure emitter: contributes radiance and absorbs the path.
    pub fn new_diffuse_light(texture: Texture, intensity: f32) -> Self {
        materials::Emissive::new_light(texture, intensity).into()
    }

    /// Adds emission on top of `inner`'s scattering.
    pub fn new_emissive(inner: Material, texture: Texture, intensity: f32) -> Self {
        materials::Emissive::wrap(inner, texture, intensity).into()
    }

    pub fn scatter<R: Rng + ?Sized>(&self, ray: &Ray, hit: &Hit, rng: &mut R) -> Scatter {
        match self {
            Material::Lambert(m) => m.scatter(ray, hit, rng),
            Material::Metal(m) => m.scatter(ray, hit, rng),
            Material::Dielectric(m) => m.scatter(ray, hit, rng),
            Material::Emissive(m) => m.scatter(ray, hit, rng),
        }
    }
}
