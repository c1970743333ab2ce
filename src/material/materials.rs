use crate::shape::Hit;
use crate::*;

use rand::Rng;

/// Outcome of one surface interaction. `ray: None` ends the path;
/// `emitted` contributes regardless of whether scattering continues.
#[derive(Clone, Debug)]
pub struct Scatter {
    pub attenuation: RGB,
    pub ray: Option<Ray>,
    pub emitted: RGB,
}

pub trait MaterialImpl {
    fn scatter<R: Rng + ?Sized>(&self, ray: &Ray, hit: &Hit, rng: &mut R) -> Scatter;
}

mod lambert;
pub use lambert::*;

mod metal;
pub use metal::*;

mod dielectric;
pub use dielectric::*;

mod emissive;
pub use emissive::*;

#[cfg(test)]
mod tests {
    use crate::material::Material;
    use crate::shape::Hit;
    use crate::texture::Texture;
    use crate::*;
    use rand::prelude::*;

    fn ground_hit() -> Hit {
        Hit {
            dist: 1.0,
            pos: P3::origin(),
            normal: V3::new(0.0, 1.0, 0.0),
            front_face: true,
        }
    }

    #[test]
    fn polished_metal_obeys_the_specular_law() {
        let mut rng = SmallRng::seed_from_u64(1);
        let albedo = RGB::new(0.8, 0.6, 0.2);
        let metal = Material::new_metal(albedo, 0.0);
        let hit = ground_hit();

        let incoming = Ray::new(P3::new(-1.0, 1.0, 0.0), V3::new(1.0, -1.0, 0.0));
        let scatter = metal.scatter(&incoming, &hit, &mut rng);
        assert_eq!(scatter.attenuation, albedo);

        let out = scatter.ray.unwrap().dir.normalize();
        let expected = V3::new(1.0, 1.0, 0.0).normalize();
        assert!((out - expected).norm() < 1e-6);
        // incidence angle equals reflection angle
        let cos_in = (-incoming.dir.normalize()).dot(&hit.normal);
        let cos_out = out.dot(&hit.normal);
        assert!((cos_in - cos_out).abs() < 1e-6);
    }

    #[test]
    fn metal_absorbs_rays_fuzzed_below_the_surface() {
        // fuzz 1 with a grazing reflection frequently lands below the
        // surface; absorbed scatters must carry no ray
        let mut rng = SmallRng::seed_from_u64(2);
        let metal = Material::new_metal(RGB::all(0.9), 1.0);
        let hit = ground_hit();
        let incoming = Ray::new(P3::new(-10.0, 0.1, 0.0), V3::new(10.0, -0.1, 0.0));
        let mut absorbed = 0;
        for _ in 0..200 {
            let scatter = metal.scatter(&incoming, &hit, &mut rng);
            match scatter.ray {
                Some(ray) => assert!(ray.dir.dot(&hit.normal) > 0.0),
                None => absorbed += 1,
            }
        }
        assert!(absorbed > 0);
    }

    #[test]
    #[should_panic]
    fn metal_rejects_fuzz_above_one() {
        Material::new_metal(RGB::all(0.5), 1.5);
    }

    #[test]
    fn dielectric_reflects_past_the_critical_angle() {
        let mut rng = SmallRng::seed_from_u64(3);
        let glass = Material::new_dielectric(1.5);
        // exiting the medium through its back face
        let hit = Hit {
            dist: 1.0,
            pos: P3::origin(),
            normal: V3::new(0.0, 1.0, 0.0),
            front_face: false,
        };
        let incoming = Ray::new(P3::new(-1.0, 0.5, 0.0), V3::new(1.0, -0.5, 0.0));
        let unit = incoming.dir.normalize();
        // sin(theta) = 0.894, well past the 1/1.5 critical ratio
        for _ in 0..50 {
            let scatter = glass.scatter(&incoming, &hit, &mut rng);
            assert_eq!(scatter.attenuation, RGB::all(1.0));
            let out = scatter.ray.clone().unwrap().dir;
            assert!((out - math::reflect(&unit, &hit.normal)).norm() < 1e-6);
        }
    }

    #[test]
    fn lambert_always_scatters_with_its_texture_color() {
        let mut rng = SmallRng::seed_from_u64(4);
        let albedo = RGB::new(0.1, 0.2, 0.3);
        let lambert = Material::new_lambert(albedo);
        let hit = ground_hit();
        let incoming = Ray::new(P3::new(0.0, 1.0, 0.0), V3::new(0.0, -1.0, 0.0));
        for _ in 0..100 {
            let scatter = lambert.scatter(&incoming, &hit, &mut rng);
            assert_eq!(scatter.attenuation, albedo);
            assert_eq!(scatter.emitted, RGB::all(0.0));
            assert!(scatter.ray.is_some());
        }
    }

    #[test]
    fn pure_light_emits_and_absorbs() {
        let mut rng = SmallRng::seed_from_u64(5);
        let light = Material::new_diffuse_light(Texture::constant(RGB::new(0.2, 0.4, 0.8)), 5.0);
        let hit = ground_hit();
        let incoming = Ray::new(P3::new(0.0, 1.0, 0.0), V3::new(0.0, -1.0, 0.0));
        let scatter = light.scatter(&incoming, &hit, &mut rng);
        assert!(scatter.ray.is_none());
        assert_eq!(scatter.emitted, RGB::new(1.0, 2.0, 4.0));
    }

    #[test]
    fn emissive_wrapper_keeps_the_inner_scatter() {
        let mut rng = SmallRng::seed_from_u64(6);
        let inner = Material::new_metal(RGB::all(0.9), 0.0);
        let glow = Material::new_emissive(inner, Texture::constant(RGB::all(1.0)), 2.0);
        let hit = ground_hit();
        let incoming = Ray::new(P3::new(-1.0, 1.0, 0.0), V3::new(1.0, -1.0, 0.0));
        let scatter = glow.scatter(&incoming, &hit, &mut rng);
        assert_eq!(scatter.emitted, RGB::all(2.0));
        assert_eq!(scatter.attenuation, RGB::all(0.9));
        assert!(scatter.ray.is_some());
    }
}
