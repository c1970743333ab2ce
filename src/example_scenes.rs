use crate::material::Material;
use crate::object::{Object, ObjectList};
use crate::scene::{Background, Scene};
use crate::shape::shapes::Sphere;
use crate::texture::{Texture, TextureError};
use crate::*;

use rand::prelude::*;
use std::path::Path;
use std::sync::Arc;

/// Camera placement bundled with a scene; the caller supplies the
/// aspect ratio when it builds the actual camera.
pub struct View {
    pub look_from: P3,
    pub look_at: P3,
    pub view_up: V3,
    pub vfov_degree: f32,
    pub aperture: f32,
}

fn random_color<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> RGB {
    RGB::new(
        rng.gen_range(min, max),
        rng.gen_range(min, max),
        rng.gen_range(min, max),
    )
}

fn push_sphere(objects: &mut ObjectList, material: Arc<Material>, center: P3, radius: f32) {
    objects.push(Object {
        shape: Sphere::new(center, radius).into(),
        material,
    });
}

/// Checkered ground with a glass, a diffuse and a metal sphere.
pub fn three_spheres() -> (Scene, View) {
    let mut objects = ObjectList::new();

    let ground = Arc::new(Material::new_textured_lambert(Texture::checker(1000.0)));
    push_sphere(&mut objects, ground, P3::new(0.0, -1000.0, 0.0), 1000.0);

    let glass = Arc::new(Material::new_dielectric(1.5));
    push_sphere(&mut objects, glass, P3::new(0.0, 1.0, 0.0), 1.0);

    let diffuse = Arc::new(Material::new_lambert(RGB::new(0.4, 0.2, 0.1)));
    push_sphere(&mut objects, diffuse, P3::new(-4.0, 1.0, 0.0), 1.0);

    let metal = Arc::new(Material::new_metal(RGB::new(0.7, 0.6, 0.5), 0.0));
    push_sphere(&mut objects, metal, P3::new(4.0, 1.0, 0.0), 1.0);

    let view = View {
        look_from: P3::new(13.0, 2.0, 3.0),
        look_at: P3::new(0.0, 0.0, 0.0),
        view_up: V3::new(0.0, 1.0, 0.0),
        vfov_degree: 20.0,
        aperture: 0.1,
    };
    (Scene::new(objects, Background::sky()), view)
}

/// The randomized cover scene: a grid lottery of small diffuse lights,
/// metal and glass spheres around a few fixed feature spheres.
pub fn cover<R: Rng + ?Sized>(rng: &mut R) -> (Scene, View) {
    let mut objects = ObjectList::new();

    let ground = Arc::new(Material::new_textured_lambert(Texture::checker(1000.0)));
    push_sphere(&mut objects, ground, P3::new(0.0, -1000.0, 0.0), 1000.0);

    for i in -11..11 {
        for j in -11..11 {
            let lottery = rng.gen_range(0, 100);
            let radius = rng.gen_range(0.1, 0.2);
            let center = P3::new(
                i as f32 + rng.gen_range(0.0, 0.9),
                radius,
                j as f32 + rng.gen_range(0.0, 0.9),
            );
            // keep clear of the large metal sphere
            if (center - P3::new(6.0, 0.2, 0.0)).norm() <= 0.9 {
                continue;
            }
            let material = if lottery < 20 {
                Material::new_diffuse_light(Texture::constant(random_color(rng, 0.0, 1.0)), 1.0)
            } else if lottery < 33 {
                Material::new_metal(random_color(rng, 0.5, 1.0), rng.gen_range(0.0, 0.5))
            } else if lottery < 45 {
                Material::new_dielectric(1.5)
            } else {
                continue;
            };
            push_sphere(&mut objects, Arc::new(material), center, radius);
        }
    }

    push_sphere(
        &mut objects,
        Arc::new(Material::new_dielectric(1.5)),
        P3::new(0.0, 1.0, 0.0),
        1.0,
    );
    push_sphere(
        &mut objects,
        Arc::new(Material::new_diffuse_light(
            Texture::constant(RGB::new(1.0, 0.6, 0.2)),
            1.0,
        )),
        P3::new(-6.0, 1.0, 0.0),
        1.0,
    );
    push_sphere(
        &mut objects,
        Arc::new(Material::new_diffuse_light(
            Texture::constant(RGB::new(0.4, 0.6, 1.0)),
            1.0,
        )),
        P3::new(3.0, 2.5, -3.0),
        0.9,
    );
    push_sphere(
        &mut objects,
        Arc::new(Material::new_diffuse_light(
            Texture::constant(RGB::new(1.0, 0.8, 0.4)),
            5.0,
        )),
        P3::new(-5.0, 2.3, 4.0),
        1.5,
    );
    push_sphere(
        &mut objects,
        Arc::new(Material::new_metal(RGB::new(0.7, 0.6, 0.5), 0.0)),
        P3::new(6.0, 1.0, 0.0),
        1.0,
    );

    let view = View {
        look_from: P3::new(15.0, 2.0, 3.0),
        look_at: P3::new(0.0, 0.0, 0.0),
        view_up: V3::new(0.0, 1.0, 0.0),
        vfov_degree: 30.0,
        aperture: 0.04,
    };
    (Scene::new(objects, Background::sky()), view)
}

/// A single sphere wrapped in a decoded image texture. Fails before
/// rendering if the file cannot be read.
pub fn image_sphere<P: AsRef<Path>>(path: P) -> Result<(Scene, View), TextureError> {
    let mut objects = ObjectList::new();

    let ground = Arc::new(Material::new_textured_lambert(Texture::checker(1000.0)));
    push_sphere(&mut objects, ground, P3::new(0.0, -1000.0, 0.0), 1000.0);

    let textured = Arc::new(Material::new_textured_lambert(Texture::open(path)?));
    push_sphere(&mut objects, textured, P3::new(0.0, 1.0, 0.0), 1.0);

    let view = View {
        look_from: P3::new(0.0, 1.5, 5.0),
        look_at: P3::new(0.0, 1.0, 0.0),
        view_up: V3::new(0.0, 1.0, 0.0),
        vfov_degree: 30.0,
        aperture: 0.0,
    };
    Ok((Scene::new(objects, Background::sky()), view))
}
