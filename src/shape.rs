use crate::*;

#[derive(Clone, Debug)]
pub struct Hit {
    pub dist: f32,
    pub pos: P3,
    /// Unit normal, oriented against the incoming ray.
    pub normal: V3,
    pub front_face: bool,
}

impl Hit {
    fn with_outward_normal(ray: &Ray, dist: f32, pos: P3, outward: V3) -> Self {
        let front_face = ray.dir.dot(&outward) < 0.0;
        let normal = if front_face { outward } else { -outward };
        Hit {
            dist,
            pos,
            normal,
            front_face,
        }
    }
}

trait ShapeImpl {
    fn test_hit(&self, ray: &Ray, tnear: f32, tfar: f32) -> Option<Hit>;
}

pub mod shapes {
    use super::*;

    #[derive(Clone, Debug)]
    pub struct Sphere {
        center: P3,
        radius: f32,
    }

    impl Sphere {
        pub fn new(center: P3, radius: f32) -> Self {
            assert!(radius > 0.0, "sphere radius must be positive");
            Sphere { center, radius }
        }

        pub fn center(&self) -> P3 {
            self.center
        }

        pub fn radius(&self) -> f32 {
            self.radius
        }
    }

    impl ShapeImpl for Sphere {
        fn test_hit(&self, ray: &Ray, tnear: f32, tfar: f32) -> Option<Hit> {
            let oc = ray.origin - self.center;
            let a = ray.dir.norm_squared();
            let half_b = oc.dot(&ray.dir);
            let c = oc.norm_squared() - self.radius * self.radius;

            let discriminant = half_b * half_b - a * c;
            if discriminant < 0.0 {
                return None;
            }
            let sqrt_d = discriminant.sqrt();

            // Prefer the near root; a ray starting inside the sphere still
            // reports the far (back-face) intersection.
            let mut root = (-half_b - sqrt_d) / a;
            if root < tnear || root > tfar {
                root = (-half_b + sqrt_d) / a;
                if root < tnear || root > tfar {
                    return None;
                }
            }

            let pos = ray.at(root);
            let outward = (pos - self.center) / self.radius;
            Some(Hit::with_outward_normal(ray, root, pos, outward))
        }
    }
}

#[derive(Clone, Debug)]
pub enum Shape {
    Sphere(shapes::Sphere),
}

impl_wrap_from_many! {Shape, shapes, [Sphere]}

impl Shape {
    pub fn test_hit(&self, ray: &Ray, tnear: f32, tfar: f32) -> Option<Hit> {
        match self {
            Shape::Sphere(s) => s.test_hit(ray, tnear, tfar),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::shapes::Sphere;
    use super::*;

    fn unit_sphere_at(z: f32) -> Shape {
        Sphere::new(P3::new(0.0, 0.0, z), 1.0).into()
    }

    #[test]
    fn head_on_hit_at_distance_minus_radius() {
        let sphere = unit_sphere_at(-5.0);
        let ray = Ray::new(P3::origin(), V3::new(0.0, 0.0, -1.0));
        let hit = sphere.test_hit(&ray, 1e-3, std::f32::MAX).unwrap();
        assert!((hit.dist - 4.0).abs() < 1e-5);
        assert!(hit.front_face);
        assert!((hit.normal - V3::new(0.0, 0.0, 1.0)).norm() < 1e-5);
    }

    #[test]
    fn normal_is_oriented_against_the_ray() {
        let sphere = unit_sphere_at(-5.0);
        for dir in &[
            V3::new(0.0, 0.0, -1.0),
            V3::new(0.1, 0.05, -1.0),
            V3::new(-0.15, 0.1, -1.0),
        ] {
            let ray = Ray::new(P3::origin(), *dir);
            let hit = sphere.test_hit(&ray, 1e-3, std::f32::MAX).unwrap();
            assert!(ray.dir.dot(&hit.normal) <= 0.0);
        }
    }

    #[test]
    fn ray_from_inside_hits_the_back_face() {
        let sphere = unit_sphere_at(0.0);
        let ray = Ray::new(P3::origin(), V3::new(0.0, 0.0, -1.0));
        let hit = sphere.test_hit(&ray, 1e-3, std::f32::MAX).unwrap();
        assert!((hit.dist - 1.0).abs() < 1e-5);
        assert!(!hit.front_face);
        // flipped to point back toward the origin
        assert!((hit.normal - V3::new(0.0, 0.0, 1.0)).norm() < 1e-5);
    }

    #[test]
    fn miss_returns_none() {
        let sphere = unit_sphere_at(-5.0);
        let ray = Ray::new(P3::origin(), V3::new(0.0, 1.0, 0.0));
        assert!(sphere.test_hit(&ray, 1e-3, std::f32::MAX).is_none());
    }

    #[test]
    fn hits_outside_the_range_are_rejected() {
        let sphere = unit_sphere_at(-5.0);
        let ray = Ray::new(P3::origin(), V3::new(0.0, 0.0, -1.0));
        assert!(sphere.test_hit(&ray, 1e-3, 3.9).is_none());
        assert!(sphere.test_hit(&ray, 6.1, std::f32::MAX).is_none());
    }
}
