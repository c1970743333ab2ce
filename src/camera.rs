use crate::*;

use rand::prelude::*;

/// Thin-lens camera. The basis and viewport are derived once at
/// construction; `emit_ray` only samples the lens disk.
pub struct Camera {
    origin: P3,
    lower_left: P3,
    horizontal: V3,
    vertical: V3,
    x: V3,
    y: V3,
    z: V3,
    lens_radius: f32,
}

impl Camera {
    pub fn new(
        look_from: P3,
        look_at: P3,
        view_up: V3,
        vfov_degree: f32,
        aspect_ratio: f32,
        aperture: f32,
    ) -> Self {
        assert!(vfov_degree > 0.0 && vfov_degree < 180.0);
        assert!(aspect_ratio > 0.0);
        assert!(aperture >= 0.0);
        let focus_dist = (look_from - look_at).norm();
        assert!(focus_dist > 0.0, "look_from and look_at coincide");

        let theta = vfov_degree * std::f32::consts::PI / 180.0;
        let viewport_h = 2.0 * (theta / 2.0).tan();
        let viewport_w = aspect_ratio * viewport_h;

        let z = (look_from - look_at) / focus_dist;
        let y = view_up.normalize();
        let x = y.cross(&z);

        let horizontal = x * (focus_dist * viewport_w);
        let vertical = y * (focus_dist * viewport_h);
        let lower_left = look_from - horizontal / 2.0 - vertical / 2.0 - z * focus_dist;

        Camera {
            origin: look_from,
            lower_left,
            horizontal,
            vertical,
            x,
            y,
            z,
            lens_radius: aperture / 2.0,
        }
    }

    pub fn basis(&self) -> (V3, V3, V3) {
        (self.x, self.y, self.z)
    }

    /// `dx`, `dy` are normalized viewport coordinates in [0, 1].
    pub fn emit_ray<R: Rng + ?Sized>(&self, dx: f32, dy: f32, rng: &mut R) -> Ray {
        let (lx, ly) = sampler::UnitDisk.sample(rng);
        let offset = self.x * (lx * self.lens_radius) + self.y * (ly * self.lens_radius);
        let target = self.lower_left + self.horizontal * dx + self.vertical * dy;
        Ray::new(self.origin + offset, target - self.origin - offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_camera(aperture: f32) -> Camera {
        Camera::new(
            P3::new(0.0, 0.0, 2.0),
            P3::new(0.0, 0.0, -1.0),
            V3::new(0.0, 1.0, 0.0),
            90.0,
            1.0,
            aperture,
        )
    }

    #[test]
    fn basis_is_orthonormal() {
        let (x, y, z) = test_camera(0.0).basis();
        for v in &[x, y, z] {
            assert!((v.norm() - 1.0).abs() < 1e-5);
        }
        assert!(x.dot(&y).abs() < 1e-6);
        assert!(y.dot(&z).abs() < 1e-6);
        assert!(z.dot(&x).abs() < 1e-6);
    }

    #[test]
    fn zero_aperture_rays_start_at_the_camera() {
        let camera = test_camera(0.0);
        let mut rng = SmallRng::seed_from_u64(1);
        let ray = camera.emit_ray(0.1, 0.9, &mut rng);
        assert_eq!(ray.origin, P3::new(0.0, 0.0, 2.0));
    }

    #[test]
    fn center_ray_points_at_the_target() {
        let camera = test_camera(0.0);
        let mut rng = SmallRng::seed_from_u64(1);
        let ray = camera.emit_ray(0.5, 0.5, &mut rng);
        let expected = V3::new(0.0, 0.0, -1.0);
        assert!((ray.dir.normalize() - expected).norm() < 1e-5);
    }

    #[test]
    fn lens_offsets_stay_within_the_aperture() {
        let camera = test_camera(0.5);
        let mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..200 {
            let ray = camera.emit_ray(0.5, 0.5, &mut rng);
            let offset = ray.origin - P3::new(0.0, 0.0, 2.0);
            assert!(offset.norm() <= 0.25 + 1e-5);
            // the offset lies in the lens plane
            assert!(offset.dot(&camera.basis().2).abs() < 1e-6);
        }
    }
}
