use crate::scene::Scene;
use crate::*;

use log::warn;
use rand::Rng;

/// Radiance carried back along `ray`, evaluated as a loop over scatter
/// events with a running throughput product and collected emission.
pub fn radiance<R: Rng + ?Sized>(scene: &Scene, ray: &Ray, max_depth: usize, rng: &mut R) -> RGB {
    let mut ray = ray.clone();
    let mut throughput = RGB::all(1.0);
    let mut collected = RGB::all(0.0);

    for _depth in 0..=max_depth {
        // the near bound skips self-intersections with the last surface
        let hit = match scene.test_hit(&ray, 1e-3, std::f32::MAX / 2.0) {
            Some(hit) => hit,
            None => return collected + scene.background(&ray) * throughput,
        };

        let scatter = hit.material.scatter(&ray, &hit.hit, rng);
        collected += scatter.emitted * throughput;

        match scatter.ray {
            Some(next) => {
                throughput *= scatter.attenuation;
                if !throughput.is_finite() {
                    warn!("throughput is not finite, dropping path");
                    break;
                }
                ray = next;
            }
            // absorbed
            None => break,
        }
    }
    // the depth budget ran out; everything beyond contributes black
    collected
}
