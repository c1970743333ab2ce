use crate::*;

pub fn reflect(v: &V3, n: &V3) -> V3 {
    v - n * (2.0 * v.dot(n))
}

// Expects `v` and `n` to be unit vectors. The caller checks the critical
// angle; past it this produces a NaN direction.
pub fn refract(v: &V3, n: &V3, ratio: f32) -> V3 {
    let cos_theta = (-v).dot(n).min(1.0);
    let out_perp = (v + n * cos_theta) * ratio;
    let out_parallel = n * -(1.0 - out_perp.norm_squared()).abs().sqrt();
    out_perp + out_parallel
}

pub fn near_zero(v: &V3) -> bool {
    const EPS: f32 = 1e-8;
    v[0].abs() < EPS && v[1].abs() < EPS && v[2].abs() < EPS
}

// Maps a unit direction to spherical (u, v) in [0, 1]^2.
pub fn spherical_uv(n: &V3) -> (f32, f32) {
    use std::f32::consts::PI;
    let v = n[1].min(1.0).max(-1.0).acos() / PI;
    let u = ((-n[2]).atan2(n[0]) + PI) / (2.0 * PI);
    (u, v)
}
