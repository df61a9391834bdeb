//! Reflection and refraction vector helpers (GLSL semantics).

use crate::Vec3;

/// Reflect a vector about a normal.
///
/// Same as GLSL `reflect`: `v` is the incoming direction, `n` the unit
/// surface normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract a vector through a surface.
///
/// Same as GLSL `refract`: `n` points from the transmitting medium toward
/// the incident medium, `eta` is the ratio of the incoming IOR over the
/// transmitting IOR. Returns the zero vector on total internal reflection.
#[inline]
pub fn refract(v: Vec3, n: Vec3, eta: f32) -> Vec3 {
    let d = n.dot(v);
    let k = 1.0 - eta * eta * (1.0 - d * d);
    if k < 0.0 {
        Vec3::ZERO
    } else {
        v * eta - n * (eta * d + k.sqrt())
    }
}
