//! Shape trait for ray-primitive intersection.

use glint_math::{Ray, Vec3};

/// Minimum accepted intersection distance.
///
/// Distances at or below this are treated as misses so a secondary ray
/// never re-hits the surface it was spawned from (shadow/reflection acne).
pub const RAY_EPSILON: f32 = 1e-3;

/// A geometric primitive that rays can intersect.
///
/// The primitive set is closed: exactly `Sphere`, `Plane`, `Cylinder` and
/// `Cone` implement this trait.
pub trait Shape: Send + Sync {
    /// Smallest parametric distance `t > RAY_EPSILON` at which the ray
    /// meets the surface, or `None` if there is no valid intersection.
    ///
    /// `t` is parametric in the ray's direction vector, which is not
    /// required to be normalized.
    fn intersect(&self, ray: &Ray) -> Option<f32>;

    /// Outward unit surface normal at a point assumed to lie on the
    /// surface.
    fn normal(&self, point: Vec3) -> Vec3;
}
