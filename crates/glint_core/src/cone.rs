//! Finite cone primitive, axis-aligned to +Y.

use crate::shape::{Shape, RAY_EPSILON};
use glint_math::{Ray, Vec3};

/// A vertical cone with a base of `radius` at `center`, tapering linearly
/// to an apex `height` above it.
pub struct Cone {
    center: Vec3,
    radius: f32,
    height: f32,
}

impl Cone {
    /// Create a new cone.
    pub fn new(center: Vec3, radius: f32, height: f32) -> Self {
        Self {
            center,
            radius,
            height,
        }
    }

    fn apex(&self) -> f32 {
        self.center.y + self.height
    }

    /// Taper slope: radius per unit of height below the apex.
    fn slope(&self) -> f32 {
        self.radius / self.height
    }

    fn in_height_band(&self, y: f32) -> bool {
        y >= self.center.y - 1e-4 && y <= self.apex() + 1e-4
    }
}

impl Shape for Cone {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        let d = ray.direction;
        let dx = ray.origin.x - self.center.x;
        let dz = ray.origin.z - self.center.z;
        let apex = self.apex();
        let k2 = self.slope() * self.slope();
        // Height below the apex, the term the radius scales with
        let u0 = apex - ray.origin.y;

        let a = d.x * d.x + d.z * d.z - k2 * d.y * d.y;
        let b = d.x * dx + d.z * dz + k2 * d.y * u0;
        let c = dx * dx + dz * dz - k2 * u0 * u0;

        if a.abs() < 1e-8 {
            // Ray parallel to the cone surface: the quadratic degenerates
            if b.abs() < 1e-8 {
                return None;
            }
            let t = -c / (2.0 * b);
            if t > RAY_EPSILON && self.in_height_band(ray.origin.y + t * d.y) {
                return Some(t);
            }
            return None;
        }

        let delta = b * b - a * c;
        if delta < 0.0 {
            return None;
        }

        let sqrtd = delta.sqrt();
        let t1 = (-b - sqrtd) / a;
        let t2 = (-b + sqrtd) / a;
        let (lo, hi) = if t1 < t2 { (t1, t2) } else { (t2, t1) };

        // Roots above the apex lie on the mirror cone, roots below the
        // base on the infinite extension; neither is a real surface point
        for t in [lo, hi] {
            if t > RAY_EPSILON && self.in_height_band(ray.origin.y + t * d.y) {
                return Some(t);
            }
        }
        None
    }

    fn normal(&self, point: Vec3) -> Vec3 {
        let dx = point.x - self.center.x;
        let dz = point.z - self.center.z;
        let k2 = self.slope() * self.slope();
        // Gradient of the implicit cone surface
        Vec3::new(dx, k2 * (self.apex() - point.y), dz).normalize()
    }
}
