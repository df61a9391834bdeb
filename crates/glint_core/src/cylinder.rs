//! Finite capped cylinder primitive, axis-aligned to +Y.

use crate::shape::{Shape, RAY_EPSILON};
use glint_math::{Ray, Vec3};

/// A vertical cylinder with its base at `center`, extending `height` up
/// the Y axis. The top is capped by a disc; the bottom is open.
pub struct Cylinder {
    center: Vec3,
    radius: f32,
    height: f32,
}

impl Cylinder {
    /// Create a new cylinder.
    pub fn new(center: Vec3, radius: f32, height: f32) -> Self {
        Self {
            center,
            radius,
            height,
        }
    }

    fn top(&self) -> f32 {
        self.center.y + self.height
    }
}

impl Shape for Cylinder {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        let d = ray.direction;
        let dx = ray.origin.x - self.center.x;
        let dz = ray.origin.z - self.center.z;
        let top = self.top();

        // The quadratic is radial: the y components drop out
        let a = d.x * d.x + d.z * d.z;

        if a < 1e-8 {
            // Axis-parallel ray: only the top cap can be hit
            if dx * dx + dz * dz <= self.radius * self.radius && d.y.abs() > 1e-8 {
                let t = (top - ray.origin.y) / d.y;
                if t > RAY_EPSILON {
                    return Some(t);
                }
            }
            return None;
        }

        let b = d.x * dx + d.z * dz;
        let c = dx * dx + dz * dz - self.radius * self.radius;
        let delta = b * b - a * c;
        // Near-zero discriminants are grazing rays; treat them as misses
        if delta < RAY_EPSILON {
            return None;
        }

        let sqrtd = delta.sqrt();
        let mut t1 = (-b - sqrtd) / a;
        let mut t2 = (-b + sqrtd) / a;
        let y1 = ray.origin.y + t1 * d.y;
        let y2 = ray.origin.y + t2 * d.y;

        // Both side hits above the cap: y is linear in t, so the ray never
        // dips into the finite part
        if y1 > top && y2 > top {
            return None;
        }
        // One root above the cap: that crossing happens through the cap
        // disc instead, so substitute the cap-plane distance
        if y1 > top {
            t1 = (top - ray.origin.y) / d.y;
        } else if y2 > top {
            t2 = (top - ray.origin.y) / d.y;
        }

        let (lo, hi) = if t1 < t2 { (t1, t2) } else { (t2, t1) };
        if lo > RAY_EPSILON {
            Some(lo)
        } else if hi > RAY_EPSILON {
            Some(hi)
        } else {
            None
        }
    }

    fn normal(&self, point: Vec3) -> Vec3 {
        let dx = point.x - self.center.x;
        let dz = point.z - self.center.z;
        // Inside the radial threshold the point is on the cap
        if dx * dx + dz * dz < self.radius * self.radius - 0.01 {
            Vec3::Y
        } else {
            // Radial side normal with the vertical component masked out
            Vec3::new(dx / self.radius, 0.0, dz / self.radius)
        }
    }
}
