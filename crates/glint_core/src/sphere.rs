//! Sphere primitive.

use crate::shape::{Shape, RAY_EPSILON};
use glint_math::{Ray, Vec3};

/// A sphere described by center and radius.
pub struct Sphere {
    center: Vec3,
    radius: f32,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Shape for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        let oc = ray.origin - self.center;
        let a = ray.direction.length_squared();
        let b = ray.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - a * c;
        // Near-zero discriminants are grazing rays; treat them as misses
        if discriminant < RAY_EPSILON {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let t1 = (-b - sqrtd) / a;
        let t2 = (-b + sqrtd) / a;

        // Smaller positive root, or the larger one when the origin is
        // inside the sphere
        if t1 > RAY_EPSILON {
            Some(t1)
        } else if t2 > RAY_EPSILON {
            Some(t2)
        } else {
            None
        }
    }

    fn normal(&self, point: Vec3) -> Vec3 {
        (point - self.center) / self.radius
    }
}
