//! Bounded polygonal plane primitive (triangle or quad).

use crate::shape::{Shape, RAY_EPSILON};
use glint_math::{Ray, Vec3};

/// A flat convex polygon given by 3 or 4 coplanar vertices.
///
/// The surface normal is fixed at construction (flat shading) and points
/// along the cross product of the first two edges.
pub struct Plane {
    vertices: Vec<Vec3>,
    normal: Vec3,
}

impl Plane {
    /// Create a triangle from three vertices.
    pub fn triangle(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self::from_vertices(vec![a, b, c])
    }

    /// Create a quad from four coplanar vertices in winding order.
    pub fn quad(a: Vec3, b: Vec3, c: Vec3, d: Vec3) -> Self {
        Self::from_vertices(vec![a, b, c, d])
    }

    fn from_vertices(vertices: Vec<Vec3>) -> Self {
        let normal = (vertices[1] - vertices[0])
            .cross(vertices[2] - vertices[0])
            .normalize();
        Self { vertices, normal }
    }

    /// Same-side containment test against every polygon edge.
    fn contains(&self, point: Vec3) -> bool {
        let n = self.vertices.len();
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            if (b - a).cross(point - a).dot(self.normal) < 0.0 {
                return false;
            }
        }
        true
    }
}

impl Shape for Plane {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        let denom = ray.direction.dot(self.normal);
        // Ray parallel to the plane
        if denom.abs() < 1e-6 {
            return None;
        }

        let t = (self.vertices[0] - ray.origin).dot(self.normal) / denom;
        if t <= RAY_EPSILON {
            return None;
        }

        if self.contains(ray.at(t)) {
            Some(t)
        } else {
            None
        }
    }

    fn normal(&self, _point: Vec3) -> Vec3 {
        self.normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor_quad() -> Plane {
        Plane::quad(
            Vec3::new(-10.0, -5.0, -10.0),
            Vec3::new(10.0, -5.0, -10.0),
            Vec3::new(10.0, -5.0, -50.0),
            Vec3::new(-10.0, -5.0, -50.0),
        )
    }

    #[test]
    fn test_plane_hit_inside() {
        let plane = floor_quad();
        // Straight down onto the middle of the quad
        let ray = Ray::new(Vec3::new(0.0, 5.0, -30.0), Vec3::new(0.0, -1.0, 0.0));

        let t = plane.intersect(&ray).unwrap();
        assert!((t - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_plane_miss_outside_bounds() {
        let plane = floor_quad();
        // Same plane equation, but the hit point is outside the quad
        let ray = Ray::new(Vec3::new(50.0, 5.0, -30.0), Vec3::new(0.0, -1.0, 0.0));

        assert!(plane.intersect(&ray).is_none());
    }

    #[test]
    fn test_plane_miss_parallel() {
        let plane = floor_quad();
        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(1.0, 0.0, 0.0));

        assert!(plane.intersect(&ray).is_none());
    }

    #[test]
    fn test_triangle_containment() {
        let tri = Plane::triangle(
            Vec3::new(-1.0, 0.0, -5.0),
            Vec3::new(1.0, 0.0, -5.0),
            Vec3::new(0.0, 2.0, -5.0),
        );

        let hit = Ray::new(Vec3::new(0.0, 0.5, 0.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(tri.intersect(&hit).is_some());

        // Inside the bounding box of the triangle but outside the edges
        let miss = Ray::new(Vec3::new(-0.9, 1.5, 0.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(tri.intersect(&miss).is_none());
    }

    #[test]
    fn test_plane_fixed_normal() {
        let plane = floor_quad();
        let n = plane.normal(Vec3::new(3.0, -5.0, -20.0));
        assert!((n.length() - 1.0).abs() < 1e-6);
        // Normal is vertical for a horizontal quad
        assert!(n.x.abs() < 1e-6 && n.z.abs() < 1e-6);
    }
}
