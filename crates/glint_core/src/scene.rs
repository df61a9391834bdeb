//! Scene container and closest-hit resolution.

use crate::material::{Color, Material};
use crate::shape::Shape;
use crate::surface::Surface;
use glint_math::{Ray, Vec3};

/// A renderable object: geometry plus material plus surface pattern.
pub struct SceneObject {
    pub shape: Box<dyn Shape>,
    pub material: Material,
    pub surface: Surface,
}

impl SceneObject {
    /// Create an object with a solid-colored surface.
    pub fn new(shape: Box<dyn Shape>, material: Material) -> Self {
        Self {
            shape,
            material,
            surface: Surface::Solid,
        }
    }

    /// Attach a procedural surface pattern.
    pub fn with_surface(mut self, surface: Surface) -> Self {
        self.surface = surface;
        self
    }

    /// Displayed surface color at a hit point.
    pub fn surface_color(&self, point: Vec3) -> Color {
        self.surface.color_at(self.material.color, point)
    }
}

/// Record of the nearest ray-scene intersection.
#[derive(Debug, Clone, Copy)]
pub struct RayHit {
    /// Index of the intersected object in the scene list
    pub index: usize,
    /// Intersection point in world space
    pub point: Vec3,
    /// Parametric distance along the ray direction
    pub dist: f32,
}

/// An ordered list of scene objects plus the single point light.
///
/// Scene topology is immutable once tracing starts; the light is a bare
/// position with implicit full-intensity white.
pub struct Scene {
    pub objects: Vec<SceneObject>,
    pub light: Vec3,
}

impl Scene {
    /// Create an empty scene lit from the given position.
    pub fn new(light: Vec3) -> Self {
        Self {
            objects: Vec::new(),
            light,
        }
    }

    /// Append an object. Insertion order is the object's index in hits.
    pub fn add(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Find the nearest positive-distance intersection along a ray.
    ///
    /// A pure query over the full object list; it is re-invoked
    /// independently for every primary, shadow, reflected, refracted and
    /// transmitted ray.
    pub fn closest_hit(&self, ray: &Ray) -> Option<RayHit> {
        let mut closest: Option<RayHit> = None;

        for (index, object) in self.objects.iter().enumerate() {
            if let Some(dist) = object.shape.intersect(ray) {
                if closest.map_or(true, |c| dist < c.dist) {
                    closest = Some(RayHit {
                        index,
                        point: ray.at(dist),
                        dist,
                    });
                }
            }
        }

        closest
    }
}
