//! The recursive trace function: shading and compositing.

use glint_core::{Color, Scene, AMBIENT_SCALE};
use glint_math::{reflect, refract, Ray, Vec3};

/// Depth fog range along -Z: hits at `near` are unfogged, hits at `far`
/// are fully blended to white.
#[derive(Debug, Clone, Copy)]
pub struct Fog {
    pub near: f32,
    pub far: f32,
}

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Recursion ceiling for reflection/refraction/transparency bounces
    pub max_depth: u32,
    /// Color returned when a ray hits nothing
    pub background: Color,
    /// Linear depth fog, or None to disable
    pub fog: Option<Fog>,
    /// Summed-channel color delta above which a cell's sub-samples are
    /// rendered separately
    pub divergence_threshold: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: 5,
            background: Color::ONE,
            fog: Some(Fog {
                near: -40.0,
                far: -200.0,
            }),
            divergence_threshold: 0.2,
        }
    }
}

/// Compute the color seen by a ray.
///
/// Recursion depth is the sole work bound: every reflective, refractive
/// and transparent branch re-enters at `depth + 1` and stops recursing at
/// `max_depth`, where only local shading applies. Contributions are
/// additive and unclamped; an object carrying several flags stacks them
/// all.
pub fn trace(scene: &Scene, ray: &Ray, depth: u32, config: &RenderConfig) -> Color {
    let Some(hit) = scene.closest_hit(ray) else {
        return config.background;
    };
    let object = &scene.objects[hit.index];

    // Displayed color is a pure function of object and hit point
    let base = object.surface_color(hit.point);
    let normal = object.shape.normal(hit.point);

    let mut color = object
        .material
        .lighting(base, normal, scene.light, -ray.direction, hit.point);

    if let Some(fog) = config.fog {
        let t = (hit.point.z - fog.near) / (fog.far - fog.near);
        color = (1.0 - t) * color + t * Color::ONE;
    }

    // Shadow ray toward the light; an occluder strictly before the light
    // attenuates by its own material, special branches first
    let light_vec = scene.light - hit.point;
    let light_dist = light_vec.length();
    let shadow_ray = Ray::new(hit.point, light_vec / light_dist);
    if let Some(shadow_hit) = scene.closest_hit(&shadow_ray) {
        if shadow_hit.dist < light_dist {
            let occluder = &scene.objects[shadow_hit.index].material;
            color = if occluder.reflective && occluder.refractive {
                (0.4 * occluder.reflectivity + 0.4 * occluder.refraction_coeff + 0.2) * color
            } else if occluder.reflective {
                (0.8 * occluder.reflectivity + 0.2) * color
            } else if occluder.refractive {
                (0.8 * occluder.refraction_coeff + 0.2) * color
            } else if occluder.transparent {
                (0.8 * occluder.transparency + 0.2) * color
            } else {
                // Hard shadow: ambient-only view of the surface itself,
                // replacing the shaded color
                AMBIENT_SCALE * base
            };
        }
    }

    if object.material.refractive && depth < config.max_depth {
        let eta = 1.0 / object.material.refractive_index;
        let refr_dir = refract(ray.direction.normalize(), normal, eta);
        if refr_dir != Vec3::ZERO {
            // Walk the transmitted ray to the exit point and bend it back
            // out through the same object's normal there
            let refr_ray = Ray::new(hit.point, refr_dir);
            if let Some(exit) = scene.closest_hit(&refr_ray) {
                let exit_normal = object.shape.normal(exit.point);
                let exit_dir = refract(refr_dir, -exit_normal, 1.0 / eta);
                let exit_ray = Ray::new(exit.point, exit_dir);
                let refracted = trace(scene, &exit_ray, depth + 1, config);
                color += object.material.refraction_coeff * refracted;
            }
        }
    }

    if object.material.reflective && depth < config.max_depth {
        let refl_dir = reflect(ray.direction.normalize(), normal);
        let refl_ray = Ray::new(hit.point, refl_dir);
        let reflected = trace(scene, &refl_ray, depth + 1, config);
        color += object.material.reflectivity * reflected;
    }

    if object.material.transparent && depth < config.max_depth {
        // Straight pass-through, not refracted
        let through_ray = Ray::new(hit.point, ray.direction);
        let transmitted = trace(scene, &through_ray, depth + 1, config);
        color += object.material.transparency * transmitted;
    }

    color
}
