//! Material record and local Phong shading.

use glint_math::{reflect, Vec3};

/// Color type alias (RGB values typically 0-1, unclamped)
pub type Color = Vec3;

/// Ambient light scale applied to the base color.
pub const AMBIENT_SCALE: f32 = 0.2;

/// Surface material: base color plus the lighting and compositing flags
/// consumed by the tracer.
///
/// The reflective, refractive and transparent records are independently
/// combinable; their coefficients are energy-conserving weights only by
/// convention and are not validated.
#[derive(Debug, Clone)]
pub struct Material {
    /// Base color before any procedural surface pattern
    pub color: Color,
    /// Phong specular highlight toggle
    pub specular: bool,
    /// Phong exponent
    pub shininess: f32,
    pub reflective: bool,
    pub reflectivity: f32,
    pub refractive: bool,
    pub refraction_coeff: f32,
    pub refractive_index: f32,
    pub transparent: bool,
    pub transparency: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::ONE,
            specular: true,
            shininess: 50.0,
            reflective: false,
            reflectivity: 0.0,
            refractive: false,
            refraction_coeff: 0.0,
            refractive_index: 1.0,
            transparent: false,
            transparency: 0.0,
        }
    }
}

impl Material {
    /// Create a plain diffuse material with the given base color.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    /// Disable the specular highlight.
    pub fn without_specular(mut self) -> Self {
        self.specular = false;
        self
    }

    /// Enable mirror reflection with the given coefficient.
    pub fn with_reflectivity(mut self, coeff: f32) -> Self {
        self.reflective = true;
        self.reflectivity = coeff;
        self
    }

    /// Enable refraction with the given coefficient and index of
    /// refraction.
    pub fn with_refractivity(mut self, coeff: f32, index: f32) -> Self {
        self.refractive = true;
        self.refraction_coeff = coeff;
        self.refractive_index = index;
        self
    }

    /// Enable straight pass-through transparency.
    pub fn with_transparency(mut self, coeff: f32) -> Self {
        self.transparent = true;
        self.transparency = coeff;
        self
    }

    /// Local shading: ambient + Lambertian diffuse + Phong specular.
    ///
    /// `base` is the displayed surface color at the hit point (after any
    /// procedural pattern), `view` the direction from the hit point back
    /// toward the viewer. The result is non-negative and unclamped;
    /// display mapping is the framebuffer's concern.
    pub fn lighting(
        &self,
        base: Color,
        normal: Vec3,
        light_pos: Vec3,
        view: Vec3,
        hit: Vec3,
    ) -> Color {
        let light_dir = (light_pos - hit).normalize();
        let l_dot_n = light_dir.dot(normal).max(0.0);

        let mut specular_term = 0.0;
        if self.specular {
            let refl = reflect(-light_dir, normal);
            let r_dot_v = refl.dot(view.normalize()).max(0.0);
            specular_term = r_dot_v.powf(self.shininess);
        }

        AMBIENT_SCALE * base + l_dot_n * base + specular_term * Color::ONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lighting_facing_light() {
        let mat = Material::new(Color::new(1.0, 0.0, 0.0)).without_specular();
        let hit = Vec3::ZERO;
        let normal = Vec3::Y;
        let light = Vec3::new(0.0, 10.0, 0.0);

        // Light dead ahead: ambient + full diffuse
        let c = mat.lighting(mat.color, normal, light, Vec3::Y, hit);
        assert!((c.x - 1.2).abs() < 1e-5);
        assert_eq!(c.y, 0.0);
    }

    #[test]
    fn test_lighting_back_face_is_ambient_only() {
        let mat = Material::new(Color::new(0.5, 0.5, 0.5)).without_specular();
        let hit = Vec3::ZERO;
        let normal = Vec3::Y;
        let light = Vec3::new(0.0, -10.0, 0.0);

        let c = mat.lighting(mat.color, normal, light, Vec3::Y, hit);
        assert!((c - AMBIENT_SCALE * mat.color).length() < 1e-5);
    }

    #[test]
    fn test_specular_highlight_is_white() {
        let mat = Material::new(Color::new(0.0, 0.0, 0.0));
        let hit = Vec3::ZERO;
        let normal = Vec3::Y;
        let light = Vec3::new(0.0, 10.0, 0.0);

        // View along the mirror direction of the light: full highlight
        let c = mat.lighting(mat.color, normal, light, Vec3::Y, hit);
        assert!((c.x - 1.0).abs() < 1e-4);
        assert!((c.y - 1.0).abs() < 1e-4);
        assert!((c.z - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_lighting_unclamped() {
        // Diffuse plus highlight can exceed 1; clamping is not our job
        let mat = Material::new(Color::new(1.0, 1.0, 1.0));
        let c = mat.lighting(
            mat.color,
            Vec3::Y,
            Vec3::new(0.0, 10.0, 0.0),
            Vec3::Y,
            Vec3::ZERO,
        );
        assert!(c.x > 1.0);
    }

    #[test]
    fn test_material_flags_combinable() {
        let mat = Material::new(Color::ONE)
            .with_reflectivity(0.3)
            .with_refractivity(0.9, 1.01)
            .with_transparency(0.4);

        assert!(mat.reflective && mat.refractive && mat.transparent);
        assert_eq!(mat.reflectivity, 0.3);
        assert_eq!(mat.refraction_coeff, 0.9);
        assert_eq!(mat.refractive_index, 1.01);
        assert_eq!(mat.transparency, 0.4);
    }
}
