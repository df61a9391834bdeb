//! Procedural surface patterns.
//!
//! The displayed color of an object is a pure function of the surface
//! variant and the hit point. Nothing here writes back into scene state,
//! so identical rays always observe the same color and the tracer can run
//! in parallel.

use std::f32::consts::PI;
use std::sync::Arc;

use crate::material::Color;
use crate::texture::Texture;
use glint_math::Vec3;

/// Surface pattern capability, attached to an object at construction.
#[derive(Clone)]
pub enum Surface {
    /// The material's base color everywhere.
    Solid,
    /// 2D texture lookup via spherical theta/phi parameterization around
    /// `center`/`radius`. Coordinates outside (0, 1) fall back to the
    /// base color.
    Textured {
        texture: Arc<Texture>,
        center: Vec3,
        radius: f32,
    },
    /// World-space rectangular chequerboard in x/z.
    Checker {
        cell: f32,
        offset: Vec3,
        even: Color,
        odd: Color,
    },
    /// Tilted stripe bands from a slanted y/z combination.
    Stripes {
        period: f32,
        even: Color,
        odd: Color,
    },
}

impl Surface {
    /// Displayed color at a surface point, given the material base color.
    pub fn color_at(&self, base: Color, point: Vec3) -> Color {
        match self {
            Surface::Solid => base,
            Surface::Textured {
                texture,
                center,
                radius,
            } => {
                let theta = ((point.x - center.x) / radius).acos();
                let phi = (-(point.y - center.y) / radius).acos();
                let s = theta / PI;
                let t = phi / PI;
                if s > 0.0 && s < 1.0 && t > 0.0 && t < 1.0 {
                    texture.sample(s, t)
                } else {
                    base
                }
            }
            Surface::Checker {
                cell,
                offset,
                even,
                odd,
            } => {
                let ix = ((point.x - offset.x) / cell) as i32;
                let iz = ((point.z - offset.z) / cell) as i32;
                // Matching parity picks the even color
                if (ix % 2 == 0) == (iz % 2 == 0) {
                    *even
                } else {
                    *odd
                }
            }
            Surface::Stripes { period, even, odd } => {
                let band = ((point.y * 2.0 / 3.0_f32.sqrt() + point.z) / period) as i32;
                if band % 2 == 0 {
                    *even
                } else {
                    *odd
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_passes_base_through() {
        let c = Surface::Solid.color_at(Color::new(0.3, 0.4, 0.5), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(c, Color::new(0.3, 0.4, 0.5));
    }

    #[test]
    fn test_checker_parity() {
        let surf = Surface::Checker {
            cell: 5.0,
            offset: Vec3::ZERO,
            even: Color::new(0.4, 0.7, 0.8),
            odd: Color::new(0.8, 0.8, 0.0),
        };

        let even = surf.color_at(Color::ONE, Vec3::new(1.0, 0.0, 1.0));
        assert_eq!(even, Color::new(0.4, 0.7, 0.8));

        // One cell over in x flips the parity
        let odd = surf.color_at(Color::ONE, Vec3::new(6.0, 0.0, 1.0));
        assert_eq!(odd, Color::new(0.8, 0.8, 0.0));

        // One cell over in both axes restores it
        let even2 = surf.color_at(Color::ONE, Vec3::new(6.0, 0.0, 6.0));
        assert_eq!(even2, Color::new(0.4, 0.7, 0.8));
    }

    #[test]
    fn test_stripes_alternate() {
        let surf = Surface::Stripes {
            period: 20.0,
            even: Color::new(0.4, 0.0, 0.2),
            odd: Color::new(0.4, 0.7, 0.8),
        };

        let a = surf.color_at(Color::ONE, Vec3::new(0.0, 0.0, 10.0));
        let b = surf.color_at(Color::ONE, Vec3::new(0.0, 0.0, 30.0));
        assert_eq!(a, Color::new(0.4, 0.0, 0.2));
        assert_eq!(b, Color::new(0.4, 0.7, 0.8));
    }

    #[test]
    fn test_textured_front_hemisphere() {
        let surf = Surface::Textured {
            texture: Arc::new(Texture::solid_color(Vec3::new(0.0, 1.0, 0.0))),
            center: Vec3::new(0.0, 0.0, -10.0),
            radius: 2.0,
        };

        // A point on the equator maps inside (0, 1) x (0, 1)
        let c = surf.color_at(Color::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -8.0));
        assert_eq!(c, Color::new(0.0, 1.0, 0.0));

        // The +x pole has theta = 0: outside the open interval, base color
        let c = surf.color_at(Color::new(1.0, 0.0, 0.0), Vec3::new(2.0, 0.0, -10.0));
        assert_eq!(c, Color::new(1.0, 0.0, 0.0));
    }
}
