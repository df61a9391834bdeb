//! Glint core - scene model for a Whitted-style ray tracer.
//!
//! This crate provides:
//!
//! - **Primitives**: `Sphere`, `Plane`, `Cylinder`, `Cone` behind the
//!   closed `Shape` trait
//! - **Materials**: Phong-style lighting with reflective, refractive and
//!   transparent records
//! - **Surfaces**: procedural surface patterns (texture, checker, stripes)
//! - **Scene**: the ordered object list and its closest-hit resolver

mod shape;
pub use shape::{Shape, RAY_EPSILON};

mod sphere;
pub use sphere::Sphere;

mod plane;
pub use plane::Plane;

mod cylinder;
pub use cylinder::Cylinder;

mod cone;
pub use cone::Cone;

mod material;
pub use material::{Color, Material, AMBIENT_SCALE};

mod surface;
pub use surface::Surface;

mod texture;
pub use texture::{Texture, TextureError};

mod scene;
pub use scene::{RayHit, Scene, SceneObject};

/// Re-export math types used throughout the scene model.
pub use glint_math::{Ray, Vec3};
