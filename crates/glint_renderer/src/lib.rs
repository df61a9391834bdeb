//! Glint renderer - recursive Whitted-style ray tracing.
//!
//! The pipeline: the sampler loop casts primary rays per cell, `trace`
//! composites local shading with shadow attenuation and recursive
//! reflection/refraction/transparency, and the framebuffer collects the
//! unclamped colors for display conversion.

mod trace;
mod camera;
mod sampler;
mod framebuffer;

pub use trace::{trace, Fog, RenderConfig};
pub use camera::Camera;
pub use sampler::{render, sample_cell, CellSample};
pub use framebuffer::{color_to_rgba, ImageBuffer};

/// Re-export the scene model and math types for downstream users.
pub use glint_core::{Color, Scene};
pub use glint_math::{Ray, Vec3};
