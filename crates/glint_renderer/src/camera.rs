//! Image-plane camera for primary ray generation.

use glint_math::{Ray, Vec3};

/// Camera casting rays from an eye point through a rectangular image
/// plane `edist` in front of it along -Z.
///
/// The plane is divided into `cells` x `cells` sample cells; the sampler
/// addresses sub-cell positions by fractional offset.
#[derive(Debug, Clone)]
pub struct Camera {
    eye: Vec3,
    half_width: f32,
    half_height: f32,
    edist: f32,
    cells: u32,
}

impl Camera {
    /// Create a camera with the default plane: 20x20 world units at
    /// distance 40, 500 cells per side.
    pub fn new() -> Self {
        Self {
            eye: Vec3::ZERO,
            half_width: 10.0,
            half_height: 10.0,
            edist: 40.0,
            cells: 500,
        }
    }

    /// Set the eye position.
    pub fn with_eye(mut self, eye: Vec3) -> Self {
        self.eye = eye;
        self
    }

    /// Set the image-plane extents (world units) and distance.
    pub fn with_plane(mut self, width: f32, height: f32, edist: f32) -> Self {
        self.half_width = width * 0.5;
        self.half_height = height * 0.5;
        self.edist = edist;
        self
    }

    /// Set the cell resolution per side.
    pub fn with_cells(mut self, cells: u32) -> Self {
        self.cells = cells;
        self
    }

    /// Cells per side.
    pub fn cells(&self) -> u32 {
        self.cells
    }

    /// Build the primary ray through fractional offset (fx, fy) of cell
    /// (i, j). Cell (0, 0) is the bottom-left of the image plane; fx and
    /// fy are in [0, 1] across the cell.
    pub fn subpixel_ray(&self, i: u32, j: u32, fx: f32, fy: f32) -> Ray {
        let cell_w = 2.0 * self.half_width / self.cells as f32;
        let cell_h = 2.0 * self.half_height / self.cells as f32;
        let xp = -self.half_width + (i as f32 + fx) * cell_w;
        let yp = -self.half_height + (j as f32 + fy) * cell_h;

        let direction = Vec3::new(xp, yp, -self.edist).normalize();
        Ray::new(self.eye, direction)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_ray_points_down_axis() {
        let camera = Camera::new().with_cells(100);
        let ray = camera.subpixel_ray(50, 50, 0.0, 0.0);

        assert!(ray.direction.z < 0.0);
        assert!(ray.direction.x.abs() < 1e-6);
        assert!(ray.direction.y.abs() < 1e-6);
        assert!((ray.direction.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_corner_rays_diverge() {
        let camera = Camera::new().with_cells(100);
        let bottom_left = camera.subpixel_ray(0, 0, 0.0, 0.0);
        let top_right = camera.subpixel_ray(99, 99, 1.0, 1.0);

        assert!(bottom_left.direction.x < 0.0);
        assert!(bottom_left.direction.y < 0.0);
        assert!(top_right.direction.x > 0.0);
        assert!(top_right.direction.y > 0.0);
    }

    #[test]
    fn test_subpixel_offsets_stay_inside_cell() {
        let camera = Camera::new().with_cells(100);
        let lo = camera.subpixel_ray(10, 10, 0.25, 0.25);
        let hi = camera.subpixel_ray(10, 10, 0.75, 0.75);
        let next = camera.subpixel_ray(11, 10, 0.25, 0.25);

        // Offsets move within the cell but never past the next one
        assert!(lo.direction.x < hi.direction.x);
        assert!(hi.direction.x < next.direction.x);
    }

    #[test]
    fn test_eye_offset() {
        let eye = Vec3::new(1.0, 2.0, 3.0);
        let camera = Camera::new().with_eye(eye);
        let ray = camera.subpixel_ray(0, 0, 0.5, 0.5);

        assert_eq!(ray.origin, eye);
    }
}
