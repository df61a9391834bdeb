//! Adaptive supersampling and the render loop.
//!
//! Each cell is probed with four sub-pixel rays; cells whose samples
//! agree are re-traced once through the center (cheap path), cells whose
//! samples diverge keep all four as quadrant sub-cells. Rows render in
//! parallel with rayon - shading is pure, so no synchronization is
//! needed.

use rayon::prelude::*;

use crate::camera::Camera;
use crate::framebuffer::ImageBuffer;
use crate::trace::{trace, RenderConfig};
use glint_core::{Color, Scene};

/// The resolved color(s) for one image cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellSample {
    /// All four sub-samples agreed; one centered ray colors the cell.
    Smooth(Color),
    /// Sub-samples diverged; quadrant order is
    /// [bottom-left, bottom-right, top-left, top-right].
    Detailed([Color; 4]),
}

/// Summed absolute channel difference between two colors.
fn divergence(a: Color, b: Color) -> f32 {
    (a.x - b.x).abs() + (a.y - b.y).abs() + (a.z - b.z).abs()
}

/// Sample one cell with the adaptive two-tier policy.
///
/// The four probe rays start at depth 2, reserving recursion headroom;
/// the smooth-path center ray starts at depth 1 and may recurse deeper.
pub fn sample_cell(
    scene: &Scene,
    camera: &Camera,
    config: &RenderConfig,
    i: u32,
    j: u32,
) -> CellSample {
    let c1 = trace(scene, &camera.subpixel_ray(i, j, 0.25, 0.25), 2, config);
    let c2 = trace(scene, &camera.subpixel_ray(i, j, 0.75, 0.25), 2, config);
    let c3 = trace(scene, &camera.subpixel_ray(i, j, 0.25, 0.75), 2, config);
    let c4 = trace(scene, &camera.subpixel_ray(i, j, 0.75, 0.75), 2, config);

    let threshold = config.divergence_threshold;
    if divergence(c1, c2) > threshold
        || divergence(c1, c3) > threshold
        || divergence(c1, c4) > threshold
    {
        CellSample::Detailed([c1, c2, c3, c4])
    } else {
        let center = trace(scene, &camera.subpixel_ray(i, j, 0.5, 0.5), 1, config);
        CellSample::Smooth(center)
    }
}

/// Render the scene to a framebuffer of 2x2 pixels per cell.
///
/// Smooth cells fill their 2x2 block with one color; detailed cells map
/// each quadrant sample to its own pixel.
pub fn render(scene: &Scene, camera: &Camera, config: &RenderConfig) -> ImageBuffer {
    let cells = camera.cells();
    let mut image = ImageBuffer::new(cells * 2, cells * 2);

    log::debug!("rendering {}x{} cells", cells, cells);

    let rows: Vec<Vec<CellSample>> = (0..cells)
        .into_par_iter()
        .map(|j| {
            (0..cells)
                .map(|i| sample_cell(scene, camera, config, i, j))
                .collect()
        })
        .collect();

    for (j, row) in rows.iter().enumerate() {
        // Cell rows run bottom-up, image rows top-down
        let top = 2 * (cells - 1 - j as u32);
        for (i, sample) in row.iter().enumerate() {
            let x = 2 * i as u32;
            match *sample {
                CellSample::Smooth(c) => {
                    image.set(x, top, c);
                    image.set(x + 1, top, c);
                    image.set(x, top + 1, c);
                    image.set(x + 1, top + 1, c);
                }
                CellSample::Detailed([bl, br, tl, tr]) => {
                    image.set(x, top, tl);
                    image.set(x + 1, top, tr);
                    image.set(x, top + 1, bl);
                    image.set(x + 1, top + 1, br);
                }
            }
        }
    }

    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::{Material, Plane, SceneObject, Vec3};

    fn wall_scene() -> Scene {
        // A wall filling the whole view so every primary ray hits it
        let mut scene = Scene::new(Vec3::new(0.0, 0.0, 0.0));
        scene.add(SceneObject::new(
            Box::new(Plane::quad(
                Vec3::new(-100.0, -100.0, -60.0),
                Vec3::new(100.0, -100.0, -60.0),
                Vec3::new(100.0, 100.0, -60.0),
                Vec3::new(-100.0, 100.0, -60.0),
            )),
            Material::new(Color::new(0.5, 0.5, 0.5)).without_specular(),
        ));
        scene
    }

    fn no_fog() -> RenderConfig {
        RenderConfig {
            fog: None,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_scene_is_smooth_background() {
        let scene = Scene::new(Vec3::ZERO);
        let camera = Camera::new().with_cells(4);
        let config = no_fog();

        // Zero divergence must resolve via the single-center-ray path
        let sample = sample_cell(&scene, &camera, &config, 1, 1);
        assert_eq!(sample, CellSample::Smooth(config.background));
    }

    #[test]
    fn test_edge_cell_is_detailed() {
        // Background on one side, a dark wall edge through the cell
        let mut scene = Scene::new(Vec3::new(0.0, 0.0, 0.0));
        scene.add(SceneObject::new(
            Box::new(Plane::quad(
                Vec3::new(6.0, -100.0, -60.0),
                Vec3::new(100.0, -100.0, -60.0),
                Vec3::new(100.0, 100.0, -60.0),
                Vec3::new(6.0, 100.0, -60.0),
            )),
            Material::new(Color::new(0.0, 0.0, 0.0)).without_specular(),
        ));
        let camera = Camera::new().with_cells(2);
        let config = no_fog();

        // The wall edge passes between the two probe columns of cell
        // (1, 0): one side sees white background, the other the dark wall
        let sample = sample_cell(&scene, &camera, &config, 1, 0);
        assert!(matches!(sample, CellSample::Detailed(_)));
    }

    #[test]
    fn test_render_fills_every_pixel() {
        let scene = wall_scene();
        let camera = Camera::new().with_cells(4);
        let config = no_fog();

        let image = render(&scene, &camera, &config);
        assert_eq!(image.width, 8);
        assert_eq!(image.height, 8);

        // A uniform wall under a head-on light shades smoothly everywhere
        for y in 0..image.height {
            for x in 0..image.width {
                let c = image.get(x, y);
                assert!(c.x > 0.0 && c.x.is_finite());
            }
        }
    }

    #[test]
    fn test_detailed_quadrants_land_in_place() {
        // Wall covering only the left half of the view: leftmost cells
        // are wall, rightmost are background
        let mut scene = Scene::new(Vec3::new(0.0, 0.0, 0.0));
        scene.add(SceneObject::new(
            Box::new(Plane::quad(
                Vec3::new(-100.0, -100.0, -60.0),
                Vec3::new(0.0, -100.0, -60.0),
                Vec3::new(0.0, 100.0, -60.0),
                Vec3::new(-100.0, 100.0, -60.0),
            )),
            Material::new(Color::new(0.0, 0.0, 0.0)).without_specular(),
        ));
        let camera = Camera::new().with_cells(2);
        let config = no_fog();

        let image = render(&scene, &camera, &config);
        // Far left pixel shows the dark wall, far right the background
        assert!(image.get(0, 0).x < 0.5);
        assert!((image.get(3, 0) - config.background).length() < 1e-5);
    }
}
