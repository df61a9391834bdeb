//! Glint command-line renderer.
//!
//! Renders the demo scene to a PNG:
//!
//! ```text
//! glint_cli [output.png] [--texture vase.png] [--cells 500]
//! ```

use std::sync::Arc;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use glint_core::{Texture, Vec3};
use glint_renderer::{render, Camera, RenderConfig};

mod scenes;

struct Args {
    output: String,
    texture: Option<String>,
    cells: u32,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        output: "render.png".to_string(),
        texture: None,
        cells: 500,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--texture" => {
                args.texture = Some(iter.next().context("--texture needs a path")?);
            }
            "--cells" => {
                let value = iter.next().context("--cells needs a number")?;
                args.cells = value.parse().context("--cells expects an integer")?;
            }
            "--help" | "-h" => {
                eprintln!("usage: glint_cli [output.png] [--texture path] [--cells n]");
                std::process::exit(0);
            }
            other if other.starts_with('-') => bail!("unknown option: {other}"),
            other => args.output = other.to_string(),
        }
    }

    Ok(args)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = parse_args()?;

    let texture = match &args.texture {
        Some(path) => Some(Arc::new(
            Texture::from_file(path).with_context(|| format!("loading texture {path}"))?,
        )),
        None => None,
    };

    let scene = scenes::demo_scene(texture);
    let camera = Camera::new()
        .with_eye(Vec3::ZERO)
        .with_plane(20.0, 20.0, 40.0)
        .with_cells(args.cells);
    let config = RenderConfig::default();

    log::info!(
        "rendering {} objects at {}x{} cells",
        scene.len(),
        args.cells,
        args.cells
    );

    let start = Instant::now();
    let image = render(&scene, &camera, &config);
    log::info!("rendered in {:.2}s", start.elapsed().as_secs_f32());

    image
        .save_png(&args.output)
        .with_context(|| format!("writing {}", args.output))?;
    log::info!("wrote {}", args.output);

    Ok(())
}
