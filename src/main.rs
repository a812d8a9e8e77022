//! Constellation headless runner
//!
//! Drives the animation against a tessellating surface at a simulated display
//! rate and reports what each frame would upload.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use constellation::options::{EdgeStrategy, Options};
use constellation::renderer::VertexSurface;
use constellation::sim::{Constellation, Viewport};
use constellation::Animation;

#[derive(Debug, Parser)]
#[command(name = "constellation", about = "Run the constellation animation headless")]
struct Args {
    /// Viewport width (pixels)
    #[arg(long, default_value_t = 1920.0)]
    width: f32,
    /// Viewport height (pixels)
    #[arg(long, default_value_t = 1080.0)]
    height: f32,
    /// RNG seed
    #[arg(long, default_value_t = 0x5eed)]
    seed: u64,
    /// Frames to render
    #[arg(long, default_value_t = 600)]
    frames: u32,
    /// Simulated display refresh rate (Hz)
    #[arg(long, default_value_t = 144.0)]
    fps: f32,
    /// JSON options file (browser option names)
    #[arg(long)]
    options: Option<PathBuf>,
    /// Use the grid index for the proximity graph
    #[arg(long)]
    grid: bool,
}

fn load_options(args: &Args) -> Result<Options> {
    let mut options = match &args.options {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            Options::from_json(&json).with_context(|| format!("parsing {}", path.display()))?
        }
        None => Options::default(),
    };
    if args.grid {
        options.edge_strategy = EdgeStrategy::Grid;
    }
    options.validate()?;
    Ok(options)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let options = load_options(&args)?;
    let viewport = Viewport::new(args.width, args.height);

    log::info!(
        "Viewport {}x{}, seed {}, edges via {}",
        viewport.width,
        viewport.height,
        args.seed,
        options.edge_strategy.as_str()
    );

    let mut animation = Animation::new(Constellation::new(viewport, options, args.seed));
    let mut surface = VertexSurface::new();
    let frame_time = 1.0 / args.fps.max(1.0);

    let mut total_edges = 0usize;
    let mut total_ticks = 0u64;
    for frame in 0..args.frames {
        total_ticks += u64::from(animation.update(frame_time));
        let stats = animation.render(&mut surface);
        total_edges += stats.edges;
        log::debug!(
            "frame {frame}: {} dots, {} edges, {} vertices",
            stats.dots,
            stats.edges,
            surface.vertex_count()
        );
    }

    let frames = args.frames.max(1) as usize;
    log::info!(
        "{} frames, {} ticks, {} dots, {:.1} edges/frame, last frame {} KiB",
        args.frames,
        total_ticks,
        animation.constellation().dots().len(),
        total_edges as f64 / frames as f64,
        surface.as_bytes().len() / 1024
    );
    Ok(())
}
