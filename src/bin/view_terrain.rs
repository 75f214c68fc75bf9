//! Interactive voxel-space terrain viewer.
//!
//! Controls  ←/→ ↑/↓ = pan  Z/X = turn  Esc = quit
//!
//! ```bash
//! cargo run --release -- --color-map C1Wlarge.bmp --height-map D1large.bmp
//! cargo run --release -- --snapshot frame.bmp
//! ```

use anyhow::Context;
use clap::Parser;
use glam::vec2;
use minifb::{Key, Window, WindowOptions};
use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use voxel_terrain::{
    assets::{load_terrain, save_snapshot},
    engine::{RenderParams, TerrainRasterizer},
    renderer::Software,
    sim::{InputFlags, apply_input},
    world::CameraState,
};

/// CLI options handled via `clap` derive.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Opts {
    /// Surface colour bitmap
    #[arg(long, value_name = "FILE", default_value = "C1Wlarge.bmp")]
    color_map: PathBuf,

    /// Elevation bitmap (palette index / blue channel = height)
    #[arg(long, value_name = "FILE", default_value = "D1large.bmp")]
    height_map: PathBuf,

    #[arg(long, default_value_t = 600)]
    width: usize,

    #[arg(long, default_value_t = 400)]
    height: usize,

    /// Eye altitude in height-map units
    #[arg(long, default_value_t = RenderParams::default().camera_height)]
    camera_height: f32,

    /// Screen row of the horizon
    #[arg(long, default_value_t = RenderParams::default().horizon)]
    horizon: f32,

    /// Vertical scale of the projection
    #[arg(long, default_value_t = RenderParams::default().vertical_scale)]
    scale: f32,

    /// Farthest depth slice
    #[arg(long, default_value_t = RenderParams::default().max_distance)]
    max_distance: f32,

    /// Starting camera position and heading
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    x: f32,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    y: f32,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    heading: f32,

    #[arg(long, default_value_t = 60)]
    fps: usize,

    /// Render a single frame to this BMP and exit (no window)
    #[arg(long, value_name = "FILE")]
    snapshot: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let opts = Opts::parse();

    if opts.width == 0 || opts.height == 0 {
        anyhow::bail!("screen size must be positive, got {}x{}", opts.width, opts.height);
    }

    // ─────────── load maps ────────────
    let terrain = load_terrain(&opts.color_map, &opts.height_map).with_context(|| {
        format!(
            "cannot load terrain from {} + {}",
            opts.color_map.display(),
            opts.height_map.display()
        )
    })?;

    let params = RenderParams {
        camera_height: opts.camera_height,
        horizon: opts.horizon,
        vertical_scale: opts.scale,
        max_distance: opts.max_distance,
    };
    let mut camera = CameraState::new(vec2(opts.x, opts.y), opts.heading);
    let mut rasterizer = TerrainRasterizer::new(params);
    log::info!("{}x{} screen, {:?}", opts.width, opts.height, rasterizer.params());
    let mut renderer = Software::default();
    let (w, h) = (opts.width, opts.height);

    // ─────────── headless snapshot ────
    if let Some(path) = &opts.snapshot {
        let mut result = Ok(());
        rasterizer.draw_frame(&mut renderer, w, h, &camera, &terrain, |fb, w, h| {
            result = save_snapshot(path, w, h, fb);
        });
        result.with_context(|| format!("cannot write snapshot {}", path.display()))?;
        log::info!("snapshot written to {}", path.display());
        return Ok(());
    }

    let mut win = Window::new("Terrain Renderer", w, h, WindowOptions::default())?;
    win.set_target_fps(opts.fps);

    // ────────────────── benchmarking state ──────────────────────────────
    let mut acc_time = Duration::ZERO; // cumulated render time
    let mut acc_frames = 0usize; // frames in the current window
    let mut last_print = Instant::now(); // when we printed last

    while win.is_open() && !win.is_key_down(Key::Escape) {
        /* input is applied between frames, never during one */
        apply_input(&mut camera, InputFlags::from_keys(|k| win.is_key_down(k)));

        let t0 = Instant::now();
        let mut presented = Ok(());
        rasterizer.draw_frame(&mut renderer, w, h, &camera, &terrain, |fb, w, h| {
            acc_time += t0.elapsed();
            acc_frames += 1;
            presented = win.update_with_buffer(fb, w, h);
        });
        presented?;

        if last_print.elapsed() >= Duration::from_secs(3) && acc_frames > 0 {
            let avg_ms = acc_time.as_secs_f64() * 1000.0 / acc_frames as f64;
            log::info!(
                "avg render: {:.2} ms  ({:.1} FPS)  camera {:?}",
                avg_ms,
                1000.0 / avg_ms,
                camera
            );
            acc_time = Duration::ZERO;
            acc_frames = 0;
            last_print = Instant::now();
        }
    }
    Ok(())
}
