// Copyright 2026 the Atlaslift Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless Atlaslift session.
//!
//! Loads a dataset, replays a scripted pointer path over a `vello_cpu` map,
//! lets each lift animation settle at 60 Hz, and writes the last frame as PNG.
//!
//! ```text
//! atlaslift_demo --dataset world.geojson --pointer geo:2.3,46.6 --out france.png
//! ```
//!
//! Set `RUST_LOG=atlaslift_viewer=debug,atlaslift_demo=info` to follow hover
//! changes.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use atlaslift_geo::{LonLat, Projection};
use atlaslift_viewer::{
    CpuSurface, DatasetSource, MapStatus, MapViewer, ViewerConfig, load_dataset,
};
use clap::Parser;
use kurbo::{Point, Size};
use png::{BitDepth, ColorType, Encoder};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// One host frame at 60 Hz.
const FRAME: Duration = Duration::from_micros(16_667);

#[derive(Parser, Debug)]
#[command(author, version, about = "Hover a world map headlessly and save the frame")]
struct Args {
    /// Dataset path or URL (overrides the config)
    #[arg(long)]
    dataset: Option<String>,

    /// TOML file with a viewer config
    #[arg(long)]
    config: Option<PathBuf>,

    /// Feature id to drop after loading; repeat for more (overrides the config)
    #[arg(long = "exclude")]
    excluded: Vec<String>,

    /// Keep every feature, ignoring configured exclusions
    #[arg(long, conflicts_with = "excluded")]
    keep_all: bool,

    /// Host viewport width; the surface is derived from it
    #[arg(long, default_value_t = 1280.0)]
    viewport_width: f64,

    /// Host viewport height; the surface is derived from it
    #[arg(long, default_value_t = 800.0)]
    viewport_height: f64,

    /// Pointer stop as `x,y` in surface pixels or `geo:lon,lat`; repeat in order
    #[arg(long = "pointer", value_parser = parse_target)]
    pointers: Vec<Target>,

    /// Output PNG for the final frame
    #[arg(long, default_value = "atlaslift.png")]
    out: PathBuf,

    /// Optional PNG dump of the hit surface
    #[arg(long)]
    hit_out: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum Target {
    Pixel(Point),
    Geo(LonLat),
}

fn parse_pair(text: &str) -> Result<(f64, f64), String> {
    let (a, b) = text
        .split_once(',')
        .ok_or_else(|| format!("expected two comma-separated numbers, got `{text}`"))?;
    let parse = |s: &str| {
        s.trim()
            .parse::<f64>()
            .map_err(|err| format!("`{s}`: {err}"))
    };
    Ok((parse(a)?, parse(b)?))
}

fn parse_target(text: &str) -> Result<Target, String> {
    match text.strip_prefix("geo:") {
        Some(rest) => parse_pair(rest).map(|(lon, lat)| Target::Geo(LonLat::new(lon, lat))),
        None => parse_pair(text).map(|(x, y)| Target::Pixel(Point::new(x, y))),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "session aborted");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => ViewerConfig::from_toml_path(path)?,
        None => ViewerConfig::default(),
    };
    if let Some(dataset) = &args.dataset {
        config.dataset.clone_from(dataset);
    }
    if args.keep_all {
        config.excluded_ids.clear();
    } else if !args.excluded.is_empty() {
        config.excluded_ids.clone_from(&args.excluded);
    }

    let source = DatasetSource::from_location(&config.dataset);
    let loaded = load_dataset(&source, &config.excluded_ids);
    let status = MapStatus::from_load(&loaded);
    if let Some(message) = status.message() {
        eprintln!("{message}");
    }
    let dataset = loaded?;

    let viewport = Size::new(args.viewport_width, args.viewport_height);
    let (width, height) = config.viewport.surface_size(viewport);
    info!(width, height, features = dataset.len(), "map ready");
    let mut viewer = MapViewer::new(dataset, CpuSurface::new(width, height), config)?;

    for target in &args.pointers {
        let pos = match *target {
            Target::Pixel(p) => p,
            Target::Geo(ll) => viewer
                .projection()
                .map_or(Point::new(-1.0, -1.0), |p| p.project(ll)),
        };
        if let Some(change) = viewer.pointer_move(pos) {
            let label = viewer.label();
            info!(
                ?change,
                label = %label.text,
                visible = label.visible,
                cursor = ?viewer.cursor(),
                "hover changed"
            );
        }
        let mut frames = 0_u32;
        while viewer.tick(FRAME) {
            frames += 1;
        }
        info!(x = pos.x, y = pos.y, frames, offset = viewer.hover_offset(), "settled");
    }

    let frame = viewer.surface_mut().to_rgba_bytes();
    write_png(&args.out, width, height, &frame)?;
    info!(path = %args.out.display(), "wrote frame");

    if let Some(path) = &args.hit_out {
        let hit: Vec<u8> = viewer
            .hit_surface()
            .pixels()
            .iter()
            .flat_map(|p| [p.r, p.g, p.b, p.a])
            .collect();
        write_png(path, width, height, &hit)?;
        info!(path = %path.display(), "wrote hit surface");
    }
    Ok(())
}

fn write_png(
    path: &Path,
    width: u16,
    height: u16,
    rgba: &[u8],
) -> Result<(), Box<dyn std::error::Error>> {
    let file = BufWriter::new(File::create(path)?);
    let mut encoder = Encoder::new(file, u32::from(width), u32::from(height));
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(rgba)?;
    Ok(())
}
