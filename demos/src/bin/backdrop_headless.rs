// Copyright 2026 the KidiCode Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plays a backdrop scene without a browser and logs tile placements.
//!
//! ```text
//! cargo run -p kidicode_demos --bin backdrop_headless -- demos/scenes/space.json -vv
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use kidicode_demos::{SceneConfig, run_scene};
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Debug, Parser)]
#[command(name = "backdrop_headless", about = "Simulate a scrolling KidiCode backdrop")]
struct Cli {
    /// Path to a JSON scene file
    #[arg(value_name = "SCENE")]
    scene: PathBuf,

    /// Override the number of frames to simulate
    #[arg(long, value_name = "COUNT")]
    frames: Option<u32>,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbosity: u8) -> Result<()> {
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("kidicode_demos={level}").parse()?)
        .add_directive(format!("kidicode_backdrop={level}").parse()?);
    fmt().with_env_filter(filter).with_target(true).init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let mut scene = SceneConfig::from_json_file(&cli.scene)
        .with_context(|| format!("preparing scene from {}", cli.scene.display()))?;
    if let Some(frames) = cli.frames {
        scene.frames = frames;
    }

    let tiler = run_scene(&scene);
    for placement in tiler.surface().placements() {
        info!(
            tile = placement.corner.label(),
            x = placement.offset.x,
            y = placement.offset.y,
            width = placement.size.width,
            height = placement.size.height,
            "final placement"
        );
    }
    Ok(())
}
