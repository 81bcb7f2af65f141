// Copyright 2026 the KidiCode Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless backdrop scenes for demos.
//!
//! A scene file describes a stage size, a backdrop image and a list of scroll
//! blocks. [`run_scene`] plays it through a [`BackdropTiler`] at a fixed frame
//! rate and reports every tile placement through `tracing`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, ensure};
use kidicode_backdrop::{BackdropTiler, ScrollDirection, TilePlacement, TileSurface, WrapMode};
use kurbo::Size;
use serde::{Deserialize, Deserializer};
use tracing::{debug, info, trace};

/// One "scroll backdrop" block.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct ScrollBlock {
    /// `up`, `down`, `left` or `right`.
    #[serde(deserialize_with = "direction")]
    pub direction: ScrollDirection,
    /// Speed in percent of the maximum.
    pub speed: f64,
}

/// Wrap behavior as spelled in scene files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WrapSetting {
    /// [`WrapMode::SingleStep`].
    #[default]
    SingleStep,
    /// [`WrapMode::Periodic`].
    Periodic,
}

impl From<WrapSetting> for WrapMode {
    fn from(value: WrapSetting) -> Self {
        match value {
            WrapSetting::SingleStep => Self::SingleStep,
            WrapSetting::Periodic => Self::Periodic,
        }
    }
}

/// A headless backdrop scene.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneConfig {
    /// Backdrop image URL; `null` runs the scene without a backdrop.
    pub image: Option<String>,
    /// Stage width in pixels.
    pub width: f64,
    /// Stage height in pixels.
    pub height: f64,
    /// Number of frames to simulate.
    #[serde(default = "default_frames")]
    pub frames: u32,
    /// Simulated frame rate.
    #[serde(default = "default_fps")]
    pub fps: f64,
    /// Wrap behavior.
    #[serde(default)]
    pub wrap: WrapSetting,
    /// Scroll blocks, applied in order after the image is bound.
    #[serde(default)]
    pub scroll: Vec<ScrollBlock>,
}

fn default_frames() -> u32 {
    120
}

fn default_fps() -> f64 {
    60.0
}

fn direction<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ScrollDirection, D::Error> {
    let name = String::deserialize(deserializer)?;
    name.parse().map_err(serde::de::Error::custom)
}

impl SceneConfig {
    /// Parses a scene from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        let scene: Self = serde_json::from_str(text).context("parsing scene JSON")?;
        scene.validate()?;
        Ok(scene)
    }

    /// Reads and parses a scene file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("loading scene {}", path.display()))
    }

    /// Checks values the tiler would silently accept but a scene should not.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.fps.is_finite() && self.fps > 0.0,
            "fps must be positive, got {}",
            self.fps
        );
        ensure!(
            self.width >= 0.0 && self.height >= 0.0,
            "stage size must not be negative, got {}x{}",
            self.width,
            self.height
        );
        Ok(())
    }

    /// Duration of one simulated frame, in seconds.
    #[must_use]
    pub fn frame_step(&self) -> f64 {
        1.0 / self.fps
    }
}

/// A surface that reports tiles through `tracing` and keeps the last
/// placement of each tile.
#[derive(Debug, Default)]
pub struct LogSurface {
    placements: Vec<TilePlacement>,
    builds: usize,
}

impl LogSurface {
    /// Last placement of every tile, in render order.
    #[must_use]
    pub fn placements(&self) -> &[TilePlacement] {
        &self.placements
    }

    /// Number of times tiles were built.
    #[must_use]
    pub fn builds(&self) -> usize {
        self.builds
    }
}

impl TileSurface for LogSurface {
    type Image = String;

    fn build_tiles(&mut self, image: &Self::Image) {
        self.builds += 1;
        info!(image = %image, "building backdrop tiles");
    }

    fn clear_tiles(&mut self) {
        debug!("clearing backdrop tiles");
        self.placements.clear();
    }

    fn place_tile(&mut self, placement: TilePlacement) {
        trace!(
            tile = placement.corner.label(),
            x = placement.offset.x,
            y = placement.offset.y,
            "place"
        );
        match self
            .placements
            .iter_mut()
            .find(|p| p.corner == placement.corner)
        {
            Some(slot) => *slot = placement,
            None => self.placements.push(placement),
        }
    }
}

/// Plays `scene` for its configured number of frames.
pub fn run_scene(scene: &SceneConfig) -> BackdropTiler<LogSurface> {
    let mut tiler = BackdropTiler::new(LogSurface::default());
    tiler.set_wrap_mode(scene.wrap.into());
    tiler.layout(Size::new(scene.width, scene.height));
    tiler.set_image(scene.image.clone());
    for block in &scene.scroll {
        debug!(direction = %block.direction, speed = block.speed, "scroll block");
        tiler.set_scroll(block.direction, block.speed);
    }

    let dt = scene.frame_step();
    for _ in 0..scene.frames {
        tiler.advance(dt);
    }
    info!(
        frames = scene.frames,
        vx = tiler.velocity().x,
        vy = tiler.velocity().y,
        "scene finished"
    );
    tiler
}
