// Copyright 2026 the KidiCode Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Point, Size, Vec2};

use crate::corner::{TileCorner, TileSet};
use crate::modes::WrapMode;
use crate::scroll::{ScrollDirection, scroll_rate};
use crate::surface::{TilePlacement, TileSurface};

/// Scrolling backdrop state bound to a [`TileSurface`].
///
/// `BackdropTiler` keeps:
/// - the bound image handle, if any,
/// - four tile positions while an image is bound,
/// - the measured viewport size,
/// - a velocity in pixels per second,
///
/// and pushes the rounded tile positions to its surface at the end of every
/// [`layout`](Self::layout) and [`advance`](Self::advance).
///
/// All methods are infallible. Degenerate state (no image, zero-sized
/// viewport, zero velocity) turns operations into no-ops.
pub struct BackdropTiler<S: TileSurface> {
    surface: S,
    image: Option<S::Image>,
    tiles: Option<TileSet>,
    viewport: Size,
    velocity: Vec2,
    wrap_mode: WrapMode,
}

impl<S> fmt::Debug for BackdropTiler<S>
where
    S: TileSurface + fmt::Debug,
    S::Image: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackdropTiler")
            .field("surface", &self.surface)
            .field("image", &self.image)
            .field("tiles", &self.tiles)
            .field("viewport", &self.viewport)
            .field("velocity", &self.velocity)
            .field("wrap_mode", &self.wrap_mode)
            .finish()
    }
}

impl<S: TileSurface> BackdropTiler<S> {
    /// Creates a tiler with no image, a zero-sized viewport and zero velocity.
    #[must_use]
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            image: None,
            tiles: None,
            viewport: Size::ZERO,
            velocity: Vec2::ZERO,
            wrap_mode: WrapMode::default(),
        }
    }

    /// Returns the surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns the surface mutably.
    ///
    /// Changes made to the surface directly are overwritten by the next
    /// layout or advance.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Consumes the tiler, returning the surface.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Returns the bound image, if any.
    #[must_use]
    pub fn image(&self) -> Option<&S::Image> {
        self.image.as_ref()
    }

    /// Binds a new backdrop image, or clears it with `None`.
    ///
    /// Binding the image that is already bound does nothing. Any other call
    /// discards the current tiles and stops scrolling; with `Some(image)`,
    /// four fresh tiles are built in the corner layout for the current
    /// viewport and rendered.
    pub fn set_image(&mut self, image: Option<S::Image>) {
        if self.image == image {
            return;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(bound = image.is_some(), "backdrop image changed");

        if self.tiles.take().is_some() {
            self.surface.clear_tiles();
        }
        self.velocity = Vec2::ZERO;
        self.image = image;
        if let Some(image) = &self.image {
            self.surface.build_tiles(image);
            self.tiles = Some(TileSet::new(self.viewport));
            self.render();
        }
    }

    /// Returns the last recorded viewport size.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Records a new viewport size and snaps tiles to the corner layout.
    ///
    /// Call this whenever the hosting container is measured, including the
    /// first time. Without a bound image the size is only recorded. A zero
    /// width or height is recorded as-is; tiles then collapse to zero size
    /// until a non-zero layout arrives.
    pub fn layout(&mut self, size: Size) {
        self.viewport = size;
        let Some(tiles) = &mut self.tiles else {
            return;
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(width = size.width, height = size.height, "backdrop layout");

        tiles.reset(size);
        self.render();
    }

    /// Returns the current velocity in pixels per second.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Sets the velocity directly, in pixels per second.
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    /// Sets the speed along one axis from a block command.
    ///
    /// `speed_percent` maps linearly onto [`crate::MAX_SCROLL_SPEED`]; values
    /// outside `0..=100` extrapolate. The other axis keeps its speed.
    pub fn set_scroll(&mut self, direction: ScrollDirection, speed_percent: f64) {
        self.velocity = direction.apply(self.velocity, scroll_rate(speed_percent));
    }

    /// Stops scrolling. Tiles keep their current positions.
    pub fn stop(&mut self) {
        self.velocity = Vec2::ZERO;
    }

    /// Returns `true` if the velocity is non-zero.
    #[must_use]
    pub fn is_scrolling(&self) -> bool {
        self.velocity != Vec2::ZERO
    }

    /// Returns the wrap mode.
    #[must_use]
    pub fn wrap_mode(&self) -> WrapMode {
        self.wrap_mode
    }

    /// Sets how tiles that cross the viewport edge are brought back.
    pub fn set_wrap_mode(&mut self, mode: WrapMode) {
        self.wrap_mode = mode;
    }

    /// Returns the current (unrounded) position of one tile, or `None` when
    /// no image is bound.
    #[must_use]
    pub fn tile_position(&self, corner: TileCorner) -> Option<Point> {
        self.tiles.as_ref().map(|tiles| tiles.position(corner))
    }

    /// Returns the tile set, or `None` when no image is bound.
    #[must_use]
    pub fn tiles(&self) -> Option<&TileSet> {
        self.tiles.as_ref()
    }

    /// Returns the tile set mutably, or `None` when no image is bound.
    ///
    /// Edits show up on the surface with the next layout or advance.
    pub fn tiles_mut(&mut self) -> Option<&mut TileSet> {
        self.tiles.as_mut()
    }

    /// Advances the backdrop by one frame of `dt` seconds.
    ///
    /// Does nothing when stopped, when no image is bound, or while either
    /// viewport dimension is zero. Otherwise every tile moves by
    /// `velocity * dt` and then wraps per axis according to the
    /// [`WrapMode`], and the result is rendered.
    pub fn advance(&mut self, dt: f64) {
        if self.velocity == Vec2::ZERO {
            return;
        }
        if self.viewport.width == 0.0 || self.viewport.height == 0.0 {
            return;
        }
        let Some(tiles) = &mut self.tiles else {
            return;
        };
        let wraps = tiles.advance(self.velocity, dt, self.viewport, self.wrap_mode);
        #[cfg(feature = "tracing")]
        if wraps > 0 {
            tracing::trace!(wraps, dt, "backdrop tiles wrapped");
        }
        #[cfg(not(feature = "tracing"))]
        let _ = wraps;

        self.render();
    }

    /// Returns a snapshot of the tiler state for debugging overlays.
    #[must_use]
    pub fn debug_info(&self) -> BackdropDebugInfo {
        BackdropDebugInfo {
            viewport: self.viewport,
            velocity: self.velocity,
            has_image: self.image.is_some(),
            wrap_mode: self.wrap_mode,
            tiles: self.tiles,
        }
    }

    fn render(&mut self) {
        let Some(tiles) = &self.tiles else {
            return;
        };
        for (corner, pos) in tiles.iter() {
            self.surface
                .place_tile(TilePlacement::new(corner, pos, self.viewport));
        }
    }
}

/// Debug snapshot of a [`BackdropTiler`] state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackdropDebugInfo {
    /// Last recorded viewport size.
    pub viewport: Size,
    /// Velocity in pixels per second.
    pub velocity: Vec2,
    /// Whether an image is bound.
    pub has_image: bool,
    /// Wrap mode used by [`BackdropTiler::advance`].
    pub wrap_mode: WrapMode,
    /// Unrounded tile positions while an image is bound.
    pub tiles: Option<TileSet>,
}
