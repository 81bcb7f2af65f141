// Copyright 2026 the KidiCode Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between tiling state and whatever actually draws the tiles.

use kurbo::{Point, Size};

use crate::corner::TileCorner;

/// Final visual state of one tile, as pushed to a [`TileSurface`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TilePlacement {
    /// Which tile this is.
    pub corner: TileCorner,
    /// Translation from the viewport origin, rounded to whole pixels.
    pub offset: Point,
    /// Tile size; always exactly the viewport size.
    pub size: Size,
}

impl TilePlacement {
    /// Builds a placement, rounding `pos` to the nearest whole pixel.
    #[must_use]
    pub fn new(corner: TileCorner, pos: Point, size: Size) -> Self {
        Self {
            corner,
            offset: pos.round(),
            size,
        }
    }
}

/// Host-side visual representation of the four backdrop tiles.
///
/// A [`crate::BackdropTiler`] owns its surface and drives it:
/// - [`TileSurface::build_tiles`] when a new image is bound,
/// - [`TileSurface::clear_tiles`] before a different image is bound or when
///   the image is cleared,
/// - [`TileSurface::place_tile`] once per tile whenever tiles are laid out or
///   advanced.
///
/// Surfaces are cosmetic. Implementations should swallow host failures rather
/// than surface them.
pub trait TileSurface {
    /// Handle identifying a backdrop image, typically a URL.
    ///
    /// Two equal handles are treated as the same image: rebinding is a no-op.
    type Image: PartialEq;

    /// Creates the four tile elements showing `image`.
    fn build_tiles(&mut self, image: &Self::Image);

    /// Discards the tile elements, if any.
    fn clear_tiles(&mut self);

    /// Applies one tile's position and size.
    fn place_tile(&mut self, placement: TilePlacement);
}

/// A surface that draws nothing. Useful for headless state and tests.
impl TileSurface for () {
    type Image = ();

    fn build_tiles(&mut self, _image: &Self::Image) {}

    fn clear_tiles(&mut self) {}

    fn place_tile(&mut self, _placement: TilePlacement) {}
}

impl<S: TileSurface + ?Sized> TileSurface for &mut S {
    type Image = S::Image;

    fn build_tiles(&mut self, image: &Self::Image) {
        (**self).build_tiles(image);
    }

    fn clear_tiles(&mut self) {
        (**self).clear_tiles();
    }

    fn place_tile(&mut self, placement: TilePlacement) {
        (**self).place_tile(placement);
    }
}
