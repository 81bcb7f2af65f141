// Copyright 2026 the KidiCode Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

use crate::modes::WrapMode;

/// One of the four backdrop tiles, named by its cell in the 2×2 layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileCorner {
    /// Starts at the viewport origin.
    TopLeft,
    /// Starts one viewport width to the right.
    TopRight,
    /// Starts one viewport height down.
    BottomLeft,
    /// Starts one viewport width to the right and one height down.
    BottomRight,
}

impl TileCorner {
    /// All corners, in the order tiles are built and rendered.
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// Returns the canonical position of this tile for a viewport of `size`.
    ///
    /// The four home positions are `(0, 0)`, `(W, 0)`, `(0, H)` and `(W, H)`.
    #[must_use]
    pub fn home(self, size: Size) -> Point {
        match self {
            Self::TopLeft => Point::ZERO,
            Self::TopRight => Point::new(size.width, 0.0),
            Self::BottomLeft => Point::new(0.0, size.height),
            Self::BottomRight => Point::new(size.width, size.height),
        }
    }

    /// Stable label for hosts that tag visual elements, e.g. `"topLeft"`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::TopLeft => "topLeft",
            Self::TopRight => "topRight",
            Self::BottomLeft => "bottomLeft",
            Self::BottomRight => "bottomRight",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::TopLeft => 0,
            Self::TopRight => 1,
            Self::BottomLeft => 2,
            Self::BottomRight => 3,
        }
    }
}

/// Positions of the four backdrop tiles, in pixels relative to the
/// viewport's top-left corner.
///
/// Positions roam roughly `(-2W, 2W)` × `(-2H, 2H)`; they are not clamped to
/// the visible area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileSet {
    positions: [Point; 4],
}

impl TileSet {
    /// Creates a tile set in the canonical corner layout for `size`.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            positions: TileCorner::ALL.map(|corner| corner.home(size)),
        }
    }

    /// Snaps every tile back to its home position for `size`.
    pub fn reset(&mut self, size: Size) {
        *self = Self::new(size);
    }

    /// Returns the position of one tile.
    #[must_use]
    pub fn position(&self, corner: TileCorner) -> Point {
        self.positions[corner.index()]
    }

    /// Overrides the position of one tile.
    ///
    /// Normal operation only moves tiles through [`TileSet::advance`]; this is
    /// for hosts restoring a saved scroll offset.
    pub fn set_position(&mut self, corner: TileCorner, pos: Point) {
        self.positions[corner.index()] = pos;
    }

    /// Iterates `(corner, position)` pairs in [`TileCorner::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (TileCorner, Point)> + '_ {
        TileCorner::ALL
            .into_iter()
            .map(|corner| (corner, self.position(corner)))
    }

    /// Moves every tile by `velocity * dt` and wraps it per axis.
    ///
    /// `size` must have a non-zero width and height; callers check this.
    /// Returns how many axis corrections were applied across all tiles.
    pub fn advance(&mut self, velocity: Vec2, dt: f64, size: Size, mode: WrapMode) -> usize {
        let step = velocity * dt;
        let mut wraps = 0;
        for pos in &mut self.positions {
            let (x, wrapped_x) = mode.wrap(pos.x + step.x, velocity.x, size.width);
            let (y, wrapped_y) = mode.wrap(pos.y + step.y, velocity.y, size.height);
            *pos = Point::new(x, y);
            wraps += usize::from(wrapped_x) + usize::from(wrapped_y);
        }
        wraps
    }
}
