// Copyright 2026 the KidiCode Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for `BackdropTiler` through its public API.
//!
//! A recording surface captures every call the tiler makes, so these cover
//! both the tile arithmetic and what reaches the host.

use kidicode_backdrop::{
    BackdropTiler, ScrollDirection, TileCorner, TilePlacement, TileSet, TileSurface,
};
use kurbo::{Point, Size, Vec2};

#[derive(Debug, Clone, PartialEq)]
enum SurfaceCall {
    Build(&'static str),
    Clear,
    Place(TilePlacement),
}

#[derive(Debug, Default)]
struct RecordingSurface {
    calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    fn take(&mut self) -> Vec<SurfaceCall> {
        std::mem::take(&mut self.calls)
    }
}

impl TileSurface for RecordingSurface {
    type Image = &'static str;

    fn build_tiles(&mut self, image: &Self::Image) {
        self.calls.push(SurfaceCall::Build(image));
    }

    fn clear_tiles(&mut self) {
        self.calls.push(SurfaceCall::Clear);
    }

    fn place_tile(&mut self, placement: TilePlacement) {
        self.calls.push(SurfaceCall::Place(placement));
    }
}

fn laid_out(size: Size) -> BackdropTiler<RecordingSurface> {
    let mut tiler = BackdropTiler::new(RecordingSurface::default());
    tiler.set_image(Some("stage.png"));
    tiler.layout(size);
    tiler.surface_mut().take();
    tiler
}

fn x_of(tiler: &BackdropTiler<RecordingSurface>, corner: TileCorner) -> f64 {
    tiler.tile_position(corner).map(|p| p.x).unwrap_or(f64::NAN)
}

#[test]
fn rebinding_the_same_image_is_a_no_op() {
    let mut tiler = laid_out(Size::new(100.0, 100.0));
    tiler.set_scroll(ScrollDirection::Right, 50.0);
    tiler.advance(0.1);
    let tiles = tiler.tiles().copied();
    tiler.surface_mut().take();

    tiler.set_image(Some("stage.png"));

    assert!(tiler.surface().calls.is_empty());
    assert_eq!(tiler.tiles().copied(), tiles);
    // Scrolling is not reset either.
    assert_eq!(tiler.velocity(), Vec2::new(100.0, 0.0));
}

#[test]
fn layout_snaps_to_corner_layout() {
    let mut tiler = laid_out(Size::new(100.0, 100.0));
    tiler.set_scroll(ScrollDirection::Down, 100.0);
    tiler.advance(0.3);

    tiler.layout(Size::new(640.0, 360.0));

    assert_eq!(
        tiler.tiles().copied(),
        Some(TileSet::new(Size::new(640.0, 360.0)))
    );
    let expected = [
        (TileCorner::TopLeft, Point::new(0.0, 0.0)),
        (TileCorner::TopRight, Point::new(640.0, 0.0)),
        (TileCorner::BottomLeft, Point::new(0.0, 360.0)),
        (TileCorner::BottomRight, Point::new(640.0, 360.0)),
    ];
    let calls = tiler.surface_mut().take();
    assert_eq!(calls.len(), 4);
    for (call, (corner, offset)) in calls.into_iter().zip(expected) {
        assert_eq!(
            call,
            SurfaceCall::Place(TilePlacement {
                corner,
                offset,
                size: Size::new(640.0, 360.0),
            })
        );
    }
    // Resizing does not stop scrolling.
    assert!(tiler.is_scrolling());
}

#[test]
fn stopped_backdrop_stays_put() {
    let mut tiler = laid_out(Size::new(100.0, 100.0));
    let before = tiler.tiles().copied();

    for dt in [0.016, 1.0, 1_000.0] {
        tiler.advance(dt);
    }

    assert_eq!(tiler.tiles().copied(), before);
    assert!(tiler.surface().calls.is_empty());
}

#[test]
fn rightward_scroll_wraps_past_width() {
    let mut tiler = laid_out(Size::new(100.0, 100.0));
    tiler.set_scroll(ScrollDirection::Right, 100.0);
    tiler
        .tiles_mut()
        .unwrap()
        .set_position(TileCorner::TopLeft, Point::new(90.0, 0.0));

    tiler.advance(0.1);

    // 90 + 20 = 110 >= 100, so 110 - 200.
    assert_eq!(x_of(&tiler, TileCorner::TopLeft), -90.0);
}

#[test]
fn leftward_scroll_wraps_past_negative_width() {
    let mut tiler = laid_out(Size::new(100.0, 100.0));
    tiler.set_scroll(ScrollDirection::Left, 100.0);
    assert_eq!(tiler.velocity(), Vec2::new(-200.0, 0.0));
    tiler
        .tiles_mut()
        .unwrap()
        .set_position(TileCorner::TopLeft, Point::new(-90.0, 0.0));

    tiler.advance(0.1);

    // -90 - 20 = -110 <= -100, so -110 + 200.
    assert_eq!(x_of(&tiler, TileCorner::TopLeft), 90.0);
}

#[test]
fn speed_percent_maps_to_pixels_per_second() {
    let mut tiler = laid_out(Size::new(100.0, 100.0));
    tiler.set_scroll(ScrollDirection::Right, 50.0);
    assert_eq!(tiler.velocity().x, 100.0);
    assert_eq!(tiler.velocity().y, 0.0);

    tiler.set_scroll(ScrollDirection::Up, 25.0);
    assert_eq!(tiler.velocity(), Vec2::new(100.0, -50.0));
}

#[test]
fn zero_viewport_freezes_tiles() {
    let mut tiler = laid_out(Size::new(100.0, 100.0));
    tiler.set_scroll(ScrollDirection::Right, 100.0);
    tiler.layout(Size::ZERO);
    let before = tiler.tiles().copied();
    tiler.surface_mut().take();

    tiler.advance(1.0);

    assert_eq!(tiler.tiles().copied(), before);
    for (_, pos) in tiler.tiles().into_iter().flat_map(|tiles| tiles.iter()) {
        assert!(!pos.x.is_nan() && !pos.y.is_nan());
    }
    assert!(tiler.surface().calls.is_empty());

    // One zero dimension is enough.
    tiler.layout(Size::new(100.0, 0.0));
    let before = tiler.tiles().copied();
    tiler.advance(1.0);
    assert_eq!(tiler.tiles().copied(), before);
}

#[test]
fn clearing_the_image_removes_tiles_and_stops() {
    let mut tiler = laid_out(Size::new(100.0, 100.0));
    tiler.set_scroll(ScrollDirection::Right, 100.0);

    tiler.set_image(None);

    assert!(tiler.tiles().is_none());
    assert_eq!(tiler.velocity(), Vec2::ZERO);
    assert_eq!(tiler.surface_mut().take(), vec![SurfaceCall::Clear]);

    tiler.set_scroll(ScrollDirection::Right, 100.0);
    tiler.advance(0.5);
    tiler.layout(Size::new(50.0, 50.0));
    assert!(tiler.tiles().is_none());
    assert!(tiler.surface().calls.is_empty());
}

#[test]
fn switching_images_rebuilds_tiles() {
    let mut tiler = laid_out(Size::new(100.0, 80.0));
    tiler.set_scroll(ScrollDirection::Left, 100.0);
    tiler.advance(0.1);
    tiler.surface_mut().take();

    tiler.set_image(Some("space.png"));

    let calls = tiler.surface_mut().take();
    assert_eq!(calls[0], SurfaceCall::Clear);
    assert_eq!(calls[1], SurfaceCall::Build("space.png"));
    assert_eq!(calls.len(), 6);
    assert_eq!(tiler.image(), Some(&"space.png"));
    assert_eq!(tiler.velocity(), Vec2::ZERO);
    assert_eq!(
        tiler.tiles().copied(),
        Some(TileSet::new(Size::new(100.0, 80.0)))
    );
}

#[test]
fn placements_are_rounded_but_state_is_not() {
    let mut tiler = laid_out(Size::new(100.0, 100.0));
    tiler.set_scroll(ScrollDirection::Right, 1.0);

    // 2 px/s for 0.3 s.
    tiler.advance(0.3);

    let pos = tiler.tile_position(TileCorner::TopLeft).unwrap();
    assert!((pos.x - 0.6).abs() < 1e-9);
    let calls = tiler.surface_mut().take();
    assert_eq!(
        calls[0],
        SurfaceCall::Place(TilePlacement {
            corner: TileCorner::TopLeft,
            offset: Point::new(1.0, 0.0),
            size: Size::new(100.0, 100.0),
        })
    );
}

#[test]
fn vertical_wrap_uses_viewport_height() {
    // Wide stage: wrapping against the width would miss every crossing here.
    let size = Size::new(100.0, 50.0);

    let mut tiler = laid_out(size);
    tiler.set_scroll(ScrollDirection::Down, 100.0);
    tiler.advance(0.1);

    // 50 + 20 = 70 >= 50, so 70 - 100.
    assert_eq!(
        tiler.tile_position(TileCorner::BottomLeft),
        Some(Point::new(0.0, -30.0))
    );
    assert_eq!(
        tiler.tile_position(TileCorner::BottomRight),
        Some(Point::new(100.0, -30.0))
    );
    assert_eq!(
        tiler.tile_position(TileCorner::TopLeft),
        Some(Point::new(0.0, 20.0))
    );

    let mut tiler = laid_out(size);
    tiler.set_scroll(ScrollDirection::Up, 100.0);
    tiler
        .tiles_mut()
        .unwrap()
        .set_position(TileCorner::TopRight, Point::new(100.0, -40.0));
    tiler.advance(0.1);

    // -40 - 20 = -60 <= -50, so -60 + 100.
    assert_eq!(
        tiler.tile_position(TileCorner::TopRight),
        Some(Point::new(100.0, 40.0))
    );
    // 50 - 20 = 30 stays put.
    assert_eq!(
        tiler.tile_position(TileCorner::BottomLeft),
        Some(Point::new(0.0, 30.0))
    );
}
