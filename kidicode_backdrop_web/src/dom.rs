// Copyright 2026 the KidiCode Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use kidicode_backdrop::{
    BackdropTiler, FrameClock, ScrollDirection, TileCorner, TilePlacement, TileSurface, WrapMode,
};
use kurbo::Size;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use crate::style::{TileStyle, background_image_css};
use crate::tiles::build_all;

/// Renders backdrop tiles as `<div>` children of a container element.
#[derive(Debug)]
pub struct DomTileSurface {
    document: Document,
    container: HtmlElement,
    tiles: Vec<(TileCorner, HtmlElement)>,
}

impl DomTileSurface {
    /// Creates a surface that renders into `container`.
    ///
    /// The container is set to clip its content so wrapped tiles outside the
    /// viewport stay invisible.
    pub fn new(container: HtmlElement) -> Result<Self, JsValue> {
        let document = container
            .owner_document()
            .ok_or_else(|| JsValue::from_str("backdrop container is not attached to a document"))?;
        container.style().set_property("overflow", "hidden")?;
        Ok(Self {
            document,
            container,
            tiles: Vec::new(),
        })
    }

    /// Returns the container element.
    pub fn container(&self) -> &HtmlElement {
        &self.container
    }

    fn create_tile(&self, corner: TileCorner, image: &str) -> Result<HtmlElement, JsValue> {
        let tile: HtmlElement = self.document.create_element("div")?.dyn_into()?;
        tile.set_attribute("data-backdrop-tile", corner.label())?;
        let style = tile.style();
        style.set_property("position", "absolute")?;
        style.set_property("left", "0")?;
        style.set_property("top", "0")?;
        style.set_property("background-image", &background_image_css(image))?;
        style.set_property("background-size", "100% 100%")?;
        style.set_property("background-repeat", "no-repeat")?;
        style.set_property("pointer-events", "none")?;
        style.set_property("will-change", "transform")?;
        self.container.append_child(&tile)?;
        Ok(tile)
    }
}

impl TileSurface for DomTileSurface {
    type Image = String;

    fn build_tiles(&mut self, image: &Self::Image) {
        // A partial set would leave a permanent seam; keep all four or none.
        let tiles = build_all(|corner| self.create_tile(corner, image), |tile| tile.remove());
        self.tiles.extend(tiles);
    }

    fn clear_tiles(&mut self) {
        for (_, tile) in self.tiles.drain(..) {
            tile.remove();
        }
    }

    fn place_tile(&mut self, placement: TilePlacement) {
        let Some((_, tile)) = self.tiles.iter().find(|(c, _)| *c == placement.corner) else {
            return;
        };
        let css = TileStyle::from_placement(&placement);
        let style = tile.style();
        let _ = style.set_property("width", &css.width);
        let _ = style.set_property("height", &css.height);
        let _ = style.set_property("transform", &css.transform);
    }
}

/// Returns the inner size of `container` in CSS pixels.
pub fn measure_container(container: &HtmlElement) -> Size {
    Size::new(
        f64::from(container.client_width()),
        f64::from(container.client_height()),
    )
}

/// Scrolling backdrop bound to a stage element, for use from JavaScript.
///
/// Invalid input (unknown directions, missing images, zero sizes) is ignored.
#[wasm_bindgen]
#[derive(Debug)]
pub struct WebBackdrop {
    tiler: BackdropTiler<DomTileSurface>,
    clock: FrameClock,
}

#[wasm_bindgen]
impl WebBackdrop {
    /// Creates a backdrop rendering into `container`, with no image bound.
    #[wasm_bindgen(constructor)]
    pub fn new(container: HtmlElement) -> Result<Self, JsValue> {
        Ok(Self {
            tiler: BackdropTiler::new(DomTileSurface::new(container)?),
            clock: FrameClock::new(),
        })
    }

    /// Binds a backdrop image URL, or clears the backdrop with `null`.
    #[wasm_bindgen(js_name = setImage)]
    pub fn set_image(&mut self, url: Option<String>) {
        self.tiler.set_image(url);
    }

    /// Records the stage size in pixels.
    pub fn layout(&mut self, width: f64, height: f64) {
        self.tiler.layout(Size::new(width, height));
    }

    /// Measures the container and records its size.
    #[wasm_bindgen(js_name = layoutFromContainer)]
    pub fn layout_from_container(&mut self) {
        let size = measure_container(self.tiler.surface().container());
        self.tiler.layout(size);
    }

    /// Sets the speed on one axis; `direction` is `up`, `down`, `left` or
    /// `right` and `speed` a percentage.
    #[wasm_bindgen(js_name = setScroll)]
    pub fn set_scroll(&mut self, direction: &str, speed: f64) {
        if let Ok(direction) = direction.parse::<ScrollDirection>() {
            self.tiler.set_scroll(direction, speed);
        }
    }

    /// Stops scrolling.
    pub fn stop(&mut self) {
        self.tiler.stop();
    }

    /// Advances by `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tiler.advance(dt);
    }

    /// Advances using a `requestAnimationFrame` timestamp in milliseconds.
    pub fn tick(&mut self, timestamp_ms: f64) {
        if let Some(dt) = self.clock.tick(timestamp_ms) {
            self.tiler.advance(dt);
        }
    }

    /// Forgets the last frame timestamp, e.g. after the stage was hidden.
    #[wasm_bindgen(js_name = resetClock)]
    pub fn reset_clock(&mut self) {
        self.clock.reset();
    }

    /// Switches between single-step wrapping (default) and periodic wrapping.
    #[wasm_bindgen(js_name = setPeriodicWrap)]
    pub fn set_periodic_wrap(&mut self, periodic: bool) {
        self.tiler.set_wrap_mode(if periodic {
            WrapMode::Periodic
        } else {
            WrapMode::SingleStep
        });
    }
}
