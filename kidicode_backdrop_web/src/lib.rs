// Copyright 2026 the KidiCode Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=kidicode_backdrop_web --heading-base-level=0

//! DOM surface for the KidiCode scrolling backdrop.
//!
//! When targeting `wasm32`, this crate provides:
//! - `DomTileSurface`, a [`TileSurface`](kidicode_backdrop::TileSurface) that
//!   renders the four backdrop tiles as absolutely positioned `<div>`s inside
//!   a container element, each filled with the backdrop image and moved with
//!   `transform: translate(..)`.
//! - `WebBackdrop`, a `wasm-bindgen` facade so the stage's JavaScript can
//!   drive the tiler from its own `requestAnimationFrame` loop.
//!
//! ```no_run
//! #[cfg(target_arch = "wasm32")]
//! fn mount(
//!     stage: web_sys::HtmlElement,
//! ) -> Result<kidicode_backdrop_web::WebBackdrop, wasm_bindgen::JsValue> {
//!     let mut backdrop = kidicode_backdrop_web::WebBackdrop::new(stage)?;
//!     backdrop.set_image(Some("backdrops/space.png".into()));
//!     backdrop.layout_from_container();
//!     backdrop.set_scroll("left", 40.0);
//!     Ok(backdrop)
//! }
//! ```
//!
//! The CSS formatting in [`TileStyle`] and [`background_image_css`] is
//! target-independent.
//!
//! Notes:
//! - Style writes that the browser rejects are ignored. The backdrop is
//!   decoration, and a failed frame is simply overwritten by the next one.
//! - Measuring the stage is left to the host: call `layout` or
//!   `layoutFromContainer` whenever the container is resized.

#![no_std]

extern crate alloc;

#[cfg(target_arch = "wasm32")]
mod dom;
mod style;
mod tiles;

#[cfg(target_arch = "wasm32")]
pub use dom::{DomTileSurface, WebBackdrop, measure_container};
pub use style::{TileStyle, background_image_css};
