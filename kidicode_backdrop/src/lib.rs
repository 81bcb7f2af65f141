// Copyright 2026 the KidiCode Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=kidicode_backdrop --heading-base-level=0

//! KidiCode Backdrop: a seamless, infinitely scrolling stage backdrop.
//!
//! The backdrop is drawn as four copies ("tiles") of one image, laid out on a
//! 2×2 grid that covers twice the viewport in each direction. Every frame the
//! tiles move by the current velocity, and a tile that crosses the far edge of
//! the viewport on an axis jumps back by exactly twice the viewport size on
//! that axis. The union of the four tiles therefore always covers the view.
//!
//! This crate is headless. It does not own any DOM, canvas or GPU resource,
//! and it does not run a frame loop. Callers are expected to:
//! - Implement [`TileSurface`] for whatever visual element abstraction their
//!   host provides (for example the DOM surface in `kidicode_backdrop_web`).
//! - Measure the hosting container and forward its size to
//!   [`BackdropTiler::layout`].
//! - Call [`BackdropTiler::advance`] once per animation frame, optionally
//!   deriving the step from host timestamps with [`FrameClock`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use kidicode_backdrop::{BackdropTiler, ScrollDirection, TileCorner};
//!
//! // `()` is a null surface: it accepts placements and draws nothing.
//! let mut backdrop = BackdropTiler::new(());
//! backdrop.set_image(Some(()));
//! backdrop.layout(Size::new(100.0, 100.0));
//!
//! // Full speed to the right is 200 px/s.
//! backdrop.set_scroll(ScrollDirection::Right, 100.0);
//! backdrop.advance(0.1);
//!
//! assert_eq!(backdrop.tile_position(TileCorner::TopLeft), Some(Point::new(20.0, 0.0)));
//! // The right-hand tile crossed x = W and wrapped to the far left.
//! assert_eq!(backdrop.tile_position(TileCorner::TopRight), Some(Point::new(-80.0, 0.0)));
//! ```
//!
//! ## Degenerate input
//!
//! Nothing in this crate reports errors. A missing image, a zero-sized
//! viewport or a zero velocity turns the affected operation into a no-op.
//! The only fallible API is parsing a [`ScrollDirection`] from text.
//!
//! ## Features
//!
//! - `std` (default) / `libm`: select Kurbo's float backend.
//! - `tracing`: emit `tracing` events when the image is rebound, the viewport
//!   changes, or tiles wrap.
//!
//! This crate is `no_std`.

#![no_std]

mod clock;
mod corner;
mod modes;
mod scroll;
mod surface;
mod tiler;

pub use clock::FrameClock;
pub use corner::{TileCorner, TileSet};
pub use modes::WrapMode;
pub use scroll::{MAX_SCROLL_SPEED, ParseDirectionError, ScrollDirection, scroll_rate};
pub use surface::{TilePlacement, TileSurface};
pub use tiler::{BackdropDebugInfo, BackdropTiler};
