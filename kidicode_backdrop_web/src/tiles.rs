// Copyright 2026 the KidiCode Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kidicode_backdrop::TileCorner;

/// Creates one tile per corner, or none at all.
///
/// If `create` fails for any corner, every tile created so far is passed to
/// `discard` and the result is empty.
#[cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "Only the wasm32 DOM surface builds tiles.")
)]
pub(crate) fn build_all<T, E>(
    mut create: impl FnMut(TileCorner) -> Result<T, E>,
    mut discard: impl FnMut(T),
) -> Vec<(TileCorner, T)> {
    let mut tiles = Vec::with_capacity(TileCorner::ALL.len());
    for corner in TileCorner::ALL {
        match create(corner) {
            Ok(tile) => tiles.push((corner, tile)),
            Err(_) => {
                for (_, tile) in tiles.drain(..) {
                    discard(tile);
                }
                break;
            }
        }
    }
    tiles
}
