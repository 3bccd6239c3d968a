// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use crate::position::Position;
use crate::rng::{sample_point_near, MapRng};
use crate::tile::{Tile, TileKind};
use crate::tile_map::TileMap;

/// A rectangular carved area: Floor interior, Wall border, 1..=max_doors
/// doors punched into non-corner border cells. Immutable once built; the
/// global grid it is stamped into is what mutates during play.
#[derive(Clone, Debug)]
pub struct Room {
    pub x0: usize,
    pub y0: usize,
    pub tiles: Vec<Vec<Tile>>, // local grid, tiles[x][y], (0, 0) at the anchor
}

impl Room {
    /// Carve a room anchored at (x0, y0). The far corner is sampled in the
    /// band `[anchor + min_room_size, anchor + max_room_size]`, clipped to
    /// the map ceiling `(xmax, ymax)`, so the footprint never leaves the map.
    pub fn build(
        rng: &mut MapRng,
        x0: usize,
        y0: usize,
        xmax: usize,
        ymax: usize,
        min_room_size: usize,
        max_room_size: usize,
        max_doors: usize,
    ) -> Self {
        let anchor = Position::new(x0, y0);
        let far = sample_point_near(rng, xmax, ymax, anchor, min_room_size, max_room_size);
        let width = far.x.saturating_sub(x0);
        let height = far.y.saturating_sub(y0);

        let mut tiles: Vec<Vec<Tile>> = (0..width)
            .map(|x| {
                (0..height)
                    .map(|y| Tile::new(Position::new(x, y), TileKind::Floor))
                    .collect()
            })
            .collect();

        for (x, y) in Self::border_cells(width, height, false) {
            tiles[x][y] = Tile::new(Position::new(x, y), TileKind::Wall);
        }

        // Doors are drawn with replacement: a draw may hit an already carved
        // door, so the realized distinct count can be below the draw.
        let door_sites = Self::border_cells(width, height, true);
        let n_doors = rng.range_inclusive(1, max_doors);
        for _ in 0..n_doors {
            if let Some(&(x, y)) = rng.choose(&door_sites) {
                tiles[x][y] = Tile::new(Position::new(x, y), TileKind::Door);
            }
        }

        Self { x0, y0, tiles }
    }

    pub fn width(&self) -> usize {
        self.tiles.len()
    }

    pub fn height(&self) -> usize {
        if self.tiles.is_empty() {
            0
        } else {
            self.tiles[0].len()
        }
    }

    /// Absolute top-left and bottom-right corners of the footprint.
    pub fn corners(&self) -> (Position, Position) {
        let corner1 = Position::new(self.x0, self.y0);
        let corner2 = Position::new(
            self.x0 + self.width().saturating_sub(1),
            self.y0 + self.height().saturating_sub(1),
        );
        (corner1, corner2)
    }

    /// Whether (px, py) lies in the footprint shrunk inward by `overlap` on
    /// each side. A negative `overlap` grows the detection region outward
    /// instead; placement uses that to keep a gap between rooms.
    pub fn contains(&self, px: usize, py: usize, overlap: i64) -> bool {
        let (c1, c2) = self.corners();
        let (px, py, ov) = (px as i64, py as i64, overlap);
        c1.x as i64 <= px - ov
            && c2.x as i64 >= px + ov
            && c1.y as i64 <= py - ov
            && c2.y as i64 >= py + ov
    }

    /// Whether this room contains any of the four corners of the other
    /// rectangle. A corner check only, not a full intersection: a thin
    /// rectangle piercing through with no corner inside goes undetected.
    pub fn contains_area(&self, corner1: Position, corner2: Position, overlap: i64) -> bool {
        self.contains(corner1.x, corner1.y, overlap)
            || self.contains(corner1.x, corner2.y, overlap)
            || self.contains(corner2.x, corner1.y, overlap)
            || self.contains(corner2.x, corner2.y, overlap)
    }

    /// Write this room's local grid into the global grid at the anchor
    /// offset. Stamped tiles take their absolute position as identity.
    pub(crate) fn stamp_into(&self, grid: &mut TileMap) {
        for x in 0..self.width() {
            for y in 0..self.height() {
                let abs = Position::new(self.x0 + x, self.y0 + y);
                if grid.in_bounds(abs) {
                    grid[abs] = Tile::new(abs, self.tiles[x][y].kind);
                }
            }
        }
    }

    fn border_cells(width: usize, height: usize, no_corners: bool) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        if width == 0 || height == 0 {
            return cells;
        }
        let xmax = width - 1;
        let ymax = height - 1;
        for x in 0..width {
            for y in 0..height {
                let on_x_edge = x == 0 || x == xmax;
                let on_y_edge = y == 0 || y == ymax;
                // A corner sits on both edges at once; XOR drops exactly those.
                let keep = if no_corners {
                    on_x_edge != on_y_edge
                } else {
                    on_x_edge || on_y_edge
                };
                if keep {
                    cells.push((x, y));
                }
            }
        }
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_room(x0: usize, y0: usize, width: usize, height: usize) -> Room {
        let tiles = (0..width)
            .map(|x| {
                (0..height)
                    .map(|y| Tile::new(Position::new(x, y), TileKind::Floor))
                    .collect()
            })
            .collect();
        Room { x0, y0, tiles }
    }

    #[test]
    fn built_room_has_wall_or_door_border_and_floor_interior() {
        let mut rng = MapRng::new(77);
        for _ in 0..50 {
            let room = Room::build(&mut rng, 3, 3, 60, 25, 5, 10, 2);
            let (w, h) = (room.width(), room.height());
            assert!((5..=10).contains(&w) || room.x0 + w == 60);
            assert!((5..=10).contains(&h) || room.y0 + h == 25);

            let mut doors = 0;
            for x in 0..w {
                for y in 0..h {
                    let kind = room.tiles[x][y].kind;
                    let on_border = x == 0 || x == w - 1 || y == 0 || y == h - 1;
                    if on_border {
                        assert!(kind == TileKind::Wall || kind == TileKind::Door);
                        if kind == TileKind::Door {
                            doors += 1;
                        }
                    } else {
                        assert_eq!(kind, TileKind::Floor);
                    }
                }
            }
            assert!((1..=2).contains(&doors));
        }
    }

    #[test]
    fn doors_never_land_on_corners() {
        let mut rng = MapRng::new(101);
        for _ in 0..50 {
            let room = Room::build(&mut rng, 0, 0, 60, 25, 5, 10, 2);
            let (w, h) = (room.width(), room.height());
            for &(cx, cy) in &[(0, 0), (0, h - 1), (w - 1, 0), (w - 1, h - 1)] {
                assert_eq!(room.tiles[cx][cy].kind, TileKind::Wall);
            }
        }
    }

    #[test]
    fn footprint_never_leaves_the_map() {
        let mut rng = MapRng::new(5);
        for _ in 0..200 {
            // Anchor near the far edge forces the ceiling clip.
            let room = Room::build(&mut rng, 54, 19, 60, 25, 5, 10, 2);
            let (_, c2) = room.corners();
            assert!(c2.x < 60 && c2.y < 25);
        }
    }

    #[test]
    fn corners_match_dimensions() {
        let room = fixed_room(10, 4, 6, 5);
        let (c1, c2) = room.corners();
        assert_eq!(c1, Position::new(10, 4));
        assert_eq!(c2, Position::new(15, 8));
    }

    #[test]
    fn contains_inflates_inward() {
        let room = fixed_room(10, 10, 5, 5); // footprint [10, 14] x [10, 14]
        assert!(room.contains(10, 10, 0));
        assert!(room.contains(14, 14, 0));
        assert!(!room.contains(9, 10, 0));
        assert!(!room.contains(10, 15, 0));
        // Positive overlap shrinks the detection region: the border no
        // longer counts.
        assert!(!room.contains(10, 10, 1));
        assert!(room.contains(11, 11, 1));
        assert!(room.contains(12, 12, 1));
        // Negative overlap grows it: cells one step outside now count.
        assert!(room.contains(9, 10, -1));
        assert!(room.contains(15, 15, -1));
        assert!(!room.contains(8, 10, -1));
        assert!(!room.contains(16, 14, -1));
    }

    #[test]
    fn contains_area_checks_corners_only() {
        let room = fixed_room(10, 10, 5, 5); // [10, 14] x [10, 14]
        // Corner inside: detected.
        assert!(room.contains_area(Position::new(13, 13), Position::new(20, 20), 0));
        // Fully disjoint: not detected.
        assert!(!room.contains_area(Position::new(16, 16), Position::new(20, 20), 0));
        // Thin rectangle piercing straight through with all four corners
        // outside: the corner check misses it.
        assert!(!room.contains_area(Position::new(11, 5), Position::new(13, 20), 0));
    }
}
