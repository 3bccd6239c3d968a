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

use crate::creature::Creature;
use crate::maps::room::Room;
use crate::position::Position;
use crate::rng::{sample_point, MapRng};
use crate::tile_map::TileMap;

/// The assembled world: the full tile grid plus the rooms stamped into it.
/// Out-of-bounds queries report false instead of mutating anything, and an
/// illegal move is a no-op rather than an error.
#[derive(Clone, Debug)]
pub struct Map {
    pub id: String,
    pub tiles: TileMap,
    pub rooms: Vec<Room>,
}

impl Map {
    pub fn new(id: &str, tiles: TileMap, rooms: Vec<Room>) -> Self {
        Self {
            id: id.into(),
            tiles,
            rooms,
        }
    }

    pub fn width(&self) -> usize {
        self.tiles.width()
    }

    pub fn height(&self) -> usize {
        self.tiles.height()
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        Position::new(x, y).is_valid(self.width(), self.height())
    }

    pub fn is_passable(&self, x: usize, y: usize) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        self.tiles[Position::new(x, y)].is_passable()
    }

    /// Resample until a point is passable and outside every room footprint
    /// (doors sit on footprints, so spawns never land on them either).
    pub fn random_player_start(&self, rng: &mut MapRng) -> Position {
        loop {
            let p = sample_point(rng, self.width() - 1, self.height() - 1);
            if self.rooms.iter().any(|r| r.contains(p.x, p.y, 0)) {
                continue;
            }
            if !self.is_passable(p.x, p.y) {
                continue;
            }
            return p;
        }
    }

    /// Drop a creature onto a fresh start point: the tile records the
    /// occupant, the creature records its position and this map's id.
    pub fn insert_player<C: Creature>(&mut self, player: &mut C, rng: &mut MapRng) {
        let start = self.random_player_start(rng);
        self.tiles[start].add_occupant(player.id());
        player.set_pos(start);
        player.set_current_map(Some(self.id.clone()));
    }

    /// Move a creature to (x, y). An impassable destination leaves the world
    /// untouched and returns the current position; callers detect rejection
    /// by comparing the result with the request. No adjacency check: the
    /// turn driver is trusted to request single-step deltas.
    pub fn move_player<C: Creature>(&mut self, player: &mut C, x: usize, y: usize) -> Position {
        if !self.is_passable(x, y) {
            return player.pos();
        }
        let from = player.pos();
        if self.tiles.in_bounds(from) {
            self.tiles[from].remove_occupant(player.id());
        }
        let dest = Position::new(x, y);
        self.tiles[dest].add_occupant(player.id());
        player.set_pos(dest);
        dest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Player;
    use crate::tile::{Tile, TileKind};

    /// 5x4 map with a single wall at (2, 1), no rooms.
    fn small_map() -> Map {
        let tiles = (0..5)
            .map(|x| {
                (0..4)
                    .map(|y| {
                        let kind = if (x, y) == (2, 1) {
                            TileKind::Wall
                        } else {
                            TileKind::Floor
                        };
                        Tile::new(Position::new(x, y), kind)
                    })
                    .collect()
            })
            .collect();
        Map::new("test-map", TileMap::new(tiles), Vec::new())
    }

    #[test]
    fn out_of_bounds_is_not_passable() {
        let map = small_map();
        assert!(!map.is_passable(5, 0));
        assert!(!map.is_passable(0, 4));
        assert!(!map.is_passable(usize::MAX, usize::MAX));
        assert!(map.is_passable(0, 0));
        assert!(!map.is_passable(2, 1));
    }

    #[test]
    fn move_into_wall_is_a_noop() {
        let mut map = small_map();
        let mut player = Player::new(1, "hero");
        map.insert_player(&mut player, &mut MapRng::new(3));
        let before = player.pos();

        let result = map.move_player(&mut player, 2, 1);
        assert_eq!(result, before);
        assert_eq!(player.pos(), before);
        assert_eq!(map.tiles[before].occupants, vec![1]);
        assert!(map.tiles[Position::new(2, 1)].occupants.is_empty());
    }

    #[test]
    fn move_transfers_the_occupant_entry() {
        let mut map = small_map();
        let mut player = Player::new(1, "hero");
        map.insert_player(&mut player, &mut MapRng::new(3));
        let from = player.pos();
        let dest = if from == Position::new(0, 0) {
            Position::new(1, 0)
        } else {
            Position::new(0, 0)
        };

        let result = map.move_player(&mut player, dest.x, dest.y);
        assert_eq!(result, dest);
        assert_eq!(player.pos(), dest);
        assert!(map.tiles[from].occupants.is_empty());
        assert_eq!(map.tiles[dest].occupants, vec![1]);
    }

    #[test]
    fn insert_player_sets_position_and_map_handle() {
        let mut map = small_map();
        let mut player = Player::new(9, "hero");
        map.insert_player(&mut player, &mut MapRng::new(11));
        assert!(player.pos().is_valid(map.width(), map.height()));
        assert!(map.is_passable(player.pos().x, player.pos().y));
        assert_eq!(player.current_map.as_deref(), Some("test-map"));
        assert_eq!(map.tiles[player.pos()].occupants, vec![9]);
    }

    #[test]
    fn out_of_bounds_move_is_rejected() {
        let mut map = small_map();
        let mut player = Player::new(1, "hero");
        map.insert_player(&mut player, &mut MapRng::new(3));
        let before = player.pos();
        assert_eq!(map.move_player(&mut player, 50, 50), before);
        assert_eq!(player.pos(), before);
    }
}
