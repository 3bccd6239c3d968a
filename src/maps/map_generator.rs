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

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::maps::map::Map;
use crate::maps::room::Room;
use crate::maps::{GRID_HEIGHT, GRID_WIDTH};
use crate::position::Position;
use crate::rng::{sample_point, MapRng};
use crate::tile::{Tile, TileKind};
use crate::tile_map::TileMap;

// Accepted rooms keep a one-cell gap between footprints: the corner test
// runs against each footprint grown outward by this much, so coincident,
// overlapping and flush-adjacent candidates are all rejected.
const PLACEMENT_BUFFER: i64 = 1;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("no valid placement for room {slot} after {attempts} attempts")]
    RoomPlacement { slot: usize, attempts: u32 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationParams {
    pub width: usize,
    pub height: usize,
    pub n_rooms: usize,
    pub min_room_size: usize,
    pub max_room_size: usize,
    pub max_doors: usize,
    /// Per-room rejection-sampling ceiling; exhausting it surfaces
    /// `GenerationError::RoomPlacement` instead of looping forever.
    pub max_place_attempts: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            n_rooms: 6,
            min_room_size: 5,
            max_room_size: 10,
            max_doors: 2,
            max_place_attempts: 1000,
        }
    }
}

pub struct MapGenerator {
    pub params: GenerationParams,
}

impl MapGenerator {
    pub fn new(params: GenerationParams) -> Self {
        Self { params }
    }

    /// Assemble a full map: a floor grid, the placed room set, each room
    /// stamped at its anchor offset. Stamping follows placement order, so a
    /// later room wins where footprints touch (the overlap rejection keeps
    /// that from happening in practice).
    pub fn create(&self, id: &str, rng: &mut MapRng) -> Result<Map, GenerationError> {
        let mut grid = self.floor_grid();
        let rooms = self.place_rooms(rng)?;
        for room in &rooms {
            room.stamp_into(&mut grid);
        }
        debug!("map {id}: {} rooms stamped", rooms.len());
        Ok(Map::new(id, grid, rooms))
    }

    /// Rejection-sampling placement: keep drawing candidates for each slot
    /// until one clears every accepted room, or the attempt ceiling is hit.
    fn place_rooms(&self, rng: &mut MapRng) -> Result<Vec<Room>, GenerationError> {
        let p = &self.params;
        // Anchors stay a min_room_size margin away from the far edges so a
        // room can never be anchored off-grid.
        let anchor_xmax = p.width.saturating_sub(1 + p.min_room_size);
        let anchor_ymax = p.height.saturating_sub(1 + p.min_room_size);

        let mut rooms: Vec<Room> = Vec::with_capacity(p.n_rooms);
        for slot in 0..p.n_rooms {
            let mut attempts = 0u32;
            let room = loop {
                if attempts >= p.max_place_attempts {
                    warn!("room {slot} unplaceable after {attempts} attempts");
                    return Err(GenerationError::RoomPlacement { slot, attempts });
                }
                attempts += 1;
                let anchor = sample_point(rng, anchor_xmax, anchor_ymax);
                let candidate = Room::build(
                    rng,
                    anchor.x,
                    anchor.y,
                    p.width,
                    p.height,
                    p.min_room_size,
                    p.max_room_size,
                    p.max_doors,
                );
                if Self::fits(&candidate, &rooms) {
                    break candidate;
                }
            };
            debug!(
                "room {slot} anchored at ({}, {}) after {attempts} attempts",
                room.x0, room.y0
            );
            rooms.push(room);
        }
        Ok(rooms)
    }

    fn fits(candidate: &Room, accepted: &[Room]) -> bool {
        let (c1, c2) = candidate.corners();
        accepted.iter().all(|room| {
            let (r1, r2) = room.corners();
            !room.contains_area(c1, c2, -PLACEMENT_BUFFER)
                && !candidate.contains_area(r1, r2, -PLACEMENT_BUFFER)
        })
    }

    fn floor_grid(&self) -> TileMap {
        let tiles = (0..self.params.width)
            .map(|x| {
                (0..self.params.height)
                    .map(|y| Tile::new(Position::new(x, y), TileKind::Floor))
                    .collect()
            })
            .collect();
        TileMap::new(tiles)
    }
}
