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

use serde::{Deserialize, Serialize};

use crate::position::Position;

/// Passability is fixed per kind; only a tile's occupant list mutates after
/// construction. `Debug` is a passable marker used during generation only.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileKind {
    Floor,
    Wall,
    Door,
    Debug,
}

impl TileKind {
    pub fn is_passable(self) -> bool {
        !matches!(self, TileKind::Wall)
    }
}

#[derive(Debug, Clone)]
pub struct Tile {
    pub position: Position,
    pub kind: TileKind,
    pub occupants: Vec<u32>, // creature ids on this tile, insertion order
}

impl Tile {
    pub fn new(position: Position, kind: TileKind) -> Self {
        Self {
            position,
            kind,
            occupants: Vec::new(),
        }
    }

    pub fn is_passable(&self) -> bool {
        self.kind.is_passable()
    }

    /// Record a creature on this tile. Re-adding an id already present is a
    /// no-op, so a creature never holds two entries on one tile.
    pub fn add_occupant(&mut self, id: u32) {
        if !self.occupants.contains(&id) {
            self.occupants.push(id);
        }
    }

    pub fn remove_occupant(&mut self, id: u32) {
        self.occupants.retain(|&o| o != id);
    }
}
