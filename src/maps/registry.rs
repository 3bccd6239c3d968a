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
use crate::maps::map::Map;
use crate::maps::map_generator::{GenerationError, GenerationParams, MapGenerator};
use crate::rng::MapRng;

/// The live maps of one session. Bootstrapping generates "map-0" and drops
/// the player onto it; maps are addressed by id afterwards.
#[derive(Debug)]
pub struct MapRegistry {
    maps: Vec<Map>,
    current: usize,
}

impl MapRegistry {
    pub fn bootstrap<C: Creature>(
        params: GenerationParams,
        player: &mut C,
        rng: &mut MapRng,
    ) -> Result<Self, GenerationError> {
        let generator = MapGenerator::new(params);
        let mut first = generator.create("map-0", rng)?;
        first.insert_player(player, rng);
        Ok(Self {
            maps: vec![first],
            current: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    pub fn current(&self) -> &Map {
        &self.maps[self.current]
    }

    pub fn current_mut(&mut self) -> &mut Map {
        &mut self.maps[self.current]
    }

    pub fn get(&self, id: &str) -> Option<&Map> {
        self.maps.iter().find(|m| m.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Map> {
        self.maps.iter_mut().find(|m| m.id == id)
    }

    /// Register another map. An id already present is left as is.
    pub fn add(&mut self, map: Map) {
        if self.get(&map.id).is_none() {
            self.maps.push(map);
        }
    }
}
