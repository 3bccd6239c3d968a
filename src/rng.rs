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

//! Seeded random source for map generation. A fixed seed reproduces
//! generation and spawn selection exactly.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::position::Position;

#[derive(Debug, Clone)]
pub struct MapRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl MapRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this generator was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform draw from `min..=max`. A reversed range resolves to `min`
    /// rather than panicking.
    pub fn range_inclusive(&mut self, min: usize, max: usize) -> usize {
        if min >= max {
            return min;
        }
        self.rng.gen_range(min..=max)
    }

    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            Some(&items[self.range_inclusive(0, items.len() - 1)])
        }
    }
}

impl Default for MapRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

/// Uniform point in `[0, xmax] x [0, ymax]`, bounds inclusive.
pub fn sample_point(rng: &mut MapRng, xmax: usize, ymax: usize) -> Position {
    Position::new(
        rng.range_inclusive(0, xmax),
        rng.range_inclusive(0, ymax),
    )
}

/// Uniform point in the window `[near + min_distance, near + max_distance]`
/// per axis, clipped to the outer ceiling `(xmax, ymax)`. If clipping pushes
/// a window's lower bound above its upper bound, the lower bound snaps down
/// to it and the axis degenerates to a single value. Never panics.
pub fn sample_point_near(
    rng: &mut MapRng,
    xmax: usize,
    ymax: usize,
    near: Position,
    min_distance: usize,
    max_distance: usize,
) -> Position {
    let mut x_lo = near.x + min_distance;
    let mut y_lo = near.y + min_distance;
    let mut x_hi = near.x + max_distance;
    let mut y_hi = near.y + max_distance;

    if x_hi > xmax {
        x_hi = xmax;
    }
    if y_hi > ymax {
        y_hi = ymax;
    }
    if x_lo > x_hi {
        x_lo = x_hi;
    }
    if y_lo > y_hi {
        y_lo = y_hi;
    }

    Position::new(
        rng.range_inclusive(x_lo, x_hi),
        rng.range_inclusive(y_lo, y_hi),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_inclusive_bounds() {
        let mut rng = MapRng::new(42);
        for _ in 0..1000 {
            let n = rng.range_inclusive(3, 9);
            assert!((3..=9).contains(&n));
        }
    }

    #[test]
    fn range_inclusive_degenerate() {
        let mut rng = MapRng::new(42);
        assert_eq!(rng.range_inclusive(5, 5), 5);
        assert_eq!(rng.range_inclusive(7, 2), 7);
    }

    #[test]
    fn reproducibility() {
        let mut a = MapRng::new(1234);
        let mut b = MapRng::new(1234);
        for _ in 0..100 {
            assert_eq!(a.range_inclusive(0, 1000), b.range_inclusive(0, 1000));
        }
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = MapRng::new(42);
        let empty: [u32; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[7]), Some(&7));
    }

    #[test]
    fn sample_point_stays_in_rectangle() {
        let mut rng = MapRng::new(9);
        for _ in 0..1000 {
            let p = sample_point(&mut rng, 59, 24);
            assert!(p.x <= 59 && p.y <= 24);
        }
    }

    #[test]
    fn sample_point_near_respects_band() {
        let mut rng = MapRng::new(9);
        for _ in 0..1000 {
            let p = sample_point_near(&mut rng, 59, 24, Position::new(10, 10), 5, 10);
            assert!((15..=20).contains(&p.x));
            assert!((15..=20).contains(&p.y));
        }
    }

    #[test]
    fn sample_point_near_clips_to_ceiling() {
        let mut rng = MapRng::new(9);
        for _ in 0..1000 {
            let p = sample_point_near(&mut rng, 59, 24, Position::new(55, 20), 5, 10);
            assert_eq!(p.x, 59);
            assert_eq!(p.y, 24, "lower bound must snap down to the ceiling");
        }
    }
}
