//! Neighborhood queries over a [`World`].
//!
//! Nothing is cached: a world lives for a single poll, so every query walks
//! the grid afresh.

use std::collections::HashSet;

use tankwars_protocol::Coord;

use crate::world::{Tile, World};

/// Tiles grouped by distance from an origin: `rings[i]` holds the tiles
/// exactly `i + 1` steps away. Order inside a ring is unspecified.
pub type Rings<'w> = Vec<Vec<&'w Tile>>;

impl World {
    /// Existing tiles adjacent to `coord`. Empty if `coord` itself is not a tile.
    pub fn neighbors(&self, coord: Coord) -> Vec<&Tile> {
        if self.tile_at(coord).is_none() {
            return Vec::new();
        }
        coord
            .neighbors()
            .into_iter()
            .filter_map(|n| self.tile_at(n))
            .collect()
    }

    /// Breadth-first expansion around `origin`, bucketed by step count.
    ///
    /// Always returns exactly `radius` rings. The origin never appears, and
    /// rings past the edge of the grid are empty. Step count equals hex
    /// distance only while every tile is passable; blocked tiles would break
    /// that equivalence.
    pub fn rings(&self, origin: Coord, radius: usize) -> Rings<'_> {
        let mut rings: Rings<'_> = vec![Vec::new(); radius];
        if radius == 0 || self.tile_at(origin).is_none() {
            return rings;
        }

        let mut visited = HashSet::from([origin]);
        let mut frontier = vec![origin];

        for ring in rings.iter_mut() {
            let mut next = Vec::new();
            for coord in frontier {
                for tile in self.neighbors(coord) {
                    if visited.insert(tile.coord) {
                        ring.push(tile);
                        next.push(tile.coord);
                    }
                }
            }
            if next.is_empty() {
                break;
            }
            frontier = next;
        }

        rings
    }

    /// First tile, scanning rings outward, that satisfies `predicate`.
    pub fn nearest<F>(&self, origin: Coord, radius: usize, mut predicate: F) -> Option<&Tile>
    where
        F: FnMut(&Tile) -> bool,
    {
        self.rings(origin, radius)
            .into_iter()
            .flatten()
            .find(|tile| predicate(tile))
    }
}
