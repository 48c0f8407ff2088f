use std::collections::HashSet;

use proptest::prelude::*;
use tankwars_core::World;
use tankwars_protocol::{Coord, TileKind, TileSnapshot, WorldSnapshot};

fn grid_and_origin() -> impl Strategy<Value = (u32, u32, Coord, usize)> {
    (1u32..14, 1u32..14).prop_flat_map(|(w, h)| {
        (
            Just(w),
            Just(h),
            (0..w as i32, 0..h as i32).prop_map(|(x, y)| Coord::new(x, y)),
            0usize..8,
        )
    })
}

proptest! {
    #[test]
    fn ring_index_is_true_distance((w, h, origin, radius) in grid_and_origin()) {
        let world = World::new(w, h, TileKind::GRASS);
        let rings = world.rings(origin, radius);
        prop_assert_eq!(rings.len(), radius);

        let mut seen = HashSet::new();
        for (i, ring) in rings.iter().enumerate() {
            for tile in ring {
                prop_assert_eq!(origin.distance(tile.coord) as usize, i + 1);
                prop_assert!(seen.insert(tile.coord), "{} appears twice", tile.coord);
            }
        }
        prop_assert!(!seen.contains(&origin));
    }

    #[test]
    fn rings_cover_everything_in_range((w, h, origin, radius) in grid_and_origin()) {
        let world = World::new(w, h, TileKind::GRASS);
        let rings = world.rings(origin, radius);
        let found: HashSet<Coord> = rings.iter().flatten().map(|t| t.coord).collect();

        for x in 0..w as i32 {
            for y in 0..h as i32 {
                let c = Coord::new(x, y);
                let d = origin.distance(c) as usize;
                prop_assert_eq!(found.contains(&c), d >= 1 && d <= radius, "{} at distance {}", c, d);
            }
        }
    }

    #[test]
    fn neighbors_are_adjacent_tiles_only((w, h, origin, _r) in grid_and_origin()) {
        let world = World::new(w, h, TileKind::GRASS);
        let neighbors = world.neighbors(origin);
        prop_assert!(neighbors.len() <= 6);
        for tile in &neighbors {
            prop_assert!(origin.is_neighbor(tile.coord));
        }
        let expected = origin
            .neighbors()
            .iter()
            .filter(|c| world.tile_at(**c).is_some())
            .count();
        prop_assert_eq!(neighbors.len(), expected);
    }
}

#[test]
fn corner_rings_are_shorter_than_interior_rings() {
    let world = World::new(10, 10, TileKind::GRASS);
    let corner = world.rings(Coord::new(0, 0), 3);
    let center = world.rings(Coord::new(5, 5), 3);
    for (c, m) in corner.iter().zip(&center) {
        assert!(c.len() < m.len());
    }
    assert_eq!(corner[0].len(), 2);
}

#[test]
fn impassable_looking_terrain_is_still_a_ring_member() {
    let mut world = World::new(1, 3, TileKind::GRASS);
    world.tile_mut(Coord::new(0, 1)).unwrap().kind = TileKind::WATER;
    let rings = world.rings(Coord::new(0, 0), 3);
    assert_eq!(rings[0].len(), 1);
    assert_eq!(rings[0][0].kind, TileKind::WATER);
    assert_eq!(rings[1][0].coord, Coord::new(0, 2));
    assert!(rings[2].is_empty());
}

/// A grass field received over the wire with empty slots at `holes`.
fn field_with_holes(width: i32, height: i32, holes: &[Coord]) -> World {
    let tiles = (0..width)
        .map(|x| {
            (0..height)
                .map(|y| {
                    let coord = Coord::new(x, y);
                    (!holes.contains(&coord)).then(|| TileSnapshot {
                        kind: TileKind::GRASS,
                        x_col: x,
                        y_row: y,
                        ..Default::default()
                    })
                })
                .collect()
        })
        .collect();
    World::from_snapshot(WorldSnapshot {
        tiles,
        x_width: width,
        y_height: height,
        ..Default::default()
    })
}

#[test]
fn empty_slot_is_routed_around() {
    let origin = Coord::new(2, 2);
    let hole = Coord::new(2, 1);
    let world = field_with_holes(5, 5, &[hole]);

    assert!(world.tile_at(hole).is_none());
    assert_eq!(world.neighbors(origin).len(), 5);
    assert!(world.neighbors(origin).iter().all(|t| t.coord != hole));

    // (3, 0) is two steps away, but its only two-step path runs through the hole.
    let behind = Coord::new(3, 0);
    assert_eq!(origin.distance(behind), 2);

    let rings = world.rings(origin, 3);
    let ring_of = |c: Coord| rings.iter().position(|ring| ring.iter().any(|t| t.coord == c));
    assert_eq!(ring_of(hole), None);
    assert_eq!(ring_of(behind), Some(2));
    assert_eq!(ring_of(Coord::new(2, 0)), Some(1));
}
