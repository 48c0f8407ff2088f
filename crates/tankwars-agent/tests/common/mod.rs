//! Snapshot builders shared by the agent integration tests.

#![allow(dead_code)]

use tankwars_protocol::{
    encode_snapshot, PlayerId, TileKind, TileSnapshot, UnitId, UnitKind, UnitSnapshot,
    WorldSnapshot,
};

pub const ME: PlayerId = PlayerId::RED;
pub const THEM: PlayerId = PlayerId::BLUE;

/// A grass field, every slot filled.
pub fn field(width: i32, height: i32) -> WorldSnapshot {
    WorldSnapshot {
        tiles: (0..width)
            .map(|x| {
                (0..height)
                    .map(|y| {
                        Some(TileSnapshot {
                            kind: TileKind::GRASS,
                            x_col: x,
                            y_row: y,
                            ..Default::default()
                        })
                    })
                    .collect()
            })
            .collect(),
        x_width: width,
        y_height: height,
        ..Default::default()
    }
}

fn slot(snapshot: &mut WorldSnapshot, x: i32, y: i32) -> &mut TileSnapshot {
    snapshot.tiles[x as usize][y as usize]
        .as_mut()
        .expect("field() fills every slot")
}

pub fn with_base(mut snapshot: WorldSnapshot, x: i32, y: i32, owner: PlayerId) -> WorldSnapshot {
    let tile = slot(&mut snapshot, x, y);
    tile.kind = TileKind::BASE;
    tile.owner = owner;
    snapshot
}

pub fn with_tank(
    mut snapshot: WorldSnapshot,
    x: i32,
    y: i32,
    id: i64,
    player: PlayerId,
    ammunition: f32,
) -> WorldSnapshot {
    slot(&mut snapshot, x, y).unit = Some(UnitSnapshot {
        id: UnitId(id),
        player,
        kind: UnitKind::TANK,
        health: 100,
        view: 1,
        close_view: 1,
        fire_range: 1,
        ammunition,
        ..Default::default()
    });
    snapshot
}

/// A field where only the enemy is left: the agent has been wiped out.
pub fn wiped_out() -> String {
    let snapshot = with_tank(with_base(field(8, 8), 6, 6, THEM), 1, 1, 50, THEM, 1.0);
    encode_snapshot(&snapshot).unwrap()
}

pub fn json(snapshot: &WorldSnapshot) -> String {
    encode_snapshot(snapshot).unwrap()
}
