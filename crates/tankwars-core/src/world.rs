use std::collections::HashSet;

use tankwars_protocol::{
    ActivitySnapshot, Coord, PlayerId, TileKind, TileSnapshot, UnitId, UnitKind, UnitSnapshot,
    WorldSnapshot,
};
use tracing::warn;

#[derive(Clone, Debug, PartialEq)]
pub struct Activity {
    pub name: String,
    pub from: Coord,
    pub to: Coord,
    pub start: u64,
    pub end: u64,
}

impl From<ActivitySnapshot> for Activity {
    fn from(snap: ActivitySnapshot) -> Self {
        Self {
            name: snap.name,
            from: snap.from.into(),
            to: snap.to.into(),
            start: snap.start,
            end: snap.end,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Unit {
    pub id: UnitId,
    pub player: PlayerId,
    pub kind: UnitKind,
    pub health: i32,
    /// Fraction of full ammunition, `0.0..=1.0`.
    pub ammunition: f32,
    pub fire_range: i32,
    pub view: i32,
    pub hidden: bool,
    pub activity: Option<Activity>,
}

impl Unit {
    pub fn new(id: UnitId, player: PlayerId) -> Self {
        Self {
            id,
            player,
            kind: UnitKind::TANK,
            health: 100,
            ammunition: 1.0,
            fire_range: 1,
            view: 1,
            hidden: false,
            activity: None,
        }
    }

    /// A unit with an order in flight must not receive another one.
    pub fn is_busy(&self) -> bool {
        self.activity.is_some()
    }
}

impl From<UnitSnapshot> for Unit {
    fn from(snap: UnitSnapshot) -> Self {
        Self {
            id: snap.id,
            player: snap.player,
            kind: snap.kind,
            health: snap.health,
            ammunition: snap.ammunition,
            fire_range: snap.fire_range,
            view: snap.view,
            hidden: snap.hidden,
            activity: snap.activity.map(Activity::from),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tile {
    pub coord: Coord,
    pub kind: TileKind,
    /// `PlayerId::NONE` when nobody has claimed the tile.
    pub owner: PlayerId,
    pub unit: Option<Unit>,
}

impl Tile {
    pub fn new(coord: Coord, kind: TileKind) -> Self {
        Self {
            coord,
            kind,
            owner: PlayerId::NONE,
            unit: None,
        }
    }

    pub fn is_base(&self) -> bool {
        self.kind.is_base()
    }

    /// The occupying unit, if it belongs to someone other than `player`.
    pub fn enemy_of(&self, player: PlayerId) -> Option<&Unit> {
        self.unit.as_ref().filter(|u| u.player != player)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileFilter {
    Any,
    Kind(TileKind),
}

impl TileFilter {
    fn matches(self, tile: &Tile) -> bool {
        match self {
            TileFilter::Any => true,
            TileFilter::Kind(kind) => tile.kind == kind,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerFilter {
    Any,
    Player(PlayerId),
}

impl PlayerFilter {
    fn matches(self, unit: &Unit) -> bool {
        match self {
            PlayerFilter::Any => true,
            PlayerFilter::Player(player) => unit.player == player,
        }
    }
}

/// One poll's view of the battlefield. Replaced wholesale every poll.
///
/// Tiles are stored column-major (`columns[x][y]`), mirroring the STATUS
/// payload; a slot may be empty.
#[derive(Clone, Debug, Default)]
pub struct World {
    width: i32,
    height: i32,
    iteration: u64,
    columns: Vec<Vec<Option<Tile>>>,
}

impl World {
    /// A fully populated `width` x `height` world of a single terrain.
    pub fn new(width: u32, height: u32, kind: TileKind) -> Self {
        let columns = (0..width as i32)
            .map(|x| {
                (0..height as i32)
                    .map(|y| Some(Tile::new(Coord::new(x, y), kind)))
                    .collect()
            })
            .collect();
        Self {
            width: width as i32,
            height: height as i32,
            iteration: 0,
            columns,
        }
    }

    pub fn from_snapshot(snapshot: WorldSnapshot) -> Self {
        let mut seen_units = HashSet::new();
        let columns = snapshot
            .tiles
            .into_iter()
            .enumerate()
            .map(|(x, column)| {
                column
                    .into_iter()
                    .enumerate()
                    .map(|(y, slot)| {
                        slot.map(|snap| {
                            tile_from_snapshot(Coord::new(x as i32, y as i32), snap, &mut seen_units)
                        })
                    })
                    .collect()
            })
            .collect();

        Self {
            width: snapshot.x_width,
            height: snapshot.y_height,
            iteration: snapshot.iteration,
            columns,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    /// Bounds-checked lookup. Anything outside the grid, or an empty slot,
    /// is simply absent.
    pub fn tile_at(&self, coord: Coord) -> Option<&Tile> {
        let x = usize::try_from(coord.x).ok()?;
        let y = usize::try_from(coord.y).ok()?;
        self.columns.get(x)?.get(y)?.as_ref()
    }

    pub fn tile_mut(&mut self, coord: Coord) -> Option<&mut Tile> {
        let x = usize::try_from(coord.x).ok()?;
        let y = usize::try_from(coord.y).ok()?;
        self.columns.get_mut(x)?.get_mut(y)?.as_mut()
    }

    /// Tiles matching `filter`, column by column, each column in row order.
    pub fn tiles(&self, filter: TileFilter) -> impl Iterator<Item = &Tile> + '_ {
        self.columns
            .iter()
            .flatten()
            .flatten()
            .filter(move |tile| filter.matches(tile))
    }

    /// Tiles carrying a unit that passes `filter`.
    pub fn units(&self, filter: PlayerFilter) -> impl Iterator<Item = &Tile> + '_ {
        self.tiles(TileFilter::Any)
            .filter(move |tile| tile.unit.as_ref().is_some_and(|u| filter.matches(u)))
    }

    pub fn bases(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.tiles(TileFilter::Any).filter(|tile| tile.is_base())
    }

    /// Bases not owned by `player`; neutral bases count as enemy bases.
    pub fn enemy_bases(&self, player: PlayerId) -> Vec<&Tile> {
        self.bases().filter(|tile| tile.owner != player).collect()
    }
}

fn tile_from_snapshot(coord: Coord, snap: TileSnapshot, seen_units: &mut HashSet<UnitId>) -> Tile {
    if snap.coord() != coord {
        warn!(slot = %coord, reported = %snap.coord(), "tile reports a different position than its slot");
    }

    // Units without an id cannot be told apart, so they are all kept.
    let unit = snap.unit.and_then(|unit| {
        if unit.id.is_unknown() || seen_units.insert(unit.id) {
            Some(Unit::from(unit))
        } else {
            warn!(unit = %unit.id, at = %coord, "unit already placed on another tile, dropping duplicate");
            None
        }
    });

    Tile {
        coord,
        kind: snap.kind,
        owner: snap.owner,
        unit,
    }
}
