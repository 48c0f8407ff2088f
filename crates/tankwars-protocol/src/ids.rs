use std::fmt;

use serde::{Deserialize, Serialize};

/// Player byte as sent by the server. `0` is reserved: "unowned" on tiles,
/// "any player" in filters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u8);

impl PlayerId {
    pub const NONE: PlayerId = PlayerId(0);
    pub const RED: PlayerId = PlayerId(1);
    pub const BLUE: PlayerId = PlayerId(2);
    pub const GREEN: PlayerId = PlayerId(3);
    pub const YELLOW: PlayerId = PlayerId(4);
    pub const WHITE: PlayerId = PlayerId(5);
    pub const BLACK: PlayerId = PlayerId(6);
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Server-assigned unit identity, stable for the lifetime of the unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitId(pub i64);

impl UnitId {
    /// Stand-in for a unit whose `ID` is missing from the snapshot.
    pub const UNKNOWN: UnitId = UnitId(0);

    #[inline]
    pub const fn is_unknown(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Terrain code of a tile (an ASCII letter on the wire).
///
/// Unknown codes are kept as-is so newer servers do not break decoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileKind(pub u8);

impl TileKind {
    pub const BASE: TileKind = TileKind(b'B');
    pub const DIRT: TileKind = TileKind(b'D');
    pub const FOREST: TileKind = TileKind(b'F');
    pub const GRASS: TileKind = TileKind(b'G');
    pub const HILL: TileKind = TileKind(b'H');
    pub const HOLE: TileKind = TileKind(b'O');
    pub const MOUNTAIN: TileKind = TileKind(b'M');
    pub const STRUCTURE: TileKind = TileKind(b'S');
    pub const WATER: TileKind = TileKind(b'W');

    #[inline]
    pub const fn is_base(self) -> bool {
        self.0 == b'B'
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_ascii_graphic() {
            write!(f, "{}", self.0 as char)
        } else {
            write!(f, "0x{:02x}", self.0)
        }
    }
}

/// Unit class code (an ASCII letter on the wire).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitKind(pub u8);

impl UnitKind {
    pub const TANK: UnitKind = UnitKind(b'T');
}
