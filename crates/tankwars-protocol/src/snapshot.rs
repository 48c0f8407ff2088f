use serde::{Deserialize, Serialize};

use crate::{Coord, PlayerId, TileKind, UnitId, UnitKind};

/// Full STATUS payload as sent by the server (already censored for the
/// requesting player).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WorldSnapshot {
    /// Column-major: `tiles[x][y]`.
    #[serde(default)]
    pub tiles: Vec<Vec<Option<TileSnapshot>>>,
    #[serde(default, rename = "XWidth")]
    pub x_width: i32,
    #[serde(default, rename = "YHeight")]
    pub y_height: i32,
    #[serde(default)]
    pub iteration: u64,
    #[serde(default)]
    pub freeze: bool,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TileSnapshot {
    #[serde(default, rename = "Type")]
    pub kind: TileKind,
    #[serde(default, rename = "XCol")]
    pub x_col: i32,
    #[serde(default, rename = "YRow")]
    pub y_row: i32,
    #[serde(default)]
    pub owner: PlayerId,
    #[serde(default)]
    pub unit: Option<UnitSnapshot>,
}

impl TileSnapshot {
    pub fn coord(&self) -> Coord {
        Coord::new(self.x_col, self.y_row)
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UnitSnapshot {
    /// `UnitId::UNKNOWN` when the server leaves it out.
    #[serde(default, rename = "ID")]
    pub id: UnitId,
    #[serde(default)]
    pub player: PlayerId,
    #[serde(default, rename = "Type")]
    pub kind: UnitKind,
    #[serde(default)]
    pub health: i32,
    #[serde(default)]
    pub activity: Option<ActivitySnapshot>,
    #[serde(default)]
    pub view: i32,
    #[serde(default)]
    pub close_view: i32,
    #[serde(default)]
    pub fire_range: i32,
    #[serde(default)]
    pub speed: u64,
    #[serde(default)]
    pub fire_speed: u64,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub armour: i32,
    #[serde(default)]
    pub demoralized: bool,
    /// Normalized to `0.0..=1.0` by the server.
    #[serde(default)]
    pub ammunition: f32,
}

/// An order the server is still executing for a unit.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ActivitySnapshot {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub from: [i32; 2],
    #[serde(default)]
    pub to: [i32; 2],
    #[serde(default)]
    pub start: u64,
    #[serde(default)]
    pub end: u64,
}
