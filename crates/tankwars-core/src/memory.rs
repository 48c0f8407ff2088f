use std::collections::HashMap;

use tankwars_protocol::{Coord, UnitId};

/// Remembered objective per unit. Outlives individual polls; only the
/// decision engine writes to it.
#[derive(Clone, Debug, Default)]
pub struct TargetMemory {
    targets: HashMap<UnitId, Coord>,
}

impl TargetMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target_for(&self, unit: UnitId) -> Option<Coord> {
        self.targets.get(&unit).copied()
    }

    /// Returns the previous target, if any.
    pub fn set_target(&mut self, unit: UnitId, target: Coord) -> Option<Coord> {
        self.targets.insert(unit, target)
    }

    pub fn invalidate(&mut self, unit: UnitId) -> Option<Coord> {
        self.targets.remove(&unit)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (UnitId, Coord)> + '_ {
        self.targets.iter().map(|(unit, coord)| (*unit, *coord))
    }
}
