//! Per-poll unit decisions.
//!
//! Every poll each idle unit walks the same ladder: shoot the nearest enemy
//! in fire range, otherwise close in on the nearest enemy in extended sight,
//! otherwise advance on its remembered base. Ammunition below the readiness
//! threshold skips straight to the advance.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tankwars_protocol::{Command, Coord, PlayerId, UnitId};
use tracing::{debug, trace};

use crate::memory::TargetMemory;
use crate::world::{PlayerFilter, Tile, Unit, World};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionConfig {
    /// Minimum ammunition fraction before a unit will engage.
    pub fire_readiness: f32,
    /// Extra rings added to a unit's view range when hunting for enemies.
    pub view_bonus: i32,
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            fire_readiness: 0.8,
            view_bonus: 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Shooting at an enemy in fire range.
    Fire,
    /// Moving onto a sighted enemy instead of the remembered base.
    Engage,
    /// Moving toward the remembered base.
    Advance,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Order {
    pub unit: UnitId,
    pub command: Command,
    pub intent: Intent,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PollOutcome {
    /// The acting player has no units left. The game is over for us.
    Defeated,
    /// Nothing left to capture; wait for the next snapshot.
    NoEnemyBases,
    /// At most one order per idle unit.
    Orders(Vec<Order>),
}

impl PollOutcome {
    pub fn orders(&self) -> &[Order] {
        match self {
            PollOutcome::Orders(orders) => orders,
            _ => &[],
        }
    }

    pub fn is_defeated(&self) -> bool {
        matches!(self, PollOutcome::Defeated)
    }
}

#[derive(Debug)]
pub struct DecisionEngine {
    player: PlayerId,
    config: DecisionConfig,
    memory: TargetMemory,
}

impl DecisionEngine {
    pub fn new(player: PlayerId, config: DecisionConfig) -> Self {
        Self {
            player,
            config,
            memory: TargetMemory::new(),
        }
    }

    pub fn player(&self) -> PlayerId {
        self.player
    }

    pub fn config(&self) -> &DecisionConfig {
        &self.config
    }

    pub fn memory(&self) -> &TargetMemory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut TargetMemory {
        &mut self.memory
    }

    pub fn decide<R: Rng + ?Sized>(&mut self, world: &World, rng: &mut R) -> PollOutcome {
        let own: Vec<&Tile> = world.units(PlayerFilter::Player(self.player)).collect();
        if own.is_empty() {
            debug!(player = %self.player, "no units left");
            return PollOutcome::Defeated;
        }

        let bases = world.enemy_bases(self.player);
        if bases.is_empty() {
            debug!(player = %self.player, "no enemy bases, waiting");
            return PollOutcome::NoEnemyBases;
        }

        let mut orders = Vec::with_capacity(own.len());
        for tile in own {
            let Some(unit) = tile.unit.as_ref() else {
                continue;
            };
            if unit.is_busy() {
                trace!(unit = %unit.id, at = %tile.coord, "order in flight, skipping");
                continue;
            }
            if let Some(order) = self.decide_unit(world, tile.coord, unit, &bases, rng) {
                orders.push(order);
            }
        }

        PollOutcome::Orders(orders)
    }

    fn decide_unit<R: Rng + ?Sized>(
        &mut self,
        world: &World,
        from: Coord,
        unit: &Unit,
        bases: &[&Tile],
        rng: &mut R,
    ) -> Option<Order> {
        let target = self.resolve_target(world, unit.id, bases, rng)?;
        let player = self.player;
        let is_enemy = |t: &Tile| t.enemy_of(player).is_some();

        if unit.ammunition >= self.config.fire_readiness {
            if let Some(enemy) = world.nearest(from, ring_radius(unit.fire_range), is_enemy) {
                debug!(unit = %unit.id, %from, to = %enemy.coord, "fire");
                return Some(Order {
                    unit: unit.id,
                    command: Command::Fire { from, to: enemy.coord },
                    intent: Intent::Fire,
                });
            }

            let sight = ring_radius(unit.view.saturating_add(self.config.view_bonus));
            if let Some(enemy) = world.nearest(from, sight, is_enemy) {
                debug!(unit = %unit.id, %from, to = %enemy.coord, "engage");
                return Some(Order {
                    unit: unit.id,
                    command: Command::Move { from, to: enemy.coord },
                    intent: Intent::Engage,
                });
            }
        }

        trace!(unit = %unit.id, %from, to = %target.coord, "advance");
        Some(Order {
            unit: unit.id,
            command: Command::Move {
                from,
                to: target.coord,
            },
            intent: Intent::Advance,
        })
    }

    /// The remembered target if it is still on the map and not ours yet,
    /// otherwise a freshly drawn enemy base (committed to memory).
    fn resolve_target<'w, R: Rng + ?Sized>(
        &mut self,
        world: &'w World,
        unit: UnitId,
        bases: &[&'w Tile],
        rng: &mut R,
    ) -> Option<&'w Tile> {
        if let Some(coord) = self.memory.target_for(unit) {
            match world.tile_at(coord) {
                Some(tile) if tile.owner != self.player => return Some(tile),
                Some(_) => debug!(%unit, target = %coord, "target captured, reassigning"),
                None => debug!(%unit, target = %coord, "target no longer on the map, reassigning"),
            }
            self.memory.invalidate(unit);
        }

        let base = bases.choose(rng).copied()?;
        self.memory.set_target(unit, base.coord);
        debug!(%unit, target = %base.coord, "assigned target");
        Some(base)
    }
}

fn ring_radius(range: i32) -> usize {
    usize::try_from(range).unwrap_or(0)
}
