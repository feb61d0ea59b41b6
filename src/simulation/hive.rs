use crate::bee::{Bee, BeeId};
use crate::events::Event;
use crate::world::Colony;
use std::collections::BTreeMap;

/// Spawn pool of the bees. Holds every scheduled wave until its turn comes.
///
/// The hive is not a [`Place`](crate::world::Place): pending bees sit off the
/// board, owned here, until [`Hive::invade`] moves them onto an entrance.
#[derive(Clone, Debug)]
pub struct Hive {
    bee_armor: i32,
    bee_damage: i32,
    waves: BTreeMap<u32, Vec<Bee>>,
}

impl Hive {
    pub const NAME: &'static str = "Hive";

    /// Create an empty hive breeding bees with the given stats. Negative damage is floored at 0.
    pub fn new(bee_armor: i32, bee_damage: i32) -> Self {
        Self {
            bee_armor,
            bee_damage: bee_damage.max(0),
            waves: BTreeMap::new(),
        }
    }

    /// Schedule `count` bees for `turn`. A second wave on the same turn joins the first.
    pub fn add_wave(&mut self, turn: u32, count: usize) -> &mut Self {
        let (armor, damage) = (self.bee_armor, self.bee_damage);
        self.waves
            .entry(turn)
            .or_default()
            .extend((0..count).map(|_| Bee::new(armor, damage)));
        self
    }

    /// Bees still waiting in the hive
    pub fn bee_count(&self) -> usize {
        self.waves.values().map(Vec::len).sum()
    }

    /// Pending bees in schedule order
    pub fn bees(&self) -> impl Iterator<Item = &Bee> {
        self.waves.values().flatten()
    }

    /// Turns that still have a wave pending
    pub fn scheduled_turns(&self) -> impl Iterator<Item = u32> + '_ {
        self.waves.keys().copied()
    }

    /// Release this turn's wave, each bee at a random colony entrance
    pub fn invade(&mut self, colony: &mut Colony, turn: u32, rng: &mut fastrand::Rng) -> Vec<BeeId> {
        if colony.entrances().is_empty() {
            return Vec::new();
        }
        let Some(wave) = self.waves.remove(&turn) else {
            return Vec::new();
        };

        let spawned: Vec<BeeId> = wave
            .into_iter()
            .map(|bee| {
                let entrance = colony.entrances()[rng.usize(..colony.entrances().len())];
                colony.spawn_bee(bee, entrance)
            })
            .collect();

        colony.emit(Event::WaveSpawned {
            turn,
            bees: spawned.clone(),
        });
        spawned
    }
}
