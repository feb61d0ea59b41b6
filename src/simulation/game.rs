use crate::ant::{Ant, AntId, AntType};
use crate::bee::{Bee, BeeId};
use crate::boost::Boost;
use crate::error::GameError;
use crate::events::{Event, EventSink};
use crate::simulation::hive::Hive;
use crate::world::{parse_coordinate, Colony, Place, PlaceId};

/// Where the game stands after a turn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Every bee is gone
    Won,
    /// A bee reached the queen
    Lost,
    Ongoing,
}

/// Top-level coordinator: one colony, one hive, the turn counter and the event sink.
///
/// Commands must be issued one at a time; every method runs to completion
/// before returning.
pub struct Game<S: EventSink = Vec<Event>> {
    colony: Colony,
    hive: Hive,
    turn: u32,
    rng: fastrand::Rng,
    sink: S,
}

impl Game<Vec<Event>> {
    /// Create a game that collects its events in memory
    pub fn new(colony: Colony, hive: Hive, rng: fastrand::Rng) -> Self {
        Self::with_sink(colony, hive, rng, Vec::new())
    }
}

impl<S: EventSink> Game<S> {
    pub fn with_sink(colony: Colony, hive: Hive, rng: fastrand::Rng, sink: S) -> Self {
        Self {
            colony,
            hive,
            turn: 0,
            rng,
            sink,
        }
    }

    /// Run one full turn: ants, bees, terrain, then the hive's wave
    pub fn take_turn(&mut self) {
        self.colony.ants_act(&mut self.rng);
        self.colony.bees_act();
        self.colony.places_act();
        self.hive.invade(&mut self.colony, self.turn, &mut self.rng);
        self.colony.emit(Event::TurnEnded { turn: self.turn });
        self.turn += 1;
        self.flush();
    }

    /// `Some(false)` once a bee reaches the queen, `Some(true)` once no bee is
    /// left anywhere, `None` while the fight goes on
    pub fn game_is_won(&self) -> Option<bool> {
        if self.colony.queen_has_bees() {
            Some(false)
        } else if self.colony.all_bees().len() + self.hive.bee_count() == 0 {
            Some(true)
        } else {
            None
        }
    }

    pub fn outcome(&self) -> Outcome {
        match self.game_is_won() {
            Some(true) => Outcome::Won,
            Some(false) => Outcome::Lost,
            None => Outcome::Ongoing,
        }
    }

    /// Deploy an ant by type name at a `row,col` coordinate
    pub fn deploy_ant(&mut self, ant_type: &str, coordinate: &str) -> Result<AntId, GameError> {
        let ant_type: AntType = ant_type.parse()?;
        let place = self.locate(coordinate)?;
        let result = self.colony.deploy_ant(ant_type, place);
        self.flush();
        result
    }

    /// Remove the guard, or else the ant, at `coordinate`. An empty place is not an error.
    pub fn remove_ant(&mut self, coordinate: &str) -> Result<(), GameError> {
        let place = self.locate(coordinate)?;
        self.colony.remove_ant(place);
        self.flush();
        Ok(())
    }

    /// Give a boost to the ant at `coordinate`
    pub fn boost_ant(&mut self, boost: &str, coordinate: &str) -> Result<(), GameError> {
        let place = self.locate(coordinate)?;
        let boost: Boost = boost.parse()?;
        let result = self.colony.apply_boost(boost, place);
        self.flush();
        result
    }

    fn locate(&self, coordinate: &str) -> Result<PlaceId, GameError> {
        parse_coordinate(coordinate)
            .and_then(|(row, col)| self.colony.place_at(row, col))
            .ok_or(GameError::IllegalLocation)
    }

    fn flush(&mut self) {
        for event in self.colony.drain_events() {
            self.sink.record(event);
        }
    }

    /// Tunnel matrix, row = tunnel, col 0 next to the queen
    #[inline]
    pub fn places(&self) -> &[Vec<PlaceId>] {
        self.colony.places()
    }

    #[inline]
    pub fn place(&self, id: PlaceId) -> Option<&Place> {
        self.colony.place(id)
    }

    #[inline]
    pub fn ant(&self, id: AntId) -> Option<&Ant> {
        self.colony.ant(id)
    }

    #[inline]
    pub fn bee(&self, id: BeeId) -> Option<&Bee> {
        self.colony.bee(id)
    }

    #[inline]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[inline]
    pub fn food(&self) -> u32 {
        self.colony.food()
    }

    #[inline]
    pub fn hive_bee_count(&self) -> usize {
        self.hive.bee_count()
    }

    /// Names of the boosts currently in stock
    pub fn boost_names(&self) -> Vec<&'static str> {
        self.colony
            .available_boosts()
            .into_iter()
            .map(Boost::as_str)
            .collect()
    }

    #[inline]
    pub fn colony(&self) -> &Colony {
        &self.colony
    }

    #[inline]
    pub fn hive(&self) -> &Hive {
        &self.hive
    }

    /// Waves added mid-game for an already passed turn never spawn
    #[cfg(test)]
    pub(crate) fn hive_mut(&mut self) -> &mut Hive {
        &mut self.hive
    }

    #[inline]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    #[inline]
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
