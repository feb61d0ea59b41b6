use crate::ant::{Ant, AntId, AntType};
use crate::bee::{Bee, BeeId};
use crate::boost::Boost;
use crate::error::GameError;
use crate::events::Event;
use crate::world::place::{Place, PlaceId};

/// The defending colony: tunnel matrix, queen, food, boosts and every unit on the board.
///
/// Places, ants and bees live in arenas owned here and are addressed by
/// handle. Handles are never invalidated; units that leave the board keep
/// their slot with `place == None`.
#[derive(Clone, Debug)]
pub struct Colony {
    food: u32,
    places: Vec<Place>,
    tunnels: Vec<Vec<PlaceId>>, // row = tunnel, col 0 next to the queen
    entrances: Vec<PlaceId>,
    queen: PlaceId,
    boosts: [u32; 4],
    ants: Vec<Ant>,
    bees: Vec<Bee>,
    journal: Vec<Event>,
}

impl Colony {
    /// Dig `tunnels` tunnels of `tunnel_length` places each. Every
    /// `moat_frequency`-th place of a tunnel is flooded (0 disables water).
    pub fn new(food: u32, tunnels: usize, tunnel_length: usize, moat_frequency: usize) -> Self {
        let mut places = vec![Place::new("Ant Queen", false, None)];
        let queen = PlaceId(0);
        let mut matrix = Vec::with_capacity(tunnels);
        let mut entrances = Vec::with_capacity(tunnels);

        for row in 0..tunnels {
            let mut prev = queen;
            let mut tunnel = Vec::with_capacity(tunnel_length);
            for col in 0..tunnel_length {
                let water = moat_frequency != 0 && (col + 1) % moat_frequency == 0;
                let kind = if water { "water" } else { "tunnel" };
                let id = PlaceId(places.len() as u32);
                places.push(Place::new(format!("{}[{},{}]", kind, row, col), water, Some(prev)));
                if prev != queen {
                    places[prev.0 as usize].set_entrance(id);
                }
                tunnel.push(id);
                prev = id;
            }
            if prev != queen {
                entrances.push(prev);
            }
            matrix.push(tunnel);
        }

        Self {
            food,
            places,
            tunnels: matrix,
            entrances,
            queen,
            boosts: Boost::STARTING_STOCK,
            ants: Vec::new(),
            bees: Vec::new(),
            journal: Vec::new(),
        }
    }

    #[inline]
    pub fn food(&self) -> u32 {
        self.food
    }

    #[inline]
    pub fn increase_food(&mut self, amount: u32) {
        self.food = self.food.saturating_add(amount);
    }

    /// Tunnel matrix of place handles
    #[inline]
    pub fn places(&self) -> &[Vec<PlaceId>] {
        &self.tunnels
    }

    #[inline]
    pub fn place(&self, id: PlaceId) -> Option<&Place> {
        self.places.get(id.0 as usize)
    }

    #[inline]
    pub(crate) fn place_mut(&mut self, id: PlaceId) -> Option<&mut Place> {
        self.places.get_mut(id.0 as usize)
    }

    /// Look up the place at `row,col`
    pub fn place_at(&self, row: usize, col: usize) -> Option<PlaceId> {
        self.tunnels.get(row)?.get(col).copied()
    }

    #[inline]
    pub fn entrances(&self) -> &[PlaceId] {
        &self.entrances
    }

    #[inline]
    pub fn queen_place(&self) -> PlaceId {
        self.queen
    }

    pub fn queen_has_bees(&self) -> bool {
        self.place(self.queen).is_some_and(|queen| !queen.bees().is_empty())
    }

    #[inline]
    pub fn ant(&self, id: AntId) -> Option<&Ant> {
        self.ants.get(id.0 as usize)
    }

    #[inline]
    pub(crate) fn ant_mut(&mut self, id: AntId) -> Option<&mut Ant> {
        self.ants.get_mut(id.0 as usize)
    }

    #[inline]
    pub fn bee(&self, id: BeeId) -> Option<&Bee> {
        self.bees.get(id.0 as usize)
    }

    #[inline]
    pub(crate) fn bee_mut(&mut self, id: BeeId) -> Option<&mut Bee> {
        self.bees.get_mut(id.0 as usize)
    }

    /// Bee held in an eater's stomach, if any
    pub fn stomach_contents(&self, ant: AntId) -> Option<BeeId> {
        self.ant(ant)?.stomach()?.held()
    }

    pub fn boost_count(&self, boost: Boost) -> u32 {
        self.boosts[boost.index()]
    }

    pub fn add_boost(&mut self, boost: Boost) {
        self.boosts[boost.index()] += 1;
        self.emit(Event::BoostFound { boost });
    }

    /// Boost kinds currently in stock
    pub fn available_boosts(&self) -> Vec<Boost> {
        Boost::ALL
            .into_iter()
            .filter(|&boost| self.boost_count(boost) > 0)
            .collect()
    }

    /// Row-major ants as bees see them (a guard hides the ant it protects)
    pub fn all_ants(&self) -> Vec<AntId> {
        self.tunnels
            .iter()
            .flatten()
            .filter_map(|&id| self.place(id)?.ant())
            .collect()
    }

    /// Row-major bees on the tunnel places. Queen, hive and stomachs are not included.
    pub fn all_bees(&self) -> Vec<BeeId> {
        self.tunnels
            .iter()
            .flatten()
            .filter_map(|&id| self.place(id))
            .flat_map(|place| place.bees().iter().copied())
            .collect()
    }

    /// Place a new ant, charging its food cost only if it fits
    pub fn deploy_ant(&mut self, ant_type: AntType, place: PlaceId) -> Result<AntId, GameError> {
        if self.food < ant_type.food_cost() {
            return Err(GameError::NotEnoughFood);
        }
        let id = AntId(self.ants.len() as u32);
        let slot = self.place_mut(place).ok_or(GameError::IllegalLocation)?;
        if !slot.add_ant(id, ant_type == AntType::Guard) {
            return Err(GameError::TunnelOccupied);
        }

        let mut ant = Ant::new(ant_type);
        ant.place = Some(place);
        self.ants.push(ant);
        self.food -= ant_type.food_cost();
        self.emit(Event::AntDeployed {
            ant: id,
            kind: ant_type,
            place,
        });
        Ok(id)
    }

    /// Take the guard (or else the plain ant) off a place
    pub fn remove_ant(&mut self, place: PlaceId) -> Option<AntId> {
        let id = self.place_mut(place)?.remove_ant()?;
        if let Some(ant) = self.ant_mut(id) {
            ant.place = None;
        }
        self.emit(Event::AntRemoved { ant: id, place });
        Some(id)
    }

    /// Hand a boost to the ant bees would face at `place`.
    ///
    /// The inventory is only checked, never decremented.
    pub fn apply_boost(&mut self, boost: Boost, place: PlaceId) -> Result<(), GameError> {
        if self.boost_count(boost) < 1 {
            return Err(GameError::NoSuchBoost);
        }
        let id = self
            .place(place)
            .and_then(Place::ant)
            .ok_or(GameError::NoAntAtLocation)?;
        if let Some(ant) = self.ant_mut(id) {
            ant.boost = Some(boost);
        }
        self.emit(Event::BoostApplied { ant: id, boost });
        Ok(())
    }

    /// Move a bee into the arena and onto `place`
    pub fn spawn_bee(&mut self, bee: Bee, place: PlaceId) -> BeeId {
        let id = BeeId(self.bees.len() as u32);
        self.bees.push(bee);
        self.attach_bee(place, id);
        id
    }

    pub(crate) fn attach_bee(&mut self, place: PlaceId, bee: BeeId) {
        let Some(slot) = self.place_mut(place) else {
            return;
        };
        slot.add_bee(bee);
        if let Some(bee) = self.bee_mut(bee) {
            bee.place = Some(place);
        }
    }

    /// Take a bee off its place; no-op if it is not on the board
    pub(crate) fn detach_bee(&mut self, bee: BeeId) -> Option<PlaceId> {
        let place = self.bee_mut(bee)?.place.take()?;
        if let Some(slot) = self.place_mut(place) {
            slot.remove_bee(bee);
        }
        Some(place)
    }

    /// Walk one step toward the queen
    pub fn exit_bee(&mut self, bee: BeeId) {
        let Some(from) = self.bee(bee).and_then(|b| b.place) else {
            return;
        };
        let Some(to) = self.place(from).and_then(Place::exit) else {
            return;
        };
        self.detach_bee(bee);
        self.attach_bee(to, bee);
        self.emit(Event::BeeMoved { bee, from, to });
    }

    /// First bee found walking hive-ward from `from`, between `min_distance`
    /// and `max_distance` hops inclusive
    pub fn closest_bee(&self, from: PlaceId, max_distance: usize, min_distance: usize) -> Option<BeeId> {
        let mut cursor = Some(from);
        for dist in 0..=max_distance {
            let place = self.place(cursor?)?;
            if dist >= min_distance {
                if let Some(bee) = place.first_bee() {
                    return Some(bee);
                }
            }
            cursor = place.entrance();
        }
        None
    }

    /// Ant phase: every ant on the board acts once, guards after the ant they protect
    pub fn ants_act(&mut self, rng: &mut fastrand::Rng) {
        for id in self.all_ants() {
            let guarded = self
                .ant(id)
                .filter(|ant| ant.is_guard())
                .and_then(|ant| ant.place)
                .and_then(|place| self.place(place)?.guarded_ant());
            if let Some(guarded) = guarded {
                self.ant_act(guarded, rng);
            }
            self.ant_act(id, rng);
        }
    }

    /// Bee phase over a snapshot, so a bee that moves is not seen twice
    pub fn bees_act(&mut self) {
        for id in self.all_bees() {
            self.bee_act(id);
        }
    }

    /// Terrain phase: water drowns guards and every ant except scuba
    pub fn places_act(&mut self) {
        let flooded: Vec<PlaceId> = self
            .tunnels
            .iter()
            .flatten()
            .copied()
            .filter(|&id| self.place(id).is_some_and(Place::is_water))
            .collect();

        for place in flooded {
            if let Some(guard) = self.place(place).and_then(Place::guard) {
                self.drown(guard, place);
            }
            let sinking = self
                .place(place)
                .and_then(Place::guarded_ant)
                .filter(|&id| self.ant(id).is_some_and(|ant| !ant.is_scuba()));
            if let Some(ant) = sinking {
                self.drown(ant, place);
            }
        }
    }

    fn drown(&mut self, ant: AntId, place: PlaceId) {
        if let Some(slot) = self.place_mut(place) {
            slot.detach_ant(ant);
        }
        if let Some(ant) = self.ant_mut(ant) {
            ant.place = None;
        }
        self.emit(Event::AntDrowned { ant, place });
    }

    #[inline]
    pub(crate) fn emit(&mut self, event: Event) {
        self.journal.push(event);
    }

    /// Hand over everything recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.journal)
    }
}
