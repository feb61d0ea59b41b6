use crate::ant::{Ant, AntId, AntType, Digestion, Harvest, Volley, LEAF_DAMAGE, SPRAY_DAMAGE};
use crate::bee::{BeeAction, BeeId, BeeStatus};
use crate::events::{Event, Unit};
use crate::world::colony::Colony;
use crate::world::place::Place;

impl Colony {
    /// Wound an ant, returns true if it died. Eaters may cough up their meal first.
    pub fn damage_ant(&mut self, id: AntId, amount: i32) -> bool {
        let Some(ant) = self.ant_mut(id).filter(|ant| ant.is_alive()) else {
            return false;
        };
        let died = ant.reduce_armor(amount);
        let armor = ant.armor;
        let place = ant.place;
        let coughed = ant.stomach_mut().and_then(|stomach| stomach.wound(!died));

        self.emit(Event::UnitDamaged {
            unit: Unit::Ant(id),
            amount,
            armor,
        });
        if let (Some(bee), Some(place)) = (coughed, place) {
            self.attach_bee(place, bee);
            self.emit(Event::BeeRegurgitated { ant: id, bee });
        }
        if died {
            self.retire_ant(id);
        }
        died
    }

    /// Wound a bee, returns true if it died
    pub fn damage_bee(&mut self, id: BeeId, amount: i32) -> bool {
        let Some(bee) = self.bee_mut(id).filter(|bee| bee.is_alive()) else {
            return false;
        };
        let died = bee.reduce_armor(amount);
        let armor = bee.armor;

        self.emit(Event::UnitDamaged {
            unit: Unit::Bee(id),
            amount,
            armor,
        });
        if died {
            if let Some(place) = self.detach_bee(id) {
                self.emit(Event::UnitDied {
                    unit: Unit::Bee(id),
                    place,
                });
            }
        }
        died
    }

    fn retire_ant(&mut self, id: AntId) {
        let Some(place) = self.ant_mut(id).and_then(|ant| ant.place.take()) else {
            return;
        };
        if let Some(slot) = self.place_mut(place) {
            slot.detach_ant(id);
        }
        self.emit(Event::UnitDied {
            unit: Unit::Ant(id),
            place,
        });
    }

    /// One ant's turn. Off-board and dead ants do nothing.
    pub fn ant_act(&mut self, id: AntId, rng: &mut fastrand::Rng) {
        let Some(ant_type) = self
            .ant(id)
            .filter(|ant| ant.is_alive() && ant.place.is_some())
            .map(Ant::ant_type)
        else {
            return;
        };
        match ant_type {
            AntType::Grower => self.grow(rng),
            AntType::Thrower | AntType::Scuba => self.throw(id),
            AntType::Eater => self.eat(id),
            AntType::Guard => {}
        }
    }

    fn grow(&mut self, rng: &mut fastrand::Rng) {
        match Harvest::from_roll(rng.f64()) {
            Some(Harvest::Food) => {
                self.increase_food(1);
                self.emit(Event::FoodHarvested { amount: 1 });
            }
            Some(Harvest::Boost(boost)) => self.add_boost(boost),
            None => {}
        }
    }

    fn throw(&mut self, id: AntId) {
        let Some((place, boost)) = self.ant(id).and_then(|ant| Some((ant.place?, ant.boost))) else {
            return;
        };

        match Volley::for_boost(boost) {
            Volley::Spray => {
                self.emit(Event::BugSprayed { ant: id, place });
                while let Some(bee) = self.closest_bee(place, 0, 0) {
                    self.damage_bee(bee, SPRAY_DAMAGE);
                }
                self.damage_ant(id, SPRAY_DAMAGE);
            }
            Volley::Throw { range, status } => {
                // A boost with nothing in range is kept for next turn
                let Some(target) = self.closest_bee(place, range, 0) else {
                    return;
                };
                self.emit(Event::LeafThrown { ant: id, bee: target });
                self.damage_bee(target, LEAF_DAMAGE);
                if status != BeeStatus::None {
                    if let Some(bee) = self.bee_mut(target) {
                        bee.set_status(status);
                    }
                    self.emit(Event::BeeStatusChanged { bee: target, status });
                }
                if let Some(ant) = self.ant_mut(id) {
                    ant.boost = None;
                }
            }
        }
    }

    fn eat(&mut self, id: AntId) {
        let Some(place) = self.ant(id).and_then(|ant| ant.place) else {
            return;
        };
        let Some(digestion) = self
            .ant_mut(id)
            .and_then(|ant| ant.stomach_mut())
            .map(|stomach| stomach.digest())
        else {
            return;
        };

        match digestion {
            Digestion::Hungry => {
                let Some(bee) = self.closest_bee(place, 0, 0) else {
                    return;
                };
                self.detach_bee(bee);
                if let Some(stomach) = self.ant_mut(id).and_then(|ant| ant.stomach_mut()) {
                    stomach.swallow(bee);
                }
                self.emit(Event::BeeSwallowed { ant: id, bee });
            }
            Digestion::Chewing => {}
            Digestion::Done(Some(bee)) => {
                self.attach_bee(place, bee);
                self.emit(Event::BeeDigested { ant: id, bee });
            }
            Digestion::Done(None) => {}
        }
    }

    /// One bee's turn: sting whatever blocks it, otherwise advance
    pub fn bee_act(&mut self, id: BeeId) {
        let Some(place) = self.bee(id).filter(|bee| bee.is_alive()).and_then(|bee| bee.place) else {
            return;
        };
        let blocker = self.place(place).and_then(Place::ant);
        let Some(bee) = self.bee_mut(id) else {
            return;
        };
        let damage = bee.damage;

        match bee.plan(blocker.is_some()) {
            BeeAction::Sting => {
                if let Some(ant) = blocker {
                    self.emit(Event::BeeStung { bee: id, ant });
                    self.damage_ant(ant, damage);
                }
            }
            BeeAction::Advance => self.exit_bee(id),
            BeeAction::Hold => {}
        }
    }
}
