use crate::world::PlaceId;

/// Handle of a bee inside the colony arena
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BeeId(pub u32);

/// One-turn condition inflicted by boosted leaves
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BeeStatus {
    #[default]
    None,
    /// Cannot advance on its next act
    Stuck,
    /// Cannot sting on its next act
    Cold,
}

impl BeeStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            BeeStatus::None => "fine",
            BeeStatus::Stuck => "stuck",
            BeeStatus::Cold => "cold",
        }
    }
}

/// What a bee does with its turn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BeeAction {
    /// Sting the ant blocking the way
    Sting,
    /// Move one place toward the queen
    Advance,
    /// Stay put
    Hold,
}

/// Attacker marching from the hive toward the queen
#[derive(Clone, Debug)]
pub struct Bee {
    pub armor: i32,
    pub damage: i32,
    pub place: Option<PlaceId>,
    status: BeeStatus,
}

impl Bee {
    /// Create a new off-board bee
    pub fn new(armor: i32, damage: i32) -> Self {
        Self {
            armor,
            damage,
            place: None,
            status: BeeStatus::None,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.armor > 0
    }

    #[inline]
    pub fn status(&self) -> BeeStatus {
        self.status
    }

    #[inline]
    pub fn set_status(&mut self, status: BeeStatus) {
        self.status = status;
    }

    /// Subtract damage, returns true if the bee died
    pub fn reduce_armor(&mut self, amount: i32) -> bool {
        self.armor -= amount;
        self.armor <= 0
    }

    /// Decide this turn's action and clear the status, whichever branch is taken
    pub fn plan(&mut self, blocked: bool) -> BeeAction {
        let action = if blocked {
            if self.status == BeeStatus::Cold {
                BeeAction::Hold
            } else {
                BeeAction::Sting
            }
        } else if self.is_alive() && self.status != BeeStatus::Stuck {
            BeeAction::Advance
        } else {
            BeeAction::Hold
        };
        self.status = BeeStatus::None;
        action
    }
}
