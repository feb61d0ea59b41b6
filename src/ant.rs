use crate::bee::{BeeId, BeeStatus};
use crate::boost::Boost;
use crate::error::GameError;
use crate::world::PlaceId;
use std::str::FromStr;

/// Damage of a plain leaf
pub const LEAF_DAMAGE: i32 = 1;
/// Damage dealt to every bee (and to the sprayer) by bug spray
pub const SPRAY_DAMAGE: i32 = 10;
/// Reach of an unboosted throw, in places
pub const THROW_RANGE: usize = 3;
/// Reach of a FlyingLeaf throw
pub const FLYING_RANGE: usize = 5;
/// Acts a swallowed bee spends in the stomach before release
pub const DIGESTION_TURNS: u32 = 3;

/// Handle of an ant inside the colony arena
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AntId(pub u32);

/// The five deployable ant types
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AntType {
    Grower,
    Thrower,
    Eater,
    Scuba,
    Guard,
}

impl FromStr for AntType {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grower" => Ok(AntType::Grower),
            "thrower" => Ok(AntType::Thrower),
            "eater" => Ok(AntType::Eater),
            "scuba" => Ok(AntType::Scuba),
            "guard" => Ok(AntType::Guard),
            _ => Err(GameError::UnknownAntType),
        }
    }
}

impl AntType {
    pub const ALL: [AntType; 5] = [
        AntType::Grower,
        AntType::Thrower,
        AntType::Eater,
        AntType::Scuba,
        AntType::Guard,
    ];

    pub const fn armor(self) -> i32 {
        match self {
            AntType::Grower | AntType::Thrower | AntType::Scuba => 1,
            AntType::Eater | AntType::Guard => 2,
        }
    }

    pub const fn food_cost(self) -> u32 {
        match self {
            AntType::Grower => 1,
            AntType::Thrower | AntType::Eater | AntType::Guard => 4,
            AntType::Scuba => 5,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            AntType::Grower => "Grower",
            AntType::Thrower => "Thrower",
            AntType::Eater => "Eater",
            AntType::Scuba => "Scuba",
            AntType::Guard => "Guard",
        }
    }
}

/// Outcome of one step of digestion
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Digestion {
    /// Nothing held, free to swallow
    Hungry,
    /// Still working on the held bee
    Chewing,
    /// Digestion finished, the held bee (if any) is let go
    Done(Option<BeeId>),
}

/// Eater's holding area. Bees in here are off the board.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stomach {
    turns_eating: u32,
    held: Option<BeeId>,
}

impl Stomach {
    #[inline]
    pub fn turns_eating(&self) -> u32 {
        self.turns_eating
    }

    #[inline]
    pub fn held(&self) -> Option<BeeId> {
        self.held
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.held.is_some()
    }

    pub fn swallow(&mut self, bee: BeeId) {
        self.held = Some(bee);
        self.turns_eating = 1;
    }

    /// Advance digestion by one act
    pub fn digest(&mut self) -> Digestion {
        if self.turns_eating == 0 {
            Digestion::Hungry
        } else if self.turns_eating > DIGESTION_TURNS {
            self.turns_eating = 0;
            Digestion::Done(self.held.take())
        } else {
            self.turns_eating += 1;
            Digestion::Chewing
        }
    }

    /// React to the eater taking damage; returns a bee to cough up
    pub fn wound(&mut self, survived: bool) -> Option<BeeId> {
        if survived {
            if self.turns_eating == 1 {
                self.turns_eating = DIGESTION_TURNS;
                return self.held.take();
            }
            None
        } else if (1..=2).contains(&self.turns_eating) {
            self.held.take()
        } else {
            None
        }
    }
}

/// Kind-specific state of a deployed ant
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AntKind {
    Grower,
    Thrower,
    Eater(Stomach),
    Scuba,
    Guard,
}

impl AntKind {
    pub fn ant_type(&self) -> AntType {
        match self {
            AntKind::Grower => AntType::Grower,
            AntKind::Thrower => AntType::Thrower,
            AntKind::Eater(_) => AntType::Eater,
            AntKind::Scuba => AntType::Scuba,
            AntKind::Guard => AntType::Guard,
        }
    }
}

impl From<AntType> for AntKind {
    fn from(ant_type: AntType) -> Self {
        match ant_type {
            AntType::Grower => AntKind::Grower,
            AntType::Thrower => AntKind::Thrower,
            AntType::Eater => AntKind::Eater(Stomach::default()),
            AntType::Scuba => AntKind::Scuba,
            AntType::Guard => AntKind::Guard,
        }
    }
}

/// A stationary defender
#[derive(Clone, Debug)]
pub struct Ant {
    pub kind: AntKind,
    pub armor: i32,
    pub place: Option<PlaceId>,
    pub boost: Option<Boost>,
}

impl Ant {
    /// Create a new off-board ant with its type's starting armor
    pub fn new(ant_type: AntType) -> Self {
        Self {
            kind: ant_type.into(),
            armor: ant_type.armor(),
            place: None,
            boost: None,
        }
    }

    #[inline]
    pub fn ant_type(&self) -> AntType {
        self.kind.ant_type()
    }

    #[inline]
    pub fn food_cost(&self) -> u32 {
        self.ant_type().food_cost()
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.armor > 0
    }

    #[inline]
    pub fn is_guard(&self) -> bool {
        matches!(self.kind, AntKind::Guard)
    }

    #[inline]
    pub fn is_scuba(&self) -> bool {
        matches!(self.kind, AntKind::Scuba)
    }

    pub fn stomach(&self) -> Option<&Stomach> {
        match &self.kind {
            AntKind::Eater(stomach) => Some(stomach),
            _ => None,
        }
    }

    pub fn stomach_mut(&mut self) -> Option<&mut Stomach> {
        match &mut self.kind {
            AntKind::Eater(stomach) => Some(stomach),
            _ => None,
        }
    }

    /// Subtract damage, returns true if the ant died
    pub fn reduce_armor(&mut self, amount: i32) -> bool {
        self.armor -= amount;
        self.armor <= 0
    }
}

/// What a grower digs up
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Harvest {
    Food,
    Boost(Boost),
}

impl Harvest {
    /// Map a uniform roll in [0, 1) to a find; the top 5% finds nothing
    pub fn from_roll(roll: f64) -> Option<Harvest> {
        if roll < 0.6 {
            Some(Harvest::Food)
        } else if roll < 0.7 {
            Some(Harvest::Boost(Boost::FlyingLeaf))
        } else if roll < 0.8 {
            Some(Harvest::Boost(Boost::StickyLeaf))
        } else if roll < 0.9 {
            Some(Harvest::Boost(Boost::IcyLeaf))
        } else if roll < 0.95 {
            Some(Harvest::Boost(Boost::BugSpray))
        } else {
            None
        }
    }
}

/// How a thrower or scuba ant fires this turn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Volley {
    /// Spray every bee at the ant's place, then take the blowback
    Spray,
    /// Throw one leaf at the closest bee within range
    Throw { range: usize, status: BeeStatus },
}

impl Volley {
    pub fn for_boost(boost: Option<Boost>) -> Volley {
        match boost {
            Some(Boost::BugSpray) => Volley::Spray,
            Some(Boost::FlyingLeaf) => Volley::Throw {
                range: FLYING_RANGE,
                status: BeeStatus::None,
            },
            Some(Boost::StickyLeaf) => Volley::Throw {
                range: THROW_RANGE,
                status: BeeStatus::Stuck,
            },
            Some(Boost::IcyLeaf) => Volley::Throw {
                range: THROW_RANGE,
                status: BeeStatus::Cold,
            },
            None => Volley::Throw {
                range: THROW_RANGE,
                status: BeeStatus::None,
            },
        }
    }
}
