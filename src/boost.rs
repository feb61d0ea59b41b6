use crate::error::GameError;
use std::fmt;
use std::str::FromStr;

/// Leaf ammunition a defender can be handed before its next action
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Boost {
    FlyingLeaf = 0,
    StickyLeaf = 1,
    IcyLeaf = 2,
    BugSpray = 3,
}

impl FromStr for Boost {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Boost::ALL
            .into_iter()
            .find(|boost| boost.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or(GameError::NoSuchBoost)
    }
}

impl fmt::Display for Boost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Boost {
    /// All boost kinds, in inventory order
    pub const ALL: [Boost; 4] = [
        Boost::FlyingLeaf,
        Boost::StickyLeaf,
        Boost::IcyLeaf,
        Boost::BugSpray,
    ];

    /// Inventory a fresh colony starts with, indexed by [`Boost::index`]
    pub const STARTING_STOCK: [u32; 4] = [1, 1, 1, 0];

    /// Get boost index for array indexing
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Get boost name as string
    pub const fn as_str(self) -> &'static str {
        match self {
            Boost::FlyingLeaf => "FlyingLeaf",
            Boost::StickyLeaf => "StickyLeaf",
            Boost::IcyLeaf => "IcyLeaf",
            Boost::BugSpray => "BugSpray",
        }
    }
}
