use crate::ant::{AntId, AntType};
use crate::bee::{BeeId, BeeStatus};
use crate::boost::Boost;
use crate::world::PlaceId;

/// Either side of the fight
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    Ant(AntId),
    Bee(BeeId),
}

/// Something that happened on the board. Formatting is left to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    AntDeployed { ant: AntId, kind: AntType, place: PlaceId },
    AntRemoved { ant: AntId, place: PlaceId },
    AntDrowned { ant: AntId, place: PlaceId },
    BoostApplied { ant: AntId, boost: Boost },
    BoostFound { boost: Boost },
    FoodHarvested { amount: u32 },
    LeafThrown { ant: AntId, bee: BeeId },
    BeeStatusChanged { bee: BeeId, status: BeeStatus },
    BugSprayed { ant: AntId, place: PlaceId },
    BeeStung { bee: BeeId, ant: AntId },
    BeeMoved { bee: BeeId, from: PlaceId, to: PlaceId },
    BeeSwallowed { ant: AntId, bee: BeeId },
    BeeRegurgitated { ant: AntId, bee: BeeId },
    BeeDigested { ant: AntId, bee: BeeId },
    UnitDamaged { unit: Unit, amount: i32, armor: i32 },
    UnitDied { unit: Unit, place: PlaceId },
    WaveSpawned { turn: u32, bees: Vec<BeeId> },
    TurnEnded { turn: u32 },
}

/// Destination for simulation events
pub trait EventSink {
    fn record(&mut self, event: Event);
}

/// Drops every event
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    #[inline]
    fn record(&mut self, _event: Event) {}
}

impl EventSink for Vec<Event> {
    #[inline]
    fn record(&mut self, event: Event) {
        self.push(event);
    }
}
