use crate::ant::AntId;
use crate::bee::BeeId;

/// Handle of a place inside the colony arena
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlaceId(pub u32);

/// Tunnel cell: one plain ant, one guard, any number of bees
#[derive(Clone, Debug)]
pub struct Place {
    pub name: String,
    water: bool,
    exit: Option<PlaceId>,     // toward the queen
    entrance: Option<PlaceId>, // toward the hive
    ant: Option<AntId>,
    guard: Option<AntId>,
    bees: Vec<BeeId>, // arrival order
}

impl Place {
    /// Create a new place leading to `exit`
    pub fn new(name: impl Into<String>, water: bool, exit: Option<PlaceId>) -> Self {
        Self {
            name: name.into(),
            water,
            exit,
            entrance: None,
            ant: None,
            guard: None,
            bees: Vec::new(),
        }
    }

    #[inline]
    pub fn is_water(&self) -> bool {
        self.water
    }

    #[inline]
    pub fn exit(&self) -> Option<PlaceId> {
        self.exit
    }

    #[inline]
    pub fn entrance(&self) -> Option<PlaceId> {
        self.entrance
    }

    #[inline]
    pub fn set_entrance(&mut self, entrance: PlaceId) {
        self.entrance = Some(entrance);
    }

    /// The ant bees see here: the guard if present, else the plain ant
    #[inline]
    pub fn ant(&self) -> Option<AntId> {
        self.guard.or(self.ant)
    }

    /// The plain ant, ignoring any guard
    #[inline]
    pub fn guarded_ant(&self) -> Option<AntId> {
        self.ant
    }

    #[inline]
    pub fn guard(&self) -> Option<AntId> {
        self.guard
    }

    /// Fill the guard or the plain slot; false if that slot is taken
    pub fn add_ant(&mut self, ant: AntId, is_guard: bool) -> bool {
        let slot = if is_guard { &mut self.guard } else { &mut self.ant };
        if slot.is_some() {
            return false;
        }
        *slot = Some(ant);
        true
    }

    /// Take the guard out first, otherwise the plain ant
    pub fn remove_ant(&mut self) -> Option<AntId> {
        self.guard.take().or_else(|| self.ant.take())
    }

    /// Clear whichever slot holds `ant`
    pub fn detach_ant(&mut self, ant: AntId) -> bool {
        if self.guard == Some(ant) {
            self.guard = None;
            true
        } else if self.ant == Some(ant) {
            self.ant = None;
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn bees(&self) -> &[BeeId] {
        &self.bees
    }

    /// Bee closest to the queen within this place
    #[inline]
    pub fn first_bee(&self) -> Option<BeeId> {
        self.bees.first().copied()
    }

    #[inline]
    pub fn add_bee(&mut self, bee: BeeId) {
        self.bees.push(bee);
    }

    /// Remove a bee; false if it was not here
    pub fn remove_bee(&mut self, bee: BeeId) -> bool {
        match self.bees.iter().position(|&b| b == bee) {
            Some(idx) => {
                self.bees.remove(idx);
                true
            }
            None => false,
        }
    }
}
