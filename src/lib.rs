//! # Ants vs. Bees
//!
//! A turn-based tower defense: stationary ants hold a set of tunnels while
//! waves of bees march from the hive toward the ant queen.
//!
//! The engine lives in [`world`] (places, colony, combat rules) and
//! [`simulation`] (hive and turn cycle). [`render`] and [`shell`] are the
//! text front end used by the binary.

pub mod ant;
pub mod bee;
pub mod boost;
pub mod cli;
pub mod config;
pub mod error;
pub mod events;
pub mod render;
pub mod shell;
pub mod simulation;
pub mod world;

pub use ant::{Ant, AntId, AntType};
pub use bee::{Bee, BeeId, BeeStatus};
pub use boost::Boost;
pub use cli::Args;
pub use config::GameConfig;
pub use error::{GameError, ParseError, Result};
pub use events::{Event, EventSink, NullSink};
pub use shell::Shell;
pub use simulation::{Game, Hive, Outcome};
pub use world::{Colony, Place, PlaceId};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        Args, Boost, Colony, Event, Game, GameConfig, GameError, Hive, Outcome, ParseError,
        Result, Shell,
    };
}
