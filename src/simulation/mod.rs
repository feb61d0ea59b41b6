pub mod game;
pub mod hive;

pub use game::{Game, Outcome};
pub use hive::Hive;
