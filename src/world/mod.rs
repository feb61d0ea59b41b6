pub mod colony;
pub mod combat;
pub mod parser;
pub mod place;

pub use colony::Colony;
pub use parser::{parse_coordinate, parse_waves};
pub use place::{Place, PlaceId};
