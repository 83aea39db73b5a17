pub mod gauge;
pub mod input;
pub mod stat;

pub use gauge::{efficiency_gauge, humidity_gauge, temperature_gauge, wind_gauge};
pub use input::{InputWidget, SelectWidget};
pub use stat::StatTile;
