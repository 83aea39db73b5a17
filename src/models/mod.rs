pub mod charts;
pub mod conditions;
pub mod contact;
pub mod preferences;
pub mod recommendation;
pub mod soil;
pub mod weather;

pub use charts::*;
pub use conditions::*;
pub use contact::*;
pub use preferences::*;
pub use recommendation::*;
pub use soil::*;
pub use weather::*;
