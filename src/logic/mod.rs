pub mod animation;
pub mod contact_validation;
pub mod crop_advisor;
pub mod weather_mock;

pub use animation::{format_thousands, CounterAnimation};
pub use weather_mock::RefreshSchedule;
