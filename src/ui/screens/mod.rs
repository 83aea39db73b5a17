pub mod advisor;
pub mod contact;
pub mod home;
pub mod insights;

pub use advisor::AdvisorScreen;
pub use contact::ContactScreen;
pub use home::HomeScreen;
pub use insights::InsightsScreen;
