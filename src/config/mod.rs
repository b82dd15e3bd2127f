//! Startup configuration: the immutable physical environment, the vehicle record
//! loaded from the rocket spec file, and the tuning constants of the control loop.

mod environment;
mod flight_profile;
mod vehicle_config;

pub use environment::Environment;
pub use flight_profile::{LoopTiming, StagingProfile};
pub use vehicle_config::{ConfigurationError, VehicleConfig};

#[cfg(test)]
pub(crate) mod tests;
