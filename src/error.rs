use crate::config::ConfigurationError;
use crate::flight_director::CommandError;
use crate::scheduling::SchedulerError;
use crate::telemetry::TelemetryError;

/// Everything that stops the flight software before or instead of a regular mission end.
#[derive(Debug, thiserror::Error)]
pub enum FswError {
    #[error("invalid configuration: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error("control loop wiring failed: {0}")]
    Scheduler(#[from] SchedulerError),
    #[error("command dispatch failed: {0}")]
    Command(#[from] CommandError),
    #[error("telemetry log unavailable: {0}")]
    Telemetry(#[from] TelemetryError),
}
