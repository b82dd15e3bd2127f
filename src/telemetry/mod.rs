//! Per-tick telemetry: the immutable snapshot handed from the physics engine to the
//! mission controller, and the append-only sink that persists it.

mod snapshot;
mod telemetry_sink;

pub use snapshot::TelemetrySnapshot;
pub use telemetry_sink::{FileTelemetrySink, TelemetryError, TelemetryRecord, TelemetrySink};

#[cfg(test)]
mod tests;
