//! Audit trail of the control loop: telemetry summaries sealed with AES-256-GCM.
//! Nothing here feeds back into control decisions.

mod intrusion_monitor;

pub use intrusion_monitor::{telemetry_summary, AuditMonitor, IntrusionMonitor, SecurityError};

#[cfg(test)]
mod tests;
