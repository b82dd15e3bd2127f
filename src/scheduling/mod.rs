//! Real-time control loop. Drives physics, phase evaluation and the external
//! collaborators tick by tick until the mission ends or cancellation is observed.

mod instance_guard;
mod interrupt;
mod loop_state;
mod scheduler;

pub use instance_guard::InstanceGuard;
pub use interrupt::register_interrupt;
pub use loop_state::LoopState;
pub use scheduler::{MissionOutcome, MissionReport, Scheduler, SchedulerBuilder, SchedulerError};

#[cfg(test)]
pub(crate) use instance_guard::SERIAL;
