//! Mission-phase state machine. Classifies each telemetry snapshot into one of the
//! twelve ordered flight phases; it never touches the physics.

mod mission_phase;
mod phase_controller;

pub use mission_phase::MissionPhase;
pub use phase_controller::{next_phase, MissionController, PhaseController, PhaseTransition};
