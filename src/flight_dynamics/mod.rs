//! Vehicle physics: the per-tick integrator and the aerodynamic and orbital models it
//! is built on. Nothing in here knows about mission phases.

pub(crate) mod aerodynamics;
pub(crate) mod orbital;
mod physics_engine;
mod vehicle_state;

pub use physics_engine::PhysicsEngine;
pub use vehicle_state::VehicleState;
