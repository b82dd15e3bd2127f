use crate::config::{Environment, StagingProfile, VehicleConfig};

/// Physical state of the vehicle, exclusively owned and mutated by the
/// [`PhysicsEngine`](super::PhysicsEngine).
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleState {
    pub(super) mass: f64,
    pub(super) initial_mass: f64,
    pub(super) fuel: f64,
    pub(super) initial_fuel: f64,
    pub(super) velocity: f64,
    pub(super) altitude: f64,
    pub(super) thrust_sea: f64,
    pub(super) thrust_vacuum: f64,
    pub(super) isp_sea: f64,
    pub(super) isp_vacuum: f64,
    pub(super) burn_rate: f64,
    /// Burn rate the upper stage switches to at separation.
    pub(super) upper_burn_rate: f64,
    pub(super) drag_area: f64,
    pub(super) stage: u8,
    // derived every tick
    pub(super) gravity: f64,
    pub(super) thrust: f64,
    pub(super) drag_force: f64,
    pub(super) delta_v: f64,
    pub(super) apoapsis: f64,
    pub(super) periapsis: f64,
}

impl VehicleState {
    /// Fully fuelled first stage resting on the pad.
    ///
    /// The first stage burns everything above the separation reserve during its burn
    /// time, the upper stage burns the reserve during its own.
    pub fn on_pad(config: &VehicleConfig, env: &Environment, staging: &StagingProfile) -> Self {
        let reserve = staging.separation_fuel_fraction;
        Self {
            mass: config.mass(),
            initial_mass: config.mass(),
            fuel: config.fuel(),
            initial_fuel: config.fuel(),
            velocity: 0.0,
            altitude: 0.0,
            thrust_sea: config.thrust_sea(),
            thrust_vacuum: config.thrust_vacuum(),
            isp_sea: config.isp_sea(),
            isp_vacuum: config.isp_vacuum(),
            burn_rate: (1.0 - reserve) * config.fuel() / config.first_stage_burn_time(),
            upper_burn_rate: reserve * config.fuel() / config.second_stage_burn_time(),
            drag_area: config.drag_area(),
            stage: 1,
            gravity: env.gravity_at(0.0),
            thrust: 0.0,
            drag_force: 0.0,
            delta_v: 0.0,
            apoapsis: 0.0,
            periapsis: 0.0,
        }
    }

    pub fn mass(&self) -> f64 { self.mass }
    pub fn initial_mass(&self) -> f64 { self.initial_mass }
    pub fn fuel(&self) -> f64 { self.fuel }
    pub fn velocity(&self) -> f64 { self.velocity }
    pub fn altitude(&self) -> f64 { self.altitude }
    pub fn burn_rate(&self) -> f64 { self.burn_rate }
    pub fn stage(&self) -> u8 { self.stage }
    pub fn thrust(&self) -> f64 { self.thrust }
    pub fn drag_force(&self) -> f64 { self.drag_force }
    pub fn delta_v(&self) -> f64 { self.delta_v }
    pub fn apoapsis(&self) -> f64 { self.apoapsis }
    pub fn periapsis(&self) -> f64 { self.periapsis }

    /// Engine thrust at the current altitude, ignoring fuel.
    pub fn rated_thrust(&self, env: &Environment) -> f64 {
        env.blend_by_pressure(self.altitude, self.thrust_sea, self.thrust_vacuum)
    }

    /// Specific impulse at the current altitude.
    pub fn isp(&self, env: &Environment) -> f64 {
        env.blend_by_pressure(self.altitude, self.isp_sea, self.isp_vacuum)
    }
}
