use crate::flight_dynamics::VehicleState;

/// Vehicle state observed at the end of one tick.
///
/// One snapshot is produced per tick; it is the only data shared between the physics
/// engine, the mission controller and the external collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TelemetrySnapshot {
    altitude: f64,
    velocity: f64,
    fuel: f64,
    mass: f64,
    thrust: f64,
    delta_v: f64,
    drag_force: f64,
    apoapsis: f64,
    periapsis: f64,
    stage: u8,
}

impl TelemetrySnapshot {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        altitude: f64,
        velocity: f64,
        fuel: f64,
        mass: f64,
        thrust: f64,
        delta_v: f64,
        drag_force: f64,
        apoapsis: f64,
        periapsis: f64,
        stage: u8,
    ) -> Self {
        Self {
            altitude,
            velocity,
            fuel,
            mass,
            thrust,
            delta_v,
            drag_force,
            apoapsis,
            periapsis,
            stage,
        }
    }

    pub fn altitude(&self) -> f64 { self.altitude }
    pub fn velocity(&self) -> f64 { self.velocity }
    pub fn fuel(&self) -> f64 { self.fuel }
    pub fn mass(&self) -> f64 { self.mass }
    pub fn thrust(&self) -> f64 { self.thrust }
    pub fn delta_v(&self) -> f64 { self.delta_v }
    pub fn drag_force(&self) -> f64 { self.drag_force }
    pub fn apoapsis(&self) -> f64 { self.apoapsis }
    pub fn periapsis(&self) -> f64 { self.periapsis }
    pub fn stage(&self) -> u8 { self.stage }
}

impl From<&VehicleState> for TelemetrySnapshot {
    fn from(state: &VehicleState) -> Self {
        Self {
            altitude: state.altitude(),
            velocity: state.velocity(),
            fuel: state.fuel(),
            mass: state.mass(),
            thrust: state.thrust(),
            delta_v: state.delta_v(),
            drag_force: state.drag_force(),
            apoapsis: state.apoapsis(),
            periapsis: state.periapsis(),
            stage: state.stage(),
        }
    }
}
