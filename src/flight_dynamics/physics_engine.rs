use super::{aerodynamics, orbital, VehicleState};
use crate::config::{Environment, StagingProfile, VehicleConfig};
use crate::{event, info};
use crate::telemetry::TelemetrySnapshot;

/// Advances the vehicle's physical state in fixed steps and reports each step as a
/// [`TelemetrySnapshot`]. The engine has no notion of mission phases.
#[derive(Debug, Clone)]
pub struct PhysicsEngine {
    state: VehicleState,
    env: Environment,
    staging: StagingProfile,
    last: TelemetrySnapshot,
}

impl PhysicsEngine {
    /// Creates an engine for a fully fuelled vehicle on the pad.
    pub fn new(config: &VehicleConfig, env: Environment, staging: StagingProfile) -> Self {
        Self::from_state(VehicleState::on_pad(config, &env, &staging), env, staging)
    }

    /// Creates an engine continuing from an arbitrary vehicle state.
    pub fn from_state(state: VehicleState, env: Environment, staging: StagingProfile) -> Self {
        let last = TelemetrySnapshot::from(&state);
        Self { state, env, staging, last }
    }

    pub fn state(&self) -> &VehicleState { &self.state }
    pub fn last_snapshot(&self) -> TelemetrySnapshot { self.last }

    pub fn altitude(&self) -> f64 { self.state.altitude }
    pub fn velocity(&self) -> f64 { self.state.velocity }
    pub fn fuel(&self) -> f64 { self.state.fuel }
    pub fn mass(&self) -> f64 { self.state.mass }
    pub fn stage(&self) -> u8 { self.state.stage }

    /// Performs one integration step of `dt` seconds.
    ///
    /// The order of the steps matters, each one consumes the results of the previous:
    ///  1. fuel and mass depletion (mass floored at a fraction of the initial mass)
    ///  2. inverse-square gravity
    ///  3. thrust blended between sea-level and vacuum by ambient pressure
    ///  4. drag from the exponential atmosphere and a Mach-dependent coefficient
    ///  5. net force, floored at a fraction of thrust while the engine burns
    ///  6. semi-implicit Euler integration of velocity and altitude
    ///  7. ground clamp
    ///  8. orbital elements from the specific orbital energy
    ///  9. Tsiolkovsky delta-v
    /// 10. first-stage separation, after which 8 and 9 are redone for the new mass
    ///     and velocity
    ///
    /// A non-positive (or NaN) `dt` leaves the state untouched and returns the
    /// previous snapshot.
    pub fn advance(&mut self, dt: f64) -> TelemetrySnapshot {
        if dt.is_nan() || dt <= 0.0 {
            event!("Ignoring non-positive time step {dt}.");
            return self.last;
        }
        let env = self.env;
        let staging = self.staging;
        let s = &mut self.state;

        let consumed = s.burn_rate * dt;
        s.fuel = (s.fuel - consumed).max(0.0);
        s.mass = (s.mass - consumed).max(s.initial_mass * staging.mass_floor_fraction);

        s.gravity = env.gravity_at(s.altitude);

        s.thrust = if s.fuel > 0.0 { s.rated_thrust(&env) } else { 0.0 };

        s.drag_force = aerodynamics::drag_force(&env, s.altitude, s.velocity, s.drag_area);

        let drag = if s.velocity < 0.0 { -s.drag_force } else { s.drag_force };
        let unclamped = s.thrust - drag - s.mass * s.gravity;
        let net_force = if s.thrust > 0.0 {
            unclamped.max(staging.anti_stall_fraction * s.thrust)
        } else {
            unclamped
        };

        let acceleration = net_force / s.mass;
        s.velocity += acceleration * dt;
        s.altitude += s.velocity * dt + 0.5 * acceleration * dt * dt;

        if s.altitude < 0.0 {
            s.altitude = 0.0;
            s.velocity = s.velocity.max(staging.liftoff_assist_velocity);
        }

        refresh_orbit(s, &env);

        if self.separate_first_stage() {
            // mass and velocity changed, keep the snapshot self-consistent
            refresh_orbit(&mut self.state, &env);
        }

        self.last = TelemetrySnapshot::from(&self.state);
        self.last
    }

    /// Drops the first stage once its fuel is down to the separation reserve.
    /// Only ever fires while on stage 1, so it happens at most once per mission.
    fn separate_first_stage(&mut self) -> bool {
        let staging = self.staging;
        let s = &mut self.state;
        if s.stage != 1 || s.fuel > staging.separation_fuel_fraction * s.initial_fuel {
            return false;
        }
        s.stage = 2;
        s.burn_rate = s.upper_burn_rate;
        s.thrust_sea *= staging.thrust_retained_fraction;
        s.thrust_vacuum *= staging.thrust_retained_fraction;
        s.thrust *= staging.thrust_retained_fraction;
        s.mass = (s.mass - staging.jettisoned_mass_fraction * s.initial_mass)
            .max(s.initial_mass * staging.mass_floor_fraction);
        s.velocity += staging.separation_boost;
        info!(
            "Stage separation at {:.2} m, {:.2} m/s with {:.2} kg fuel remaining.",
            s.altitude,
            s.velocity,
            s.fuel
        );
        true
    }
}

/// Steps 8 and 9: apsides while ascending, kept as they are for a parabolic
/// trajectory, and the rocket-equation delta-v.
pub(super) fn refresh_orbit(s: &mut VehicleState, env: &Environment) {
    if s.velocity > 0.0 {
        if let Some((apoapsis, periapsis)) = orbital::apsides(env, s.velocity, s.altitude) {
            s.apoapsis = apoapsis;
            s.periapsis = periapsis;
        }
    }
    s.delta_v = orbital::delta_v(s.isp(env), env.g0(), s.initial_mass, s.mass);
}
