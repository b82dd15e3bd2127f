use super::MissionPhase;
use crate::config::Environment;
use crate::flight_dynamics::{aerodynamics, orbital};
use crate::telemetry::TelemetrySnapshot;

const LIFTOFF_ALTITUDE: f64 = 0.1;
const MAX_Q_EXIT_FUEL_RATIO: f64 = 0.1;
const MAX_Q_EXIT_ALTITUDE: f64 = 70_000.0;
const ADJUSTMENT_FUEL: f64 = 500.0;
const DEORBIT_FUEL: f64 = 300.0;
const DEORBIT_PERIAPSIS: f64 = 300_000.0;
const REENTRY_PERIAPSIS: f64 = 100_000.0;
const RECOVERY_ALTITUDE: f64 = 100_000.0;
const RECOVERY_VELOCITY: f64 = 7_500.0;
const LANDED_VELOCITY: f64 = 5.0;
const LANDED_ALTITUDE: f64 = 50.0;

/// A single forward step of the mission phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseTransition {
    pub from: MissionPhase,
    pub to: MissionPhase,
}

/// Capability the control loop drives once per tick. Implementors own the current
/// phase and report changes as return values, never by calling back into the loop.
pub trait MissionController: Send {
    fn phase(&self) -> MissionPhase;

    /// Evaluates the transition out of the current phase against `snapshot`.
    fn evaluate(&mut self, snapshot: &TelemetrySnapshot) -> Option<PhaseTransition>;
}

/// Pure guard table of the mission.
///
/// Evaluates only the guard leaving `phase` and moves at most one phase forward.
/// `running_max_q` is the highest dynamic pressure seen before this snapshot; the
/// returned value includes this snapshot.
pub fn next_phase(
    phase: MissionPhase,
    snapshot: &TelemetrySnapshot,
    env: &Environment,
    running_max_q: f64,
) -> (MissionPhase, f64) {
    let s = snapshot;
    let q = aerodynamics::dynamic_pressure(env, s.altitude(), s.velocity());

    let guard = match phase {
        MissionPhase::PreLaunch => s.altitude() > LIFTOFF_ALTITUDE,
        MissionPhase::Liftoff => q < running_max_q,
        MissionPhase::MaxQ => {
            s.fuel() <= MAX_Q_EXIT_FUEL_RATIO * s.mass() && s.altitude() > MAX_Q_EXIT_ALTITUDE
        }
        MissionPhase::StageSeparation => (s.stage() == 1 && s.fuel() <= 0.0) || s.stage() > 1,
        MissionPhase::UpperStageBurn => {
            s.velocity() >= orbital::circular_velocity(env, s.altitude())
        }
        MissionPhase::OrbitInsertion => {
            orbital::bound_orbit_energy(env, s.velocity(), s.altitude()) > 0.0
        }
        MissionPhase::MissionOps => s.fuel() < ADJUSTMENT_FUEL,
        MissionPhase::OrbitalAdjustments => {
            s.fuel() < DEORBIT_FUEL && s.periapsis() < DEORBIT_PERIAPSIS
        }
        MissionPhase::Deorbit => s.periapsis() < REENTRY_PERIAPSIS,
        MissionPhase::Reentry => {
            s.altitude() < RECOVERY_ALTITUDE && s.velocity() < RECOVERY_VELOCITY
        }
        MissionPhase::Recovery => s.velocity() < LANDED_VELOCITY && s.altitude() < LANDED_ALTITUDE,
        MissionPhase::PostFlight => false,
    };

    let next = match phase.next() {
        Some(next) if guard => next,
        _ => phase,
    };
    (next, running_max_q.max(q))
}

/// Mission controller backed by [`next_phase`], starting on the pad.
#[derive(Debug, Clone)]
pub struct PhaseController {
    phase: MissionPhase,
    max_q: f64,
    env: Environment,
}

impl PhaseController {
    pub fn new(env: Environment) -> Self {
        Self { phase: MissionPhase::PreLaunch, max_q: 0.0, env }
    }

    /// Highest dynamic pressure observed so far in Pa.
    pub fn max_q(&self) -> f64 { self.max_q }
}

impl MissionController for PhaseController {
    fn phase(&self) -> MissionPhase { self.phase }

    fn evaluate(&mut self, snapshot: &TelemetrySnapshot) -> Option<PhaseTransition> {
        let (next, max_q) = next_phase(self.phase, snapshot, &self.env, self.max_q);
        self.max_q = max_q;
        if next == self.phase {
            return None;
        }
        let transition = PhaseTransition { from: self.phase, to: next };
        self.phase = next;
        Some(transition)
    }
}
