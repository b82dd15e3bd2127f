use super::ConfigurationError;
use std::{env, time::Duration};

/// Timing of the real-time control loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopTiming {
    /// Simulated seconds integrated per tick.
    dt: f64,
    /// Wall-clock budget of one cycle.
    cycle_period: Duration,
    /// Upper bound of one sleep increment, and thus of the cancellation latency.
    sleep_slice: Duration,
    /// Number of cycles between two status reports.
    status_every: u64,
}

impl LoopTiming {
    const DEF_DT: f64 = 0.1;
    const DEF_CYCLE_PERIOD: Duration = Duration::from_millis(100);
    const DEF_SLEEP_SLICE: Duration = Duration::from_millis(10);
    const DEF_STATUS_EVERY: u64 = 10;
    const CYCLE_PERIOD_VAR: &'static str = "FSW_CYCLE_MS";

    pub fn new(
        dt: f64,
        cycle_period: Duration,
        sleep_slice: Duration,
    ) -> Result<Self, ConfigurationError> {
        if !(dt.is_finite() && dt > 0.0) {
            return Err(ConfigurationError::NonPositive { field: "dt", value: dt });
        }
        if sleep_slice.is_zero() {
            return Err(ConfigurationError::NonPositive { field: "sleep_slice", value: 0.0 });
        }
        Ok(Self { dt, cycle_period, sleep_slice, status_every: Self::DEF_STATUS_EVERY })
    }

    /// Default timing with the cycle period optionally overridden by `FSW_CYCLE_MS`.
    /// An unparsable override is reported and ignored.
    pub fn from_env() -> Self {
        let mut timing = Self::default();
        if let Ok(raw) = env::var(Self::CYCLE_PERIOD_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => timing.cycle_period = Duration::from_millis(ms),
                Err(_) => crate::warn!(
                    "Ignoring {}={raw:?}, expected whole milliseconds.",
                    Self::CYCLE_PERIOD_VAR
                ),
            }
        }
        timing
    }

    pub fn dt(&self) -> f64 { self.dt }
    pub fn cycle_period(&self) -> Duration { self.cycle_period }
    pub fn sleep_slice(&self) -> Duration { self.sleep_slice }
    pub fn status_every(&self) -> u64 { self.status_every }
}

impl Default for LoopTiming {
    fn default() -> Self {
        Self {
            dt: Self::DEF_DT,
            cycle_period: Self::DEF_CYCLE_PERIOD,
            sleep_slice: Self::DEF_SLEEP_SLICE,
            status_every: Self::DEF_STATUS_EVERY,
        }
    }
}

/// Fixed fractions and impulses describing the two-stage vehicle's staging behaviour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StagingProfile {
    /// Lower bound of the vehicle mass as a fraction of the initial mass.
    pub mass_floor_fraction: f64,
    /// Remaining fuel fraction at which the first stage is dropped.
    pub separation_fuel_fraction: f64,
    /// Fraction of engine thrust kept by the upper stage.
    pub thrust_retained_fraction: f64,
    /// Dry mass of the dropped first stage as a fraction of the initial mass.
    pub jettisoned_mass_fraction: f64,
    /// Velocity added by the separation impulse in m/s.
    pub separation_boost: f64,
    /// Minimum velocity after a ground contact in m/s.
    pub liftoff_assist_velocity: f64,
    /// Minimum net force as a fraction of thrust while the engine burns.
    pub anti_stall_fraction: f64,
}

impl Default for StagingProfile {
    fn default() -> Self {
        Self {
            mass_floor_fraction: 0.2,
            separation_fuel_fraction: 0.05,
            thrust_retained_fraction: 0.12,
            jettisoned_mass_fraction: 0.05,
            separation_boost: 15.0,
            liftoff_assist_velocity: 0.1,
            anti_stall_fraction: 0.1,
        }
    }
}
