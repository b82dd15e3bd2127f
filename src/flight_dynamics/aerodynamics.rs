use crate::config::Environment;

const SUBSONIC_LIMIT: f64 = 0.8;
const TRANSONIC_LIMIT: f64 = 1.2;
const HYPERSONIC_LIMIT: f64 = 5.0;

const SUBSONIC_CD: f64 = 0.25;
const TRANSONIC_CD: f64 = 0.45;
const HYPERSONIC_CD_DENSE: f64 = 0.15;
const HYPERSONIC_CD_THIN: f64 = 0.08;
/// Altitude above which the hypersonic coefficient has reached its thin-air value.
const HYPERSONIC_THIN_ALTITUDE: f64 = 60_000.0;

/// Hypersonic drag coefficient, falling linearly from the dense-air to the thin-air value.
fn hypersonic_floor(altitude: f64) -> f64 {
    let thinning = (altitude / HYPERSONIC_THIN_ALTITUDE).clamp(0.0, 1.0);
    HYPERSONIC_CD_DENSE - (HYPERSONIC_CD_DENSE - HYPERSONIC_CD_THIN) * thinning
}

/// Piecewise drag coefficient over Mach number and altitude.
///
/// Subsonic flow has a constant coefficient, the transonic regime spikes, the
/// supersonic regime decays linearly into the hypersonic floor.
pub fn drag_coefficient(mach: f64, altitude: f64) -> f64 {
    let mach = mach.abs();
    let floor = hypersonic_floor(altitude);
    if mach < SUBSONIC_LIMIT {
        SUBSONIC_CD
    } else if mach < TRANSONIC_LIMIT {
        TRANSONIC_CD
    } else if mach < HYPERSONIC_LIMIT {
        let progress = (mach - TRANSONIC_LIMIT) / (HYPERSONIC_LIMIT - TRANSONIC_LIMIT);
        TRANSONIC_CD - (TRANSONIC_CD - floor) * progress
    } else {
        floor
    }
}

/// Dynamic pressure `q = 0.5·ρ(h)·v²` in Pa.
pub fn dynamic_pressure(env: &Environment, altitude: f64, velocity: f64) -> f64 {
    0.5 * env.air_density(altitude) * velocity * velocity
}

/// Magnitude of the quadratic drag force `q·Cd·A` in N.
pub fn drag_force(env: &Environment, altitude: f64, velocity: f64, drag_area: f64) -> f64 {
    let mach = velocity / env.speed_of_sound();
    dynamic_pressure(env, altitude, velocity) * drag_coefficient(mach, altitude) * drag_area
}
