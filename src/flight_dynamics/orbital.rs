use crate::config::Environment;

/// Specific energies below this fraction of `GM/r` count as parabolic.
const PARABOLIC_TOLERANCE: f64 = 1e-12;

/// Specific orbital energy `ε = v²/2 − GM/r` in J/kg.
pub fn specific_orbital_energy(env: &Environment, velocity: f64, altitude: f64) -> f64 {
    0.5 * velocity * velocity - env.gm() / env.orbital_radius(altitude)
}

/// Specific orbital energy measured against a circular orbit at the current radius,
/// `v²/2 − GM/(2r)`.
///
/// Zero at exactly circular speed and positive once the vehicle carries enough
/// energy to hold a bound orbit at its current altitude.
pub fn bound_orbit_energy(env: &Environment, velocity: f64, altitude: f64) -> f64 {
    0.5 * velocity * velocity - env.gm() / (2.0 * env.orbital_radius(altitude))
}

/// Vis-viva speed of a circular orbit at the given altitude, `sqrt(GM/r)`.
pub fn circular_velocity(env: &Environment, altitude: f64) -> f64 {
    (env.gm() / env.orbital_radius(altitude)).sqrt()
}

/// Apoapsis and periapsis altitudes above the surface for the current state.
///
/// Returns `None` when the specific energy is zero (up to rounding), where the
/// semi-major axis is undefined; callers keep their previous values in that case.
pub fn apsides(env: &Environment, velocity: f64, altitude: f64) -> Option<(f64, f64)> {
    let energy = specific_orbital_energy(env, velocity, altitude);
    let r = env.orbital_radius(altitude);
    if energy.abs() <= PARABOLIC_TOLERANCE * env.gm() / r {
        return None;
    }
    let semi_major = -env.gm() / (2.0 * energy);
    let apo_radius = 2.0 * semi_major - r;
    let peri_radius = 2.0 * r - apo_radius;
    Some((apo_radius - env.radius(), peri_radius - env.radius()))
}

/// Tsiolkovsky delta-v, `Isp·g0·ln(m0/m)`. Zero unless mass has actually been shed.
pub fn delta_v(isp: f64, g0: f64, initial_mass: f64, mass: f64) -> f64 {
    if mass > 0.0 && mass < initial_mass {
        isp * g0 * (initial_mass / mass).ln()
    } else {
        0.0
    }
}
