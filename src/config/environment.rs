/// Physical constants of the reference body and its atmosphere.
///
/// There is exactly one source for these values in the crate, [`Environment::EARTH`].
/// Every consumer receives a copy at construction time instead of reaching for
/// free-standing constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    /// Gravitational parameter `GM` in m³/s².
    gm: f64,
    /// Mean body radius in m.
    radius: f64,
    /// Standard gravity used by the rocket equation in m/s².
    g0: f64,
    /// Air density at sea level in kg/m³.
    rho0: f64,
    /// Exponential density scale height in m.
    density_scale_height: f64,
    /// Exponential height used to blend sea-level and vacuum engine performance in m.
    pressure_falloff_height: f64,
    /// Reference speed of sound in m/s.
    speed_of_sound: f64,
}

impl Environment {
    pub const EARTH: Environment = Environment {
        gm: 3.986_004_418e14,
        radius: 6_371_000.0,
        g0: 9.806_65,
        rho0: 1.225,
        density_scale_height: 8_500.0,
        pressure_falloff_height: 7_000.0,
        speed_of_sound: 340.29,
    };

    pub fn gm(&self) -> f64 { self.gm }
    pub fn radius(&self) -> f64 { self.radius }
    pub fn g0(&self) -> f64 { self.g0 }
    pub fn speed_of_sound(&self) -> f64 { self.speed_of_sound }

    /// Distance from the body's center for a given altitude.
    pub fn orbital_radius(&self, altitude: f64) -> f64 { self.radius + altitude }

    /// Point-mass inverse-square gravity, `GM / (R + h)²`.
    pub fn gravity_at(&self, altitude: f64) -> f64 {
        let r = self.orbital_radius(altitude);
        self.gm / (r * r)
    }

    /// Exponential atmosphere, `ρ0 · exp(-h / H)`.
    pub fn air_density(&self, altitude: f64) -> f64 {
        self.rho0 * (-altitude / self.density_scale_height).exp()
    }

    /// Ambient pressure relative to sea level, `exp(-h / 7000)`.
    /// `1.0` on the pad, tending to `0.0` in vacuum.
    pub fn pressure_ratio(&self, altitude: f64) -> f64 {
        (-altitude / self.pressure_falloff_height).exp()
    }

    /// Blends a sea-level and a vacuum performance figure by ambient pressure.
    pub fn blend_by_pressure(&self, altitude: f64, sea_level: f64, vacuum: f64) -> f64 {
        let p = self.pressure_ratio(altitude);
        sea_level * p + vacuum * (1.0 - p)
    }
}

impl Default for Environment {
    fn default() -> Self { Self::EARTH }
}
