use serde::Deserialize;
use std::{f64::consts::PI, path::Path};

/// Errors raised while loading or validating the vehicle record.
/// Any of these aborts mission initialization before the loop is constructed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("could not read rocket specs at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed rocket specs: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("parameter `{field}` must be strictly positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
struct BurnTimes {
    first_stage: f64,
    second_stage: f64,
}

/// Vehicle parameters as written by the rocket spec tooling (`rocket_specs.json`).
/// Keys the flight software does not need are ignored.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct VehicleConfig {
    #[serde(rename = "mass_kg")]
    mass: f64,
    #[serde(rename = "fuel_kg")]
    fuel: f64,
    #[serde(rename = "thrust_N")]
    thrust_sea: f64,
    #[serde(rename = "thrust_vacuum_N")]
    thrust_vacuum: f64,
    #[serde(rename = "ISP_sea_level")]
    isp_sea: f64,
    #[serde(rename = "ISP_vacuum")]
    isp_vacuum: f64,
    #[serde(rename = "diameter_m")]
    diameter: f64,
    #[serde(rename = "burn_time_sec")]
    burn_time: BurnTimes,
}

impl VehicleConfig {
    /// Reads and validates the rocket spec file at `path`.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigurationError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Parses and validates a rocket spec document.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigurationError> {
        let config: VehicleConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        let fields = [
            ("mass_kg", self.mass),
            ("fuel_kg", self.fuel),
            ("thrust_N", self.thrust_sea),
            ("thrust_vacuum_N", self.thrust_vacuum),
            ("ISP_sea_level", self.isp_sea),
            ("ISP_vacuum", self.isp_vacuum),
            ("diameter_m", self.diameter),
            ("burn_time_sec.first_stage", self.burn_time.first_stage),
            ("burn_time_sec.second_stage", self.burn_time.second_stage),
        ];
        for (field, value) in fields {
            // also rejects NaN and infinities
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigurationError::NonPositive { field, value });
            }
        }
        Ok(())
    }

    pub fn mass(&self) -> f64 { self.mass }
    pub fn fuel(&self) -> f64 { self.fuel }
    pub fn thrust_sea(&self) -> f64 { self.thrust_sea }
    pub fn thrust_vacuum(&self) -> f64 { self.thrust_vacuum }
    pub fn isp_sea(&self) -> f64 { self.isp_sea }
    pub fn isp_vacuum(&self) -> f64 { self.isp_vacuum }
    pub fn first_stage_burn_time(&self) -> f64 { self.burn_time.first_stage }
    pub fn second_stage_burn_time(&self) -> f64 { self.burn_time.second_stage }

    /// Frontal reference area `π·r²` derived from the diameter.
    pub fn drag_area(&self) -> f64 {
        let r = self.diameter / 2.0;
        PI * r * r
    }
}
