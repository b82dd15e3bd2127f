use super::{ConfigurationError, Environment, LoopTiming, VehicleConfig};
use approx::assert_relative_eq;
use std::time::Duration;

pub(crate) const FALCON_9_SPECS: &str = r#"{
    "name": "Falcon 9",
    "type": "rocket",
    "height_m": 70,
    "diameter_m": 3.7,
    "mass_kg": 549054,
    "stages": 2,
    "company": "SpaceX",
    "thrust_N": 7607000,
    "thrust_vacuum_N": 8227000,
    "ISP_sea_level": 288,
    "ISP_vacuum": 312,
    "fuel_kg": 385000,
    "engine_count": 9,
    "burn_time_sec": { "first_stage": 162, "second_stage": 397 }
}"#;

/// Falcon 9 record used as the reference vehicle across the test suites.
pub(crate) fn falcon9() -> VehicleConfig {
    VehicleConfig::from_json_str(FALCON_9_SPECS).unwrap()
}

#[test]
fn test_parse_rocket_specs_ignores_extra_keys() {
    let config = falcon9();
    assert_relative_eq!(config.mass(), 549_054.0);
    assert_relative_eq!(config.fuel(), 385_000.0);
    assert_relative_eq!(config.thrust_sea(), 7_607_000.0);
    assert_relative_eq!(config.thrust_vacuum(), 8_227_000.0);
    assert_relative_eq!(config.isp_sea(), 288.0);
    assert_relative_eq!(config.isp_vacuum(), 312.0);
    assert_relative_eq!(config.first_stage_burn_time(), 162.0);
    assert_relative_eq!(config.second_stage_burn_time(), 397.0);
}

#[test]
fn test_drag_area_from_diameter() {
    let config = falcon9();
    assert_relative_eq!(config.drag_area(), std::f64::consts::PI * 1.85 * 1.85, epsilon = 1e-9);
}

#[test]
fn test_missing_field_aborts() {
    let without_fuel = FALCON_9_SPECS.replace("\"fuel_kg\": 385000,", "");
    let res = VehicleConfig::from_json_str(&without_fuel);
    assert!(matches!(res, Err(ConfigurationError::Parse(_))));
}

#[test]
fn test_non_positive_field_aborts() {
    let zero_isp = FALCON_9_SPECS.replace("\"ISP_vacuum\": 312", "\"ISP_vacuum\": 0");
    match VehicleConfig::from_json_str(&zero_isp) {
        Err(ConfigurationError::NonPositive { field, .. }) => assert_eq!(field, "ISP_vacuum"),
        other => panic!("expected NonPositive, got {other:?}"),
    }

    let negative_burn = FALCON_9_SPECS.replace("\"second_stage\": 397", "\"second_stage\": -1");
    match VehicleConfig::from_json_str(&negative_burn) {
        Err(ConfigurationError::NonPositive { field, .. }) => {
            assert_eq!(field, "burn_time_sec.second_stage");
        }
        other => panic!("expected NonPositive, got {other:?}"),
    }
}

#[test]
fn test_missing_file_is_io_error() {
    let res = VehicleConfig::from_json_file("does/not/exist/rocket_specs.json");
    assert!(matches!(res, Err(ConfigurationError::Io { .. })));
}

#[test]
fn test_environment_models() {
    let env = Environment::EARTH;
    assert_relative_eq!(env.gravity_at(0.0), 9.82, epsilon = 0.01);
    assert!(env.gravity_at(400_000.0) < env.gravity_at(0.0));
    assert_relative_eq!(env.air_density(0.0), 1.225);
    assert_relative_eq!(env.air_density(8_500.0), 1.225 / std::f64::consts::E, epsilon = 1e-9);
    assert_relative_eq!(env.blend_by_pressure(0.0, 10.0, 20.0), 10.0);
    assert_relative_eq!(env.blend_by_pressure(1e7, 10.0, 20.0), 20.0, epsilon = 1e-9);
}

#[test]
fn test_loop_timing_validation() {
    assert!(LoopTiming::new(0.0, Duration::from_millis(100), Duration::from_millis(10)).is_err());
    assert!(LoopTiming::new(f64::NAN, Duration::from_millis(100), Duration::from_millis(10)).is_err());
    assert!(LoopTiming::new(0.1, Duration::from_millis(100), Duration::ZERO).is_err());
    let timing = LoopTiming::new(0.1, Duration::ZERO, Duration::from_millis(10)).unwrap();
    assert_eq!(timing.cycle_period(), Duration::ZERO);
    assert_eq!(LoopTiming::default().sleep_slice(), Duration::from_millis(10));
}
