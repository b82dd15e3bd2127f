use super::{FileTelemetrySink, TelemetryError, TelemetryRecord, TelemetrySink, TelemetrySnapshot};
use crate::config::tests::falcon9;
use crate::config::{Environment, StagingProfile};
use crate::flight_dynamics::VehicleState;
use crate::mission_control::MissionPhase;
use approx::assert_relative_eq;

fn sample() -> TelemetrySnapshot {
    TelemetrySnapshot::new(1234.5, 250.25, 300_000.0, 480_000.0, 7.6e6, 150.0, 12_000.126, 5_000.0, -6_000_000.0, 1)
}

#[test]
fn test_record_line_format() {
    let line = TelemetryRecord::new(MissionPhase::MaxQ, sample()).to_string();
    assert_eq!(
        line,
        "Phase: Max Q | Altitude: 1234.50 m | Velocity: 250.25 m/s | Fuel: 300000.00 kg | \
         Thrust: 7600000.00 N | Delta-V: 150.00 m/s | Drag: 12000.13 N | Apoapsis: 5000.00 m | \
         Periapsis: -6000000.00 m | Stage: 1"
    );
}

#[test]
fn test_snapshot_of_pad_state() {
    let state = VehicleState::on_pad(&falcon9(), &Environment::EARTH, &StagingProfile::default());
    let snap = TelemetrySnapshot::from(&state);
    assert_relative_eq!(snap.altitude(), 0.0);
    assert_relative_eq!(snap.velocity(), 0.0);
    assert_relative_eq!(snap.fuel(), falcon9().fuel());
    assert_relative_eq!(snap.mass(), falcon9().mass());
    assert_eq!(snap.stage(), 1);
}

#[tokio::test]
async fn test_file_sink_appends_and_closes_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("telemetry.log");
    std::fs::write(&path, "previous run\n").unwrap();

    let mut sink = FileTelemetrySink::open(&path).await.unwrap();
    sink.record(TelemetryRecord::new(MissionPhase::PreLaunch, TelemetrySnapshot::default())).await.unwrap();
    sink.record(TelemetryRecord::new(MissionPhase::MaxQ, sample())).await.unwrap();
    assert_eq!(sink.records(), 2);

    sink.finalize().await.unwrap();
    sink.finalize().await.unwrap();
    let res = sink.record(TelemetryRecord::new(MissionPhase::MaxQ, sample())).await;
    assert!(matches!(res, Err(TelemetryError::Closed)));

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "previous run");
    assert!(lines[1].starts_with("Phase: Pre-Launch | Altitude: 0.00 m"));
    assert!(lines[2].starts_with("Phase: Max Q | Altitude: 1234.50 m"));
}

#[tokio::test]
async fn test_file_sink_open_fails_for_missing_dir() {
    let dir = tempfile::tempdir().unwrap();
    let res = FileTelemetrySink::open(dir.path().join("missing").join("telemetry.log")).await;
    assert!(matches!(res, Err(TelemetryError::Io(_))));
}
