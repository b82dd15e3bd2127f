use super::{telemetry_summary, AuditMonitor, IntrusionMonitor, SecurityError};
use crate::telemetry::TelemetrySnapshot;

#[test]
fn test_summary_format() {
    let snap = TelemetrySnapshot::new(1500.0, 120.456, 380_000.0, 5e5, 0.0, 0.0, 0.0, 0.0, 0.0, 1);
    assert_eq!(
        telemetry_summary(&snap),
        "Altitude: 1500.00 m | Velocity: 120.46 m/s | Fuel: 380000.00 kg"
    );
    assert_eq!(
        telemetry_summary(&TelemetrySnapshot::default()),
        "Altitude: 0.00 m | Velocity: 0.00 m/s | Fuel: 0.00 kg"
    );
}

#[test]
fn test_seal_and_verify() {
    let mut monitor = IntrusionMonitor::new();
    assert_eq!(monitor.verify_last(), Err(SecurityError::NothingSealed));

    let plaintext = "Altitude: 10.00 m | Velocity: 2.00 m/s | Fuel: 1.00 kg";
    let hex = monitor.seal(plaintext).unwrap();
    // ciphertext plus the 16 byte tag, two hex digits per byte
    assert_eq!(hex.len(), (plaintext.len() + 16) * 2);
    assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    assert_eq!(monitor.verify_last().unwrap(), plaintext);
}

#[test]
fn test_fresh_key_per_record() {
    let mut monitor = IntrusionMonitor::new();
    let first = monitor.seal("same").unwrap();
    let second = monitor.seal("same").unwrap();
    assert_ne!(first, second);
    assert_eq!(monitor.sealed(), 2);
}

#[test]
fn test_tampering_is_detected() {
    let mut monitor = IntrusionMonitor::new();
    monitor.monitor("Altitude: 0.00 m | Velocity: 0.00 m/s | Fuel: 0.00 kg").unwrap();
    monitor.tamper_last();
    assert_eq!(monitor.verify_last(), Err(SecurityError::Decryption));
}
