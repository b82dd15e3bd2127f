use crate::event;
use crate::telemetry::TelemetrySnapshot;
use aes_gcm::{
    Aes256Gcm, Key, Nonce,
    aead::{Aead, KeyInit},
};
use rand::Rng;
use std::fmt::Write;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SecurityError {
    #[error("sealing the telemetry summary failed")]
    Encryption,
    #[error("sealed telemetry failed authentication, data may have been tampered with")]
    Decryption,
    #[error("no telemetry has been sealed yet")]
    NothingSealed,
}

/// Receives a human-readable summary of the vehicle state once per tick.
pub trait AuditMonitor: Send {
    fn monitor(&mut self, summary: &str) -> Result<(), SecurityError>;
}

/// Summary line handed to the audit monitor.
pub fn telemetry_summary(snapshot: &TelemetrySnapshot) -> String {
    format!(
        "Altitude: {:.2} m | Velocity: {:.2} m/s | Fuel: {:.2} kg",
        snapshot.altitude(),
        snapshot.velocity(),
        snapshot.fuel()
    )
}

struct SealedRecord {
    key: [u8; 32],
    nonce: [u8; 12],
    ciphertext: Vec<u8>,
}

/// Seals every summary under a fresh 256-bit key and 96-bit nonce and keeps the most
/// recent record so it can be verified.
#[derive(Default)]
pub struct IntrusionMonitor {
    last: Option<SealedRecord>,
    sealed: u64,
}

impl IntrusionMonitor {
    pub fn new() -> Self { Self::default() }

    /// Number of summaries sealed so far.
    pub fn sealed(&self) -> u64 { self.sealed }

    /// Encrypts `plaintext` and returns the ciphertext (including the GCM tag) as
    /// lowercase hex.
    pub fn seal(&mut self, plaintext: &str) -> Result<String, SecurityError> {
        let mut rng = rand::rng();
        let mut key = [0u8; 32];
        let mut nonce = [0u8; 12];
        rng.fill(&mut key);
        rng.fill(&mut nonce);

        let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&key));
        let ciphertext = cipher
            .encrypt(Nonce::from_slice(&nonce), plaintext.as_bytes())
            .map_err(|_| SecurityError::Encryption)?;

        let hex = ciphertext.iter().fold(String::with_capacity(ciphertext.len() * 2), |mut acc, b| {
            let _ = write!(acc, "{b:02x}");
            acc
        });
        self.last = Some(SealedRecord { key, nonce, ciphertext });
        self.sealed += 1;
        Ok(hex)
    }

    /// Decrypts and authenticates the most recently sealed record.
    pub fn verify_last(&self) -> Result<String, SecurityError> {
        let record = self.last.as_ref().ok_or(SecurityError::NothingSealed)?;
        let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&record.key));
        let plaintext = cipher
            .decrypt(Nonce::from_slice(&record.nonce), record.ciphertext.as_slice())
            .map_err(|_| SecurityError::Decryption)?;
        String::from_utf8(plaintext).map_err(|_| SecurityError::Decryption)
    }

    #[cfg(test)]
    pub(crate) fn tamper_last(&mut self) {
        if let Some(byte) = self.last.as_mut().and_then(|r| r.ciphertext.first_mut()) {
            *byte ^= 0xff;
        }
    }
}

impl AuditMonitor for IntrusionMonitor {
    fn monitor(&mut self, summary: &str) -> Result<(), SecurityError> {
        let sealed = self.seal(summary)?;
        event!("Sealed telemetry (AES-256-GCM): {sealed}");
        Ok(())
    }
}
