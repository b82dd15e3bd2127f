use super::TelemetrySnapshot;
use crate::mission_control::MissionPhase;
use async_trait::async_trait;
use std::{
    fmt,
    path::{Path, PathBuf},
};
use tokio::{
    fs::{File, OpenOptions},
    io::{AsyncWriteExt, BufWriter},
};

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("telemetry log i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("telemetry sink is already closed")]
    Closed,
}

/// One persisted telemetry line: the phase the controller settled on for a tick
/// together with that tick's snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetryRecord {
    phase: MissionPhase,
    snapshot: TelemetrySnapshot,
}

impl TelemetryRecord {
    pub fn new(phase: MissionPhase, snapshot: TelemetrySnapshot) -> Self { Self { phase, snapshot } }

    pub fn phase(&self) -> MissionPhase { self.phase }
    pub fn snapshot(&self) -> &TelemetrySnapshot { &self.snapshot }
}

impl fmt::Display for TelemetryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.snapshot;
        write!(
            f,
            "Phase: {} | Altitude: {:.2} m | Velocity: {:.2} m/s | Fuel: {:.2} kg | \
             Thrust: {:.2} N | Delta-V: {:.2} m/s | Drag: {:.2} N | Apoapsis: {:.2} m | \
             Periapsis: {:.2} m | Stage: {}",
            self.phase,
            s.altitude(),
            s.velocity(),
            s.fuel(),
            s.thrust(),
            s.delta_v(),
            s.drag_force(),
            s.apoapsis(),
            s.periapsis(),
            s.stage()
        )
    }
}

/// Append-only destination for per-tick telemetry. The control loop never reads it back.
#[async_trait]
pub trait TelemetrySink: Send {
    /// Appends one record.
    async fn record(&mut self, record: TelemetryRecord) -> Result<(), TelemetryError>;

    /// Flushes pending records and releases the underlying handle.
    /// Calling it again after a successful close is a no-op.
    async fn finalize(&mut self) -> Result<(), TelemetryError>;
}

/// Human-readable telemetry log written line by line to a file.
pub struct FileTelemetrySink {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
    records: u64,
}

impl FileTelemetrySink {
    /// Opens `path` for appending, creating it if necessary.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, TelemetryError> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path).await?;
        Ok(Self { path, writer: Some(BufWriter::new(file)), records: 0 })
    }

    pub fn records(&self) -> u64 { self.records }
}

#[async_trait]
impl TelemetrySink for FileTelemetrySink {
    async fn record(&mut self, record: TelemetryRecord) -> Result<(), TelemetryError> {
        let writer = self.writer.as_mut().ok_or(TelemetryError::Closed)?;
        writer.write_all(format!("{record}\n").as_bytes()).await?;
        self.records += 1;
        Ok(())
    }

    async fn finalize(&mut self) -> Result<(), TelemetryError> {
        if let Some(mut writer) = self.writer.take() {
            writer.flush().await?;
            writer.into_inner().sync_all().await?;
            crate::info!("Telemetry log {} closed after {} records.", self.path.display(), self.records);
        }
        Ok(())
    }
}
