use super::{InstanceGuard, LoopState};
use crate::config::LoopTiming;
use crate::flight_dynamics::PhysicsEngine;
use crate::mission_control::{MissionController, MissionPhase};
use crate::security::{telemetry_summary, AuditMonitor};
use crate::telemetry::{TelemetryRecord, TelemetrySink, TelemetrySnapshot};
use crate::{error, event, info, log, phase, warn};
use tokio::{sync::watch, time::Instant};
use tokio_util::sync::CancellationToken;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SchedulerError {
    #[error("another control loop is already active in this process")]
    AlreadyActive,
    #[error("control loop wired without a {0}")]
    MissingCollaborator(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum MissionOutcome {
    /// The mission reached its terminal phase.
    Completed,
    /// The loop observed cancellation before the terminal phase.
    Cancelled,
}

/// Summary returned once the control loop has stopped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MissionReport {
    outcome: MissionOutcome,
    cycles: u64,
    sim_time: f64,
    final_phase: MissionPhase,
    final_snapshot: TelemetrySnapshot,
}

impl MissionReport {
    pub fn outcome(&self) -> MissionOutcome { self.outcome }
    pub fn cycles(&self) -> u64 { self.cycles }
    /// Simulated mission time in seconds.
    pub fn sim_time(&self) -> f64 { self.sim_time }
    pub fn final_phase(&self) -> MissionPhase { self.final_phase }
    pub fn final_snapshot(&self) -> &TelemetrySnapshot { &self.final_snapshot }
}

/// Wires the control loop from its collaborators.
///
/// The physics engine, mission controller, telemetry sink and audit monitor are
/// mandatory; timing and the cancellation token fall back to defaults.
#[derive(Default)]
pub struct SchedulerBuilder {
    engine: Option<PhysicsEngine>,
    controller: Option<Box<dyn MissionController>>,
    sink: Option<Box<dyn TelemetrySink>>,
    monitor: Option<Box<dyn AuditMonitor>>,
    timing: Option<LoopTiming>,
    c_tok: Option<CancellationToken>,
}

impl SchedulerBuilder {
    pub fn engine(mut self, engine: PhysicsEngine) -> Self {
        self.engine = Some(engine);
        self
    }

    pub fn controller(mut self, controller: impl MissionController + 'static) -> Self {
        self.controller = Some(Box::new(controller));
        self
    }

    pub fn sink(mut self, sink: impl TelemetrySink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    pub fn monitor(mut self, monitor: impl AuditMonitor + 'static) -> Self {
        self.monitor = Some(Box::new(monitor));
        self
    }

    pub fn timing(mut self, timing: LoopTiming) -> Self {
        self.timing = Some(timing);
        self
    }

    pub fn cancel_token(mut self, c_tok: CancellationToken) -> Self {
        self.c_tok = Some(c_tok);
        self
    }

    /// Claims the process-wide loop slot and assembles the [`Scheduler`].
    pub fn build(self) -> Result<Scheduler, SchedulerError> {
        let engine = self.engine.ok_or(SchedulerError::MissingCollaborator("physics engine"))?;
        let controller =
            self.controller.ok_or(SchedulerError::MissingCollaborator("mission controller"))?;
        let sink = self.sink.ok_or(SchedulerError::MissingCollaborator("telemetry sink"))?;
        let monitor = self.monitor.ok_or(SchedulerError::MissingCollaborator("audit monitor"))?;
        let guard = InstanceGuard::acquire()?;
        let (state_tx, _) = watch::channel(LoopState::Running);
        Ok(Scheduler {
            engine,
            controller,
            sink,
            monitor,
            timing: self.timing.unwrap_or_default(),
            c_tok: self.c_tok.unwrap_or_default(),
            state_tx,
            previous: TelemetrySnapshot::default(),
            cycles: 0,
            outcome: None,
            closed: false,
            _guard: guard,
        })
    }
}

/// The single real-time control loop of the process.
///
/// Each tick strictly sequences physics, phase evaluation and collaborator
/// notification, then sleeps out the rest of the cycle in short slices so that a
/// cancellation is observed within one slice.
pub struct Scheduler {
    engine: PhysicsEngine,
    controller: Box<dyn MissionController>,
    sink: Box<dyn TelemetrySink>,
    monitor: Box<dyn AuditMonitor>,
    timing: LoopTiming,
    c_tok: CancellationToken,
    state_tx: watch::Sender<LoopState>,
    /// Snapshot of the previous tick, handed to the audit monitor one cycle late.
    /// All zero before the first tick.
    previous: TelemetrySnapshot,
    cycles: u64,
    outcome: Option<MissionOutcome>,
    closed: bool,
    _guard: InstanceGuard,
}

impl Scheduler {
    pub fn builder() -> SchedulerBuilder { SchedulerBuilder::default() }

    pub fn cancel_token(&self) -> CancellationToken { self.c_tok.clone() }
    pub fn cycles(&self) -> u64 { self.cycles }
    pub fn phase(&self) -> MissionPhase { self.controller.phase() }
    pub fn state(&self) -> LoopState { *self.state_tx.borrow() }
    pub fn subscribe_state(&self) -> watch::Receiver<LoopState> { self.state_tx.subscribe() }

    /// Requests cancellation; the loop stops at its next check.
    pub fn cancel(&self) {
        self.c_tok.cancel();
        self.publish_cancel_requested();
    }

    /// Moves a running loop to [`LoopState::CancelRequested`]. Later states are kept.
    fn publish_cancel_requested(&self) {
        self.state_tx.send_if_modified(|state| {
            let running = *state == LoopState::Running;
            if running {
                *state = LoopState::CancelRequested;
            }
            running
        });
    }

    #[allow(clippy::cast_precision_loss)]
    fn sim_time(&self) -> f64 { self.cycles as f64 * self.timing.dt() }

    fn report(&self, outcome: MissionOutcome) -> MissionReport {
        MissionReport {
            outcome,
            cycles: self.cycles,
            sim_time: self.sim_time(),
            final_phase: self.controller.phase(),
            final_snapshot: self.engine.last_snapshot(),
        }
    }

    /// Runs the loop until the terminal phase is reached or cancellation is observed,
    /// then performs the shutdown sequence. Running a stopped loop again only returns
    /// its report.
    pub async fn run(&mut self) -> MissionReport {
        if let Some(outcome) = self.outcome {
            warn!("Control loop already stopped, not restarting.");
            return self.report(outcome);
        }
        info!(
            "Control loop started: dt {} s, cycle {} ms, phase {}.",
            self.timing.dt(),
            self.timing.cycle_period().as_millis(),
            self.controller.phase()
        );

        let outcome = loop {
            let cycle_start = Instant::now();
            if self.c_tok.is_cancelled() {
                break MissionOutcome::Cancelled;
            }
            let phase = self.tick().await;
            if phase.is_terminal() {
                break MissionOutcome::Completed;
            }
            if self.cycles % self.timing.status_every() == 0 {
                self.log_status(phase);
            }
            if !Self::sleep_until_next_cycle(&self.c_tok, self.timing, cycle_start).await {
                break MissionOutcome::Cancelled;
            }
        };

        if outcome == MissionOutcome::Cancelled {
            self.publish_cancel_requested();
            warn!("Cancellation observed after {} cycles in phase {}.", self.cycles, self.controller.phase());
        }
        self.outcome = Some(outcome);
        self.shutdown().await;
        self.report(outcome)
    }

    /// One control cycle: physics, phase evaluation, collaborator notification.
    async fn tick(&mut self) -> MissionPhase {
        let snapshot = self.engine.advance(self.timing.dt());
        self.cycles += 1;

        if let Some(transition) = self.controller.evaluate(&snapshot) {
            phase!(
                "{} -> {} at T+{:.1} s, altitude {:.2} m, velocity {:.2} m/s.",
                transition.from,
                transition.to,
                self.sim_time(),
                snapshot.altitude(),
                snapshot.velocity()
            );
        }
        let phase = self.controller.phase();

        let record = TelemetryRecord::new(phase, snapshot);
        event!("{record}");
        if let Err(e) = self.sink.record(record).await {
            error!("Telemetry sink rejected cycle {}: {e}", self.cycles);
        }
        if let Err(e) = self.monitor.monitor(&telemetry_summary(&self.previous)) {
            error!("Audit monitor failed on cycle {}: {e}", self.cycles);
        }
        self.previous = snapshot;
        phase
    }

    fn log_status(&self, phase: MissionPhase) {
        let s = self.engine.last_snapshot();
        log!(
            "Cycle {} | T+{:.1} s | Phase: {phase} | Altitude: {:.2} m | Velocity: {:.2} m/s | \
             Fuel: {:.2} kg | Thrust: {:.2} N | Delta-V: {:.2} m/s | Drag: {:.2} N",
            self.cycles,
            self.sim_time(),
            s.altitude(),
            s.velocity(),
            s.fuel(),
            s.thrust(),
            s.delta_v(),
            s.drag_force()
        );
    }

    /// Sleeps out the remaining cycle budget in slices of at most `sleep_slice`.
    /// Returns `false` as soon as cancellation is observed.
    async fn sleep_until_next_cycle(
        c_tok: &CancellationToken,
        timing: LoopTiming,
        cycle_start: Instant,
    ) -> bool {
        let deadline = cycle_start + timing.cycle_period();
        loop {
            let now = Instant::now();
            if now >= deadline {
                // a zero cycle budget still has to give the runtime a chance
                tokio::task::yield_now().await;
                return !c_tok.is_cancelled();
            }
            let slice = (deadline - now).min(timing.sleep_slice());
            tokio::select! {
                biased;
                () = c_tok.cancelled() => return false,
                () = tokio::time::sleep(slice) => {}
            }
        }
    }

    /// Flushes and closes the telemetry sink and publishes [`LoopState::Stopped`].
    ///
    /// Only the first call does any work; it returns whether this call performed the
    /// shutdown.
    pub async fn shutdown(&mut self) -> bool {
        if self.closed {
            return false;
        }
        self.closed = true;
        if self.outcome.is_none() {
            self.outcome = Some(MissionOutcome::Cancelled);
        }
        if self.state() == LoopState::CancelRequested {
            // observers get to see the request before the loop reports Stopped
            tokio::task::yield_now().await;
        }
        if let Err(e) = self.sink.finalize().await {
            error!("Failed to close telemetry sink: {e}");
        }
        self.state_tx.send_replace(LoopState::Stopped);
        info!(
            "Control loop stopped after {} cycles (T+{:.1} s) in phase {}.",
            self.cycles,
            self.sim_time(),
            self.controller.phase()
        );
        true
    }
}
