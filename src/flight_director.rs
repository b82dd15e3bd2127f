use crate::scheduling::{MissionReport, Scheduler};
use crate::{error, info, warn};
use strum_macros::{Display, EnumString};

/// Top-level commands accepted by the flight software.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Command {
    /// Runs the control loop until the mission ends or is cancelled.
    StartMission,
    /// Requests cancellation of the control loop and shuts it down.
    Terminate,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unrecognized command {0:?}")]
    Unrecognized(String),
    #[error("no control loop attached to the flight director")]
    NoScheduler,
}

/// Dispatches commands to the control loop it owns.
#[derive(Default)]
pub struct FlightDirector {
    scheduler: Option<Scheduler>,
    report: Option<MissionReport>,
}

impl FlightDirector {
    pub fn new(scheduler: Scheduler) -> Self { Self { scheduler: Some(scheduler), report: None } }

    pub fn scheduler(&self) -> Option<&Scheduler> { self.scheduler.as_ref() }

    /// Parses and executes one command.
    pub async fn execute(&mut self, raw: &str) -> Result<Command, CommandError> {
        let command: Command =
            raw.trim().parse().map_err(|_| CommandError::Unrecognized(raw.to_owned()))?;
        let scheduler = self.scheduler.as_mut().ok_or(CommandError::NoScheduler)?;
        match command {
            Command::StartMission => {
                info!("Executing {command}.");
                let report = scheduler.run().await;
                info!(
                    "Mission {} after {} cycles (T+{:.1} s) in phase {}.",
                    report.outcome(),
                    report.cycles(),
                    report.sim_time(),
                    report.final_phase()
                );
                self.report = Some(report);
            }
            Command::Terminate => {
                warn!("Executing {command}.");
                scheduler.cancel();
                scheduler.shutdown().await;
            }
        }
        Ok(command)
    }

    /// Executes commands in order. Unrecognized commands are logged and skipped,
    /// a missing control loop aborts the sequence.
    pub async fn execute_all<I, S>(&mut self, commands: I) -> Result<Option<MissionReport>, CommandError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for raw in commands {
            match self.execute(raw.as_ref()).await {
                Ok(_) => (),
                Err(CommandError::Unrecognized(cmd)) => error!("Unknown command {cmd:?}, ignoring."),
                Err(e) => return Err(e),
            }
        }
        Ok(self.report)
    }
}

#[cfg(test)]
mod tests {
    use super::{Command, CommandError, FlightDirector};
    use crate::mission_control::MissionPhase;
    use crate::scheduling::tests::{scripted, CountingSink, RecordingMonitor};
    use crate::scheduling::{LoopState, MissionOutcome, SERIAL};
    use std::sync::atomic::Ordering;

    #[test]
    fn test_command_names() {
        assert_eq!("START_MISSION".parse::<Command>(), Ok(Command::StartMission));
        assert_eq!("TERMINATE".parse::<Command>(), Ok(Command::Terminate));
        assert!("start_mission".parse::<Command>().is_err());
        assert_eq!(Command::StartMission.to_string(), "START_MISSION");
    }

    #[tokio::test]
    async fn test_start_mission_runs_to_completion() {
        let _serial = SERIAL.lock().await;
        let sink = CountingSink::default();
        let scheduler = scripted(4, sink.clone(), RecordingMonitor::default()).build().unwrap();
        let mut director = FlightDirector::new(scheduler);

        let report = director.execute_all(["START_MISSION"]).await.unwrap().unwrap();
        assert_eq!(report.outcome(), MissionOutcome::Completed);
        assert_eq!(report.final_phase(), MissionPhase::PostFlight);
        assert_eq!(sink.records.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_unknown_commands_are_skipped() {
        let _serial = SERIAL.lock().await;
        let scheduler =
            scripted(2, CountingSink::default(), RecordingMonitor::default()).build().unwrap();
        let mut director = FlightDirector::new(scheduler);

        assert_eq!(
            director.execute("LAUNCH_NOW").await,
            Err(CommandError::Unrecognized("LAUNCH_NOW".to_owned()))
        );
        let report = director.execute_all(["SELF_DESTRUCT", "START_MISSION"]).await.unwrap();
        assert_eq!(report.map(|r| r.cycles()), Some(2));
    }

    #[tokio::test]
    async fn test_terminate_before_start() {
        let _serial = SERIAL.lock().await;
        let sink = CountingSink::default();
        let scheduler = scripted(10, sink.clone(), RecordingMonitor::default()).build().unwrap();
        let mut director = FlightDirector::new(scheduler);

        let report = director.execute_all(["TERMINATE", "START_MISSION"]).await.unwrap().unwrap();
        assert_eq!(report.outcome(), MissionOutcome::Cancelled);
        assert_eq!(report.cycles(), 0);
        assert_eq!(sink.finalizes.load(Ordering::SeqCst), 1);
        assert_eq!(director.scheduler().map(|s| s.state()), Some(LoopState::Stopped));
    }

    #[tokio::test]
    async fn test_missing_scheduler_is_fatal() {
        let mut director = FlightDirector::default();
        assert_eq!(director.execute("START_MISSION").await, Err(CommandError::NoScheduler));
        assert_eq!(
            director.execute_all(["BOGUS", "TERMINATE"]).await.map(|r| r.is_some()),
            Err(CommandError::NoScheduler)
        );
    }
}
