#![allow(dead_code, clippy::similar_names)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
mod config;
mod error;
mod flight_director;
mod flight_dynamics;
mod logger;
mod mission_control;
mod scheduling;
mod security;
mod telemetry;

use crate::config::{Environment, LoopTiming, StagingProfile, VehicleConfig};
use crate::error::FswError;
use crate::flight_director::{Command, FlightDirector};
use crate::flight_dynamics::PhysicsEngine;
use crate::mission_control::PhaseController;
use crate::scheduling::{register_interrupt, MissionReport, Scheduler};
use crate::security::IntrusionMonitor;
use crate::telemetry::FileTelemetrySink;
use std::{env, process::ExitCode};
use tokio_util::sync::CancellationToken;

const ROCKET_SPECS_VAR: &str = "FSW_ROCKET_SPECS";
const DEF_ROCKET_SPECS: &str = "data/rocket_specs.json";
const TELEMETRY_LOG_VAR: &str = "FSW_TELEMETRY_LOG";
const DEF_TELEMETRY_LOG: &str = "telemetry.log";

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    match fly().await {
        Ok(Some(report)) => {
            info!(
                "Flight software exiting: mission {} in phase {} after T+{:.1} s.",
                report.outcome(),
                report.final_phase(),
                report.sim_time()
            );
            ExitCode::SUCCESS
        }
        Ok(None) => {
            info!("Flight software exiting without a mission run.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            fatal!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn fly() -> Result<Option<MissionReport>, FswError> {
    let specs_path = env::var(ROCKET_SPECS_VAR).unwrap_or_else(|_| DEF_ROCKET_SPECS.to_owned());
    let vehicle = VehicleConfig::from_json_file(&specs_path)?;
    info!(
        "Vehicle loaded from {specs_path}: {:.0} kg, {:.0} kg fuel, {:.0} N thrust.",
        vehicle.mass(),
        vehicle.fuel(),
        vehicle.thrust_sea()
    );

    let environment = Environment::EARTH;
    let log_path = env::var(TELEMETRY_LOG_VAR).unwrap_or_else(|_| DEF_TELEMETRY_LOG.to_owned());
    let sink = FileTelemetrySink::open(&log_path).await?;
    let c_tok = CancellationToken::new();

    let scheduler = Scheduler::builder()
        .engine(PhysicsEngine::new(&vehicle, environment, StagingProfile::default()))
        .controller(PhaseController::new(environment))
        .sink(sink)
        .monitor(IntrusionMonitor::new())
        .timing(LoopTiming::from_env())
        .cancel_token(c_tok.clone())
        .build()?;
    let interrupt = register_interrupt(c_tok);

    let mut commands: Vec<String> = env::args().skip(1).collect();
    if commands.is_empty() {
        commands.push(Command::StartMission.to_string());
    }
    let mut director = FlightDirector::new(scheduler);
    let res = director.execute_all(&commands).await;
    interrupt.abort();
    res.map_err(FswError::from)
}
