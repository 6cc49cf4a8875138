//! Headless runner: drives the consciousness metric engine and the pipeline
//! stepper on tokio timers and logs what the dashboard would show.

mod args;
mod driver;

use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use aion_core::config::{MetricConfig, PipelineConfig, SimulationConfig};
use aion_core::consciousness::MetricEngine;
use aion_core::pipeline::{PipelinePhase, PipelineStepper};
use aion_core::sim::Simulation;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use crate::args::{Args, CliError};
use crate::driver::TickDriver;

/// Metric samples between progress lines at `info`.
const REPORT_EVERY: u64 = 10;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = match args::parse(std::env::args().skip(1)) {
        Ok(a) => a,
        Err(CliError::Help) => {
            println!("{}", args::usage());
            return Ok(());
        }
        Err(e) => {
            eprintln!("error: {e}\n");
            eprintln!("{}", args::usage());
            process::exit(2);
        }
    };

    let cfg = load_config(&args)?;
    let seed = cfg.seed.unwrap_or_else(clock_seed);
    info!(mode = ?args.mode, seed, ticks = ?args.ticks, "aion_sim starting");

    let shutdown = CancellationToken::new();
    {
        let shutdown = shutdown.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Ctrl-C: stopping simulations");
                shutdown.cancel();
            }
        });
    }

    let consciousness = async {
        if args.mode.runs_consciousness() {
            run_consciousness(&cfg.metric, seed, args.ticks, shutdown.clone()).await;
        }
    };
    let pipeline = async {
        if args.mode.runs_pipeline() {
            run_pipeline(&cfg.pipeline, args.ticks, shutdown.clone()).await;
        }
    };
    tokio::join!(consciousness, pipeline);

    info!("aion_sim finished");
    Ok(())
}

fn load_config(args: &Args) -> Result<SimulationConfig, Box<dyn std::error::Error>> {
    let mut cfg = match &args.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .map_err(|e| format!("read {}: {e}", path.display()))?;
            SimulationConfig::from_json_str(&raw)?
        }
        None => SimulationConfig::default(),
    };
    if args.seed.is_some() {
        cfg.seed = args.seed;
    }
    Ok(cfg)
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

async fn run_consciousness(
    cfg: &MetricConfig,
    seed: u64,
    ticks: Option<u64>,
    shutdown: CancellationToken,
) {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut driver = TickDriver::new(MetricEngine::seeded_with_config(seed, cfg));
    driver.start(move |sample| {
        let _ = tx.send(sample);
    });

    let mut conscious = false;
    loop {
        let sample = tokio::select! {
            _ = shutdown.cancelled() => break,
            next = rx.recv() => match next {
                Some(s) => s,
                None => break,
            },
        };

        debug!(
            t = sample.time,
            pas = sample.pas,
            coherence = sample.coherence,
            bound_states = sample.bound_states,
            "metric sample"
        );
        if sample.time % REPORT_EVERY == 0 {
            info!(
                t = sample.time,
                pas = sample.pas,
                coherence = sample.coherence,
                bound_states = sample.bound_states,
                "PAS {:.3}",
                sample.pas
            );
        }

        let now = sample.is_conscious();
        if now != conscious {
            let status = if now { "EMERGENT" } else { "NOT DETECTED" };
            info!(t = sample.time, pas = sample.pas, "consciousness {status}");
            conscious = now;
        }

        if ticks.is_some_and(|n| sample.time >= n) {
            break;
        }
    }

    driver.stop();
    let readings = driver.with(|e| e.readings());
    let level = readings.level();
    info!(
        state = driver.with(|e| e.run_state().label()),
        ticks = driver.with(|e| e.time()),
        pas = readings.pas,
        coherence = readings.coherence,
        bound_states = readings.bound_states,
        conscious = readings.conscious,
        level = level.name,
        "consciousness run stopped"
    );
}

async fn run_pipeline(cfg: &PipelineConfig, ticks: Option<u64>, shutdown: CancellationToken) {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut driver = TickDriver::new(PipelineStepper::with_config(cfg));
    driver.start(move |advance| {
        let _ = tx.send(advance);
    });

    let mut advanced = 0u64;
    let mut done = false;
    loop {
        let advance = tokio::select! {
            _ = shutdown.cancelled() => break,
            next = rx.recv() => match next {
                Some(a) => a,
                None => break,
            },
        };
        advanced += 1;

        match PipelinePhase::get(advance.phase_id) {
            Some(phase) => info!(
                phase = phase.id,
                name = phase.name,
                progress = driver.with(|s| s.progress_percent()),
                "phase completed"
            ),
            None => error!(
                phase = advance.phase_id,
                "stepper reported an unknown phase"
            ),
        }

        done = advance.finished;
        if done || ticks.is_some_and(|n| advanced >= n) {
            break;
        }
    }

    if done {
        driver.finished().await;
    } else if driver.is_active() {
        info!(advanced, "stopping pipeline before the last phase");
    }
    driver.stop();
    let (state, completed, progress) = driver.with(|s| {
        (
            s.run_state().label(),
            s.completed().len(),
            s.progress_percent(),
        )
    });
    info!(state, completed, progress, "pipeline run stopped");
}
