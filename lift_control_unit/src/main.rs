//! # Lift Control Unit binary
//!
//! Runs the lift control loop against the simulated plant: a scripted
//! operator raises and lowers the carriage while telemetry goes to the
//! tracing subscriber. Stops when the script finishes or on ctrl-c.

use clap::Parser;
use lift_common::config::{LiftConfig, load_config};
use lift_control_unit::cycle::CycleRunner;
use lift_control_unit::system::LiftSystem;
use lift_control_unit::telemetry::TraceSink;
use lift_hal::{ScriptStep, ScriptedOperator, SimLift};
use std::path::PathBuf;
use std::process;
use std::sync::atomic::Ordering;
use std::time::Duration;
use tracing::{Level, error, info, warn};
use tracing_subscriber::EnvFilter;

/// Lift Control Unit — periodic lift control loop (simulation)
#[derive(Parser, Debug)]
#[command(name = "lift_control_unit")]
#[command(version)]
#[command(about = "Periodic control loop for the robot lift subsystem")]
struct Args {
    /// Path to the lift configuration TOML.
    #[arg(default_value = "config/lift.toml")]
    config: PathBuf,

    /// Override the control cycle period [ms].
    #[arg(long, value_name = "MS")]
    period_ms: Option<u64>,

    /// Enable verbose logging (DEBUG level).
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format.
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();
    setup_tracing(&args);

    info!("Lift Control Unit v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&args) {
        error!("FATAL: {e}");
        process::exit(1);
    }

    info!("Lift Control Unit shutdown complete");
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = if args.config.exists() {
        load_config(&args.config)?
    } else {
        warn!(
            "Config '{}' not found, using stock tuning.",
            args.config.display()
        );
        LiftConfig::default()
    };
    if let Some(period_ms) = args.period_ms {
        config.cycle.period_ms = period_ms;
    }
    config.validate()?;
    info!(
        "Config OK: period={}ms, max_lift_speed={}",
        config.cycle.period_ms, config.lift.max_lift_speed
    );

    let mut sim = SimLift::new(config.sim);
    let operator = ScriptedOperator::new(demo_script());
    let system = LiftSystem::init(
        &config,
        &mut sim,
        Box::new(operator.clone()),
        Box::new(TraceSink),
    )?;

    let period = Duration::from_millis(config.cycle.period_ms);
    let mut runner = CycleRunner::new(system, period);
    let running = runner.running_flag();

    // The plant and the script move in lockstep with the control cycle.
    let script = operator.clone();
    let stop_when_done = runner.running_flag();
    runner = runner.with_hook(Box::new(move |dt| {
        sim.step(dt);
        script.advance();
        if script.finished() {
            stop_when_done.store(false, Ordering::SeqCst);
        }
    }));

    ctrlc::set_handler(move || {
        info!("Received shutdown signal");
        running.store(false, Ordering::SeqCst);
    })?;

    runner.run();

    let stats = runner.stats();
    info!(
        "Done: {} cycles, {} overruns",
        stats.cycle_count, stats.overruns
    );
    Ok(())
}

/// Raise off the bottom, pause, then lower back under override.
///
/// The lowering leg needs the override: with the upper switch not active
/// the arbitration blocks downward motion (inherited interlock polarity,
/// flagged in DESIGN.md), so a plain lower never comes back down.
fn demo_script() -> Vec<ScriptStep> {
    vec![
        ScriptStep::hold(150, 0.6),
        ScriptStep::hold(50, 0.0),
        ScriptStep {
            cycles: 100,
            lift_axis: -0.4,
            ignore_limit_switches: true,
        },
        ScriptStep::hold(25, 0.0),
    ]
}

/// Setup tracing subscriber based on CLI arguments.
fn setup_tracing(args: &Args) {
    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    if args.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .init();
    }
}
