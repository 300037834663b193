use anyhow::{Context, Result};
use clap::Parser;
use evolife_core::config::AppConfig;
use evolife_core::init_logging;
use evolife_lib::app::HeadlessDriver;
use evolife_lib::Simulation;
use std::path::Path;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Headless predator/prey evolution simulation",
    long_about = None
)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// RNG seed, overrides the config file
    #[arg(long)]
    seed: Option<u64>,

    /// Number of frames to drive
    #[arg(long, default_value_t = 3600)]
    frames: u64,

    /// Driver frame rate
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Initial speed multiplier (0.1 - 5.0)
    #[arg(long)]
    speed: Option<f64>,

    /// Frames between reports
    #[arg(long, default_value_t = 600)]
    report_every: u64,

    /// Print a JSON snapshot line per report
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let path = Path::new(&args.config);
    let (mut config, missing) = if path.exists() {
        let config = AppConfig::load(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
        (config, false)
    } else {
        (AppConfig::default(), true)
    };
    init_logging(&config.logging.level);
    if missing {
        tracing::warn!(path = %path.display(), "Config file not found, using defaults");
    }
    if let Some(seed) = args.seed {
        config.simulation.seed = Some(seed);
    }

    let mut sim = Simulation::from_app_config(&config);
    if let Some(speed) = args.speed {
        sim.set_speed(speed);
    }
    tracing::info!(
        seed = sim.seed(),
        fingerprint = %config.fingerprint(),
        frames = args.frames,
        fps = args.fps,
        "Starting headless run"
    );

    sim.start();
    let mut driver = HeadlessDriver::for_simulation(&sim, args.fps);
    let mut write_error = None;
    driver.run(&mut sim, args.frames, args.report_every, |frame, sim| {
        let stats = sim.stats();
        tracing::info!(
            frame,
            time = stats.total_time,
            generation = stats.generation,
            predators = stats.populations.predators,
            prey = stats.populations.prey,
            food = stats.populations.food,
            birth_rate = stats.rates.birth_rate,
            death_rate = stats.rates.death_rate,
            "Report"
        );
        if args.json && write_error.is_none() {
            match sim.snapshot().to_json() {
                Ok(line) => println!("{line}"),
                Err(e) => write_error = Some(e),
            }
        }
    });
    if let Some(e) = write_error {
        return Err(e).context("Failed to serialize snapshot");
    }

    let metrics = sim.metrics();
    tracing::info!(
        ticks = metrics.tick_count(),
        births = metrics.total_births(),
        deaths = metrics.total_deaths(),
        wall_ms = metrics.elapsed().as_millis() as u64,
        "Run finished"
    );
    Ok(())
}
