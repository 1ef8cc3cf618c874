use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use turret_control::replay::ReplayPlayer;
use turret_control::StationConfig;
use turret_core::events::Effect;
use turret_station::console::{Console, ConsoleInput, HELP};
use turret_station::ipc;
use turret_station::state::AppState;

/// Command line arguments for the fire-control station
#[derive(Parser, Debug)]
#[command(author, version, about = "Turret fire-control station console")]
struct Args {
    /// JSON config file; missing fields use defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Override the directory for auto-named replays
    #[arg(long)]
    replay_dir: Option<PathBuf>,

    /// Play back a replay file instead of starting the station
    #[arg(long)]
    play: Option<PathBuf>,

    /// Playback speed multiplier
    #[arg(long, default_value_t = 1.0)]
    speed: f64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => StationConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => StationConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(dir) = args.replay_dir {
        config.replay_dir = dir;
    }

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match args.play {
        Some(path) => play_replay(&path, args.speed),
        None => run_station(config),
    }
}

fn run_station(config: StationConfig) -> Result<()> {
    let state = AppState::new();
    let (effects_tx, effects_rx) = mpsc::channel::<Effect>();

    info!(
        "Starting station (seed {}, safe sector {})",
        config.seed, config.safe_sector
    );
    ipc::start_station(&state, config, effects_tx).context("starting control loop")?;

    // Ends when the control loop drops its sender.
    let printer = thread::Builder::new()
        .name("turret-alerts".into())
        .spawn(move || {
            for effect in effects_rx {
                if let Some(alert) = effect.alert() {
                    println!("[{}] {}", alert.level.as_str(), alert.message);
                }
            }
        })
        .context("spawning alert printer")?;

    println!("{HELP}");
    let mut console = Console::new();
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        match console.parse(&line) {
            Ok(ConsoleInput::Command(cmd)) => ipc::send_command(&state, cmd)?,
            Ok(ConsoleInput::Status) => {
                if let Some(snapshot) = ipc::get_snapshot(&state)? {
                    println!("{}", serde_json::to_string_pretty(&snapshot)?);
                }
            }
            Ok(ConsoleInput::Help) => println!("{HELP}"),
            Ok(ConsoleInput::Quit) => break,
            Ok(ConsoleInput::Empty) => {}
            Err(e) => println!("{e}"),
        }
        io::stdout().flush()?;
    }

    ipc::shutdown(&state)?;
    if printer.join().is_err() {
        warn!("Alert printer panicked");
    }
    Ok(())
}

fn play_replay(path: &std::path::Path, speed: f64) -> Result<()> {
    let mut player = ReplayPlayer::new();
    player
        .load(path)
        .with_context(|| format!("loading replay {}", path.display()))?;
    if player.is_empty() {
        warn!("Replay {} contains no events", path.display());
        return Ok(());
    }
    let speed = if speed > 0.0 { speed } else { 1.0 };

    let start = Instant::now();
    while !player.is_finished() {
        let t = start.elapsed().as_secs_f64() * speed;
        if let Some(events) = player.next_events(t) {
            for event in events {
                println!(
                    "[{:>8.3}s] {:<14} {}",
                    event.timestamp,
                    event.kind,
                    serde_json::Value::Object(event.data.clone())
                );
            }
        }
        thread::sleep(Duration::from_millis(20));
    }
    info!("Replay finished ({:.1}s)", player.duration());
    Ok(())
}
