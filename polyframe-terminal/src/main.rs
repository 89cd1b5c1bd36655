/// polyframe terminal player
///
/// Plays one of the 2D animation demos in the terminal.
/// Controls:
///   - Q / ESC / Ctrl+C: Quit
use anyhow::{Context, Result};
use chrono::Timelike;
use env_logger::Env;
use log::info;
use polyframe_core::{ClockTime, DemoSeed};
use polyframe_terminal::{config::USAGE, Config, TerminalApp};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let config = Config::from_args(std::env::args().skip(1))?;
    if config.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let now = chrono::Local::now();
    let seed = DemoSeed {
        clock: ClockTime::new(now.hour(), now.minute()),
        rng_seed: now.timestamp_nanos_opt().unwrap_or_else(|| now.timestamp()) as u64,
    };
    info!("starting '{}' with {:?}", config.demo, seed);

    let demo = config
        .demo
        .build(&seed)
        .with_context(|| format!("building demo '{}'", config.demo))?;
    let mut app = TerminalApp::new(demo, config);
    let summary = app.run()?;

    println!(
        "{} frames, {} pixels plotted, {} clipped",
        summary.frames, summary.stats.plotted, summary.stats.clipped
    );
    Ok(())
}
