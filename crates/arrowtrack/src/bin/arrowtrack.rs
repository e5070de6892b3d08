use std::path::PathBuf;

use clap::Parser;

use arrowtrack::replay::{load_replay, run_replay, write_report};

#[cfg(not(feature = "tracing"))]
use log::LevelFilter;

/// Replay recorded per-frame polygons through the arrow tracker and report
/// the stable arrows of every frame as JSON.
#[derive(Debug, Parser)]
#[command(name = "arrowtrack", version, about)]
struct Cli {
    /// Replay file: `{ "params": {...}, "frames": [[{polygon, hull, area?}, ...], ...] }`.
    input: PathBuf,

    /// Write the JSON report here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log level for the stderr logger.
    #[cfg(not(feature = "tracing"))]
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,

    /// Emit tracing events as JSON.
    #[cfg(feature = "tracing")]
    #[arg(long)]
    json_logs: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    #[cfg(not(feature = "tracing"))]
    arrowtrack::core::init_with_level(cli.log_level)?;

    // The subscriber also forwards `log` records from the library crates.
    #[cfg(feature = "tracing")]
    arrowtrack::core::init_tracing(cli.json_logs);

    run(&cli)
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let replay = load_replay(&cli.input)?;
    let report = run_replay(&replay)?;

    match report.first_stable_frame() {
        Some(index) => log::info!("first stable arrow at frame {index}"),
        None => log::warn!("no stable arrow in {} frames", report.frames.len()),
    }

    match &cli.output {
        Some(path) => {
            write_report(path, &report)?;
            eprintln!("wrote report JSON to {}", path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}
