//! Ping-Pong CLI Application
//!
//! Command-line driver for the pingpong-engine library. It adds:
//! - A single-counter demo run configured from flags
//! - Multi-scenario runs from a TOML file
//! - Concurrent ping workers for exercising one shared counter
//! - Run reports (TXT/JSON)

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

mod config;
mod report;
mod runner;

use config::{OutputFormat, ScenarioConfig};

/// Ping-Pong Counter - drive counters and report their trigger hits
#[derive(Parser, Debug)]
#[command(name = "pingpong-cli")]
#[command(about = "Drive ping-pong counters and report trigger hits", long_about = None)]
#[command(version)]
struct Args {
    /// Initial counter value
    #[arg(long, default_value_t = 0)]
    start: i64,

    /// Trigger period (zero or negative disables the callback)
    #[arg(long, default_value_t = 3)]
    trigger: i64,

    /// Number of pings to perform
    #[arg(long, default_value_t = 11)]
    pings: u64,

    /// Number of worker threads pinging concurrently
    #[arg(long, default_value_t = 1)]
    threads: usize,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Txt)]
    format: OutputFormat,

    /// Output file for the run report (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Path to a scenario file (scenarios.toml) - overrides the flags above
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("Ping-Pong CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using engine library v{}", pingpong_engine::VERSION);

    let (reports, format) = if let Some(config_path) = &args.config {
        // Scenario mode - run every scenario from the TOML file
        log::info!("Loading scenarios from: {:?}", config_path);
        let app_config = config::load_config(config_path)?;
        let reports = runner::run_all(&app_config.scenarios)?;
        (reports, app_config.output.format)
    } else {
        // Demo mode - one counter configured from flags
        let scenario = ScenarioConfig {
            name: "demo".to_string(),
            start: args.start,
            trigger: args.trigger,
            pings: args.pings,
            threads: args.threads.max(1),
        };
        (vec![runner::run_scenario(&scenario)?], args.format)
    };

    let rendered = report::render(&reports, format)?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write report to {:?}", path))?;
            log::info!("Report written to {:?}", path);
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
