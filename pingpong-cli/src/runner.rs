//! Scenario execution
//!
//! Drives one engine counter through a scenario: create, register a
//! recording callback, ping the configured number of times (optionally from
//! a pool of worker threads), then destroy and report.

use crate::config::ScenarioConfig;
use crate::report::RunReport;
use anyhow::{Context, Result};
use pingpong_engine::{CounterConfig, Engine};
use rayon::prelude::*;
use std::sync::{Arc, Mutex, PoisonError};

/// Run every scenario in order, collecting one report per scenario
pub fn run_all(scenarios: &[ScenarioConfig]) -> Result<Vec<RunReport>> {
    scenarios.iter().map(run_scenario).collect()
}

/// Run a single scenario against a fresh engine
pub fn run_scenario(scenario: &ScenarioConfig) -> Result<RunReport> {
    log::info!(
        "Running scenario '{}' (start={}, trigger={}, pings={}, threads={})",
        scenario.name,
        scenario.start,
        scenario.trigger,
        scenario.pings,
        scenario.threads
    );

    let engine = Engine::new();
    let id = engine.create(
        CounterConfig::new()
            .with_start(scenario.start)
            .with_trigger(scenario.trigger),
    );

    let hits: Arc<Mutex<Vec<i64>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&hits);
    engine.set_callback(
        id,
        Some(Box::new(move |value: i64| {
            sink.lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(value);
        })),
    )?;

    if scenario.threads > 1 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(scenario.threads)
            .build()
            .context("Failed to build ping worker pool")?;
        pool.install(|| {
            (0..scenario.pings)
                .into_par_iter()
                .try_for_each(|_| engine.ping(id))
        })?;
    } else {
        for _ in 0..scenario.pings {
            engine.ping(id)?;
        }
    }

    let final_value = engine.value(id)?;
    engine.destroy(id)?;

    // Concurrent workers record trigger hits out of order
    let mut triggered = hits.lock().unwrap_or_else(PoisonError::into_inner).clone();
    triggered.sort_unstable();

    log::info!(
        "Scenario '{}' finished: final value {}, {} trigger hits",
        scenario.name,
        final_value,
        triggered.len()
    );
    Ok(RunReport::new(scenario, final_value, triggered))
}
