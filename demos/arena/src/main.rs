//! arena — runnable experiment harness for the rust_swarm framework.
//!
//! Sweeps a set of arena fill ratios, running several trials of each.  Every
//! trial drives a fresh swarm over a statistical light field until all
//! agents decide (or the tick budget runs out), logs per-agent telemetry to
//! CSV, and prints the trial epilogue: simulated duration, decision
//! accuracy, and undecided count.
//!
//! Pass a JSON config path as the first argument, or run with no arguments
//! to use the embedded default sweep.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use swarm_core::{Shade, SwarmConfig};
use swarm_output::{CsvWriter, SwarmOutputObserver};
use swarm_sim::{FillRatioField, FullMesh, SwarmBuilder};

// ── Configuration ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ArenaConfig {
    /// Run parameters shared by every trial; `seed` is offset per trial.
    swarm: SwarmConfig,
    /// Light fraction of the arena floor, one sweep point per entry.
    fill_ratios: Vec<f64>,
    /// Chance of an ambiguous (gray) reading at any sample.
    gray_prob: f64,
    /// Trials per fill ratio.
    num_trials: u64,
    /// Telemetry root; one subdirectory per trial.
    output_dir: String,
}

/// Default sweep: three fill ratios straddling the decision boundary,
/// three trials each.  2 simulated hours at 32 ticks/s is far more budget
/// than a full-mesh swarm needs — trials end at consensus.
const DEFAULT_CONFIG: &str = r#"{
    "swarm": {
        "agent": {
            "observe_interval_ticks": 32,
            "credible_threshold": 0.95
        },
        "num_agents": 24,
        "total_ticks": 230400,
        "seed": 1701,
        "ticks_per_sec": 32,
        "snapshot_interval_ticks": 160
    },
    "fill_ratios": [0.35, 0.65, 0.85],
    "gray_prob": 0.05,
    "num_trials": 3,
    "output_dir": "output"
}"#;

fn load_config() -> Result<ArenaConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("reading config file {path}"))?;
            serde_json::from_str(&text).with_context(|| format!("parsing config file {path}"))
        }
        None => serde_json::from_str(DEFAULT_CONFIG).context("parsing embedded default config"),
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let config = load_config()?;
    fs::create_dir_all(&config.output_dir)?;

    for &fill_ratio in &config.fill_ratios {
        // The arena's true majority color, for the accuracy figure.
        let truth = if fill_ratio >= 0.5 { Shade::Light } else { Shade::Dark };

        for trial in 0..config.num_trials {
            let mut swarm_config = config.swarm.clone();
            swarm_config.seed = config.swarm.seed.wrapping_add(trial);

            let trial_dir = format!(
                "{}/fill-{fill_ratio:.2}-trial-{trial}",
                config.output_dir
            );
            fs::create_dir_all(&trial_dir)?;

            let field = FillRatioField::new(fill_ratio).with_gray_prob(config.gray_prob);
            let mut swarm = SwarmBuilder::new(swarm_config, field, FullMesh).build()?;

            let writer = CsvWriter::new(Path::new(&trial_dir))?;
            let mut observer = SwarmOutputObserver::new(writer);
            let summary = swarm.run(&mut observer);
            if let Some(e) = observer.take_error() {
                eprintln!("telemetry write failed for {trial_dir}: {e}");
            }

            let (h, m, s) = swarm.clock.elapsed_hms();
            let population = swarm.agents().len();
            println!(
                "fill {fill_ratio:.2} trial {trial}:  {h:02}:{m:02}:{s:02} simulated  \
                 accuracy {:.1}%  undecided {}/{population}",
                summary.decided_fraction(truth) * 100.0,
                summary.undecided,
            );
        }
    }

    println!("\nSweep complete");
    Ok(())
}
