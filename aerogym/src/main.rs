//! # Aerogym Runner
//!
//! Flies episodes of a flight control environment with a random policy.
//! Settings come from an optional JSON file and are then overridden by
//! command-line flags. Set `RUST_LOG` to control log output.

use aerogym::app::{self, RunOptions};
use anyhow::{anyhow, Result};
use clap::{Parser, ValueEnum};
use physics::Aircraft;
use rl::{EnvConfig, RenderMode, Shaping, TaskKind, Variant};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum TaskArg {
    Heading,
    Turn,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ShapingArg {
    Standard,
    Extra,
    ExtraSequential,
}

#[derive(Debug, Parser)]
#[command(name = "aerogym", about = "Fly flight control episodes with a random policy", version)]
struct Cli {
    /// JSON environment configuration; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Aircraft profile name, e.g. C172 or F15.
    #[arg(long)]
    aircraft: Option<String>,

    #[arg(long, value_enum)]
    task: Option<TaskArg>,

    #[arg(long, value_enum)]
    shaping: Option<ShapingArg>,

    /// Agent decisions per simulated second (at most 60).
    #[arg(long)]
    agent_hz: Option<u32>,

    /// human, graph, flightgear or graph_flightgear.
    #[arg(long)]
    render_mode: Option<RenderMode>,

    /// Use the variant that never opens a remote output channel.
    #[arg(long)]
    no_remote_visual: bool,

    #[arg(long, default_value_t = 1)]
    episodes: usize,

    #[arg(long)]
    seed: Option<u64>,

    /// Write rendered frames as PNG files into this directory.
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Drive the environment through the four-tuple step adapter.
    #[arg(long)]
    legacy: bool,
}

impl Cli {
    fn env_config(&self) -> Result<EnvConfig> {
        let mut config = match &self.config {
            Some(path) => EnvConfig::from_json_file(path)?,
            None => EnvConfig::default(),
        };
        if let Some(name) = &self.aircraft {
            config.aircraft =
                *Aircraft::by_name(name).ok_or_else(|| anyhow!("unknown aircraft `{name}`"))?;
        }
        if let Some(task) = self.task {
            config.task = match task {
                TaskArg::Heading => TaskKind::HeadingControl,
                TaskArg::Turn => TaskKind::TurnHeadingControl,
            };
        }
        if let Some(shaping) = self.shaping {
            config.shaping = match shaping {
                ShapingArg::Standard => Shaping::Standard,
                ShapingArg::Extra => Shaping::Extra,
                ShapingArg::ExtraSequential => Shaping::ExtraSequential,
            };
        }
        if let Some(hz) = self.agent_hz {
            config.agent_interaction_freq = hz;
        }
        if self.render_mode.is_some() {
            config.render_mode = self.render_mode;
        }
        if self.no_remote_visual {
            config.variant = Variant::NoRemoteVisual;
        }
        if let Some(dir) = &self.output_dir {
            config.render.output_dir = Some(dir.clone());
        }
        Ok(config)
    }
}

fn init_tracing() {
    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init()
    {
        eprintln!("logging already initialised: {err}");
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let options = RunOptions {
        config: cli.env_config()?,
        episodes: cli.episodes,
        seed: cli.seed,
        legacy: cli.legacy,
    };
    let summaries = app::run(&options)?;
    let total: f64 = summaries.iter().map(|s| s.total_reward).sum();
    let mean = total / summaries.len().max(1) as f64;
    println!("{}", serde_json::json!({ "episodes": summaries.len(), "mean_return": mean }));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_tracing_init_is_tolerated() {
        init_tracing();
        init_tracing();
        tracing::info!("still logging");
    }
}
