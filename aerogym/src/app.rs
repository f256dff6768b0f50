//! # Runner
//!
//! Flies a number of episodes with a uniformly random policy and reports the
//! return and length of each. Useful for smoke-testing an environment
//! configuration and for producing rendered output without a trained agent.

use anyhow::{Context, Result};
use rl::{EnvConfig, FlightEnv, LegacyEnv};

#[derive(Clone, Debug)]
pub struct RunOptions {
    pub config: EnvConfig,
    pub episodes: usize,
    pub seed: Option<u64>,
    /// Drive the environment through the four-tuple adapter.
    pub legacy: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EpisodeSummary {
    pub episode: usize,
    pub steps: usize,
    pub total_reward: f64,
    pub sim_time_s: f64,
}

/// Runs `options.episodes` episodes.
///
/// # Errors
///
/// Returns any error raised while building the environment or stepping it.
pub fn run(options: &RunOptions) -> Result<Vec<EpisodeSummary>> {
    let env = FlightEnv::new(options.config.clone()).context("failed to build environment")?;
    tracing::info!(
        "flying {} episode(s) of {:?} in a {} at {} Hz ({} integrator steps per action)",
        options.episodes,
        options.config.task,
        options.config.aircraft.name,
        options.config.agent_interaction_freq,
        env.steps_per_agent_step()
    );
    let mut rng = options.seed.map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed);
    if options.legacy {
        run_legacy(LegacyEnv::new(env), options, &mut rng)
    } else {
        run_modern(env, options, &mut rng)
    }
}

fn episode_seed(options: &RunOptions, episode: usize) -> Option<u64> {
    options.seed.map(|s| s.wrapping_add(episode as u64))
}

fn run_modern(
    mut env: FlightEnv,
    options: &RunOptions,
    rng: &mut fastrand::Rng,
) -> Result<Vec<EpisodeSummary>> {
    let mut summaries = Vec::with_capacity(options.episodes);
    for episode in 0..options.episodes {
        env.reset(episode_seed(options, episode), None)
            .with_context(|| format!("reset failed before episode {episode}"))?;
        let (mut steps, mut total_reward) = (0, 0.0);
        loop {
            let action = env.action_space().sample(rng);
            let step = env.step(&action)?;
            steps += 1;
            total_reward += f64::from(step.reward);
            if step.done() {
                break;
            }
        }
        let sim_time_s = env.sim().map_or(0.0, |sim| sim.sim_time_s());
        summaries.push(report(episode, steps, total_reward, sim_time_s));
    }
    env.close();
    Ok(summaries)
}

fn run_legacy(
    mut env: LegacyEnv<FlightEnv>,
    options: &RunOptions,
    rng: &mut fastrand::Rng,
) -> Result<Vec<EpisodeSummary>> {
    let action_space = env.inner().action_space().clone();
    let mut summaries = Vec::with_capacity(options.episodes);
    for episode in 0..options.episodes {
        env.reset(episode_seed(options, episode))
            .with_context(|| format!("reset failed before episode {episode}"))?;
        let (mut steps, mut total_reward) = (0, 0.0);
        loop {
            let (_, reward, done, _) = env.step(&action_space.sample(rng))?;
            steps += 1;
            total_reward += f64::from(reward);
            if done {
                break;
            }
        }
        let sim_time_s = env.inner().sim().map_or(0.0, |sim| sim.sim_time_s());
        summaries.push(report(episode, steps, total_reward, sim_time_s));
    }
    env.close();
    Ok(summaries)
}

fn report(episode: usize, steps: usize, total_reward: f64, sim_time_s: f64) -> EpisodeSummary {
    tracing::info!(
        "episode {episode}: {steps} steps, return {total_reward:.3}, {sim_time_s:.1} s simulated"
    );
    EpisodeSummary {
        episode,
        steps,
        total_reward,
        sim_time_s,
    }
}
