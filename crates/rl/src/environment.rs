//! # Flight Environment
//!
//! [`FlightEnv`] turns a physics handle that integrates at a fixed 60 Hz into
//! an agent-facing environment that acts at a lower frequency. Each agent
//! step hands the action to the task, then advances the integrator a fixed
//! number of times.
//!
//! A fresh physics handle is built on every reset. Visualisers survive resets
//! and are only re-pointed at the new handle.

use crate::compat::{self, Advisory};
use crate::config::EnvConfig;
use crate::dispatcher::RenderDispatcher;
use crate::env::{Env, Info, Step};
use crate::error::EnvError;
use crate::frequency::{steps_per_agent_step, INTEGRATOR_HZ};
use crate::render_mode::{Metadata, RenderMode};
use crate::spaces::BoxSpace;
use crate::task::Task;
use physics::{FlightDynamics, FlightSimFactory, SimConfig, SimulationFactory};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    /// Constructed or closed; no physics handle.
    Uninitialized,
    /// Reset, no step taken yet.
    Ready,
    Running,
    /// The task reported termination. Only `reset` leaves this state.
    Terminated,
}

pub struct FlightEnv {
    config: EnvConfig,
    task: Box<dyn Task>,
    factory: Box<dyn SimulationFactory>,
    sim: Option<Box<dyn FlightDynamics>>,
    dispatcher: RenderDispatcher,
    steps_per_agent_step: usize,
    observation_space: BoxSpace,
    action_space: BoxSpace,
    render_mode: Option<RenderMode>,
    advisories: Vec<Advisory>,
    state: Lifecycle,
}

impl FlightEnv {
    /// Builds the configured task and flies it with the built-in [`physics::FlightSim`].
    ///
    /// # Errors
    ///
    /// [`EnvError::Configuration`] when the agent frequency does not fit the
    /// integrator frequency.
    pub fn new(config: EnvConfig) -> Result<Self, EnvError> {
        steps_per_agent_step(INTEGRATOR_HZ, config.agent_interaction_freq)?;
        let task = config
            .task
            .build(config.shaping, config.agent_interaction_freq, config.aircraft);
        Self::with_parts(config, task, Box::new(FlightSimFactory))
    }

    /// Uses a caller-supplied task and physics factory.
    ///
    /// # Errors
    ///
    /// Same as [`FlightEnv::new`].
    pub fn with_parts(
        config: EnvConfig,
        task: Box<dyn Task>,
        factory: Box<dyn SimulationFactory>,
    ) -> Result<Self, EnvError> {
        let steps_per_agent_step =
            steps_per_agent_step(INTEGRATOR_HZ, config.agent_interaction_freq)?;
        let observation_space = task.observation_space();
        let action_space = task.action_space();
        let advisories: Vec<Advisory> =
            compat::metadata_advisory(config.variant, config.render_mode).into_iter().collect();
        for advisory in &advisories {
            advisory.log();
        }
        tracing::debug!(
            "{} environment for {}: {} Hz agent, \
             {steps_per_agent_step} integrator steps per action",
            config.variant,
            config.aircraft.name,
            config.agent_interaction_freq
        );
        Ok(Self {
            dispatcher: RenderDispatcher::new(config.variant, config.render.clone()),
            render_mode: config.render_mode,
            config,
            task,
            factory,
            sim: None,
            steps_per_agent_step,
            observation_space,
            action_space,
            advisories,
            state: Lifecycle::Uninitialized,
        })
    }

    fn transition(&mut self, next: Lifecycle) {
        if self.state != next {
            tracing::debug!("lifecycle {:?} -> {:?}", self.state, next);
        }
        self.state = next;
    }

    fn close_sim(&mut self) {
        if let Some(mut sim) = self.sim.take() {
            sim.close();
        }
    }

    /// Starts a new episode on a freshly built physics handle.
    ///
    /// # Errors
    ///
    /// Propagates failures to build the handle, observe its first state or
    /// re-point the remote viewer.
    pub fn reset(
        &mut self,
        seed: Option<u64>,
        options: Option<&Info>,
    ) -> Result<(Vec<f32>, Info), EnvError> {
        let (render_mode, advisories) = compat::check_at_reset(
            &self.config.aircraft,
            self.config.variant,
            self.config.render_mode,
        );
        self.render_mode = render_mode;
        self.advisories = advisories;

        let initial_conditions = self.task.initial_conditions(seed, options);
        self.close_sim();
        // Left uninitialised if anything below fails.
        self.transition(Lifecycle::Uninitialized);
        let mut sim = self.factory.create(SimConfig {
            frequency_hz: INTEGRATOR_HZ,
            aircraft: self.config.aircraft,
            initial_conditions,
            seed,
            allow_remote_output: self.config.variant.remote_enabled(),
        })?;
        let observation = self.task.observe_first_state(sim.as_mut())?;
        self.dispatcher.on_simulation_replaced(sim.as_mut())?;
        self.sim = Some(sim);
        self.transition(Lifecycle::Ready);
        Ok((observation, Info::new()))
    }

    /// Applies `action` and advances the simulation by one agent step.
    ///
    /// # Errors
    ///
    /// [`EnvError::NotReset`] before the first reset, [`EnvError::EpisodeTerminated`]
    /// after termination, [`EnvError::ShapeMismatch`] for a wrongly sized action
    /// (nothing is advanced), plus render and physics failures.
    pub fn step(&mut self, action: &[f32]) -> Result<Step, EnvError> {
        match self.state {
            Lifecycle::Uninitialized => return Err(EnvError::NotReset),
            Lifecycle::Terminated => return Err(EnvError::EpisodeTerminated),
            Lifecycle::Ready | Lifecycle::Running => {}
        }
        let expected = self.action_space.shape();
        if expected != [action.len()] {
            return Err(EnvError::ShapeMismatch {
                expected: expected.to_vec(),
                actual: vec![action.len()],
            });
        }
        let sim = self.sim.as_deref_mut().ok_or(EnvError::NotReset)?;

        if let Some(mode) = self.render_mode.filter(|m| m.is_step_synchronous()) {
            self.dispatcher.render(
                Some(mode),
                sim,
                self.task.props_to_plot(),
                self.config.flightgear_blocking,
            )?;
        }

        let step = self.task.task_step(sim, action)?;
        for _ in 0..self.steps_per_agent_step {
            sim.run_one_step()?;
        }

        self.transition(if step.terminated { Lifecycle::Terminated } else { Lifecycle::Running });
        Ok(step)
    }

    /// Draws the current state in the effective render mode.
    ///
    /// # Errors
    ///
    /// [`EnvError::NotReset`] when a mode is active but no episode has started,
    /// otherwise whatever the dispatcher reports.
    pub fn render(&mut self) -> Result<(), EnvError> {
        let Some(sim) = self.sim.as_deref_mut() else {
            if self.render_mode.is_some() {
                return Err(EnvError::NotReset);
            }
            tracing::warn!("render() called without a render mode; nothing to draw");
            return Ok(());
        };
        self.dispatcher.render(
            self.render_mode,
            sim,
            self.task.props_to_plot(),
            self.config.flightgear_blocking,
        )
    }

    /// Releases the visualisers and the physics handle. Safe to call repeatedly.
    pub fn close(&mut self) {
        self.dispatcher.close();
        self.close_sim();
        self.transition(Lifecycle::Uninitialized);
    }

    #[must_use]
    pub fn state(&self) -> Lifecycle {
        self.state
    }

    #[must_use]
    pub fn steps_per_agent_step(&self) -> usize {
        self.steps_per_agent_step
    }

    /// The render mode in effect after the last reset's compatibility checks.
    #[must_use]
    pub fn render_mode(&self) -> Option<RenderMode> {
        self.render_mode
    }

    #[must_use]
    pub fn advisories(&self) -> &[Advisory] {
        &self.advisories
    }

    #[must_use]
    pub fn observation_space(&self) -> &BoxSpace {
        &self.observation_space
    }

    #[must_use]
    pub fn action_space(&self) -> &BoxSpace {
        &self.action_space
    }

    #[must_use]
    pub fn sim(&self) -> Option<&dyn FlightDynamics> {
        self.sim.as_deref()
    }

    #[must_use]
    pub fn metadata(&self) -> Metadata {
        self.config.variant.metadata()
    }

    #[must_use]
    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    #[must_use]
    pub fn dispatcher(&self) -> &RenderDispatcher {
        &self.dispatcher
    }
}

impl Env for FlightEnv {
    fn step(&mut self, action: &[f32]) -> Result<Step, EnvError> {
        FlightEnv::step(self, action)
    }

    fn reset(
        &mut self,
        seed: Option<u64>,
        options: Option<&Info>,
    ) -> Result<(Vec<f32>, Info), EnvError> {
        FlightEnv::reset(self, seed, options)
    }

    fn render(&mut self) -> Result<(), EnvError> {
        FlightEnv::render(self)
    }

    fn close(&mut self) {
        FlightEnv::close(self);
    }

    fn obs_size(&self) -> usize {
        self.observation_space.len()
    }

    fn action_size(&self) -> usize {
        self.action_space.len()
    }
}

impl Drop for FlightEnv {
    fn drop(&mut self) {
        self.close();
    }
}
