//! Tasks own everything the environment treats as opaque: the observation and
//! action spaces, the initial conditions, the reward and the termination rule.

mod heading;

pub use heading::{HeadingControlTask, EPISODE_TIME_S, TARGET_HEADING_OPTION};

use crate::env::{Info, Step};
use crate::spaces::BoxSpace;
use physics::{Aircraft, FlightDynamics, InitialConditions, PhysicsError, Property};
use serde::{Deserialize, Serialize};
use std::fmt;

pub trait Task {
    fn observation_space(&self) -> BoxSpace;

    fn action_space(&self) -> BoxSpace;

    /// Conditions for the next episode. `options` come straight from the
    /// caller of `reset`.
    fn initial_conditions(
        &mut self,
        seed: Option<u64>,
        options: Option<&Info>,
    ) -> InitialConditions;

    /// Applies `action` to the simulation and scores the resulting state. Does
    /// not advance the integrator; the environment does that afterwards.
    ///
    /// # Errors
    ///
    /// Propagates property access failures from the simulation.
    fn task_step(
        &mut self,
        sim: &mut dyn FlightDynamics,
        action: &[f32],
    ) -> Result<Step, PhysicsError>;

    /// First observation of a freshly created simulation.
    ///
    /// # Errors
    ///
    /// Propagates property access failures from the simulation.
    fn observe_first_state(
        &mut self,
        sim: &mut dyn FlightDynamics,
    ) -> Result<Vec<f32>, PhysicsError>;

    /// Properties visualisers should display.
    fn props_to_plot(&self) -> &[Property];
}

/// Which reward-shaping terms a task applies.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shaping {
    #[default]
    Standard,
    Extra,
    ExtraSequential,
}

impl fmt::Display for Shaping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Standard => "standard",
            Self::Extra => "extra",
            Self::ExtraSequential => "extra_sequential",
        })
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    #[default]
    HeadingControl,
    TurnHeadingControl,
}

impl TaskKind {
    #[must_use]
    pub fn build(
        self,
        shaping: Shaping,
        agent_interaction_freq: u32,
        aircraft: Aircraft,
    ) -> Box<dyn Task> {
        match self {
            Self::HeadingControl => {
                Box::new(HeadingControlTask::new(shaping, agent_interaction_freq, aircraft))
            }
            Self::TurnHeadingControl => {
                Box::new(HeadingControlTask::turning(shaping, agent_interaction_freq, aircraft))
            }
        }
    }
}
