//! Reinforcement learning layer over the flight simulation.
//!
//! [`FlightEnv`] is the episode controller: it converts the fixed 60 Hz
//! integrator into agent steps, manages the reset / step lifecycle, applies
//! the render-mode compatibility rules and routes rendering through the
//! [`RenderDispatcher`]. Everything task-specific (spaces, reward,
//! termination) sits behind the [`Task`] trait.

pub mod compat;
pub mod config;
pub mod dispatcher;
pub mod env;
pub mod environment;
pub mod error;
pub mod frequency;
pub mod render_mode;
pub mod spaces;
pub mod task;

pub use compat::Advisory;
pub use config::EnvConfig;
pub use dispatcher::RenderDispatcher;
pub use env::{Env, Info, LegacyEnv, LegacyStep, Step};
pub use environment::{FlightEnv, Lifecycle};
pub use error::EnvError;
pub use frequency::{steps_per_agent_step, INTEGRATOR_HZ};
pub use render_mode::{Metadata, RenderMode, Variant};
pub use spaces::BoxSpace;
pub use task::{HeadingControlTask, Shaping, Task, TaskKind};
