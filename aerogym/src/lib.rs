//! # Aerogym
//!
//! Fixed-wing flight control environments for reinforcement learning.
//!
//! ## Overview
//!
//! An agent flies an aircraft through a physics simulation that integrates at
//! 60 Hz, while acting at a lower, configurable frequency. Each reset builds a
//! fresh simulation; each step applies one action and advances the integrator
//! a fixed number of times. Episodes can be watched through a dashboard
//! figure, a 3-D flight path graph or an external 3-D viewer fed over UDP.
//!
//! ### The Crates
//!
//! -   **`aerogym`:** The crate you are currently viewing. It re-exports the
//!     others and ships the `aerogym` runner binary, which flies episodes
//!     with a random policy.
//! -   **[`physics`]:** Aircraft profiles, the property catalogue and the
//!     physics-engine handle with its point-mass integrator.
//! -   **[`render`]:** The three visualisation backends.
//! -   **[`rl`]:** The episode controller, render dispatcher, compatibility
//!     rules, tasks and the legacy four-tuple adapter.
//!
//! ## Getting Started
//!
//! ```rust,ignore
//! use aerogym::rl::{EnvConfig, FlightEnv};
//!
//! let mut env = FlightEnv::new(EnvConfig::default())?;
//! let (obs, _) = env.reset(Some(0), None)?;
//! let step = env.step(&[0.0, 0.0, 0.0])?;
//! ```

pub mod app;

pub use physics;
pub use render;
pub use rl;
