#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Aerogym Flight Dynamics
//!
//! The physics layer behind the aerogym environments.
//!
//! This crate owns everything the reinforcement learning layer treats as an
//! external collaborator: the aircraft profiles, the catalogue of named
//! simulation properties, and the physics-engine handle that advances the
//! aircraft state at a fixed integration frequency.
//!
//! ## Key Components
//!
//! -   **Aircraft:** [`Aircraft`] profiles describe the airframes that can be
//!     flown, with their cruise speed and the identifiers used by the remote
//!     3-D viewer. They live in the [`aircraft`] module.
//! -   **Properties:** Every readable or writable quantity is a [`Property`]
//!     with a name, a description and a nominal range. The catalogue is the
//!     [`prp`] module; [`InitialConditions`] are keyed by property name.
//! -   **Simulation:** The [`FlightDynamics`] trait is the narrow handle the
//!     environment drives (advance one step, reinitialise, close). The
//!     [`FlightSim`] point-mass integrator implements it, and a
//!     [`SimulationFactory`] builds fresh handles from a [`SimConfig`].
//! -   **Remote output:** A UDP channel streams [`RemoteFrame`]s to an
//!     external 3-D viewer when the handle was built with remote output
//!     allowed.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use physics::{aircraft, prp, FlightDynamics, FlightSim, InitialConditions, SimConfig};
//!
//! let config = SimConfig {
//!     frequency_hz: 60,
//!     aircraft: aircraft::C172,
//!     initial_conditions: InitialConditions::new().with(&prp::ALTITUDE_SL_FT, 5000.0),
//!     seed: Some(7),
//!     allow_remote_output: false,
//! };
//! let mut sim = FlightSim::new(&config)?;
//! sim.set(&prp::AILERON_CMD, 0.2)?;
//! for _ in 0..60 {
//!     sim.run_one_step()?;
//! }
//! ```

pub mod aircraft;
pub mod error;
pub mod integrator;
pub mod properties;
pub mod remote;
pub mod simulation;
pub mod types;

pub use aircraft::Aircraft;
pub use error::PhysicsError;
pub use properties::{prp, InitialConditions, Property};
pub use remote::RemoteOutput;
pub use simulation::{FlightDynamics, FlightSim, FlightSimFactory, SimConfig, SimulationFactory};
pub use types::{AircraftState, Controls, RemoteFrame, Vec3};
