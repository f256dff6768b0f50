//! # Flight Simulation Core
//!
//! This module defines the physics-engine handle the environment layer drives
//! and the point-mass implementation that ships with the crate. The handle is
//! deliberately narrow: advance one integration step, reinitialise from new
//! conditions, read and write named properties, and close.

use crate::aircraft::Aircraft;
use crate::error::PhysicsError;
use crate::integrator::integrate;
use crate::properties::{prp, InitialConditions, Property};
use crate::remote::RemoteOutput;
use crate::types::{AircraftState, RemoteFrame, Vec3};
use std::net::SocketAddr;

const DEFAULT_ALTITUDE_FT: f64 = 5000.0;
/// Peak gust angular acceleration in rad/s² at unit turbulence intensity.
const GUST_SCALE: f64 = 0.05;

/// Everything needed to build a fresh physics handle.
#[derive(Clone, Debug)]
pub struct SimConfig {
    pub frequency_hz: u32,
    pub aircraft: Aircraft,
    pub initial_conditions: InitialConditions,
    pub seed: Option<u64>,
    /// When `false` the handle refuses to open a remote output channel.
    pub allow_remote_output: bool,
}

/// The physics-engine handle.
pub trait FlightDynamics {
    /// Advance the state by one integration step of `1 / frequency_hz` seconds.
    ///
    /// # Errors
    ///
    /// Fails once the handle is closed or when the state stops being finite.
    fn run_one_step(&mut self) -> Result<(), PhysicsError>;

    /// Restore the default state, apply `conditions` and reseed.
    ///
    /// # Errors
    ///
    /// Fails on unknown or read-only property names.
    fn reinitialise(
        &mut self,
        conditions: &InitialConditions,
        seed: Option<u64>,
    ) -> Result<(), PhysicsError>;

    /// Release the handle's resources. Further steps fail with
    /// [`PhysicsError::Closed`].
    fn close(&mut self);

    /// # Errors
    ///
    /// Fails with [`PhysicsError::UnknownProperty`] for names the handle does not expose.
    fn get(&self, prop: &Property) -> Result<f64, PhysicsError>;

    /// # Errors
    ///
    /// Fails for unknown or read-only properties.
    fn set(&mut self, prop: &Property, value: f64) -> Result<(), PhysicsError>;

    fn aircraft(&self) -> &Aircraft;

    fn frequency_hz(&self) -> u32;

    fn sim_time_s(&self) -> f64;

    /// Point the remote output channel at `target`, replacing any previous target.
    ///
    /// # Errors
    ///
    /// Fails with [`PhysicsError::RemoteOutputDisabled`] when the handle was
    /// built without remote output.
    fn enable_remote_output(&mut self, target: SocketAddr) -> Result<(), PhysicsError>;

    /// Send the current state over the remote output channel.
    ///
    /// # Errors
    ///
    /// Fails when no channel is configured or the send fails.
    fn emit_remote_frame(&mut self) -> Result<(), PhysicsError>;
}

/// Builds physics handles. The environment calls this on every reset.
pub trait SimulationFactory {
    /// # Errors
    ///
    /// Propagates construction failures of the underlying handle.
    fn create(&self, config: SimConfig) -> Result<Box<dyn FlightDynamics>, PhysicsError>;
}

impl<F> SimulationFactory for F
where
    F: Fn(SimConfig) -> Result<Box<dyn FlightDynamics>, PhysicsError>,
{
    fn create(&self, config: SimConfig) -> Result<Box<dyn FlightDynamics>, PhysicsError> {
        self(config)
    }
}

#[derive(Copy, Clone, Debug, Default)]
pub struct FlightSimFactory;

impl SimulationFactory for FlightSimFactory {
    fn create(&self, config: SimConfig) -> Result<Box<dyn FlightDynamics>, PhysicsError> {
        Ok(Box::new(FlightSim::new(&config)?))
    }
}

/// Point-mass flight simulation
pub struct FlightSim {
    aircraft: Aircraft,
    frequency_hz: u32,
    dt: f64,
    state: AircraftState,
    rng: fastrand::Rng,
    turbulence: f64,
    allow_remote_output: bool,
    remote: Option<RemoteOutput>,
    steps: u64,
    closed: bool,
}

impl FlightSim {
    /// # Errors
    ///
    /// Fails for a zero frequency or invalid initial conditions.
    pub fn new(config: &SimConfig) -> Result<Self, PhysicsError> {
        if config.frequency_hz == 0 {
            return Err(PhysicsError::InvalidFrequency);
        }
        let mut sim = Self {
            aircraft: config.aircraft,
            frequency_hz: config.frequency_hz,
            dt: 1.0 / f64::from(config.frequency_hz),
            state: AircraftState::default(),
            rng: fastrand::Rng::new(),
            turbulence: 1.0,
            allow_remote_output: config.allow_remote_output,
            remote: None,
            steps: 0,
            closed: false,
        };
        sim.reinitialise(&config.initial_conditions, config.seed)?;
        tracing::debug!(
            "created {} simulation at {} Hz (remote output {})",
            sim.aircraft.name,
            sim.frequency_hz,
            if sim.allow_remote_output { "allowed" } else { "disabled" }
        );
        Ok(sim)
    }

    #[must_use]
    pub fn state(&self) -> &AircraftState {
        &self.state
    }

    /// Integration steps taken since the last reinitialisation.
    #[must_use]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Scales the random gusts; `0.0` makes the simulation deterministic.
    pub fn set_turbulence(&mut self, intensity: f64) {
        self.turbulence = intensity.max(0.0);
    }

    fn sample_gust(&mut self) -> Vec3 {
        if self.turbulence == 0.0 {
            return Vec3::ZERO;
        }
        let scale = self.turbulence * GUST_SCALE;
        Vec3::new(
            (self.rng.f64() - 0.5) * 2.0 * scale,
            (self.rng.f64() - 0.5) * 2.0 * scale,
            (self.rng.f64() - 0.5) * scale,
        )
    }
}

impl FlightDynamics for FlightSim {
    fn run_one_step(&mut self) -> Result<(), PhysicsError> {
        if self.closed {
            return Err(PhysicsError::Closed);
        }
        let gust = self.sample_gust();
        integrate(&mut self.state, self.aircraft.cruise_speed_fps(), gust, self.dt);
        self.steps += 1;
        if !self.state.is_finite() {
            return Err(PhysicsError::Diverged { sim_time_s: self.state.sim_time_s });
        }
        Ok(())
    }

    fn reinitialise(
        &mut self,
        conditions: &InitialConditions,
        seed: Option<u64>,
    ) -> Result<(), PhysicsError> {
        let mut state = AircraftState::level(DEFAULT_ALTITUDE_FT, self.aircraft.cruise_speed_fps());
        for (name, value) in conditions.iter() {
            let prop =
                prp::by_name(name).ok_or_else(|| PhysicsError::UnknownProperty(name.to_owned()))?;
            if !prop.write(&mut state, value) {
                return Err(PhysicsError::ReadOnlyProperty(prop.name));
            }
        }
        self.state = state;
        self.rng = seed.map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed);
        self.steps = 0;
        self.closed = false;
        Ok(())
    }

    fn close(&mut self) {
        if !self.closed {
            tracing::debug!("closing {} simulation after {} steps", self.aircraft.name, self.steps);
        }
        self.remote = None;
        self.closed = true;
    }

    fn get(&self, prop: &Property) -> Result<f64, PhysicsError> {
        prop.read(&self.state)
            .ok_or_else(|| PhysicsError::UnknownProperty(prop.name.to_owned()))
    }

    fn set(&mut self, prop: &Property, value: f64) -> Result<(), PhysicsError> {
        if prop.write(&mut self.state, value) {
            Ok(())
        } else if prp::by_name(prop.name).is_some() {
            Err(PhysicsError::ReadOnlyProperty(prop.name))
        } else {
            Err(PhysicsError::UnknownProperty(prop.name.to_owned()))
        }
    }

    fn aircraft(&self) -> &Aircraft {
        &self.aircraft
    }

    fn frequency_hz(&self) -> u32 {
        self.frequency_hz
    }

    fn sim_time_s(&self) -> f64 {
        self.state.sim_time_s
    }

    fn enable_remote_output(&mut self, target: SocketAddr) -> Result<(), PhysicsError> {
        if !self.allow_remote_output {
            return Err(PhysicsError::RemoteOutputDisabled);
        }
        if self.closed {
            return Err(PhysicsError::Closed);
        }
        self.remote = Some(RemoteOutput::open(target)?);
        Ok(())
    }

    fn emit_remote_frame(&mut self) -> Result<(), PhysicsError> {
        let frame = RemoteFrame::from(&self.state);
        let remote = self.remote.as_mut().ok_or(PhysicsError::RemoteOutputNotConfigured)?;
        remote.send(&frame)
    }
}
