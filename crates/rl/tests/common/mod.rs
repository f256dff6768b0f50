#![allow(dead_code)]

use physics::{
    prp, Aircraft, FlightDynamics, InitialConditions, PhysicsError, Property, SimConfig,
    SimulationFactory,
};
use rl::{BoxSpace, EnvConfig, FlightEnv, Info, Step, Task};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared counters observed by the tests while the environment owns the stubs.
#[derive(Clone, Default)]
pub struct Counters {
    pub integrator_steps: Arc<AtomicUsize>,
    pub created: Arc<AtomicUsize>,
    pub closed: Arc<AtomicUsize>,
    pub remote_configured: Arc<AtomicUsize>,
    pub remote_frames: Arc<AtomicUsize>,
    pub task_steps: Arc<AtomicUsize>,
}

impl Counters {
    pub fn get(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

/// Physics handle that only counts what is asked of it.
pub struct CountingSim {
    aircraft: Aircraft,
    frequency_hz: u32,
    values: HashMap<&'static str, f64>,
    allow_remote_output: bool,
    remote_target: Option<SocketAddr>,
    counters: Counters,
    ticks: u64,
}

impl CountingSim {
    pub fn new(config: SimConfig, counters: Counters) -> Self {
        counters.created.fetch_add(1, Ordering::SeqCst);
        let mut values = HashMap::new();
        for (name, value) in config.initial_conditions.iter() {
            if let Some(prop) = prp::by_name(name) {
                values.insert(prop.name, value);
            }
        }
        Self {
            aircraft: config.aircraft,
            frequency_hz: config.frequency_hz,
            values,
            allow_remote_output: config.allow_remote_output,
            remote_target: None,
            counters,
            ticks: 0,
        }
    }
}

impl FlightDynamics for CountingSim {
    fn run_one_step(&mut self) -> Result<(), PhysicsError> {
        self.counters.integrator_steps.fetch_add(1, Ordering::SeqCst);
        self.ticks += 1;
        Ok(())
    }

    fn reinitialise(
        &mut self,
        conditions: &InitialConditions,
        _seed: Option<u64>,
    ) -> Result<(), PhysicsError> {
        self.values.clear();
        for (name, value) in conditions.iter() {
            let prop =
                prp::by_name(name).ok_or_else(|| PhysicsError::UnknownProperty(name.to_owned()))?;
            self.values.insert(prop.name, value);
        }
        self.ticks = 0;
        Ok(())
    }

    fn close(&mut self) {
        self.counters.closed.fetch_add(1, Ordering::SeqCst);
    }

    fn get(&self, prop: &Property) -> Result<f64, PhysicsError> {
        if prop.name == prp::SIM_TIME_S.name {
            return Ok(self.sim_time_s());
        }
        prp::by_name(prop.name)
            .map(|p| self.values.get(p.name).copied().unwrap_or(0.0))
            .ok_or_else(|| PhysicsError::UnknownProperty(prop.name.to_owned()))
    }

    fn set(&mut self, prop: &Property, value: f64) -> Result<(), PhysicsError> {
        self.values.insert(prop.name, value);
        Ok(())
    }

    fn aircraft(&self) -> &Aircraft {
        &self.aircraft
    }

    fn frequency_hz(&self) -> u32 {
        self.frequency_hz
    }

    fn sim_time_s(&self) -> f64 {
        self.ticks as f64 / f64::from(self.frequency_hz)
    }

    fn enable_remote_output(&mut self, target: SocketAddr) -> Result<(), PhysicsError> {
        if !self.allow_remote_output {
            return Err(PhysicsError::RemoteOutputDisabled);
        }
        self.counters.remote_configured.fetch_add(1, Ordering::SeqCst);
        self.remote_target = Some(target);
        Ok(())
    }

    fn emit_remote_frame(&mut self) -> Result<(), PhysicsError> {
        if self.remote_target.is_none() {
            return Err(PhysicsError::RemoteOutputNotConfigured);
        }
        self.counters.remote_frames.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

pub fn counting_factory(counters: &Counters) -> Box<dyn SimulationFactory> {
    let counters = counters.clone();
    Box::new(move |config: SimConfig| -> Result<Box<dyn FlightDynamics>, PhysicsError> {
        Ok(Box::new(CountingSim::new(config, counters.clone())))
    })
}

const PLOTTED: [Property; 2] = [prp::ALTITUDE_SL_FT, prp::HEADING_DEG];

/// Two-input task that terminates after a fixed number of steps.
pub struct ScriptedTask {
    pub episode_len: usize,
    steps: usize,
    counters: Counters,
}

impl ScriptedTask {
    pub fn new(episode_len: usize, counters: &Counters) -> Self {
        Self {
            episode_len,
            steps: 0,
            counters: counters.clone(),
        }
    }
}

impl Task for ScriptedTask {
    fn observation_space(&self) -> BoxSpace {
        BoxSpace::from_bounds([(0.0, f32::INFINITY)])
    }

    fn action_space(&self) -> BoxSpace {
        BoxSpace::from_bounds([(-1.0, 1.0); 2])
    }

    fn initial_conditions(
        &mut self,
        _seed: Option<u64>,
        _options: Option<&Info>,
    ) -> InitialConditions {
        self.steps = 0;
        InitialConditions::new().with(&prp::ALTITUDE_SL_FT, 1000.0)
    }

    fn task_step(
        &mut self,
        sim: &mut dyn FlightDynamics,
        action: &[f32],
    ) -> Result<Step, PhysicsError> {
        self.counters.task_steps.fetch_add(1, Ordering::SeqCst);
        sim.set(&prp::AILERON_CMD, f64::from(action[0]))?;
        sim.set(&prp::ELEVATOR_CMD, f64::from(action[1]))?;
        self.steps += 1;
        let observation = vec![sim.sim_time_s() as f32];
        let mut info = Info::new();
        info.insert("steps".into(), self.steps.into());
        Ok(Step::new(observation, 1.0, self.steps >= self.episode_len, false, info))
    }

    fn observe_first_state(
        &mut self,
        sim: &mut dyn FlightDynamics,
    ) -> Result<Vec<f32>, PhysicsError> {
        Ok(vec![sim.sim_time_s() as f32])
    }

    fn props_to_plot(&self) -> &[Property] {
        &PLOTTED
    }
}

/// Environment with stubbed physics, non-blocking remote viewer and no PNG output.
pub fn stub_env(mut config: EnvConfig, episode_len: usize) -> (FlightEnv, Counters) {
    config.flightgear_blocking = false;
    config.render.output_dir = None;
    let counters = Counters::default();
    let env = FlightEnv::with_parts(
        config,
        Box::new(ScriptedTask::new(episode_len, &counters)),
        counting_factory(&counters),
    )
    .unwrap();
    (env, counters)
}
