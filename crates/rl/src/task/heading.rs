//! Altitude-hold and heading-control task.

use super::{Shaping, Task};
use crate::env::{Info, Step};
use crate::spaces::BoxSpace;
use physics::{prp, Aircraft, FlightDynamics, InitialConditions, PhysicsError, Property};
use serde_json::Value;

pub const EPISODE_TIME_S: f64 = 60.0;
pub const INITIAL_ALTITUDE_FT: f64 = 5000.0;
pub const THROTTLE_CMD: f64 = 0.8;
/// Options key overriding the sampled target heading on reset.
pub const TARGET_HEADING_OPTION: &str = "target_heading_deg";

const ALTITUDE_SCALE_FT: f64 = 100.0;
const HEADING_SCALE_DEG: f64 = 10.0;
const MAX_ALTITUDE_ERROR_FT: f64 = 1000.0;
const MIN_ALTITUDE_FT: f64 = 500.0;
const ROLL_PENALTY: f64 = 0.1;

const ACTION_PROPS: [Property; 3] = [prp::AILERON_CMD, prp::ELEVATOR_CMD, prp::RUDDER_CMD];

const STATE_PROPS: [Property; 11] = [
    prp::ROLL_RAD,
    prp::PITCH_RAD,
    prp::U_FPS,
    prp::ALTITUDE_RATE_FPS,
    prp::P_RADSEC,
    prp::Q_RADSEC,
    prp::R_RADSEC,
    prp::AILERON_POS,
    prp::ELEVATOR_POS,
    prp::RUDDER_POS,
    prp::THROTTLE_POS,
];

const PLOT_PROPS: [Property; 6] = [
    prp::ALTITUDE_SL_FT,
    prp::HEADING_DEG,
    prp::ROLL_RAD,
    prp::PITCH_RAD,
    prp::U_FPS,
    prp::ALTITUDE_RATE_FPS,
];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Target {
    /// Keep the heading the episode started with.
    Hold,
    /// Turn onto an independently sampled heading.
    Turn,
}

/// Fly straight and level, then hold (or turn onto) a target heading for
/// [`EPISODE_TIME_S`] seconds.
///
/// Observation: altitude error, heading error, then roll, pitch, airspeed,
/// climb rate, the three body rates and the four control-surface positions.
/// Action: aileron, elevator and rudder commands in `[-1, 1]`.
pub struct HeadingControlTask {
    shaping: Shaping,
    target: Target,
    aircraft: Aircraft,
    steps_per_episode: u32,
    steps_left: u32,
    target_altitude_ft: f64,
    target_heading_deg: f64,
    rng: fastrand::Rng,
}

impl HeadingControlTask {
    #[must_use]
    pub fn new(shaping: Shaping, agent_interaction_freq: u32, aircraft: Aircraft) -> Self {
        Self::with_target(shaping, agent_interaction_freq, aircraft, Target::Hold)
    }

    /// Variant whose target heading is sampled independently of the initial one.
    #[must_use]
    pub fn turning(shaping: Shaping, agent_interaction_freq: u32, aircraft: Aircraft) -> Self {
        Self::with_target(shaping, agent_interaction_freq, aircraft, Target::Turn)
    }

    fn with_target(
        shaping: Shaping,
        agent_interaction_freq: u32,
        aircraft: Aircraft,
        target: Target,
    ) -> Self {
        let steps_per_episode = (EPISODE_TIME_S * f64::from(agent_interaction_freq)).ceil() as u32;
        Self {
            shaping,
            target,
            aircraft,
            steps_per_episode,
            steps_left: steps_per_episode,
            target_altitude_ft: INITIAL_ALTITUDE_FT,
            target_heading_deg: 0.0,
            rng: fastrand::Rng::new(),
        }
    }

    #[must_use]
    pub fn target_heading_deg(&self) -> f64 {
        self.target_heading_deg
    }

    #[must_use]
    pub fn steps_left(&self) -> u32 {
        self.steps_left
    }

    #[must_use]
    pub fn shaping(&self) -> Shaping {
        self.shaping
    }

    fn observe(&self, sim: &dyn FlightDynamics) -> Result<(Vec<f32>, Errors), PhysicsError> {
        let errors = Errors {
            altitude_ft: self.target_altitude_ft - sim.get(&prp::ALTITUDE_SL_FT)?,
            heading_deg: heading_error_deg(self.target_heading_deg, sim.get(&prp::HEADING_DEG)?),
            roll_rad: sim.get(&prp::ROLL_RAD)?,
        };
        let mut observation = Vec::with_capacity(2 + STATE_PROPS.len());
        observation.push(errors.altitude_ft as f32);
        observation.push(errors.heading_deg as f32);
        for prop in &STATE_PROPS {
            observation.push(sim.get(prop)? as f32);
        }
        Ok((observation, errors))
    }

    fn base_reward(errors: &Errors) -> f64 {
        let altitude = 1.0 / (1.0 + errors.altitude_ft.abs() / ALTITUDE_SCALE_FT);
        let heading = 1.0 / (1.0 + errors.heading_deg.abs() / HEADING_SCALE_DEG);
        (altitude + heading) / 2.0
    }

    fn shaping_reward(&self, errors: &Errors) -> f64 {
        let roll = -ROLL_PENALTY * errors.roll_rad.abs() / std::f64::consts::PI;
        match self.shaping {
            Shaping::Standard => 0.0,
            Shaping::Extra => roll,
            // Heading credit only counts once altitude is held.
            Shaping::ExtraSequential => {
                let off_altitude = (errors.altitude_ft.abs() / ALTITUDE_SCALE_FT).min(1.0);
                let heading = 1.0 / (1.0 + errors.heading_deg.abs() / HEADING_SCALE_DEG);
                roll - off_altitude * heading / 2.0
            }
        }
    }

    fn is_terminal(&self, sim: &dyn FlightDynamics, errors: &Errors) -> Result<bool, PhysicsError> {
        Ok(self.steps_left == 0
            || sim.get(&prp::ALTITUDE_SL_FT)? < MIN_ALTITUDE_FT
            || errors.altitude_ft.abs() > MAX_ALTITUDE_ERROR_FT)
    }
}

struct Errors {
    altitude_ft: f64,
    heading_deg: f64,
    roll_rad: f64,
}

/// Signed shortest rotation from `current` to `target`, in `[-180, 180)`.
fn heading_error_deg(target: f64, current: f64) -> f64 {
    (target - current + 180.0).rem_euclid(360.0) - 180.0
}

impl Task for HeadingControlTask {
    fn observation_space(&self) -> BoxSpace {
        let errors = [
            (-MAX_ALTITUDE_ERROR_FT as f32, MAX_ALTITUDE_ERROR_FT as f32),
            (-180.0, 180.0),
        ];
        BoxSpace::from_bounds(
            errors
                .into_iter()
                .chain(STATE_PROPS.iter().map(|p| (p.min as f32, p.max as f32))),
        )
    }

    fn action_space(&self) -> BoxSpace {
        BoxSpace::from_bounds(ACTION_PROPS.iter().map(|p| (p.min as f32, p.max as f32)))
    }

    fn initial_conditions(
        &mut self,
        seed: Option<u64>,
        options: Option<&Info>,
    ) -> InitialConditions {
        if let Some(seed) = seed {
            self.rng = fastrand::Rng::with_seed(seed);
        }
        let initial_heading = self.rng.f64() * 360.0;
        let sampled_target = match self.target {
            Target::Hold => initial_heading,
            Target::Turn => self.rng.f64() * 360.0,
        };
        self.target_heading_deg = options
            .and_then(|o| o.get(TARGET_HEADING_OPTION))
            .and_then(Value::as_f64)
            .map_or(sampled_target, |deg| deg.rem_euclid(360.0));
        self.target_altitude_ft = INITIAL_ALTITUDE_FT;
        self.steps_left = self.steps_per_episode;
        tracing::debug!(
            "new {} episode: heading {initial_heading:.1} -> {:.1} deg",
            self.aircraft.name,
            self.target_heading_deg
        );

        InitialConditions::new()
            .with(&prp::ALTITUDE_SL_FT, INITIAL_ALTITUDE_FT)
            .with(&prp::U_FPS, self.aircraft.cruise_speed_fps())
            .with(&prp::HEADING_DEG, initial_heading)
            .with(&prp::THROTTLE_CMD, THROTTLE_CMD)
            .with(&prp::THROTTLE_POS, THROTTLE_CMD)
    }

    fn task_step(
        &mut self,
        sim: &mut dyn FlightDynamics,
        action: &[f32],
    ) -> Result<Step, PhysicsError> {
        for (prop, &value) in ACTION_PROPS.iter().zip(action) {
            sim.set(prop, f64::from(value))?;
        }
        self.steps_left = self.steps_left.saturating_sub(1);

        let (observation, errors) = self.observe(sim)?;
        let base = Self::base_reward(&errors);
        let shaping = self.shaping_reward(&errors);
        let terminated = self.is_terminal(sim, &errors)?;

        let mut info = Info::new();
        info.insert("base_reward".into(), base.into());
        info.insert("shaping_reward".into(), shaping.into());
        info.insert("altitude_error_ft".into(), errors.altitude_ft.into());
        info.insert("heading_error_deg".into(), errors.heading_deg.into());
        info.insert("steps_left".into(), self.steps_left.into());

        Ok(Step::new(observation, (base + shaping) as f32, terminated, false, info))
    }

    fn observe_first_state(
        &mut self,
        sim: &mut dyn FlightDynamics,
    ) -> Result<Vec<f32>, PhysicsError> {
        self.observe(sim).map(|(observation, _)| observation)
    }

    fn props_to_plot(&self) -> &[Property] {
        &PLOT_PROPS
    }
}
