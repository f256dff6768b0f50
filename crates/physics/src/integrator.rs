//! # Flight Dynamics Integration
//!
//! Explicit Euler integration of the point-mass aircraft. Each stage updates
//! one group of state variables from the values left by the previous stage:
//! actuators, then body rates, then attitude, then speed and position.

use crate::types::{AircraftState, Controls, Vec3};
use std::f64::consts::{PI, TAU};

/// Integration constants
const GRAVITY_FPS2: f64 = 32.174;
const ACTUATOR_BANDWIDTH: f64 = 10.0; // first-order lag, 1/s
const RATE_BANDWIDTH: f64 = 4.0;
const SPEED_BANDWIDTH: f64 = 0.2;
const MAX_ROLL_RATE: f64 = 1.5;
const MAX_PITCH_RATE: f64 = 0.5;
const MAX_YAW_RATE: f64 = 0.3;
const MAX_PITCH: f64 = 1.4;
const BANK_SINK_FPS: f64 = 10.0;
const MIN_TURN_SPEED_FPS: f64 = 1.0;

/// Advance the whole state by `dt` seconds.
///
/// `gust` is added to the body rates as an angular acceleration.
pub fn integrate(state: &mut AircraftState, cruise_fps: f64, gust: Vec3, dt: f64) {
    advance_actuators(&mut state.positions, &state.commands, dt);
    advance_rates(state, gust, dt);
    advance_attitude(state, dt);
    advance_translation(state, cruise_fps, dt);
    state.sim_time_s += dt;
}

/// Move surface positions toward their commands with a first-order lag.
pub fn advance_actuators(positions: &mut Controls, commands: &Controls, dt: f64) {
    let alpha = (ACTUATOR_BANDWIDTH * dt).min(1.0);
    positions.aileron += (commands.aileron - positions.aileron) * alpha;
    positions.elevator += (commands.elevator - positions.elevator) * alpha;
    positions.rudder += (commands.rudder - positions.rudder) * alpha;
    positions.throttle += (commands.throttle - positions.throttle) * alpha;
}

/// Body rates relax toward the rate each surface demands. Negative elevator
/// pitches the nose up. Bank adds the coordinated-turn yaw rate.
pub fn advance_rates(state: &mut AircraftState, gust: Vec3, dt: f64) {
    let roll = state.attitude.x;
    let speed = state.airspeed_fps.max(MIN_TURN_SPEED_FPS);
    let target = Vec3::new(
        state.positions.aileron * MAX_ROLL_RATE,
        -state.positions.elevator * MAX_PITCH_RATE,
        state.positions.rudder * MAX_YAW_RATE + GRAVITY_FPS2 * roll.tan() / speed,
    );
    let alpha = (RATE_BANDWIDTH * dt).min(1.0);
    state.rates += (target - state.rates) * alpha + gust * dt;
}

pub fn advance_attitude(state: &mut AircraftState, dt: f64) {
    let rates = state.rates;
    state.attitude.x = wrap_pi(state.attitude.x + rates.x * dt);
    state.attitude.y = (state.attitude.y + rates.y * dt).clamp(-MAX_PITCH, MAX_PITCH);
    state.attitude.z = (state.attitude.z + rates.z * dt).rem_euclid(TAU);
}

/// Airspeed follows throttle and trades against climb; position follows
/// airspeed along the current heading.
pub fn advance_translation(state: &mut AircraftState, cruise_fps: f64, dt: f64) {
    let (roll, pitch, heading) = (state.attitude.x, state.attitude.y, state.attitude.z);
    let target_speed = cruise_fps * (0.5 + 0.7 * state.positions.throttle);
    let accel = (target_speed - state.airspeed_fps) * SPEED_BANDWIDTH - GRAVITY_FPS2 * pitch.sin();
    state.airspeed_fps = (state.airspeed_fps + accel * dt).max(0.0);

    let speed = state.airspeed_fps;
    state.climb_rate_fps = speed * pitch.sin() - (1.0 - roll.cos()) * BANK_SINK_FPS;
    let ground_speed = speed * pitch.cos();
    state.position += Vec3::new(
        ground_speed * heading.cos(),
        ground_speed * heading.sin(),
        state.climb_rate_fps,
    ) * dt;
}

fn wrap_pi(angle: f64) -> f64 {
    (angle + PI).rem_euclid(TAU) - PI
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_flight_holds_altitude_and_heading() {
        let mut state = AircraftState::level(5000.0, 200.0);
        for _ in 0..600 {
            integrate(&mut state, 200.0, Vec3::ZERO, 1.0 / 60.0);
        }
        assert!((state.position.z - 5000.0).abs() < 1e-6, "alt={}", state.position.z);
        assert!(state.attitude.z.abs() < 1e-9);
        assert!(state.position.x > 0.0, "aircraft should travel north");
        assert!((state.sim_time_s - 10.0).abs() < 1e-9);
    }

    #[test]
    fn actuators_lag_commands() {
        let mut positions = Controls::default();
        let commands = Controls { aileron: 1.0, ..Controls::default() };
        advance_actuators(&mut positions, &commands, 1.0 / 60.0);
        assert!(positions.aileron > 0.0 && positions.aileron < 1.0);
    }

    #[test]
    fn right_aileron_banks_right_and_turns_right() {
        let mut state = AircraftState::level(5000.0, 200.0);
        state.commands.aileron = 0.3;
        for _ in 0..30 {
            integrate(&mut state, 200.0, Vec3::ZERO, 1.0 / 60.0);
        }
        assert!(state.attitude.x > 0.0);
        assert!(state.attitude.z > 0.0 && state.attitude.z < PI);
    }

    #[test]
    fn wrap_pi_stays_in_range() {
        assert!((wrap_pi(PI + 0.1) - (-PI + 0.1)).abs() < 1e-12);
        assert!((wrap_pi(-PI - 0.1) - (PI - 0.1)).abs() < 1e-12);
    }
}
