//! Named simulation properties.
//!
//! Tasks and visualisers never touch [`AircraftState`] fields directly; they
//! read and write through [`Property`] handles so that any
//! [`FlightDynamics`](crate::FlightDynamics) implementation can stand in.

use crate::types::AircraftState;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Property {
    pub name: &'static str,
    pub description: &'static str,
    pub min: f64,
    pub max: f64,
}

impl Property {
    #[must_use]
    pub const fn new(name: &'static str, description: &'static str, min: f64, max: f64) -> Self {
        Self { name, description, min, max }
    }

    /// Maps `value` onto `[0, 1]` across the property's nominal range.
    #[must_use]
    pub fn normalise(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 || !value.is_finite() {
            return 0.0;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }

    pub(crate) fn read(&self, state: &AircraftState) -> Option<f64> {
        let value = match self.name {
            n if n == prp::DIST_NORTH_FT.name => state.position.x,
            n if n == prp::DIST_EAST_FT.name => state.position.y,
            n if n == prp::ALTITUDE_SL_FT.name => state.position.z,
            n if n == prp::ROLL_RAD.name => state.attitude.x,
            n if n == prp::PITCH_RAD.name => state.attitude.y,
            n if n == prp::HEADING_DEG.name => state.attitude.z.to_degrees(),
            n if n == prp::P_RADSEC.name => state.rates.x,
            n if n == prp::Q_RADSEC.name => state.rates.y,
            n if n == prp::R_RADSEC.name => state.rates.z,
            n if n == prp::U_FPS.name => state.airspeed_fps,
            n if n == prp::ALTITUDE_RATE_FPS.name => state.climb_rate_fps,
            n if n == prp::AILERON_CMD.name => state.commands.aileron,
            n if n == prp::ELEVATOR_CMD.name => state.commands.elevator,
            n if n == prp::RUDDER_CMD.name => state.commands.rudder,
            n if n == prp::THROTTLE_CMD.name => state.commands.throttle,
            n if n == prp::AILERON_POS.name => state.positions.aileron,
            n if n == prp::ELEVATOR_POS.name => state.positions.elevator,
            n if n == prp::RUDDER_POS.name => state.positions.rudder,
            n if n == prp::THROTTLE_POS.name => state.positions.throttle,
            n if n == prp::SIM_TIME_S.name => state.sim_time_s,
            _ => return None,
        };
        Some(value)
    }

    /// Writes `value` into `state`. Returns `false` for unknown names and for
    /// quantities only the integrator may change.
    pub(crate) fn write(&self, state: &mut AircraftState, value: f64) -> bool {
        match self.name {
            n if n == prp::DIST_NORTH_FT.name => state.position.x = value,
            n if n == prp::DIST_EAST_FT.name => state.position.y = value,
            n if n == prp::ALTITUDE_SL_FT.name => state.position.z = value,
            n if n == prp::ROLL_RAD.name => state.attitude.x = value.clamp(-PI, PI),
            n if n == prp::PITCH_RAD.name => state.attitude.y = value.clamp(-FRAC_PI_2, FRAC_PI_2),
            n if n == prp::HEADING_DEG.name => {
                state.attitude.z = value.to_radians().rem_euclid(TAU);
            }
            n if n == prp::P_RADSEC.name => state.rates.x = value,
            n if n == prp::Q_RADSEC.name => state.rates.y = value,
            n if n == prp::R_RADSEC.name => state.rates.z = value,
            n if n == prp::U_FPS.name => state.airspeed_fps = value.max(0.0),
            n if n == prp::AILERON_CMD.name => state.commands.aileron = value.clamp(-1.0, 1.0),
            n if n == prp::ELEVATOR_CMD.name => state.commands.elevator = value.clamp(-1.0, 1.0),
            n if n == prp::RUDDER_CMD.name => state.commands.rudder = value.clamp(-1.0, 1.0),
            n if n == prp::THROTTLE_CMD.name => state.commands.throttle = value.clamp(0.0, 1.0),
            n if n == prp::AILERON_POS.name => state.positions.aileron = value.clamp(-1.0, 1.0),
            n if n == prp::ELEVATOR_POS.name => state.positions.elevator = value.clamp(-1.0, 1.0),
            n if n == prp::RUDDER_POS.name => state.positions.rudder = value.clamp(-1.0, 1.0),
            n if n == prp::THROTTLE_POS.name => state.positions.throttle = value.clamp(0.0, 1.0),
            _ => return false,
        }
        true
    }
}

/// The property catalogue.
pub mod prp {
    use super::Property;
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    pub const DIST_NORTH_FT: Property =
        Property::new("position/distance-north-ft", "distance travelled north [ft]", -1.0e6, 1.0e6);
    pub const DIST_EAST_FT: Property =
        Property::new("position/distance-east-ft", "distance travelled east [ft]", -1.0e6, 1.0e6);
    pub const ALTITUDE_SL_FT: Property =
        Property::new("position/h-sl-ft", "altitude above mean sea level [ft]", -1400.0, 85000.0);
    pub const ROLL_RAD: Property = Property::new("attitude/roll-rad", "roll [rad]", -PI, PI);
    pub const PITCH_RAD: Property =
        Property::new("attitude/pitch-rad", "pitch [rad]", -FRAC_PI_2, FRAC_PI_2);
    pub const HEADING_DEG: Property =
        Property::new("attitude/psi-deg", "heading [deg]", 0.0, 360.0);
    pub const P_RADSEC: Property =
        Property::new("velocities/p-rad_sec", "roll rate [rad/s]", -TAU, TAU);
    pub const Q_RADSEC: Property =
        Property::new("velocities/q-rad_sec", "pitch rate [rad/s]", -TAU, TAU);
    pub const R_RADSEC: Property =
        Property::new("velocities/r-rad_sec", "yaw rate [rad/s]", -TAU, TAU);
    pub const U_FPS: Property =
        Property::new("velocities/u-fps", "forward airspeed [ft/s]", -2200.0, 2200.0);
    pub const ALTITUDE_RATE_FPS: Property =
        Property::new("velocities/h-dot-fps", "rate of altitude change [ft/s]", -2200.0, 2200.0);
    pub const AILERON_CMD: Property =
        Property::new("fcs/aileron-cmd-norm", "aileron commanded position, normalised", -1.0, 1.0);
    pub const ELEVATOR_CMD: Property = Property::new(
        "fcs/elevator-cmd-norm",
        "elevator commanded position, normalised",
        -1.0,
        1.0,
    );
    pub const RUDDER_CMD: Property =
        Property::new("fcs/rudder-cmd-norm", "rudder commanded position, normalised", -1.0, 1.0);
    pub const THROTTLE_CMD: Property =
        Property::new("fcs/throttle-cmd-norm", "throttle commanded position, normalised", 0.0, 1.0);
    pub const AILERON_POS: Property =
        Property::new("fcs/aileron-pos-norm", "aileron position, normalised", -1.0, 1.0);
    pub const ELEVATOR_POS: Property =
        Property::new("fcs/elevator-pos-norm", "elevator position, normalised", -1.0, 1.0);
    pub const RUDDER_POS: Property =
        Property::new("fcs/rudder-pos-norm", "rudder position, normalised", -1.0, 1.0);
    pub const THROTTLE_POS: Property =
        Property::new("fcs/throttle-pos-norm", "throttle position, normalised", 0.0, 1.0);
    pub const SIM_TIME_S: Property =
        Property::new("simulation/sim-time-sec", "simulation time [s]", 0.0, f64::INFINITY);

    pub const ALL: &[Property] = &[
        DIST_NORTH_FT,
        DIST_EAST_FT,
        ALTITUDE_SL_FT,
        ROLL_RAD,
        PITCH_RAD,
        HEADING_DEG,
        P_RADSEC,
        Q_RADSEC,
        R_RADSEC,
        U_FPS,
        ALTITUDE_RATE_FPS,
        AILERON_CMD,
        ELEVATOR_CMD,
        RUDDER_CMD,
        THROTTLE_CMD,
        AILERON_POS,
        ELEVATOR_POS,
        RUDDER_POS,
        THROTTLE_POS,
        SIM_TIME_S,
    ];

    #[must_use]
    pub fn by_name(name: &str) -> Option<&'static Property> {
        ALL.iter().find(|p| p.name == name)
    }
}

/// Initial conditions for a fresh simulation, keyed by property name.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InitialConditions(BTreeMap<String, f64>);

impl InitialConditions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, prop: &Property, value: f64) -> Self {
        self.insert(prop, value);
        self
    }

    pub fn insert(&mut self, prop: &Property, value: f64) {
        self.0.insert(prop.name.to_owned(), value);
    }

    #[must_use]
    pub fn get(&self, prop: &Property) -> Option<f64> {
        self.0.get(prop.name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_round_trips_through_degrees() {
        let mut state = AircraftState::default();
        assert!(prp::HEADING_DEG.write(&mut state, 370.0));
        let heading = prp::HEADING_DEG.read(&state).unwrap();
        assert!((heading - 10.0).abs() < 1e-9, "heading={heading}");
    }

    #[test]
    fn sim_time_is_read_only() {
        let mut state = AircraftState::default();
        assert!(!prp::SIM_TIME_S.write(&mut state, 5.0));
        assert!(prp::SIM_TIME_S.read(&state).is_some());
    }

    #[test]
    fn normalise_clamps_to_unit_range() {
        assert_eq!(prp::AILERON_CMD.normalise(-3.0), 0.0);
        assert!((prp::AILERON_CMD.normalise(0.0) - 0.5).abs() < 1e-12);
        assert_eq!(prp::AILERON_CMD.normalise(3.0), 1.0);
    }
}
