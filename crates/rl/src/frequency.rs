//! Conversion from agent interaction rate to integrator steps.

use crate::error::EnvError;

/// Physics integration frequency in Hz.
pub const INTEGRATOR_HZ: u32 = 60;

/// Number of integrator steps run per agent step: `integrator_hz / agent_hz`,
/// rounded down. A non-exact ratio makes the effective agent rate slightly
/// faster than requested.
///
/// # Errors
///
/// Returns [`EnvError::Configuration`] when `agent_hz` is zero or exceeds
/// `integrator_hz`.
pub fn steps_per_agent_step(integrator_hz: u32, agent_hz: u32) -> Result<usize, EnvError> {
    if agent_hz == 0 {
        return Err(EnvError::Configuration(
            "agent interaction frequency must be at least 1 Hz".into(),
        ));
    }
    if agent_hz > integrator_hz {
        return Err(EnvError::Configuration(format!(
            "agent interaction frequency ({agent_hz} Hz) must be less than or equal to \
             the integration frequency of {integrator_hz} Hz"
        )));
    }
    Ok((integrator_hz / agent_hz) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_division_for_every_valid_rate() {
        for integrator_hz in [1, 30, 60, 120, 1000] {
            for agent_hz in 1..=integrator_hz {
                let k = steps_per_agent_step(integrator_hz, agent_hz).unwrap();
                assert_eq!(k, (integrator_hz / agent_hz) as usize);
                assert!(k >= 1);
            }
        }
    }

    #[test]
    fn agent_faster_than_integrator_is_rejected() {
        for integrator_hz in [1, 30, 60] {
            for agent_hz in integrator_hz + 1..integrator_hz + 20 {
                assert!(matches!(
                    steps_per_agent_step(integrator_hz, agent_hz),
                    Err(EnvError::Configuration(_))
                ));
            }
        }
    }

    #[test]
    fn documented_ratios() {
        assert_eq!(steps_per_agent_step(60, 5).unwrap(), 12);
        assert_eq!(steps_per_agent_step(60, 60).unwrap(), 1);
        assert_eq!(steps_per_agent_step(60, 7).unwrap(), 8);
        assert!(steps_per_agent_step(60, 61).is_err());
        assert!(steps_per_agent_step(60, 0).is_err());
    }
}
