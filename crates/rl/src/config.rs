use crate::error::EnvError;
use crate::render_mode::{RenderMode, Variant};
use crate::task::{Shaping, TaskKind};
use physics::{aircraft, Aircraft};
use render::RenderSettings;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One environment session: which aircraft flies which task, how often the
/// agent acts, and how the episode is displayed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvConfig {
    #[serde(with = "aircraft_by_name")]
    pub aircraft: Aircraft,
    pub task: TaskKind,
    pub shaping: Shaping,
    /// Agent decisions per simulated second. Must divide into the integrator
    /// frequency at least once.
    pub agent_interaction_freq: u32,
    pub render_mode: Option<RenderMode>,
    pub variant: Variant,
    pub render: RenderSettings,
    /// Wait for the remote viewer to say hello before the first frame.
    pub flightgear_blocking: bool,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            aircraft: aircraft::C172,
            task: TaskKind::default(),
            shaping: Shaping::default(),
            agent_interaction_freq: 5,
            render_mode: None,
            variant: Variant::default(),
            render: RenderSettings::default(),
            flightgear_blocking: true,
        }
    }
}

impl EnvConfig {
    /// # Errors
    ///
    /// [`EnvError::Configuration`] when the text is not a valid config.
    pub fn from_json_str(text: &str) -> Result<Self, EnvError> {
        serde_json::from_str(text).map_err(|e| EnvError::Configuration(e.to_string()))
    }

    /// # Errors
    ///
    /// [`EnvError::Configuration`] when the file cannot be read or parsed.
    pub fn from_json_file(path: &Path) -> Result<Self, EnvError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| EnvError::Configuration(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&text)
    }
}

mod aircraft_by_name {
    use physics::Aircraft;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(aircraft: &Aircraft, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(aircraft.name)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Aircraft, D::Error> {
        let name = String::deserialize(deserializer)?;
        Aircraft::by_name(&name)
            .copied()
            .ok_or_else(|| D::Error::custom(format!("unknown aircraft `{name}`")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        assert_eq!(EnvConfig::from_json_str("{}").unwrap(), EnvConfig::default());
    }

    #[test]
    fn fields_parse_by_name() {
        let config = EnvConfig::from_json_str(
            r#"{"aircraft": "b747", "task": "turn_heading_control", "shaping": "extra_sequential",
                "agent_interaction_freq": 10, "render_mode": "graph_flightgear",
                "variant": "no_remote_visual"}"#,
        )
        .unwrap();
        assert_eq!(config.aircraft, aircraft::B747);
        assert_eq!(config.task, TaskKind::TurnHeadingControl);
        assert_eq!(config.shaping, Shaping::ExtraSequential);
        assert_eq!(config.agent_interaction_freq, 10);
        assert_eq!(config.render_mode, Some(RenderMode::GraphFlightGear));
        assert_eq!(config.variant, Variant::NoRemoteVisual);
    }

    #[test]
    fn unknown_aircraft_is_a_configuration_error() {
        let err = EnvConfig::from_json_str(r#"{"aircraft": "glider"}"#).unwrap_err();
        assert!(matches!(err, EnvError::Configuration(msg) if msg.contains("glider")));
    }

    #[test]
    fn serialises_aircraft_by_name() {
        let json = serde_json::to_value(EnvConfig::default()).unwrap();
        assert_eq!(json["aircraft"], "C172");
    }
}
