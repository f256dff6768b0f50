//! Render modes, session variants and the table of which variant allows which mode.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Local dashboard figure.
    Human,
    /// 3-D flight path graph.
    Graph,
    /// Remote 3-D viewer.
    #[serde(rename = "flightgear")]
    FlightGear,
    /// Flight path graph mirrored to the remote 3-D viewer.
    #[serde(rename = "graph_flightgear")]
    GraphFlightGear,
}

impl RenderMode {
    pub const ALL: [RenderMode; 4] =
        [Self::Human, Self::Graph, Self::FlightGear, Self::GraphFlightGear];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Human => "human",
            Self::Graph => "graph",
            Self::FlightGear => "flightgear",
            Self::GraphFlightGear => "graph_flightgear",
        }
    }

    /// Whether the mode drives the remote 3-D viewer.
    #[must_use]
    pub const fn uses_remote(self) -> bool {
        matches!(self, Self::FlightGear | Self::GraphFlightGear)
    }

    /// Modes rendered automatically at the start of every step.
    #[must_use]
    pub const fn is_step_synchronous(self) -> bool {
        matches!(self, Self::Human | Self::Graph | Self::GraphFlightGear)
    }

    /// The closest mode that does not involve the remote viewer.
    #[must_use]
    pub const fn without_remote(self) -> Self {
        match self {
            Self::Human | Self::FlightGear => Self::Human,
            Self::Graph | Self::GraphFlightGear => Self::Graph,
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| format!("unknown render mode `{s}`"))
    }
}

/// Session variant. `NoRemoteVisual` never opens a remote output channel and
/// is the one to train with.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    #[default]
    Standard,
    NoRemoteVisual,
}

impl Variant {
    #[must_use]
    pub const fn remote_enabled(self) -> bool {
        matches!(self, Self::Standard)
    }

    #[must_use]
    pub const fn metadata(self) -> Metadata {
        match self {
            Self::Standard => Metadata {
                render_modes: &RenderMode::ALL,
                render_fps: RENDER_FPS,
            },
            Self::NoRemoteVisual => Metadata {
                render_modes: &[RenderMode::Human, RenderMode::Graph],
                render_fps: RENDER_FPS,
            },
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Standard => "standard",
            Self::NoRemoteVisual => "no-remote-visual",
        })
    }
}

const RENDER_FPS: u32 = 30;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Metadata {
    pub render_modes: &'static [RenderMode],
    pub render_fps: u32,
}

impl Metadata {
    #[must_use]
    pub fn permits(&self, mode: RenderMode) -> bool {
        self.render_modes.contains(&mode)
    }
}
