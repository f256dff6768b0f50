use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Directory for PNG output. `None` keeps frames in memory only.
    pub output_dir: Option<PathBuf>,
    pub figure_size: [u32; 2],
    pub graph_size: [u32; 2],
    /// Samples kept for graph histories.
    pub history_len: usize,
    pub remote: RemoteSettings,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            output_dir: None,
            figure_size: [640, 480],
            graph_size: [800, 600],
            history_len: 600,
            remote: RemoteSettings::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteSettings {
    /// Where frames are sent.
    pub target: SocketAddr,
    /// Where the blocking handshake waits for the viewer's hello datagram.
    pub handshake_addr: SocketAddr,
    pub handshake_timeout_ms: u64,
}

impl Default for RemoteSettings {
    fn default() -> Self {
        Self {
            target: SocketAddr::from(([127, 0, 0, 1], 5550)),
            handshake_addr: SocketAddr::from(([127, 0, 0, 1], 5551)),
            handshake_timeout_ms: 20_000,
        }
    }
}
