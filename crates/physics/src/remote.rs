//! UDP output channel to a remote 3-D viewer.

use crate::error::PhysicsError;
use crate::types::RemoteFrame;
use std::net::{SocketAddr, UdpSocket};

pub struct RemoteOutput {
    socket: UdpSocket,
    target: SocketAddr,
    frames_sent: u64,
}

impl RemoteOutput {
    /// Binds an ephemeral local socket that sends to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::Io`] if no local socket can be bound.
    pub fn open(target: SocketAddr) -> Result<Self, PhysicsError> {
        let local: SocketAddr = if target.is_ipv4() {
            SocketAddr::from(([0, 0, 0, 0], 0))
        } else {
            SocketAddr::from(([0u16; 8], 0))
        };
        let socket = UdpSocket::bind(local)?;
        tracing::debug!("remote output bound to {:?}, sending to {target}", socket.local_addr());
        Ok(Self { socket, target, frames_sent: 0 })
    }

    /// Sends one frame as raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::Io`] if the datagram cannot be sent.
    pub fn send(&mut self, frame: &RemoteFrame) -> Result<(), PhysicsError> {
        self.socket.send_to(bytemuck::bytes_of(frame), self.target)?;
        self.frames_sent += 1;
        Ok(())
    }

    #[must_use]
    pub fn target(&self) -> SocketAddr {
        self.target
    }

    #[must_use]
    pub fn frames_sent(&self) -> u64 {
        self.frames_sent
    }
}
