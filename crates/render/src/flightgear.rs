//! Remote 3-D viewer backend.
//!
//! The simulation owns the output channel; this backend points it at the
//! viewer and asks for a frame on every plot. Because a reset replaces the
//! simulation, [`FlightGearVisualiser::configure_simulation_output`] must be
//! called again on each new handle.

use crate::settings::RemoteSettings;
use crate::Visualiser;
use anyhow::{bail, Context, Result};
use physics::FlightDynamics;
use std::io::ErrorKind;
use std::net::UdpSocket;
use std::time::Duration;

pub struct FlightGearVisualiser {
    settings: RemoteSettings,
    frames: u64,
    closed: bool,
}

impl FlightGearVisualiser {
    /// Configures `sim` to stream to the viewer. With `blocking` set, waits
    /// for the viewer's hello datagram before returning.
    ///
    /// # Errors
    ///
    /// Fails when the simulation refuses remote output, or when the handshake
    /// times out.
    pub fn new(
        sim: &mut dyn FlightDynamics,
        settings: &RemoteSettings,
        blocking: bool,
    ) -> Result<Self> {
        let visualiser = Self {
            settings: settings.clone(),
            frames: 0,
            closed: false,
        };
        visualiser.configure_simulation_output(sim)?;
        tracing::info!(
            "streaming {} ({}) to remote viewer at {}",
            sim.aircraft().name,
            sim.aircraft().remote_model_id,
            settings.target
        );
        if blocking {
            visualiser.wait_for_peer()?;
        }
        Ok(visualiser)
    }

    /// Points a (possibly new) simulation handle at the viewer.
    ///
    /// # Errors
    ///
    /// Propagates the simulation's refusal to open remote output.
    pub fn configure_simulation_output(&self, sim: &mut dyn FlightDynamics) -> Result<()> {
        sim.enable_remote_output(self.settings.target)
            .context("failed to enable remote output")
    }

    fn wait_for_peer(&self) -> Result<()> {
        let addr = self.settings.handshake_addr;
        let socket = UdpSocket::bind(addr)
            .with_context(|| format!("failed to bind handshake socket {addr}"))?;
        let timeout = Duration::from_millis(self.settings.handshake_timeout_ms.max(1));
        socket.set_read_timeout(Some(timeout))?;
        tracing::info!("waiting for remote viewer hello on {addr}");
        let mut buf = [0u8; 64];
        match socket.recv_from(&mut buf) {
            Ok((_, peer)) => {
                tracing::info!("remote viewer {peer} connected");
                Ok(())
            }
            Err(e) if matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut) => {
                bail!(
                    "remote viewer did not connect within {} ms",
                    self.settings.handshake_timeout_ms
                )
            }
            Err(e) => Err(e).context("handshake failed"),
        }
    }

    #[must_use]
    pub fn frames_sent(&self) -> u64 {
        self.frames
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl Visualiser for FlightGearVisualiser {
    fn plot(&mut self, sim: &mut dyn FlightDynamics) -> Result<()> {
        sim.emit_remote_frame().context("failed to send frame to remote viewer")?;
        self.frames += 1;
        Ok(())
    }

    fn close(&mut self) {
        if !self.closed {
            tracing::info!("closing remote viewer stream after {} frames", self.frames);
        }
        self.closed = true;
    }
}
