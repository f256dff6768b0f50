//! Visualisation backends for flight simulations.
//!
//! Three backends implement [`Visualiser`]:
//!
//! - [`FigureVisualiser`] draws a dashboard of gauges for a list of properties.
//! - [`GraphVisualiser`] draws the 3-D flight path through a [`camera::Camera`]
//!   together with short property histories.
//! - [`FlightGearVisualiser`] streams frames to a remote 3-D viewer through the
//!   simulation's remote output channel.
//!
//! Image backends keep their latest frame in memory and, when
//! [`RenderSettings::output_dir`] is set, also write numbered PNG files.

pub mod camera;
pub mod canvas;
pub mod figure;
pub mod flightgear;
pub mod graph;
pub mod settings;

pub use figure::FigureVisualiser;
pub use flightgear::FlightGearVisualiser;
pub use graph::GraphVisualiser;
pub use settings::{RemoteSettings, RenderSettings};

use anyhow::Result;
use physics::FlightDynamics;

/// A render backend bound to one environment session.
pub trait Visualiser {
    /// Draw (or send) the current simulation state.
    ///
    /// # Errors
    ///
    /// Returns any error raised while reading properties, writing output files
    /// or sending frames.
    fn plot(&mut self, sim: &mut dyn FlightDynamics) -> Result<()>;

    /// Release resources. Calling it twice is harmless.
    fn close(&mut self);
}
