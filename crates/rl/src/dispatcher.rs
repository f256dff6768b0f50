//! Routes `render()` calls to lazily built visualisers.
//!
//! Each backend has one slot. A slot is filled on first use and then kept for
//! the lifetime of the session, across resets. Only the remote viewer is
//! touched on reset, because its output target lives in the simulation handle
//! that reset replaces.

use crate::error::EnvError;
use crate::render_mode::{RenderMode, Variant};
use physics::{FlightDynamics, Property};
use render::{FigureVisualiser, FlightGearVisualiser, GraphVisualiser, RenderSettings, Visualiser};

pub struct RenderDispatcher {
    variant: Variant,
    settings: RenderSettings,
    figure: Option<FigureVisualiser>,
    graph: Option<GraphVisualiser>,
    flightgear: Option<FlightGearVisualiser>,
}

impl RenderDispatcher {
    #[must_use]
    pub fn new(variant: Variant, settings: RenderSettings) -> Self {
        Self {
            variant,
            settings,
            figure: None,
            graph: None,
            flightgear: None,
        }
    }

    /// Draws the current state with the backend(s) `mode` selects.
    ///
    /// # Errors
    ///
    /// [`EnvError::UnsupportedRenderMode`] for remote modes on a variant without
    /// remote output, checked before anything is drawn; [`EnvError::Render`]
    /// for backend failures.
    pub fn render(
        &mut self,
        mode: Option<RenderMode>,
        sim: &mut dyn FlightDynamics,
        props: &[Property],
        blocking: bool,
    ) -> Result<(), EnvError> {
        let Some(mode) = mode else {
            tracing::warn!("render() called without a render mode; nothing to draw");
            return Ok(());
        };
        if mode.uses_remote() && !self.variant.remote_enabled() {
            return Err(EnvError::UnsupportedRenderMode { mode, variant: self.variant });
        }
        match mode {
            RenderMode::Human => self.plot_figure(sim, props),
            RenderMode::Graph => self.plot_graph(sim, props),
            RenderMode::FlightGear => self.plot_flightgear(sim, blocking),
            RenderMode::GraphFlightGear => {
                self.plot_graph(sim, props)?;
                self.plot_flightgear(sim, blocking)
            }
        }
    }

    fn plot_figure(
        &mut self,
        sim: &mut dyn FlightDynamics,
        props: &[Property],
    ) -> Result<(), EnvError> {
        let settings = &self.settings;
        let figure = self
            .figure
            .get_or_insert_with(|| FigureVisualiser::new(&*sim, props, settings));
        figure.plot(sim).map_err(EnvError::Render)
    }

    fn plot_graph(
        &mut self,
        sim: &mut dyn FlightDynamics,
        props: &[Property],
    ) -> Result<(), EnvError> {
        let settings = &self.settings;
        let graph = self
            .graph
            .get_or_insert_with(|| GraphVisualiser::new(&*sim, props, settings));
        graph.plot(sim).map_err(EnvError::Render)
    }

    fn plot_flightgear(
        &mut self,
        sim: &mut dyn FlightDynamics,
        blocking: bool,
    ) -> Result<(), EnvError> {
        if self.flightgear.is_none() {
            let visualiser = FlightGearVisualiser::new(sim, &self.settings.remote, blocking)
                .map_err(EnvError::Render)?;
            self.flightgear = Some(visualiser);
        }
        match self.flightgear.as_mut() {
            Some(flightgear) => flightgear.plot(sim).map_err(EnvError::Render),
            None => Ok(()),
        }
    }

    /// Re-points the remote viewer, if one exists, at a freshly created simulation.
    ///
    /// # Errors
    ///
    /// [`EnvError::Render`] if the new handle refuses remote output.
    pub fn on_simulation_replaced(&mut self, sim: &mut dyn FlightDynamics) -> Result<(), EnvError> {
        if let Some(flightgear) = &self.flightgear {
            flightgear.configure_simulation_output(sim).map_err(EnvError::Render)?;
        }
        Ok(())
    }

    /// Closes every populated slot and empties it.
    pub fn close(&mut self) {
        if let Some(mut figure) = self.figure.take() {
            figure.close();
        }
        if let Some(mut graph) = self.graph.take() {
            graph.close();
        }
        if let Some(mut flightgear) = self.flightgear.take() {
            flightgear.close();
        }
    }

    #[must_use]
    pub fn figure(&self) -> Option<&FigureVisualiser> {
        self.figure.as_ref()
    }

    #[must_use]
    pub fn graph(&self) -> Option<&GraphVisualiser> {
        self.graph.as_ref()
    }

    #[must_use]
    pub fn flightgear(&self) -> Option<&FlightGearVisualiser> {
        self.flightgear.as_ref()
    }
}
