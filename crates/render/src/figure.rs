//! Dashboard figure: one gauge per plotted property and a control-surface
//! panel showing commanded versus actual surface positions.

use crate::canvas::{Canvas, ACCENT, FRAME};
use crate::settings::RenderSettings;
use crate::Visualiser;
use anyhow::Result;
use image::RgbImage;
use physics::{prp, FlightDynamics, Property};
use std::path::PathBuf;

const MARGIN: i64 = 16;
const GAUGE_HEIGHT: i64 = 14;
const GAUGE_GAP: i64 = 8;
const STICK_BOX: i64 = 120;

pub struct FigureVisualiser {
    props: Vec<Property>,
    canvas: Canvas,
    output_dir: Option<PathBuf>,
    frames: u64,
    closed: bool,
}

impl FigureVisualiser {
    /// Binds a figure to the properties it will display.
    #[must_use]
    pub fn new(sim: &dyn FlightDynamics, props: &[Property], settings: &RenderSettings) -> Self {
        let [width, height] = settings.figure_size;
        tracing::info!(
            "opening figure for {} with {} properties",
            sim.aircraft().name,
            props.len()
        );
        Self {
            props: props.to_vec(),
            canvas: Canvas::new(width, height),
            output_dir: settings.output_dir.clone(),
            frames: 0,
            closed: false,
        }
    }

    #[must_use]
    pub fn last_frame(&self) -> Option<&RgbImage> {
        (self.frames > 0).then(|| self.canvas.image())
    }

    #[must_use]
    pub fn frames_drawn(&self) -> u64 {
        self.frames
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn draw_gauges(&mut self, sim: &dyn FlightDynamics) -> Result<()> {
        let width = i64::from(self.canvas.width()) - 3 * MARGIN - STICK_BOX;
        for (i, prop) in self.props.iter().enumerate() {
            let y = MARGIN + i64::try_from(i)? * (GAUGE_HEIGHT + GAUGE_GAP);
            let value = sim.get(prop)?;
            self.canvas.gauge(MARGIN, y, width, GAUGE_HEIGHT, prop.normalise(value), None);
        }
        Ok(())
    }

    /// Stick box: aileron on x, elevator on y. Cross marks the command, the
    /// filled square the actual surface position. Rudder and throttle are
    /// gauges underneath.
    #[allow(clippy::cast_possible_truncation)]
    fn draw_controls(&mut self, sim: &dyn FlightDynamics) -> Result<()> {
        let x0 = i64::from(self.canvas.width()) - MARGIN - STICK_BOX;
        let y0 = MARGIN;
        self.canvas.outline_rect(x0, y0, STICK_BOX, STICK_BOX, FRAME);
        let half = STICK_BOX / 2;
        let to_px = |v: f64| (v.clamp(-1.0, 1.0) * (half - 4) as f64).round() as i64;

        let (cx, cy) = (x0 + half, y0 + half);
        let cmd = (to_px(sim.get(&prp::AILERON_CMD)?), to_px(sim.get(&prp::ELEVATOR_CMD)?));
        self.canvas.line(cx + cmd.0 - 4, cy + cmd.1, cx + cmd.0 + 4, cy + cmd.1, ACCENT);
        self.canvas.line(cx + cmd.0, cy + cmd.1 - 4, cx + cmd.0, cy + cmd.1 + 4, ACCENT);
        let pos = (to_px(sim.get(&prp::AILERON_POS)?), to_px(sim.get(&prp::ELEVATOR_POS)?));
        self.canvas.fill_rect(cx + pos.0 - 2, cy + pos.1 - 2, 5, 5, FRAME);

        let rudder_y = y0 + STICK_BOX + GAUGE_GAP;
        self.canvas.gauge(
            x0,
            rudder_y,
            STICK_BOX,
            GAUGE_HEIGHT,
            prp::RUDDER_POS.normalise(sim.get(&prp::RUDDER_POS)?),
            Some(prp::RUDDER_CMD.normalise(sim.get(&prp::RUDDER_CMD)?)),
        );
        self.canvas.gauge(
            x0,
            rudder_y + GAUGE_HEIGHT + GAUGE_GAP,
            STICK_BOX,
            GAUGE_HEIGHT,
            prp::THROTTLE_POS.normalise(sim.get(&prp::THROTTLE_POS)?),
            Some(prp::THROTTLE_CMD.normalise(sim.get(&prp::THROTTLE_CMD)?)),
        );
        Ok(())
    }
}

impl Visualiser for FigureVisualiser {
    fn plot(&mut self, sim: &mut dyn FlightDynamics) -> Result<()> {
        self.canvas.clear();
        self.draw_gauges(sim)?;
        self.draw_controls(sim)?;
        self.frames += 1;
        if let Some(dir) = &self.output_dir {
            self.canvas.save_png(dir, "figure", self.frames)?;
        }
        Ok(())
    }

    fn close(&mut self) {
        if !self.closed {
            tracing::info!("closing figure after {} frames", self.frames);
        }
        self.closed = true;
    }
}
