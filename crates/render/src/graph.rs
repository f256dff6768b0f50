//! Flight-path graph: the 3-D trajectory seen through an orbit camera, with
//! one history strip per plotted property along the bottom.

use crate::camera::Camera;
use crate::canvas::{Canvas, ACCENT, FRAME, TRACE};
use crate::settings::RenderSettings;
use crate::Visualiser;
use anyhow::Result;
use glam::Vec3;
use image::RgbImage;
use physics::{prp, FlightDynamics, Property};
use std::collections::VecDeque;
use std::path::PathBuf;

const STRIP_HEIGHT: i64 = 40;
const MARGIN: i64 = 8;

pub struct GraphVisualiser {
    props: Vec<Property>,
    canvas: Canvas,
    camera: Camera,
    /// (east, altitude, -north) in feet, matching the camera's y-up frame.
    path: VecDeque<Vec3>,
    histories: Vec<VecDeque<f64>>,
    history_len: usize,
    output_dir: Option<PathBuf>,
    frames: u64,
    closed: bool,
}

impl GraphVisualiser {
    #[must_use]
    pub fn new(sim: &dyn FlightDynamics, props: &[Property], settings: &RenderSettings) -> Self {
        let [width, height] = settings.graph_size;
        tracing::info!("opening flight path graph for {}", sim.aircraft().name);
        Self {
            props: props.to_vec(),
            canvas: Canvas::new(width, height),
            camera: Camera::new(width, height),
            path: VecDeque::new(),
            histories: vec![VecDeque::new(); props.len()],
            history_len: settings.history_len.max(2),
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
    pub fn path_len(&self) -> usize {
        self.path.len()
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    #[allow(clippy::cast_possible_truncation)]
    fn record(&mut self, sim: &dyn FlightDynamics) -> Result<()> {
        let point = Vec3::new(
            sim.get(&prp::DIST_EAST_FT)? as f32,
            sim.get(&prp::ALTITUDE_SL_FT)? as f32,
            -sim.get(&prp::DIST_NORTH_FT)? as f32,
        );
        push_bounded(&mut self.path, point, self.history_len);
        for (prop, history) in self.props.iter().zip(self.histories.iter_mut()) {
            push_bounded(history, sim.get(prop)?, self.history_len);
        }
        Ok(())
    }

    /// Scales the path into a unit cube centred on the origin.
    fn normalised_path(&self) -> Vec<Vec3> {
        let (min, max) = self
            .path
            .iter()
            .fold((Vec3::splat(f32::MAX), Vec3::splat(f32::MIN)), |(lo, hi), p| {
                (lo.min(*p), hi.max(*p))
            });
        let centre = (min + max) * 0.5;
        let extent = (max - min).max_element().max(1.0);
        self.path.iter().map(|p| (*p - centre) / extent).collect()
    }

    #[allow(clippy::cast_possible_truncation)]
    fn draw_path(&mut self) {
        let strips = i64::try_from(self.props.len()).unwrap_or(0) * (STRIP_HEIGHT + MARGIN);
        let (width, height) = (self.canvas.width(), self.canvas.height());
        let plot_height = u32::try_from((i64::from(height) - strips).max(1)).unwrap_or(1);
        self.camera.resize(width, plot_height);
        let view_proj = self.camera.build_view_projection_matrix();

        let points = self.normalised_path();
        let pixels: Vec<Option<(i64, i64)>> = points
            .iter()
            .map(|p| {
                self.camera
                    .project(&view_proj, *p, width, plot_height)
                    .map(|(x, y)| (x.round() as i64, y.round() as i64))
            })
            .collect();
        for pair in pixels.windows(2) {
            if let [Some(a), Some(b)] = pair {
                self.canvas.line(a.0, a.1, b.0, b.1, TRACE);
            }
        }
        if let Some(Some((x, y))) = pixels.last() {
            self.canvas.fill_rect(x - 2, y - 2, 5, 5, ACCENT);
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn draw_histories(&mut self) {
        let width = i64::from(self.canvas.width()) - 2 * MARGIN;
        let bottom = i64::from(self.canvas.height());
        let count = self.histories.len();
        for (i, (prop, history)) in self.props.iter().zip(&self.histories).enumerate() {
            let top = bottom - i64::try_from(count - i).unwrap_or(0) * (STRIP_HEIGHT + MARGIN);
            self.canvas.outline_rect(MARGIN, top, width, STRIP_HEIGHT, FRAME);
            let step = (width - 2) as f64 / (self.history_len - 1) as f64;
            let to_y = |v: f64| {
                top + 1 + ((1.0 - prop.normalise(v)) * (STRIP_HEIGHT - 3) as f64).round() as i64
            };
            let mut prev: Option<(i64, i64)> = None;
            for (j, v) in history.iter().enumerate() {
                let x = MARGIN + 1 + (j as f64 * step).round() as i64;
                let y = to_y(*v);
                if let Some((px, py)) = prev {
                    self.canvas.line(px, py, x, y, TRACE);
                }
                prev = Some((x, y));
            }
        }
    }
}

fn push_bounded<T>(queue: &mut VecDeque<T>, value: T, cap: usize) {
    if queue.len() == cap {
        queue.pop_front();
    }
    queue.push_back(value);
}

impl Visualiser for GraphVisualiser {
    fn plot(&mut self, sim: &mut dyn FlightDynamics) -> Result<()> {
        self.record(sim)?;
        self.canvas.clear();
        self.draw_path();
        self.draw_histories();
        self.frames += 1;
        if let Some(dir) = &self.output_dir {
            self.canvas.save_png(dir, "graph", self.frames)?;
        }
        Ok(())
    }

    fn close(&mut self) {
        if !self.closed {
            tracing::info!("closing flight path graph after {} frames", self.frames);
        }
        self.closed = true;
    }
}
