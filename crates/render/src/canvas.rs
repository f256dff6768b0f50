//! Minimal raster drawing on top of `image::RgbImage`.

use anyhow::{Context, Result};
use image::{Rgb, RgbImage};
use std::path::{Path, PathBuf};

pub const BACKGROUND: Rgb<u8> = Rgb([250, 250, 250]);
pub const FRAME: Rgb<u8> = Rgb([90, 90, 90]);
pub const TRACE: Rgb<u8> = Rgb([31, 119, 180]);
pub const ACCENT: Rgb<u8> = Rgb([214, 39, 40]);
pub const FILL: Rgb<u8> = Rgb([44, 160, 44]);

pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { image: RgbImage::from_pixel(width.max(1), height.max(1), BACKGROUND) }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn clear(&mut self) {
        for px in self.image.pixels_mut() {
            *px = BACKGROUND;
        }
    }

    pub fn put(&mut self, x: i64, y: i64, colour: Rgb<u8>) {
        if let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) {
            if x < self.image.width() && y < self.image.height() {
                self.image.put_pixel(x, y, colour);
            }
        }
    }

    pub fn fill_rect(&mut self, x: i64, y: i64, w: i64, h: i64, colour: Rgb<u8>) {
        for yy in y..y + h {
            for xx in x..x + w {
                self.put(xx, yy, colour);
            }
        }
    }

    pub fn outline_rect(&mut self, x: i64, y: i64, w: i64, h: i64, colour: Rgb<u8>) {
        self.line(x, y, x + w - 1, y, colour);
        self.line(x, y + h - 1, x + w - 1, y + h - 1, colour);
        self.line(x, y, x, y + h - 1, colour);
        self.line(x + w - 1, y, x + w - 1, y + h - 1, colour);
    }

    /// Bresenham line.
    pub fn line(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, colour: Rgb<u8>) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let (mut x, mut y, mut err) = (x0, y0, dx + dy);
        loop {
            self.put(x, y, colour);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Horizontal gauge filled to `fraction` of its width, with a tick at
    /// `marker` when given.
    #[allow(clippy::cast_possible_truncation)]
    pub fn gauge(&mut self, x: i64, y: i64, w: i64, h: i64, fraction: f64, marker: Option<f64>) {
        self.outline_rect(x, y, w, h, FRAME);
        let filled = ((w - 2) as f64 * fraction.clamp(0.0, 1.0)).round() as i64;
        self.fill_rect(x + 1, y + 1, filled, h - 2, FILL);
        if let Some(m) = marker {
            let mx = x + 1 + ((w - 2) as f64 * m.clamp(0.0, 1.0)).round() as i64;
            self.line(mx, y, mx, y + h - 1, ACCENT);
        }
    }

    #[must_use]
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// # Errors
    ///
    /// Fails if the directory cannot be created or the PNG cannot be written.
    pub fn save_png(&self, dir: &Path, prefix: &str, frame: u64) -> Result<PathBuf> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
        let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
        let path = dir.join(format!("{prefix}-{stamp}-{frame:05}.png"));
        self.image
            .save(&path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(path)
    }
}
