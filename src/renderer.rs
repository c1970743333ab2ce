use crate::camera::Camera;
use crate::image::Image;
use crate::scene::Scene;
use crate::*;

use log::{debug, info};
use rand::prelude::*;
use std::thread;

pub mod pt;

#[derive(Clone, Copy, Debug)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// Sub-pixel grid resolution per axis; a pixel gets up to rate^2 samples.
    pub sample_rate: u32,
    pub max_depth: usize,
    pub nthread: usize,
}

pub struct Renderer;

impl Renderer {
    /// Renders the scene into a fresh frame buffer. Rows are split into
    /// contiguous bands, one worker thread per band; every pixel is
    /// written exactly once, so the workers share nothing but the scene.
    pub fn render(&self, scene: &Scene, camera: &Camera, config: &RenderConfig) -> Image {
        assert!(config.sample_rate >= 1);
        let nthread = config.nthread.max(1);
        let width = config.width as usize;
        let band_rows = (config.height as usize + nthread - 1) / nthread;

        info!(
            "rendering {}x{} at {} samples/axis on {} threads",
            config.width, config.height, config.sample_rate, nthread
        );

        let mut image = Image::new(config.width, config.height);
        let bands = image.pixels_mut().chunks_mut(band_rows * width);
        thread::scope(|s| {
            for (band_ix, band) in bands.enumerate() {
                s.spawn(move || {
                    let mut rng = SmallRng::from_entropy();
                    Self::render_band(scene, camera, config, band_ix * band_rows, band, &mut rng);
                });
            }
        });
        image
    }

    fn render_band<R: Rng + ?Sized>(
        scene: &Scene,
        camera: &Camera,
        config: &RenderConfig,
        y0: usize,
        band: &mut [RGB],
        rng: &mut R,
    ) {
        let width = config.width as usize;
        let rows = band.len() / width;
        for row in 0..rows {
            let y = (y0 + row) as u32;
            for x in 0..width {
                band[row * width + x] = Self::sample_pixel(scene, camera, config, x as u32, y, rng);
            }
        }
        debug!("rows {}..{} done", y0, y0 + rows);
    }

    /// Anti-aliasing: average over a grid of sub-pixel offsets, skipping
    /// samples that land outside the viewport.
    fn sample_pixel<R: Rng + ?Sized>(
        scene: &Scene,
        camera: &Camera,
        config: &RenderConfig,
        x: u32,
        y: u32,
        rng: &mut R,
    ) -> RGB {
        let rate = config.sample_rate as i32;
        let interval = 1.0 / rate as f32;
        let mut accumulated = RGB::all(0.0);
        let mut samples = 0;
        for i in -(rate / 2)..(rate - rate / 2) {
            for j in -(rate / 2)..(rate - rate / 2) {
                let dx = Self::viewport_coord(x as f32 + i as f32 * interval, config.width);
                let dy = Self::viewport_coord(y as f32 + j as f32 * interval, config.height);
                if dx < 0.0 || dx > 1.0 || dy < 0.0 || dy > 1.0 {
                    continue;
                }
                let ray = camera.emit_ray(dx, dy, rng);
                accumulated += pt::radiance(scene, &ray, config.max_depth, rng);
                samples += 1;
            }
        }
        accumulated / samples as f32
    }

    fn viewport_coord(p: f32, extent: u32) -> f32 {
        if extent > 1 {
            p / (extent - 1) as f32
        } else {
            0.5
        }
    }
}
