use super::theme::ThemeMode;
use crate::consts::{MAX_NOISE_SIDE, NOISE_DOWNSCALE};
use fastrand::Rng;

/// Share of pixels left fully transparent.
const TRANSPARENT_SHARE: f64 = 0.7;
const GRAIN_ALPHA: u8 = 35;
const GRAIN_SPREAD: f64 = 100.0;
const LIGHT_GRAIN_BASE: f64 = 155.0;

/// Static film-grain overlay, stored as tightly packed RGBA.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseCanvas {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Backing size for a viewport; the canvas is drawn smaller and stretched.
/// Each side is capped at MAX_NOISE_SIDE.
pub fn canvas_size(viewport_width: f64, viewport_height: f64) -> (u32, u32) {
    let scale = |v: f64| ((v.max(0.0) / NOISE_DOWNSCALE) as u32).min(MAX_NOISE_SIDE);
    (scale(viewport_width), scale(viewport_height))
}

impl NoiseCanvas {
    /// Sides larger than MAX_NOISE_SIDE are clamped to it.
    pub fn generate(width: u32, height: u32, mode: ThemeMode, rng: &mut Rng) -> Self {
        let width = width.min(MAX_NOISE_SIDE);
        let height = height.min(MAX_NOISE_SIDE);
        let len = width as usize * height as usize * 4;
        let mut pixels = vec![0u8; len];

        for px in pixels.chunks_exact_mut(4) {
            if rng.f64() < TRANSPARENT_SHARE {
                continue;
            }
            // Dark themes get dark grain, light themes bright grain.
            let value = if mode.is_dark() {
                rng.f64() * GRAIN_SPREAD
            } else {
                LIGHT_GRAIN_BASE + rng.f64() * GRAIN_SPREAD
            };
            let v = value as u8;
            px[0] = v;
            px[1] = v;
            px[2] = v;
            px[3] = GRAIN_ALPHA;
        }

        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn for_viewport(viewport_width: f64, viewport_height: f64, mode: ThemeMode, seed: u64) -> Self {
        let (w, h) = canvas_size(viewport_width, viewport_height);
        Self::generate(w, h, mode, &mut Rng::with_seed(seed))
    }

    pub fn opaque_pixels(&self) -> usize {
        self.pixels.chunks_exact(4).filter(|px| px[3] != 0).count()
    }
}
