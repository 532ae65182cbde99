//! Background tone controls: the contrast and noise sliders and the accent swatches.
//!
//! Sliders are linear on `0..=100`; the stored values live on their own ranges and
//! the conversions are plain affine maps, clamped at both ends.

use crate::consts::{MAX_CONTRAST, MIN_CONTRAST, SLIDER_MAX};
use crate::error::{SfResult, SkillForgeError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const PRESET_ACCENTS: [&str; 10] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEEAD", "#D4A5A5", "#9B5DE5", "#F15BB5",
    "#00BBF9", "#00F5D4",
];

pub fn clamp_slider(slider: f64) -> f64 {
    if slider.is_nan() {
        return 0.0;
    }
    slider.clamp(0.0, SLIDER_MAX)
}

pub fn clamp_contrast(contrast: f64) -> f64 {
    if contrast.is_nan() {
        return MIN_CONTRAST;
    }
    contrast.clamp(MIN_CONTRAST, MAX_CONTRAST)
}

pub fn contrast_to_slider(contrast: f64) -> f64 {
    (clamp_contrast(contrast) - MIN_CONTRAST) / (MAX_CONTRAST - MIN_CONTRAST) * SLIDER_MAX
}

pub fn slider_to_contrast(slider: f64) -> f64 {
    MIN_CONTRAST + (clamp_slider(slider) / SLIDER_MAX) * (MAX_CONTRAST - MIN_CONTRAST)
}

pub fn noise_to_slider(noise: f64) -> f64 {
    clamp_slider(noise * SLIDER_MAX)
}

pub fn slider_to_noise(slider: f64) -> f64 {
    clamp_slider(slider) / SLIDER_MAX
}

/// Horizontal extent of a slider track in pointer coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderTrack {
    pub left: f64,
    pub width: f64,
}

impl SliderTrack {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    /// Slider position under a pointer at `x`. Pointers past either end pin to it.
    pub fn percentage_at(&self, x: f64) -> f64 {
        if self.width <= 0.0 {
            return 0.0;
        }
        clamp_slider((x - self.left) / self.width * SLIDER_MAX)
    }
}

/// An opaque `#RRGGBB` colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl FromStr for Rgb {
    type Err = SkillForgeError;

    fn from_str(s: &str) -> SfResult<Self> {
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(SkillForgeError::Validation(format!(
                "'{}' is not a #RRGGBB colour",
                s
            )));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|e| SkillForgeError::Validation(format!("bad colour '{}': {}", s, e)))
        };
        Ok(Rgb {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

pub fn presets() -> SfResult<Vec<Rgb>> {
    PRESET_ACCENTS.iter().map(|s| s.parse()).collect()
}
