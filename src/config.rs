use crate::consts::{
    GUIDE_RADIUS, LABEL_OFFSET_X, LABEL_OFFSET_Y, LABEL_RADIUS, MAX_CONTRAST, MIN_CONTRAST,
    VIEW_HALF_EXTENT,
};
use crate::decor::theme::ThemePreference;
use crate::error::{SfResult, SkillForgeError};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    #[serde(flatten)]
    pub canvas: CanvasParams,
    #[command(flatten)]
    #[serde(flatten)]
    pub appearance: AppearanceParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasParams {
    /// Radius of the guide circle; a full score reaches it.
    #[arg(long, default_value_t = 200.0)]
    pub guide_radius: f64,
    /// Radius of the circle the labels sit on.
    #[arg(long, default_value_t = 260.0)]
    pub label_radius: f64,
    #[arg(long, default_value_t = 15.0)]
    pub label_offset_x: f64,
    #[arg(long, default_value_t = 10.0)]
    pub label_offset_y: f64,
    /// Half the side of the square SVG viewBox.
    #[arg(long, default_value_t = 350.0)]
    pub view_half_extent: f64,
}

impl Default for CanvasParams {
    fn default() -> Self {
        Self {
            guide_radius: GUIDE_RADIUS,
            label_radius: LABEL_RADIUS,
            label_offset_x: LABEL_OFFSET_X,
            label_offset_y: LABEL_OFFSET_Y,
            view_half_extent: VIEW_HALF_EXTENT,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceParams {
    #[arg(long, value_enum, default_value_t = ThemePreference::System)]
    pub theme: ThemePreference,
    /// Background contrast, 0.4..=1.0.
    #[arg(long, default_value_t = 1.0)]
    pub contrast: f64,
    /// Noise overlay intensity, 0.0..=1.0.
    #[arg(long, default_value_t = 0.2)]
    pub noise: f64,
}

impl Default for AppearanceParams {
    fn default() -> Self {
        Self {
            theme: ThemePreference::System,
            contrast: MAX_CONTRAST,
            noise: 0.2,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SfResult<Self> {
        let path = path.as_ref();
        info!("Loading config from {}", path.display());
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Overwrites file values with the CLI values the user actually typed.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        self.canvas.merge_from_cli(&cli.canvas, matches);
        self.appearance.merge_from_cli(&cli.appearance, matches);
    }

    pub fn validate(&self) -> SfResult<()> {
        self.canvas.validate()?;
        self.appearance.validate()
    }
}

macro_rules! update_if_present {
    ($target:ident, $source:ident, $matches:ident, $field:ident) => {
        if $matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
            $target.$field = $source.$field.clone();
        }
    };
}

impl CanvasParams {
    pub fn merge_from_cli(&mut self, cli: &CanvasParams, matches: &ArgMatches) {
        update_if_present!(self, cli, matches, guide_radius);
        update_if_present!(self, cli, matches, label_radius);
        update_if_present!(self, cli, matches, label_offset_x);
        update_if_present!(self, cli, matches, label_offset_y);
        update_if_present!(self, cli, matches, view_half_extent);
    }

    pub fn validate(&self) -> SfResult<()> {
        let finite = [
            self.guide_radius,
            self.label_radius,
            self.label_offset_x,
            self.label_offset_y,
            self.view_half_extent,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite {
            return Err(SkillForgeError::Config(
                "canvas parameters must be finite".to_string(),
            ));
        }
        if self.guide_radius <= 0.0 {
            return Err(SkillForgeError::Config(format!(
                "guide_radius must be positive, got {}",
                self.guide_radius
            )));
        }
        if self.label_radius <= self.guide_radius {
            return Err(SkillForgeError::Config(format!(
                "label_radius ({}) must exceed guide_radius ({})",
                self.label_radius, self.guide_radius
            )));
        }
        if self.view_half_extent < self.label_radius {
            return Err(SkillForgeError::Config(format!(
                "view_half_extent ({}) is smaller than label_radius ({})",
                self.view_half_extent, self.label_radius
            )));
        }
        Ok(())
    }
}

impl AppearanceParams {
    pub fn merge_from_cli(&mut self, cli: &AppearanceParams, matches: &ArgMatches) {
        update_if_present!(self, cli, matches, theme);
        update_if_present!(self, cli, matches, contrast);
        update_if_present!(self, cli, matches, noise);
    }

    pub fn validate(&self) -> SfResult<()> {
        if !(MIN_CONTRAST..=MAX_CONTRAST).contains(&self.contrast) {
            return Err(SkillForgeError::Config(format!(
                "contrast must lie in {}..={}, got {}",
                MIN_CONTRAST, MAX_CONTRAST, self.contrast
            )));
        }
        if !(0.0..=1.0).contains(&self.noise) {
            return Err(SkillForgeError::Config(format!(
                "noise must lie in 0.0..=1.0, got {}",
                self.noise
            )));
        }
        Ok(())
    }
}
