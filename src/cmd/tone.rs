use crate::reports;
use clap::Args;
use skillforge::consts::MAX_CONTRAST;
use skillforge::error::SfResult;
use skillforge::tone::{self, Rgb};

#[derive(Args, Debug, Clone)]
pub struct ToneArgs {
    /// Stored contrast (0.4..=1.0) to convert to a slider position.
    #[arg(long, conflicts_with = "slider")]
    pub contrast: Option<f64>,

    /// Contrast slider position (0..=100) to convert to a stored contrast.
    #[arg(long)]
    pub slider: Option<f64>,

    /// Noise intensity (0..=1) to convert to a slider position.
    #[arg(long)]
    pub noise: Option<f64>,

    /// Accent colour to validate; lists the presets when omitted.
    #[arg(long)]
    pub accent: Option<String>,
}

pub fn run(args: &ToneArgs) -> SfResult<()> {
    let (contrast, slider) = match (args.contrast, args.slider) {
        (Some(c), _) => (tone::clamp_contrast(c), tone::contrast_to_slider(c)),
        (None, Some(s)) => (tone::slider_to_contrast(s), tone::clamp_slider(s)),
        (None, None) => (MAX_CONTRAST, tone::contrast_to_slider(MAX_CONTRAST)),
    };
    let noise = args.noise.map(|n| {
        let slider = tone::noise_to_slider(n);
        (tone::slider_to_noise(slider), slider)
    });

    let accents: Vec<Rgb> = match &args.accent {
        Some(hex) => vec![hex.parse()?],
        None => tone::presets()?,
    };

    reports::print_tone(contrast, slider, noise, &accents);
    Ok(())
}
