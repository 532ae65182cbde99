use clap::Args;
use skillforge::config::Config;
use skillforge::core_types::SkillSpec;
use skillforge::decor::ThemeMode;
use skillforge::error::SfResult;
use skillforge::geometry::svg::{self, SvgStyle};
use skillforge::geometry::GeometrySnapshot;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    #[command(flatten)]
    pub config: Config,

    /// Skill as LABEL:VALUE. Give 3 to 12 of them; defaults to Mind, Body, Spirit.
    #[arg(short, long = "skill", value_name = "LABEL:VALUE")]
    pub skills: Vec<SkillSpec>,

    /// Host theme to assume when --theme is system.
    #[arg(long, value_enum)]
    pub system_theme: Option<ThemeMode>,

    /// Output file. Writes to stdout when omitted.
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &RenderArgs, config: &Config) -> SfResult<()> {
    let collection = super::build_collection(&args.skills)?;
    let snapshot = GeometrySnapshot::compute(collection.skills(), &config.canvas);

    let mode = config.appearance.theme.resolve(args.system_theme);
    let style = SvgStyle {
        palette: mode.palette(),
        contrast: config.appearance.contrast,
        noise: config.appearance.noise,
        view_half_extent: config.canvas.view_half_extent,
    };
    let document = svg::render(&snapshot, collection.skills(), &style);

    match &args.out {
        Some(path) => {
            fs::write(path, &document)?;
            info!(
                "Wrote {} skills ({} theme) to {}",
                collection.len(),
                mode,
                path.display()
            );
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(document.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
