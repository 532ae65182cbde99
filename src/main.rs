use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use skillforge::config::Config;
use skillforge::error::{SfResult, SkillForgeError};
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with canvas/appearance settings. Flags given explicitly win.
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write the skill polygon as SVG.
    Render(cmd::render::RenderArgs),
    /// Print vertices and label anchors.
    Inspect(cmd::inspect::InspectArgs),
    /// Convert between stored tone values and slider positions.
    Tone(cmd::tone::ToneArgs),
    /// Show the season and favicon for a date.
    Season(cmd::season::SeasonArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli, &matches) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli, matches: &ArgMatches) -> SfResult<()> {
    match &cli.command {
        Commands::Render(args) => {
            let config = resolve_config(cli, &args.config, matches, "render")?;
            cmd::render::run(args, &config)
        }
        Commands::Inspect(args) => {
            let config = resolve_config(cli, &args.config, matches, "inspect")?;
            cmd::inspect::run(args, &config)
        }
        Commands::Tone(args) => cmd::tone::run(args),
        Commands::Season(args) => cmd::season::run(args),
    }
}

/// File settings first, then whatever the user typed for this subcommand.
fn resolve_config(
    cli: &Cli,
    cli_config: &Config,
    matches: &ArgMatches,
    subcommand: &str,
) -> SfResult<Config> {
    let config = match &cli.config {
        Some(path) => {
            let mut file_config = Config::load_from_file(path)?;
            let sub_matches = matches.subcommand_matches(subcommand).ok_or_else(|| {
                SkillForgeError::Config(format!("no arguments parsed for '{}'", subcommand))
            })?;
            file_config.merge_from_cli(cli_config, sub_matches);
            file_config
        }
        None => {
            info!("No config file given. Using flags and built-in defaults.");
            cli_config.clone()
        }
    };
    config.validate()?;
    Ok(config)
}
