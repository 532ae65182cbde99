use crate::reports;
use clap::Args;
use serde::Serialize;
use skillforge::config::Config;
use skillforge::core_types::{Skill, SkillSpec};
use skillforge::error::SfResult;
use skillforge::geometry::GeometrySnapshot;
use std::io;

#[derive(Args, Debug, Clone)]
pub struct InspectArgs {
    #[command(flatten)]
    pub config: Config,

    /// Skill as LABEL:VALUE. Give 3 to 12 of them; defaults to Mind, Body, Spirit.
    #[arg(short, long = "skill", value_name = "LABEL:VALUE")]
    pub skills: Vec<SkillSpec>,

    #[arg(long, conflicts_with = "csv")]
    pub json: bool,

    #[arg(long)]
    pub csv: bool,
}

#[derive(Serialize)]
struct InspectReport<'a> {
    skills: &'a [Skill],
    geometry: &'a GeometrySnapshot,
}

pub fn run(args: &InspectArgs, config: &Config) -> SfResult<()> {
    let collection = super::build_collection(&args.skills)?;
    let snapshot = GeometrySnapshot::compute(collection.skills(), &config.canvas);

    if args.json {
        let report = InspectReport {
            skills: collection.skills(),
            geometry: &snapshot,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let rows = reports::geometry_rows(collection.skills(), &snapshot);
    if args.csv {
        let mut writer = csv::Writer::from_writer(io::stdout());
        for row in &rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        return Ok(());
    }

    reports::print_geometry(&rows, &snapshot);
    Ok(())
}
