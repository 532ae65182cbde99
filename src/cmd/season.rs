use crate::reports;
use chrono::{Local, NaiveDate};
use clap::Args;
use skillforge::decor::{favicon_path, Season, ThemeMode, ThemePreference};
use skillforge::error::SfResult;

#[derive(Args, Debug, Clone)]
pub struct SeasonArgs {
    /// Date as YYYY-MM-DD. Defaults to today.
    #[arg(long)]
    pub date: Option<NaiveDate>,

    #[arg(long, value_enum, default_value_t = ThemePreference::System)]
    pub theme: ThemePreference,

    /// Host theme to assume when --theme is system.
    #[arg(long, value_enum)]
    pub system_theme: Option<ThemeMode>,
}

pub fn run(args: &SeasonArgs) -> SfResult<()> {
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let mode = args.theme.resolve(args.system_theme);

    let title_season = Season::from_month(date);
    let icon_season = Season::from_date(date);
    reports::print_season(
        date,
        title_season,
        icon_season,
        &favicon_path(icon_season, mode),
    );
    Ok(())
}
