use super::theme::ThemeMode;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// Meteorological season: whole months, used by the animated title.
    pub fn from_month(date: NaiveDate) -> Self {
        match date.month() {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Fall,
            _ => Season::Winter,
        }
    }

    /// Astronomical season with fixed start days, used by the favicon.
    pub fn from_date(date: NaiveDate) -> Self {
        match (date.month(), date.day()) {
            (m, d) if (m, d) < (3, 19) => Season::Winter,
            (m, d) if (m, d) < (6, 20) => Season::Spring,
            (m, d) if (m, d) < (9, 22) => Season::Summer,
            (m, d) if (m, d) < (12, 21) => Season::Fall,
            _ => Season::Winter,
        }
    }

    /// Fill colours for the falling title particles. Winter draws plain white dots
    /// and summer draws nothing, so both are empty.
    pub fn particle_palette(self) -> &'static [&'static str] {
        match self {
            Season::Fall => &["#FFB84C", "#F16767", "#A84448"],
            Season::Spring => &["#90EE90", "#98FB98", "#3CB371"],
            Season::Summer | Season::Winter => &[],
        }
    }

    pub fn has_particles(self) -> bool {
        self != Season::Summer
    }
}

pub fn favicon_path(season: Season, mode: ThemeMode) -> String {
    format!("/{}-{}.svg", season, mode)
}
