use crate::error::{SfResult, SkillForgeError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum_macros::{Display, EnumString};

/// Opaque identifier of a skill. Issued by the owning collection, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillId(pub u64);

impl fmt::Display for SkillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One labeled, scored attribute. Rendered as one vertex of the polygon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: SkillId,
    pub label: String,
    /// Always within MIN_SCORE..=MAX_SCORE.
    pub value: u8,
}

/// The editable fields of a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum SkillField {
    Label,
    Value,
}

/// A `Label:Value` pair as typed on the command line, e.g. `Focus:7`.
///
/// The label may itself contain colons; the value is whatever follows the last one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillSpec {
    pub label: String,
    pub value: f64,
}

impl FromStr for SkillSpec {
    type Err = SkillForgeError;

    fn from_str(s: &str) -> SfResult<Self> {
        let (label, value) = s.rsplit_once(':').ok_or_else(|| {
            SkillForgeError::Validation(format!("'{}' is not in LABEL:VALUE form", s))
        })?;
        let value: f64 = value.trim().parse().map_err(|_| {
            SkillForgeError::Validation(format!("'{}' has a non-numeric value", s))
        })?;
        if !value.is_finite() {
            return Err(SkillForgeError::Validation(format!(
                "'{}' has a non-finite value",
                s
            )));
        }
        Ok(SkillSpec {
            label: label.trim().to_string(),
            value,
        })
    }
}
