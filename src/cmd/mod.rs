pub mod inspect;
pub mod render;
pub mod season;
pub mod tone;

use skillforge::core_types::SkillSpec;
use skillforge::editor::SkillCollection;
use skillforge::error::SfResult;
use tracing::debug;

/// The skills given with `--skill`, or the default three when none were given.
pub fn build_collection(specs: &[SkillSpec]) -> SfResult<SkillCollection> {
    if specs.is_empty() {
        debug!("No --skill given, using the default set");
        return Ok(SkillCollection::new());
    }
    SkillCollection::from_specs(specs)
}
