use super::focus::FocusRequest;
use crate::consts::{DEFAULT_SCORE, MAX_SCORE, MAX_SKILLS, MIN_SCORE, MIN_SKILLS};
use crate::core_types::{Skill, SkillField, SkillId, SkillSpec};
use crate::error::{SfResult, SkillForgeError};
use std::collections::HashMap;
use tracing::debug;

const DEFAULT_SKILLS: [&str; 3] = ["Mind", "Body", "Spirit"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    AtCapacity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted(SkillId),
    Rejected(Rejection),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed(Skill),
    AtMinimum,
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderOutcome {
    Moved { from: usize, to: usize },
    OutOfBounds,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Renamed,
    Rescored(u8),
    /// Value field holds text that is not a number yet; the stored value is
    /// untouched until blur.
    Drafting,
    Unchanged,
    NotFound,
}

/// Rounds, then pins to MIN_SCORE..=MAX_SCORE. NaN counts as zero.
pub fn clamp_score(value: f64) -> u8 {
    if value.is_nan() {
        return MIN_SCORE;
    }
    value.round().clamp(MIN_SCORE as f64, MAX_SCORE as f64) as u8
}

/// Reads a score the way the number input does. None means the text is not a
/// number (yet): blank, a lone `-`, `.` and the like.
pub fn parse_score(raw: &str) -> Option<u8> {
    raw.trim().parse::<f64>().ok().map(clamp_score)
}

/// Ordered, size-bounded set of skills. Position is render order.
#[derive(Debug, Clone)]
pub struct SkillCollection {
    skills: Vec<Skill>,
    next_id: u64,
    focus: FocusRequest,
    /// Raw value text of skills whose field does not hold a number yet.
    drafts: HashMap<SkillId, String>,
}

impl Default for SkillCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl SkillCollection {
    /// Mind, Body and Spirit at the default score.
    pub fn new() -> Self {
        let mut collection = Self::empty();
        for label in DEFAULT_SKILLS {
            collection.push(label.to_string(), DEFAULT_SCORE);
        }
        collection
    }

    fn empty() -> Self {
        Self {
            skills: Vec::with_capacity(MAX_SKILLS),
            next_id: 1,
            focus: FocusRequest::default(),
            drafts: HashMap::new(),
        }
    }

    pub fn from_specs(specs: &[SkillSpec]) -> SfResult<Self> {
        if !(MIN_SKILLS..=MAX_SKILLS).contains(&specs.len()) {
            return Err(SkillForgeError::Validation(format!(
                "a skill set needs {} to {} entries, got {}",
                MIN_SKILLS,
                MAX_SKILLS,
                specs.len()
            )));
        }
        let mut collection = Self::empty();
        for spec in specs {
            collection.push(spec.label.clone(), clamp_score(spec.value));
        }
        Ok(collection)
    }

    fn push(&mut self, label: String, value: u8) -> SkillId {
        let id = SkillId(self.next_id);
        self.next_id += 1;
        self.skills.push(Skill { id, label, value });
        id
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn ids(&self) -> Vec<SkillId> {
        self.skills.iter().map(|s| s.id).collect()
    }

    pub fn get(&self, id: SkillId) -> Option<&Skill> {
        self.skills.iter().find(|s| s.id == id)
    }

    pub fn position(&self, id: SkillId) -> Option<usize> {
        self.skills.iter().position(|s| s.id == id)
    }

    pub fn can_insert(&self) -> bool {
        self.skills.len() < MAX_SKILLS
    }

    pub fn can_remove(&self) -> bool {
        self.skills.len() > MIN_SKILLS
    }

    /// Appends an unnamed skill at the default score.
    pub fn insert(&mut self) -> InsertOutcome {
        self.insert_with(String::new(), DEFAULT_SCORE)
    }

    pub fn insert_with(&mut self, label: impl Into<String>, value: u8) -> InsertOutcome {
        if !self.can_insert() {
            debug!("insert rejected: collection holds {}", self.skills.len());
            return InsertOutcome::Rejected(Rejection::AtCapacity);
        }
        let id = self.push(label.into(), value.min(MAX_SCORE));
        self.focus.request(id);
        debug!("inserted skill {} at position {}", id, self.skills.len() - 1);
        InsertOutcome::Inserted(id)
    }

    pub fn remove(&mut self, id: SkillId) -> RemoveOutcome {
        if !self.can_remove() {
            debug!("remove of {} ignored: collection at minimum", id);
            return RemoveOutcome::AtMinimum;
        }
        let Some(index) = self.position(id) else {
            return RemoveOutcome::NotFound;
        };
        let removed = self.skills.remove(index);
        self.drafts.remove(&id);
        self.focus.forget(id);
        debug!("removed skill {} from position {}", id, index);
        RemoveOutcome::Removed(removed)
    }

    /// Moves the entry at `from` so it ends up at `to`, in one step.
    pub fn reorder(&mut self, from: usize, to: usize) -> ReorderOutcome {
        let len = self.skills.len();
        if from >= len || to >= len {
            debug!("reorder {} -> {} out of bounds (len {})", from, to, len);
            return ReorderOutcome::OutOfBounds;
        }
        let moved = self.skills.remove(from);
        self.skills.insert(to, moved);
        ReorderOutcome::Moved { from, to }
    }

    pub fn update(&mut self, id: SkillId, field: SkillField, raw: &str) -> UpdateOutcome {
        let Some(index) = self.position(id) else {
            return UpdateOutcome::NotFound;
        };
        match field {
            SkillField::Label => {
                self.skills[index].label = raw.to_string();
                UpdateOutcome::Renamed
            }
            SkillField::Value => match parse_score(raw) {
                Some(value) => {
                    self.drafts.remove(&id);
                    self.skills[index].value = value;
                    UpdateOutcome::Rescored(value)
                }
                None => {
                    self.drafts.insert(id, raw.to_string());
                    UpdateOutcome::Drafting
                }
            },
        }
    }

    /// The value field lost focus. A pending draft settles to zero.
    pub fn blur(&mut self, id: SkillId) -> UpdateOutcome {
        let Some(index) = self.position(id) else {
            return UpdateOutcome::NotFound;
        };
        if self.drafts.remove(&id).is_some() {
            self.skills[index].value = MIN_SCORE;
            return UpdateOutcome::Rescored(MIN_SCORE);
        }
        UpdateOutcome::Unchanged
    }

    /// Text the value field should show: the draft while one is open, else the score.
    pub fn value_text(&self, id: SkillId) -> Option<String> {
        let skill = self.get(id)?;
        match self.drafts.get(&id) {
            Some(draft) => Some(draft.clone()),
            None => Some(skill.value.to_string()),
        }
    }

    pub fn is_drafting(&self, id: SkillId) -> bool {
        self.drafts.contains_key(&id)
    }

    pub fn pending_focus(&self) -> Option<SkillId> {
        self.focus.peek()
    }

    /// Hands the pending focus target to the caller exactly once.
    pub fn take_focus_request(&mut self) -> Option<SkillId> {
        self.focus.take()
    }
}
