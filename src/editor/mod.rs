//! The editing model behind the polygon: the bounded skill collection plus the bits
//! of page state around it (edit mode, the rejection cue, keyboard shortcuts).

pub mod collection;
pub mod cue;
pub mod focus;
pub mod shortcuts;

pub use collection::{
    clamp_score, parse_score, InsertOutcome, Rejection, RemoveOutcome, ReorderOutcome,
    SkillCollection, UpdateOutcome,
};
pub use cue::RejectionCue;
pub use focus::FocusRequest;
pub use shortcuts::{Key, KeyPress, Shortcut};

use std::time::Instant;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorEvent {
    EditingToggled(bool),
    Inserted(crate::core_types::SkillId),
    Rejected(Rejection),
}

/// Collection plus edit-mode state, as driven by one page.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    pub collection: SkillCollection,
    editing: bool,
    cue: RejectionCue,
}

impl Editor {
    pub fn new(collection: SkillCollection) -> Self {
        Self {
            collection,
            editing: false,
            cue: RejectionCue::default(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn toggle_editing(&mut self) -> bool {
        self.editing = !self.editing;
        debug!("editing {}", if self.editing { "opened" } else { "closed" });
        self.editing
    }

    /// The add button. A rejected insert raises the shake cue at `now`.
    pub fn request_insert(&mut self, now: Instant) -> InsertOutcome {
        let outcome = self.collection.insert();
        if let InsertOutcome::Rejected(_) = outcome {
            self.cue.raise(now);
        }
        outcome
    }

    pub fn is_shaking(&self, now: Instant) -> bool {
        self.cue.is_active(now)
    }

    pub fn settle(&mut self, now: Instant) {
        self.cue.settle(now);
    }

    pub fn handle_key(&mut self, press: KeyPress, now: Instant) -> Option<EditorEvent> {
        match Shortcut::match_press(press, self.editing)? {
            Shortcut::ToggleEditing => Some(EditorEvent::EditingToggled(self.toggle_editing())),
            Shortcut::AddSkill => Some(match self.request_insert(now) {
                InsertOutcome::Inserted(id) => EditorEvent::Inserted(id),
                InsertOutcome::Rejected(r) => EditorEvent::Rejected(r),
            }),
        }
    }
}
