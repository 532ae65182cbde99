use crate::core_types::SkillId;

/// One-shot request for the presentation layer to focus a freshly inserted skill.
///
/// `idle -> pending(id)` on insert, `pending -> idle` once taken. A second insert
/// before the first is taken replaces it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusRequest {
    pending: Option<SkillId>,
}

impl FocusRequest {
    pub fn request(&mut self, id: SkillId) {
        self.pending = Some(id);
    }

    pub fn peek(&self) -> Option<SkillId> {
        self.pending
    }

    pub fn take(&mut self) -> Option<SkillId> {
        self.pending.take()
    }

    /// Drops the request if it points at `id`.
    pub fn forget(&mut self, id: SkillId) {
        if self.pending == Some(id) {
            self.pending = None;
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
